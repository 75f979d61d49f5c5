//! Pure value/angle/cartesian mapping for circular dials.
//!
//! All angles are degrees with 0° at the top of the circle, increasing
//! clockwise. Callers keep angles in [0, 360); nothing here wraps.

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The geometric center of a dial in widget coordinates: the circle
/// radius plus the padding (blob radius or stroke width) around it.
pub fn hub(radius: f64, pad: f64) -> f64 {
    radius + pad
}

pub fn value_to_angle(value: f64, max_value: f64) -> f64 {
    (value * 360.0 / max_value).round()
}

pub fn angle_to_value(angle_deg: f64, max_value: f64) -> f64 {
    (angle_deg * max_value / 360.0).round()
}

pub fn polar_to_cartesian(angle_deg: f64, radius: f64, pad: f64) -> Point {
    let hub = hub(radius, pad);
    // -90° so 0° points to the top instead of cairo's 3 o'clock
    let a = (angle_deg - 90.0).to_radians();
    Point::new(hub + radius * a.cos(), hub + radius * a.sin())
}

/// Maps a widget-coordinate point back to a dial angle.
///
/// The four axis-aligned directions are branched explicitly so the
/// arctangent never divides by zero; everything else lands in the right
/// half-turn via the x-side offset.
pub fn cartesian_to_polar(point: Point, radius: f64, pad: f64) -> f64 {
    let hub = hub(radius, pad);
    if point.x == hub {
        if point.y < hub { 0.0 } else { 180.0 }
    } else if point.y == hub {
        if point.x > hub { 90.0 } else { 270.0 }
    } else {
        let side = if point.x > hub { 90.0 } else { 270.0 };
        ((point.y - hub) / (point.x - hub)).atan().to_degrees().round() + side
    }
}
