use crate::geometry::{self, Point};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragPhase {
    #[default]
    Idle,
    Dragging,
}

/// The dial's owned state. Mutated by the drag state machine or by
/// animation frames, whichever event arrives last; these methods are the
/// only mutation path.
#[derive(Debug, Clone)]
pub struct DialState {
    value: f64,
    angle: f64,
    phase: DragPhase,
    radius: f64,
    blob_radius: f64,
    maximum_value: f64,
    origin: Point,
}

impl DialState {
    /// `center` is an absolute pointer-to-angle reference point for hosts
    /// that report pointer positions in some larger coordinate space.
    /// Unset, pointer positions are taken as widget-local.
    pub fn new(
        radius: f64,
        blob_radius: f64,
        maximum_value: f64,
        initial_value: f64,
        center: Option<Point>,
    ) -> Self {
        let hub = geometry::hub(radius, blob_radius);
        let origin = center
            .map(|c| Point::new(c.x - hub, c.y - hub))
            .unwrap_or_default();

        Self {
            value: initial_value,
            angle: geometry::value_to_angle(initial_value, maximum_value),
            phase: DragPhase::Idle,
            radius,
            blob_radius,
            maximum_value,
            origin,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn blob_radius(&self) -> f64 {
        self.blob_radius
    }

    pub fn maximum_value(&self) -> f64 {
        self.maximum_value
    }

    pub fn hub(&self) -> f64 {
        geometry::hub(self.radius, self.blob_radius)
    }

    /// Widget edge length: the circle plus blob padding on every side.
    pub fn size(&self) -> f64 {
        self.hub() * 2.0
    }

    pub fn blob_center(&self) -> Point {
        geometry::polar_to_cartesian(self.angle, self.radius, self.blob_radius)
    }

    /// Any press starts a drag; the whole widget is the hit region.
    pub fn begin_drag(&mut self) {
        self.phase = DragPhase::Dragging;
    }

    /// Moves the dial to the pointer. Returns true when the displayed
    /// state changed. The derived value is deliberately not clamped to
    /// [0, maximum_value]; the geometry keeps on-widget pointers inside
    /// one turn.
    pub fn drag_to(&mut self, pointer: Point) -> bool {
        if self.phase != DragPhase::Dragging {
            return false;
        }

        let local = Point::new(pointer.x - self.origin.x, pointer.y - self.origin.y);
        let angle = geometry::cartesian_to_polar(local, self.radius, self.blob_radius);
        let value = geometry::angle_to_value(angle, self.maximum_value);

        let changed = angle != self.angle || value != self.value;
        self.angle = angle;
        self.value = value;
        changed
    }

    pub fn end_drag(&mut self) {
        self.phase = DragPhase::Idle;
    }

    /// Applies one animation frame sample. Frames and drags interleave
    /// last-write-wins; a frame does not end an active drag.
    pub fn apply_frame(&mut self, sample: f64) {
        let value = sample.round();
        self.value = value;
        self.angle = geometry::value_to_angle(value, self.maximum_value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> DialState {
        // The drag scenario geometry: radius 80, blob 15, hub at 95,
        // pointer positions reported relative to a (100, 100) center.
        DialState::new(80.0, 15.0, 25.0, 0.0, Some(Point::new(100.0, 100.0)))
    }

    #[test]
    fn test_initial_angle_derives_from_value() {
        let s = DialState::new(100.0, 15.0, 25.0, 15.0, None);
        assert_eq!(s.value(), 15.0);
        assert_eq!(s.angle(), 216.0);
        assert_eq!(s.phase(), DragPhase::Idle);
        assert_eq!(s.size(), 230.0);
    }

    #[test]
    fn test_drag_needs_a_press_first() {
        let mut s = state();
        assert!(!s.drag_to(Point::new(195.0, 100.0)));
        assert_eq!(s.value(), 0.0);
    }

    #[test]
    fn test_press_drag_release_cycle() {
        let mut s = state();

        s.begin_drag();
        assert_eq!(s.phase(), DragPhase::Dragging);

        assert!(s.drag_to(Point::new(195.0, 100.0)));
        assert_eq!(s.phase(), DragPhase::Dragging);

        s.end_drag();
        assert_eq!(s.phase(), DragPhase::Idle);
        // no snap-back on release
        assert_eq!(s.angle(), 90.0);
    }

    #[test]
    fn test_pointer_above_center_is_angle_zero() {
        let mut s = state();
        s.begin_drag();
        s.drag_to(Point::new(100.0, 0.0));
        assert_eq!(s.angle(), 0.0);
        assert_eq!(s.value(), 0.0);
    }

    #[test]
    fn test_pointer_right_of_hub_is_quarter_turn() {
        let mut s = state();
        s.begin_drag();
        s.drag_to(Point::new(195.0, 100.0));
        assert_eq!(s.angle(), 90.0);
        assert_eq!(s.value(), (25.0_f64 / 4.0).round());
    }

    #[test]
    fn test_drag_keeps_value_consistent_with_angle() {
        let mut s = state();
        s.begin_drag();
        for pointer in [
            Point::new(170.0, 40.0),
            Point::new(60.0, 180.0),
            Point::new(20.0, 90.0),
        ] {
            s.drag_to(pointer);
            assert_eq!(s.value(), crate::geometry::angle_to_value(s.angle(), 25.0));
        }
    }

    #[test]
    fn test_frame_rounds_and_recomputes_angle() {
        let mut s = DialState::new(100.0, 15.0, 25.0, 0.0, None);
        s.apply_frame(7.4);
        assert_eq!(s.value(), 7.0);
        assert_eq!(s.angle(), 101.0);
        assert_eq!(
            s.angle(),
            crate::geometry::value_to_angle(s.value(), s.maximum_value())
        );
    }

    #[test]
    fn test_frames_apply_during_a_drag_last_write_wins() {
        let mut s = state();
        s.begin_drag();
        s.drag_to(Point::new(195.0, 100.0));
        s.apply_frame(2.0);
        assert_eq!(s.value(), 2.0);
        assert_eq!(s.phase(), DragPhase::Dragging);
    }

    #[test]
    fn test_blob_sits_on_the_circle() {
        let s = DialState::new(80.0, 15.0, 25.0, 0.0, None);
        let blob = s.blob_center();
        assert_eq!(blob, Point::new(95.0, 15.0));
    }
}
