use std::f64::consts::PI;

use crate::anim::interpolate;

/// The ring's owned state: a progress target plus the dash-offset and
/// readout currently on screen, both interpolated from the normalized
/// clock position.
#[derive(Debug, Clone)]
pub struct RingState {
    progress: f64,
    radius: f64,
    stroke_width: f64,
    circumference: f64,
    dash_offset: f64,
    readout: f64,
}

impl RingState {
    pub fn new(radius: f64, stroke_width: f64, progress: f64) -> Self {
        let mut state = Self {
            progress: progress % 100.0,
            radius,
            stroke_width,
            circumference: (2.0 * PI * radius).round(),
            dash_offset: 0.0,
            readout: 0.0,
        };
        state.apply_frame(0.0);
        state
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn stroke_width(&self) -> f64 {
        self.stroke_width
    }

    pub fn circumference(&self) -> f64 {
        self.circumference
    }

    pub fn dash_offset(&self) -> f64 {
        self.dash_offset
    }

    pub fn readout(&self) -> f64 {
        self.readout
    }

    pub fn hub(&self) -> f64 {
        self.radius + self.stroke_width
    }

    /// Widget edge length, ring plus stroke padding on every side.
    pub fn size(&self) -> f64 {
        self.hub() * 2.0
    }

    /// Retargets the ring; progress is a percent on a scale of 100 and
    /// wraps past it.
    pub fn set_progress(&mut self, progress: f64) {
        self.progress = progress % 100.0;
    }

    /// Applies one normalized clock sample in [0, 1]: an empty ring at 0,
    /// the configured progress at 1.
    pub fn apply_frame(&mut self, t: f64) {
        let full = self.circumference;
        let target_offset = (full * (1.0 - self.progress * 0.01)).round();
        self.dash_offset = interpolate(t, (0.0, 1.0), (full, target_offset));
        self.readout = interpolate(t, (0.0, 1.0), (0.0, self.progress.round()));
    }
}
