pub mod model;
pub mod view;
pub mod widget;

pub use model::RingState;
pub use widget::{RingModel, RingMsg};

pub const DEFAULT_RADIUS: f64 = 80.0;
pub const DEFAULT_STROKE_WIDTH: f64 = 10.0;
pub const DEFAULT_PROGRESS: f64 = 25.0;
pub const DEFAULT_DURATION_MS: u64 = 200;

/// Readout glyph height relative to the ring radius.
pub const READOUT_FONT_FACTOR: f64 = 0.5;
