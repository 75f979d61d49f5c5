pub mod model;
pub mod view;
pub mod widget;

pub use model::{DialState, DragPhase};
pub use widget::{DialModel, DialMsg};

pub const DEFAULT_RADIUS: f64 = 100.0;
pub const DEFAULT_BLOB_RADIUS: f64 = 15.0;
pub const DEFAULT_BLOB_WIDTH: f64 = 5.0;
pub const DEFAULT_TRACK_WIDTH: f64 = 7.0;
pub const DEFAULT_MAXIMUM_VALUE: f64 = 25.0;
pub const DEFAULT_DURATION_MS: u64 = 2000;

/// Readout glyph height relative to the dial radius.
pub const READOUT_FONT_FACTOR: f64 = 0.5;
