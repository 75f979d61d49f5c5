//! Time-based value transitions sampled on the GTK frame clock.

mod driver;
mod easing;
mod timeline;

pub use driver::FrameDriver;
pub use easing::{Easing, ease};
pub use timeline::{Timeline, interpolate};
