use serde_with::{DeserializeFromStr, SerializeDisplay};
use strum::{Display as StrumDisplay, EnumString};

/// Timing curves shaping animation velocity. All of them are monotonic
/// on [0, 1] and hit both endpoints exactly.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    SerializeDisplay,
    DeserializeFromStr,
    EnumString,
    StrumDisplay,
)]
#[strum(ascii_case_insensitive)]
pub enum Easing {
    #[strum(serialize = "linear")]
    Linear,
    #[default]
    #[strum(serialize = "ease-out", serialize = "easeout", serialize = "out")]
    EaseOut,
    #[strum(serialize = "ease-in-out", serialize = "easeinout", serialize = "in-out")]
    EaseInOut,
}

/// Maps normalized elapsed time to a normalized progress fraction.
/// Inputs outside [0, 1] are clamped.
pub fn ease(easing: Easing, t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    match easing {
        Easing::Linear => t,
        Easing::EaseOut => 1.0 - (1.0 - t).powi(3),
        Easing::EaseInOut => {
            if t < 0.5 {
                4.0 * t * t * t
            } else {
                1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
            }
        }
    }
}
