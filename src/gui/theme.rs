use derive_more::{AsRef, Deref, Display, From, Into};
use gtk::gdk;
use gtk::prelude::*;
use gtk4 as gtk;
use palette::Srgba;
use serde::{Deserialize, Serialize};

use super::DEFAULT_COLOR;

/// A color as the caller wrote it: a CSS color name or `#rrggbb`.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, Deref, From, Into, AsRef,
)]
#[serde(transparent)]
pub struct ColorSpec(String);

crate::impl_string_newtype!(ColorSpec);

impl Default for ColorSpec {
    fn default() -> Self {
        Self::new(DEFAULT_COLOR)
    }
}

pub const FALLBACK_COLOR: Srgba<f64> = Srgba::new(0.0, 1.0, 1.0, 1.0);

/// Resolves a color spec, falling back to cyan for anything unknown.
/// Unknown specs are a warning, not an error, like the rest of the
/// configuration surface.
pub fn parse_color(spec: &ColorSpec) -> Srgba<f64> {
    resolve_color(spec).unwrap_or_else(|| {
        log::warn!("Unknown color '{}', using fallback", spec);
        FALLBACK_COLOR
    })
}

fn resolve_color(spec: &ColorSpec) -> Option<Srgba<f64>> {
    if let Some(hex) = spec.strip_prefix('#') {
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        return Some(Srgba::new(
            r as f64 / 255.0,
            g as f64 / 255.0,
            b as f64 / 255.0,
            1.0,
        ));
    }

    palette::named::from_str(spec.as_str()).map(|c| {
        let c = c.into_format::<f64>();
        Srgba::new(c.red, c.green, c.blue, 1.0)
    })
}

pub fn load_css() {
    let provider = gtk::CssProvider::new();
    let css_data = "
.arcdial-window {
    background-color: black;
}
";
    provider.load_from_data(css_data);

    if let Some(display) = gdk::Display::default() {
        gtk::style_context_add_provider_for_display(
            &display,
            &provider,
            gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_color_resolves() {
        assert_eq!(
            parse_color(&ColorSpec::new("cyan")),
            Srgba::new(0.0, 1.0, 1.0, 1.0)
        );
    }

    #[test]
    fn test_hex_color_resolves() {
        assert_eq!(
            parse_color(&ColorSpec::new("#ff8800")),
            Srgba::new(1.0, 136.0 / 255.0, 0.0, 1.0)
        );
    }

    #[test]
    fn test_unknown_color_falls_back() {
        assert_eq!(parse_color(&ColorSpec::new("definitely-not-a-color")), FALLBACK_COLOR);
        assert_eq!(parse_color(&ColorSpec::new("#12")), FALLBACK_COLOR);
    }
}
