use cairo::Context;
use palette::Srgba;
use std::f64::consts::PI;

use super::READOUT_FONT_FACTOR;
use super::model::DialState;

/// Visual options fixed for the widget's lifetime.
#[derive(Debug, Clone)]
pub struct DialStyle {
    pub color: Srgba<f64>,
    pub track_opacity: f64,
    pub track_width: f64,
    pub arc_width: f64,
}

pub fn draw(cr: &Context, state: &DialState, style: &DialStyle) -> Result<(), cairo::Error> {
    draw_track(cr, state, style)?;
    draw_value_arc(cr, state, style)?;
    draw_blob(cr, state, style)?;
    draw_readout(cr, state, style)
}

fn set_source(cr: &Context, color: Srgba<f64>, alpha: f64) {
    let (r, g, b, _) = color.into_components();
    // the validator allows opacity up to 10; cairo alpha tops out at 1
    cr.set_source_rgba(r, g, b, alpha.clamp(0.0, 1.0));
}

fn draw_track(cr: &Context, state: &DialState, style: &DialStyle) -> Result<(), cairo::Error> {
    let hub = state.hub();
    set_source(cr, style.color, style.track_opacity);
    cr.set_line_width(style.track_width);
    cr.arc(hub, hub, state.radius(), 0.0, 2.0 * PI);
    cr.stroke()
}

fn draw_value_arc(cr: &Context, state: &DialState, style: &DialStyle) -> Result<(), cairo::Error> {
    if state.angle() <= 0.0 {
        return Ok(());
    }

    let hub = state.hub();
    set_source(cr, style.color, 1.0);
    cr.set_line_width(style.arc_width);
    // cairo sweeps clockwise from angle1 to angle2; -90° puts 0° on top
    cr.arc(
        hub,
        hub,
        state.radius(),
        (-90.0_f64).to_radians(),
        (state.angle() - 90.0).to_radians(),
    );
    cr.stroke()
}

fn draw_blob(cr: &Context, state: &DialState, style: &DialStyle) -> Result<(), cairo::Error> {
    let blob = state.blob_center();
    set_source(cr, style.color, 1.0);
    cr.arc(blob.x, blob.y, state.blob_radius(), 0.0, 2.0 * PI);
    cr.fill()
}

fn draw_readout(cr: &Context, state: &DialState, style: &DialStyle) -> Result<(), cairo::Error> {
    set_source(cr, style.color, 1.0);
    cr.select_font_face("Sans", cairo::FontSlant::Normal, cairo::FontWeight::Bold);
    cr.set_font_size(state.radius() * READOUT_FONT_FACTOR);
    cr.move_to(
        state.radius() - state.blob_radius(),
        state.radius() + 2.0 * state.blob_radius(),
    );
    cr.show_text(&format!("{:.0}", state.value()))
}
