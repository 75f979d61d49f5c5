use cairo::Context;
use palette::Srgba;
use std::f64::consts::{FRAC_PI_2, PI};

use super::READOUT_FONT_FACTOR;
use super::model::RingState;

#[derive(Debug, Clone)]
pub struct RingStyle {
    pub color: Srgba<f64>,
    pub track_opacity: f64,
}

pub fn draw(cr: &Context, state: &RingState, style: &RingStyle) -> Result<(), cairo::Error> {
    draw_track(cr, state, style)?;
    draw_progress_arc(cr, state, style)?;
    draw_readout(cr, state, style)
}

fn set_source(cr: &Context, color: Srgba<f64>, alpha: f64) {
    let (r, g, b, _) = color.into_components();
    cr.set_source_rgba(r, g, b, alpha.clamp(0.0, 1.0));
}

fn draw_track(cr: &Context, state: &RingState, style: &RingStyle) -> Result<(), cairo::Error> {
    let hub = state.hub();
    set_source(cr, style.color, style.track_opacity);
    cr.set_line_width(state.stroke_width());
    cr.arc(hub, hub, state.radius(), 0.0, 2.0 * PI);
    cr.stroke()
}

/// The progress arc is a full circle with a one-dash pattern: offsetting
/// the dash by up to one circumference hides the tail of the ring, so the
/// visible share tracks the animated offset.
fn draw_progress_arc(
    cr: &Context,
    state: &RingState,
    style: &RingStyle,
) -> Result<(), cairo::Error> {
    let hub = state.hub();

    cr.save()?;
    // rotate so the arc grows from the top of the ring
    cr.translate(hub, hub);
    cr.rotate(-FRAC_PI_2);
    cr.translate(-hub, -hub);

    set_source(cr, style.color, 1.0);
    cr.set_line_width(state.stroke_width());
    cr.set_line_cap(cairo::LineCap::Round);
    cr.set_dash(&[state.circumference()], state.dash_offset());
    cr.arc(hub, hub, state.radius(), 0.0, 2.0 * PI);
    cr.stroke()?;

    cr.restore()
}

fn draw_readout(cr: &Context, state: &RingState, style: &RingStyle) -> Result<(), cairo::Error> {
    let hub = state.hub();
    let text = format!("{:.0}", state.readout());

    set_source(cr, style.color, 1.0);
    cr.select_font_face("Sans", cairo::FontSlant::Normal, cairo::FontWeight::Bold);
    cr.set_font_size(state.radius() * READOUT_FONT_FACTOR);
    if let Ok(ext) = cr.text_extents(&text) {
        cr.move_to(hub - ext.width() / 2.0, hub + ext.height() / 2.0);
        cr.show_text(&text)?;
    }
    Ok(())
}
