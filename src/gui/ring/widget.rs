use gtk::prelude::*;
use gtk4 as gtk;
use relm4::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use crate::anim::{Easing, FrameDriver, Timeline};
use crate::config::RingSettings;
use crate::gui::theme;

use super::model::RingState;
use super::view::{self, RingStyle};

/// The fixed-progress ring: a faint full track under a dash-offset arc
/// that sweeps from empty to the configured percentage, with the readout
/// counting up alongside.
pub struct RingModel {
    pub state: Rc<RefCell<RingState>>,
    driver: FrameDriver,
    duration: Duration,
    easing: Easing,
    drawing_area: gtk::DrawingArea,
}

#[derive(Debug)]
pub enum RingMsg {
    Frame(f64),
    SetProgress(f64),
}

#[relm4::component(pub)]
impl SimpleComponent for RingModel {
    type Init = RingSettings;
    type Input = RingMsg;
    type Output = ();

    view! {
        #[root]
        gtk::DrawingArea {
            set_content_width: size as i32,
            set_content_height: size as i32,
        }
    }

    fn init(
        settings: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let state = RingState::new(settings.radius, settings.stroke_width, settings.progress);
        let size = state.size();
        let state = Rc::new(RefCell::new(state));

        let mut model = RingModel {
            state: state.clone(),
            driver: FrameDriver::new(&root),
            duration: Duration::from_millis(settings.duration_ms),
            easing: settings.easing,
            drawing_area: root.clone(),
        };

        let widgets = view_output!();

        let style = RingStyle {
            color: theme::parse_color(&settings.color),
            track_opacity: settings.opacity,
        };
        root.set_draw_func(move |_, cr, _, _| {
            if let Err(e) = view::draw(cr, &state.borrow(), &style) {
                log::error!("Drawing error: {}", e);
            }
        });

        model.run_clock(&sender);

        ComponentParts { model, widgets }
    }

    fn update(&mut self, msg: Self::Input, sender: ComponentSender<Self>) {
        match msg {
            RingMsg::Frame(t) => {
                self.state.borrow_mut().apply_frame(t);
                self.drawing_area.queue_draw();
            }
            RingMsg::SetProgress(progress) => {
                self.state.borrow_mut().set_progress(progress);
                log::debug!("Ring retarget to {}%", self.state.borrow().progress());
                self.run_clock(&sender);
            }
        }
    }
}

impl RingModel {
    /// Restarts the normalized clock; the destination ranges live in the
    /// state, so the run itself is always 0 to 1.
    fn run_clock(&mut self, sender: &ComponentSender<Self>) {
        let timeline = Timeline::new(0.0, 1.0, self.duration, self.easing);
        let sender = sender.clone();
        self.driver
            .start(timeline, move |t| sender.input(RingMsg::Frame(t)));
    }
}
