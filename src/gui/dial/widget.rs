use gtk::prelude::*;
use gtk4 as gtk;
use relm4::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use crate::anim::{Easing, FrameDriver, Timeline};
use crate::config::DialSettings;
use crate::geometry::Point;
use crate::gui::theme;

use super::model::DialState;
use super::view::{self, DialStyle};

/// The adjustable value dial: a circular track with a draggable blob, a
/// value arc and a numeric readout. Animates to its configured start
/// value on mount; dragging takes over directly, bypassing animation.
pub struct DialModel {
    pub state: Rc<RefCell<DialState>>,
    driver: FrameDriver,
    duration: Duration,
    easing: Easing,
    drawing_area: gtk::DrawingArea,
}

#[derive(Debug)]
pub enum DialMsg {
    Press(Point),
    DragTo(Point),
    Release,
    Frame(f64),
    SetValue(f64),
}

#[relm4::component(pub)]
impl SimpleComponent for DialModel {
    type Init = DialSettings;
    type Input = DialMsg;
    type Output = ();

    view! {
        #[root]
        gtk::DrawingArea {
            set_content_width: size as i32,
            set_content_height: size as i32,

            add_controller = gtk::GestureDrag {
                set_button: 0, // Listen to all buttons
                connect_drag_begin[sender] => move |_, x, y| {
                    sender.input(DialMsg::Press(Point::new(x, y)));
                },
                connect_drag_update[sender] => move |gesture, dx, dy| {
                    if let Some((x, y)) = gesture.start_point() {
                        sender.input(DialMsg::DragTo(Point::new(x + dx, y + dy)));
                    }
                },
                connect_drag_end[sender] => move |_, _, _| {
                    sender.input(DialMsg::Release);
                },
            },
        }
    }

    fn init(
        settings: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let center = settings
            .center_x
            .zip(settings.center_y)
            .map(|(x, y)| Point::new(x, y));
        let state = DialState::new(
            settings.radius,
            settings.blob_radius,
            settings.maximum_value,
            settings.initial_value,
            center,
        );
        let size = state.size();
        let state = Rc::new(RefCell::new(state));

        let mut model = DialModel {
            state: state.clone(),
            driver: FrameDriver::new(&root),
            duration: Duration::from_millis(settings.duration_ms),
            easing: settings.easing,
            drawing_area: root.clone(),
        };

        let widgets = view_output!();

        let style = DialStyle {
            color: theme::parse_color(&settings.color),
            track_opacity: settings.opacity,
            track_width: settings.stroke_width,
            arc_width: settings.blob_width,
        };
        root.set_draw_func(move |_, cr, _, _| {
            if let Err(e) = view::draw(cr, &state.borrow(), &style) {
                log::error!("Drawing error: {}", e);
            }
        });

        // mount animation sweeps in from zero
        model.animate(0.0, settings.initial_value, &sender);

        ComponentParts { model, widgets }
    }

    fn update(&mut self, msg: Self::Input, sender: ComponentSender<Self>) {
        match msg {
            DialMsg::Press(_) => {
                self.state.borrow_mut().begin_drag();
            }
            DialMsg::DragTo(pointer) => {
                if self.state.borrow_mut().drag_to(pointer) {
                    self.drawing_area.queue_draw();
                }
            }
            DialMsg::Release => {
                self.state.borrow_mut().end_drag();
            }
            DialMsg::Frame(sample) => {
                self.state.borrow_mut().apply_frame(sample);
                self.drawing_area.queue_draw();
            }
            DialMsg::SetValue(target) => {
                let from = self.state.borrow().value();
                log::debug!("Dial retarget {} -> {}", from, target);
                self.animate(from, target, &sender);
            }
        }
    }
}

impl DialModel {
    /// Starts (or supersedes) a run toward `to`; each frame comes back in
    /// as `DialMsg::Frame`.
    fn animate(&mut self, from: f64, to: f64, sender: &ComponentSender<Self>) {
        let timeline = Timeline::new(from, to, self.duration, self.easing);
        let sender = sender.clone();
        self.driver
            .start(timeline, move |sample| sender.input(DialMsg::Frame(sample)));
    }
}
