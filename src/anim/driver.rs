use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use gdk4 as gdk;
use gtk::prelude::*;
use gtk4 as gtk;

use super::Timeline;

/// Owns a widget tick callback for the lifetime of one animation run.
///
/// `start` supersedes any in-flight run; the callback detaches itself the
/// moment its timeline finishes, and `Drop` detaches a still-running one,
/// so a dropped widget never leaks a frame listener.
pub struct FrameDriver {
    widget: gtk::Widget,
    active: Rc<Cell<bool>>,
    tick_id: Option<gtk::TickCallbackId>,
}

impl FrameDriver {
    pub fn new(widget: &impl IsA<gtk::Widget>) -> Self {
        Self {
            widget: widget.clone().upcast(),
            active: Rc::new(Cell::new(false)),
            tick_id: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.active.get()
    }

    /// Runs `timeline` on the frame clock, feeding each sampled scalar to
    /// `on_frame`. The first tick samples t=0; the final tick delivers the
    /// target exactly and stops the clock.
    pub fn start<F: Fn(f64) + 'static>(&mut self, timeline: Timeline, on_frame: F) {
        self.stop();

        let active = Rc::new(Cell::new(true));
        self.active = active.clone();

        let started: Cell<Option<i64>> = Cell::new(None);
        self.tick_id = Some(self.widget.add_tick_callback(move |_, clock: &gdk::FrameClock| {
            if !active.get() {
                return glib::ControlFlow::Break;
            }

            let now = clock.frame_time();
            let start = started.get().unwrap_or_else(|| {
                started.set(Some(now));
                now
            });
            let elapsed = Duration::from_micros((now - start).max(0) as u64);

            on_frame(timeline.sample(elapsed));

            if timeline.is_finished(elapsed) {
                active.set(false);
                glib::ControlFlow::Break
            } else {
                glib::ControlFlow::Continue
            }
        }));
    }

    pub fn stop(&mut self) {
        if let Some(id) = self.tick_id.take() {
            // A callback that broke on its own already detached; its id is
            // stale and must not be removed again.
            if self.active.get() {
                id.remove();
            }
        }
        self.active.set(false);
    }
}

impl Drop for FrameDriver {
    fn drop(&mut self) {
        self.stop();
    }
}
