use gtk::prelude::*;
use gtk4 as gtk;
use relm4::prelude::*;

use crate::config::{self, Settings};
use crate::events::AppEvent;
use crate::gui::dial::{DialModel, DialMsg};
use crate::gui::ring::{RingModel, RingMsg};
use crate::gui::theme;

/// The demo host: both widgets side by side on a dark background, fed by
/// the control socket and the config watcher.
pub struct AppModel {
    dial: Controller<DialModel>,
    ring: Controller<RingModel>,
}

#[derive(Debug)]
pub enum AppMsg {
    SetValue(f64),
    SetProgress(f64),
    ConfigReload,
}

impl From<AppEvent> for AppMsg {
    fn from(event: AppEvent) -> Self {
        match event {
            AppEvent::SetValue(v) => AppMsg::SetValue(v),
            AppEvent::SetProgress(p) => AppMsg::SetProgress(p),
            AppEvent::ConfigReload => AppMsg::ConfigReload,
        }
    }
}

#[relm4::component(pub)]
impl SimpleComponent for AppModel {
    type Init = (Settings, async_channel::Receiver<AppEvent>);
    type Input = AppMsg;
    type Output = ();

    view! {
        #[root]
        gtk::ApplicationWindow {
            set_title: Some("arcdial"),
            add_css_class: "arcdial-window",

            gtk::Box {
                set_orientation: gtk::Orientation::Horizontal,
                set_spacing: 48,
                set_halign: gtk::Align::Center,
                set_valign: gtk::Align::Center,
                set_margin_all: 48,

                append: model.dial.widget(),
                append: model.ring.widget(),
            }
        }
    }

    fn init(
        init: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let (settings, rx) = init;

        theme::load_css();

        let dial = DialModel::builder().launch(settings.dial).detach();
        let ring = RingModel::builder().launch(settings.ring).detach();

        let model = AppModel { dial, ring };

        let widgets = view_output!();

        let sender_clone = sender.clone();
        relm4::spawn(async move {
            while let Ok(event) = rx.recv().await {
                sender_clone.input(AppMsg::from(event));
            }
        });

        ComponentParts { model, widgets }
    }

    fn update(&mut self, msg: Self::Input, _sender: ComponentSender<Self>) {
        match msg {
            AppMsg::SetValue(value) => {
                self.dial.emit(DialMsg::SetValue(value));
            }
            AppMsg::SetProgress(progress) => {
                self.ring.emit(RingMsg::SetProgress(progress));
            }
            AppMsg::ConfigReload => match config::load_config() {
                Ok(settings) => {
                    // Values retarget live; geometry and colors apply on
                    // the next start.
                    self.dial.emit(DialMsg::SetValue(settings.dial.initial_value));
                    self.ring.emit(RingMsg::SetProgress(settings.ring.progress));
                    log::info!("Configuration reloaded");
                }
                Err(e) => log::error!("Failed to reload config: {}", e),
            },
        }
    }
}
