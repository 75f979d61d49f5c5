use arcdial::config;
use arcdial::gui::app::AppModel;
use arcdial::sys::runtime;
use relm4::prelude::*;

fn main() {
    env_logger::init();

    let settings = config::load_or_setup();

    let (tx, rx) = async_channel::bounded(32);

    // Start Background Services
    runtime::start_background_services(tx);

    let app = RelmApp::new("org.arcdial.demo");

    app.run::<AppModel>((settings, rx));
}
