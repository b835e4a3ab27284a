use fltk::{app, prelude::*};
use tracing::info;

use a11y_widget::app::domain::messages::Message;
use a11y_widget::app::infrastructure::logging::init_logging;
use a11y_widget::app::state::AppState;
use a11y_widget::app::{AccessibilityController, FileStorage, SettingsStore};
use a11y_widget::ui::main_window::build_main_window;

fn main() {
    init_logging();

    let app = app::App::default();
    let (sender, receiver) = app::channel::<Message>();

    let storage = FileStorage::in_config_dir();
    info!(path = %storage.path().display(), "loading accessibility settings");
    let store = SettingsStore::load(Box::new(storage));

    let mut widgets = build_main_window(&sender);
    widgets.wind.show();

    let mut state = AppState::new(widgets, AccessibilityController::new(store));

    while app.wait() {
        if let Some(msg) = receiver.recv() {
            match msg {
                Message::TogglePanel => state.toggle_panel(),
                Message::ResetSettings => state.reset_settings(),
                Message::PercentChanged(field, value) => state.percent_changed(field, value),
                Message::PercentStep(field, direction) => state.percent_step(field, direction),
                Message::Flip(toggle) => state.flip(toggle),
                Message::Choose(setting) => state.choose(setting),
                Message::PointerMoved(x, y) => state.pointer_moved(x, y),
                Message::WindowClose => app.quit(),
            }
        }
    }
}
