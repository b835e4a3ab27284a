use fltk::{
    app::{self, Sender},
    button::Button,
    enums::{Event, FrameType},
    misc::HelpView,
    prelude::*,
    window::Window,
};

use super::overlay::Overlay;
use super::panel::{PANEL_HEIGHT, PANEL_WIDTH, PanelWidgets};
use crate::app::domain::messages::Message;

pub const WINDOW_WIDTH: i32 = 1000;
pub const WINDOW_HEIGHT: i32 = 760;

const TOGGLE_SIZE: i32 = 56;
const EDGE: i32 = 24;

pub const TOGGLE_OPEN_LABEL: &str = "@+";
pub const TOGGLE_CLOSE_LABEL: &str = "@1+";

pub struct MainWidgets {
    pub wind: Window,
    pub page: HelpView,
    pub overlay: Overlay,
    pub panel: PanelWidgets,
    pub toggle: Button,
}

pub fn build_main_window(sender: &Sender<Message>) -> MainWidgets {
    let mut wind = Window::new(100, 100, WINDOW_WIDTH, WINDOW_HEIGHT, "Accessibility Widget Demo");
    wind.set_xclass("a11y-widget");

    let page = HelpView::new(0, 0, WINDOW_WIDTH, WINDOW_HEIGHT, None);

    // Stacking order: page, reading guide, panel, toggle, cursor.
    let mut overlay = Overlay::new(0, 0, WINDOW_WIDTH, WINDOW_HEIGHT);

    let toggle_x = WINDOW_WIDTH - EDGE - TOGGLE_SIZE;
    let toggle_y = WINDOW_HEIGHT - EDGE - TOGGLE_SIZE;
    let panel = PanelWidgets::new(
        WINDOW_WIDTH - EDGE - PANEL_WIDTH,
        toggle_y - 16 - PANEL_HEIGHT,
        sender,
    );

    let mut toggle = Button::new(toggle_x, toggle_y, TOGGLE_SIZE, TOGGLE_SIZE, TOGGLE_OPEN_LABEL);
    toggle.set_frame(FrameType::OFlatFrame);
    toggle.set_label_size(22);
    toggle.set_tooltip("Accessibility Options");
    let s = *sender;
    toggle.set_callback(move |_| s.send(Message::TogglePanel));

    overlay.add_cursor_layer(0, 0, WINDOW_WIDTH, WINDOW_HEIGHT);

    wind.end();

    let s = *sender;
    wind.handle(move |_, event| match event {
        Event::Move | Event::Drag => {
            s.send(Message::PointerMoved(app::event_x(), app::event_y()));
            false
        }
        _ => false,
    });

    let s = *sender;
    wind.set_callback(move |_| {
        if app::event() == Event::Close {
            s.send(Message::WindowClose);
        }
    });

    MainWidgets {
        wind,
        page,
        overlay,
        panel,
        toggle,
    }
}
