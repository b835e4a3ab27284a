use fltk::{draw, enums::Color, prelude::*, widget::Widget};
use std::cell::RefCell;
use std::rc::Rc;

use super::theme::Rgb;
use crate::app::services::effects::{
    CLASS_CURSOR_EXTRA_LARGE, CLASS_CURSOR_LARGE, PresentationState,
};

pub const GUIDE_THICKNESS: i32 = 2;

/// Arrow height in pixels for the enlarged cursor flags, `None` for the
/// system cursor.
pub fn cursor_height(presentation: &PresentationState) -> Option<i32> {
    if presentation.has_class(CLASS_CURSOR_EXTRA_LARGE) {
        Some(64)
    } else if presentation.has_class(CLASS_CURSOR_LARGE) {
        Some(40)
    } else {
        None
    }
}

#[derive(Debug, Clone, Default)]
pub struct OverlayState {
    pub guide_y: Option<i32>,
    pub guide_color: Option<Rgb>,
    pub pointer: Option<(i32, i32)>,
    pub cursor_height: Option<i32>,
}

/// Non-interactive layers drawn over the page: the reading guide line (under
/// the panel) and the enlarged cursor (above everything). Neither handles
/// events, so clicks fall through to the widgets below.
pub struct Overlay {
    pub guide_layer: Widget,
    pub cursor_layer: Option<Widget>,
    pub state: Rc<RefCell<OverlayState>>,
}

impl Overlay {
    /// Create the guide layer. Call [`Overlay::add_cursor_layer`] after the
    /// panel widgets so the cursor stays on top.
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        let state = Rc::new(RefCell::new(OverlayState::default()));

        let mut guide_layer = Widget::new(x, y, w, h, None);
        let draw_state = state.clone();
        guide_layer.draw(move |wid| {
            let st = draw_state.borrow();
            if let (Some(gy), Some(color)) = (st.guide_y, st.guide_color) {
                draw::set_draw_color(color.color());
                draw::draw_rectf(wid.x(), gy - GUIDE_THICKNESS / 2, wid.w(), GUIDE_THICKNESS);
            }
        });

        Self {
            guide_layer,
            cursor_layer: None,
            state,
        }
    }

    pub fn add_cursor_layer(&mut self, x: i32, y: i32, w: i32, h: i32) {
        let mut cursor_layer = Widget::new(x, y, w, h, None);
        let draw_state = self.state.clone();
        cursor_layer.draw(move |_| {
            let st = draw_state.borrow();
            if let (Some((px, py)), Some(height)) = (st.pointer, st.cursor_height) {
                draw_arrow(px, py, height);
            }
        });
        self.cursor_layer = Some(cursor_layer);
    }
}

/// Classic arrow pointer with its hot spot at (x, y).
fn draw_arrow(x: i32, y: i32, height: i32) {
    let width = height * 2 / 3;
    let outline = 2;
    draw::set_draw_color(Color::White);
    draw::draw_polygon(
        x - outline,
        y - outline * 2,
        x - outline,
        y + height + outline,
        x + width + outline * 2,
        y + width + outline,
    );
    draw::set_draw_color(Color::Black);
    draw::draw_polygon(x, y, x, y + height, x + width, y + width);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::domain::settings::{AccessibilitySettings, CursorSize};

    #[test]
    fn test_cursor_height_follows_flags() {
        let size = |cursor_size| {
            cursor_height(&PresentationState::from_settings(&AccessibilitySettings {
                cursor_size,
                ..Default::default()
            }))
        };
        assert_eq!(size(CursorSize::Normal), None);
        assert_eq!(size(CursorSize::Large), Some(40));
        assert_eq!(size(CursorSize::ExtraLarge), Some(64));
    }
}
