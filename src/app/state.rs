use std::cell::RefCell;
use std::rc::Rc;

use fltk::{enums::Cursor, prelude::*};
use tracing::info;

use super::controllers::accessibility::AccessibilityController;
use super::controllers::panel::{PanelController, SharedAccessibility, StepDirection, Toggle};
use super::domain::settings::{PercentField, Setting};
use super::infrastructure::pointer::PointerHub;
use crate::ui::main_window::{MainWidgets, TOGGLE_CLOSE_LABEL, TOGGLE_OPEN_LABEL};
use crate::ui::overlay::cursor_height;
use crate::ui::page::render_page_html;
use crate::ui::theme::{Palette, apply_theme};

pub struct AppState {
    pub widgets: MainWidgets,
    pub accessibility: SharedAccessibility,
    pub panel: PanelController,
    pub pointer: Rc<PointerHub>,
}

impl AppState {
    pub fn new(widgets: MainWidgets, accessibility: AccessibilityController) -> Self {
        let accessibility = Rc::new(RefCell::new(accessibility));
        let pointer = Rc::new(PointerHub::new());
        let panel = PanelController::new(accessibility.clone(), pointer.clone());
        let mut state = Self {
            widgets,
            accessibility,
            panel,
            pointer,
        };
        state.render();
        state
    }

    pub fn toggle_panel(&mut self) {
        self.panel.toggle();
        let open = self.panel.is_open();
        self.widgets.panel.set_visible(open);
        self.widgets
            .toggle
            .set_label(if open { TOGGLE_CLOSE_LABEL } else { TOGGLE_OPEN_LABEL });
        self.widgets.toggle.set_tooltip(if open {
            "Close accessibility options"
        } else {
            "Accessibility Options"
        });
        self.widgets.wind.redraw();
    }

    pub fn reset_settings(&mut self) {
        self.panel.reset();
        info!("accessibility settings reset");
        self.render();
    }

    pub fn percent_changed(&mut self, field: PercentField, raw: f64) {
        self.panel.set_percent(field, raw);
        self.render();
    }

    pub fn percent_step(&mut self, field: PercentField, direction: StepDirection) {
        self.panel.step(field, direction);
        self.render();
    }

    pub fn flip(&mut self, toggle: Toggle) {
        self.panel.flip(toggle);
        self.render();
    }

    pub fn choose(&mut self, setting: Setting) {
        self.panel.choose(setting);
        self.render();
    }

    /// Forward the pointer to guide subscribers and move the overlays.
    pub fn pointer_moved(&mut self, x: i32, y: i32) {
        self.pointer.publish(y);

        let needs_redraw = {
            let mut overlay = self.widgets.overlay.state.borrow_mut();
            overlay.pointer = Some((x, y));
            if self.panel.guide().is_active() {
                overlay.guide_y = Some(self.guide_line_y());
            }
            overlay.guide_y.is_some() || overlay.cursor_height.is_some()
        };
        if needs_redraw {
            self.widgets.wind.redraw();
        }
    }

    fn guide_line_y(&self) -> i32 {
        let page = &self.widgets.page;
        self.panel.guide().line_y(page.y(), page.h())
    }

    /// Push the current presentation state into every widget.
    pub fn render(&mut self) {
        let settings = self.panel.settings();
        let presentation = self.accessibility.borrow().presentation().clone();
        let palette = Palette::for_presentation(&presentation);

        let widgets = &mut self.widgets;
        widgets.panel.refresh(&settings);
        widgets.panel.apply_palette(&palette);

        // HelpView resets its scroll position on set_value
        let top = widgets.page.top_line();
        apply_theme(&mut widgets.page, &mut widgets.wind, &mut widgets.toggle, &presentation);
        widgets.page.set_value(&render_page_html(&presentation));
        widgets.page.set_top_line(top);

        let enlarged = cursor_height(&presentation);
        {
            let mut overlay = widgets.overlay.state.borrow_mut();
            overlay.cursor_height = enlarged;
            overlay.guide_color = Some(palette.guide);
            overlay.guide_y = None;
        }
        if self.panel.guide().is_active() {
            let y = self.guide_line_y();
            self.widgets.overlay.state.borrow_mut().guide_y = Some(y);
        }

        let cursor = if enlarged.is_some() {
            Cursor::None
        } else {
            Cursor::Default
        };
        self.widgets.wind.set_cursor(cursor);
        self.widgets.wind.redraw();
    }
}
