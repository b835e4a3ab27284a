use fltk::{
    app::Sender,
    button::{Button, CheckButton, RadioRoundButton},
    enums::{Align, FrameType},
    frame::Frame,
    group::Group,
    prelude::*,
    valuator::HorNiceSlider,
};

use super::theme::Palette;
use crate::app::controllers::panel::{StepDirection, Toggle};
use crate::app::domain::messages::Message;
use crate::app::domain::settings::{
    AccessibilitySettings, ContrastMode, CursorSize, PercentField, Setting, TextAlign,
};

pub const PANEL_WIDTH: i32 = 330;
pub const PANEL_HEIGHT: i32 = 520;

const PAD: i32 = 15;
const INNER_W: i32 = PANEL_WIDTH - 2 * PAD;
const ROW_H: i32 = 25;

struct PercentRow {
    field: PercentField,
    label: Frame,
    slider: HorNiceSlider,
}

/// Widgets of the floating settings surface. Every callback only sends a
/// [`Message`]; values are written back in [`PanelWidgets::refresh`].
pub struct PanelWidgets {
    pub group: Group,
    labels: Vec<Frame>,
    percent_rows: Vec<PercentRow>,
    step_buttons: Vec<Button>,
    reset_button: Button,
    contrast: Vec<(ContrastMode, RadioRoundButton)>,
    cursor: Vec<(CursorSize, RadioRoundButton)>,
    align: Vec<(TextAlign, RadioRoundButton)>,
    toggles: Vec<(Toggle, CheckButton)>,
}

fn section_label(x: i32, y: i32, text: &str) -> Frame {
    Frame::default()
        .with_pos(x, y)
        .with_size(INNER_W, 22)
        .with_label(text)
        .with_align(Align::Left | Align::Inside)
}

fn percent_label(field: PercentField, value: u32) -> String {
    format!("{}: {}%", field.label(), value)
}

fn slider(x: i32, y: i32, w: i32, field: PercentField, sender: &Sender<Message>) -> HorNiceSlider {
    let range = field.range();
    let mut slider = HorNiceSlider::default().with_pos(x, y).with_size(w, ROW_H);
    slider.set_bounds(f64::from(range.min), f64::from(range.max));
    slider.set_step(f64::from(range.step), 1);
    let s = *sender;
    slider.set_callback(move |sl| s.send(Message::PercentChanged(field, sl.value())));
    slider
}

/// One radio per option, in its own group so the rows stay independent.
fn radio_row<T: Copy + 'static>(
    x: i32,
    y: i32,
    options: &[T],
    label: impl Fn(T) -> &'static str,
    to_setting: impl Fn(T) -> Setting,
    sender: &Sender<Message>,
) -> Vec<(T, RadioRoundButton)> {
    let group = Group::default().with_pos(x, y).with_size(INNER_W, ROW_H);
    let width = INNER_W / options.len().max(1) as i32;
    let mut buttons = Vec::with_capacity(options.len());
    for (i, option) in options.iter().copied().enumerate() {
        let mut button = RadioRoundButton::default()
            .with_pos(x + i as i32 * width, y)
            .with_size(width, ROW_H)
            .with_label(label(option));
        let s = *sender;
        let setting = to_setting(option);
        button.set_callback(move |_| s.send(Message::Choose(setting)));
        buttons.push((option, button));
    }
    group.end();
    buttons
}

fn toggle_check(x: i32, y: i32, toggle: Toggle, sender: &Sender<Message>) -> CheckButton {
    let mut check = CheckButton::default()
        .with_pos(x, y)
        .with_size(INNER_W, ROW_H)
        .with_label(toggle.label());
    let s = *sender;
    check.set_callback(move |_| s.send(Message::Flip(toggle)));
    check
}

impl PanelWidgets {
    pub fn new(x0: i32, y0: i32, sender: &Sender<Message>) -> Self {
        let mut group = Group::default()
            .with_pos(x0, y0)
            .with_size(PANEL_WIDTH, PANEL_HEIGHT);
        group.set_frame(FrameType::BorderBox);

        let x = x0 + PAD;
        let mut labels = Vec::new();

        // Header
        let mut title = section_label(x, y0 + 10, "Accessibility");
        title.set_label_size(18);
        labels.push(title);
        let mut reset_button = Button::default()
            .with_pos(x0 + PANEL_WIDTH - PAD - 85, y0 + 10)
            .with_size(85, 26)
            .with_label("@reload Reset");
        reset_button.set_tooltip("Reset all settings");
        let s = *sender;
        reset_button.set_callback(move |_| s.send(Message::ResetSettings));

        // Font size: - [slider] +
        let font_label = section_label(x, y0 + 50, "");
        let mut minus = Button::default()
            .with_pos(x, y0 + 75)
            .with_size(30, ROW_H)
            .with_label("-");
        minus.set_tooltip("Decrease font size");
        let s = *sender;
        minus.set_callback(move |_| {
            s.send(Message::PercentStep(PercentField::FontSize, StepDirection::Decrease))
        });
        let font_slider = slider(x + 40, y0 + 75, INNER_W - 80, PercentField::FontSize, sender);
        let mut plus = Button::default()
            .with_pos(x + INNER_W - 30, y0 + 75)
            .with_size(30, ROW_H)
            .with_label("+");
        plus.set_tooltip("Increase font size");
        let s = *sender;
        plus.set_callback(move |_| {
            s.send(Message::PercentStep(PercentField::FontSize, StepDirection::Increase))
        });

        labels.push(section_label(x, y0 + 110, "Contrast Mode"));
        let contrast = radio_row(
            x,
            y0 + 135,
            ContrastMode::all(),
            |m| m.display_name(),
            Setting::Contrast,
            sender,
        );

        let line_label = section_label(x, y0 + 170, "");
        let line_slider = slider(x, y0 + 195, INNER_W, PercentField::LineSpacing, sender);

        let letter_label = section_label(x, y0 + 230, "");
        let letter_slider = slider(x, y0 + 255, INNER_W, PercentField::LetterSpacing, sender);

        let dyslexic = toggle_check(x, y0 + 290, Toggle::DyslexicFont, sender);

        labels.push(section_label(x, y0 + 325, "Cursor Size"));
        let cursor = radio_row(
            x,
            y0 + 350,
            CursorSize::all(),
            |c| c.display_name(),
            Setting::CursorSize,
            sender,
        );

        let links = toggle_check(x, y0 + 385, Toggle::LinkHighlight, sender);
        let guide = toggle_check(x, y0 + 415, Toggle::ReadingGuide, sender);

        labels.push(section_label(x, y0 + 450, "Text Alignment"));
        let align = radio_row(
            x,
            y0 + 475,
            TextAlign::all(),
            |a| a.display_name(),
            Setting::TextAlign,
            sender,
        );

        group.end();
        group.hide();

        Self {
            group,
            labels,
            percent_rows: vec![
                PercentRow { field: PercentField::FontSize, label: font_label, slider: font_slider },
                PercentRow { field: PercentField::LineSpacing, label: line_label, slider: line_slider },
                PercentRow { field: PercentField::LetterSpacing, label: letter_label, slider: letter_slider },
            ],
            step_buttons: vec![minus, plus],
            reset_button,
            contrast,
            cursor,
            align,
            toggles: vec![
                (Toggle::DyslexicFont, dyslexic),
                (Toggle::LinkHighlight, links),
                (Toggle::ReadingGuide, guide),
            ],
        }
    }

    pub fn set_visible(&mut self, visible: bool) {
        if visible {
            self.group.show();
        } else {
            self.group.hide();
        }
    }

    /// Write the current record into every control.
    pub fn refresh(&mut self, settings: &AccessibilitySettings) {
        for row in &mut self.percent_rows {
            let value = row.field.value_in(settings);
            row.label.set_label(&percent_label(row.field, value));
            row.slider.set_value(f64::from(value));
        }
        for (mode, button) in &mut self.contrast {
            button.set_value(*mode == settings.contrast);
        }
        for (size, button) in &mut self.cursor {
            button.set_value(*size == settings.cursor_size);
        }
        for (align, button) in &mut self.align {
            button.set_value(*align == settings.text_align);
        }
        for (toggle, check) in &mut self.toggles {
            check.set_value(toggle.value_in(settings));
        }
        self.group.redraw();
    }

    pub fn apply_palette(&mut self, palette: &Palette) {
        let background = palette.surface.color();
        let text = palette.heading.color();

        self.group.set_color(background);
        for label in &mut self.labels {
            label.set_label_color(text);
        }
        for row in &mut self.percent_rows {
            row.label.set_label_color(text);
            row.slider.set_color(background);
            row.slider.set_selection_color(palette.accent.color());
        }
        let radios = self
            .contrast
            .iter_mut()
            .map(|(_, b)| b)
            .chain(self.cursor.iter_mut().map(|(_, b)| b))
            .chain(self.align.iter_mut().map(|(_, b)| b));
        for button in radios {
            button.set_color(background);
            button.set_label_color(text);
            button.set_selection_color(palette.accent.color());
        }
        for (_, check) in &mut self.toggles {
            check.set_color(background);
            check.set_label_color(text);
            check.set_selection_color(palette.accent.color());
        }
        for button in &mut self.step_buttons {
            button.set_label_color(text);
            button.set_color(background);
        }
        self.reset_button.set_label_color(palette.link.color());
        self.reset_button.set_color(background);
        self.group.redraw();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_label() {
        assert_eq!(percent_label(PercentField::FontSize, 120), "Font Size: 120%");
        assert_eq!(percent_label(PercentField::LetterSpacing, 105), "Letter Spacing: 105%");
    }
}
