use std::cell::RefCell;
use std::rc::Rc;

use fltk::{
    button::Button,
    dialog,
    enums::{Align, CallbackTrigger, FrameType},
    frame::Frame,
    input::IntInput,
    menu::Choice,
    prelude::*,
    window::Window,
};

use crate::app::domain::format::{clamp_font_size, FontChoice, TextStyle, FONT_SIZE_RANGE};
use crate::ui::theme::fltk_font;

const PREVIEW_TEXT: &str = "AaBbYyZz 0123";

/// Parse the size field. Out of range values are clamped, garbage is rejected.
pub fn parse_font_size(input: &str) -> Option<u32> {
    input.trim().parse::<u32>().ok().map(clamp_font_size)
}

/// Show the Font dialog. Returns the chosen family and size, or `None` on cancel.
pub fn show_font_dialog(current: &TextStyle) -> Option<(FontChoice, u32)> {
    let mut dialog_win = Window::default()
        .with_size(320, 200)
        .with_label("Font")
        .center_screen();
    dialog_win.make_modal(true);

    Frame::default()
        .with_pos(15, 15)
        .with_size(60, 25)
        .with_label("Family:")
        .with_align(Align::Left | Align::Inside);
    let mut family = Choice::default().with_pos(80, 15).with_size(225, 25);
    for font in FontChoice::all() {
        family.add_choice(font.display_name());
    }
    family.set_value(current.font.index() as i32);

    Frame::default()
        .with_pos(15, 50)
        .with_size(60, 25)
        .with_label("Size:")
        .with_align(Align::Left | Align::Inside);
    let mut size_input = IntInput::default().with_pos(80, 50).with_size(80, 25);
    size_input.set_value(&current.font_size.to_string());
    Frame::default()
        .with_pos(165, 50)
        .with_size(140, 25)
        .with_label(&format!("({}-{})", FONT_SIZE_RANGE.start(), FONT_SIZE_RANGE.end()))
        .with_align(Align::Left | Align::Inside);

    let mut preview = Frame::default().with_pos(15, 85).with_size(290, 60);
    preview.set_frame(FrameType::DownBox);
    preview.set_label(PREVIEW_TEXT);
    preview.set_label_font(fltk_font(current.font));
    preview.set_label_size(current.font_size as i32);

    let mut ok_btn = Button::default().with_pos(125, 160).with_size(85, 28).with_label("OK");
    let mut cancel_btn = Button::default().with_pos(220, 160).with_size(85, 28).with_label("Cancel");

    dialog_win.end();
    dialog_win.show();

    let mut preview_family = preview.clone();
    family.set_callback(move |c| {
        if let Some(font) = FontChoice::from_index(c.value()) {
            preview_family.set_label_font(fltk_font(font));
            preview_family.redraw();
        }
    });

    let mut preview_size = preview.clone();
    size_input.set_trigger(CallbackTrigger::Changed);
    size_input.set_callback(move |i| {
        if let Some(size) = parse_font_size(&i.value()) {
            preview_size.set_label_size(size as i32);
            preview_size.redraw();
        }
    });

    let result = Rc::new(RefCell::new(None));

    let result_ok = result.clone();
    let dialog_ok = dialog_win.clone();
    let family_ok = family.clone();
    let size_ok = size_input.clone();
    ok_btn.set_callback(move |_| {
        let Some(size) = parse_font_size(&size_ok.value()) else {
            dialog::message_default("Please enter a valid font size");
            return;
        };
        let font = FontChoice::from_index(family_ok.value()).unwrap_or_default();
        *result_ok.borrow_mut() = Some((font, size));
        dialog_ok.clone().hide();
    });

    let dialog_cancel = dialog_win.clone();
    cancel_btn.set_callback(move |_| {
        dialog_cancel.clone().hide();
    });

    dialog_win.set_callback(move |w| {
        w.hide();
    });

    super::run_dialog(&dialog_win);

    let chosen = result.borrow_mut().take();
    chosen
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_font_size() {
        assert_eq!(parse_font_size("16"), Some(16));
        assert_eq!(parse_font_size(" 12 "), Some(12));
        assert_eq!(parse_font_size("500"), Some(72));
        assert_eq!(parse_font_size("0"), Some(6));
        assert_eq!(parse_font_size("abc"), None);
        assert_eq!(parse_font_size(""), None);
    }
}
