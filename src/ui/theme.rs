use fltk::{
    enums::{Color, Font},
    prelude::*,
    text::TextEditor,
};

use crate::app::domain::format::{FontChoice, Rgb, TextStyle};

pub fn fltk_font(choice: FontChoice) -> Font {
    match choice {
        FontChoice::Helvetica => Font::Helvetica,
        FontChoice::HelveticaBold => Font::HelveticaBold,
        FontChoice::Times => Font::Times,
        FontChoice::TimesItalic => Font::TimesItalic,
        FontChoice::Courier => Font::Courier,
        FontChoice::CourierBold => Font::CourierBold,
        FontChoice::Screen => Font::Screen,
        FontChoice::ScreenBold => Font::ScreenBold,
    }
}

pub fn fltk_color(rgb: Rgb) -> Color {
    Color::from_rgb(rgb.0, rgb.1, rgb.2)
}

/// Apply font and colors to the whole editing surface.
pub fn apply_text_style(editor: &mut TextEditor, style: &TextStyle) {
    editor.set_text_font(fltk_font(style.font));
    editor.set_text_size(style.font_size as i32);
    editor.set_text_color(fltk_color(style.text_color));
    editor.set_cursor_color(fltk_color(style.text_color));
    editor.set_color(fltk_color(style.background_color));
    editor.redraw();
}
