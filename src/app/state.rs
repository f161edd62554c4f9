use fltk::{
    dialog::{self, ColorMode},
    prelude::*,
    text::TextEditor,
    window::Window,
};

use super::controllers::session::SessionController;
use super::domain::format::{Rgb, TextStyle};
use super::domain::settings::JsonSettingsStore;
use super::infrastructure::editor_surface::EditorSurface;
use super::services::storage::FsStorage;
use crate::ui::dialogs::about::{show_about_dialog, show_about_fltk_dialog};
use crate::ui::dialogs::font::show_font_dialog;
use crate::ui::main_window::{apply_geometry, current_geometry};
use crate::ui::prompts::FltkPrompts;
use crate::ui::theme::apply_text_style;

pub type DocumentSession = SessionController<EditorSurface, FltkPrompts, FsStorage, JsonSettingsStore>;

pub struct AppState {
    pub session: DocumentSession,
    pub editor: TextEditor,
    pub window: Window,
    pub style: TextStyle,
}

impl AppState {
    pub fn new(session: DocumentSession, editor: TextEditor, mut window: Window) -> Self {
        apply_geometry(&mut window, &session.geometry());

        let mut state = Self {
            session,
            editor,
            window,
            style: TextStyle::default(),
        };
        apply_text_style(&mut state.editor, &state.style);
        state.update_window_title();
        state
    }

    pub fn update_window_title(&mut self) {
        let title = self.session.window_title();
        if self.window.label() != title {
            self.window.set_label(&title);
        }
    }

    // --- File operations ---

    pub fn file_new(&mut self) {
        self.session.new_document();
    }

    pub fn file_open(&mut self) {
        if self.session.open() {
            self.editor.set_insert_position(0);
            self.editor.show_insert_position();
        }
    }

    pub fn file_save(&mut self) {
        self.session.save();
    }

    pub fn file_save_as(&mut self) {
        self.session.save_as();
    }

    /// Handle quit request. Returns `true` if the app should exit.
    pub fn file_quit(&mut self) -> bool {
        let geometry = current_geometry(&self.window);
        self.session.request_close(geometry)
    }

    pub fn buffer_modified(&mut self) {
        self.session.mark_modified();
    }

    // --- Edit ---

    pub fn edit_cut(&mut self) {
        self.editor.kf_cut();
    }

    pub fn edit_copy(&mut self) {
        self.editor.kf_copy();
    }

    pub fn edit_paste(&mut self) {
        self.editor.kf_paste();
    }

    pub fn select_all(&mut self) {
        self.session.surface_mut().select_all();
        self.editor.redraw();
    }

    // --- Format ---

    pub fn choose_font(&mut self) {
        if let Some((font, size)) = show_font_dialog(&self.style) {
            self.style = self.style.with_font(font, size);
            apply_text_style(&mut self.editor, &self.style);
        }
    }

    pub fn choose_text_color(&mut self) {
        let current = self.style.text_color.into();
        let rgb = dialog::color_chooser_with_default("Text Color", ColorMode::Rgb, current);
        self.style.text_color = Rgb::from(rgb);
        apply_text_style(&mut self.editor, &self.style);
    }

    pub fn choose_background_color(&mut self) {
        let current = self.style.background_color.into();
        let rgb = dialog::color_chooser_with_default("Background Color", ColorMode::Rgb, current);
        self.style.background_color = Rgb::from(rgb);
        apply_text_style(&mut self.editor, &self.style);
    }

    // --- Help ---

    pub fn show_about(&self) {
        show_about_dialog();
    }

    pub fn show_about_fltk(&self) {
        show_about_fltk_dialog();
    }
}
