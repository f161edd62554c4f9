use std::path::{Path, PathBuf};

use fltk::dialog;

use crate::app::controllers::session::{SaveChoice, UserPrompts};
use crate::app::infrastructure::error::AppError;
use crate::app::services::text_ops::parent_directory;

use super::file_dialogs::{native_open_dialog, native_save_dialog};
use super::status_bar::{StatusBar, STATUS_TIMEOUT_SECS};

/// FLTK dialogs and the status bar behind [`UserPrompts`].
pub struct FltkPrompts {
    status: StatusBar,
    /// Last directory used in a file open/save dialog.
    last_directory: Option<String>,
}

impl FltkPrompts {
    pub fn new(status: StatusBar) -> Self {
        Self {
            status,
            last_directory: None,
        }
    }

    fn remember(&mut self, path: &Path) {
        if let Some(dir) = parent_directory(path) {
            self.last_directory = Some(dir);
        }
    }
}

impl UserPrompts for FltkPrompts {
    fn choose_open_path(&mut self) -> Option<PathBuf> {
        let path = PathBuf::from(native_open_dialog(self.last_directory.as_deref())?);
        self.remember(&path);
        Some(path)
    }

    fn choose_save_path(&mut self) -> Option<PathBuf> {
        let path = PathBuf::from(native_save_dialog(self.last_directory.as_deref())?);
        self.remember(&path);
        Some(path)
    }

    fn ask_save_changes(&mut self) -> SaveChoice {
        let choice = dialog::choice2_default(
            "The document has been modified.\nDo you want to save your changes?",
            "Save",
            "Discard",
            "Cancel",
        );
        match choice {
            Some(0) => SaveChoice::Save,
            Some(1) => SaveChoice::Discard,
            _ => SaveChoice::Cancel,
        }
    }

    fn report_error(&mut self, error: &AppError) {
        // A retried Save As should start next to the file that failed.
        if let Some(path) = error.path() {
            self.remember(path);
        }
        dialog::alert_default(&error.to_string());
    }

    fn show_status(&mut self, message: &str) {
        self.status.show_message(message, STATUS_TIMEOUT_SECS);
    }
}
