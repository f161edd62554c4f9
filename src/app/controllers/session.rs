//! Document session controller.
//!
//! Owns the [`Session`] (current path and dirty flag) and runs every document
//! lifecycle operation against four collaborators: the text surface holding
//! the buffer, the user prompts, file storage and the settings store. Nothing
//! here touches FLTK, so the whole lifecycle runs headless in tests.

use std::path::{Path, PathBuf};

use crate::app::domain::session::{Session, SessionState};
use crate::app::domain::settings::{JsonSettingsStore, SettingsStore, WindowGeometry};
use crate::app::infrastructure::error::{AppError, Result};
use crate::app::services::storage::{DocumentStorage, FsStorage};

/// Editing surface that owns the buffer text.
pub trait TextSurface {
    fn text(&self) -> String;

    /// Replace the whole buffer. Must not report a user modification.
    fn set_text(&mut self, text: &str);

    fn clear(&mut self) {
        self.set_text("");
    }
}

/// Answer to the "save your changes?" prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveChoice {
    Save,
    Discard,
    Cancel,
}

/// Modal interactions the controller needs from the host UI.
pub trait UserPrompts {
    fn choose_open_path(&mut self) -> Option<PathBuf>;
    fn choose_save_path(&mut self) -> Option<PathBuf>;
    fn ask_save_changes(&mut self) -> SaveChoice;

    /// Blocking notification of a recoverable failure.
    fn report_error(&mut self, error: &AppError);

    /// Transient, non-blocking feedback such as "File saved".
    fn show_status(&mut self, _message: &str) {}
}

/// Outcome of the discard gate run before New, Open and close.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscardGate {
    /// Nothing to lose, no prompt shown.
    Clean,
    Saved,
    Discarded,
    /// The user cancelled, or the save they asked for did not happen.
    Cancelled,
}

impl DiscardGate {
    pub fn proceeds(&self) -> bool {
        !matches!(self, Self::Cancelled)
    }
}

pub struct SessionController<T, P, F = FsStorage, C = JsonSettingsStore> {
    session: Session,
    surface: T,
    prompts: P,
    storage: F,
    settings: C,
    geometry: WindowGeometry,
}

impl<T, P, F, C> SessionController<T, P, F, C>
where
    T: TextSurface,
    P: UserPrompts,
    F: DocumentStorage,
    C: SettingsStore,
{
    /// Start an untitled, clean session. Window geometry is read from the
    /// store here and not again until shutdown.
    pub fn new(surface: T, prompts: P, storage: F, settings: C) -> Self {
        let geometry = settings.load_geometry();
        Self {
            session: Session::new(),
            surface,
            prompts,
            storage,
            settings,
            geometry,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn state(&self) -> SessionState {
        self.session.state()
    }

    pub fn window_title(&self) -> String {
        self.session.window_title()
    }

    /// Geometry loaded at construction.
    pub fn geometry(&self) -> WindowGeometry {
        self.geometry
    }

    pub fn surface(&self) -> &T {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut T {
        &mut self.surface
    }

    pub fn prompts_mut(&mut self) -> &mut P {
        &mut self.prompts
    }

    /// Buffer change notification from the editor.
    pub fn mark_modified(&mut self) {
        self.session.mark_modified();
    }

    pub fn new_document(&mut self) -> bool {
        if !self.confirm_discard_if_modified().proceeds() {
            return false;
        }
        self.surface.clear();
        self.session.reset();
        tracing::debug!("new document");
        true
    }

    /// Ask for a path and load it. Returns whether a file was loaded.
    pub fn open(&mut self) -> bool {
        if !self.confirm_discard_if_modified().proceeds() {
            return false;
        }
        match self.prompts.choose_open_path() {
            Some(path) => self.load_file(&path).is_ok(),
            None => false,
        }
    }

    /// Replace the buffer with the contents of `path`. On failure the error is
    /// reported and the session and buffer stay as they were.
    pub fn load_file(&mut self, path: &Path) -> Result<()> {
        let content = match self.storage.read_text(path) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!("{}", e);
                self.prompts.report_error(&e);
                return Err(e);
            }
        };

        self.surface.set_text(&content);
        self.session.set_current_file(path.to_path_buf());
        self.prompts.show_status("File loaded");
        tracing::info!(path = %path.display(), bytes = content.len(), "file loaded");
        Ok(())
    }

    pub fn save(&mut self) -> bool {
        match self.session.current_file().map(Path::to_path_buf) {
            Some(path) => self.write_to(&path).is_ok(),
            None => self.save_as(),
        }
    }

    pub fn save_as(&mut self) -> bool {
        match self.prompts.choose_save_path() {
            Some(path) => self.write_to(&path).is_ok(),
            None => false,
        }
    }

    /// Write the buffer to `path` and make it the current file. A failure is
    /// reported and leaves the dirty flag and current path untouched.
    pub fn write_to(&mut self, path: &Path) -> Result<()> {
        let text = self.surface.text();
        if let Err(e) = self.storage.write_text(path, &text) {
            tracing::warn!("{}", e);
            self.prompts.report_error(&e);
            return Err(e);
        }

        self.session.set_current_file(path.to_path_buf());
        self.prompts.show_status("File saved");
        tracing::info!(path = %path.display(), bytes = text.len(), "file saved");
        Ok(())
    }

    pub fn confirm_discard_if_modified(&mut self) -> DiscardGate {
        if !self.session.is_modified() {
            return DiscardGate::Clean;
        }

        match self.prompts.ask_save_changes() {
            SaveChoice::Save => {
                if self.save() {
                    DiscardGate::Saved
                } else {
                    DiscardGate::Cancelled
                }
            }
            SaveChoice::Discard => DiscardGate::Discarded,
            SaveChoice::Cancel => DiscardGate::Cancelled,
        }
    }

    /// Close request from the window. Returns `true` when shutdown may go
    /// ahead; the geometry is persisted only in that case.
    pub fn request_close(&mut self, geometry: WindowGeometry) -> bool {
        let gate = self.confirm_discard_if_modified();
        if !gate.proceeds() {
            tracing::debug!("close cancelled");
            return false;
        }

        if let Err(e) = self.settings.save_geometry(&geometry) {
            tracing::error!("Failed to save window geometry: {}", e);
        }
        self.geometry = geometry;
        tracing::info!(?gate, "shutting down");
        true
    }
}
