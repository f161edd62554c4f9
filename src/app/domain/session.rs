use std::path::{Path, PathBuf};

use crate::app::services::text_ops::extract_filename;

pub const APP_NAME: &str = "PlainPad";
pub const UNTITLED_NAME: &str = "untitled.txt";

/// The four observable states of a document session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    UntitledClean,
    UntitledDirty,
    NamedClean,
    NamedDirty,
}

/// Document identity and dirty state. The text itself lives in the editor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    current_file: Option<PathBuf>,
    is_modified: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_file(&self) -> Option<&Path> {
        self.current_file.as_deref()
    }

    pub fn is_modified(&self) -> bool {
        self.is_modified
    }

    pub fn mark_modified(&mut self) {
        self.is_modified = true;
    }

    /// Record a successful load or save of `path`.
    pub fn set_current_file(&mut self, path: PathBuf) {
        self.current_file = Some(path);
        self.is_modified = false;
    }

    /// Back to untitled and unmodified.
    pub fn reset(&mut self) {
        self.current_file = None;
        self.is_modified = false;
    }

    pub fn state(&self) -> SessionState {
        match (self.current_file.is_some(), self.is_modified) {
            (false, false) => SessionState::UntitledClean,
            (false, true) => SessionState::UntitledDirty,
            (true, false) => SessionState::NamedClean,
            (true, true) => SessionState::NamedDirty,
        }
    }

    pub fn display_name(&self) -> String {
        match self.current_file {
            Some(ref path) => extract_filename(path),
            None => UNTITLED_NAME.to_string(),
        }
    }

    pub fn window_title(&self) -> String {
        let prefix = if self.is_modified { "*" } else { "" };
        format!("{}{} - {}", prefix, self.display_name(), APP_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_untitled_clean() {
        let session = Session::new();
        assert_eq!(session.state(), SessionState::UntitledClean);
        assert!(session.current_file().is_none());
        assert!(!session.is_modified());
    }

    #[test]
    fn test_state_transitions() {
        let mut session = Session::new();
        session.mark_modified();
        assert_eq!(session.state(), SessionState::UntitledDirty);

        session.set_current_file(PathBuf::from("/tmp/a.txt"));
        assert_eq!(session.state(), SessionState::NamedClean);

        session.mark_modified();
        assert_eq!(session.state(), SessionState::NamedDirty);

        session.set_current_file(PathBuf::from("/tmp/a.txt"));
        assert_eq!(session.state(), SessionState::NamedClean);

        session.reset();
        assert_eq!(session.state(), SessionState::UntitledClean);
    }

    #[test]
    fn test_window_title() {
        let mut session = Session::new();
        assert_eq!(session.window_title(), "untitled.txt - PlainPad");

        session.mark_modified();
        assert_eq!(session.window_title(), "*untitled.txt - PlainPad");

        session.set_current_file(PathBuf::from("/home/user/notes.txt"));
        assert_eq!(session.window_title(), "notes.txt - PlainPad");
    }
}
