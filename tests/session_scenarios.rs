//! End-to-end document lifecycle through the public controller API, with
//! in-memory stand-ins for the editor, dialogs and settings store.

use std::collections::VecDeque;
use std::fs;
use std::path::PathBuf;

use plain_pad::app::{
    AppError, FsStorage, Result, SaveChoice, SessionController, SessionState, SettingsStore,
    TextSurface, UserPrompts, WindowGeometry,
};
use tempfile::TempDir;

#[derive(Default)]
struct Buffer(String);

impl TextSurface for Buffer {
    fn text(&self) -> String {
        self.0.clone()
    }

    fn set_text(&mut self, text: &str) {
        self.0 = text.to_string();
    }
}

#[derive(Default)]
struct User {
    open: VecDeque<PathBuf>,
    save: VecDeque<PathBuf>,
    answers: VecDeque<SaveChoice>,
    prompts: usize,
    errors: Vec<String>,
}

impl UserPrompts for User {
    fn choose_open_path(&mut self) -> Option<PathBuf> {
        self.open.pop_front()
    }

    fn choose_save_path(&mut self) -> Option<PathBuf> {
        self.save.pop_front()
    }

    fn ask_save_changes(&mut self) -> SaveChoice {
        self.prompts += 1;
        self.answers.pop_front().unwrap_or(SaveChoice::Cancel)
    }

    fn report_error(&mut self, error: &AppError) {
        self.errors.push(error.to_string());
    }
}

#[derive(Default)]
struct Geometry(Option<WindowGeometry>);

impl SettingsStore for Geometry {
    fn load_geometry(&self) -> WindowGeometry {
        self.0.unwrap_or_default()
    }

    fn save_geometry(&mut self, geometry: &WindowGeometry) -> Result<()> {
        self.0 = Some(*geometry);
        Ok(())
    }
}

type Editor = SessionController<Buffer, User, FsStorage, Geometry>;

fn editor() -> Editor {
    SessionController::new(Buffer::default(), User::default(), FsStorage, Geometry::default())
}

fn type_text(e: &mut Editor, text: &str) {
    e.surface_mut().0.push_str(text);
    e.mark_modified();
}

#[test]
fn test_type_save_as_then_close_without_prompt() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("a.txt");
    let mut e = editor();
    assert_eq!(e.state(), SessionState::UntitledClean);

    type_text(&mut e, "hello");
    assert!(e.session().is_modified());

    e.prompts_mut().save.push_back(path.clone());
    assert!(e.save_as());
    assert!(!e.session().is_modified());
    assert_eq!(e.session().current_file(), Some(path.as_path()));

    assert!(e.request_close(WindowGeometry::default()));
    assert_eq!(e.prompts_mut().prompts, 0);
}

#[test]
fn test_open_nonexistent_reports_read_error() {
    let mut e = editor();
    e.prompts_mut().open.push_back(PathBuf::from("/no/such/file"));

    assert!(!e.open());
    assert_eq!(e.state(), SessionState::UntitledClean);
    let errors = &e.prompts_mut().errors;
    assert_eq!(errors.len(), 1);
    assert!(errors[0].starts_with("Cannot read file /no/such/file"));
}

#[test]
fn test_save_then_open_round_trips_content() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("round.txt");
    let content = "first line\nsecond line\n\n  indented\ttab\n";

    let mut writer = editor();
    type_text(&mut writer, content);
    writer.prompts_mut().save.push_back(path.clone());
    assert!(writer.save());

    let mut reader = editor();
    reader.prompts_mut().open.push_back(path.clone());
    assert!(reader.open());
    assert_eq!(reader.surface().text(), content);
    assert_eq!(reader.state(), SessionState::NamedClean);
}

#[test]
fn test_untitled_save_equals_save_as() {
    let dir = TempDir::new().unwrap();
    let via_save = dir.path().join("save.txt");
    let via_save_as = dir.path().join("save_as.txt");

    let mut a = editor();
    type_text(&mut a, "same");
    a.prompts_mut().save.push_back(via_save.clone());
    assert!(a.save());

    let mut b = editor();
    type_text(&mut b, "same");
    b.prompts_mut().save.push_back(via_save_as.clone());
    assert!(b.save_as());

    assert_eq!(fs::read(&via_save).unwrap(), fs::read(&via_save_as).unwrap());
    assert_eq!(a.state(), b.state());
}

#[test]
fn test_cancel_on_dirty_close_keeps_editing() {
    let mut e = editor();
    type_text(&mut e, "unsaved");
    e.prompts_mut().answers.push_back(SaveChoice::Cancel);

    assert!(!e.request_close(WindowGeometry { x: 1, y: 1, width: 10, height: 10 }));
    assert_eq!(e.state(), SessionState::UntitledDirty);
    assert_eq!(e.surface().text(), "unsaved");
    assert_eq!(e.geometry(), WindowGeometry::default());
}

#[test]
fn test_dirty_open_with_save_writes_before_loading() {
    let dir = TempDir::new().unwrap();
    let draft = dir.path().join("draft.txt");
    let other = dir.path().join("other.txt");
    fs::write(&other, "other file").unwrap();

    let mut e = editor();
    type_text(&mut e, "draft text");
    e.prompts_mut().answers.push_back(SaveChoice::Save);
    e.prompts_mut().save.push_back(draft.clone());
    e.prompts_mut().open.push_back(other.clone());

    assert!(e.open());
    assert_eq!(fs::read_to_string(&draft).unwrap(), "draft text");
    assert_eq!(e.surface().text(), "other file");
    assert_eq!(e.session().current_file(), Some(other.as_path()));
}
