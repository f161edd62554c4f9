use fltk::{app, prelude::*};
use tracing::Level;
use tracing_subscriber::EnvFilter;

use plain_pad::app::domain::messages::Message;
use plain_pad::app::domain::settings::JsonSettingsStore;
use plain_pad::app::infrastructure::editor_surface::EditorSurface;
use plain_pad::app::services::storage::FsStorage;
use plain_pad::app::state::AppState;
use plain_pad::app::SessionController;
use plain_pad::ui::main_window::build_main_window;
use plain_pad::ui::prompts::FltkPrompts;

/// `RUST_LOG` directives, falling back to `info` when none are given.
fn log_filter(directives: &str) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(Level::INFO.into())
        .parse_lossy(directives)
}

fn init_tracing() {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_default();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(&directives))
        .init();
}

fn main() {
    init_tracing();
    tracing::info!("PlainPad v{} starting", env!("CARGO_PKG_VERSION"));

    let app = app::App::default().with_scheme(app::Scheme::Gtk);
    let (sender, receiver) = app::channel::<Message>();

    let widgets = build_main_window(&sender);
    let mut status_bar = widgets.status_bar.clone();
    status_bar.set_text("Ready");

    let surface = EditorSurface::new(widgets.buffer.clone(), sender);
    let session = SessionController::new(
        surface,
        FltkPrompts::new(widgets.status_bar),
        FsStorage,
        JsonSettingsStore::default(),
    );

    let mut state = AppState::new(session, widgets.text_editor, widgets.wind);
    state.window.show();

    while app.wait() {
        let Some(msg) = receiver.recv() else {
            continue;
        };
        match msg {
            Message::FileNew => state.file_new(),
            Message::FileOpen => state.file_open(),
            Message::FileSave => state.file_save(),
            Message::FileSaveAs => state.file_save_as(),
            Message::FileExit | Message::WindowClose => {
                if state.file_quit() {
                    state.window.hide();
                    break;
                }
            }
            Message::EditCut => state.edit_cut(),
            Message::EditCopy => state.edit_copy(),
            Message::EditPaste => state.edit_paste(),
            Message::SelectAll => state.select_all(),
            Message::ChooseFont => state.choose_font(),
            Message::ChooseTextColor => state.choose_text_color(),
            Message::ChooseBackgroundColor => state.choose_background_color(),
            Message::ShowAbout => state.show_about(),
            Message::ShowAboutFltk => state.show_about_fltk(),
            Message::BufferModified => state.buffer_modified(),
        }
        state.update_window_title();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::level_filters::LevelFilter;

    #[test]
    fn test_log_filter_defaults_to_info() {
        assert_eq!(log_filter("").max_level_hint(), Some(LevelFilter::INFO));
    }

    #[test]
    fn test_log_filter_honours_more_verbose_level() {
        assert_eq!(log_filter("debug").max_level_hint(), Some(LevelFilter::DEBUG));
        assert_eq!(log_filter("warn").max_level_hint(), Some(LevelFilter::WARN));
    }
}
