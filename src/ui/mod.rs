//! FLTK presentation layer: window, menu, toolbar, status bar and dialogs.

pub mod dialogs;
pub mod file_dialogs;
pub mod main_window;
pub mod menu;
pub mod prompts;
pub mod status_bar;
pub mod theme;
pub mod toolbar;
