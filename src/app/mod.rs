//! Application layer - organized by Clean Architecture principles.
//!
//! # Structure
//!
//! - `domain/` - Core data structures (Session, WindowGeometry, TextStyle, Message)
//! - `controllers/` - Orchestration (SessionController and its collaborator traits)
//! - `services/` - Business operations (file storage, text helpers)
//! - `infrastructure/` - External integrations (FLTK buffer adapter, errors)
//! - `state.rs` - Main application coordinator

pub mod controllers;
pub mod domain;
pub mod infrastructure;
pub mod services;
pub mod state;

// Re-exports for convenient external access
pub use controllers::{DiscardGate, SaveChoice, SessionController, TextSurface, UserPrompts};
pub use domain::{
    FontChoice, JsonSettingsStore, Message, Rgb, Session, SessionState, SettingsStore, TextStyle,
    WindowGeometry,
};
pub use infrastructure::error::{AppError, Result};
pub use services::{DocumentStorage, FsStorage};
