//! Domain layer - core data structures and types.
//!
//! - Session and its lifecycle states
//! - Window geometry settings and their store
//! - Text formatting
//! - Message types for the event system

pub mod format;
pub mod messages;
pub mod session;
pub mod settings;

pub use format::{FontChoice, Rgb, TextStyle};
pub use messages::Message;
pub use session::{Session, SessionState};
pub use settings::{JsonSettingsStore, SettingsStore, WindowGeometry};
