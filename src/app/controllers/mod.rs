//! Controllers layer - orchestration and coordination.
//!
//! - Document session lifecycle (new/open/save/close gating)

pub mod session;

pub use session::{DiscardGate, SaveChoice, SessionController, TextSurface, UserPrompts};
