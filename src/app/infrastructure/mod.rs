//! Infrastructure layer - external integrations and utilities.
//!
//! - FLTK text buffer adapter
//! - Error types

pub mod editor_surface;
pub mod error;
