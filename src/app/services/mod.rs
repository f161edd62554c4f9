//! Services layer - business operations and utilities.
//!
//! - Plain text file storage
//! - Path and text helpers

pub mod storage;
pub mod text_ops;

pub use storage::{DocumentStorage, FsStorage};
