use std::fs;
use std::path::Path;

use crate::app::infrastructure::error::{AppError, Result};

/// Whole-file plain text persistence.
pub trait DocumentStorage {
    fn read_text(&self, path: &Path) -> Result<String>;
    fn write_text(&self, path: &Path, text: &str) -> Result<()>;
}

/// Reads and writes files verbatim through `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsStorage;

impl DocumentStorage for FsStorage {
    fn read_text(&self, path: &Path) -> Result<String> {
        let read_error = |source| AppError::FileRead {
            path: path.to_path_buf(),
            source,
        };
        let text = fs::read_to_string(path).map_err(read_error)?;
        // The editor buffer stops at the first NUL, so a later save would truncate the file.
        if text.contains('\0') {
            return Err(read_error(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                "file contains NUL bytes and is not plain text",
            )));
        }
        Ok(text)
    }

    fn write_text(&self, path: &Path, text: &str) -> Result<()> {
        fs::write(path, text).map_err(|source| AppError::FileWrite {
            path: path.to_path_buf(),
            source,
        })
    }
}
