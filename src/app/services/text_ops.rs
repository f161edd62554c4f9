use std::path::Path;

/// Extract filename from a file path
///
/// Returns the filename component of a path, or "Unknown" if it can't be extracted.
pub fn extract_filename(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .filter(|s| !s.is_empty() && *s != ".")
        .map(|s| s.to_string())
        .unwrap_or_else(|| "Unknown".to_string())
}

/// Directory that should seed the next file dialog after using `path`.
pub fn parent_directory(path: &Path) -> Option<String> {
    path.parent()
        .map(|p| p.to_string_lossy().to_string())
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_filename() {
        assert_eq!(extract_filename(Path::new("/home/user/file.txt")), "file.txt");
        assert_eq!(extract_filename(Path::new("file.txt")), "file.txt");
        assert_eq!(extract_filename(Path::new("/")), "Unknown");
        assert_eq!(extract_filename(Path::new("")), "Unknown");
    }

    #[test]
    fn test_parent_directory() {
        assert_eq!(parent_directory(Path::new("/tmp/a.txt")), Some("/tmp".to_string()));
        assert_eq!(parent_directory(Path::new("a.txt")), None);
    }
}
