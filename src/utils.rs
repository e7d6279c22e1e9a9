// ABOUTME: Utility functions for the slidefactory application
// ABOUTME: Provides path absolutization and file URL helpers

use std::env;
use std::path::{Path, PathBuf};

/// Make a path absolute against the current directory without resolving
/// symlinks or requiring the path to exist.
pub fn absolute_path(path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        match env::current_dir() {
            Ok(cwd) => cwd.join(path),
            Err(_) => path.to_path_buf(),
        }
    }
}

/// Render a path as a file:// URL.
pub fn file_url(path: &Path) -> String {
    format!("file://{}", absolute_path(path).display())
}
