// ABOUTME: Error types for the slidefactory application
// ABOUTME: Separates configuration errors from external tool failures

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SlideError {
    #[error("SLIDEFACTORY_ROOT is not set")]
    MissingInstallRoot,

    #[error("Nonexistent theme directory {}", .0.display())]
    ThemeDirNotFound(PathBuf),

    #[error("Invalid theme {name}. Available themes: {}.", .available.join(", "))]
    UnknownTheme {
        name: String,
        available: Vec<String>,
    },

    #[error("File {file} missing from the theme directory {}", .dir.display())]
    MissingThemeFile { file: String, dir: PathBuf },

    #[error("Install slidefactory locally in order to create offline htmls.")]
    OfflineNotSupported,

    #[error("Failed to launch {program:?}: {source}")]
    LaunchFailure {
        program: String,
        #[source]
        source: std::io::Error,
    },

    // Display mirrors the line users have always seen on a pandoc or
    // browser failure, followed by the captured stderr.
    #[error("error: '{program}' failed with exit code {code}\n{stderr}")]
    ToolFailure {
        program: String,
        code: i32,
        stderr: String,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SlideError>;
