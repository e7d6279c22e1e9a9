// ABOUTME: Configuration module for the slidefactory application
// ABOUTME: Resolves the install root from the environment and derived asset paths

use crate::errors::{Result, SlideError};
use clap::ValueEnum;
use std::env;
use std::ffi::OsStr;
use std::path::PathBuf;

/// Output mode for a conversion run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Pdf,
    Html,
    HtmlOffline,
}

impl OutputFormat {
    /// Whether theme and resource references must resolve to local files.
    pub fn is_local(self) -> bool {
        matches!(self, OutputFormat::Pdf | OutputFormat::HtmlOffline)
    }

    /// Extension of the final artifact.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Pdf => "pdf",
            OutputFormat::Html | OutputFormat::HtmlOffline => "html",
        }
    }
}

/// Installation root used by a canonical (container) install.
pub const CANONICAL_ROOT: &str = "/slidefactory";

/// Remote stylesheet location used for plain online HTML output.
pub const THEME_CDN_BASE: &str = "https://cdn.jsdelivr.net/gh/csc-training/slidefactory/theme";

/// Name of the environment variable pointing at the install root.
pub const ROOT_ENV_VAR: &str = "SLIDEFACTORY_ROOT";

/// Immutable installation settings, constructed once at startup and passed
/// to every component that needs them.
#[derive(Debug, Clone)]
pub struct Settings {
    pub root: PathBuf,
    pub is_custom_install: bool,
}

impl Settings {
    /// Build settings from an explicit root path.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        // Raw string comparison, not path components: "/slidefactory/"
        // with a trailing slash counts as a custom install.
        let is_custom_install = root.as_os_str() != OsStr::new(CANONICAL_ROOT);
        Self {
            root,
            is_custom_install,
        }
    }

    /// Build settings from the SLIDEFACTORY_ROOT environment variable.
    pub fn from_env() -> Result<Self> {
        match env::var(ROOT_ENV_VAR) {
            Ok(root) => Ok(Self::new(root)),
            Err(_) => Err(SlideError::MissingInstallRoot),
        }
    }

    /// Directory holding the built-in themes.
    pub fn theme_root(&self) -> PathBuf {
        self.root.join("theme")
    }

    /// Metadata file mapping resource URLs for the given output locality.
    pub fn urls_file(&self, local: bool) -> PathBuf {
        if local {
            self.root.join("urls_local.yaml")
        } else {
            self.root.join("urls.yaml")
        }
    }

    /// Pandoc filter that inlines external URLs for self-contained output.
    pub fn url_encode_filter(&self) -> PathBuf {
        self.root.join("filters").join("url-encode.py")
    }
}
