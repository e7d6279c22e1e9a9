// ABOUTME: Theme resolution for the slidefactory application
// ABOUTME: Locates built-in or user-supplied themes and derives the stylesheet URL

use crate::config::{OutputFormat, Settings, THEME_CDN_BASE};
use crate::errors::{Result, SlideError};
use crate::utils::absolute_path;
use std::fs;
use std::path::{PathBuf, MAIN_SEPARATOR};

/// Files every theme directory must provide.
pub const THEME_REQUIRED_FILES: [&str; 3] = ["defaults.yaml", "template.html", "csc.css"];

/// The stylesheet among the required files.
pub const THEME_STYLESHEET: &str = "csc.css";

/// A validated theme directory.
#[derive(Debug, Clone)]
pub struct ResolvedTheme {
    /// Theme identifier as given on the command line.
    pub name: String,
    pub dir: PathBuf,
    /// True for a user-supplied theme directory, false for a built-in one.
    pub is_custom: bool,
}

/// Resolve a theme identifier to a validated theme directory.
///
/// An identifier containing a path separator is taken as a literal
/// directory path; anything else is looked up under the install root's
/// `theme/` directory. Either way the directory must contain the three
/// required theme files.
pub fn resolve_theme(settings: &Settings, theme: &str) -> Result<ResolvedTheme> {
    let (dir, is_custom) = if theme.contains(MAIN_SEPARATOR) {
        let dir = PathBuf::from(theme);
        if !dir.is_dir() {
            return Err(SlideError::ThemeDirNotFound(absolute_path(&dir)));
        }
        (dir, true)
    } else {
        let theme_root = settings.theme_root();
        let dir = theme_root.join(theme);
        if !dir.is_dir() {
            return Err(SlideError::UnknownTheme {
                name: theme.to_string(),
                available: available_themes(&theme_root),
            });
        }
        (dir, false)
    };

    for fname in THEME_REQUIRED_FILES {
        if !dir.join(fname).is_file() {
            return Err(SlideError::MissingThemeFile {
                file: fname.to_string(),
                dir: absolute_path(&dir),
            });
        }
    }

    Ok(ResolvedTheme {
        name: theme.to_string(),
        dir,
        is_custom,
    })
}

impl ResolvedTheme {
    /// URL the generated HTML uses to reference the theme stylesheet.
    ///
    /// Custom themes, custom installs, and local output formats must never
    /// depend on a network fetch, so they get a file:// path to the local
    /// stylesheet; a default install producing plain online HTML references
    /// the shared CDN copy instead.
    pub fn stylesheet_url(&self, settings: &Settings, format: OutputFormat) -> String {
        if self.is_custom || settings.is_custom_install || format.is_local() {
            format!(
                "file://{}/{}",
                absolute_path(&self.dir).display(),
                THEME_STYLESHEET
            )
        } else {
            format!("{}/{}/{}", THEME_CDN_BASE, self.name, THEME_STYLESHEET)
        }
    }
}

/// Names of the immediate subdirectories of the theme root, sorted.
fn available_themes(theme_root: &std::path::Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(theme_root)
        .map(|entries| {
            entries
                .filter_map(|e| e.ok())
                .filter(|e| e.path().is_dir())
                .map(|e| e.file_name().to_string_lossy().into_owned())
                .collect()
        })
        .unwrap_or_default();
    names.sort();
    names
}
