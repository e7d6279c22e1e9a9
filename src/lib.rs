// ABOUTME: Library module for the slidefactory program.
// ABOUTME: Contains the theme resolver, invocation builders, process runner, and pipeline.

// Reexport modules
pub mod config;
pub mod errors;
pub mod invoke;
pub mod pipeline;
pub mod runner;
pub mod theme;
pub mod utils;

// Reexport common types and functions
pub use config::{OutputFormat, Settings};
pub use errors::{Result, SlideError};
pub use invoke::{html_invocation, pdf_invocation};
pub use pipeline::{convert_file, output_path, run_batch, Request};
pub use runner::{run, shell_join, RunOptions};
pub use theme::{resolve_theme, ResolvedTheme};
