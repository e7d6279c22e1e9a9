// ABOUTME: Conversion pipeline for the slidefactory application
// ABOUTME: Drives the pandoc and browser stages per input file

use crate::config::{OutputFormat, Settings};
use crate::errors::{Result, SlideError};
use crate::invoke::{html_invocation, pdf_invocation};
use crate::runner::{run, RunOptions};
use crate::theme::resolve_theme;
use log::info;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// One conversion request, constructed once from the command line and
/// applied to each input file in turn.
#[derive(Debug, Clone)]
pub struct Request {
    pub theme: String,
    pub format: OutputFormat,
    pub self_contained: bool,
    pub browser: String,
    pub filters: Vec<PathBuf>,
    pub output_prefix: Option<String>,
    pub run_options: RunOptions,
}

/// Compute the final artifact path for one input file.
///
/// An output prefix is concatenated with the whole original input path
/// string before the format suffix is substituted, so `talk.md` with
/// prefix `build/` becomes `build/talk.html`.
pub fn output_path(input: &Path, prefix: Option<&str>, format: OutputFormat) -> PathBuf {
    let base = match prefix {
        Some(prefix) => PathBuf::from(format!("{}{}", prefix, input.display())),
        None => input.to_path_buf(),
    };
    base.with_extension(format.extension())
}

/// Convert a single input file, returning the final artifact path.
///
/// PDF output goes through a temporary intermediate HTML file whose
/// directory is removed when this function returns, on success and on
/// failure alike.
pub fn convert_file(settings: &Settings, request: &Request, input: &Path) -> Result<PathBuf> {
    let theme = resolve_theme(settings, &request.theme)?;
    let final_path = output_path(input, request.output_prefix.as_deref(), request.format);
    info!(
        "Converting {} -> {}",
        input.display(),
        final_path.display()
    );

    match request.format {
        OutputFormat::Pdf => {
            let tmpdir = TempDir::new()?;
            let html = tmpdir.path().join("tmp.html");
            run(
                &html_invocation(
                    settings,
                    &theme,
                    request.format,
                    request.self_contained,
                    &request.filters,
                    input,
                    &html,
                ),
                request.run_options,
            )?;
            run(
                &pdf_invocation(&request.browser, &html, &final_path),
                request.run_options,
            )?;
            // tmpdir drops here, removing the intermediate HTML
        }
        OutputFormat::Html | OutputFormat::HtmlOffline => {
            run(
                &html_invocation(
                    settings,
                    &theme,
                    request.format,
                    request.self_contained,
                    &request.filters,
                    input,
                    &final_path,
                ),
                request.run_options,
            )?;
        }
    }
    Ok(final_path)
}

/// Convert a batch of input files sequentially.
///
/// The first failure aborts the remaining files. Offline HTML requires a
/// local install, so that combination is rejected before anything runs.
pub fn run_batch(settings: &Settings, request: &Request, inputs: &[PathBuf]) -> Result<()> {
    if request.format == OutputFormat::HtmlOffline && !settings.is_custom_install {
        return Err(SlideError::OfflineNotSupported);
    }
    for input in inputs {
        convert_file(settings, request, input)?;
    }
    Ok(())
}
