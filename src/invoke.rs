// ABOUTME: Invocation builders for the slidefactory application
// ABOUTME: Assembles the exact argument lists for the pandoc and browser stages

use crate::config::{OutputFormat, Settings};
use crate::theme::ResolvedTheme;
use crate::utils::file_url;
use std::path::Path;

/// Build the pandoc invocation converting one document to reveal.js HTML.
///
/// Filters are applied in the order given; when self-contained output is
/// requested for a standalone HTML format, the url-encode filter is
/// appended after any user-specified filters.
pub fn html_invocation(
    settings: &Settings,
    theme: &ResolvedTheme,
    format: OutputFormat,
    self_contained: bool,
    filters: &[std::path::PathBuf],
    input: &Path,
    output: &Path,
) -> Vec<String> {
    let theme_url = theme.stylesheet_url(settings, format);
    let urls_file = settings.urls_file(format.is_local());

    let mut args = vec![
        "pandoc".to_string(),
        format!("--defaults={}", theme.dir.join("defaults.yaml").display()),
        format!("--template={}", theme.dir.join("template.html").display()),
        format!("--metadata-file={}", urls_file.display()),
        format!("--metadata=theme-url:{theme_url}"),
        format!("--output={}", output.display()),
        input.display().to_string(),
    ];
    for filter in filters {
        args.push(format!("--filter={}", filter.display()));
    }
    if self_contained && format != OutputFormat::Pdf {
        args.push(format!("--filter={}", settings.url_encode_filter().display()));
    }
    args
}

/// Build the headless-browser invocation rasterizing HTML to PDF.
///
/// The virtual-time budget lets all asynchronous reveal.js rendering settle
/// before capture; the ?print-pdf query switches the deck to print layout.
pub fn pdf_invocation(browser: &str, html: &Path, pdf: &Path) -> Vec<String> {
    vec![
        browser.to_string(),
        "--headless".to_string(),
        "--disable-gpu".to_string(),
        "--disable-software-rasterizer".to_string(),
        "--hide-scrollbars".to_string(),
        "--virtual-time-budget=10000000".to_string(),
        "--run-all-compositor-stages-before-draw".to_string(),
        format!("--print-to-pdf={}", pdf.display()),
        format!("{}?print-pdf", file_url(html)),
    ]
}
