// ABOUTME: Main entry point for the slidefactory program.
// ABOUTME: Provides the CLI interface and executes the conversion pipeline.

use clap::Parser;
use slidefactory::{run_batch, OutputFormat, Request, RunOptions, Settings};
use std::path::PathBuf;

/// Convert a presentation from Markdown (or reStructuredText) to reveal.js
/// powered HTML5 using pandoc.
#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Filename for presentation source (e.g. in Markdown)
    #[arg(value_name = "input.md", required = true)]
    input: Vec<PathBuf>,

    /// Prefix for output filenames (by default uses the basename of the
    /// input file, i.e. talk.md -> talk.html)
    #[arg(long, value_name = "prefix")]
    output: Option<String>,

    /// Presentation theme
    #[arg(short, long, value_name = "THEME", default_value = "csc-2016")]
    theme: String,

    /// Output format
    #[arg(short, long, value_name = "FORMAT", value_enum, default_value = "pdf")]
    format: OutputFormat,

    /// Produce as self-contained HTMLs as possible
    #[arg(short = 'c', long)]
    self_contained: bool,

    /// Browser to use for converting PDFs
    #[arg(short, long, default_value = "chromium-browser")]
    browser: String,

    /// Pandoc filter script (multiple allowed)
    #[arg(long, value_name = "filter.py")]
    filter: Vec<PathBuf>,

    /// Do nothing, only show the full commands to be run
    #[arg(long, visible_alias = "show-command")]
    dry_run: bool,

    /// Be loud and noisy
    #[arg(long)]
    verbose: bool,
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let settings = Settings::from_env()?;
    let request = Request {
        theme: cli.theme,
        format: cli.format,
        self_contained: cli.self_contained,
        browser: cli.browser,
        filters: cli.filter,
        output_prefix: cli.output,
        run_options: RunOptions {
            verbose: cli.verbose,
            dry_run: cli.dry_run,
        },
    };
    run_batch(&settings, &request, &cli.input)?;
    Ok(())
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    // Single exit point: any pipeline error is printed and the process
    // terminates with status 1.
    if let Err(e) = run(cli) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
