// ABOUTME: Process runner for the slidefactory application
// ABOUTME: Executes external commands with dry-run and verbose support

use crate::errors::{Result, SlideError};
use log::debug;
use std::process::Command;

/// Execution flags shared by every external command in a run.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Echo each command line before executing it.
    pub verbose: bool,
    /// Print each command line instead of executing anything.
    pub dry_run: bool,
}

/// Run an external command given as a full argument vector.
///
/// The command is spawned directly, never through a shell. A non-zero exit
/// is returned as a [`SlideError::ToolFailure`] carrying the program name,
/// exit code, and captured stderr; the caller decides how to terminate.
pub fn run(args: &[String], opts: RunOptions) -> Result<()> {
    if opts.verbose || opts.dry_run {
        println!("{}", shell_join(args));
    }
    if opts.dry_run {
        return Ok(());
    }

    let Some((program, rest)) = args.split_first() else {
        return Ok(());
    };
    debug!("Running {:?}", args);
    let output = Command::new(program)
        .args(rest)
        .output()
        .map_err(|source| SlideError::LaunchFailure {
            program: program.clone(),
            source,
        })?;

    if !output.status.success() {
        return Err(SlideError::ToolFailure {
            program: program.clone(),
            code: output.status.code().unwrap_or(-1),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        });
    }
    Ok(())
}

/// Join arguments into a single shell-safe command line for display.
pub fn shell_join(args: &[String]) -> String {
    args.iter()
        .map(|a| shell_quote(a))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Quote one argument the way a POSIX shell expects it.
pub(crate) fn shell_quote(arg: &str) -> String {
    let safe = |c: char| c.is_ascii_alphanumeric() || "@%+=:,./_-".contains(c);
    if !arg.is_empty() && arg.chars().all(safe) {
        arg.to_string()
    } else {
        format!("'{}'", arg.replace('\'', r"'\''"))
    }
}
