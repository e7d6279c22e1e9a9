use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

const ROOT_ENV_VAR: &str = "SLIDEFACTORY_ROOT";

/// Create a fake install root with the default theme and metadata files.
fn create_install_root() -> TempDir {
    let root = TempDir::new().expect("Failed to create temp dir");
    let theme_dir = root.path().join("theme").join("csc-2016");
    fs::create_dir_all(&theme_dir).expect("Failed to create theme dir");
    for fname in ["defaults.yaml", "template.html", "csc.css"] {
        fs::write(theme_dir.join(fname), "").expect("Failed to write theme file");
    }
    fs::write(root.path().join("urls.yaml"), "").expect("Failed to write urls.yaml");
    fs::write(root.path().join("urls_local.yaml"), "").expect("Failed to write urls_local.yaml");
    root
}

fn run_command(root: &Path, workdir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_slidefactory"))
        .env(ROOT_ENV_VAR, root)
        .current_dir(workdir)
        .args(args)
        .output()
        .expect("Failed to execute command")
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(|l| l.to_string())
        .collect()
}

#[test]
fn test_dry_run_html_prints_single_pandoc_command() {
    let root = create_install_root();
    let workdir = TempDir::new().expect("Failed to create temp dir");

    let output = run_command(
        root.path(),
        workdir.path(),
        &["talk.md", "-f", "html", "--dry-run"],
    );
    assert!(output.status.success(), "Command failed: {:?}", output);

    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 1, "Expected exactly one command: {:?}", lines);
    assert!(lines[0].starts_with("pandoc "), "Not a pandoc command: {}", lines[0]);

    // Online HTML uses the online metadata file.
    assert!(lines[0].contains("urls.yaml"), "Missing urls.yaml: {}", lines[0]);
    assert!(
        !lines[0].contains("urls_local.yaml"),
        "Should not use urls_local.yaml: {}",
        lines[0]
    );

    // A non-canonical install references the stylesheet locally.
    assert!(
        lines[0].contains("--metadata=theme-url:file://"),
        "Expected local theme url: {}",
        lines[0]
    );
    assert!(lines[0].contains("--output=talk.html"), "Wrong output: {}", lines[0]);
}

#[test]
fn test_show_command_alias_matches_dry_run() {
    let root = create_install_root();
    let workdir = TempDir::new().expect("Failed to create temp dir");

    let dry = run_command(
        root.path(),
        workdir.path(),
        &["talk.md", "-f", "html", "--dry-run"],
    );
    let show = run_command(
        root.path(),
        workdir.path(),
        &["talk.md", "-f", "html", "--show-command"],
    );
    assert!(show.status.success(), "Command failed: {:?}", show);
    assert_eq!(dry.stdout, show.stdout);
}

#[test]
fn test_invalid_theme_lists_available_themes() {
    let root = create_install_root();
    let workdir = TempDir::new().expect("Failed to create temp dir");

    let output = run_command(
        root.path(),
        workdir.path(),
        &["talk.md", "-t", "missing", "--dry-run"],
    );
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Invalid theme missing. Available themes: csc-2016."),
        "Unexpected stderr: {}",
        stderr
    );
}

#[test]
fn test_missing_install_root_env_is_fatal() {
    let workdir = TempDir::new().expect("Failed to create temp dir");
    let output = Command::new(env!("CARGO_BIN_EXE_slidefactory"))
        .env_remove(ROOT_ENV_VAR)
        .current_dir(workdir.path())
        .args(["talk.md", "--dry-run"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("SLIDEFACTORY_ROOT is not set"),
        "Unexpected stderr: {}",
        stderr
    );
}

#[test]
fn test_offline_html_rejected_on_canonical_install() {
    let workdir = TempDir::new().expect("Failed to create temp dir");
    let output = run_command(
        Path::new("/slidefactory"),
        workdir.path(),
        &["talk.md", "-f", "html-offline", "--dry-run"],
    );

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Install slidefactory locally"),
        "Unexpected stderr: {}",
        stderr
    );
    // The guard fires before any command is printed or run.
    assert!(output.stdout.is_empty());
}

#[test]
fn test_self_contained_filter_ordering() {
    let root = create_install_root();
    let workdir = TempDir::new().expect("Failed to create temp dir");

    let output = run_command(
        root.path(),
        workdir.path(),
        &[
            "talk.md",
            "-f",
            "html",
            "--self-contained",
            "--filter",
            "custom.py",
            "--dry-run",
        ],
    );
    assert!(output.status.success(), "Command failed: {:?}", output);

    let lines = stdout_lines(&output);
    let custom = lines[0]
        .find("--filter=custom.py")
        .expect("Missing user filter");
    let encode = lines[0]
        .find("url-encode.py")
        .expect("Missing url-encode filter");
    assert!(
        custom < encode,
        "User filter must precede url-encode: {}",
        lines[0]
    );
}

#[test]
fn test_output_prefix_is_concatenated() {
    let root = create_install_root();
    let workdir = TempDir::new().expect("Failed to create temp dir");

    let output = run_command(
        root.path(),
        workdir.path(),
        &["talk.md", "-f", "html", "--output", "build/", "--dry-run"],
    );
    assert!(output.status.success(), "Command failed: {:?}", output);

    let lines = stdout_lines(&output);
    assert!(
        lines[0].contains("--output=build/talk.html"),
        "Wrong output path: {}",
        lines[0]
    );
}

#[test]
fn test_multiple_inputs_produce_one_command_each() {
    let root = create_install_root();
    let workdir = TempDir::new().expect("Failed to create temp dir");

    let output = run_command(
        root.path(),
        workdir.path(),
        &["one.md", "two.md", "-f", "html", "--dry-run"],
    );
    assert!(output.status.success(), "Command failed: {:?}", output);

    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("--output=one.html"));
    assert!(lines[1].contains("--output=two.html"));
}
