//! Integration tests for the readme module public API.

use std::fs;
use std::path::{Path, PathBuf};

use goreadme::readme::{
    check_readmes, find_readmes, marker_line, readme_package, verify_readme, write_readme,
    ReadmeFormatter, ReadmeRegistry,
};
use goreadme::render::{DocRenderer, RenderConfig};
use goreadme::Result;
use tempfile::TempDir;

/// Renders a heading for the package, plus a source link the formatter rewrites.
fn heading(pkgs: &[&str], _: &RenderConfig) -> Result<String> {
    Ok(format!(
        "# {pkg}\n\n[source](/src/{pkg}/{pkg}.go#L1)\n",
        pkg = pkgs[0]
    ))
}

fn formatter() -> ReadmeFormatter<impl DocRenderer> {
    ReadmeFormatter::new(heading)
}

fn marked(dir: &Path, name: &str, pkg: &str) -> PathBuf {
    fs::create_dir_all(dir).unwrap();
    let path = dir.join(name);
    fs::write(&path, format!("# {}\n\n{}\n", pkg, marker_line(pkg))).unwrap();
    path
}

#[test]
fn format_is_idempotent() {
    let formatter = formatter();
    assert_eq!(formatter.format("P").unwrap(), formatter.format("P").unwrap());
}

#[test]
fn marker_round_trips_through_format() {
    for pkg in ["P", "github.com/user/repo", "example.com/a/b/c", "with space"] {
        let content = formatter().format(pkg).unwrap();
        assert_eq!(readme_package(content.as_bytes()).as_deref(), Some(pkg));
    }
}

#[test]
fn format_rewrites_package_source_links() {
    let content = formatter().format("P").unwrap();
    assert!(content.contains("[source](./P.go#L1)"));
    assert!(!content.contains("/src/P/"));
}

#[test]
fn verify_missing_file_is_not_an_error() {
    let ok = verify_readme(&formatter(), "P", Path::new("/nonexistent/path")).unwrap();
    assert!(!ok);
}

#[test]
fn verify_after_write_is_fresh() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("README.md");
    let formatter = formatter();

    write_readme(&formatter, "P", &path).unwrap();

    assert!(verify_readme(&formatter, "P", &path).unwrap());
}

#[test]
fn scan_skips_excluded_directory() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    let a = marked(&root.join("a"), "readme.md", "P");
    marked(&root.join("excluded"), "readme.md", "Q");

    let found = find_readmes(root, "readme.md", &[root.join("excluded")]).unwrap();

    let expected: ReadmeRegistry = [(a, "P".to_string())].into_iter().collect();
    assert_eq!(found, expected);
}

#[test]
fn scan_matches_file_names_case_insensitively() {
    let temp = TempDir::new().unwrap();
    let upper = marked(temp.path(), "README.MD", "P");

    let found = find_readmes::<PathBuf>(temp.path(), "readme.md", &[]).unwrap();

    assert_eq!(found.get(&upper).map(String::as_str), Some("P"));
}

#[test]
fn scan_skips_files_without_marker() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("readme.md"), "# Hand-written\n").unwrap();

    let found = find_readmes::<PathBuf>(temp.path(), "readme.md", &[]).unwrap();

    assert!(found.is_empty());
}

#[test]
fn check_reports_one_stale_of_two() {
    let temp = TempDir::new().unwrap();
    let formatter = formatter();
    let fresh_dir = temp.path().join("fresh");
    fs::create_dir_all(&fresh_dir).unwrap();
    write_readme(&formatter, "F", &fresh_dir.join("README.md")).unwrap();
    let stale = marked(&temp.path().join("stale"), "README.md", "S");

    let report = check_readmes::<_, PathBuf>(&formatter, temp.path(), "README.md", &[]).unwrap();

    assert!(!report.all_up_to_date());
    assert_eq!(report.stale, vec![stale]);
}
