//! Build-graph isolation.
//!
//! The kernel is the value-typed board model: it must not reach into the
//! search layer, and it must not pull in logging or config crates.

use std::fmt::Write;
use std::fs;
use std::path::Path;

/// Forbidden patterns in non-comment kernel source lines.
const FORBIDDEN_PATTERNS: &[&str] = &["slide_search", "tracing::", "serde", "toml::"];

/// Forbidden dependency names in `kernel/Cargo.toml`.
const FORBIDDEN_DEPENDENCIES: &[&str] = &["slide-search", "tracing", "serde", "toml"];

fn workspace_root() -> &'static Path {
    // lock-tests lives at tests/lock/, so workspace root is ../..
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("tests/ exists")
        .parent()
        .expect("workspace root exists")
}

fn walk(dir: &Path, violations: &mut Vec<(String, usize, String)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            walk(&path, violations);
        } else if path.extension().is_some_and(|e| e == "rs") {
            check_file(&path, violations);
        }
    }
}

fn check_file(path: &Path, violations: &mut Vec<(String, usize, String)>) {
    let Ok(content) = fs::read_to_string(path) else {
        return;
    };
    for (line_no, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.starts_with("//") || trimmed.starts_with("/*") || trimmed.starts_with('*') {
            continue;
        }
        for pattern in FORBIDDEN_PATTERNS {
            if trimmed.contains(pattern) {
                violations.push((path.display().to_string(), line_no + 1, line.to_string()));
            }
        }
    }
}

#[test]
fn kernel_source_does_not_reference_search_layer() {
    let mut violations = Vec::new();
    walk(&workspace_root().join("kernel").join("src"), &mut violations);

    if !violations.is_empty() {
        let mut msg = String::from("forbidden references found in kernel source:\n");
        for (file, line, content) in &violations {
            let _ = writeln!(msg, "  {file}:{line}: {content}");
        }
        panic!("{msg}");
    }
}

#[test]
fn kernel_cargo_toml_has_no_search_dependencies() {
    let cargo_toml = workspace_root().join("kernel").join("Cargo.toml");
    let content = fs::read_to_string(&cargo_toml).expect("kernel/Cargo.toml is readable");

    let mut in_dependencies = false;
    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.starts_with('[') {
            in_dependencies = trimmed == "[dependencies]";
            continue;
        }
        if !in_dependencies {
            continue;
        }
        let Some((name, _)) = trimmed.split_once('=') else {
            continue;
        };
        let name = name.trim();
        assert!(
            !FORBIDDEN_DEPENDENCIES.contains(&name),
            "kernel/Cargo.toml depends on {name}"
        );
    }
}
