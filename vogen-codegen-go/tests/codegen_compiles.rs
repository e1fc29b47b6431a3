//! Integration tests that verify generated code compiles.
//!
//! These tests write a fixture and its generated files into a Go module and
//! run `go vet` on it. They are skipped when the Go toolchain is not
//! installed.

mod common;

use std::{fs, path::Path, process::Command};

use common::{ADDRESS, PERSON, analyze, combined};
use tempfile::TempDir;
use vogen_codegen::GenerateOptions;
use vogen_codegen_go::{Generator, LanguageCodegen};

fn go_available() -> bool {
    Command::new("go")
        .arg("version")
        .output()
        .is_ok_and(|out| out.status.success())
}

/// Generate code for `src` and verify the package builds with `go vet`.
fn assert_generated_code_compiles(src: &str, options: GenerateOptions) {
    if !go_available() {
        eprintln!("skipping: go toolchain not found");
        return;
    }

    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let dir = temp_dir.path();
    fs::write(dir.join("go.mod"), "module example.com/sample\n\ngo 1.21\n").unwrap();
    let input = dir.join("sample.go");
    fs::write(&input, src).unwrap();

    let model = analyze(src, &options);
    Generator::new(&model, &options, &input)
        .generate()
        .expect("Failed to generate code");

    let output = Command::new("go")
        .args(["vet", "./..."])
        .current_dir(dir)
        .output()
        .expect("Failed to run go vet");

    if !output.status.success() {
        eprintln!("\n=== Generated files ===");
        print_go_files(dir);
        panic!(
            "Generated code failed to compile!\n\nstdout:\n{}\n\nstderr:\n{}",
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
    }
}

/// Print all Go files for debugging
fn print_go_files(dir: &Path) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for path in entries.flatten().map(|e| e.path()) {
        if path.extension().is_some_and(|e| e == "go") {
            eprintln!("{}", path.display());
            if let Ok(content) = fs::read_to_string(&path) {
                for line in content.lines() {
                    eprintln!("  | {}", line);
                }
            }
        }
    }
}

#[test]
fn test_fallible_constructors_compile() {
    assert_generated_code_compiles(ADDRESS, GenerateOptions::new("New", ["Address"]));
}

#[test]
fn test_factory_and_raw_values_compile() {
    assert_generated_code_compiles(
        PERSON,
        GenerateOptions::new("New", ["Person"])
            .with_factory(true)
            .with_raw_values(true),
    );
}

#[test]
fn test_mixed_error_shapes_compile() {
    assert_generated_code_compiles(
        &combined(),
        GenerateOptions::new("New", ["Address", "Person"]),
    );
}
