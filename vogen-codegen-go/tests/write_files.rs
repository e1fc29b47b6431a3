//! Tests for writing generated files to disk.

mod common;

use std::fs;

use common::{PERSON, analyze};
use tempfile::TempDir;
use vogen_codegen::GenerateOptions;
use vogen_codegen_go::{Generator, LanguageCodegen, OutputNames};
use vogen_core::WriteResult;

#[test]
fn test_files_written_next_to_input() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let input = temp_dir.path().join("person.go");
    fs::write(&input, PERSON).unwrap();

    let options = GenerateOptions::new("New", ["Person"]).with_factory(true);
    let model = analyze(PERSON, &options);
    let result = Generator::new(&model, &options, &input)
        .generate()
        .expect("Failed to generate code");

    assert_eq!(result.written().count(), 2);
    let vo = fs::read_to_string(temp_dir.path().join("person_vo_gen.go")).unwrap();
    assert!(vo.starts_with("// Code generated by vogen. DO NOT EDIT.\n"));
    assert!(temp_dir.path().join("person_factory_gen.go").exists());
}

#[test]
fn test_regeneration_is_unchanged() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let input = temp_dir.path().join("person.go");
    let options = GenerateOptions::new("New", ["Person"]);
    let model = analyze(PERSON, &options);
    let generator = Generator::new(&model, &options, &input);

    let first = generator.generate().unwrap();
    assert_eq!(first.files[0].1, WriteResult::Written);

    let second = generator.generate().unwrap();
    assert_eq!(second.files[0].1, WriteResult::Unchanged);
    assert_eq!(second.unchanged().count(), 1);
}

#[test]
fn test_stale_output_is_overwritten() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let input = temp_dir.path().join("person.go");
    let output = temp_dir.path().join("person_vo_gen.go");
    fs::write(&output, "package stale\n").unwrap();

    let options = GenerateOptions::new("New", ["Person"]);
    let model = analyze(PERSON, &options);
    let result = Generator::new(&model, &options, &input).generate().unwrap();

    assert_eq!(result.files, vec![(output.clone(), WriteResult::Written)]);
    assert!(fs::read_to_string(&output).unwrap().contains("func NewPerson("));
}

#[test]
fn test_custom_suffixes() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let input = temp_dir.path().join("person.go");
    let options = GenerateOptions::new("New", ["Person"]).with_factory(true);
    let model = analyze(PERSON, &options);
    let generator = Generator::new(&model, &options, &input).with_names(OutputNames {
        constructor_suffix: "_ctor.go".to_string(),
        factory_suffix: "_fixture.go".to_string(),
    });

    let paths: Vec<_> = generator.preview().into_iter().map(|f| f.path).collect();
    assert_eq!(
        paths,
        vec![
            temp_dir.path().join("person_ctor.go"),
            temp_dir.path().join("person_fixture.go"),
        ]
    );
}
