use std::fs;

use tempfile::TempDir;
use vogen_source::{Error, TypeExpr, parse_file};

#[test]
fn parses_file_from_disk() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("person.go");
    fs::write(
        &path,
        "package model\n\ntype Age int\n\ntype Person struct {\n\tAge Age\n}\n",
    )
    .unwrap();

    let (ctx, file) = parse_file(&path).unwrap();
    assert!(ctx.filename().ends_with("person.go"));
    assert_eq!(file.package.name, "model");

    let person = file
        .type_specs()
        .find(|t| t.name.name == "Person")
        .expect("Person declared");
    let TypeExpr::Struct(fields) = &person.ty else {
        panic!("expected struct");
    };
    assert_eq!(fields[0].ty, TypeExpr::named("Age"));
}

#[test]
fn missing_file_is_io_error() {
    let temp = TempDir::new().unwrap();
    let err = parse_file(&temp.path().join("missing.go")).unwrap_err();
    assert!(matches!(*err, Error::Io { .. }));
}

#[test]
fn parse_error_points_into_source() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("bad.go");
    fs::write(&path, "package model\n\ntype Person struct {\n\tName\n").unwrap();

    let err = parse_file(&path).unwrap_err();
    match *err {
        Error::Parse { ref src, .. } => {
            assert!(src.name().ends_with("bad.go"));
        }
        ref other => panic!("unexpected error: {other:?}"),
    }
}
