//! Shared fixtures for vogen-codegen-go integration tests.

#![allow(dead_code)]

use std::path::Path;

use vogen_codegen::{GenerateOptions, pipeline::Pipeline};
use vogen_codegen_go::{Generator, LanguageCodegen, PreviewFile};
use vogen_model::ResolutionModel;
use vogen_source::SourceContext;

/// Every field constructor can fail, and one field is a
/// pointer to a defined type.
pub const ADDRESS: &str = r#"package sample

type (
	AddressNumber   int
	AddressNumber2p *AddressNumber
	AddressCity     string
	AddressCountry  string
)

type Address struct {
	Number   AddressNumber
	Number2p AddressNumber2p
	City     AddressCity
	Country  AddressCountry
}

func NewAddressNumber(number int) (AddressNumber, error) {
	return AddressNumber(number), nil
}

func NewAddressNumber2p(number *int) (AddressNumber2p, error) {
	var n2p AddressNumber2p
	if number != nil {
		n, err := NewAddressNumber(*number)
		if err != nil {
			return nil, err
		}
		n2p = &n
	}
	return n2p, nil
}

func NewAddressCity(city string) (AddressCity, error) {
	return AddressCity(city), nil
}

func NewAddressCountry(country string) (AddressCountry, error) {
	return AddressCountry(country), nil
}
"#;

/// Infallible field constructors and an external field type.
pub const PERSON: &str = r#"package sample

import (
	"testing"
	"time"
)

type (
	PersonName string
	PersonAge  int
)

type Person struct {
	Name      PersonName
	Age       PersonAge
	CreatedAt time.Time
}

func NewPersonName(name string) PersonName {
	return PersonName(name)
}

func NewPersonAge(age int) PersonAge {
	return PersonAge(age)
}

func BuildPersonName(t *testing.T) PersonName {
	return PersonName("gopher")
}

func BuildPersonAge(t *testing.T) PersonAge {
	return PersonAge(20)
}

func BuildPersonCreatedAt(t *testing.T) time.Time {
	return time.Unix(0, 0)
}
"#;

/// Both fixtures in one unit, `Person` declared first.
pub fn combined() -> String {
    format!("{}\n{}", PERSON, ADDRESS.replace("package sample\n", ""))
}

/// Run the analysis pipeline over in-memory source.
pub fn analyze(src: &str, options: &GenerateOptions) -> ResolutionModel {
    let source = SourceContext::new(src, "sample/sample.go");
    let file = vogen_source::parse(&source).expect("Failed to parse source");
    Pipeline::new()
        .run(source, file, options.clone())
        .expect("Pipeline failed")
        .into_model()
        .expect("Incomplete model")
}

/// Render every output file for `src`, in generation order.
pub fn generate_files(src: &str, options: &GenerateOptions) -> Vec<PreviewFile> {
    let model = analyze(src, options);
    Generator::new(&model, options, Path::new("sample/sample.go")).preview()
}

/// Get a specific file from the generated output by file name suffix.
pub fn get_file<'a>(files: &'a [PreviewFile], suffix: &str) -> Option<&'a str> {
    files
        .iter()
        .find(|f| f.path.to_string_lossy().ends_with(suffix))
        .map(|f| f.content.as_str())
}
