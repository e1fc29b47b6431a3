//! Snapshot tests for Go code generation.
//!
//! These tests verify that the generated Go code matches expected output.
//! Run `cargo insta review` to update snapshots when making intentional changes.

mod common;

use common::{ADDRESS, PERSON, combined, generate_files, get_file};
use vogen_codegen::GenerateOptions;
use vogen_model::ErrorScope;

#[test]
fn test_fallible_constructor_with_pointer_field() {
    let files = generate_files(ADDRESS, &GenerateOptions::new("New", ["Address"]));
    assert_eq!(files.len(), 1);

    let vo = get_file(&files, "sample_vo_gen.go").expect("constructor file not found");
    insta::assert_snapshot!(vo, @r"
// Code generated by vogen. DO NOT EDIT.

package sample

func NewAddress(number int, number2p *int, city string, country string) (*Address, error) {
	vogenNumber, err := NewAddressNumber(number)
	if err != nil {
		return nil, err
	}
	vogenNumber2p, err := NewAddressNumber2p(number2p)
	if err != nil {
		return nil, err
	}
	vogenCity, err := NewAddressCity(city)
	if err != nil {
		return nil, err
	}
	vogenCountry, err := NewAddressCountry(country)
	if err != nil {
		return nil, err
	}
	return &Address{
		Number:   vogenNumber,
		Number2p: vogenNumber2p,
		City:     vogenCity,
		Country:  vogenCountry,
	}, nil
}
");
}

#[test]
fn test_infallible_constructor_with_external_field() {
    let files = generate_files(PERSON, &GenerateOptions::new("New", ["Person"]));

    let vo = get_file(&files, "sample_vo_gen.go").expect("constructor file not found");
    insta::assert_snapshot!(vo, @r#"
// Code generated by vogen. DO NOT EDIT.

package sample

import "time"

func NewPerson(name string, age int, createdAt time.Time) *Person {
	vogenName := NewPersonName(name)
	vogenAge := NewPersonAge(age)
	return &Person{
		Name:      vogenName,
		Age:       vogenAge,
		CreatedAt: createdAt,
	}
}
"#);
}

#[test]
fn test_raw_value_accessors() {
    let options = GenerateOptions::new("New", ["Person"]).with_raw_values(true);
    let files = generate_files(PERSON, &options);

    let vo = get_file(&files, "sample_vo_gen.go").expect("constructor file not found");
    insta::assert_snapshot!(vo, @r#"
// Code generated by vogen. DO NOT EDIT.

package sample

import "time"

func NewPerson(name string, age int, createdAt time.Time) *Person {
	vogenName := NewPersonName(name)
	vogenAge := NewPersonAge(age)
	return &Person{
		Name:      vogenName,
		Age:       vogenAge,
		CreatedAt: createdAt,
	}
}

type rawPerson struct {
	Name      string
	Age       int
	CreatedAt time.Time
}

func (d Person) RawValue() rawPerson {
	return rawPerson{
		Name:      d.Name.RawValue(),
		Age:       d.Age.RawValue(),
		CreatedAt: d.CreatedAt,
	}
}

func (d PersonName) RawValue() string {
	return string(d)
}

func (d PersonAge) RawValue() int {
	return int(d)
}
"#);
}

#[test]
fn test_raw_value_struct_copies_pointer_fields() {
    let options = GenerateOptions::new("New", ["Address"]).with_raw_values(true);
    let files = generate_files(ADDRESS, &options);
    let vo = get_file(&files, "sample_vo_gen.go").expect("constructor file not found");

    let (_, raw) = vo
        .split_once("}, nil\n}\n\n")
        .expect("constructor body not found");
    insta::assert_snapshot!(raw, @r"
type rawAddress struct {
	Number   int
	Number2p AddressNumber2p
	City     string
	Country  string
}

func (d Address) RawValue() rawAddress {
	return rawAddress{
		Number:   d.Number.RawValue(),
		Number2p: d.Number2p,
		City:     d.City.RawValue(),
		Country:  d.Country.RawValue(),
	}
}

func (d AddressNumber) RawValue() int {
	return int(d)
}

func (d AddressCity) RawValue() string {
	return string(d)
}

func (d AddressCountry) RawValue() string {
	return string(d)
}
");
}

#[test]
fn test_raw_value_struct_skipped_when_declared() {
    let src = format!("{}\nfunc (p Person) RawValue() string {{\n\treturn \"\"\n}}\n", PERSON);
    let options = GenerateOptions::new("New", ["Person"]).with_raw_values(true);
    let files = generate_files(&src, &options);
    let vo = get_file(&files, "sample_vo_gen.go").expect("constructor file not found");

    assert!(!vo.contains("rawPerson"));
    assert!(vo.contains("func (d PersonName) RawValue() string {"));
}

#[test]
fn test_factory_file() {
    let options = GenerateOptions::new("New", ["Person"]).with_factory(true);
    let files = generate_files(PERSON, &options);
    assert_eq!(files.len(), 2);

    let factory = get_file(&files, "sample_factory_gen.go").expect("factory file not found");
    insta::assert_snapshot!(factory, @r#"
// Code generated by vogen. DO NOT EDIT.

package sample

import (
	"testing"
	"time"
)

type PersonSetter struct {
	Name      *PersonName
	Age       *PersonAge
	CreatedAt *time.Time
}

func BuildPerson(t *testing.T, s *PersonSetter) *Person {
	t.Helper()
	if s == nil {
		s = &PersonSetter{}
	}
	obj := &Person{}
	if s.Name == nil {
		obj.Name = BuildPersonName(t)
	} else {
		obj.Name = *s.Name
	}
	if s.Age == nil {
		obj.Age = BuildPersonAge(t)
	} else {
		obj.Age = *s.Age
	}
	if s.CreatedAt == nil {
		obj.CreatedAt = BuildPersonCreatedAt(t)
	} else {
		obj.CreatedAt = *s.CreatedAt
	}
	return obj
}
"#);
}

#[test]
fn test_empty_struct_and_plain_fields() {
    let src = "package sample\n\ntype Empty struct{}\n\ntype Point struct {\n\tX, Y int\n\tType string\n}\n";
    let files = generate_files(src, &GenerateOptions::new("New", ["Empty", "Point"]));

    let vo = get_file(&files, "sample_vo_gen.go").expect("constructor file not found");
    insta::assert_snapshot!(vo, @r"
// Code generated by vogen. DO NOT EDIT.

package sample

func NewEmpty() *Empty {
	return &Empty{}
}

func NewPoint(x int, y int, type_ string) *Point {
	return &Point{
		X:    x,
		Y:    y,
		Type: type_,
	}
}
");
}

#[test]
fn test_global_error_scope_makes_every_constructor_fallible() {
    let src = combined();
    let files = generate_files(&src, &GenerateOptions::new("New", ["Address", "Person"]));
    let vo = get_file(&files, "sample_vo_gen.go").expect("constructor file not found");

    assert!(vo.contains(
        "func NewPerson(name string, age int, createdAt time.Time) (*Person, error) {"
    ));
    assert!(vo.contains("\t\tCreatedAt: createdAt,\n\t}, nil\n"));
}

#[test]
fn test_per_struct_error_scope() {
    let src = combined();
    let options = GenerateOptions::new("New", ["Address", "Person"])
        .with_error_scope(ErrorScope::PerStruct);
    let files = generate_files(&src, &options);
    let vo = get_file(&files, "sample_vo_gen.go").expect("constructor file not found");

    assert!(vo.contains("(*Address, error) {"));
    assert!(vo.contains("func NewPerson(name string, age int, createdAt time.Time) *Person {"));
    assert!(!vo.contains("(*Person, error)"));
}

#[test]
fn test_structs_render_in_declaration_order() {
    let src = combined();
    let files = generate_files(&src, &GenerateOptions::new("New", ["Address", "Person"]));
    let vo = get_file(&files, "sample_vo_gen.go").expect("constructor file not found");

    let address = vo.find("func NewAddress(").expect("NewAddress missing");
    let person = vo.find("func NewPerson(").expect("NewPerson missing");
    assert!(person < address);
}

#[test]
fn test_imports_collapse_and_sort() {
    let src = r#"package sample

import (
	"time"

	gofrs "github.com/gofrs/uuid"
)

type Event struct {
	ID      gofrs.UUID
	Start   time.Time
	End     time.Time
	Windows map[string]time.Duration
}
"#;
    let files = generate_files(src, &GenerateOptions::new("New", ["Event"]));
    let vo = get_file(&files, "sample_vo_gen.go").expect("constructor file not found");

    assert!(vo.contains("import (\n\tgofrs \"github.com/gofrs/uuid\"\n\t\"time\"\n)\n"));
    assert_eq!(vo.matches("\"time\"").count(), 1);
}

#[test]
fn test_output_is_deterministic() {
    let options = GenerateOptions::new("New", ["Person"])
        .with_factory(true)
        .with_raw_values(true);
    assert_eq!(
        generate_files(PERSON, &options),
        generate_files(PERSON, &options)
    );
}

#[test]
fn test_interface_fields_import_their_qualifiers() {
    let src = r#"package sample

import (
	"context"
	"time"
)

type Handler interface {
	Serve(ctx context.Context) error
}

type Job struct {
	H    Handler
	Wait interface{ Until() time.Time }
}
"#;
    let files = generate_files(src, &GenerateOptions::new("New", ["Job"]));
    let vo = get_file(&files, "sample_vo_gen.go").expect("constructor file not found");

    insta::assert_snapshot!(vo, @r#"
// Code generated by vogen. DO NOT EDIT.

package sample

import (
	"context"
	"time"
)

func NewJob(h interface{ Serve(ctx context.Context) error }, wait interface{ Until() time.Time }) *Job {
	return &Job{
		H:    h,
		Wait: wait,
	}
}
"#);
}

#[test]
fn test_params_never_collide() {
    let src = "package sample\n\ntype S struct {\n\tURL string\n\tuRL string\n}\n\ntype address struct {\n\tAddress string\n}\n";
    let files = generate_files(src, &GenerateOptions::new("New", ["S", "address"]));
    let vo = get_file(&files, "sample_vo_gen.go").expect("constructor file not found");

    insta::assert_snapshot!(vo, @r"
// Code generated by vogen. DO NOT EDIT.

package sample

func NewS(uRL string, uRL_ string) *S {
	return &S{
		URL: uRL,
		uRL: uRL_,
	}
}

func Newaddress(address_ string) *address {
	return &address{
		Address: address_,
	}
}
");
}
