//! Struct phase - builds models for the requested structs.

use vogen_model::{FieldKind, FieldModel, StructModel, TypeCatalog};
use vogen_source::{FieldDecl, Result, SourceFile, TypeExpr, TypeSpec};

use super::imports::resolve_imports;
use crate::pipeline::{CompilationContext, Phase};

/// Phase that turns each requested struct declaration into a [`StructModel`].
///
/// Structs are visited in declaration order, not request order. Requires
/// the catalog.
pub struct StructPhase;

impl Phase for StructPhase {
    fn name(&self) -> &'static str {
        "structs"
    }

    fn description(&self) -> &'static str {
        "Build field models for the requested structs"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let catalog = ctx.require_catalog(self.name())?;
        let targets = ctx.options.targets();

        let declared: Vec<&TypeSpec> = ctx
            .file
            .type_specs()
            .filter(|spec| matches!(spec.ty, TypeExpr::Struct(_)))
            .collect();

        let missing: Vec<String> = targets
            .iter()
            .filter(|name| !declared.iter().any(|spec| spec.name.name == **name))
            .map(|name| name.to_string())
            .collect();

        let mut matched: Vec<&TypeSpec> = Vec::new();
        for &spec in &declared {
            let wanted = targets.contains(&spec.name.name.as_str());
            if wanted && !matched.iter().any(|m| m.name.name == spec.name.name) {
                matched.push(spec);
            }
        }

        if matched.is_empty() {
            let requested: Vec<String> = targets.iter().map(|t| t.to_string()).collect();
            let available: Vec<String> = declared.iter().map(|s| s.name.name.clone()).collect();
            return Err(ctx
                .source
                .no_matching_structs_error(&requested, &available));
        }

        let mut builder = StructBuilder {
            file: &ctx.file,
            catalog,
            unresolved: Vec::new(),
        };
        let mut structs = Vec::with_capacity(matched.len());
        for spec in matched {
            if spec.is_generic {
                return Err(ctx
                    .source
                    .generic_struct_error(&spec.name.name, spec.name.span));
            }
            let TypeExpr::Struct(fields) = &spec.ty else {
                continue;
            };
            if let Some(embedded) = fields.iter().find(|f| f.is_embedded()) {
                return Err(ctx.source.anonymous_field_error(
                    &spec.name.name,
                    embedded.ty.to_string(),
                    embedded.span,
                ));
            }
            structs.push(builder.build(spec, fields));
        }
        let unresolved = builder.unresolved;

        let filename = ctx.source.filename().to_string();
        for name in missing {
            ctx.add_warning(
                self.name(),
                format!("struct '{}' is not declared in '{}'; skipping", name, filename),
            );
        }
        for model in structs.iter().filter(|s| s.fields.is_empty()) {
            ctx.add_info(
                self.name(),
                format!("struct '{}' has no fields", model.name),
            );
        }
        ctx.warn_unresolved(self.name(), &unresolved);
        ctx.structs = Some(structs);
        Ok(())
    }
}

struct StructBuilder<'a> {
    file: &'a SourceFile,
    catalog: &'a TypeCatalog,
    unresolved: Vec<String>,
}

impl StructBuilder<'_> {
    fn build(&mut self, spec: &TypeSpec, fields: &[FieldDecl]) -> StructModel {
        let mut model = StructModel::new(&spec.name.name, spec.span);
        for field in fields {
            for name in &field.names {
                model.fields.push(self.field(&name.name, &field.ty, field.span));
            }
        }
        model
    }

    fn field(&mut self, name: &str, ty: &TypeExpr, span: vogen_source::Span) -> FieldModel {
        let declared = ty.to_string();

        if let Some(ident) = ty.as_ident() {
            let (resolved, kind, resolved_imports) = match self.catalog.get(ident) {
                Some(defined) => (
                    defined.underlying.clone(),
                    FieldKind::Defined,
                    defined.imports.clone(),
                ),
                None => (declared.clone(), FieldKind::Plain, Vec::new()),
            };
            return FieldModel {
                name: name.to_string(),
                declared,
                resolved,
                kind,
                resolved_imports,
                declared_imports: Vec::new(),
                span,
            };
        }

        let kind = match ty {
            TypeExpr::Named {
                qualifier: Some(_), ..
            } => FieldKind::Qualified,
            _ => FieldKind::Verbatim,
        };
        let resolved = resolve_imports(self.file, ty);
        for qualifier in resolved.unresolved {
            if !self.unresolved.contains(&qualifier) {
                self.unresolved.push(qualifier);
            }
        }
        FieldModel {
            name: name.to_string(),
            resolved: declared.clone(),
            declared,
            kind,
            resolved_imports: resolved.imports.clone(),
            declared_imports: resolved.imports,
            span,
        }
    }
}

#[cfg(test)]
mod tests {
    use vogen_model::{Import, TypeKind};
    use vogen_source::{Error, SourceContext};

    use super::*;
    use crate::{GenerateOptions, pipeline::phases::CatalogPhase};

    const SAMPLE: &str = r#"package sample

import (
	"time"

	"github.com/google/uuid"
)

type AddressNumber int
type AddressCity string
type AddressNumber2p *AddressNumber
type CreatedAt time.Time

type Address struct {
	Number   AddressNumber
	City     AddressCity
	Number2p AddressNumber2p
}

type Person struct {
	ID        uuid.UUID
	First, Last string
	Tags      []string
	Seen      map[string]time.Time
	Home      *Address
	Created   CreatedAt
}

type Empty struct{}
"#;

    fn run(src: &str, structs: &[&str]) -> Result<CompilationContext> {
        let source = SourceContext::new(src, "sample.go");
        let file = vogen_source::parse(&source)?;
        let options = GenerateOptions::new("New", structs.iter().copied());
        let mut ctx = CompilationContext::new(source, file, options);
        CatalogPhase.run(&mut ctx)?;
        StructPhase.run(&mut ctx)?;
        Ok(ctx)
    }

    fn structs(src: &str, structs: &[&str]) -> Vec<StructModel> {
        run(src, structs)
            .expect("structs should build")
            .structs
            .expect("structs populated")
    }

    #[test]
    fn test_defined_fields_resolve_to_root() {
        let models = structs(SAMPLE, &["Address"]);
        let fields = &models[0].fields;
        let resolved: Vec<_> = fields.iter().map(|f| f.resolved.as_str()).collect();
        assert_eq!(resolved, vec!["int", "string", "*int"]);
        assert!(fields.iter().all(|f| f.kind == FieldKind::Defined));
        assert_eq!(fields[2].defined_type(), Some("AddressNumber2p"));
    }

    #[test]
    fn test_field_classification() {
        let models = structs(SAMPLE, &["Person"]);
        let person = &models[0];
        let names: Vec<_> = person.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["ID", "First", "Last", "Tags", "Seen", "Home", "Created"]
        );

        let id = &person.fields[0];
        assert_eq!(id.kind, FieldKind::Qualified);
        assert_eq!(id.resolved, "uuid.UUID");
        assert_eq!(id.resolved_imports, vec![Import::new("github.com/google/uuid")]);

        assert_eq!(person.fields[1].kind, FieldKind::Plain);
        assert_eq!(person.fields[3].kind, FieldKind::Verbatim);

        let seen = &person.fields[4];
        assert_eq!(seen.resolved, "map[string]time.Time");
        assert_eq!(seen.declared_imports, vec![Import::new("time")]);

        let home = &person.fields[5];
        assert_eq!(home.kind, FieldKind::Verbatim);
        assert_eq!(home.resolved, "*Address");

        let created = &person.fields[6];
        assert_eq!(created.kind, FieldKind::Defined);
        assert_eq!(created.resolved, "time.Time");
        assert_eq!(created.resolved_imports, vec![Import::new("time")]);
        assert!(created.declared_imports.is_empty());
    }

    #[test]
    fn test_declaration_order_and_duplicates() {
        let models = structs(SAMPLE, &["Person", "Address", "Person"]);
        let names: Vec<_> = models.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Address", "Person"]);
    }

    #[test]
    fn test_empty_struct_is_legal() {
        let ctx = run(SAMPLE, &["Empty"]).unwrap();
        assert!(ctx.structs.as_ref().unwrap()[0].fields.is_empty());
        assert!(!ctx.has_warnings());
    }

    #[test]
    fn test_missing_struct_warns() {
        let ctx = run(SAMPLE, &["Address", "Missing"]).unwrap();
        assert_eq!(ctx.structs.as_ref().unwrap().len(), 1);
        let warnings: Vec<_> = ctx.warnings().map(|d| d.message.as_str()).collect();
        assert_eq!(
            warnings,
            vec!["struct 'Missing' is not declared in 'sample.go'; skipping"]
        );
    }

    #[test]
    fn test_no_matching_structs_is_fatal() {
        let err = run(SAMPLE, &["Missing"]).unwrap_err();
        match *err {
            Error::NoMatchingStructs { ref available, .. } => {
                assert_eq!(available, "Address, Person, Empty");
            }
            ref other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_embedded_field_is_fatal() {
        let src = "package s\ntype Base struct{}\ntype User struct {\n\tBase\n\tName string\n}\n";
        let err = run(src, &["User"]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "struct 'User' has an embedded field of type 'Base'"
        );
    }

    #[test]
    fn test_generic_struct_is_fatal() {
        let src = "package s\ntype Box[T any] struct {\n\tValue T\n}\n";
        let err = run(src, &["Box"]).unwrap_err();
        assert!(matches!(*err, Error::GenericStruct { .. }));
    }

    #[test]
    fn test_requires_catalog() {
        let source = SourceContext::new(SAMPLE, "sample.go");
        let file = vogen_source::parse(&source).unwrap();
        let mut ctx =
            CompilationContext::new(source, file, GenerateOptions::new("New", ["Address"]));
        let err = StructPhase.run(&mut ctx).unwrap_err();
        assert!(matches!(*err, Error::PhaseOrder { .. }));
    }

    #[test]
    fn test_catalog_kind_reaches_field() {
        let ctx = run(SAMPLE, &["Address"]).unwrap();
        let catalog = ctx.catalog.as_ref().unwrap();
        let field = &ctx.structs.as_ref().unwrap()[0].fields[2];
        let ty = catalog.get(field.defined_type().unwrap()).unwrap();
        assert!(matches!(ty.kind, TypeKind::PointerToDefined { .. }));
    }
}
