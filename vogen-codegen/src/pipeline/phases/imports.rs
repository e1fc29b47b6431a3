//! Package qualifier resolution.

use vogen_model::Import;
use vogen_source::{SourceFile, TypeExpr};

/// Imports referenced by a type expression.
#[derive(Debug, Default, PartialEq)]
pub(crate) struct QualifiedImports {
    /// One entry per distinct import, in first-use order.
    pub imports: Vec<Import>,
    /// Qualifiers with no matching import in the file.
    pub unresolved: Vec<String>,
}

/// Resolve every package qualifier inside `ty` against the file's imports.
pub(crate) fn resolve_imports(file: &SourceFile, ty: &TypeExpr) -> QualifiedImports {
    let mut out = QualifiedImports::default();
    for qualifier in ty.qualifiers() {
        match file.import_for(qualifier) {
            Some(spec) => {
                let import = Import {
                    path: spec.path.clone(),
                    alias: spec.alias().map(str::to_string),
                };
                if !out.imports.contains(&import) {
                    out.imports.push(import);
                }
            }
            None => {
                if !out.unresolved.iter().any(|q| q == qualifier) {
                    out.unresolved.push(qualifier.to_string());
                }
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use vogen_source::SourceContext;

    use super::*;

    fn file(src: &str) -> SourceFile {
        vogen_source::parse(&SourceContext::new(src, "t.go")).expect("valid source")
    }

    #[test]
    fn test_resolves_plain_and_aliased_imports() {
        let file = file(
            r#"package t
import (
	"time"
	gofrs "github.com/gofrs/uuid/v5"
)
"#,
        );
        let ty = TypeExpr::Map {
            key: Box::new(TypeExpr::qualified("gofrs", "UUID")),
            value: Box::new(TypeExpr::Slice(Box::new(TypeExpr::qualified(
                "time", "Time",
            )))),
        };
        let resolved = resolve_imports(&file, &ty);
        assert_eq!(
            resolved.imports,
            vec![
                Import::aliased("github.com/gofrs/uuid/v5", "gofrs"),
                Import::new("time"),
            ]
        );
        assert!(resolved.unresolved.is_empty());
    }

    #[test]
    fn test_reports_unknown_qualifier_once() {
        let file = file("package t\n");
        let ty = TypeExpr::Map {
            key: Box::new(TypeExpr::qualified("uuid", "UUID")),
            value: Box::new(TypeExpr::qualified("uuid", "UUID")),
        };
        let resolved = resolve_imports(&file, &ty);
        assert!(resolved.imports.is_empty());
        assert_eq!(resolved.unresolved, vec!["uuid".to_string()]);
    }
}
