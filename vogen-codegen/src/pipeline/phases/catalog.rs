//! Catalog phase - resolves declared types to their root representation.

use std::collections::HashMap;

use indexmap::IndexMap;
use vogen_model::{DeclaredType, Import, TypeCatalog, TypeKind};
use vogen_source::{Result, SourceContext, SourceFile, TypeExpr, TypeSpec, is_predeclared};

use super::imports::resolve_imports;
use crate::pipeline::{CompilationContext, Phase};

/// Phase that builds the [`TypeCatalog`].
///
/// Every non-struct, non-generic type declaration is reduced transitively:
/// `type B A; type C B` gives `C` the root of `A`. Cycles are fatal.
pub struct CatalogPhase;

impl Phase for CatalogPhase {
    fn name(&self) -> &'static str {
        "catalog"
    }

    fn description(&self) -> &'static str {
        "Resolve declared types to their underlying representation"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let (catalog, unresolved) = {
            let mut resolver = Resolver::new(&ctx.source, &ctx.file);
            let mut catalog = TypeCatalog::new();
            for spec in ctx.file.type_specs() {
                if is_catalogued(spec) && !catalog.contains(&spec.name.name) {
                    catalog.insert(resolver.resolve(&spec.name.name)?);
                }
            }
            (catalog, resolver.unresolved)
        };
        ctx.warn_unresolved(self.name(), &unresolved);
        ctx.catalog = Some(catalog);
        Ok(())
    }
}

fn is_catalogued(spec: &TypeSpec) -> bool {
    !spec.is_generic && !matches!(spec.ty, TypeExpr::Struct(_))
}

/// What a type expression reduces to.
struct Reduced {
    kind: TypeKind,
    underlying: String,
    imports: Vec<Import>,
}

impl Reduced {
    fn new(kind: TypeKind, underlying: impl Into<String>, imports: Vec<Import>) -> Self {
        Self {
            kind,
            underlying: underlying.into(),
            imports,
        }
    }
}

struct Resolver<'a> {
    source: &'a SourceContext,
    file: &'a SourceFile,
    /// Every type declaration by name, first one wins.
    specs: IndexMap<&'a str, &'a TypeSpec>,
    resolved: HashMap<String, DeclaredType>,
    /// Names currently being resolved, outermost first.
    stack: Vec<String>,
    unresolved: Vec<String>,
}

impl<'a> Resolver<'a> {
    fn new(source: &'a SourceContext, file: &'a SourceFile) -> Self {
        let mut specs = IndexMap::new();
        for spec in file.type_specs() {
            specs.entry(spec.name.name.as_str()).or_insert(spec);
        }
        Self {
            source,
            file,
            specs,
            resolved: HashMap::new(),
            stack: Vec::new(),
            unresolved: Vec::new(),
        }
    }

    /// The catalogued declaration named `name`, if there is one.
    fn catalogued(&self, name: &str) -> Option<&'a TypeSpec> {
        self.specs
            .get(name)
            .copied()
            .filter(|spec| is_catalogued(spec))
    }

    fn resolve(&mut self, name: &str) -> Result<DeclaredType> {
        if let Some(ty) = self.resolved.get(name) {
            return Ok(ty.clone());
        }

        if let Some(start) = self.stack.iter().position(|n| n == name) {
            let mut chain = self.stack[start..].to_vec();
            chain.push(name.to_string());
            let span = self
                .specs
                .get(chain[0].as_str())
                .map(|spec| spec.name.span)
                .unwrap_or_default();
            return Err(self.source.alias_cycle_error(&chain, span));
        }

        let Some(spec) = self.catalogued(name) else {
            return Ok(DeclaredType {
                name: name.to_string(),
                kind: TypeKind::Opaque,
                underlying: name.to_string(),
                imports: Vec::new(),
                span: Default::default(),
            });
        };

        self.stack.push(name.to_string());
        let reduced = self.reduce(&spec.ty);
        self.stack.pop();
        let reduced = reduced?;

        let ty = DeclaredType {
            name: name.to_string(),
            kind: reduced.kind,
            underlying: reduced.underlying,
            imports: reduced.imports,
            span: spec.span,
        };
        self.resolved.insert(name.to_string(), ty.clone());
        Ok(ty)
    }

    fn reduce(&mut self, ty: &TypeExpr) -> Result<Reduced> {
        if let Some(ident) = ty.as_ident() {
            return self.reduce_ident(ident);
        }

        match ty {
            TypeExpr::Named {
                qualifier: Some(_), ..
            } => Ok(Reduced::new(
                TypeKind::QualifiedExternal,
                ty.to_string(),
                self.imports(ty),
            )),
            TypeExpr::Pointer(elem) => self.reduce_pointer(ty, elem),
            _ => Ok(Reduced::new(
                TypeKind::Opaque,
                ty.to_string(),
                self.imports(ty),
            )),
        }
    }

    fn reduce_ident(&mut self, ident: &str) -> Result<Reduced> {
        if self.catalogued(ident).is_some() {
            let target = self.resolve(ident)?;
            return Ok(Reduced::new(target.kind, target.underlying, target.imports));
        }
        // A declared struct or generic type shadows a predeclared name.
        let kind = if is_predeclared(ident) && !self.specs.contains_key(ident) {
            TypeKind::PrimitiveAlias
        } else {
            TypeKind::Opaque
        };
        Ok(Reduced::new(kind, ident, Vec::new()))
    }

    fn reduce_pointer(&mut self, ty: &TypeExpr, elem: &TypeExpr) -> Result<Reduced> {
        if let Some(ident) = elem.as_ident() {
            if self.catalogued(ident).is_some() {
                let pointee = self.resolve(ident)?;
                return Ok(Reduced::new(
                    TypeKind::PointerToDefined {
                        pointee: ident.to_string(),
                    },
                    format!("*{}", pointee.underlying),
                    pointee.imports,
                ));
            }
            if is_predeclared(ident) && !self.specs.contains_key(ident) {
                return Ok(Reduced::new(TypeKind::PrimitiveAlias, ty.to_string(), Vec::new()));
            }
        }

        let kind = match elem {
            TypeExpr::Named {
                qualifier: Some(_), ..
            } => TypeKind::QualifiedExternal,
            _ => TypeKind::Opaque,
        };
        Ok(Reduced::new(kind, ty.to_string(), self.imports(ty)))
    }

    fn imports(&mut self, ty: &TypeExpr) -> Vec<Import> {
        let resolved = resolve_imports(self.file, ty);
        for qualifier in resolved.unresolved {
            if !self.unresolved.contains(&qualifier) {
                self.unresolved.push(qualifier);
            }
        }
        resolved.imports
    }
}
