//! Declaration-level AST for a Go source file.
//!
//! Only what the generator needs is modelled: the package clause, imports,
//! type declarations and function signatures. Function bodies and `var` /
//! `const` declarations are skipped by the parser.

use std::fmt;

use crate::Span;

/// An identifier with its location.
#[derive(Debug, Clone, PartialEq)]
pub struct Ident {
    pub name: String,
    pub span: Span,
}

impl Ident {
    pub fn new(name: impl Into<String>, span: Span) -> Self {
        Self {
            name: name.into(),
            span,
        }
    }
}

/// A parsed Go source file.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceFile {
    pub package: Ident,
    pub imports: Vec<ImportSpec>,
    pub decls: Vec<Decl>,
}

impl SourceFile {
    /// Iterate over type declarations in source order.
    pub fn type_specs(&self) -> impl Iterator<Item = &TypeSpec> {
        self.decls.iter().filter_map(|decl| match decl {
            Decl::Type(spec) => Some(spec),
            Decl::Func(_) => None,
        })
    }

    /// Iterate over function and method declarations in source order.
    pub fn funcs(&self) -> impl Iterator<Item = &FuncDecl> {
        self.decls.iter().filter_map(|decl| match decl {
            Decl::Func(func) => Some(func),
            Decl::Type(_) => None,
        })
    }

    /// Find the import a package qualifier refers to.
    ///
    /// An aliased import matches on its alias, an unaliased one on the
    /// package name assumed from its path. Dot and blank imports never match.
    pub fn import_for(&self, qualifier: &str) -> Option<&ImportSpec> {
        self.imports.iter().find(|spec| spec.binding() == Some(qualifier))
    }
}

/// How an import is bound in the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportName {
    Alias(String),
    Dot,
    Blank,
}

/// A single import spec (`alias "path"`).
#[derive(Debug, Clone, PartialEq)]
pub struct ImportSpec {
    pub name: Option<ImportName>,
    pub path: String,
    pub span: Span,
}

impl ImportSpec {
    /// The identifier the import is referenced by, if any.
    pub fn binding(&self) -> Option<&str> {
        match &self.name {
            Some(ImportName::Alias(alias)) => Some(alias),
            Some(ImportName::Dot | ImportName::Blank) => None,
            None => Some(assumed_package_name(&self.path)),
        }
    }

    /// The explicit alias, when the import has one.
    pub fn alias(&self) -> Option<&str> {
        match &self.name {
            Some(ImportName::Alias(alias)) => Some(alias),
            _ => None,
        }
    }
}

/// Package name Go tooling assumes for an import path.
///
/// Uses the last path element, skipping a trailing major-version element
/// (`/v2`), dropping a `go-` prefix and cutting at the first character that
/// cannot appear in an identifier (`yaml.v3` -> `yaml`).
pub fn assumed_package_name(path: &str) -> &str {
    let mut elems = path.rsplit('/');
    let mut last = elems.next().unwrap_or(path);
    if is_major_version(last)
        && let Some(prev) = elems.next()
    {
        last = prev;
    }
    let last = last.strip_prefix("go-").unwrap_or(last);
    let end = last
        .char_indices()
        .find(|(_, c)| !(c.is_alphanumeric() || *c == '_'))
        .map_or(last.len(), |(i, _)| i);
    &last[..end]
}

fn is_major_version(elem: &str) -> bool {
    elem.strip_prefix('v')
        .is_some_and(|digits| !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()))
}

/// A top-level declaration the generator cares about.
#[derive(Debug, Clone, PartialEq)]
pub enum Decl {
    Type(TypeSpec),
    Func(FuncDecl),
}

/// `type Name [params] [=] Type`
#[derive(Debug, Clone, PartialEq)]
pub struct TypeSpec {
    pub name: Ident,
    /// `type A = B` rather than `type A B`.
    pub is_alias: bool,
    /// Declares type parameters (`type List[T any] ...`).
    pub is_generic: bool,
    pub ty: TypeExpr,
    pub span: Span,
}

/// A function or method declaration; the body is not kept.
#[derive(Debug, Clone, PartialEq)]
pub struct FuncDecl {
    pub name: Ident,
    pub receiver: Option<Param>,
    pub signature: Signature,
    pub span: Span,
}

/// Parameters and results of a function.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Signature {
    /// One entry per declared parameter; `a, b int` yields two.
    pub params: Vec<Param>,
    pub results: Vec<Param>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    pub name: Option<String>,
    pub ty: TypeExpr,
    pub variadic: bool,
}

impl Param {
    pub fn unnamed(ty: TypeExpr) -> Self {
        Self {
            name: None,
            ty,
            variadic: false,
        }
    }
}

/// A field declaration inside a struct type.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDecl {
    /// Empty for an embedded field.
    pub names: Vec<Ident>,
    pub ty: TypeExpr,
    /// Raw tag literal including its quotes.
    pub tag: Option<String>,
    pub span: Span,
}

impl FieldDecl {
    pub fn is_embedded(&self) -> bool {
        self.names.is_empty()
    }
}

/// Channel direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChanDir {
    Both,
    Send,
    Recv,
}

/// A Go type expression.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeExpr {
    /// `T`, `pkg.T`, optionally instantiated: `pkg.T[A, B]`.
    Named {
        qualifier: Option<String>,
        name: String,
        args: Vec<TypeExpr>,
    },
    Pointer(Box<TypeExpr>),
    Slice(Box<TypeExpr>),
    Array {
        len: String,
        elem: Box<TypeExpr>,
    },
    Map {
        key: Box<TypeExpr>,
        value: Box<TypeExpr>,
    },
    Chan {
        dir: ChanDir,
        elem: Box<TypeExpr>,
    },
    Func(Box<Signature>),
    Struct(Vec<FieldDecl>),
    /// Interface body, already rendered to a single line.
    Interface {
        body: String,
        /// Package qualifiers mentioned in the body.
        qualifiers: Vec<String>,
    },
}

impl TypeExpr {
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named {
            qualifier: None,
            name: name.into(),
            args: Vec::new(),
        }
    }

    pub fn qualified(qualifier: impl Into<String>, name: impl Into<String>) -> Self {
        Self::Named {
            qualifier: Some(qualifier.into()),
            name: name.into(),
            args: Vec::new(),
        }
    }

    /// The bare identifier, when this is an unqualified, uninstantiated name.
    pub fn as_ident(&self) -> Option<&str> {
        match self {
            Self::Named {
                qualifier: None,
                name,
                args,
            } if args.is_empty() => Some(name),
            _ => None,
        }
    }

    /// Every package qualifier that appears anywhere in the expression.
    pub fn qualifiers(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_qualifiers(&mut out);
        out
    }

    fn collect_qualifiers<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            Self::Named {
                qualifier, args, ..
            } => {
                if let Some(q) = qualifier {
                    out.push(q);
                }
                for arg in args {
                    arg.collect_qualifiers(out);
                }
            }
            Self::Pointer(elem) | Self::Slice(elem) => elem.collect_qualifiers(out),
            Self::Array { elem, .. } | Self::Chan { elem, .. } => elem.collect_qualifiers(out),
            Self::Map { key, value } => {
                key.collect_qualifiers(out);
                value.collect_qualifiers(out);
            }
            Self::Func(sig) => {
                for p in sig.params.iter().chain(&sig.results) {
                    p.ty.collect_qualifiers(out);
                }
            }
            Self::Struct(fields) => {
                for field in fields {
                    field.ty.collect_qualifiers(out);
                }
            }
            Self::Interface { qualifiers, .. } => {
                out.extend(qualifiers.iter().map(String::as_str));
            }
        }
    }
}

impl fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named {
                qualifier,
                name,
                args,
            } => {
                if let Some(q) = qualifier {
                    write!(f, "{}.", q)?;
                }
                write!(f, "{}", name)?;
                if !args.is_empty() {
                    write!(f, "[{}]", join(args))?;
                }
                Ok(())
            }
            Self::Pointer(elem) => write!(f, "*{}", elem),
            Self::Slice(elem) => write!(f, "[]{}", elem),
            Self::Array { len, elem } => write!(f, "[{}]{}", len, elem),
            Self::Map { key, value } => write!(f, "map[{}]{}", key, value),
            Self::Chan { dir, elem } => match dir {
                ChanDir::Both => write!(f, "chan {}", elem),
                ChanDir::Send => write!(f, "chan<- {}", elem),
                ChanDir::Recv => write!(f, "<-chan {}", elem),
            },
            Self::Func(sig) => write!(f, "func{}", sig),
            Self::Struct(fields) => {
                if fields.is_empty() {
                    return write!(f, "struct{{}}");
                }
                let fields: Vec<String> = fields.iter().map(|field| field.to_string()).collect();
                write!(f, "struct{{ {} }}", fields.join("; "))
            }
            Self::Interface { body, .. } => {
                if body.is_empty() {
                    write!(f, "interface{{}}")
                } else {
                    write!(f, "interface{{ {} }}", body)
                }
            }
        }
    }
}

impl fmt::Display for FieldDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.names.is_empty() {
            let names: Vec<&str> = self.names.iter().map(|n| n.name.as_str()).collect();
            write!(f, "{} ", names.join(", "))?;
        }
        write!(f, "{}", self.ty)?;
        if let Some(tag) = &self.tag {
            write!(f, " {}", tag)?;
        }
        Ok(())
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.variadic {
            write!(f, "...{}", self.ty)
        } else {
            write!(f, "{}", self.ty)
        }
    }
}

impl fmt::Display for Signature {
    /// Renders `(params) results` with parameter names dropped.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", join(&self.params))?;
        match self.results.as_slice() {
            [] => Ok(()),
            [single] => write!(f, " {}", single),
            many => write!(f, " ({})", join(many)),
        }
    }
}

fn join<T: fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Types predeclared by the Go universe scope.
pub const PREDECLARED_TYPES: &[&str] = &[
    "any",
    "bool",
    "byte",
    "comparable",
    "complex64",
    "complex128",
    "error",
    "float32",
    "float64",
    "int",
    "int8",
    "int16",
    "int32",
    "int64",
    "rune",
    "string",
    "uint",
    "uint8",
    "uint16",
    "uint32",
    "uint64",
    "uintptr",
];

/// Whether `name` is a predeclared Go type.
pub fn is_predeclared(name: &str) -> bool {
    PREDECLARED_TYPES.contains(&name)
}
