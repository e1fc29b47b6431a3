use super::Parser;
use crate::{
    ast::{Decl, FuncDecl, ImportName, ImportSpec, SourceFile, TypeSpec},
    error::Result,
    token::{Keyword, Punct, Token},
};

impl Parser<'_> {
    pub(super) fn parse_file(mut self) -> Result<SourceFile> {
        self.skip_semis();
        self.expect_keyword(Keyword::Package, "'package'")?;
        let package = self.expect_ident("package name")?;
        self.expect_semi()?;

        let mut imports = Vec::new();
        let mut decls = Vec::new();
        loop {
            match self.peek() {
                Token::Eof => break,
                Token::Semi { .. } => self.bump(),
                Token::Keyword(Keyword::Import) => self.import_decl(&mut imports)?,
                Token::Keyword(Keyword::Type) => self.type_decl(&mut decls)?,
                Token::Keyword(Keyword::Func) => {
                    let func = self.func_decl()?;
                    decls.push(Decl::Func(func));
                }
                Token::Keyword(Keyword::Var | Keyword::Const) => self.skip_value_decl()?,
                _ => return Err(self.error("top-level declaration")),
            }
        }

        Ok(SourceFile {
            package,
            imports,
            decls,
        })
    }

    fn import_decl(&mut self, imports: &mut Vec<ImportSpec>) -> Result<()> {
        self.bump();
        if self.eat_punct(&Punct::LParen) {
            loop {
                self.skip_semis();
                if self.eat_punct(&Punct::RParen) {
                    break;
                }
                imports.push(self.import_spec()?);
                self.expect_semi()?;
            }
        } else {
            imports.push(self.import_spec()?);
        }
        self.expect_semi()
    }

    fn import_spec(&mut self) -> Result<ImportSpec> {
        let start = self.span();
        let name = match self.peek() {
            Token::Punct(Punct::Dot) => Some(ImportName::Dot),
            Token::Ident(name) if name == "_" => Some(ImportName::Blank),
            Token::Ident(name) => Some(ImportName::Alias(name.clone())),
            _ => None,
        };
        if name.is_some() {
            self.bump();
        }
        let Token::Str(raw) = self.peek() else {
            return Err(self.error("import path"));
        };
        let path = unquote(raw).to_string();
        self.bump();
        Ok(ImportSpec {
            name,
            path,
            span: start.to(self.prev_span()),
        })
    }

    fn type_decl(&mut self, decls: &mut Vec<Decl>) -> Result<()> {
        self.bump();
        if self.eat_punct(&Punct::LParen) {
            loop {
                self.skip_semis();
                if self.eat_punct(&Punct::RParen) {
                    break;
                }
                decls.push(Decl::Type(self.type_spec()?));
                self.expect_semi()?;
            }
        } else {
            decls.push(Decl::Type(self.type_spec()?));
        }
        self.expect_semi()
    }

    fn type_spec(&mut self) -> Result<TypeSpec> {
        let name = self.expect_ident("type name")?;
        let is_generic = self.at_type_params();
        if is_generic {
            self.skip_balanced(Punct::LBracket, Punct::RBracket)?;
        }
        let is_alias = self.eat_punct(&Punct::Assign);
        let ty = self.parse_type()?;
        let span = name.span.to(self.prev_span());
        Ok(TypeSpec {
            name,
            is_alias,
            is_generic,
            ty,
            span,
        })
    }

    /// `type T[P any] ...` as opposed to the array type in `type T [N]int`.
    fn at_type_params(&self) -> bool {
        self.at_punct(&Punct::LBracket)
            && matches!(self.peek_nth(1), Token::Ident(_))
            && match self.peek_nth(2) {
                Token::Ident(_) | Token::Punct(Punct::Comma) => true,
                Token::Keyword(kw) => matches!(
                    kw,
                    Keyword::Interface | Keyword::Func | Keyword::Map | Keyword::Chan | Keyword::Struct
                ),
                Token::Punct(Punct::Other(op)) => op == "~",
                _ => false,
            }
    }

    fn func_decl(&mut self) -> Result<FuncDecl> {
        let start = self.span();
        self.bump();

        let receiver = if self.at_punct(&Punct::LParen) {
            let recv_span = self.span();
            let mut params = self.parameters()?;
            if params.len() != 1 {
                return Err(self.ctx.parse_error(
                    "exactly one receiver",
                    format!("{} receivers", params.len()),
                    recv_span.to(self.prev_span()),
                ));
            }
            params.pop()
        } else {
            None
        };

        let name = self.expect_ident("function name")?;
        if self.at_punct(&Punct::LBracket) {
            self.skip_balanced(Punct::LBracket, Punct::RBracket)?;
        }
        let signature = self.signature()?;
        if self.at_punct(&Punct::LBrace) {
            self.skip_balanced(Punct::LBrace, Punct::RBrace)?;
        }
        let span = start.to(self.prev_span());
        self.expect_semi()?;

        Ok(FuncDecl {
            name,
            receiver,
            signature,
            span,
        })
    }

    /// `var` and `const` declarations carry nothing the generator needs.
    fn skip_value_decl(&mut self) -> Result<()> {
        self.bump();
        if self.at_punct(&Punct::LParen) {
            self.skip_balanced(Punct::LParen, Punct::RParen)?;
        } else {
            let mut depth = 0usize;
            loop {
                match self.peek() {
                    Token::Eof => break,
                    Token::Semi { .. } if depth == 0 => break,
                    Token::Punct(Punct::LParen | Punct::LBracket | Punct::LBrace) => depth += 1,
                    Token::Punct(Punct::RParen | Punct::RBracket | Punct::RBrace) => {
                        if depth == 0 {
                            return Err(self.error("expression"));
                        }
                        depth -= 1;
                    }
                    _ => {}
                }
                self.bump();
            }
        }
        self.expect_semi()
    }
}

fn unquote(raw: &str) -> &str {
    let inner = raw.strip_prefix(['"', '`']).unwrap_or(raw);
    inner.strip_suffix(['"', '`']).unwrap_or(inner)
}
