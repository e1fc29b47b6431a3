use super::Parser;
use crate::{
    ast::{ChanDir, FieldDecl, Param, Signature, TypeExpr},
    error::Result,
    token::{Keyword, Punct, Token},
};

impl Parser<'_> {
    pub(super) fn parse_type(&mut self) -> Result<TypeExpr> {
        match self.peek() {
            Token::Ident(name) => {
                let name = name.clone();
                self.bump();
                self.named_type(name)
            }
            Token::Punct(Punct::Star) => {
                self.bump();
                Ok(TypeExpr::Pointer(Box::new(self.parse_type()?)))
            }
            Token::Punct(Punct::LBracket) => self.array_or_slice(),
            Token::Punct(Punct::LParen) => {
                self.bump();
                let ty = self.parse_type()?;
                self.expect_punct(&Punct::RParen, "')'")?;
                Ok(ty)
            }
            Token::Punct(Punct::Arrow) => {
                self.bump();
                self.expect_keyword(Keyword::Chan, "'chan'")?;
                Ok(TypeExpr::Chan {
                    dir: ChanDir::Recv,
                    elem: Box::new(self.parse_type()?),
                })
            }
            Token::Keyword(Keyword::Chan) => {
                self.bump();
                let dir = if self.eat_punct(&Punct::Arrow) {
                    ChanDir::Send
                } else {
                    ChanDir::Both
                };
                Ok(TypeExpr::Chan {
                    dir,
                    elem: Box::new(self.parse_type()?),
                })
            }
            Token::Keyword(Keyword::Map) => {
                self.bump();
                self.expect_punct(&Punct::LBracket, "'['")?;
                let key = self.parse_type()?;
                self.expect_punct(&Punct::RBracket, "']'")?;
                let value = self.parse_type()?;
                Ok(TypeExpr::Map {
                    key: Box::new(key),
                    value: Box::new(value),
                })
            }
            Token::Keyword(Keyword::Func) => {
                self.bump();
                Ok(TypeExpr::Func(Box::new(self.signature()?)))
            }
            Token::Keyword(Keyword::Struct) => self.struct_type(),
            Token::Keyword(Keyword::Interface) => self.interface_type(),
            _ => Err(self.error("type")),
        }
    }

    fn named_type(&mut self, first: String) -> Result<TypeExpr> {
        let (qualifier, name) = if self.eat_punct(&Punct::Dot) {
            (Some(first), self.expect_ident("type name")?.name)
        } else {
            (None, first)
        };

        let mut args = Vec::new();
        if self.eat_punct(&Punct::LBracket) {
            loop {
                args.push(self.parse_type()?);
                if !self.eat_punct(&Punct::Comma) || self.at_punct(&Punct::RBracket) {
                    break;
                }
            }
            self.expect_punct(&Punct::RBracket, "']'")?;
        }

        Ok(TypeExpr::Named {
            qualifier,
            name,
            args,
        })
    }

    fn array_or_slice(&mut self) -> Result<TypeExpr> {
        self.bump();
        if self.eat_punct(&Punct::RBracket) {
            return Ok(TypeExpr::Slice(Box::new(self.parse_type()?)));
        }

        // The length is a constant expression; keep its text.
        let mut len = String::new();
        let mut depth = 0usize;
        loop {
            match self.peek() {
                Token::Eof | Token::Semi { .. } => return Err(self.error("']'")),
                Token::Punct(Punct::RBracket) if depth == 0 => break,
                Token::Punct(Punct::LBracket | Punct::LParen) => depth += 1,
                Token::Punct(Punct::RBracket | Punct::RParen) => depth = depth.saturating_sub(1),
                _ => {}
            }
            len.push_str(self.peek().text());
            self.bump();
        }
        self.bump();

        Ok(TypeExpr::Array {
            len,
            elem: Box::new(self.parse_type()?),
        })
    }

    fn struct_type(&mut self) -> Result<TypeExpr> {
        self.bump();
        self.expect_punct(&Punct::LBrace, "'{'")?;
        let mut fields = Vec::new();
        loop {
            self.skip_semis();
            if self.eat_punct(&Punct::RBrace) {
                break;
            }
            fields.push(self.field_decl()?);
            self.expect_semi()?;
        }
        Ok(TypeExpr::Struct(fields))
    }

    fn field_decl(&mut self) -> Result<FieldDecl> {
        let start = self.span();
        let embedded = match self.peek() {
            Token::Punct(Punct::Star) => true,
            Token::Ident(_) => matches!(
                self.peek_nth(1),
                Token::Punct(Punct::Dot | Punct::RBrace) | Token::Semi { .. } | Token::Str(_)
            ),
            _ => return Err(self.error("field name or embedded type")),
        };

        let mut names = Vec::new();
        if !embedded {
            names.push(self.expect_ident("field name")?);
            while self.eat_punct(&Punct::Comma) {
                names.push(self.expect_ident("field name")?);
            }
        }
        let ty = self.parse_type()?;

        let tag = match self.peek() {
            Token::Str(raw) => {
                let raw = raw.clone();
                self.bump();
                Some(raw)
            }
            _ => None,
        };

        Ok(FieldDecl {
            names,
            ty,
            tag,
            span: start.to(self.prev_span()),
        })
    }

    /// Interface bodies are not parsed; their elements are kept as text,
    /// along with every `pkg.Name` qualifier they mention.
    fn interface_type(&mut self) -> Result<TypeExpr> {
        self.bump();
        self.expect_punct(&Punct::LBrace, "'{'")?;

        let mut elems = Vec::new();
        let mut qualifiers: Vec<String> = Vec::new();
        let mut current: Vec<Token> = Vec::new();
        let mut depth = 0usize;
        loop {
            match self.peek() {
                Token::Eof => return Err(self.error("'}'")),
                Token::Punct(Punct::RBrace) if depth == 0 => {
                    self.bump();
                    break;
                }
                Token::Semi { .. } if depth == 0 => {
                    if !current.is_empty() {
                        collect_qualifiers(&current, &mut qualifiers);
                        elems.push(render_tokens(&current));
                        current.clear();
                    }
                    self.bump();
                    continue;
                }
                Token::Punct(Punct::LParen | Punct::LBrace | Punct::LBracket) => depth += 1,
                Token::Punct(Punct::RParen | Punct::RBrace | Punct::RBracket) => {
                    depth = depth.saturating_sub(1)
                }
                _ => {}
            }
            current.push(self.peek().clone());
            self.bump();
        }
        if !current.is_empty() {
            collect_qualifiers(&current, &mut qualifiers);
            elems.push(render_tokens(&current));
        }

        Ok(TypeExpr::Interface {
            body: elems.join("; "),
            qualifiers,
        })
    }

    pub(super) fn signature(&mut self) -> Result<Signature> {
        let params = self.parameters()?;
        let results = if self.at_punct(&Punct::LParen) {
            self.parameters()?
        } else if starts_type(self.peek()) {
            vec![Param::unnamed(self.parse_type()?)]
        } else {
            Vec::new()
        };
        Ok(Signature { params, results })
    }

    /// Parse a parenthesized parameter list, expanding `a, b T` into one
    /// entry per name.
    pub(super) fn parameters(&mut self) -> Result<Vec<Param>> {
        self.expect_punct(&Punct::LParen, "'('")?;
        let start = self.prev_span();
        let mut entries = Vec::new();
        loop {
            if self.eat_punct(&Punct::RParen) {
                break;
            }
            entries.push(self.param_entry()?);
            if !self.eat_punct(&Punct::Comma) {
                self.expect_punct(&Punct::RParen, "',' or ')'")?;
                break;
            }
        }

        // In a list with any named entry, unnamed entries are names that
        // share the type of the next named entry.
        if entries.iter().any(|p| p.name.is_some()) {
            let list_span = start.to(self.prev_span());
            let mut shared: Option<(TypeExpr, bool)> = None;
            for entry in entries.iter_mut().rev() {
                if entry.name.is_some() {
                    shared = Some((entry.ty.clone(), entry.variadic));
                    continue;
                }
                let Some(name) = entry.ty.as_ident().map(str::to_string) else {
                    return Err(self.ctx.parse_error(
                        "parameter name",
                        format!("type '{}'", entry.ty),
                        list_span,
                    ));
                };
                let Some((ty, variadic)) = &shared else {
                    return Err(self.ctx.parse_error(
                        "parameter type",
                        format!("'{}' without a type", name),
                        list_span,
                    ));
                };
                entry.name = Some(name);
                entry.ty = ty.clone();
                entry.variadic = *variadic;
            }
        }

        Ok(entries)
    }

    fn param_entry(&mut self) -> Result<Param> {
        if let Token::Ident(name) = self.peek() {
            let named = match self.peek_nth(1) {
                Token::Punct(Punct::Dot | Punct::Comma | Punct::RParen) => false,
                Token::Punct(Punct::Ellipsis) => true,
                next => starts_type(next),
            };
            if named {
                let name = name.clone();
                self.bump();
                let (ty, variadic) = self.param_type()?;
                return Ok(Param {
                    name: Some(name),
                    ty,
                    variadic,
                });
            }
        }
        let (ty, variadic) = self.param_type()?;
        Ok(Param {
            name: None,
            ty,
            variadic,
        })
    }

    fn param_type(&mut self) -> Result<(TypeExpr, bool)> {
        let variadic = self.eat_punct(&Punct::Ellipsis);
        Ok((self.parse_type()?, variadic))
    }
}

fn starts_type(token: &Token) -> bool {
    match token {
        Token::Ident(_) => true,
        Token::Punct(p) => matches!(
            p,
            Punct::Star | Punct::LBracket | Punct::LParen | Punct::Arrow
        ),
        Token::Keyword(kw) => matches!(
            kw,
            Keyword::Map | Keyword::Chan | Keyword::Func | Keyword::Struct | Keyword::Interface
        ),
        _ => false,
    }
}

fn render_tokens(tokens: &[Token]) -> String {
    let mut out = String::new();
    let mut prev: Option<&Token> = None;
    for token in tokens {
        if prev.is_some_and(|prev| needs_space(prev, token)) {
            out.push(' ');
        }
        out.push_str(token.text());
        prev = Some(token);
    }
    out
}

fn needs_space(prev: &Token, next: &Token) -> bool {
    let wordy = |t: &Token| {
        matches!(
            t,
            Token::Ident(_) | Token::Keyword(_) | Token::Literal(_) | Token::Str(_)
        )
    };
    match (prev, next) {
        (Token::Punct(Punct::Comma), _) => true,
        (Token::Punct(Punct::Other(op)), _) | (_, Token::Punct(Punct::Other(op))) => op == "|",
        (Token::Punct(Punct::RParen), next) => !matches!(
            next,
            Token::Punct(Punct::RParen | Punct::Comma | Punct::RBracket | Punct::Dot)
        ),
        (prev, next) => wordy(prev) && (wordy(next) || matches!(next, Token::Punct(Punct::Star))),
    }
}

/// Record the `pkg` of every `pkg.Name` in `tokens`, first occurrence only.
fn collect_qualifiers(tokens: &[Token], out: &mut Vec<String>) {
    for window in tokens.windows(3) {
        if let [Token::Ident(pkg), Token::Punct(Punct::Dot), Token::Ident(_)] = window
            && !out.contains(pkg)
        {
            out.push(pkg.clone());
        }
    }
}
