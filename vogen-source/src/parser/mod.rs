//! Recursive-descent parser for the declaration level of a Go file.

mod decls;
mod types;

use crate::{
    SourceContext,
    ast::SourceFile,
    error::{Error, Result},
    lexer::tokenize,
    token::{Keyword, Punct, Span, Spanned, Token},
};

/// Parse the unit held by `ctx`.
pub fn parse(ctx: &SourceContext) -> Result<SourceFile> {
    let tokens = tokenize(ctx)?;
    Parser::new(ctx, tokens).parse_file()
}

struct Parser<'a> {
    ctx: &'a SourceContext,
    /// Always ends with [`Token::Eof`].
    tokens: Vec<Spanned>,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(ctx: &'a SourceContext, tokens: Vec<Spanned>) -> Self {
        Self {
            ctx,
            tokens,
            pos: 0,
        }
    }

    fn current(&self) -> &Spanned {
        let last = self.tokens.len().saturating_sub(1);
        &self.tokens[self.pos.min(last)]
    }

    fn peek(&self) -> &Token {
        &self.current().token
    }

    fn peek_nth(&self, n: usize) -> &Token {
        let last = self.tokens.len().saturating_sub(1);
        &self.tokens[(self.pos + n).min(last)].token
    }

    fn span(&self) -> Span {
        self.current().span
    }

    /// Span of the last consumed token.
    fn prev_span(&self) -> Span {
        match self.pos.checked_sub(1) {
            Some(prev) => self.tokens[prev].span,
            None => self.span(),
        }
    }

    fn bump(&mut self) {
        if !matches!(self.peek(), Token::Eof) {
            self.pos += 1;
        }
    }

    fn at_punct(&self, punct: &Punct) -> bool {
        matches!(self.peek(), Token::Punct(p) if p == punct)
    }

    fn eat_punct(&mut self, punct: &Punct) -> bool {
        let found = self.at_punct(punct);
        if found {
            self.bump();
        }
        found
    }

    fn expect_punct(&mut self, punct: &Punct, expected: &str) -> Result<Span> {
        if self.at_punct(punct) {
            let span = self.span();
            self.bump();
            Ok(span)
        } else {
            Err(self.error(expected))
        }
    }

    fn expect_keyword(&mut self, keyword: Keyword, expected: &str) -> Result<Span> {
        if matches!(self.peek(), Token::Keyword(kw) if *kw == keyword) {
            let span = self.span();
            self.bump();
            Ok(span)
        } else {
            Err(self.error(expected))
        }
    }

    fn expect_ident(&mut self, expected: &str) -> Result<crate::ast::Ident> {
        match self.peek() {
            Token::Ident(name) => {
                let ident = crate::ast::Ident::new(name.clone(), self.span());
                self.bump();
                Ok(ident)
            }
            _ => Err(self.error(expected)),
        }
    }

    /// Consume a statement terminator. A closing `)` or `}` terminates too,
    /// and is left for the caller.
    fn expect_semi(&mut self) -> Result<()> {
        match self.peek() {
            Token::Semi { .. } => {
                self.bump();
                Ok(())
            }
            Token::Eof | Token::Punct(Punct::RParen | Punct::RBrace) => Ok(()),
            _ => Err(self.error("newline or ';'")),
        }
    }

    fn skip_semis(&mut self) {
        while matches!(self.peek(), Token::Semi { .. }) {
            self.bump();
        }
    }

    /// Skip a bracketed group starting at the current `open` token.
    fn skip_balanced(&mut self, open: Punct, close: Punct) -> Result<()> {
        let start = self.span();
        let mut depth = 0usize;
        loop {
            match self.peek() {
                Token::Eof => {
                    return Err(self.ctx.parse_error(
                        format!("'{}' to close this '{}'", close.as_str(), open.as_str()),
                        Token::Eof.to_string(),
                        start,
                    ));
                }
                Token::Punct(p) if *p == open => depth += 1,
                Token::Punct(p) if *p == close => {
                    depth -= 1;
                    if depth == 0 {
                        self.bump();
                        return Ok(());
                    }
                }
                _ => {}
            }
            self.bump();
        }
    }

    fn error(&self, expected: &str) -> Box<Error> {
        self.ctx
            .parse_error(expected, self.peek().to_string(), self.span())
    }
}
