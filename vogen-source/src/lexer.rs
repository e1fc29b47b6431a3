//! Lexer (tokenizer) for Go source code
//!
//! Converts the unit into a flat [`Spanned`] token stream. Comments are
//! dropped, and semicolons are inserted at line ends following the Go rule so
//! the parser can treat newline-terminated declarations uniformly.

use crate::{
    SourceContext,
    error::Result,
    token::{Keyword, Punct, Span, Spanned, Token},
};

/// Tokenize the whole unit held by `ctx`.
pub fn tokenize(ctx: &SourceContext) -> Result<Vec<Spanned>> {
    Lexer::new(ctx).run()
}

struct Lexer<'a> {
    ctx: &'a SourceContext,
    src: &'a str,
    pos: usize,
    tokens: Vec<Spanned>,
    semicolon_pending: bool,
}

impl<'a> Lexer<'a> {
    fn new(ctx: &'a SourceContext) -> Self {
        Self {
            ctx,
            src: ctx.src(),
            pos: 0,
            tokens: Vec::new(),
            semicolon_pending: false,
        }
    }

    fn run(mut self) -> Result<Vec<Spanned>> {
        loop {
            let Some(c) = self.peek() else {
                self.insert_semicolon(Span::new(self.pos, 0));
                self.tokens.push(Spanned {
                    token: Token::Eof,
                    span: Span::new(self.pos, 0),
                });
                return Ok(self.tokens);
            };

            match c {
                '\n' => {
                    self.insert_semicolon(Span::new(self.pos, 1));
                    self.pos += 1;
                }
                ' ' | '\t' | '\r' | '\u{feff}' => self.pos += c.len_utf8(),
                '/' if self.peek_at(1) == Some('/') => self.skip_line_comment(),
                '/' if self.peek_at(1) == Some('*') => self.skip_block_comment()?,
                _ => {
                    let start = self.pos;
                    let token = self.next_token(c)?;
                    self.semicolon_pending = token.allows_semicolon();
                    self.tokens.push(Spanned {
                        token,
                        span: Span::new(start, self.pos - start),
                    });
                }
            }
        }
    }

    fn insert_semicolon(&mut self, span: Span) {
        if self.semicolon_pending {
            self.tokens.push(Spanned {
                token: Token::Semi { implicit: true },
                span,
            });
            self.semicolon_pending = false;
        }
    }

    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn peek_at(&self, n: usize) -> Option<char> {
        self.src[self.pos..].chars().nth(n)
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn skip_line_comment(&mut self) {
        while let Some(c) = self.peek() {
            if c == '\n' {
                break;
            }
            self.pos += c.len_utf8();
        }
    }

    fn skip_block_comment(&mut self) -> Result<()> {
        let start = self.pos;
        let Some(len) = self.src[start + 2..].find("*/") else {
            return Err(self
                .ctx
                .lex_error("comment not terminated", Span::new(start, 2)));
        };
        let body = &self.src[start + 2..start + 2 + len];
        // A general comment spanning lines acts like a newline.
        if body.contains('\n') {
            self.insert_semicolon(Span::new(start, 0));
        }
        self.pos = start + 2 + len + 2;
        Ok(())
    }

    fn next_token(&mut self, c: char) -> Result<Token> {
        if c == '_' || c.is_alphabetic() {
            return Ok(self.identifier());
        }
        if c.is_ascii_digit() || (c == '.' && self.peek_at(1).is_some_and(|d| d.is_ascii_digit()))
        {
            return Ok(self.number());
        }

        let start = self.pos;
        self.bump();
        let punct = match c {
            '"' => return self.interpreted_string(start),
            '`' => return self.raw_string(start),
            '\'' => return self.rune(start),
            '(' => Punct::LParen,
            ')' => Punct::RParen,
            '{' => Punct::LBrace,
            '}' => Punct::RBrace,
            '[' => Punct::LBracket,
            ']' => Punct::RBracket,
            ',' => Punct::Comma,
            ';' => return Ok(Token::Semi { implicit: false }),
            '.' => {
                if self.peek() == Some('.') && self.peek_at(1) == Some('.') {
                    self.pos += 2;
                    Punct::Ellipsis
                } else {
                    Punct::Dot
                }
            }
            '*' if self.peek() != Some('=') => Punct::Star,
            '=' if self.peek() != Some('=') => Punct::Assign,
            '<' if self.peek() == Some('-') => {
                self.pos += 1;
                Punct::Arrow
            }
            '+' | '-' if self.peek() == Some(c) => {
                self.pos += 1;
                Punct::IncDec(format!("{c}{c}"))
            }
            '+' | '-' | '*' | '/' | '%' | '=' | '!' => {
                if self.peek() == Some('=') {
                    self.pos += 1;
                }
                Punct::Other(self.src[start..self.pos].to_string())
            }
            ':' | '&' | '|' | '^' | '<' | '>' | '~' => {
                while self.pos - start < 3
                    && self
                        .peek()
                        .is_some_and(|n| matches!(n, '=' | '&' | '|' | '<' | '>' | '^'))
                {
                    self.pos += 1;
                }
                Punct::Other(self.src[start..self.pos].to_string())
            }
            other => {
                return Err(self.ctx.lex_error(
                    format!("unexpected character '{}'", other.escape_debug()),
                    Span::new(start, other.len_utf8()),
                ));
            }
        };
        Ok(Token::Punct(punct))
    }

    fn identifier(&mut self) -> Token {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if c == '_' || c.is_alphanumeric() {
                self.pos += c.len_utf8();
            } else {
                break;
            }
        }
        let text = &self.src[start..self.pos];
        match Keyword::from_ident(text) {
            Some(kw) => Token::Keyword(kw),
            None => Token::Ident(text.to_string()),
        }
    }

    fn number(&mut self) -> Token {
        let start = self.pos;
        let is_hex = self.src[start..].starts_with("0x") || self.src[start..].starts_with("0X");
        let mut prev = '\0';
        while let Some(c) = self.peek() {
            let exponent_sign = matches!(c, '+' | '-')
                && (matches!(prev, 'p' | 'P') || (!is_hex && matches!(prev, 'e' | 'E')));
            if c.is_ascii_alphanumeric() || c == '_' || c == '.' || exponent_sign {
                self.pos += 1;
                prev = c;
            } else {
                break;
            }
        }
        Token::Literal(self.src[start..self.pos].to_string())
    }

    fn interpreted_string(&mut self, start: usize) -> Result<Token> {
        loop {
            match self.bump() {
                Some('"') => return Ok(Token::Str(self.src[start..self.pos].to_string())),
                Some('\\') => {
                    self.bump();
                }
                Some('\n') | None => {
                    return Err(self
                        .ctx
                        .lex_error("string literal not terminated", Span::new(start, 1)));
                }
                Some(_) => {}
            }
        }
    }

    fn raw_string(&mut self, start: usize) -> Result<Token> {
        match self.src[self.pos..].find('`') {
            Some(len) => {
                self.pos += len + 1;
                Ok(Token::Str(self.src[start..self.pos].to_string()))
            }
            None => Err(self
                .ctx
                .lex_error("raw string literal not terminated", Span::new(start, 1))),
        }
    }

    fn rune(&mut self, start: usize) -> Result<Token> {
        loop {
            match self.bump() {
                Some('\'') => return Ok(Token::Literal(self.src[start..self.pos].to_string())),
                Some('\\') => {
                    self.bump();
                }
                Some('\n') | None => {
                    return Err(self
                        .ctx
                        .lex_error("rune literal not terminated", Span::new(start, 1)));
                }
                Some(_) => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(src: &str) -> Vec<Token> {
        let ctx = SourceContext::new(src, "test.go");
        tokenize(&ctx)
            .expect("tokenize")
            .into_iter()
            .map(|t| t.token)
            .collect()
    }

    fn ident(s: &str) -> Token {
        Token::Ident(s.to_string())
    }

    const SEMI: Token = Token::Semi { implicit: true };

    #[test]
    fn test_semicolon_inserted_after_identifier() {
        assert_eq!(
            tokens("package sample\n"),
            vec![Token::Keyword(Keyword::Package), ident("sample"), SEMI, Token::Eof]
        );
    }

    #[test]
    fn test_no_semicolon_after_open_paren() {
        assert_eq!(
            tokens("type (\n\tA int\n)\n"),
            vec![
                Token::Keyword(Keyword::Type),
                Token::Punct(Punct::LParen),
                ident("A"),
                ident("int"),
                SEMI,
                Token::Punct(Punct::RParen),
                SEMI,
                Token::Eof,
            ]
        );
    }

    #[test]
    fn test_semicolon_inserted_at_eof() {
        assert_eq!(
            tokens("type A int"),
            vec![Token::Keyword(Keyword::Type), ident("A"), ident("int"), SEMI, Token::Eof]
        );
    }

    #[test]
    fn test_comments_are_skipped() {
        assert_eq!(
            tokens("// header\ntype A /* inline */ int // trailing\n"),
            vec![Token::Keyword(Keyword::Type), ident("A"), ident("int"), SEMI, Token::Eof]
        );
    }

    #[test]
    fn test_multiline_block_comment_acts_as_newline() {
        assert_eq!(
            tokens("return /*\n*/ x"),
            vec![Token::Keyword(Keyword::Return), SEMI, ident("x"), SEMI, Token::Eof]
        );
    }

    #[test]
    fn test_strings_and_tags() {
        assert_eq!(
            tokens(r#"import "time""#),
            vec![
                Token::Keyword(Keyword::Import),
                Token::Str("\"time\"".to_string()),
                SEMI,
                Token::Eof
            ]
        );
        assert_eq!(
            tokens("`json:\"name\"`"),
            vec![Token::Str("`json:\"name\"`".to_string()), SEMI, Token::Eof]
        );
    }

    #[test]
    fn test_escaped_quote_in_string() {
        assert_eq!(
            tokens(r#""a\"b""#),
            vec![Token::Str(r#""a\"b""#.to_string()), SEMI, Token::Eof]
        );
    }

    #[test]
    fn test_operators() {
        assert_eq!(
            tokens("x := <-ch"),
            vec![
                ident("x"),
                Token::Punct(Punct::Other(":=".to_string())),
                Token::Punct(Punct::Arrow),
                ident("ch"),
                SEMI,
                Token::Eof
            ]
        );
        assert_eq!(
            tokens("i++\n"),
            vec![ident("i"), Token::Punct(Punct::IncDec("++".to_string())), SEMI, Token::Eof]
        );
        assert_eq!(
            tokens("...T"),
            vec![Token::Punct(Punct::Ellipsis), ident("T"), SEMI, Token::Eof]
        );
    }

    #[test]
    fn test_numbers() {
        assert_eq!(
            tokens("1.5e-3 0x1F .5"),
            vec![
                Token::Literal("1.5e-3".to_string()),
                Token::Literal("0x1F".to_string()),
                Token::Literal(".5".to_string()),
                SEMI,
                Token::Eof
            ]
        );
    }

    #[test]
    fn test_spans() {
        let ctx = SourceContext::new("type Name string", "test.go");
        let toks = tokenize(&ctx).unwrap();
        assert_eq!(toks[1].span, Span::new(5, 4));
        assert_eq!(toks[2].span, Span::new(10, 6));
    }

    #[test]
    fn test_unterminated_string_is_error() {
        let ctx = SourceContext::new("import \"time\n", "bad.go");
        let err = tokenize(&ctx).unwrap_err();
        assert_eq!(err.to_string(), "string literal not terminated");
    }

    #[test]
    fn test_unterminated_comment_is_error() {
        let ctx = SourceContext::new("/* open", "bad.go");
        assert!(tokenize(&ctx).is_err());
    }

    #[test]
    fn test_unexpected_character_is_error() {
        let ctx = SourceContext::new("type A int $", "bad.go");
        let err = tokenize(&ctx).unwrap_err();
        assert_eq!(err.to_string(), "unexpected character '$'");
    }
}
