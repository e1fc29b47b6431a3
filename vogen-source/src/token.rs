//! Tokens produced by the Go lexer.

use std::fmt;

use miette::SourceSpan;

/// Byte range of a token or node within the unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub offset: usize,
    pub len: usize,
}

impl Span {
    pub fn new(offset: usize, len: usize) -> Self {
        Self { offset, len }
    }

    /// Span covering both `self` and `other`.
    pub fn to(self, other: Span) -> Span {
        let end = (other.offset + other.len).max(self.offset + self.len);
        Span::new(self.offset, end - self.offset)
    }

    pub fn end(&self) -> usize {
        self.offset + self.len
    }
}

impl From<Span> for SourceSpan {
    fn from(span: Span) -> Self {
        SourceSpan::from((span.offset, span.len))
    }
}

/// Go keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    Break,
    Case,
    Chan,
    Const,
    Continue,
    Default,
    Defer,
    Else,
    Fallthrough,
    For,
    Func,
    Go,
    Goto,
    If,
    Import,
    Interface,
    Map,
    Package,
    Range,
    Return,
    Select,
    Struct,
    Switch,
    Type,
    Var,
}

impl Keyword {
    pub fn from_ident(s: &str) -> Option<Self> {
        let kw = match s {
            "break" => Self::Break,
            "case" => Self::Case,
            "chan" => Self::Chan,
            "const" => Self::Const,
            "continue" => Self::Continue,
            "default" => Self::Default,
            "defer" => Self::Defer,
            "else" => Self::Else,
            "fallthrough" => Self::Fallthrough,
            "for" => Self::For,
            "func" => Self::Func,
            "go" => Self::Go,
            "goto" => Self::Goto,
            "if" => Self::If,
            "import" => Self::Import,
            "interface" => Self::Interface,
            "map" => Self::Map,
            "package" => Self::Package,
            "range" => Self::Range,
            "return" => Self::Return,
            "select" => Self::Select,
            "struct" => Self::Struct,
            "switch" => Self::Switch,
            "type" => Self::Type,
            "var" => Self::Var,
            _ => return None,
        };
        Some(kw)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Break => "break",
            Self::Case => "case",
            Self::Chan => "chan",
            Self::Const => "const",
            Self::Continue => "continue",
            Self::Default => "default",
            Self::Defer => "defer",
            Self::Else => "else",
            Self::Fallthrough => "fallthrough",
            Self::For => "for",
            Self::Func => "func",
            Self::Go => "go",
            Self::Goto => "goto",
            Self::If => "if",
            Self::Import => "import",
            Self::Interface => "interface",
            Self::Map => "map",
            Self::Package => "package",
            Self::Range => "range",
            Self::Return => "return",
            Self::Select => "select",
            Self::Struct => "struct",
            Self::Switch => "switch",
            Self::Type => "type",
            Self::Var => "var",
        }
    }

    /// Keywords after which a newline terminates the statement.
    pub(crate) fn ends_statement(&self) -> bool {
        matches!(
            self,
            Self::Break | Self::Continue | Self::Fallthrough | Self::Return
        )
    }
}

/// Punctuation the parser distinguishes. Every other operator is `Other`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Punct {
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Comma,
    Dot,
    Ellipsis,
    Star,
    Assign,
    Arrow,
    IncDec(String),
    Other(String),
}

impl Punct {
    pub fn as_str(&self) -> &str {
        match self {
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBrace => "{",
            Self::RBrace => "}",
            Self::LBracket => "[",
            Self::RBracket => "]",
            Self::Comma => ",",
            Self::Dot => ".",
            Self::Ellipsis => "...",
            Self::Star => "*",
            Self::Assign => "=",
            Self::Arrow => "<-",
            Self::IncDec(s) | Self::Other(s) => s,
        }
    }
}

/// A lexical token.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Ident(String),
    Keyword(Keyword),
    /// String literal, holding the raw source text including quotes.
    Str(String),
    /// Numeric or rune literal.
    Literal(String),
    Punct(Punct),
    /// Explicit `;` or one inserted at a line end.
    Semi { implicit: bool },
    Eof,
}

impl Token {
    /// Whether a newline directly after this token inserts a semicolon.
    pub(crate) fn allows_semicolon(&self) -> bool {
        match self {
            Token::Ident(_) | Token::Str(_) | Token::Literal(_) => true,
            Token::Keyword(kw) => kw.ends_statement(),
            Token::Punct(p) => matches!(
                p,
                Punct::RParen | Punct::RBracket | Punct::RBrace | Punct::IncDec(_)
            ),
            Token::Semi { .. } | Token::Eof => false,
        }
    }

    /// Source text of the token, as it would be written back out.
    pub fn text(&self) -> &str {
        match self {
            Token::Ident(s) | Token::Str(s) | Token::Literal(s) => s,
            Token::Keyword(kw) => kw.as_str(),
            Token::Punct(p) => p.as_str(),
            Token::Semi { .. } => ";",
            Token::Eof => "",
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Ident(s) => write!(f, "identifier '{}'", s),
            Token::Keyword(kw) => write!(f, "keyword '{}'", kw.as_str()),
            Token::Str(s) => write!(f, "string {}", s),
            Token::Literal(s) => write!(f, "literal {}", s),
            Token::Punct(p) => write!(f, "'{}'", p.as_str()),
            Token::Semi { implicit: true } => write!(f, "newline"),
            Token::Semi { implicit: false } => write!(f, "';'"),
            Token::Eof => write!(f, "end of file"),
        }
    }
}

/// A token together with its location.
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned {
    pub token: Token,
    pub span: Span,
}
