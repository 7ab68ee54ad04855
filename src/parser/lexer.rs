//! Logos-based lexer for the Ohm grammar-definition language
//!
//! Fast tokenization using the logos crate.

use logos::Logos;
use text_size::TextSize;

/// Token kinds produced by the lexer.
///
/// Trivia (whitespace, comments) is produced by the lexer but skipped by the
/// parser; reference directives live inside line comments and are extracted
/// by a separate raw-text scan (see [`super::directives`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Whitespace,
    LineComment,
    BlockComment,

    Ident,
    Terminal,
    CaseName,

    // Multi-character punctuation
    LtColon,  // <:
    ColonEq,  // :=
    PlusEq,   // +=
    DotDot,   // ..

    // Single-character punctuation
    Eq,
    Pipe,
    Hash,
    Amp,
    Tilde,
    Star,
    Plus,
    Question,
    Lt,
    Gt,
    LParen,
    RParen,
    LBrace,
    RBrace,
    Comma,

    /// Anything the lexer does not recognize
    Error,
}

impl TokenKind {
    /// Whitespace and comments — skipped between meaningful tokens.
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            TokenKind::Whitespace | TokenKind::LineComment | TokenKind::BlockComment
        )
    }
}

/// A token with its kind, text, and position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub offset: TextSize,
}

impl<'a> Token<'a> {
    /// Byte offset one past the end of this token.
    pub fn end_offset(&self) -> TextSize {
        self.offset + TextSize::of(self.text)
    }
}

/// Lexer wrapping the logos-generated tokenizer
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, LogosToken>,
    offset: u32,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: LogosToken::lexer(input),
            offset: 0,
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let logos_token = self.inner.next()?;
        let text = self.inner.slice();
        let offset = TextSize::new(self.offset);
        self.offset += text.len() as u32;

        let kind = match logos_token {
            Ok(t) => t.into(),
            Err(()) => TokenKind::Error,
        };

        Some(Token { kind, text, offset })
    }
}

/// Tokenize an entire string into a Vec
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    Lexer::new(input).collect()
}

/// Logos token enum - maps to TokenKind
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
enum LogosToken {
    // =========================================================================
    // TRIVIA
    // =========================================================================
    #[regex(r"[ \t\r\n]+")]
    Whitespace,

    #[regex(r"//[^\n]*")]
    LineComment,

    #[regex(r"/\*([^*]|\*[^/])*\*/")]
    BlockComment,

    // =========================================================================
    // NAMES AND LITERALS
    // =========================================================================
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,

    #[regex(r#""([^"\\\n]|\\.)*""#)]
    Terminal,

    /// Case-name tag after an alternative, e.g. `-- emptyList`
    #[regex(r"--[ \t]*[a-zA-Z_][a-zA-Z0-9_]*")]
    CaseName,

    // =========================================================================
    // MULTI-CHARACTER PUNCTUATION (must come before single-char)
    // =========================================================================
    #[token("<:")]
    LtColon,

    #[token(":=")]
    ColonEq,

    #[token("+=")]
    PlusEq,

    #[token("..")]
    DotDot,

    // =========================================================================
    // SINGLE-CHARACTER PUNCTUATION
    // =========================================================================
    #[token("=")]
    Eq,

    #[token("|")]
    Pipe,

    #[token("#")]
    Hash,

    #[token("&")]
    Amp,

    #[token("~")]
    Tilde,

    #[token("*")]
    Star,

    #[token("+")]
    Plus,

    #[token("?")]
    Question,

    #[token("<")]
    Lt,

    #[token(">")]
    Gt,

    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    #[token("{")]
    LBrace,

    #[token("}")]
    RBrace,

    #[token(",")]
    Comma,
}

impl From<LogosToken> for TokenKind {
    fn from(t: LogosToken) -> Self {
        match t {
            LogosToken::Whitespace => TokenKind::Whitespace,
            LogosToken::LineComment => TokenKind::LineComment,
            LogosToken::BlockComment => TokenKind::BlockComment,
            LogosToken::Ident => TokenKind::Ident,
            LogosToken::Terminal => TokenKind::Terminal,
            LogosToken::CaseName => TokenKind::CaseName,
            LogosToken::LtColon => TokenKind::LtColon,
            LogosToken::ColonEq => TokenKind::ColonEq,
            LogosToken::PlusEq => TokenKind::PlusEq,
            LogosToken::DotDot => TokenKind::DotDot,
            LogosToken::Eq => TokenKind::Eq,
            LogosToken::Pipe => TokenKind::Pipe,
            LogosToken::Hash => TokenKind::Hash,
            LogosToken::Amp => TokenKind::Amp,
            LogosToken::Tilde => TokenKind::Tilde,
            LogosToken::Star => TokenKind::Star,
            LogosToken::Plus => TokenKind::Plus,
            LogosToken::Question => TokenKind::Question,
            LogosToken::Lt => TokenKind::Lt,
            LogosToken::Gt => TokenKind::Gt,
            LogosToken::LParen => TokenKind::LParen,
            LogosToken::RParen => TokenKind::RParen,
            LogosToken::LBrace => TokenKind::LBrace,
            LogosToken::RBrace => TokenKind::RBrace,
            LogosToken::Comma => TokenKind::Comma,
        }
    }
}
