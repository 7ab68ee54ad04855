//! Recursive descent parser for the Ohm grammar-definition language
//!
//! Builds the typed AST from the token stream. Parsing is all-or-nothing:
//! the first syntax error aborts with a [`ParseError`] and the caller falls
//! back to the document's last valid AST.

use std::sync::Arc;

use text_size::TextSize;

use super::error::ParseError;
use super::lexer::{Lexer, Token, TokenKind};
use crate::base::{LineIndex, Position, Span};
use crate::syntax::{Grammar, Ident, Rule, Seq, SuperGrammar, Term};

/// Parse source text into grammar declarations.
pub(crate) fn parse(input: &str) -> Result<Vec<Grammar>, ParseError> {
    let tokens: Vec<_> = Lexer::new(input)
        .filter(|t| !t.kind.is_trivia())
        .collect();
    let mut parser = Parser::new(input, tokens);
    parser.parse_grammars()
}

/// The parser state
struct Parser<'a> {
    src: &'a str,
    tokens: Vec<Token<'a>>,
    pos: usize,
    line_index: LineIndex,
    /// End offset of the most recently consumed token.
    prev_end: TextSize,
}

impl<'a> Parser<'a> {
    fn new(src: &'a str, tokens: Vec<Token<'a>>) -> Self {
        Self {
            src,
            tokens,
            pos: 0,
            line_index: LineIndex::new(src),
            prev_end: TextSize::new(0),
        }
    }

    // =========================================================================
    // Token access
    // =========================================================================

    fn current(&self) -> Option<&Token<'a>> {
        self.tokens.get(self.pos)
    }

    fn nth_kind(&self, n: usize) -> Option<TokenKind> {
        self.tokens.get(self.pos + n).map(|t| t.kind)
    }

    fn at(&self, kind: TokenKind) -> bool {
        self.current().map(|t| t.kind) == Some(kind)
    }

    fn at_eof(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    fn bump(&mut self) -> Token<'a> {
        let token = self.tokens[self.pos].clone();
        self.prev_end = token.end_offset();
        self.pos += 1;
        token
    }

    fn expect(&mut self, kind: TokenKind, what: &str) -> Result<Token<'a>, ParseError> {
        if self.at(kind) {
            Ok(self.bump())
        } else {
            Err(self.unexpected(what))
        }
    }

    fn expect_ident(&mut self, what: &str) -> Result<Ident, ParseError> {
        let token = self.expect(TokenKind::Ident, what)?;
        Ok(self.make_ident(&token))
    }

    // =========================================================================
    // Spans and errors
    // =========================================================================

    fn position(&self, offset: TextSize) -> Position {
        self.line_index.position(offset)
    }

    fn span_between(&self, start: TextSize, end: TextSize) -> Span {
        Span::new(self.position(start), self.position(end))
    }

    fn token_span(&self, token: &Token<'a>) -> Span {
        self.span_between(token.offset, token.end_offset())
    }

    fn make_ident(&self, token: &Token<'a>) -> Ident {
        Ident::new(token.text, self.token_span(token))
    }

    fn current_offset(&self) -> TextSize {
        self.current()
            .map(|t| t.offset)
            .unwrap_or_else(|| TextSize::of(self.src))
    }

    fn unexpected(&self, what: &str) -> ParseError {
        match self.current() {
            Some(token) => ParseError::new(
                format!("expected {what}, found `{}`", token.text),
                self.token_span(token),
            ),
            None => ParseError::new(
                format!("expected {what}, found end of input"),
                Span::empty(self.position(TextSize::of(self.src))),
            ),
        }
    }

    fn slice(&self, start: TextSize, end: TextSize) -> &'a str {
        &self.src[u32::from(start) as usize..u32::from(end) as usize]
    }

    // =========================================================================
    // Grammar productions
    // =========================================================================

    fn parse_grammars(&mut self) -> Result<Vec<Grammar>, ParseError> {
        let mut grammars = Vec::new();
        while !self.at_eof() {
            grammars.push(self.parse_grammar()?);
        }
        Ok(grammars)
    }

    /// `Grammar := ident SuperGrammar? "{" Rule* "}"`
    fn parse_grammar(&mut self) -> Result<Grammar, ParseError> {
        let start = self.current_offset();
        let ident = self.expect_ident("a grammar name")?;

        let super_grammar = if self.at(TokenKind::LtColon) {
            let lt_colon = self.bump();
            let name = self.expect_ident("a super-grammar name")?;
            let span = self.span_between(lt_colon.offset, self.prev_end);
            Some(SuperGrammar { name, span })
        } else {
            None
        };

        self.expect(TokenKind::LBrace, "`{`")?;

        let mut rules = Vec::new();
        while !self.at(TokenKind::RBrace) && !self.at_eof() {
            rules.push(self.parse_rule(&ident)?);
        }
        self.expect(TokenKind::RBrace, "`}`")?;

        Ok(Grammar {
            ident,
            super_grammar,
            rules,
            span: self.span_between(start, self.prev_end),
        })
    }

    /// `Rule := ident Formals? ruleDescr? ("=" | ":=" | "+=") RuleBody`
    fn parse_rule(&mut self, owner: &Ident) -> Result<Rule, ParseError> {
        let start = self.current_offset();
        let name = self.expect_ident("a rule name")?;

        let mut formals = Vec::new();
        if self.at(TokenKind::Lt) {
            self.bump();
            formals.push(self.expect_ident("a formal parameter name")?);
            while self.at(TokenKind::Comma) {
                self.bump();
                formals.push(self.expect_ident("a formal parameter name")?);
            }
            self.expect(TokenKind::Gt, "`>`")?;
        }

        let description = if self.at(TokenKind::LParen) {
            Some(self.parse_rule_description()?)
        } else {
            None
        };

        if !(self.at(TokenKind::Eq) || self.at(TokenKind::ColonEq) || self.at(TokenKind::PlusEq)) {
            return Err(self.unexpected("`=`, `:=`, or `+=`"));
        }
        self.bump();

        let body = self.parse_rule_body()?;

        let end = self.prev_end;
        Ok(Rule {
            name,
            formals,
            description,
            body,
            owner: owner.clone(),
            span: self.span_between(start, end),
            source: Arc::from(self.slice(start, end)),
        })
    }

    /// Free text between parens before the `=`: `exp (an expression) = ...`.
    /// No nesting; everything up to the first `)` belongs to the description.
    fn parse_rule_description(&mut self) -> Result<Arc<str>, ParseError> {
        self.expect(TokenKind::LParen, "`(`")?;
        let text_start = self.prev_end;
        while !self.at(TokenKind::RParen) {
            if self.at_eof() {
                return Err(self.unexpected("`)` to close the rule description"));
            }
            self.bump();
        }
        let close = self.bump();
        Ok(Arc::from(self.slice(text_start, close.offset).trim()))
    }

    /// `RuleBody := "|"? TopLevelTerm ("|" TopLevelTerm)*`
    fn parse_rule_body(&mut self) -> Result<Vec<Seq>, ParseError> {
        if self.at(TokenKind::Pipe) {
            self.bump();
        }
        let mut alternatives = Vec::new();
        loop {
            let seq = self.parse_seq()?;
            if self.at(TokenKind::CaseName) {
                self.bump();
            }
            alternatives.push(seq);
            if self.at(TokenKind::Pipe) {
                self.bump();
            } else {
                break;
            }
        }
        Ok(alternatives)
    }

    /// `Seq := Iter*` — may be empty (an empty alternative is valid).
    fn parse_seq(&mut self) -> Result<Seq, ParseError> {
        let start = self.current_offset();
        let mut terms = Vec::new();
        while self.starts_term() {
            terms.push(self.parse_iter()?);
        }
        let span = if terms.is_empty() {
            Span::empty(self.position(start))
        } else {
            self.span_between(start, self.prev_end)
        };
        Ok(Seq { terms, span })
    }

    /// Whether the current token can begin a term of the current sequence.
    /// An ident does not when it begins the next rule declaration.
    fn starts_term(&self) -> bool {
        match self.current().map(|t| t.kind) {
            Some(TokenKind::Terminal)
            | Some(TokenKind::LParen)
            | Some(TokenKind::Tilde)
            | Some(TokenKind::Amp)
            | Some(TokenKind::Hash) => true,
            Some(TokenKind::Ident) => !self.at_rule_start(),
            _ => false,
        }
    }

    /// Lookahead reproducing the language's `~(ruleDescr? "=")` guard: an
    /// ident followed by optional `<...>` formals and an optional `(...)`
    /// description and then an assignment operator starts a new rule, not an
    /// application term.
    fn at_rule_start(&self) -> bool {
        debug_assert!(self.at(TokenKind::Ident));
        let mut n = 1;

        if self.nth_kind(n) == Some(TokenKind::Lt) {
            let mut depth = 1;
            n += 1;
            while depth > 0 {
                match self.nth_kind(n) {
                    Some(TokenKind::Lt) => depth += 1,
                    Some(TokenKind::Gt) => depth -= 1,
                    Some(_) => {}
                    None => return false,
                }
                n += 1;
            }
        }

        if self.nth_kind(n) == Some(TokenKind::LParen) {
            n += 1;
            loop {
                match self.nth_kind(n) {
                    Some(TokenKind::RParen) => {
                        n += 1;
                        break;
                    }
                    Some(_) => n += 1,
                    None => return false,
                }
            }
        }

        matches!(
            self.nth_kind(n),
            Some(TokenKind::Eq) | Some(TokenKind::ColonEq) | Some(TokenKind::PlusEq)
        )
    }

    /// `Iter := ("~" | "&")? "#"? Base ("*" | "+" | "?")?`
    fn parse_iter(&mut self) -> Result<Term, ParseError> {
        let start = self.current_offset();

        while matches!(
            self.current().map(|t| t.kind),
            Some(TokenKind::Tilde) | Some(TokenKind::Amp) | Some(TokenKind::Hash)
        ) {
            self.bump();
        }

        let term = self.parse_base()?;

        while matches!(
            self.current().map(|t| t.kind),
            Some(TokenKind::Star) | Some(TokenKind::Plus) | Some(TokenKind::Question)
        ) {
            self.bump();
        }

        // Widen the term's span over prefixes and iteration suffixes.
        let span = self.span_between(start, self.prev_end);
        Ok(match term {
            Term::Application { ident, args, .. } => Term::Application { ident, args, span },
            Term::Group { .. } => Term::Group { span },
            Term::Range { .. } => Term::Range { span },
            Term::Terminal { .. } => Term::Terminal { span },
        })
    }

    /// `Base := ident Params? | terminal ".." terminal | terminal | "(" RuleBody ")"`
    fn parse_base(&mut self) -> Result<Term, ParseError> {
        match self.current().map(|t| t.kind) {
            Some(TokenKind::Ident) => {
                let start = self.current_offset();
                let ident = self.expect_ident("a rule name")?;

                let mut args = Vec::new();
                if self.at(TokenKind::Lt) {
                    self.bump();
                    args.push(self.parse_seq()?);
                    while self.at(TokenKind::Comma) {
                        self.bump();
                        args.push(self.parse_seq()?);
                    }
                    self.expect(TokenKind::Gt, "`>`")?;
                }

                Ok(Term::Application {
                    ident,
                    args,
                    span: self.span_between(start, self.prev_end),
                })
            }
            Some(TokenKind::Terminal) => {
                let first = self.bump();
                if self.at(TokenKind::DotDot) {
                    self.bump();
                    self.expect(TokenKind::Terminal, "the upper bound of a range")?;
                    Ok(Term::Range {
                        span: self.span_between(first.offset, self.prev_end),
                    })
                } else {
                    Ok(Term::Terminal {
                        span: self.token_span(&first),
                    })
                }
            }
            Some(TokenKind::LParen) => {
                let open = self.bump();
                // Group interiors are parsed for validity but kept opaque.
                self.parse_rule_body()?;
                self.expect(TokenKind::RParen, "`)`")?;
                Ok(Term::Group {
                    span: self.span_between(open.offset, self.prev_end),
                })
            }
            _ => Err(self.unexpected("a term")),
        }
    }
}
