//! Boolean query parsing.
//!
//! Grammar, with case-insensitive keywords:
//!
//! ```text
//! expr  := term (OR term)*
//! term  := atom (AND atom)*
//! atom  := (NOT)? word | '(' expr ')'
//! ```
//!
//! A word is a maximal run of alphanumeric characters. `NOT` only ever applies to
//! a single word; `not (a or b)` does not parse, and neither does a `not` with
//! nothing after it. `and` or `or` in operand position, or a word after `not`,
//! is read as a plain word.

use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Term(String),
    And(Box<Expr>, Box<Expr>),
    Or(Box<Expr>, Box<Expr>),
    Not(Box<Expr>),
}

impl Expr {
    pub fn term(word: impl Into<String>) -> Self { Expr::Term(word.into()) }

    pub fn and(left: Expr, right: Expr) -> Self { Expr::And(Box::new(left), Box::new(right)) }

    pub fn or(left: Expr, right: Expr) -> Self { Expr::Or(Box::new(left), Box::new(right)) }

    pub fn not(child: Expr) -> Self { Expr::Not(Box::new(child)) }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Term(w) => write!(f, "{w}"),
            Expr::And(l, r) => write!(f, "({l} AND {r})"),
            Expr::Or(l, r) => write!(f, "({l} OR {r})"),
            Expr::Not(c) => write!(f, "NOT {c}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("empty query")]
    Empty,
    #[error("invalid character {ch:?} at offset {offset}")]
    InvalidCharacter { ch: char, offset: usize },
    #[error("unexpected {token:?} at offset {offset}")]
    UnexpectedToken { token: String, offset: usize },
    #[error("unexpected end of query")]
    UnexpectedEnd,
    #[error("unclosed '(' at offset {offset}")]
    UnclosedParen { offset: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Word,
    And,
    Or,
    Not,
    LParen,
    RParen,
}

#[derive(Debug, Clone, Copy)]
struct Token<'a> {
    kind: Kind,
    text: &'a str,
    offset: usize,
}

impl Token<'_> {
    /// Words and keywords can both stand where a word is expected.
    fn is_wordlike(&self) -> bool {
        matches!(self.kind, Kind::Word | Kind::And | Kind::Or | Kind::Not)
    }

    fn unexpected(&self) -> QueryError {
        QueryError::UnexpectedToken { token: self.text.to_string(), offset: self.offset }
    }
}

fn lex(query: &str) -> Result<Vec<Token<'_>>, QueryError> {
    let mut tokens = Vec::new();
    let mut chars = query.char_indices().peekable();
    while let Some(&(offset, ch)) = chars.peek() {
        if ch.is_whitespace() {
            chars.next();
            continue;
        }
        if ch == '(' || ch == ')' {
            chars.next();
            let kind = if ch == '(' { Kind::LParen } else { Kind::RParen };
            tokens.push(Token { kind, text: &query[offset..offset + 1], offset });
            continue;
        }
        if !ch.is_alphanumeric() {
            return Err(QueryError::InvalidCharacter { ch, offset });
        }
        let mut end = offset;
        while let Some(&(i, c)) = chars.peek() {
            if !c.is_alphanumeric() { break; }
            end = i + c.len_utf8();
            chars.next();
        }
        let text = &query[offset..end];
        let kind = if text.eq_ignore_ascii_case("and") {
            Kind::And
        } else if text.eq_ignore_ascii_case("or") {
            Kind::Or
        } else if text.eq_ignore_ascii_case("not") {
            Kind::Not
        } else {
            Kind::Word
        };
        tokens.push(Token { kind, text, offset });
    }
    Ok(tokens)
}

struct Parser<'a> {
    tokens: Vec<Token<'a>>,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn peek(&self) -> Option<Token<'a>> { self.tokens.get(self.pos).copied() }

    fn peek_kind(&self) -> Option<Kind> { self.peek().map(|t| t.kind) }

    fn bump(&mut self) -> Option<Token<'a>> {
        let tok = self.peek();
        if tok.is_some() { self.pos += 1; }
        tok
    }

    fn expr(&mut self) -> Result<Expr, QueryError> {
        let mut left = self.term()?;
        while self.peek_kind() == Some(Kind::Or) {
            self.bump();
            let right = self.term()?;
            left = Expr::or(left, right);
        }
        Ok(left)
    }

    fn term(&mut self) -> Result<Expr, QueryError> {
        let mut left = self.atom()?;
        while self.peek_kind() == Some(Kind::And) {
            self.bump();
            let right = self.atom()?;
            left = Expr::and(left, right);
        }
        Ok(left)
    }

    fn atom(&mut self) -> Result<Expr, QueryError> {
        let tok = self.bump().ok_or(QueryError::UnexpectedEnd)?;
        match tok.kind {
            Kind::LParen => {
                let inner = self.expr()?;
                match self.bump() {
                    Some(t) if t.kind == Kind::RParen => Ok(inner),
                    Some(t) => Err(t.unexpected()),
                    None => Err(QueryError::UnclosedParen { offset: tok.offset }),
                }
            }
            Kind::RParen => Err(tok.unexpected()),
            Kind::Not => match self.peek() {
                Some(next) if next.is_wordlike() => {
                    self.bump();
                    Ok(Expr::not(Expr::term(next.text)))
                }
                Some(next) => Err(next.unexpected()),
                None => Err(QueryError::UnexpectedEnd),
            },
            Kind::Word | Kind::And | Kind::Or => Ok(Expr::term(tok.text)),
        }
    }
}

/// Parse a query string into an expression tree. The whole input must be consumed.
pub fn parse(query: &str) -> Result<Expr, QueryError> {
    let tokens = lex(query)?;
    if tokens.is_empty() {
        return Err(QueryError::Empty);
    }
    let mut parser = Parser { tokens, pos: 0 };
    let expr = parser.expr()?;
    match parser.peek() {
        Some(t) => Err(t.unexpected()),
        None => Ok(expr),
    }
}
