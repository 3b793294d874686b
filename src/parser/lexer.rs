//! Lexer (tokenizer) for arithmetic expressions
//!
//! Converts raw source text into a flat [`Token`] stream consumed by the
//! parser. The stream always ends with exactly one [`TokenKind::Eof`] token.
//! The first character that starts no token aborts tokenization with an
//! [`ErrorKind::IllegalCharacter`](super::error::ErrorKind) error; no partial
//! token list is returned.

use super::constants::DIGITS;
use super::error::{Error, ParseResult};
use super::position::Position;
use num_bigint::BigInt;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace};

/// All token kinds produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Literals
    Int,
    Float,

    // Operators
    Plus,  // +
    Minus, // -
    Mul,   // *
    Div,   // /

    // Punctuation
    LParen, // (
    RParen, // )
    Dot,    // second '.' left behind by a number literal

    // End of file
    Eof,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            TokenKind::Int => "INT",
            TokenKind::Float => "FLOAT",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Mul => "MUL",
            TokenKind::Div => "DIV",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::Dot => "DOT",
            TokenKind::Eof => "EOF",
        };
        f.write_str(tag)
    }
}

/// Value carried by a numeric literal token
///
/// Integer literals are unbounded, so a dot-free digit run is always `Int`.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Int(BigInt),
    Float(f64),
}

impl Literal {
    pub fn kind(&self) -> TokenKind {
        match self {
            Literal::Int(_) => TokenKind::Int,
            Literal::Float(_) => TokenKind::Float,
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Int(n) => write!(f, "{}", n),
            Literal::Float(x) => write!(f, "{:?}", x),
        }
    }
}

/// A lexed token with its `[start, end)` span.
///
/// The positions are snapshots taken while lexing; they stay valid after the
/// lexer moves on. `value` is `Some` exactly for `Int` and `Float` tokens.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: Option<Literal>,
    pub start: Position,
    pub end: Position,
}

impl Token {
    /// Single-character token: the span ends one character after `start`.
    pub fn new(kind: TokenKind, start: Position) -> Self {
        let end = start.advanced();
        Self {
            kind,
            value: None,
            start,
            end,
        }
    }

    /// Numeric literal token spanning `[start, end)`.
    pub fn literal(value: Literal, start: Position, end: Position) -> Self {
        Self {
            kind: value.kind(),
            value: Some(value),
            start,
            end,
        }
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{}:{}", self.kind, value),
            None => write!(f, "{}", self.kind),
        }
    }
}

/// Lexer for arithmetic expressions
pub struct Lexer {
    input: Vec<char>,
    pos: Position,
    current_char: Option<char>,
}

impl Lexer {
    /// Create a new lexer positioned on the first character of `text`.
    pub fn new(filename: &str, text: &str) -> Self {
        let input: Vec<char> = text.chars().collect();
        let current_char = input.first().copied();
        Self {
            input,
            pos: Position::start(Arc::from(filename), Arc::from(text)),
            current_char,
        }
    }

    /// Tokenize the entire input
    pub fn tokenize(&mut self) -> ParseResult<Vec<Token>> {
        let mut tokens = Vec::new();

        while let Some(ch) = self.current_char {
            let token = match ch {
                ' ' | '\t' => {
                    self.advance();
                    continue;
                }
                c if DIGITS.contains(c) => self.scan_number(),
                '+' => self.single(TokenKind::Plus),
                '-' => self.single(TokenKind::Minus),
                '*' => self.single(TokenKind::Mul),
                '/' => self.single(TokenKind::Div),
                '(' => self.single(TokenKind::LParen),
                ')' => self.single(TokenKind::RParen),
                _ => {
                    let start = self.pos.clone();
                    self.advance();
                    debug!(
                        target: "yohaan::lexer",
                        character = ?ch,
                        index = start.index,
                        "Illegal character"
                    );
                    return Err(Error::illegal_character(
                        format!("'{}'", ch),
                        start,
                        self.pos.clone(),
                    ));
                }
            };

            let is_number = token.value.is_some();
            push_token(&mut tokens, token);

            // A literal only stops on '.' when it already holds one
            if is_number && self.current_char == Some('.') {
                let dot = self.single(TokenKind::Dot);
                push_token(&mut tokens, dot);
            }
        }

        tokens.push(Token::new(TokenKind::Eof, self.pos.clone()));

        debug!(target: "yohaan::lexer", count = tokens.len(), "Lexer completed");
        Ok(tokens)
    }

    /// Emit a one-character token at the cursor, then step past it.
    fn single(&mut self, kind: TokenKind) -> Token {
        let token = Token::new(kind, self.pos.clone());
        self.advance();
        token
    }

    /// Scan a run of digits with at most one '.'.
    ///
    /// A second '.' ends the literal and is left for the caller.
    fn scan_number(&mut self) -> Token {
        let start = self.pos.clone();
        let mut num_str = String::new();
        let mut dot_count = 0;

        while let Some(ch) = self.current_char {
            if ch == '.' {
                if dot_count == 1 {
                    break;
                }
                dot_count += 1;
            } else if !DIGITS.contains(ch) {
                break;
            }
            num_str.push(ch);
            self.advance();
        }

        // Digits with at most one '.' always convert
        let value = if dot_count == 0 {
            Literal::Int(num_str.parse::<BigInt>().unwrap_or_default())
        } else {
            Literal::Float(num_str.parse::<f64>().unwrap_or_default())
        };

        Token::literal(value, start, self.pos.clone())
    }

    /// Advance to next character
    fn advance(&mut self) {
        self.pos.advance(self.current_char);
        self.current_char = self.input.get(self.pos.index).copied();
    }
}

fn push_token(tokens: &mut Vec<Token>, token: Token) {
    trace!(
        target: "yohaan::lexer",
        token = %token,
        start = token.start.index,
        end = token.end.index,
        "Produced token"
    );
    tokens.push(token);
}
