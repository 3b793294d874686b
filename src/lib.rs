//! # Introduction
//!
//! Yohaan turns a single arithmetic expression into an AST, reporting the
//! first lexical or syntax error with a precise source span.
//!
//! ## Pipeline
//!
//! ```text
//! Source → Lexer → Tokens → Parser → AST
//! ```
//!
//! 1. [`parser::lexer`]: scans characters into position-tracked tokens,
//!    ending with one `EOF` token.
//! 2. [`parser::parse`]: recursive descent over `expr`, `term` and `factor`.
//! 3. [`parser::ast`]: the closed [`Node`] sum type.
//! 4. [`parser::error`]: the single [`Error`] either stage can return. Its
//!    text and span are meant for an external snippet renderer.
//!
//! Each call owns its own lexer and parser; there is no shared state.
//!
//! ```
//! let ast = yohaan::run("<stdin>", "2 + 3 * 4").unwrap();
//! assert_eq!(ast.to_string(), "(INT:2, PLUS, (INT:3, MUL, INT:4))");
//! ```

pub mod parser;

pub use num_bigint::BigInt;
pub use parser::{Error, ErrorKind, Node, ParseResult, Token, TokenKind};

use parser::constants::DEFAULT_FILENAME;
use parser::{Lexer, Parser};
use tracing::instrument;

/// Lex `text` without parsing it.
#[instrument(skip(text), fields(len = text.len()))]
pub fn tokenize(filename: &str, text: &str) -> ParseResult<Vec<Token>> {
    Lexer::new(filename, text).tokenize()
}

/// Lex and parse `text` as one expression.
///
/// Returns the AST root, or the first error either stage hit.
#[instrument(skip(text), fields(len = text.len()))]
pub fn run(filename: &str, text: &str) -> ParseResult<Node> {
    let tokens = Lexer::new(filename, text).tokenize()?;
    Parser::new(tokens).parse()
}

/// [`run`] with the filename used for interactive input.
pub fn run_stdin(text: &str) -> ParseResult<Node> {
    run(DEFAULT_FILENAME, text)
}
