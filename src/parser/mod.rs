//! Arithmetic expression parser
//!
//! This module transforms expression text into an Abstract Syntax Tree (AST):
//! - [`position`]: Source cursor and span snapshots
//! - [`lexer`]: Tokenization (source text → tokens)
//! - [`parse`]: Parsing (tokens → AST), with productions in `expressions`
//! - [`ast`]: AST node definitions
//! - [`error`]: The positioned error both stages report
//!
//! # Supported Syntax
//!
//! - Integer and decimal literals (`42`, `3.14`, `10.`)
//! - Binary `+ - * /` with the usual precedence, left-associative
//! - Prefix `+` and `-`, repeatable (`--5`)
//! - Parenthesized grouping, nested up to
//!   [`constants::MAX_NESTING_DEPTH`] levels together with prefix signs
//!
//! Only `' '` and `'\t'` separate tokens. A whole input is exactly one
//! expression.
//!
//! # Parser Implementation
//!
//! Hand-written recursive descent parser, one function per precedence level.
//! No external parser generator dependencies.

pub mod ast;
pub mod constants;
pub mod error;
mod expressions;
pub mod lexer;
pub mod parse;
pub mod position;

pub use ast::Node;
pub use error::{Error, ErrorKind, ParseResult};
pub use lexer::{Lexer, Literal, Token, TokenKind};
pub use parse::Parser;
pub use position::Position;
