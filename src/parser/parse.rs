//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct, its token-cursor helpers and
//! the top-level [`Parser::parse`] entry point.
//!
//! # Parser Architecture
//!
//! The grammar productions live in `expressions`, which extends [`Parser`]
//! with further `impl` blocks. Every production returns a [`ParseResult`];
//! the first error aborts the parse and reaches the caller unchanged.

use super::ast::Node;
use super::constants::MAX_NESTING_DEPTH;
use super::error::{Error, ParseResult};
use super::lexer::{Token, TokenKind};
use tracing::{debug, trace};

/// Recursive descent parser over a lexed token stream
pub struct Parser {
    pub(crate) tokens: Vec<Token>,
    pub(crate) position: usize,
    /// Open groups plus pending prefix signs
    pub(crate) depth: usize,
}

impl Parser {
    /// Create a parser looking at the first token.
    ///
    /// # Panics
    ///
    /// `tokens` must end with an `Eof` token, as [`Lexer::tokenize`] output
    /// always does. Parsing an empty vector panics.
    ///
    /// [`Lexer::tokenize`]: super::lexer::Lexer::tokenize
    pub fn new(tokens: Vec<Token>) -> Self {
        debug_assert!(
            matches!(tokens.last(), Some(token) if token.is(TokenKind::Eof)),
            "token stream must end with EOF"
        );
        Self {
            tokens,
            position: 0,
            depth: 0,
        }
    }

    /// Parse a single expression that must span the whole input.
    pub fn parse(&mut self) -> ParseResult<Node> {
        trace!(target: "yohaan::parser", tokens = self.tokens.len(), "Parsing expression");

        let result = self.parse_expression().and_then(|node| {
            if self.is_at_end() {
                Ok(node)
            } else {
                Err(self.error_here("Expected '+', '-', '*' or '/'"))
            }
        });

        if let Err(err) = &result {
            debug!(
                target: "yohaan::parser",
                details = %err.details,
                start = err.start.index,
                "Syntax error"
            );
        }

        result
    }

    // ===== Helper methods =====

    pub(crate) fn peek(&self) -> &Token {
        &self.tokens[self.position]
    }

    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        self.peek().is(kind)
    }

    pub(crate) fn check_any(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.peek().kind)
    }

    /// Consume the current token. The cursor never moves past `Eof`.
    pub(crate) fn advance(&mut self) -> Token {
        let token = self.peek().clone();
        if !self.is_at_end() {
            self.position += 1;
        }
        token
    }

    pub(crate) fn is_at_end(&self) -> bool {
        self.check(TokenKind::Eof)
    }

    /// Syntax error spanning the current token
    pub(crate) fn error_here(&self, message: &str) -> Error {
        let token = self.peek();
        Error::invalid_syntax(message, token.start.clone(), token.end.clone())
    }

    /// Open one nesting level at the current token.
    pub(crate) fn enter(&mut self) -> ParseResult<()> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(self.error_here("Expression nested too deeply"));
        }
        self.depth += 1;
        Ok(())
    }

    pub(crate) fn leave(&mut self, levels: usize) {
        self.depth -= levels;
    }

    pub(crate) fn expect(
        &mut self,
        kind: TokenKind,
        message: &str,
    ) -> ParseResult<Token> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.error_here(message))
        }
    }
}
