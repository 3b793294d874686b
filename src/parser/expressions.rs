//! Expression parsing implementation
//!
//! Recursive descent over three precedence levels, lowest first:
//!
//! ```text
//! expr   := term (('+' | '-') term)*
//! term   := factor (('*' | '/') factor)*
//! factor := ('+' | '-') factor | INT | FLOAT | '(' expr ')'
//! ```
//!
//! Binary levels fold left-associatively through [`Parser::bin_op`]. Prefix
//! signs belong to `factor`, so they bind tighter than `*` and `/` and may
//! repeat (`--5`). Groups and signs together may nest at most
//! [`MAX_NESTING_DEPTH`] levels deep.
//!
//! [`MAX_NESTING_DEPTH`]: super::constants::MAX_NESTING_DEPTH

use super::ast::Node;
use super::error::ParseResult;
use super::lexer::TokenKind;
use super::parse::Parser;

/// Signature shared by the productions `bin_op` can repeat
type Production = fn(&mut Parser) -> ParseResult<Node>;

impl Parser {
    /// Parse expression (top-level entry point)
    pub(crate) fn parse_expression(&mut self) -> ParseResult<Node> {
        self.bin_op(Parser::parse_term, &[TokenKind::Plus, TokenKind::Minus])
    }

    /// Parse multiplicative (* /)
    fn parse_term(&mut self) -> ParseResult<Node> {
        self.bin_op(Parser::parse_factor, &[TokenKind::Mul, TokenKind::Div])
    }

    /// Parse unary signs, then a literal or parenthesized group
    ///
    /// Signs are collected in a loop and folded right to left, so `--5`
    /// nests as `(-, (-, 5))` without recursing per sign.
    fn parse_factor(&mut self) -> ParseResult<Node> {
        let mut signs = Vec::new();
        while self.check_any(&[TokenKind::Plus, TokenKind::Minus]) {
            self.enter()?;
            signs.push(self.advance());
        }

        let operand = self.parse_atom()?;
        self.leave(signs.len());

        Ok(signs
            .into_iter()
            .rev()
            .fold(operand, |node, op| Node::unary(op, node)))
    }

    /// Parse a literal or parenthesized group
    fn parse_atom(&mut self) -> ParseResult<Node> {
        let kind = self.peek().kind;
        match kind {
            TokenKind::Int | TokenKind::Float => Ok(Node::Number(self.advance())),
            TokenKind::LParen => {
                self.enter()?;
                self.advance();
                let expr = self.parse_expression()?;
                self.expect(TokenKind::RParen, "Expected ')'")?;
                self.leave(1);
                Ok(expr)
            }
            _ => Err(self.error_here("Expected number or '('")),
        }
    }

    /// `operand (op operand)*` for any `op` in `operators`, folded left.
    fn bin_op(
        &mut self,
        operand: Production,
        operators: &[TokenKind],
    ) -> ParseResult<Node> {
        let mut left = operand(self)?;

        while self.check_any(operators) {
            let op = self.advance();
            let right = operand(self)?;
            left = Node::binary(left, op, right);
        }

        Ok(left)
    }
}
