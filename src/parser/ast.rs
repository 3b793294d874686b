// AST (Abstract Syntax Tree) definitions for arithmetic expressions

use super::lexer::Token;
use super::position::Position;
use std::fmt;

/// Expression tree produced by the parser.
///
/// Every child is owned by exactly one parent; dropping the root drops the
/// whole tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// An `Int` or `Float` literal
    Number(Token),
    UnaryOp {
        op: Token,
        operand: Box<Node>,
    },
    BinaryOp {
        left: Box<Node>,
        op: Token,
        right: Box<Node>,
    },
}

impl Node {
    pub fn unary(op: Token, operand: Node) -> Self {
        Node::UnaryOp {
            op,
            operand: Box::new(operand),
        }
    }

    pub fn binary(left: Node, op: Token, right: Node) -> Self {
        Node::BinaryOp {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }

    /// Where the source covered by this node begins
    pub fn start(&self) -> &Position {
        match self {
            Node::Number(token) => &token.start,
            Node::UnaryOp { op, .. } => &op.start,
            Node::BinaryOp { left, .. } => left.start(),
        }
    }

    /// Where the source covered by this node ends
    pub fn end(&self) -> &Position {
        match self {
            Node::Number(token) => &token.end,
            Node::UnaryOp { operand, .. } => operand.end(),
            Node::BinaryOp { right, .. } => right.end(),
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Number(token) => write!(f, "{}", token),
            Node::UnaryOp { op, operand } => write!(f, "({}, {})", op, operand),
            Node::BinaryOp { left, op, right } => {
                write!(f, "({}, {}, {})", left, op, right)
            }
        }
    }
}
