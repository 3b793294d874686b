// Constants for the expression lexer

/// Characters that start (and continue) a numeric literal
pub const DIGITS: &str = "0123456789";

/// Filename reported for text that did not come from a file
pub const DEFAULT_FILENAME: &str = "<stdin>";

/// Deepest combined nesting of parenthesized groups and prefix signs
pub const MAX_NESTING_DEPTH: usize = 200;
