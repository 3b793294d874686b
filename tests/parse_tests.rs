// Integration tests for expression parsing

use yohaan::parser::{Literal, Node, TokenKind};
use yohaan::BigInt;
use yohaan::parser::constants::MAX_NESTING_DEPTH;
use yohaan::{run, run_stdin, tokenize};

fn shape(source: &str) -> String {
    run("<test>", source)
        .unwrap_or_else(|e| panic!("Parsing {:?} failed: {}", source, e))
        .to_string()
}

#[test]
fn test_valid_expressions_parse() {
    let sources = [
        "1",
        "1.5",
        "-1",
        "+1",
        "1 + 2",
        "1 - 2 * 3 / 4",
        "(1)",
        "((1 + 2) * (3 - 4)) / -5.25",
        "\t 10 /2\t",
        "---+-7",
        "0.0 * 100.",
    ];

    for source in sources {
        let result = run("<test>", source);
        assert!(result.is_ok(), "{:?} failed: {:?}", source, result);
    }
}

#[test]
fn test_precedence() {
    assert_eq!(shape("2 + 3 * 4"), "(INT:2, PLUS, (INT:3, MUL, INT:4))");
}

#[test]
fn test_left_associativity() {
    assert_eq!(shape("8 - 3 - 2"), "((INT:8, MINUS, INT:3), MINUS, INT:2)");
}

#[test]
fn test_unary_stacking() {
    let node = run("<test>", "--5").unwrap();

    match node {
        Node::UnaryOp { op, operand } => {
            assert_eq!(op.kind, TokenKind::Minus);
            match *operand {
                Node::UnaryOp { op, operand } => {
                    assert_eq!(op.kind, TokenKind::Minus);
                    let five = Some(Literal::Int(BigInt::from(5)));
                    assert!(matches!(
                        *operand,
                        Node::Number(ref token) if token.value == five
                    ));
                }
                other => panic!("Expected inner unary, got {}", other),
            }
        }
        other => panic!("Expected unary, got {}", other),
    }
}

#[test]
fn test_grouping_overrides_precedence() {
    assert_eq!(shape("(2 + 3) * 4"), "((INT:2, PLUS, INT:3), MUL, INT:4)");
}

#[test]
fn test_int_and_float_literals() {
    match run("<test>", "3").unwrap() {
        Node::Number(token) => {
            assert_eq!(token.kind, TokenKind::Int);
            assert_eq!(token.value, Some(Literal::Int(BigInt::from(3))));
        }
        other => panic!("Expected number, got {}", other),
    }

    match run("<test>", "3.14").unwrap() {
        Node::Number(token) => {
            assert_eq!(token.kind, TokenKind::Float);
            assert_eq!(token.value, Some(Literal::Float(3.14)));
        }
        other => panic!("Expected number, got {}", other),
    }
}

#[test]
fn test_tokenize_ends_with_single_eof() {
    let tokens = tokenize("<test>", "1 + (2)").unwrap();

    let eofs = tokens.iter().filter(|t| t.is(TokenKind::Eof)).count();
    assert_eq!(eofs, 1);
    assert!(tokens.last().unwrap().is(TokenKind::Eof));
    assert_eq!(tokens.last().unwrap().start.index, 7);
}

#[test]
fn test_tokens_are_snapshots() {
    let tokens = tokenize("<test>", "12 + 3").unwrap();
    let starts: Vec<usize> = tokens.iter().map(|t| t.start.index).collect();
    let ends: Vec<usize> = tokens.iter().map(|t| t.end.index).collect();

    assert_eq!(starts, vec![0, 3, 5, 6]);
    assert_eq!(ends, vec![2, 4, 6, 7]);
}

#[test]
fn test_rerun_is_identical() {
    let source = "(1 + 2.5) * -3 / 4 - 5";
    let first = run("<test>", source).unwrap();
    let second = run("<test>", source).unwrap();

    assert_eq!(first, second);
    assert_eq!(first.to_string(), second.to_string());
}

#[test]
fn test_run_stdin_uses_default_filename() {
    let node = run_stdin("1").unwrap();
    assert_eq!(node.start().filename(), "<stdin>");
}

#[test]
fn test_oversized_integer_literal_stays_int() {
    let node = run("<test>", "99999999999999999999 + 1").unwrap();
    assert_eq!(node.to_string(), "(INT:99999999999999999999, PLUS, INT:1)");
}

#[test]
fn test_nesting_up_to_the_limit_parses() {
    let depth = MAX_NESTING_DEPTH;
    let source = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
    assert_eq!(shape(&source), "INT:1");

    let source = format!("{}7", "-".repeat(depth));
    let node = run("<test>", &source).unwrap();
    assert_eq!(node.end().index, depth + 1);
}

#[test]
fn test_long_flat_sum_parses() {
    let source = vec!["1"; 1_000].join(" + ");
    let node = run("<test>", &source).unwrap();

    assert!(matches!(node, Node::BinaryOp { .. }));
    assert_eq!(node.end().index, source.len());
}
