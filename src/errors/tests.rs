//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::lexer::tokens::TokenKind;
use crate::{display_error, Position};
use std::rc::Rc;

#[test]
fn test_unexpected_token_message() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: TokenKind::Assignment,
            received: TokenKind::Integer,
        },
        Position(6, Rc::new("test.monkey".to_string())),
    );

    assert_eq!(error.get_error_name(), "UnexpectedToken");
    assert_eq!(
        error.to_string(),
        "expected next token to be =, got INT instead"
    );
}

#[test]
fn test_error_position() {
    let error = Error::new(
        ErrorImpl::MissingPrefixRule {
            token: TokenKind::Semicolon,
        },
        Position(42, Rc::new("test.monkey".to_string())),
    );

    assert_eq!(error.get_position().0, 42);
    assert_eq!(*error.get_position().1, "test.monkey");
}

#[test]
fn test_missing_prefix_rule_message() {
    let error = Error::new(
        ErrorImpl::MissingPrefixRule {
            token: TokenKind::Semicolon,
        },
        Position(0, Rc::new("test.monkey".to_string())),
    );

    assert_eq!(error.get_error_name(), "MissingPrefixRule");
    assert_eq!(error.to_string(), "no prefix parse function for ; found");
    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_integer_parse_error_message() {
    let error = Error::new(
        ErrorImpl::IntegerParseError {
            token: "99999999999999999999".to_string(),
        },
        Position(0, Rc::new("test.monkey".to_string())),
    );

    assert_eq!(error.get_error_name(), "IntegerParseError");
    assert_eq!(
        error.to_string(),
        "could not parse \"99999999999999999999\" as integer"
    );
}

#[test]
fn test_error_tip() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: TokenKind::CloseParen,
            received: TokenKind::EOF,
        },
        Position(0, Rc::new("test.monkey".to_string())),
    );

    assert_eq!(error.get_tip().to_string(), "did you miss a `)`?");
}

#[test]
fn test_no_tip_for_expected_category() {
    for expected in [TokenKind::Identifier, TokenKind::EOF, TokenKind::Integer] {
        let error = Error::new(
            ErrorImpl::UnexpectedToken {
                expected,
                received: TokenKind::Semicolon,
            },
            Position(0, Rc::new("test.monkey".to_string())),
        );

        assert!(matches!(error.get_tip(), ErrorTip::None));
    }
}

#[test]
fn test_display_error_caret() {
    let source = "let a = 1;\n  let x 5;";
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: TokenKind::Assignment,
            received: TokenKind::Integer,
        },
        Position(19, Rc::new("shell".to_string())),
    );

    let rendered = display_error(&error, source);
    let lines: Vec<&str> = rendered.lines().collect();

    assert_eq!(
        lines[0],
        "Error: expected next token to be =, got INT instead (did you miss a `=`?)"
    );
    assert_eq!(lines[1], "-> shell");
    assert_eq!(lines[2], "  |");
    assert_eq!(lines[3], "2 | let x 5;");
    assert_eq!(lines[4], "  | ------^");
}
