//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::lexer::tokens::TokenKind;
use crate::Position;
use std::rc::Rc;

fn syntax_error(kind: TokenKind, token: &str, line: usize) -> Error {
    Error::new(
        ErrorImpl::SyntaxError {
            message: "Unexpected token".to_string(),
            kind,
            token: token.to_string(),
        },
        Position(line, Rc::new("test.txt".to_string())),
    )
}

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnterminatedLiteral { quote: '"' },
        Position(3, Rc::new("test.txt".to_string())),
    );

    assert_eq!(error.get_error_name(), "UnterminatedLiteral");
    assert_eq!(error.get_line(), 3);
}

#[test]
fn test_error_position() {
    let error = syntax_error(TokenKind::Operator, "=", 42);

    assert_eq!(error.get_position().0, 42);
    assert_eq!(error.get_position().1.as_str(), "test.txt");
}

#[test]
fn test_syntax_error_reports_offending_token() {
    let error = syntax_error(TokenKind::Operator, "=", 1);

    assert_eq!(error.get_error_name(), "SyntaxError");
    assert_eq!(error.get_token_kind(), Some(TokenKind::Operator));
    assert_eq!(error.get_token_value(), Some("="));
    assert_eq!(
        error.to_string(),
        "Unexpected token. Found Operator '=' at line 1"
    );
}

#[test]
fn test_invalid_character_error() {
    let error = Error::new(
        ErrorImpl::InvalidCharacter {
            token: "@".to_string(),
        },
        Position(2, Rc::new("test.txt".to_string())),
    );

    assert_eq!(error.get_error_name(), "InvalidCharacter");
    assert_eq!(error.get_token_kind(), Some(TokenKind::Invalid));
    assert_eq!(error.get_token_value(), Some("@"));
}

#[test]
fn test_source_unavailable_error() {
    let error = Error::new(
        ErrorImpl::SourceUnavailable {
            path: "missing.txt".to_string(),
            reason: "No such file or directory".to_string(),
        },
        Position(0, Rc::new("missing.txt".to_string())),
    );

    assert_eq!(error.get_error_name(), "SourceUnavailable");
    assert_eq!(error.get_token_kind(), None);
    assert_eq!(
        error.to_string(),
        "error opening file missing.txt: No such file or directory"
    );
}

#[test]
fn test_error_tip_none() {
    let error = syntax_error(TokenKind::Identifier, "x", 1);

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion_at_end_of_input() {
    let error = syntax_error(TokenKind::End, "", 4);

    match error.get_tip() {
        ErrorTip::Suggestion(_) => (),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}
