use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::tokens::TokenKind, Position};

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_line(&self) -> usize {
        self.position.0
    }

    pub fn get_internal(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::SourceUnavailable { .. } => "SourceUnavailable",
            ErrorImpl::UnterminatedLiteral { .. } => "UnterminatedLiteral",
            ErrorImpl::InvalidCharacter { .. } => "InvalidCharacter",
            ErrorImpl::SyntaxError { .. } => "SyntaxError",
        }
    }

    /// Kind of the token the parser stopped on, if the error came from the parser.
    pub fn get_token_kind(&self) -> Option<TokenKind> {
        match &self.internal_error {
            ErrorImpl::InvalidCharacter { .. } => Some(TokenKind::Invalid),
            ErrorImpl::SyntaxError { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    pub fn get_token_value(&self) -> Option<&str> {
        match &self.internal_error {
            ErrorImpl::InvalidCharacter { token } | ErrorImpl::SyntaxError { token, .. } => {
                Some(token.as_str())
            }
            _ => None,
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::SourceUnavailable { .. } => ErrorTip::None,
            ErrorImpl::UnterminatedLiteral { quote } => ErrorTip::Suggestion(format!(
                "Literal opened with `{}` is never closed, did you forget the closing quote?",
                quote
            )),
            ErrorImpl::InvalidCharacter { token } => ErrorTip::Suggestion(format!(
                "`{}` is not part of the language",
                token
            )),
            ErrorImpl::SyntaxError {
                kind: TokenKind::End,
                ..
            } => ErrorTip::Suggestion(String::from(
                "Reached end of input, did you miss a semicolon?",
            )),
            ErrorImpl::SyntaxError { .. } => ErrorTip::None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.internal_error {
            ErrorImpl::SourceUnavailable { .. } => write!(f, "{}", self.internal_error),
            _ => write!(f, "{} at line {}", self.internal_error, self.position.0),
        }
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("error opening file {path}: {reason}")]
    SourceUnavailable { path: String, reason: String },
    #[error("unterminated literal opened with {quote}")]
    UnterminatedLiteral { quote: char },
    #[error("invalid character. Found Invalid '{token}'")]
    InvalidCharacter { token: String },
    #[error("{message}. Found {kind} '{token}'")]
    SyntaxError {
        message: String,
        kind: TokenKind,
        token: String,
    },
}
