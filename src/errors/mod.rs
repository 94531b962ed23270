//! Error types and error handling for the lexer and parser.
//!
//! This module defines the errors that can end a scan or a parse:
//!
//! - Errors carry the line and source name they were raised at
//! - Lexical failures (unreadable source, unterminated literals)
//! - Syntax failures, including invalid characters reaching the parser
//! - Helpful tips for the diagnostic printer

pub mod errors;

#[cfg(test)]
mod tests;
