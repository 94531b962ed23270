//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that turns source text into
//! tokens on demand for the parser. It handles:
//!
//! - Tokenization of source code using anchored regex patterns
//! - Recognition of keywords, identifiers, constants, literals, operators and punctuation
//! - Line tracking for error reporting
//! - Recording every classified token in a symbol table

pub mod lexer;
pub mod symbols;
pub mod tokens;
