//! Utility macros for the lexer.
//!
//! This module defines helper macros used by the scanner:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_DEFAULT_HANDLER!` - Creates a default lexer handler for fixed-text tokens
//!
//! These macros reduce boilerplate in the lexer's pattern table.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's string value
/// * `$line` - The source line the token is attributed to
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Constant, "42".to_string(), 1);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $line:expr) => {
        Token {
            kind: $kind,
            value: $value,
            line: $line,
        }
    };
}

/// Creates a default lexer handler for a token with fixed text.
///
/// Generates a handler function that advances the lexer past the token's
/// text and emits it, recording it in the symbol table.
///
/// # Arguments
///
/// * `$kind` - The TokenKind to create
/// * `$value` - The literal string value (used for length calculation)
///
/// # Example
///
/// ```ignore
/// RegexPattern {
///     regex: Regex::new("^\\+=").unwrap(),
///     handler: MK_DEFAULT_HANDLER!(TokenKind::Operator, "+="),
/// }
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr, $value:literal) => {
        |lexer: &mut Lexer, _regex: &Regex| {
            lexer.advance_n($value.len());
            Ok(Some(lexer.emit($kind, String::from($value))))
        }
    };
}
