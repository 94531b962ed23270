//! Parser implementation for validating assignment programs.
//!
//! This module contains the main Parser struct and its token-matching
//! primitives. The parser keeps exactly one lookahead token and pulls the
//! next one from the lexer on every successful match; the grammar
//! productions live in `stmt` and `expr`.

use std::rc::Rc;

use tracing::{debug, info};

use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
    Position,
};

use super::stmt::parse_statement_list;

/// The main parser structure that maintains parsing state.
pub struct Parser<'a> {
    /// The lexer tokens are pulled from
    lexer: &'a mut Lexer,
    /// The single lookahead token
    current: Token,
    /// The name of the source being parsed
    file: Rc<String>,
    /// Number of tokens matched so far
    matched: usize,
}

impl<'a> Parser<'a> {
    /// Creates a new Parser, pulling the first lookahead token.
    ///
    /// # Arguments
    ///
    /// * `lexer` - The lexer to pull tokens from
    ///
    /// # Returns
    ///
    /// The parser, or the lexical error raised while reading the first token.
    pub fn new(lexer: &'a mut Lexer) -> Result<Self, Error> {
        let file = lexer.file();
        let current = lexer.next_token()?;

        Ok(Parser {
            lexer,
            current,
            file,
            matched: 0,
        })
    }

    /// Returns the lookahead token.
    pub fn current_token(&self) -> &Token {
        &self.current
    }

    /// Returns the kind of the lookahead token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    /// Pulls the next token from the lexer and returns the previous lookahead.
    pub fn advance(&mut self) -> Result<Token, Error> {
        let next = self.lexer.next_token()?;
        Ok(std::mem::replace(&mut self.current, next))
    }

    /// Matches the lookahead against an expected kind and, optionally, text.
    ///
    /// # Arguments
    ///
    /// * `expected_kind` - The expected TokenKind
    /// * `expected_value` - The expected token text, if any text is acceptable pass `None`
    /// * `message` - Message reported when the lookahead does not match
    ///
    /// # Returns
    ///
    /// Returns Ok(Token) with the matched token, otherwise a located Error.
    pub fn expect_error(
        &mut self,
        expected_kind: TokenKind,
        expected_value: Option<&str>,
        message: &str,
    ) -> Result<Token, Error> {
        let token = &self.current;
        let value_matches = expected_value.map_or(true, |value| token.value == value);

        if token.kind != expected_kind || !value_matches {
            return Err(self.error_at_current(message));
        }

        debug!(target: "parser", kind = %token.kind, value = %token.value, line = token.line, "matched");
        self.matched += 1;
        self.advance()
    }

    /// Expects a token of the specified kind with the default error message.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        self.expect_error(expected_kind, None, "Unexpected token")
    }

    /// Expects a token of the specified kind and exact text.
    pub fn expect_value(&mut self, expected_kind: TokenKind, expected_value: &str) -> Result<Token, Error> {
        self.expect_error(expected_kind, Some(expected_value), "Unexpected token")
    }

    /// Builds the error for a lookahead that does not fit the grammar.
    pub fn error_at_current(&self, message: &str) -> Error {
        let token = &self.current;

        let error = if token.kind == TokenKind::Invalid {
            ErrorImpl::InvalidCharacter {
                token: token.value.clone(),
            }
        } else {
            ErrorImpl::SyntaxError {
                message: String::from(message),
                kind: token.kind,
                token: token.value.clone(),
            }
        };

        Error::new(error, Position(token.line, Rc::clone(&self.file)))
    }

    /// Checks whether the lookahead is anything other than end of input.
    pub fn has_tokens(&self) -> bool {
        self.current.kind != TokenKind::End
    }

    pub fn matched_count(&self) -> usize {
        self.matched
    }

    /// Program := StatementList END
    pub fn parse_program(&mut self) -> Result<(), Error> {
        let statements = parse_statement_list(self)?;
        self.expect(TokenKind::End)?;

        info!(target: "parser", statements, tokens = self.matched, file = %self.file, "program accepted");
        Ok(())
    }
}

/// Parses everything `lexer` produces as one program.
///
/// This is the main entry point for parsing. Returns `Ok(())` when the program
/// is accepted, otherwise the first lexical or syntax error encountered.
pub fn parse(lexer: &mut Lexer) -> Result<(), Error> {
    let mut parser = Parser::new(lexer)?;
    parser.parse_program()
}
