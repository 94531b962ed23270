use crate::{errors::errors::Error, lexer::tokens::TokenKind};

use super::{
    lookups::{ADDITIVE_OPERATORS, MULTIPLICATIVE_OPERATORS},
    parser::Parser,
};

/// Expression := Term ( ('+' | '-') Term )*
pub fn parse_expr(parser: &mut Parser) -> Result<(), Error> {
    parse_term(parser)?;

    while parser.current_token().is_operator_in(&ADDITIVE_OPERATORS) {
        parser.expect(TokenKind::Operator)?;
        parse_term(parser)?;
    }

    Ok(())
}

/// Term := Factor ( ('*' | '/') Factor )*
pub fn parse_term(parser: &mut Parser) -> Result<(), Error> {
    parse_factor(parser)?;

    while parser.current_token().is_operator_in(&MULTIPLICATIVE_OPERATORS) {
        parser.expect(TokenKind::Operator)?;
        parse_factor(parser)?;
    }

    Ok(())
}

/// Factor := IDENTIFIER | CONSTANT | '(' Expression ')'
pub fn parse_factor(parser: &mut Parser) -> Result<(), Error> {
    let token = parser.current_token();

    if token.is_one_of_many(&[TokenKind::Identifier, TokenKind::Constant]) {
        let kind = token.kind;
        parser.expect(kind)?;
        Ok(())
    } else if token.is_punctuation("(") {
        parser.expect_value(TokenKind::PunctuationSymbol, "(")?;
        parse_expr(parser)?;
        parser.expect_value(TokenKind::PunctuationSymbol, ")")?;
        Ok(())
    } else {
        Err(parser.error_at_current("Expected identifier, constant, or '(' for factor"))
    }
}
