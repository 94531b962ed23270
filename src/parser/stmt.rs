use crate::{errors::errors::Error, lexer::tokens::TokenKind};

use super::{expr::parse_expr, lookups::ASSIGNMENT_OPERATORS, parser::Parser};

/// StatementList := ( Statement ';' )*
///
/// Returns the number of statements parsed.
pub fn parse_statement_list(parser: &mut Parser) -> Result<usize, Error> {
    let mut count = 0;

    while parser.has_tokens() {
        parse_statement(parser)?;
        parser.expect_value(TokenKind::PunctuationSymbol, ";")?;
        count += 1;
    }

    Ok(count)
}

/// Statement := Assignment
pub fn parse_statement(parser: &mut Parser) -> Result<(), Error> {
    if parser.current_token_kind() == TokenKind::Identifier {
        parse_assignment(parser)
    } else {
        Err(parser.error_at_current("Expected identifier for assignment"))
    }
}

/// Assignment := IDENTIFIER AssignOp Expression
pub fn parse_assignment(parser: &mut Parser) -> Result<(), Error> {
    parser.expect(TokenKind::Identifier)?;
    parse_assignment_operator(parser)?;
    parse_expr(parser)
}

fn parse_assignment_operator(parser: &mut Parser) -> Result<(), Error> {
    if parser.current_token().is_operator_in(&ASSIGNMENT_OPERATORS) {
        parser.expect(TokenKind::Operator)?;
        Ok(())
    } else {
        // Reported against a plain `=`, the only non-compound form.
        parser.expect_value(TokenKind::Operator, "=").map(|_| ())
    }
}
