use std::collections::HashSet;

use lazy_static::lazy_static;

lazy_static! {
    /// AssignOp := '=' | '+=' | '-=' | '*=' | '/='
    pub static ref ASSIGNMENT_OPERATORS: HashSet<&'static str> =
        ["=", "+=", "-=", "*=", "/="].into_iter().collect();

    /// Operators joining terms within an expression.
    pub static ref ADDITIVE_OPERATORS: HashSet<&'static str> = ["+", "-"].into_iter().collect();

    /// Operators joining factors within a term.
    pub static ref MULTIPLICATIVE_OPERATORS: HashSet<&'static str> =
        ["*", "/"].into_iter().collect();
}
