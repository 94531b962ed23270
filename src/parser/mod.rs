//! Recursive-descent parser for assignment programs.
//!
//! This module validates a token stream against the grammar:
//!
//! ```text
//! Program        := StatementList END
//! StatementList  := ( Statement ';' )*
//! Statement      := Assignment
//! Assignment     := IDENTIFIER AssignOp Expression
//! AssignOp       := '=' | '+=' | '-=' | '*=' | '/='
//! Expression     := Term ( ('+' | '-') Term )*
//! Term           := Factor ( ('*' | '/') Factor )*
//! Factor         := IDENTIFIER | CONSTANT | '(' Expression ')'
//! ```
//!
//! Every production is a function taking the parser; one token of lookahead
//! decides between alternatives and the first mismatch ends the parse.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
