use std::{collections::BTreeMap, fmt::Display};

use super::tokens::{Token, TokenKind};

/// One sighting of a lexeme during a scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Occurrence {
    pub kind: TokenKind,
    pub line: usize,
}

/// Every lexeme seen by a lexer, with its occurrences in source order.
///
/// Keys are kept sorted so that reports and comparisons are reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolTable {
    entries: BTreeMap<String, Vec<Occurrence>>,
}

impl SymbolTable {
    pub fn new() -> Self {
        SymbolTable::default()
    }

    /// Appends an occurrence of `token` under its lexeme.
    ///
    /// Invalid and end-of-input tokens are never recorded.
    pub fn insert(&mut self, token: &Token) {
        if !token.kind.is_recorded() {
            return;
        }

        self.entries
            .entry(token.value.clone())
            .or_default()
            .push(Occurrence {
                kind: token.kind,
                line: token.line,
            });
    }

    pub fn occurrences_of(&self, lexeme: &str) -> &[Occurrence] {
        self.entries.get(lexeme).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Occurrence])> {
        self.entries
            .iter()
            .map(|(lexeme, occurrences)| (lexeme.as_str(), occurrences.as_slice()))
    }

    /// Number of distinct lexemes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total_occurrences(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }
}

impl Display for SymbolTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Symbol Table:")?;
        for (lexeme, occurrences) in self.iter() {
            writeln!(f, "Token Name: {}", lexeme)?;
            for occurrence in occurrences {
                writeln!(
                    f,
                    "\tType: {}, Value: {}, Line Number: {}",
                    occurrence.kind, lexeme, occurrence.line
                )?;
            }
        }

        Ok(())
    }
}
