use lazy_static::lazy_static;
use std::{collections::HashSet, fmt::Display};

lazy_static! {
    pub static ref KEYWORDS: HashSet<&'static str> = {
        let mut set = HashSet::new();
        set.insert("if");
        set.insert("else");
        set.insert("while");
        set.insert("int");
        set.insert("float");
        set
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Keyword,
    SpecialCharacter,
    Identifier,
    Operator,
    Constant,
    Literal,
    PunctuationSymbol,
    Invalid,
    End,
}

impl TokenKind {
    /// Whether tokens of this kind are entered into the symbol table when emitted.
    pub fn is_recorded(&self) -> bool {
        !matches!(
            self,
            TokenKind::Invalid | TokenKind::End | TokenKind::SpecialCharacter
        )
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TokenKind::Keyword => "Keyword",
            TokenKind::SpecialCharacter => "Special Character",
            TokenKind::Identifier => "Identifier",
            TokenKind::Operator => "Operator",
            TokenKind::Constant => "Constant",
            TokenKind::Literal => "Literal",
            TokenKind::PunctuationSymbol => "Punctuation Symbol",
            TokenKind::Invalid => "Invalid",
            TokenKind::End => "End",
        };

        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub line: usize,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} '{}' (line {})", self.kind, self.value, self.line)
    }
}

impl Token {
    pub fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }

    /// True when this is an operator token whose text is in `operators`.
    pub fn is_operator_in(&self, operators: &HashSet<&'static str>) -> bool {
        self.kind == TokenKind::Operator && operators.contains(self.value.as_str())
    }

    pub fn is_punctuation(&self, symbol: &str) -> bool {
        self.kind == TokenKind::PunctuationSymbol && self.value == symbol
    }
}
