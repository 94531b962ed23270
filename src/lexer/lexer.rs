use std::{fs, path::Path, rc::Rc};

use lazy_static::lazy_static;
use regex::Regex;
use tracing::trace;

use crate::{errors::errors::{Error, ErrorImpl}, Position, MK_DEFAULT_HANDLER, MK_TOKEN};

use super::{
    symbols::SymbolTable,
    tokens::{Token, TokenKind, KEYWORDS},
};

/// Handles a pattern that matched at the lexer's position. `Ok(None)` means
/// the matched text produced no token and scanning continues.
pub type RegexHandler = fn(&mut Lexer, &Regex) -> Result<Option<Token>, Error>;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

lazy_static! {
    // Tried in order; compound operators must precede their one-character prefix.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new("^[a-zA-Z_][a-zA-Z0-9_]*").unwrap(), handler: symbol_handler },
        RegexPattern { regex: Regex::new("^[0-9]+").unwrap(), handler: constant_handler },
        RegexPattern { regex: Regex::new("^[[:space:]]+").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new("^\"[^\"]*\"").unwrap(), handler: literal_handler },
        RegexPattern { regex: Regex::new("^'[^']*'").unwrap(), handler: literal_handler },
        RegexPattern { regex: Regex::new("^[\"']").unwrap(), handler: unterminated_literal_handler },
        RegexPattern { regex: Regex::new("^\\+=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Operator, "+=") },
        RegexPattern { regex: Regex::new("^-=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Operator, "-=") },
        RegexPattern { regex: Regex::new("^\\*=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Operator, "*=") },
        RegexPattern { regex: Regex::new("^/=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Operator, "/=") },
        RegexPattern { regex: Regex::new("^==").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Operator, "==") },
        RegexPattern { regex: Regex::new("^\\+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Operator, "+") },
        RegexPattern { regex: Regex::new("^-").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Operator, "-") },
        RegexPattern { regex: Regex::new("^\\*").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Operator, "*") },
        RegexPattern { regex: Regex::new("^/").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Operator, "/") },
        RegexPattern { regex: Regex::new("^=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Operator, "=") },
        RegexPattern { regex: Regex::new("^,").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::PunctuationSymbol, ",") },
        RegexPattern { regex: Regex::new("^;").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::PunctuationSymbol, ";") },
        RegexPattern { regex: Regex::new("^\\(").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::PunctuationSymbol, "(") },
        RegexPattern { regex: Regex::new("^\\)").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::PunctuationSymbol, ")") },
        RegexPattern { regex: Regex::new("^\\{").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::PunctuationSymbol, "{") },
        RegexPattern { regex: Regex::new("^\\}").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::PunctuationSymbol, "}") },
        RegexPattern { regex: Regex::new("^\\[").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::PunctuationSymbol, "[") },
        RegexPattern { regex: Regex::new("^\\]").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::PunctuationSymbol, "]") },
        RegexPattern { regex: Regex::new("^\\.").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::PunctuationSymbol, ".") },
    ];
}

/// Pull-based scanner over one source. Owns the symbol table for that scan.
#[derive(Clone)]
pub struct Lexer {
    symbols: SymbolTable,
    source: String,
    pos: usize,
    line: usize,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            symbols: SymbolTable::new(),
            source,
            pos: 0,
            line: 1,
            file: file_name,
        }
    }

    /// Reads the whole file up front; the handle is closed before this returns.
    pub fn from_path(path: &Path) -> Result<Lexer, Error> {
        let name = path.to_string_lossy().into_owned();

        match fs::read_to_string(path) {
            Ok(source) => Ok(Lexer::new(source, Some(name))),
            Err(err) => Err(Error::new(
                ErrorImpl::SourceUnavailable {
                    path: name.clone(),
                    reason: err.to_string(),
                },
                Position(0, Rc::new(name)),
            )),
        }
    }

    /// Produces the next token, or `End` once the source is exhausted.
    pub fn next_token(&mut self) -> Result<Token, Error> {
        while !self.at_eof() {
            let mut matched = None;

            for pattern in PATTERNS.iter() {
                if pattern.regex.is_match(self.remainder()) {
                    matched = Some(pattern);
                    break;
                }
            }

            match matched {
                Some(pattern) => {
                    if let Some(token) = (pattern.handler)(self, &pattern.regex)? {
                        trace!(target: "lexer", kind = %token.kind, value = %token.value, line = token.line, "token");
                        return Ok(token);
                    }
                }
                None => {
                    let ch = self.at();
                    self.advance_n(ch.len_utf8());
                    let token = MK_TOKEN!(TokenKind::Invalid, ch.to_string(), self.line);
                    trace!(target: "lexer", value = %token.value, line = token.line, "invalid character");
                    return Ok(token);
                }
            }
        }

        Ok(MK_TOKEN!(TokenKind::End, String::new(), self.line))
    }

    /// Builds a token on the current line and records it in the symbol table.
    pub fn emit(&mut self, kind: TokenKind, value: String) -> Token {
        let token = MK_TOKEN!(kind, value, self.line);
        self.symbols.insert(&token);
        token
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    /// Consumes the text `regex` matches at the current position.
    fn consume(&mut self, regex: &Regex) -> String {
        let len = regex.find(self.remainder()).map_or(0, |m| m.end());
        let text = self.source[self.pos..self.pos + len].to_string();
        self.advance_n(len);
        text
    }

    pub fn at(&self) -> char {
        self.remainder().chars().next().unwrap_or('\0')
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn position(&self) -> Position {
        Position(self.line, Rc::clone(&self.file))
    }

    pub fn file(&self) -> Rc<String> {
        Rc::clone(&self.file)
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    pub fn into_symbols(self) -> SymbolTable {
        self.symbols
    }
}

fn symbol_handler(lexer: &mut Lexer, regex: &Regex) -> Result<Option<Token>, Error> {
    let value = lexer.consume(regex);

    if KEYWORDS.contains(value.as_str()) {
        Ok(Some(lexer.emit(TokenKind::Keyword, value)))
    } else {
        Ok(Some(lexer.emit(TokenKind::Identifier, value)))
    }
}

fn constant_handler(lexer: &mut Lexer, regex: &Regex) -> Result<Option<Token>, Error> {
    let value = lexer.consume(regex);
    Ok(Some(lexer.emit(TokenKind::Constant, value)))
}

fn skip_handler(lexer: &mut Lexer, regex: &Regex) -> Result<Option<Token>, Error> {
    let skipped = lexer.consume(regex);
    lexer.line += skipped.matches('\n').count();
    Ok(None)
}

fn literal_handler(lexer: &mut Lexer, regex: &Regex) -> Result<Option<Token>, Error> {
    let matched = lexer.consume(regex);
    // A literal spanning lines is attributed to the line it ends on.
    lexer.line += matched.matches('\n').count();

    let value = matched[1..matched.len() - 1].to_string();
    Ok(Some(lexer.emit(TokenKind::Literal, value)))
}

fn unterminated_literal_handler(lexer: &mut Lexer, _regex: &Regex) -> Result<Option<Token>, Error> {
    Err(Error::new(ErrorImpl::UnterminatedLiteral { quote: lexer.at() }, lexer.position()))
}

/// Scans `source` to completion. The returned tokens end with a single `End`.
pub fn tokenize(source: String, file: Option<String>) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source, file);
    let mut tokens = vec![];

    loop {
        let token = lex.next_token()?;
        let done = token.kind == TokenKind::End;
        tokens.push(token);

        if done {
            return Ok(tokens);
        }
    }
}
