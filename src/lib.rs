#![allow(clippy::module_inception)]

use std::{
    path::{Path, PathBuf},
    rc::Rc,
};

use crate::errors::errors::{Error, ErrorTip};

pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// A source line (1-based) and the name of the source it belongs to.
/// Line 0 marks errors raised before any text was read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position(pub usize, pub Rc<String>);

/// Appends `.extension` to `path` when its file name has none.
pub fn normalize_source_path(path: &Path, extension: &str) -> PathBuf {
    if path.extension().is_some() {
        path.to_path_buf()
    } else {
        path.with_extension(extension)
    }
}

/// Returns the text of a 1-based `line` of `source`, without its line ending.
pub fn get_line(source: &str, line: usize) -> Option<&str> {
    if line == 0 {
        return None;
    }

    source
        .split('\n')
        .nth(line - 1)
        .map(|text| text.trim_end_matches('\r'))
}

/// Renders a diagnostic for `error` against the source it was raised in.
pub fn format_error(error: &Error, source: &str) -> String {
    /*
        Error: SyntaxError (tip)
        -> program.txt
           |
        20 | x = = 1;
           |
        Expected identifier, constant, or '(' for factor. Found Operator '=' at line 20
    */

    let mut out = String::new();
    let position = error.get_position();

    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        out.push_str(&format!("Error: {} ({})\n", error.get_error_name(), error.get_tip()));
    }
    out.push_str(&format!("-> {}\n", position.1));

    if let Some(line_text) = get_line(source, position.0) {
        let line_string = position.0.to_string();
        let padding = line_string.len() + 2;

        out.push_str(&format!("{:>padding$}\n", "|"));
        out.push_str(&format!("{} | {}\n", line_string, line_text.trim()));
        out.push_str(&format!("{:>padding$}\n", "|"));
    }

    out.push_str(&error.to_string());
    out
}

pub fn display_error(error: &Error, source: &str) {
    eprintln!("{}", format_error(error, source));
}

#[cfg(test)]
mod tests {
    use std::{path::Path, rc::Rc};

    use crate::{
        errors::errors::{Error, ErrorImpl},
        lexer::tokens::TokenKind,
        Position,
    };

    #[test]
    fn test_normalize_source_path() {
        assert_eq!(
            super::normalize_source_path(Path::new("program"), "txt"),
            Path::new("program.txt")
        );
        assert_eq!(
            super::normalize_source_path(Path::new("dir/program.src"), "txt"),
            Path::new("dir/program.src")
        );
    }

    #[test]
    fn test_get_line() {
        let source = "x = 1;\r\ny = 2;\n";

        assert_eq!(super::get_line(source, 1), Some("x = 1;"));
        assert_eq!(super::get_line(source, 2), Some("y = 2;"));
        assert_eq!(super::get_line(source, 3), Some(""));
        assert_eq!(super::get_line(source, 4), None);
        assert_eq!(super::get_line(source, 0), None);
    }

    #[test]
    fn test_format_error() {
        let error = Error::new(
            ErrorImpl::SyntaxError {
                message: String::from("Expected identifier for assignment"),
                kind: TokenKind::Operator,
                token: String::from("="),
            },
            Position(2, Rc::new(String::from("program.txt"))),
        );

        let rendered = super::format_error(&error, "x = 1;\n  = 2;\n");
        assert_eq!(
            rendered,
            "Error: SyntaxError\n\
             -> program.txt\n  \
             |\n\
             2 | = 2;\n  \
             |\n\
             Expected identifier for assignment. Found Operator '=' at line 2"
        );
    }
}
