#![allow(clippy::module_inception)]

pub mod errors;
pub mod lexer;
pub mod macros;
pub mod symbols;

pub use errors::errors::{Error, ErrorImpl, ErrorTip};
pub use lexer::{
    lexer::{tokenize, Lexer},
    tokens::{CharValue, Token, TokenKind, TokenValue},
};
pub use symbols::{SymbolEntry, SymbolTable, VariableTable};

/// Location of a lexeme: 1-based line and byte offset into the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub offset: usize,
}

/// Returns the text of the line containing byte `offset`, along with the
/// column of `offset` inside that line. `None` if `offset` is out of range.
pub fn get_line_at_position(source: &str, offset: usize) -> Option<(String, usize)> {
    if offset >= source.len() {
        return None;
    }

    let mut start = 0;

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&offset) {
            return Some((line.to_string(), offset - start));
        }

        start = end;
    }

    None
}
