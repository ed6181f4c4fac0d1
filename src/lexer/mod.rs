//! Lexical analysis module.
//!
//! Converts source text into a stream of classified tokens. It handles:
//!
//! - An ordered table of regex rules, tried first-match-wins
//! - Decoding of `#` numeric, char and boolean literals
//! - Reserved-word lookup and identifier resolution against a symbol table
//! - Line tracking and fail-fast reporting of illegal characters

pub mod lexer;
pub mod tokens;
