//! Error types for the lexer.
//!
//! Lexing is fail-fast: the first position that matches no rule produces
//! an `IllegalCharacter` error carrying the offending character and its
//! source position. No other error kind exists.

pub mod errors;
