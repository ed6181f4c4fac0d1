//! Symbol table collaborator used by the lexer.
//!
//! The lexer never owns identifier storage. It reads existing entries
//! through the `SymbolTable` trait and asks it to build placeholder entries
//! for names it has not seen. Registering those placeholders is left to
//! whoever owns the table (normally the parser).
//!
//! `VariableTable` is a simple in-memory implementation used by the driver
//! and the tests.

pub mod symbol_table;

#[cfg(test)]
mod tests;

pub use symbol_table::{EntryKind, SymbolEntry, SymbolTable, VarType, VariableTable};
