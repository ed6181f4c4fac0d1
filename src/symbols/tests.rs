//! Unit tests for the reference symbol table.

use super::{EntryKind, SymbolEntry, SymbolTable, VarType, VariableTable};

#[test]
fn test_new_variable_entry_is_not_registered() {
    let table = VariableTable::new();
    let entry = table.new_variable_entry("count");

    assert_eq!(entry.name, "count");
    assert_eq!(entry.kind, EntryKind::Variable);
    assert_eq!(entry.var_type, None);
    assert!(!entry.is_declared());
    assert!(!table.contains("count"));
    assert!(table.is_empty());
}

#[test]
fn test_insert_and_lookup() {
    let mut table = VariableTable::new();
    let first = table.insert(SymbolEntry::variable("a"));
    let second = table.insert(SymbolEntry::variable("b"));

    assert_eq!(first, 0);
    assert_eq!(second, 1);
    assert!(table.contains("b"));
    assert_eq!(table.index_of("b"), Some(1));
    assert_eq!(table.get(1).unwrap().name, "b");
    assert_eq!(table.index_of("c"), None);
    assert!(table.get(7).is_none());
}

#[test]
fn test_insert_existing_name_keeps_slot() {
    let mut table = VariableTable::new();
    table.insert(SymbolEntry::variable("x"));
    table.insert(SymbolEntry::variable("y"));

    let mut typed = SymbolEntry::variable("x");
    typed.var_type = Some(VarType::Real);
    let index = table.insert(typed);

    assert_eq!(index, 0);
    assert_eq!(table.len(), 2);
    assert_eq!(table.get(0).unwrap().var_type, Some(VarType::Real));
}

#[test]
fn test_procedure_entry_counts_as_declared() {
    let entry = SymbolEntry {
        name: "draw".to_string(),
        kind: EntryKind::Procedure,
        var_type: None,
        address: Some(12),
    };

    assert!(entry.is_declared());
}

#[test]
fn test_var_type_display() {
    assert_eq!(VarType::Int.to_string(), "int");
    assert_eq!(VarType::Boolean.to_string(), "boolean");
}
