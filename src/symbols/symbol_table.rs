use std::fmt::Display;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum EntryKind {
    Program,
    Procedure,
    Variable,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum VarType {
    Int,
    Real,
    Char,
    Boolean,
}

impl Display for VarType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VarType::Int => write!(f, "int"),
            VarType::Real => write!(f, "real"),
            VarType::Char => write!(f, "char"),
            VarType::Boolean => write!(f, "boolean"),
        }
    }
}

/// A declared or placeholder identifier.
///
/// Entries are plain owned data, so `clone()` is a deep copy. Tokens hold
/// such copies and are unaffected by later changes to the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolEntry {
    pub name: String,
    pub kind: EntryKind,
    /// `None` until a declaration gives the variable a type.
    pub var_type: Option<VarType>,
    pub address: Option<usize>,
}

impl SymbolEntry {
    pub fn variable(name: &str) -> Self {
        SymbolEntry {
            name: String::from(name),
            kind: EntryKind::Variable,
            var_type: None,
            address: None,
        }
    }

    pub fn is_declared(&self) -> bool {
        self.var_type.is_some() || self.kind != EntryKind::Variable
    }
}

/// Contract the lexer relies on when resolving identifiers.
pub trait SymbolTable {
    type Handle;

    fn contains(&self, name: &str) -> bool;
    fn index_of(&self, name: &str) -> Option<Self::Handle>;
    fn get(&self, handle: Self::Handle) -> Option<&SymbolEntry>;
    /// Builds a fresh placeholder entry. Does not register it.
    fn new_variable_entry(&self, name: &str) -> SymbolEntry;
}

/// Symbol table backed by a vector, in declaration order.
#[derive(Debug, Clone, Default)]
pub struct VariableTable {
    entries: Vec<SymbolEntry>,
}

impl VariableTable {
    pub fn new() -> Self {
        VariableTable { entries: vec![] }
    }

    /// Registers `entry` and returns its index. A name that is already
    /// present keeps its original slot and is overwritten in place.
    pub fn insert(&mut self, entry: SymbolEntry) -> usize {
        match self.index_of(&entry.name) {
            Some(index) => {
                self.entries[index] = entry;
                index
            }
            None => {
                self.entries.push(entry);
                self.entries.len() - 1
            }
        }
    }

    pub fn get_mut(&mut self, handle: usize) -> Option<&mut SymbolEntry> {
        self.entries.get_mut(handle)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl SymbolTable for VariableTable {
    type Handle = usize;

    fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|entry| entry.name == name)
    }

    fn index_of(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.name == name)
    }

    fn get(&self, handle: usize) -> Option<&SymbolEntry> {
        self.entries.get(handle)
    }

    fn new_variable_entry(&self, name: &str) -> SymbolEntry {
        SymbolEntry::variable(name)
    }
}
