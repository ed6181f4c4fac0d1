use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::symbols::SymbolEntry;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("program", TokenKind::Program);
        map.insert("main", TokenKind::Main);
        map.insert("int", TokenKind::Int);
        map.insert("real", TokenKind::Real);
        map.insert("char", TokenKind::Char);
        map.insert("boolean", TokenKind::Boolean);
        map.insert("procedure", TokenKind::Procedure);
        map.insert("if", TokenKind::If);
        map.insert("then", TokenKind::Then);
        map.insert("else", TokenKind::Else);
        map.insert("do", TokenKind::Do);
        map.insert("while", TokenKind::While);
        map.insert("for", TokenKind::For);
        map.insert("switch", TokenKind::Switch);
        map.insert("end", TokenKind::End);
        map.insert("return", TokenKind::Return);
        map.insert("exit", TokenKind::Exit);
        map.insert("when", TokenKind::When);
        map.insert("upto", TokenKind::Upto);
        map.insert("downto", TokenKind::Downto);
        map.insert("case", TokenKind::Case);
        map.insert("default", TokenKind::Default);
        map.insert("and", TokenKind::And);
        map.insert("or", TokenKind::Or);
        map.insert("not", TokenKind::Not);
        map.insert("print", TokenKind::Print);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Identifier,
    NumConst,
    RealConst,
    CharConst,
    BoolConst,

    Less,          // <
    LessEquals,    // <=
    Greater,       // >
    GreaterEquals, // >=
    Equals,        // =
    NotEquals,     // <>

    OpenParen,
    CloseParen,
    OpenBracket,
    CloseBracket,
    OpenCurly,
    CloseCurly,

    Plus,
    Dash,
    Star,
    Slash,
    Percent,

    Assignment, // :=
    Semicolon,
    DotDot,
    Comma,
    Colon,

    // Reserved
    Program,
    Main,
    Int,
    Real,
    Char,
    Boolean,
    Procedure,
    If,
    Then,
    Else,
    Do,
    While,
    For,
    Switch,
    End,
    Return,
    Exit,
    When,
    Upto,
    Downto,
    Case,
    Default,
    And,
    Or,
    Not,
    Print,
}

impl TokenKind {
    pub fn is_reserved(&self) -> bool {
        RESERVED_LOOKUP.values().any(|kind| kind == self)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Payload of a `\0`-style or quoted char literal.
#[derive(Debug, Clone, PartialEq)]
pub enum CharValue {
    /// Numeric character code, only produced by `\0`.
    Code(i64),
    /// Canonical quoted text, e.g. `'a'`.
    Quoted(String),
}

impl Display for CharValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CharValue::Code(code) => write!(f, "{}", code),
            CharValue::Quoted(text) => write!(f, "{}", text),
        }
    }
}

/// Decoded value carried by a token.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenValue {
    IntLiteral(i64),
    RealLiteral(f64),
    CharLiteral(CharValue),
    /// `1` for `true`, `0` for `false`.
    BoolLiteral(u8),
    /// Owned copy of the symbol table entry, never shared with the table.
    IdentifierRef(SymbolEntry),
    NoPayload,
}

impl TokenValue {
    /// Type tag of a literal payload as seen by the code generator.
    pub fn type_tag(&self) -> Option<&'static str> {
        match self {
            TokenValue::IntLiteral(_) => Some("int"),
            TokenValue::RealLiteral(_) => Some("float"),
            TokenValue::CharLiteral(_) => Some("char"),
            TokenValue::BoolLiteral(_) => Some("bool"),
            TokenValue::IdentifierRef(_) | TokenValue::NoPayload => None,
        }
    }
}

impl Display for TokenValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenValue::IntLiteral(value) => write!(f, "{}", value),
            TokenValue::RealLiteral(value) => write!(f, "{:?}", value),
            TokenValue::CharLiteral(value) => write!(f, "{}", value),
            TokenValue::BoolLiteral(value) => write!(f, "{}", value),
            TokenValue::IdentifierRef(entry) => write!(f, "{}", entry.name),
            TokenValue::NoPayload => Ok(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: TokenValue,
    pub line: usize,
    pub offset: usize,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Token {{\nkind: {},\nvalue: {},\nline: {},\noffset: {}}}",
            self.kind, self.value, self.line, self.offset
        )
    }
}

impl Token {
    pub fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }

    pub fn debug(&self) -> String {
        if self.is_one_of_many(&[
            TokenKind::Identifier,
            TokenKind::NumConst,
            TokenKind::RealConst,
            TokenKind::CharConst,
            TokenKind::BoolConst,
        ]) {
            format!("{}:{} {} ({})", self.line, self.offset, self.kind, self.value)
        } else {
            format!("{}:{} {} ()", self.line, self.offset, self.kind)
        }
    }
}
