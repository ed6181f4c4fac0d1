use std::iter::FusedIterator;

use lazy_static::lazy_static;
use log::{debug, trace};
use regex::Regex;

use crate::{
    errors::errors::Error,
    symbols::{SymbolEntry, SymbolTable},
    Position, MK_DEFAULT_HANDLER, MK_TOKEN,
};

use super::tokens::{CharValue, Token, TokenKind, TokenValue, RESERVED_LOOKUP};

pub type RegexHandler =
    fn(&mut Cursor<'_>, &str, &dyn IdentifierResolver) -> Result<Option<Token>, Error>;

pub struct RegexPattern {
    pub name: &'static str,
    regex: Regex,
    handler: RegexHandler,
}

/// Turns an identifier into the entry its token carries.
///
/// Rule handlers are shared by every lexer, so they see the symbol table
/// through this object-safe view instead of the generic `SymbolTable`.
pub trait IdentifierResolver {
    fn resolve(&self, name: &str) -> SymbolEntry;
}

impl<T: SymbolTable> IdentifierResolver for T {
    fn resolve(&self, name: &str) -> SymbolEntry {
        if self.contains(name) {
            if let Some(entry) = self.index_of(name).and_then(|handle| self.get(handle)) {
                debug!("Resolved identifier {:?} from symbol table", name);
                return entry.clone();
            }
        }

        debug!("Created placeholder entry for identifier {:?}", name);
        self.new_variable_entry(name)
    }
}

lazy_static! {
    // Evaluation order is the match priority: the first rule matching at the
    // cursor wins, regardless of how long later matches would be.
    pub static ref RULES: Vec<RegexPattern> = vec![
        RegexPattern { name: "whitespace", regex: anchored("[ \t]+"), handler: skip_handler },
        RegexPattern { name: "newline", regex: anchored("\n+"), handler: newline_handler },
        RegexPattern { name: "comment", regex: anchored("//.*"), handler: skip_handler },
        RegexPattern { name: "real", regex: anchored("#([1-9][0-9]*|0)\\.([0-9]*[1-9]|0)"), handler: real_handler },
        RegexPattern { name: "integer", regex: anchored("#([1-9][0-9]*|0)"), handler: integer_handler },
        RegexPattern { name: "char", regex: anchored("\\\\.|'.'"), handler: char_handler },
        RegexPattern { name: "boolean", regex: anchored("true|false"), handler: bool_handler },
        RegexPattern { name: "identifier", regex: anchored("[a-zA-Z]+"), handler: symbol_handler },
        RegexPattern { name: "less_equals", regex: anchored("<="), handler: MK_DEFAULT_HANDLER!(TokenKind::LessEquals) },
        RegexPattern { name: "greater_equals", regex: anchored(">="), handler: MK_DEFAULT_HANDLER!(TokenKind::GreaterEquals) },
        RegexPattern { name: "not_equals", regex: anchored("<>"), handler: MK_DEFAULT_HANDLER!(TokenKind::NotEquals) },
        RegexPattern { name: "assignment", regex: anchored(":="), handler: MK_DEFAULT_HANDLER!(TokenKind::Assignment) },
        RegexPattern { name: "dot_dot", regex: anchored("\\.\\."), handler: MK_DEFAULT_HANDLER!(TokenKind::DotDot) },
        RegexPattern { name: "less", regex: anchored("<"), handler: MK_DEFAULT_HANDLER!(TokenKind::Less) },
        RegexPattern { name: "greater", regex: anchored(">"), handler: MK_DEFAULT_HANDLER!(TokenKind::Greater) },
        RegexPattern { name: "equals", regex: anchored("="), handler: MK_DEFAULT_HANDLER!(TokenKind::Equals) },
        RegexPattern { name: "open_paren", regex: anchored("\\("), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenParen) },
        RegexPattern { name: "close_paren", regex: anchored("\\)"), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseParen) },
        RegexPattern { name: "open_bracket", regex: anchored("\\["), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenBracket) },
        RegexPattern { name: "close_bracket", regex: anchored("\\]"), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseBracket) },
        RegexPattern { name: "open_curly", regex: anchored("\\{"), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenCurly) },
        RegexPattern { name: "close_curly", regex: anchored("\\}"), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseCurly) },
        RegexPattern { name: "plus", regex: anchored("\\+"), handler: MK_DEFAULT_HANDLER!(TokenKind::Plus) },
        RegexPattern { name: "dash", regex: anchored("-"), handler: MK_DEFAULT_HANDLER!(TokenKind::Dash) },
        RegexPattern { name: "star", regex: anchored("\\*"), handler: MK_DEFAULT_HANDLER!(TokenKind::Star) },
        RegexPattern { name: "slash", regex: anchored("/"), handler: MK_DEFAULT_HANDLER!(TokenKind::Slash) },
        RegexPattern { name: "percent", regex: anchored("%"), handler: MK_DEFAULT_HANDLER!(TokenKind::Percent) },
        RegexPattern { name: "semicolon", regex: anchored(";"), handler: MK_DEFAULT_HANDLER!(TokenKind::Semicolon) },
        RegexPattern { name: "colon", regex: anchored(":"), handler: MK_DEFAULT_HANDLER!(TokenKind::Colon) },
        RegexPattern { name: "comma", regex: anchored(","), handler: MK_DEFAULT_HANDLER!(TokenKind::Comma) },
    ];
}

fn anchored(pattern: &str) -> Regex {
    Regex::new(&format!("\\A(?:{})", pattern)).expect("lexer rule patterns are valid")
}

/// Rule names in evaluation order.
pub fn rule_names() -> Vec<&'static str> {
    RULES.iter().map(|rule| rule.name).collect()
}

/// Read position over the source buffer.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    source: &'a str,
    pub pos: usize,
    pub line: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(source: &'a str) -> Cursor<'a> {
        Cursor {
            source,
            pos: 0,
            line: 1,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn remainder(&self) -> &'a str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn position(&self) -> Position {
        Position {
            line: self.line,
            offset: self.pos,
        }
    }
}

pub struct Lexer<'a, T: SymbolTable> {
    cursor: Cursor<'a>,
    symbols: &'a T,
    finished: bool,
}

impl<'a, T: SymbolTable> Lexer<'a, T> {
    pub fn new(source: &'a str, symbols: &'a T) -> Lexer<'a, T> {
        Lexer {
            cursor: Cursor::new(source),
            symbols,
            finished: false,
        }
    }

    pub fn cursor(&self) -> &Cursor<'a> {
        &self.cursor
    }

    /// Produces the next token, skipping ignorable lexemes.
    ///
    /// Returns `Ok(None)` once the source is exhausted.
    pub fn next_token(&mut self) -> Result<Option<Token>, Error> {
        while !self.cursor.at_eof() {
            let remaining = self.cursor.remainder();
            let matched = RULES
                .iter()
                .find_map(|rule| rule.regex.find(remaining).map(|found| (rule, found.as_str())));

            let Some((rule, text)) = matched else {
                let error = self.illegal_character();
                debug!("Lexing failed: {}", error);
                return Err(error);
            };

            let token = (rule.handler)(&mut self.cursor, text, self.symbols)?;
            self.cursor.advance_n(text.len());

            if let Some(token) = token {
                trace!("{} -> {}", rule.name, token.debug());
                return Ok(Some(token));
            }
        }

        Ok(None)
    }

    fn illegal_character(&self) -> Error {
        // Only reached with input left, so there is always a character here.
        let character = self.cursor.at().unwrap_or('\0');
        Error::illegal_character(character, self.cursor.position())
    }
}

impl<T: SymbolTable> Iterator for Lexer<'_, T> {
    type Item = Result<Token, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        match self.next_token() {
            Ok(Some(token)) => Some(Ok(token)),
            Ok(None) => {
                self.finished = true;
                None
            }
            Err(error) => {
                self.finished = true;
                Some(Err(error))
            }
        }
    }
}

impl<T: SymbolTable> FusedIterator for Lexer<'_, T> {}

fn skip_handler(
    _cursor: &mut Cursor<'_>,
    _matched: &str,
    _symbols: &dyn IdentifierResolver,
) -> Result<Option<Token>, Error> {
    Ok(None)
}

fn newline_handler(
    cursor: &mut Cursor<'_>,
    matched: &str,
    _symbols: &dyn IdentifierResolver,
) -> Result<Option<Token>, Error> {
    cursor.line += matched.len();
    Ok(None)
}

fn real_handler(
    cursor: &mut Cursor<'_>,
    matched: &str,
    _symbols: &dyn IdentifierResolver,
) -> Result<Option<Token>, Error> {
    let value = matched[1..]
        .parse::<f64>()
        .map_err(|_| Error::illegal_character('#', cursor.position()))?;

    Ok(Some(MK_TOKEN!(TokenKind::RealConst, TokenValue::RealLiteral(value), cursor)))
}

fn integer_handler(
    cursor: &mut Cursor<'_>,
    matched: &str,
    _symbols: &dyn IdentifierResolver,
) -> Result<Option<Token>, Error> {
    // Digit runs past i64::MAX fail here and are reported at the `#`.
    let value = matched[1..]
        .parse::<i64>()
        .map_err(|_| Error::illegal_character('#', cursor.position()))?;

    Ok(Some(MK_TOKEN!(TokenKind::NumConst, TokenValue::IntLiteral(value), cursor)))
}

fn char_handler(
    cursor: &mut Cursor<'_>,
    matched: &str,
    _symbols: &dyn IdentifierResolver,
) -> Result<Option<Token>, Error> {
    let value = if matched == "\\0" {
        CharValue::Code(0)
    } else if matched.starts_with('\'') {
        CharValue::Quoted(String::from(matched))
    } else {
        // Backslash forms keep the escaped character itself: `\n` is `'n'`.
        CharValue::Quoted(format!("'{}'", &matched[1..]))
    };

    Ok(Some(MK_TOKEN!(TokenKind::CharConst, TokenValue::CharLiteral(value), cursor)))
}

fn bool_handler(
    cursor: &mut Cursor<'_>,
    matched: &str,
    _symbols: &dyn IdentifierResolver,
) -> Result<Option<Token>, Error> {
    let value = if matched == "true" { 1 } else { 0 };

    Ok(Some(MK_TOKEN!(TokenKind::BoolConst, TokenValue::BoolLiteral(value), cursor)))
}

fn symbol_handler(
    cursor: &mut Cursor<'_>,
    matched: &str,
    symbols: &dyn IdentifierResolver,
) -> Result<Option<Token>, Error> {
    if let Some(kind) = RESERVED_LOOKUP.get(matched) {
        return Ok(Some(MK_TOKEN!(*kind, TokenValue::NoPayload, cursor)));
    }

    let entry = symbols.resolve(matched);
    Ok(Some(MK_TOKEN!(TokenKind::Identifier, TokenValue::IdentifierRef(entry), cursor)))
}

/// Lexes the whole buffer, stopping at the first illegal character.
pub fn tokenize<T: SymbolTable>(source: &str, symbols: &T) -> Result<Vec<Token>, Error> {
    Lexer::new(source, symbols).collect()
}
