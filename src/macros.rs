//! Utility macros for the lexer.
//!
//! - `MK_TOKEN!` - Creates a Token positioned at the cursor
//! - `MK_DEFAULT_HANDLER!` - Creates a rule handler for payload-free tokens
//!
//! Both expand to bare `Token` / `TokenValue` paths, so callers must have
//! them in scope.

/// Creates a Token at the cursor's current line and offset.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The decoded TokenValue
/// * `$cursor` - The cursor, still positioned on the lexeme's first character
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::NumConst, TokenValue::IntLiteral(42), cursor);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $cursor:expr) => {
        Token {
            kind: $kind,
            value: $value,
            line: $cursor.line,
            offset: $cursor.pos,
        }
    };
}

/// Creates a rule handler for fixed punctuation and operators.
///
/// The generated handler ignores the matched text and emits a token of the
/// given kind with no payload. The engine advances the cursor afterwards.
///
/// # Example
///
/// ```ignore
/// RegexPattern {
///     name: "plus",
///     regex: anchored("\\+"),
///     handler: MK_DEFAULT_HANDLER!(TokenKind::Plus),
/// }
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr) => {
        |cursor, _matched, _symbols| {
            Ok(Some(MK_TOKEN!($kind, TokenValue::NoPayload, cursor)))
        }
    };
}
