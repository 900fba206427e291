//! Token-building macros shared by the lexer's pattern table.
//!
//! - `MK_TOKEN!` builds a `Token` from its kind, literal and span
//! - `MK_DEFAULT_HANDLER!` builds the handler for a fixed-text token

/// Builds a `Token`. `Token` must be in scope at the call site.
///
/// ```ignore
/// let semicolon = MK_TOKEN!(TokenKind::Semicolon, ";".to_string(), lexer.span_of(1));
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $span:expr) => {
        Token {
            kind: $kind,
            value: $value,
            span: $span,
        }
    };
}

/// Expands to a `RegexHandler` for a token whose text never varies, such as
/// an operator. The handler emits the token at the lexer's position and
/// moves the lexer past `$value`.
///
/// `Lexer`, `Token` and `MK_TOKEN!` must be in scope at the call site.
///
/// ```ignore
/// RegexPattern {
///     regex: Regex::new("^!=").unwrap(),
///     handler: MK_DEFAULT_HANDLER!(TokenKind::NotEquals, "!="),
/// }
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr, $value:literal) => {
        |lexer: &mut Lexer, _matched: &str| {
            let token = MK_TOKEN!($kind, String::from($value), lexer.span_of($value.len()));
            lexer.advance_n($value.len());
            Some(token)
        }
    };
}
