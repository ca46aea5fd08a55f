//! Utility macros for the front end.
//!
//! This module defines helper macros used by the lexer:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_DEFAULT_HANDLER!` - Creates a lexer handler for fixed-text tokens
//!
//! These macros reduce boilerplate in the lexer implementation.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$word` - The token's literal text
/// * `$loc` - The source location of the first character
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Int, "42".to_string(), loc);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $word:expr, $loc:expr) => {
        Token {
            kind: $kind,
            word: $word,
            loc: $loc,
        }
    };
}

/// Creates a lexer handler for tokens whose text is fixed.
///
/// Generates a handler function that stamps the current location, advances
/// the lexer past the literal text and yields a token of the given kind.
///
/// # Example
///
/// ```ignore
/// RegexPattern {
///     regex: Regex::new("\\+").unwrap(),
///     handler: MK_DEFAULT_HANDLER!(TokenKind::Plus, "+"),
/// }
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr, $word:literal) => {
        |lexer: &mut Lexer, _regex: &Regex| {
            let loc = lexer.loc();
            lexer.advance_over($word);
            Some(MK_TOKEN!($kind, String::from($word), loc))
        }
    };
}
