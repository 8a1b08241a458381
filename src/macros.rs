//! Utility macros for the front end.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//!
//! This macro reduces boilerplate in the lexer implementation.

/// Creates a Token instance.
///
/// With two arguments the spelling is the kind's fixed name. With three the
/// given spelling is used, and identifiers are resolved against the keyword
/// table.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's spelling (optional)
/// * `$position` - Where the token starts
///
/// # Example
///
/// ```ignore
/// let plus = MK_TOKEN!(TokenKind::Plus, position);
/// let number = MK_TOKEN!(TokenKind::IntegerLiteral, "42".to_string(), position);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $position:expr) => {
        $crate::lexer::tokens::Token::fixed($kind, $position)
    };
    ($kind:expr, $value:expr, $position:expr) => {
        $crate::lexer::tokens::Token::spelled($kind, $value, $position)
    };
}
