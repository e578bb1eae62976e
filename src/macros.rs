//! Utility macros for the tokenizer.
//!
//! - `MK_TOKEN!` - Creates a Token instance

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$ttype` - The TokenType
/// * `$value` - The token's matched text
/// * `$position` - The token's starting position, `None` for the end marker
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenType::Num, "42".to_string(), Some(Position::new(1, 1)));
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($ttype:expr, $value:expr, $position:expr) => {
        $crate::lexer::tokens::Token {
            ttype: $ttype,
            value: $value,
            position: $position,
        }
    };
}
