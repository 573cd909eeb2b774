//! Character classification helpers used by the scanner.
//!
//! The declaration subset is ASCII-only: identifiers never contain characters
//! above 0x7F, and any such character outside a string literal is a lexical
//! error.

/// Check if a character is a line terminator.
#[inline]
pub fn is_line_break(ch: char) -> bool {
    ch == '\n' || ch == '\r'
}

/// Check if a character is whitespace (space, tab, vertical tab, form feed,
/// or a line break).
#[inline]
pub fn is_white_space(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\u{000B}' | '\u{000C}') || is_line_break(ch)
}

/// Check if a character can start an identifier.
#[inline]
pub fn is_identifier_start(ch: char) -> bool {
    ch.is_ascii_alphabetic()
}

/// Check if a character can be part of an identifier.
#[inline]
pub fn is_identifier_part(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}
