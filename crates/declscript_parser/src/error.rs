//! The parser's structured error type.

use declscript_diagnostics::Diagnostic;
use thiserror::Error;

/// The two classes of fatal parse failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// The scanner hit unscannable input (unterminated string or comment,
    /// invalid character).
    Lex,
    /// A well-formed token appeared where the grammar does not allow it.
    Syntax,
}

/// A fatal parse failure.
///
/// Carries the innermost diagnostic plus the context trail accumulated while
/// unwinding: each grammar rule that wrapped the failing sub-parse appends a
/// "while parsing X" note, so the trail reads innermost-first. Rendering is
/// left to the caller of the parse entry point.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{diagnostic}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    /// The innermost diagnostic describing the failure.
    pub diagnostic: Diagnostic,
    /// Context notes added by unwinding callers, innermost first.
    pub notes: Vec<String>,
}

impl ParseError {
    /// A lexical failure, wrapping the scanner's diagnostic.
    pub fn lex(diagnostic: Diagnostic) -> Self {
        Self {
            kind: ParseErrorKind::Lex,
            diagnostic,
            notes: Vec::new(),
        }
    }

    /// A syntax failure at the current token.
    pub fn syntax(diagnostic: Diagnostic) -> Self {
        Self {
            kind: ParseErrorKind::Syntax,
            diagnostic,
            notes: Vec::new(),
        }
    }

    /// Append a context note naming the construct being parsed.
    pub fn while_parsing(mut self, construct: &str, name: &str) -> Self {
        self.notes.push(format!("while parsing {} '{}'", construct, name));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use declscript_diagnostics::messages;

    #[test]
    fn test_note_trail_is_innermost_first() {
        let err = ParseError::syntax(Diagnostic::new(&messages::_0_EXPECTED, &[";", "}"]))
            .while_parsing("object member", "x")
            .while_parsing("interface", "Point")
            .while_parsing("module", "Geometry");
        assert_eq!(
            err.notes,
            vec![
                "while parsing object member 'x'",
                "while parsing interface 'Point'",
                "while parsing module 'Geometry'",
            ]
        );
        assert_eq!(err.kind, ParseErrorKind::Syntax);
        assert_eq!(err.to_string(), "error TS1005: ';' expected, but found '}'.");
    }
}
