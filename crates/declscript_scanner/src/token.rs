//! Token values produced by the scanner.

use declscript_ast::syntax_kind::SyntaxKind;
use declscript_core::text::TextSpan;

/// A scanned token, returned by value.
///
/// Only identifier, keyword, and string tokens carry text; punctuators and
/// end-of-input are fully determined by their kind.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The kind of token.
    pub kind: SyntaxKind,
    /// Start position in the source text.
    pub pos: u32,
    /// End position in the source text (exclusive).
    pub end: u32,
    /// The text of the token (for identifiers, keywords, and string literals).
    pub text: String,
}

impl Token {
    pub fn new(kind: SyntaxKind, pos: u32, end: u32) -> Self {
        Self {
            kind,
            pos,
            end,
            text: String::new(),
        }
    }

    /// The source span of this token.
    pub fn span(&self) -> TextSpan {
        TextSpan::from_bounds(self.pos, self.end)
    }

    /// Human-readable text naming this token in diagnostics.
    pub fn display_text(&self) -> &str {
        match self.kind {
            SyntaxKind::EndOfFileToken => "end of file",
            SyntaxKind::Unknown => "invalid token",
            SyntaxKind::Identifier | SyntaxKind::StringLiteral => &self.text,
            kind => kind
                .punctuation_text()
                .or_else(|| kind.keyword_text())
                .unwrap_or("token"),
        }
    }
}
