//! The declaration scanner/lexer.
//!
//! Converts source text into a stream of tokens that the parser consumes.
//! The scanner keeps exactly one current token; there is no token buffer or
//! pushback. Scanning uses single-character lookahead.

use crate::char_codes::*;
use crate::token::Token;
use declscript_ast::syntax_kind::SyntaxKind;
use declscript_core::text::TextSpan;
use declscript_diagnostics::{messages, Diagnostic, DiagnosticCollection, DiagnosticMessage};

/// The scanner converts declaration source text into tokens.
pub struct Scanner {
    /// The source text being scanned.
    text: Vec<char>,
    /// Current position in the text.
    pos: usize,
    /// Start of the current token (after leading trivia).
    token_start: usize,
    /// The current token kind.
    token: SyntaxKind,
    /// The text of the current token.
    token_value: String,
    /// Set once a lexical error has been recorded. A failed scanner is spent:
    /// further `scan()` calls return `Unknown` without consuming input.
    failed: bool,
    /// Accumulated diagnostics.
    diagnostics: DiagnosticCollection,
}

impl Scanner {
    /// Create a new scanner for the given source text.
    pub fn new(text: &str) -> Self {
        Self {
            text: text.chars().collect(),
            pos: 0,
            token_start: 0,
            token: SyntaxKind::Unknown,
            token_value: String::new(),
            failed: false,
            diagnostics: DiagnosticCollection::new(),
        }
    }

    /// Get the current token kind.
    #[inline]
    pub fn token(&self) -> SyntaxKind {
        self.token
    }

    /// Get the current token's text value.
    #[inline]
    pub fn token_value(&self) -> &str {
        &self.token_value
    }

    /// Get the start position of the current token (after trivia).
    #[inline]
    pub fn token_start(&self) -> usize {
        self.token_start
    }

    /// Get the current position (end of current token).
    #[inline]
    pub fn token_end(&self) -> usize {
        self.pos
    }

    /// Get the current token by value.
    pub fn token_info(&self) -> Token {
        Token {
            kind: self.token,
            pos: self.token_start as u32,
            end: self.pos as u32,
            text: self.token_value.clone(),
        }
    }

    /// Whether the scanner can still produce tokens: the current token is
    /// neither end-of-input nor an error. This is the loop condition the
    /// parser uses to keep consuming declarations.
    #[inline]
    pub fn is_live(&self) -> bool {
        !self.failed && self.token != SyntaxKind::EndOfFileToken
    }

    /// Get the accumulated diagnostics.
    pub fn diagnostics(&self) -> &DiagnosticCollection {
        &self.diagnostics
    }

    /// Take the accumulated diagnostics, leaving an empty collection.
    pub fn take_diagnostics(&mut self) -> DiagnosticCollection {
        std::mem::take(&mut self.diagnostics)
    }

    // ========================================================================
    // Core scanning
    // ========================================================================

    /// Look at the character at the current position without advancing.
    #[inline]
    fn current_char(&self) -> Option<char> {
        self.text.get(self.pos).copied()
    }

    /// Look at the character at position pos + offset.
    #[inline]
    fn char_at(&self, offset: usize) -> Option<char> {
        self.text.get(self.pos + offset).copied()
    }

    /// Whether we've reached the end of the text.
    #[inline]
    fn is_eof(&self) -> bool {
        self.pos >= self.text.len()
    }

    /// Record a lexical error. The scanner is spent afterwards.
    fn error(&mut self, span: TextSpan, message: &DiagnosticMessage, args: &[&str]) {
        self.diagnostics.add(Diagnostic::with_span(span, message, args));
        self.failed = true;
    }

    /// Skip whitespace and comments. Returns false if a fatal trivia error
    /// (unterminated block comment) was recorded.
    fn skip_trivia(&mut self) -> bool {
        loop {
            let Some(ch) = self.current_char() else {
                return true;
            };
            match ch {
                c if is_white_space(c) => {
                    self.pos += 1;
                }
                '/' if self.char_at(1) == Some('/') => {
                    // Line comment, inclusive of the terminating newline
                    self.pos += 2;
                    while let Some(c) = self.current_char() {
                        self.pos += 1;
                        if is_line_break(c) {
                            break;
                        }
                    }
                }
                '/' if self.char_at(1) == Some('*') => {
                    // Block comment, not nested
                    let comment_start = self.pos;
                    self.pos += 2;
                    loop {
                        if self.is_eof() {
                            self.error(
                                TextSpan::from_bounds(comment_start as u32, self.pos as u32),
                                &messages::ASTERISK_SLASH_EXPECTED,
                                &[],
                            );
                            return false;
                        }
                        if self.current_char() == Some('*') && self.char_at(1) == Some('/') {
                            self.pos += 2;
                            break;
                        }
                        self.pos += 1;
                    }
                }
                _ => return true,
            }
        }
    }

    /// Scan the next token and return its kind.
    ///
    /// End-of-input and error tokens are terminal: scanning a spent scanner
    /// returns the same kind and consumes nothing.
    pub fn scan(&mut self) -> SyntaxKind {
        if self.failed || self.token == SyntaxKind::EndOfFileToken {
            return self.token;
        }
        self.token_value.clear();

        if !self.skip_trivia() {
            self.token_start = self.pos;
            self.token = SyntaxKind::Unknown;
            return self.token;
        }
        self.token_start = self.pos;

        if self.is_eof() {
            self.token = SyntaxKind::EndOfFileToken;
            return self.token;
        }

        let ch = self.text[self.pos];
        self.token = match ch {
            '{' => { self.pos += 1; SyntaxKind::OpenBraceToken }
            '}' => { self.pos += 1; SyntaxKind::CloseBraceToken }
            '[' => { self.pos += 1; SyntaxKind::OpenBracketToken }
            ']' => { self.pos += 1; SyntaxKind::CloseBracketToken }
            ';' => { self.pos += 1; SyntaxKind::SemicolonToken }
            ':' => { self.pos += 1; SyntaxKind::ColonToken }
            '?' => { self.pos += 1; SyntaxKind::QuestionToken }
            '|' => { self.pos += 1; SyntaxKind::BarToken }

            '\'' | '"' => self.scan_string_literal(ch),

            _ if is_identifier_start(ch) => self.scan_identifier(),

            _ => {
                self.pos += 1;
                self.error(
                    TextSpan::from_bounds(self.token_start as u32, self.pos as u32),
                    &messages::INVALID_CHARACTER,
                    &[&ch.to_string()],
                );
                SyntaxKind::Unknown
            }
        };

        self.token
    }

    // ========================================================================
    // Token-specific scanning methods
    // ========================================================================

    fn scan_string_literal(&mut self, quote: char) -> SyntaxKind {
        self.pos += 1; // skip opening quote
        let mut result = String::new();
        loop {
            let Some(ch) = self.current_char() else {
                self.error(
                    TextSpan::from_bounds(self.token_start as u32, self.pos as u32),
                    &messages::UNTERMINATED_STRING_LITERAL,
                    &[],
                );
                return SyntaxKind::Unknown;
            };
            self.pos += 1;
            if ch == quote {
                break;
            }
            // Contents are taken verbatim; there is no escape processing.
            result.push(ch);
        }
        self.token_value = result;
        SyntaxKind::StringLiteral
    }

    fn scan_identifier(&mut self) -> SyntaxKind {
        let start = self.pos;
        self.pos += 1;
        while !self.is_eof() && is_identifier_part(self.text[self.pos]) {
            self.pos += 1;
        }
        let text: String = self.text[start..self.pos].iter().collect();

        // Check against the fixed keyword table
        let kind = SyntaxKind::from_keyword(&text).unwrap_or(SyntaxKind::Identifier);
        self.token_value = text;
        kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_punctuators() {
        let mut scanner = Scanner::new("{ } [ ] ; : ? |");
        assert_eq!(scanner.scan(), SyntaxKind::OpenBraceToken);
        assert_eq!(scanner.scan(), SyntaxKind::CloseBraceToken);
        assert_eq!(scanner.scan(), SyntaxKind::OpenBracketToken);
        assert_eq!(scanner.scan(), SyntaxKind::CloseBracketToken);
        assert_eq!(scanner.scan(), SyntaxKind::SemicolonToken);
        assert_eq!(scanner.scan(), SyntaxKind::ColonToken);
        assert_eq!(scanner.scan(), SyntaxKind::QuestionToken);
        assert_eq!(scanner.scan(), SyntaxKind::BarToken);
        assert_eq!(scanner.scan(), SyntaxKind::EndOfFileToken);
    }

    #[test]
    fn test_scan_keywords_and_identifiers() {
        let mut scanner = Scanner::new("export interface Point extends module any boolean number string foo_2");
        assert_eq!(scanner.scan(), SyntaxKind::ExportKeyword);
        assert_eq!(scanner.scan(), SyntaxKind::InterfaceKeyword);
        assert_eq!(scanner.scan(), SyntaxKind::Identifier);
        assert_eq!(scanner.token_value(), "Point");
        assert_eq!(scanner.scan(), SyntaxKind::ExtendsKeyword);
        assert_eq!(scanner.scan(), SyntaxKind::ModuleKeyword);
        assert_eq!(scanner.token_value(), "module");
        assert_eq!(scanner.scan(), SyntaxKind::AnyKeyword);
        assert_eq!(scanner.scan(), SyntaxKind::BooleanKeyword);
        assert_eq!(scanner.scan(), SyntaxKind::NumberKeyword);
        assert_eq!(scanner.scan(), SyntaxKind::StringKeyword);
        assert_eq!(scanner.scan(), SyntaxKind::Identifier);
        assert_eq!(scanner.token_value(), "foo_2");
        assert_eq!(scanner.scan(), SyntaxKind::EndOfFileToken);
    }

    #[test]
    fn test_scan_string_literal() {
        let mut scanner = Scanner::new(r#""hello" 'world'"#);
        assert_eq!(scanner.scan(), SyntaxKind::StringLiteral);
        assert_eq!(scanner.token_value(), "hello");
        assert_eq!(scanner.scan(), SyntaxKind::StringLiteral);
        assert_eq!(scanner.token_value(), "world");
    }

    #[test]
    fn test_string_contents_are_verbatim() {
        // Backslashes pass through untouched
        let mut scanner = Scanner::new(r#"'a\nb'"#);
        assert_eq!(scanner.scan(), SyntaxKind::StringLiteral);
        assert_eq!(scanner.token_value(), "a\\nb");
    }

    #[test]
    fn test_scan_comments() {
        let mut scanner = Scanner::new("// comment\nexport /* block\ncomment */ module");
        assert_eq!(scanner.scan(), SyntaxKind::ExportKeyword);
        assert_eq!(scanner.scan(), SyntaxKind::ModuleKeyword);
        assert_eq!(scanner.scan(), SyntaxKind::EndOfFileToken);
    }

    #[test]
    fn test_unterminated_string_is_fatal() {
        let mut scanner = Scanner::new("'never closed");
        assert_eq!(scanner.scan(), SyntaxKind::Unknown);
        assert!(!scanner.is_live());
        assert_eq!(scanner.diagnostics().last().unwrap().code, 1002);
        // Spent scanner stays spent
        assert_eq!(scanner.scan(), SyntaxKind::Unknown);
    }

    #[test]
    fn test_unterminated_comment_is_fatal() {
        let mut scanner = Scanner::new("/* never closed");
        assert_eq!(scanner.scan(), SyntaxKind::Unknown);
        assert_eq!(scanner.diagnostics().last().unwrap().code, 1010);
    }

    #[test]
    fn test_invalid_character_is_fatal() {
        let mut scanner = Scanner::new("interface @");
        assert_eq!(scanner.scan(), SyntaxKind::InterfaceKeyword);
        assert_eq!(scanner.scan(), SyntaxKind::Unknown);
        assert!(!scanner.is_live());
        let diag = scanner.diagnostics().last().unwrap();
        assert_eq!(diag.code, 1127);
        assert!(diag.message_text.contains('@'));
    }

    #[test]
    fn test_non_ascii_is_fatal() {
        let mut scanner = Scanner::new("caf\u{00E9}");
        assert_eq!(scanner.scan(), SyntaxKind::Identifier);
        assert_eq!(scanner.token_value(), "caf");
        assert_eq!(scanner.scan(), SyntaxKind::Unknown);
        assert_eq!(scanner.diagnostics().last().unwrap().code, 1127);
    }

    #[test]
    fn test_slash_without_comment_is_fatal() {
        let mut scanner = Scanner::new("/ oops");
        assert_eq!(scanner.scan(), SyntaxKind::Unknown);
        assert_eq!(scanner.diagnostics().last().unwrap().code, 1127);
    }

    #[test]
    fn test_eof_is_terminal() {
        let mut scanner = Scanner::new("  ");
        assert_eq!(scanner.scan(), SyntaxKind::EndOfFileToken);
        assert!(!scanner.is_live());
        assert_eq!(scanner.scan(), SyntaxKind::EndOfFileToken);
    }

    #[test]
    fn test_token_info_spans() {
        let mut scanner = Scanner::new("  name");
        scanner.scan();
        let token = scanner.token_info();
        assert_eq!(token.kind, SyntaxKind::Identifier);
        assert_eq!(token.pos, 2);
        assert_eq!(token.end, 6);
        assert_eq!(token.text, "name");
    }
}
