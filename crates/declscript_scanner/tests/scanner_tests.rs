//! Scanner integration tests.
//!
//! Verifies token streams over realistic declaration sources.

use declscript_ast::syntax_kind::SyntaxKind;
use declscript_scanner::Scanner;

/// Helper: scan all tokens until end-of-input or a lexical error.
fn scan_all(source: &str) -> Vec<SyntaxKind> {
    let mut scanner = Scanner::new(source);
    let mut kinds = Vec::new();
    loop {
        let kind = scanner.scan();
        kinds.push(kind);
        if !scanner.is_live() {
            break;
        }
    }
    kinds
}

#[test]
fn test_scan_interface_declaration() {
    let kinds = scan_all("export interface Point { x: number; y: number; }");
    assert_eq!(
        kinds,
        vec![
            SyntaxKind::ExportKeyword,
            SyntaxKind::InterfaceKeyword,
            SyntaxKind::Identifier,
            SyntaxKind::OpenBraceToken,
            SyntaxKind::Identifier,
            SyntaxKind::ColonToken,
            SyntaxKind::NumberKeyword,
            SyntaxKind::SemicolonToken,
            SyntaxKind::Identifier,
            SyntaxKind::ColonToken,
            SyntaxKind::NumberKeyword,
            SyntaxKind::SemicolonToken,
            SyntaxKind::CloseBraceToken,
            SyntaxKind::EndOfFileToken,
        ]
    );
}

#[test]
fn test_scan_optional_member_and_array() {
    let kinds = scan_all("tags?: string[];");
    assert_eq!(
        kinds,
        vec![
            SyntaxKind::Identifier,
            SyntaxKind::QuestionToken,
            SyntaxKind::ColonToken,
            SyntaxKind::StringKeyword,
            SyntaxKind::OpenBracketToken,
            SyntaxKind::CloseBracketToken,
            SyntaxKind::SemicolonToken,
            SyntaxKind::EndOfFileToken,
        ]
    );
}

#[test]
fn test_scan_string_union() {
    let mut scanner = Scanner::new("'light' | 'dark'");
    assert_eq!(scanner.scan(), SyntaxKind::StringLiteral);
    assert_eq!(scanner.token_value(), "light");
    assert_eq!(scanner.scan(), SyntaxKind::BarToken);
    assert_eq!(scanner.scan(), SyntaxKind::StringLiteral);
    assert_eq!(scanner.token_value(), "dark");
    assert_eq!(scanner.scan(), SyntaxKind::EndOfFileToken);
}

#[test]
fn test_scan_use_strict_prologue() {
    let mut scanner = Scanner::new("\"use strict\";\nexport module M { }");
    assert_eq!(scanner.scan(), SyntaxKind::StringLiteral);
    assert_eq!(scanner.token_value(), "use strict");
    assert_eq!(scanner.scan(), SyntaxKind::SemicolonToken);
    assert_eq!(scanner.scan(), SyntaxKind::ExportKeyword);
    assert_eq!(scanner.scan(), SyntaxKind::ModuleKeyword);
}

#[test]
fn test_comments_between_every_token() {
    let source = "/*a*/export/*b*/interface/*c*/I// trailing\n{}";
    let kinds = scan_all(source);
    assert_eq!(
        kinds,
        vec![
            SyntaxKind::ExportKeyword,
            SyntaxKind::InterfaceKeyword,
            SyntaxKind::Identifier,
            SyntaxKind::OpenBraceToken,
            SyntaxKind::CloseBraceToken,
            SyntaxKind::EndOfFileToken,
        ]
    );
}

#[test]
fn test_whitespace_varieties() {
    let kinds = scan_all(" \t\u{000B}\u{000C}\r\nmodule");
    assert_eq!(kinds, vec![SyntaxKind::ModuleKeyword, SyntaxKind::EndOfFileToken]);
}

#[test]
fn test_line_comment_at_eof_without_newline() {
    let kinds = scan_all("module // trailing comment");
    assert_eq!(kinds, vec![SyntaxKind::ModuleKeyword, SyntaxKind::EndOfFileToken]);
}

#[test]
fn test_error_stops_the_stream() {
    let kinds = scan_all("interface # more");
    assert_eq!(kinds, vec![SyntaxKind::InterfaceKeyword, SyntaxKind::Unknown]);
}

#[test]
fn test_block_comment_with_stars_inside() {
    let kinds = scan_all("/* ** not done * yet **/ module");
    assert_eq!(kinds, vec![SyntaxKind::ModuleKeyword, SyntaxKind::EndOfFileToken]);
}

#[test]
fn test_empty_string_literal() {
    let mut scanner = Scanner::new("''");
    assert_eq!(scanner.scan(), SyntaxKind::StringLiteral);
    assert_eq!(scanner.token_value(), "");
}

#[test]
fn test_keywords_carry_their_text() {
    let mut scanner = Scanner::new("module");
    scanner.scan();
    assert_eq!(scanner.token_value(), "module");
    assert_eq!(scanner.token_info().display_text(), "module");
}
