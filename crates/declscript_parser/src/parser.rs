//! The declaration parser implementation.
//!
//! A recursive descent parser with one method per grammar rule. Each rule
//! consumes exactly the tokens belonging to its construct and leaves the
//! current token positioned one past the construct's end.
//!
//! The grammar:
//!
//! ```text
//! File          := StrictPrologue? TopDecl*
//! StrictPrologue:= STRING("use strict") ';'          // first statement only
//! TopDecl       := 'export' (ModuleDecl | InterfaceDecl)
//! ModuleDecl    := 'module' IDENT '{' ('export' (ModuleDecl|InterfaceDecl))* '}'
//! InterfaceDecl := 'interface' IDENT ('extends' IDENT)? ObjectLit
//! ObjectLit     := '{' Member* '}'
//! Member        := IDENT '?'? ':' TypeRef ('[' ']')? ';'
//! TypeRef       := 'string' | 'boolean' | 'number' | 'any'
//!                | IDENT | ObjectLit | STRING ('|' STRING)*
//! ```

use crate::error::{ParseError, ParseErrorKind};
use declscript_ast::node::*;
use declscript_ast::syntax_kind::SyntaxKind;
use declscript_diagnostics::{messages, Diagnostic, DiagnosticMessage};
use declscript_scanner::{Scanner, Token};

type ParseResult<T> = Result<T, ParseError>;

/// The parser produces a [`SourceFile`] AST from declaration source text.
pub struct Parser {
    scanner: Scanner,
    file_name: String,
    /// The current token, held by value.
    token: Token,
    /// End position of the most recently consumed token.
    prev_end: u32,
}

impl Parser {
    pub fn new(file_name: &str, source_text: &str) -> Self {
        let mut scanner = Scanner::new(source_text);
        scanner.scan();
        let token = scanner.token_info();
        Self {
            scanner,
            file_name: file_name.to_string(),
            token,
            prev_end: 0,
        }
    }

    /// Parse the whole file.
    ///
    /// On success the returned [`SourceFile`] owns every node created during
    /// the parse. On failure no AST is returned; nodes allocated before the
    /// error are dropped with the discarded file.
    pub fn parse_source_file(mut self) -> Result<SourceFile, ParseError> {
        let mut file = SourceFile::new(self.file_name.clone());

        // The "use strict" prologue is recognized only as the very first
        // statement; a string literal anywhere else at file scope is an error.
        if self.token.kind == SyntaxKind::StringLiteral && self.token.text == "use strict" {
            self.next_token();
            self.expect(SyntaxKind::SemicolonToken)?;
            file.is_strict = true;
        }

        while self.token.kind != SyntaxKind::EndOfFileToken {
            match self.token.kind {
                SyntaxKind::ExportKeyword => {
                    let decl = self.parse_export_declaration(&mut file)?;
                    file.statements.push(decl);
                }
                SyntaxKind::Unknown => return Err(self.lex_error()),
                _ => {
                    return Err(self.unexpected(&messages::DECLARATION_OR_STATEMENT_EXPECTED));
                }
            }
        }

        Ok(file)
    }

    // ========================================================================
    // Token management
    // ========================================================================

    fn next_token(&mut self) -> SyntaxKind {
        self.prev_end = self.token.end;
        let kind = self.scanner.scan();
        self.token = self.scanner.token_info();
        kind
    }

    /// Consume a token of the given kind or fail.
    fn expect(&mut self, kind: SyntaxKind) -> ParseResult<()> {
        if self.token.kind == kind {
            self.next_token();
            return Ok(());
        }
        if self.token.kind == SyntaxKind::Unknown {
            return Err(self.lex_error());
        }
        let expected = kind
            .punctuation_text()
            .or_else(|| kind.keyword_text())
            .unwrap_or("token");
        Err(ParseError::syntax(Diagnostic::with_location(
            self.file_name.clone(),
            self.token.span(),
            &messages::_0_EXPECTED,
            &[expected, self.token.display_text()],
        )))
    }

    /// Consume an identifier and return its text, or fail.
    fn expect_identifier(&mut self) -> ParseResult<String> {
        if self.token.kind != SyntaxKind::Identifier {
            return Err(self.unexpected(&messages::IDENTIFIER_EXPECTED));
        }
        let name = std::mem::take(&mut self.token.text);
        self.next_token();
        Ok(name)
    }

    /// An error at the current token. Lexical failures take precedence: if
    /// the current token is the scanner's error token, the scanner's own
    /// diagnostic becomes the primary error.
    fn unexpected(&mut self, message: &DiagnosticMessage) -> ParseError {
        if self.token.kind == SyntaxKind::Unknown {
            return self.lex_error();
        }
        ParseError::syntax(Diagnostic::with_location(
            self.file_name.clone(),
            self.token.span(),
            message,
            &[self.token.display_text()],
        ))
    }

    fn lex_error(&mut self) -> ParseError {
        let diagnostic = match self.scanner.diagnostics().last() {
            Some(diag) => diag.clone().in_file(self.file_name.clone()),
            None => Diagnostic::with_location(
                self.file_name.clone(),
                self.token.span(),
                &messages::UNEXPECTED_END_OF_TEXT,
                &[],
            ),
        };
        ParseError {
            kind: ParseErrorKind::Lex,
            diagnostic,
            notes: Vec::new(),
        }
    }

    // ========================================================================
    // Declarations
    // ========================================================================

    /// TopDecl := 'export' (ModuleDecl | InterfaceDecl)
    fn parse_export_declaration(&mut self, file: &mut SourceFile) -> ParseResult<NodeId> {
        let pos = self.token.pos;
        self.expect(SyntaxKind::ExportKeyword)?;
        match self.token.kind {
            SyntaxKind::ModuleKeyword => self.parse_module_declaration(file, pos),
            SyntaxKind::InterfaceKeyword => self.parse_interface_declaration(file, pos),
            SyntaxKind::Unknown => Err(self.lex_error()),
            _ => Err(self.unexpected(&messages::DECLARATION_EXPECTED)),
        }
    }

    /// ModuleDecl := 'module' IDENT '{' ('export' (ModuleDecl|InterfaceDecl))* '}'
    fn parse_module_declaration(&mut self, file: &mut SourceFile, pos: u32) -> ParseResult<NodeId> {
        self.expect(SyntaxKind::ModuleKeyword)?;
        let name = self.expect_identifier()?;

        let declarations = self
            .parse_module_body(file)
            .map_err(|e| e.while_parsing("module", &name))?;
        let end = self.prev_end;

        let id = file.alloc(Node::ModuleDeclaration(ModuleDeclaration {
            data: NodeData::new(SyntaxKind::ModuleDeclaration, pos, end),
            name,
            is_export: true,
            declarations: declarations.clone(),
        }));
        for child in declarations {
            file.set_parent(child, id);
        }
        Ok(id)
    }

    fn parse_module_body(&mut self, file: &mut SourceFile) -> ParseResult<Vec<NodeId>> {
        self.expect(SyntaxKind::OpenBraceToken)?;
        let mut declarations = Vec::new();
        while self.token.kind != SyntaxKind::CloseBraceToken {
            match self.token.kind {
                SyntaxKind::ExportKeyword => {
                    declarations.push(self.parse_export_declaration(file)?);
                }
                SyntaxKind::Unknown => return Err(self.lex_error()),
                _ => return Err(self.unexpected(&messages::DECLARATION_EXPECTED)),
            }
        }
        self.next_token(); // consume the '}'
        Ok(declarations)
    }

    /// InterfaceDecl := 'interface' IDENT ('extends' IDENT)? ObjectLit
    fn parse_interface_declaration(
        &mut self,
        file: &mut SourceFile,
        pos: u32,
    ) -> ParseResult<NodeId> {
        self.expect(SyntaxKind::InterfaceKeyword)?;
        let name = self.expect_identifier()?;

        // Single inheritance only; the base name stays unresolved text.
        let base = if self.token.kind == SyntaxKind::ExtendsKeyword {
            self.next_token();
            if self.token.kind != SyntaxKind::Identifier {
                return Err(self
                    .unexpected(&messages::IDENTIFIER_EXPECTED)
                    .while_parsing("interface", &name));
            }
            let base_span = self.token.span();
            let base_name = std::mem::take(&mut self.token.text);
            self.next_token();
            Some(file.alloc(Node::TypeReference(TypeReference {
                data: NodeData::new(SyntaxKind::TypeReference, base_span.start, base_span.end()),
                name: base_name,
            })))
        } else {
            None
        };

        let definition = self
            .parse_type_literal(file)
            .map_err(|e| e.while_parsing("interface", &name))?;
        let end = self.prev_end;

        let id = file.alloc(Node::InterfaceDeclaration(InterfaceDeclaration {
            data: NodeData::new(SyntaxKind::InterfaceDeclaration, pos, end),
            name,
            is_export: true,
            base,
            definition,
        }));
        if let Some(base_id) = base {
            file.set_parent(base_id, id);
        }
        file.set_parent(definition, id);
        Ok(id)
    }

    // ========================================================================
    // Types
    // ========================================================================

    /// ObjectLit := '{' Member* '}'
    fn parse_type_literal(&mut self, file: &mut SourceFile) -> ParseResult<NodeId> {
        let pos = self.token.pos;
        self.expect(SyntaxKind::OpenBraceToken)?;

        let mut members = Vec::new();
        while self.token.kind != SyntaxKind::CloseBraceToken {
            match self.token.kind {
                // `module` is a keyword but also a valid member name.
                SyntaxKind::Identifier | SyntaxKind::ModuleKeyword => {
                    members.push(self.parse_property_signature(file)?);
                }
                SyntaxKind::Unknown => return Err(self.lex_error()),
                // Index signatures and other unnamed members are unsupported
                // and rejected here, as is everything else.
                _ => return Err(self.unexpected(&messages::PROPERTY_OR_SIGNATURE_EXPECTED)),
            }
        }
        let end = self.token.end;
        self.next_token(); // consume the '}'

        let id = file.alloc(Node::TypeLiteral(TypeLiteral {
            data: NodeData::new(SyntaxKind::TypeLiteral, pos, end),
            members: members.clone(),
        }));
        for member in members {
            file.set_parent(member, id);
        }
        Ok(id)
    }

    /// Member := IDENT '?'? ':' TypeRef ('[' ']')? ';'
    fn parse_property_signature(&mut self, file: &mut SourceFile) -> ParseResult<NodeId> {
        let pos = self.token.pos;
        let name = std::mem::take(&mut self.token.text);
        self.next_token();

        let is_optional = if self.token.kind == SyntaxKind::QuestionToken {
            self.next_token();
            true
        } else {
            false
        };

        self.expect(SyntaxKind::ColonToken)
            .map_err(|e| e.while_parsing("object member", &name))?;

        let mut type_node = self
            .parse_type_reference(file)
            .map_err(|e| e.while_parsing("object member", &name))?;

        // A single array suffix may follow any type reference.
        if self.token.kind == SyntaxKind::OpenBracketToken {
            let element_pos = file.node(type_node).data().range.pos;
            self.next_token();
            self.expect(SyntaxKind::CloseBracketToken)
                .map_err(|e| e.while_parsing("object member", &name))?;
            let array = file.alloc(Node::ArrayType(ArrayType {
                data: NodeData::new(SyntaxKind::ArrayType, element_pos, self.prev_end),
                element: type_node,
            }));
            file.set_parent(type_node, array);
            type_node = array;
        }

        self.expect(SyntaxKind::SemicolonToken)
            .map_err(|e| e.while_parsing("object member", &name))?;
        let end = self.prev_end;

        let id = file.alloc(Node::PropertySignature(PropertySignature {
            data: NodeData::new(SyntaxKind::PropertySignature, pos, end),
            name,
            is_optional,
            type_node,
        }));
        file.set_parent(type_node, id);
        Ok(id)
    }

    /// TypeRef := 'string' | 'boolean' | 'number' | 'any'
    ///          | IDENT | ObjectLit | STRING ('|' STRING)*
    fn parse_type_reference(&mut self, file: &mut SourceFile) -> ParseResult<NodeId> {
        let span = self.token.span();
        match self.token.kind {
            SyntaxKind::AnyKeyword
            | SyntaxKind::BooleanKeyword
            | SyntaxKind::NumberKeyword
            | SyntaxKind::StringKeyword => {
                let keyword = match self.token.kind {
                    SyntaxKind::AnyKeyword => FundamentalType::Any,
                    SyntaxKind::BooleanKeyword => FundamentalType::Boolean,
                    SyntaxKind::NumberKeyword => FundamentalType::Number,
                    _ => FundamentalType::String,
                };
                self.next_token();
                Ok(file.alloc(Node::KeywordType(KeywordType {
                    data: NodeData::new(SyntaxKind::KeywordType, span.start, span.end()),
                    keyword,
                })))
            }

            SyntaxKind::Identifier => {
                let name = std::mem::take(&mut self.token.text);
                self.next_token();
                Ok(file.alloc(Node::TypeReference(TypeReference {
                    data: NodeData::new(SyntaxKind::TypeReference, span.start, span.end()),
                    name,
                })))
            }

            SyntaxKind::OpenBraceToken => self.parse_type_literal(file),

            // A string literal starts a union of string constants.
            SyntaxKind::StringLiteral => {
                let mut values = vec![std::mem::take(&mut self.token.text)];
                let mut end = self.token.end;
                self.next_token();
                while self.token.kind == SyntaxKind::BarToken {
                    self.next_token();
                    if self.token.kind != SyntaxKind::StringLiteral {
                        return Err(self.unexpected(&messages::STRING_LITERAL_EXPECTED));
                    }
                    values.push(std::mem::take(&mut self.token.text));
                    end = self.token.end;
                    self.next_token();
                }
                Ok(file.alloc(Node::StringLiteralUnion(StringLiteralUnion {
                    data: NodeData::new(SyntaxKind::StringLiteralUnion, span.start, end),
                    values,
                })))
            }

            SyntaxKind::Unknown => Err(self.lex_error()),
            _ => Err(self.unexpected(&messages::TYPE_EXPECTED)),
        }
    }
}
