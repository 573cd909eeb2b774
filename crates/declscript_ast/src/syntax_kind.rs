//! SyntaxKind enum - all token and node kinds in the declaration AST.

/// The kind of a syntax token or node in the AST.
///
/// Token kinds come first, then keywords, then node kinds; the scanner only
/// ever produces values from the token and keyword sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u16)]
pub enum SyntaxKind {
    // ========================================================================
    // Tokens
    // ========================================================================
    /// Invalid input; also the scanner's state after a lexical error.
    Unknown = 0,
    EndOfFileToken = 1,

    // Literals
    StringLiteral = 2,

    // Punctuation
    OpenBraceToken = 3,
    CloseBraceToken = 4,
    OpenBracketToken = 5,
    CloseBracketToken = 6,
    SemicolonToken = 7,
    ColonToken = 8,
    QuestionToken = 9,
    BarToken = 10,

    // Identifiers and keywords
    Identifier = 11,
    ExportKeyword = 12,
    ModuleKeyword = 13,
    InterfaceKeyword = 14,
    ExtendsKeyword = 15,
    AnyKeyword = 16,
    BooleanKeyword = 17,
    NumberKeyword = 18,
    StringKeyword = 19,

    // ========================================================================
    // Nodes
    // ========================================================================
    SourceFile = 20,
    ModuleDeclaration = 21,
    InterfaceDeclaration = 22,
    TypeLiteral = 23,
    PropertySignature = 24,
    KeywordType = 25,
    TypeReference = 26,
    ArrayType = 27,
    StringLiteralUnion = 28,
}

impl SyntaxKind {
    /// Map identifier text to its keyword kind, if it is one.
    pub fn from_keyword(text: &str) -> Option<SyntaxKind> {
        match text {
            "export" => Some(SyntaxKind::ExportKeyword),
            "module" => Some(SyntaxKind::ModuleKeyword),
            "interface" => Some(SyntaxKind::InterfaceKeyword),
            "extends" => Some(SyntaxKind::ExtendsKeyword),
            "any" => Some(SyntaxKind::AnyKeyword),
            "boolean" => Some(SyntaxKind::BooleanKeyword),
            "number" => Some(SyntaxKind::NumberKeyword),
            "string" => Some(SyntaxKind::StringKeyword),
            _ => None,
        }
    }

    /// The source text of a keyword kind.
    pub fn keyword_text(self) -> Option<&'static str> {
        match self {
            SyntaxKind::ExportKeyword => Some("export"),
            SyntaxKind::ModuleKeyword => Some("module"),
            SyntaxKind::InterfaceKeyword => Some("interface"),
            SyntaxKind::ExtendsKeyword => Some("extends"),
            SyntaxKind::AnyKeyword => Some("any"),
            SyntaxKind::BooleanKeyword => Some("boolean"),
            SyntaxKind::NumberKeyword => Some("number"),
            SyntaxKind::StringKeyword => Some("string"),
            _ => None,
        }
    }

    /// The source text of a punctuation kind.
    pub fn punctuation_text(self) -> Option<&'static str> {
        match self {
            SyntaxKind::OpenBraceToken => Some("{"),
            SyntaxKind::CloseBraceToken => Some("}"),
            SyntaxKind::OpenBracketToken => Some("["),
            SyntaxKind::CloseBracketToken => Some("]"),
            SyntaxKind::SemicolonToken => Some(";"),
            SyntaxKind::ColonToken => Some(":"),
            SyntaxKind::QuestionToken => Some("?"),
            SyntaxKind::BarToken => Some("|"),
            _ => None,
        }
    }

    /// Whether this kind is a keyword token.
    pub fn is_keyword(self) -> bool {
        self.keyword_text().is_some()
    }

    /// Whether this kind is one of the fundamental type keywords.
    pub fn is_type_keyword(self) -> bool {
        matches!(
            self,
            SyntaxKind::AnyKeyword
                | SyntaxKind::BooleanKeyword
                | SyntaxKind::NumberKeyword
                | SyntaxKind::StringKeyword
        )
    }

    /// Whether a token of this kind can begin a type reference.
    pub fn is_type_start(self) -> bool {
        self.is_type_keyword()
            || matches!(
                self,
                SyntaxKind::Identifier | SyntaxKind::OpenBraceToken | SyntaxKind::StringLiteral
            )
    }
}
