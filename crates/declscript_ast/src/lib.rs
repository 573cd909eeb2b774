//! declscript_ast: AST node definitions for the declaration parser.
//!
//! Declares the token/node kind enum and the arena-backed node set that the
//! parser materializes from declaration source text.

pub mod node;
pub mod syntax_kind;

pub use node::{
    ArrayType, FundamentalType, InterfaceDeclaration, KeywordType, ModuleDeclaration, Node,
    NodeData, NodeId, PropertySignature, SourceFile, StringLiteralUnion, TypeLiteral,
    TypeReference,
};
pub use syntax_kind::SyntaxKind;
