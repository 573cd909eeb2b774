//! AST node definitions for the declaration parser.
//!
//! Nodes live in a per-file arena owned by [`SourceFile`]: every node created
//! while parsing a file is an entry in that file's node table, addressed by
//! [`NodeId`] handles, and all of them are freed together when the file is
//! dropped. Parent links are plain handles, never a second owner.

use crate::syntax_kind::SyntaxKind;
use declscript_core::text::TextRange;

/// A handle to a node in a [`SourceFile`]'s arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Common data shared by all AST nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeData {
    /// The kind of this node.
    pub kind: SyntaxKind,
    /// Source position range.
    pub range: TextRange,
    /// The syntactic parent, set when the node is attached to its container.
    /// `None` only for nodes directly under the file root.
    pub parent: Option<NodeId>,
}

impl NodeData {
    pub fn new(kind: SyntaxKind, pos: u32, end: u32) -> Self {
        Self {
            kind,
            range: TextRange::new(pos, end),
            parent: None,
        }
    }
}

/// The four fundamental types of the declaration language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FundamentalType {
    Any,
    Boolean,
    Number,
    String,
}

impl FundamentalType {
    /// The keyword text of this type.
    pub fn text(self) -> &'static str {
        match self {
            FundamentalType::Any => "any",
            FundamentalType::Boolean => "boolean",
            FundamentalType::Number => "number",
            FundamentalType::String => "string",
        }
    }

    /// Map a type-keyword token kind to its fundamental type.
    pub fn from_kind(kind: SyntaxKind) -> Option<FundamentalType> {
        match kind {
            SyntaxKind::AnyKeyword => Some(FundamentalType::Any),
            SyntaxKind::BooleanKeyword => Some(FundamentalType::Boolean),
            SyntaxKind::NumberKeyword => Some(FundamentalType::Number),
            SyntaxKind::StringKeyword => Some(FundamentalType::String),
            _ => None,
        }
    }
}

/// An ambient module declaration: `module Name { ... }`.
#[derive(Debug, Clone, PartialEq)]
pub struct ModuleDeclaration {
    pub data: NodeData,
    pub name: String,
    pub is_export: bool,
    /// Nested exported declarations (modules and interfaces), in source order.
    pub declarations: Vec<NodeId>,
}

/// An interface declaration: `interface Name extends Base { ... }`.
#[derive(Debug, Clone, PartialEq)]
pub struct InterfaceDeclaration {
    pub data: NodeData,
    pub name: String,
    pub is_export: bool,
    /// The `extends` clause, as an unresolved [`TypeReference`] node.
    pub base: Option<NodeId>,
    /// The object type literal forming the interface body.
    pub definition: NodeId,
}

/// An object type literal: `{ member; member; ... }`.
///
/// Members are kept in declaration order. Index signatures and other unnamed
/// members are not representable; the parser rejects them.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeLiteral {
    pub data: NodeData,
    pub members: Vec<NodeId>,
}

/// A named object member: `name?: Type[];`.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertySignature {
    pub data: NodeData,
    pub name: String,
    pub is_optional: bool,
    pub type_node: NodeId,
}

/// A fundamental type in type position: `any`, `boolean`, `number`, `string`.
#[derive(Debug, Clone, PartialEq)]
pub struct KeywordType {
    pub data: NodeData,
    pub keyword: FundamentalType,
}

/// A reference to an interface by name.
///
/// The name is stored as text and never resolved here; linking against the
/// declaration it names is a downstream concern.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeReference {
    pub data: NodeData,
    pub name: String,
}

/// An array type wrapping a single element type: `T[]`.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayType {
    pub data: NodeData,
    pub element: NodeId,
}

/// A union of string literals: `'a' | 'b' | 'c'`.
///
/// Semantically a closed, ordered set of string constants.
#[derive(Debug, Clone, PartialEq)]
pub struct StringLiteralUnion {
    pub data: NodeData,
    pub values: Vec<String>,
}

/// A node in the declaration AST.
///
/// The variant set is closed; the parser and any future emitter can match
/// exhaustively.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    ModuleDeclaration(ModuleDeclaration),
    InterfaceDeclaration(InterfaceDeclaration),
    TypeLiteral(TypeLiteral),
    PropertySignature(PropertySignature),
    KeywordType(KeywordType),
    TypeReference(TypeReference),
    ArrayType(ArrayType),
    StringLiteralUnion(StringLiteralUnion),
}

impl Node {
    /// The common node data.
    pub fn data(&self) -> &NodeData {
        match self {
            Node::ModuleDeclaration(n) => &n.data,
            Node::InterfaceDeclaration(n) => &n.data,
            Node::TypeLiteral(n) => &n.data,
            Node::PropertySignature(n) => &n.data,
            Node::KeywordType(n) => &n.data,
            Node::TypeReference(n) => &n.data,
            Node::ArrayType(n) => &n.data,
            Node::StringLiteralUnion(n) => &n.data,
        }
    }

    fn data_mut(&mut self) -> &mut NodeData {
        match self {
            Node::ModuleDeclaration(n) => &mut n.data,
            Node::InterfaceDeclaration(n) => &mut n.data,
            Node::TypeLiteral(n) => &mut n.data,
            Node::PropertySignature(n) => &mut n.data,
            Node::KeywordType(n) => &mut n.data,
            Node::TypeReference(n) => &mut n.data,
            Node::ArrayType(n) => &mut n.data,
            Node::StringLiteralUnion(n) => &mut n.data,
        }
    }

    /// The kind of this node.
    pub fn kind(&self) -> SyntaxKind {
        self.data().kind
    }

    pub fn as_module(&self) -> Option<&ModuleDeclaration> {
        match self {
            Node::ModuleDeclaration(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_interface(&self) -> Option<&InterfaceDeclaration> {
        match self {
            Node::InterfaceDeclaration(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_type_literal(&self) -> Option<&TypeLiteral> {
        match self {
            Node::TypeLiteral(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_property(&self) -> Option<&PropertySignature> {
        match self {
            Node::PropertySignature(n) => Some(n),
            _ => None,
        }
    }
}

/// The root of a parsed declaration file, and the owning arena for every node
/// created while parsing it.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceFile {
    /// The file this AST was parsed from.
    pub file_name: String,
    /// Whether the file opened with a `"use strict";` prologue.
    pub is_strict: bool,
    /// Top-level declarations (modules and interfaces), in source order.
    pub statements: Vec<NodeId>,
    /// The node arena. Nodes are appended during parsing and never removed.
    nodes: Vec<Node>,
}

impl SourceFile {
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            is_strict: false,
            statements: Vec::new(),
            nodes: Vec::new(),
        }
    }

    /// Add a node to the arena and return its handle.
    pub fn alloc(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Look up a node by handle.
    #[inline]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    /// Record `parent` as the syntactic parent of `child`.
    pub fn set_parent(&mut self, child: NodeId, parent: NodeId) {
        self.nodes[child.index()].data_mut().parent = Some(parent);
    }

    /// The number of nodes in the arena.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Iterate over all nodes in allocation order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (NodeId(i as u32), n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alloc_and_lookup() {
        let mut file = SourceFile::new("test.d.ts");
        let ty = file.alloc(Node::KeywordType(KeywordType {
            data: NodeData::new(SyntaxKind::KeywordType, 0, 6),
            keyword: FundamentalType::Number,
        }));
        let member = file.alloc(Node::PropertySignature(PropertySignature {
            data: NodeData::new(SyntaxKind::PropertySignature, 0, 7),
            name: "x".to_string(),
            is_optional: false,
            type_node: ty,
        }));
        file.set_parent(ty, member);

        assert_eq!(file.node_count(), 2);
        assert_eq!(file.node(ty).data().parent, Some(member));
        assert_eq!(file.node(member).data().parent, None);
        let prop = file.node(member).as_property().unwrap();
        assert_eq!(prop.name, "x");
        assert_eq!(prop.type_node, ty);
    }

    #[test]
    fn test_fundamental_type_text() {
        assert_eq!(FundamentalType::Any.text(), "any");
        assert_eq!(
            FundamentalType::from_kind(SyntaxKind::BooleanKeyword),
            Some(FundamentalType::Boolean)
        );
        assert_eq!(FundamentalType::from_kind(SyntaxKind::Identifier), None);
    }
}
