//! declscript_parser: Recursive-descent parser for the declaration subset.
//!
//! Consumes tokens from the scanner and builds an arena-backed AST rooted at
//! a [`declscript_ast::SourceFile`]. Parsing is recovery-free: the first
//! lexical or syntax error aborts the whole file and is returned as a
//! structured [`ParseError`]; no partial AST is ever produced.

mod error;
mod parser;

pub use error::{ParseError, ParseErrorKind};
pub use parser::Parser;
