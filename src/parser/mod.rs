//! # Parser Module
//!
//! This module is the adapter between raw Python source text and the
//! tree-sitter syntax tree the rest of the scanner consumes. It owns the
//! grammar setup, translates parse failures into structured diagnostics,
//! and models the callee sub-expression of a call node as a small tagged
//! union that the name resolver can fold over.
//!
//! ## Key Types
//!
//! - [`SyntaxTree`] - A parsed source unit, tree plus owned source text
//! - [`SyntaxDiagnostic`] - Structured parse failure (line + message)
//! - [`CalleeExpr`] - Tagged union over the shapes a callee can take

mod python_parser;

pub use python_parser::parse;

use serde::{Deserialize, Serialize};
use tree_sitter::{Node, Tree};

/// A parsed source unit.
///
/// Owns both the tree-sitter tree and the source text it was parsed from,
/// since tree-sitter nodes only carry byte offsets and need the original
/// bytes to recover identifier text. Immutable for the duration of a scan;
/// the visitor borrows nodes out of it and never mutates.
#[derive(Debug)]
pub struct SyntaxTree {
    tree: Tree,
    source: String,
}

impl SyntaxTree {
    pub(crate) fn new(tree: Tree, source: String) -> Self {
        Self { tree, source }
    }

    /// Returns the root node of the tree.
    pub fn root(&self) -> Node<'_> {
        self.tree.root_node()
    }

    /// Returns the source text as bytes for node text extraction.
    pub fn source_bytes(&self) -> &[u8] {
        self.source.as_bytes()
    }
}

/// Structured report of a source unit that failed to parse.
///
/// A diagnostic is recoverable: one malformed file is reported and the
/// remainder of a multi-unit scan continues untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyntaxDiagnostic {
    /// Line number (1-indexed) of the first offending construct.
    pub line: u32,

    /// Human-readable description of the failure.
    pub message: String,
}

impl std::fmt::Display for SyntaxDiagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}: {}", self.line, self.message)
    }
}

/// The callee sub-expression of a call node.
///
/// Models the three shapes the scanner distinguishes: a bare name
/// (`eval(...)`), a dotted attribute chain of arbitrary depth
/// (`pickle.loads(...)`, `a.b.c(...)`), and everything else. A callee
/// that is neither a name nor an attribute chain (a subscript, a call
/// result, a lambda) collapses to [`CalleeExpr::Other`] and is excluded
/// from matching rather than treated as a fault.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalleeExpr {
    /// A simple identifier callee, e.g. `eval`.
    Name(String),

    /// An attribute access callee, e.g. `os.system` or `a.b.c`.
    Attribute {
        /// The expression left of the final dot.
        base: Box<CalleeExpr>,

        /// The attribute name right of the final dot.
        attr: String,
    },

    /// Any callee shape that cannot be canonicalized.
    Other,
}

impl CalleeExpr {
    /// Builds a callee expression from the `function` child of a call node.
    ///
    /// Recurses through nested `attribute` nodes so chains of any depth
    /// are represented structurally. Shapes the grammar can produce but
    /// the scanner cannot name (subscripts, parenthesized expressions,
    /// nested calls) become [`CalleeExpr::Other`].
    pub fn from_node(node: Node<'_>, source: &[u8]) -> Self {
        match node.kind() {
            "identifier" => match node.utf8_text(source) {
                Ok(text) => CalleeExpr::Name(text.to_string()),
                Err(_) => CalleeExpr::Other,
            },
            "attribute" => {
                let object = match node.child_by_field_name("object") {
                    Some(n) => n,
                    None => return CalleeExpr::Other,
                };
                let attr = match node
                    .child_by_field_name("attribute")
                    .and_then(|n| n.utf8_text(source).ok())
                {
                    Some(text) => text.to_string(),
                    None => return CalleeExpr::Other,
                };

                CalleeExpr::Attribute {
                    base: Box::new(CalleeExpr::from_node(object, source)),
                    attr,
                }
            }
            _ => CalleeExpr::Other,
        }
    }
}
