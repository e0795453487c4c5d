//! # Python Grammar Adapter
//!
//! Wires the tree-sitter Python grammar into the scanner and converts
//! parse failures into [`SyntaxDiagnostic`] values. tree-sitter never
//! aborts on malformed input; it produces a tree containing error and
//! missing nodes instead, so "did this unit parse" is answered by
//! inspecting the tree for the first such node.

use super::{SyntaxDiagnostic, SyntaxTree};
use tree_sitter::{Node, Parser};

/// Parses Python source text into a syntax tree.
///
/// # Arguments
///
/// * `source` - Raw Python source text
/// * `unit_id` - Identifier for the source unit, used in log output only
///
/// # Returns
///
/// `Ok(SyntaxTree)` when the unit parses cleanly, or `Err(SyntaxDiagnostic)`
/// carrying the line of the first syntax error. A diagnostic is a per-unit
/// value, never a fatal condition.
pub fn parse(source: &str, unit_id: &str) -> Result<SyntaxTree, SyntaxDiagnostic> {
    let mut parser = Parser::new();
    parser
        .set_language(&tree_sitter_python::LANGUAGE.into())
        .map_err(|e| SyntaxDiagnostic {
            line: 0,
            message: format!("failed to load Python grammar: {}", e),
        })?;

    let tree = parser.parse(source, None).ok_or_else(|| SyntaxDiagnostic {
        line: 0,
        message: "parser produced no tree".to_string(),
    })?;

    let root = tree.root_node();
    if root.has_error() {
        let diag = first_error(root).unwrap_or(SyntaxDiagnostic {
            line: root.start_position().row as u32 + 1,
            message: "invalid syntax".to_string(),
        });
        log::debug!("syntax error in {}: {}", unit_id, diag);
        return Err(diag);
    }

    Ok(SyntaxTree::new(tree, source.to_string()))
}

/// Finds the first error or missing node in depth-first pre-order.
///
/// Only descends into subtrees that actually contain an error, so the
/// search skips well-formed siblings.
fn first_error(node: Node<'_>) -> Option<SyntaxDiagnostic> {
    if node.is_missing() {
        return Some(SyntaxDiagnostic {
            line: node.start_position().row as u32 + 1,
            message: format!("missing `{}`", node.kind()),
        });
    }
    if node.is_error() {
        return Some(SyntaxDiagnostic {
            line: node.start_position().row as u32 + 1,
            message: "invalid syntax".to_string(),
        });
    }

    for i in 0..node.child_count() {
        if let Some(child) = node.child(i) {
            if child.has_error() {
                if let Some(diag) = first_error(child) {
                    return Some(diag);
                }
            }
        }
    }

    None
}
