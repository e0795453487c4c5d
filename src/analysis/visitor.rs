//! # Call Expression Visitor
//!
//! Walks a parsed tree depth-first in pre-order and emits one
//! [`Violation`] per call whose resolved callee name is in the taxonomy.
//!
//! ## Traversal Contract
//!
//! - Every node is visited, not only call nodes, so dangerous calls
//!   nested inside argument lists, comprehensions, or decorators are
//!   found.
//! - Traversal never stops at a match: `eval(eval(x))` yields two
//!   violations.
//! - Pre-order visitation keeps the output non-decreasing by line number
//!   without a sort.

use crate::analysis::resolver::resolve;
use crate::parser::{CalleeExpr, SyntaxTree};
use crate::report::Violation;
use crate::taxonomy::DangerousFunctions;
use tree_sitter::Node;

/// Collects all dangerous-call violations from a parsed source unit.
///
/// # Arguments
///
/// * `tree` - The parsed syntax tree
/// * `unit_id` - Identifier recorded on each violation
/// * `taxonomy` - The dangerous-function set to match against
///
/// # Returns
///
/// Violations in depth-first pre-order, which is source order.
pub fn collect_violations(
    tree: &SyntaxTree,
    unit_id: &str,
    taxonomy: &DangerousFunctions,
) -> Vec<Violation> {
    let mut violations = Vec::new();
    walk(tree.root(), tree.source_bytes(), unit_id, taxonomy, &mut violations);
    violations
}

/// Recursive pre-order walk over every node in the tree.
fn walk(
    node: Node<'_>,
    source: &[u8],
    unit_id: &str,
    taxonomy: &DangerousFunctions,
    violations: &mut Vec<Violation>,
) {
    if node.kind() == "call" {
        check_call(node, source, unit_id, taxonomy, violations);
    }

    for i in 0..node.child_count() {
        if let Some(child) = node.child(i) {
            walk(child, source, unit_id, taxonomy, violations);
        }
    }
}

/// Checks a single call node against the taxonomy.
///
/// A call whose callee cannot be resolved contributes nothing; at most
/// one violation is produced per call node.
fn check_call(
    node: Node<'_>,
    source: &[u8],
    unit_id: &str,
    taxonomy: &DangerousFunctions,
    violations: &mut Vec<Violation>,
) {
    let func = match node.child_by_field_name("function") {
        Some(n) => n,
        None => return,
    };

    let callee = CalleeExpr::from_node(func, source);
    if let Some(name) = resolve(&callee) {
        if let Some(severity) = taxonomy.severity_of(&name) {
            let position = node.start_position();
            violations.push(Violation {
                unit_id: unit_id.to_string(),
                line: position.row as u32 + 1,
                column: position.column as u32,
                function_name: name,
                severity,
            });
        }
    }
}
