//! # Callee Name Resolution
//!
//! Reduces a [`CalleeExpr`] to the canonical dotted name it denotes, or
//! `None` when the callee is not a plain name or attribute chain. The
//! resolver is a pure fold over an acyclic expression tree: recursion
//! depth is bounded by the chain's nesting depth, and resolving the same
//! expression twice always yields the same result.
//!
//! An unresolvable callee is not an error. Calls through subscripts,
//! call results, or other dynamic shapes are silently excluded from
//! matching, so they can never produce a false positive.

use crate::parser::CalleeExpr;

/// Resolves a callee expression to its canonical dotted name.
///
/// # Arguments
///
/// * `expr` - The callee sub-expression of a call node
///
/// # Returns
///
/// - `Name("eval")` resolves to `Some("eval")`
/// - `Attribute(Name("os"), "system")` resolves to `Some("os.system")`
/// - Deeper chains resolve recursively, e.g. `Some("a.b.c")`
/// - Any chain rooted in an unresolvable base resolves to `None`
pub fn resolve(expr: &CalleeExpr) -> Option<String> {
    match expr {
        CalleeExpr::Name(name) => Some(name.clone()),
        CalleeExpr::Attribute { base, attr } => {
            resolve(base).map(|prefix| format!("{}.{}", prefix, attr))
        }
        CalleeExpr::Other => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attr(base: CalleeExpr, attr: &str) -> CalleeExpr {
        CalleeExpr::Attribute {
            base: Box::new(base),
            attr: attr.to_string(),
        }
    }

    #[test]
    fn test_resolve_simple_name() {
        assert_eq!(
            resolve(&CalleeExpr::Name("eval".to_string())),
            Some("eval".to_string())
        );
    }

    #[test]
    fn test_resolve_single_attribute() {
        let expr = attr(CalleeExpr::Name("os".to_string()), "system");
        assert_eq!(resolve(&expr), Some("os.system".to_string()));
    }

    #[test]
    fn test_resolve_nested_chain() {
        let expr = attr(
            attr(CalleeExpr::Name("a".to_string()), "b"),
            "c",
        );
        assert_eq!(resolve(&expr), Some("a.b.c".to_string()));
    }

    #[test]
    fn test_resolve_deep_chain() {
        // pickle.loads-shaped chain of depth 8, dot-joined name matches.
        let mut expr = CalleeExpr::Name("m0".to_string());
        let mut expected = "m0".to_string();
        for i in 1..8 {
            let segment = format!("m{}", i);
            expr = attr(expr, &segment);
            expected.push('.');
            expected.push_str(&segment);
        }
        assert_eq!(resolve(&expr), Some(expected));
    }

    #[test]
    fn test_resolve_other_is_none() {
        assert_eq!(resolve(&CalleeExpr::Other), None);
    }

    #[test]
    fn test_unresolved_base_propagates() {
        // handlers[0].run(...) - the subscript base poisons the chain.
        let expr = attr(CalleeExpr::Other, "run");
        assert_eq!(resolve(&expr), None);
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let expr = attr(CalleeExpr::Name("pickle".to_string()), "loads");
        assert_eq!(resolve(&expr), resolve(&expr));
    }
}
