//! # Analysis Module
//!
//! The in-memory heart of the scanner: resolving callee expressions to
//! canonical dotted names and walking parsed trees to collect violations.
//! Everything here is a pure function over borrowed data; no I/O, no
//! shared mutable state.
//!
//! ## Submodules
//!
//! - [`resolver`] - Canonical dotted-name resolution for callee chains
//! - [`visitor`] - Depth-first call-expression traversal

pub mod resolver;
pub mod visitor;

pub use resolver::resolve;
pub use visitor::collect_violations;
