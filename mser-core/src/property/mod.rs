//! Property-based tests for component-tree construction.
//!
//! Checks every construction strategy against a naive threshold-and-label
//! oracle at all 256 levels, verifies the structural invariants of the
//! produced trees, and compares the strategies with each other on a
//! numbering-independent canonical form.

mod equivalence;
mod oracle;
mod strategies;
mod structural;
mod types;
