//! ## Background
//!
//! A SPARQL basic graph pattern (BGP) is an unordered conjunction of triple
//! patterns, and join evaluation processes them in some linear order. The
//! order matters a great deal in practice: placing highly selective patterns
//! (few free variables) first keeps intermediate result sets small, while a
//! poor order can explode them by orders of magnitude. [1] discusses
//! selectivity-driven BGP optimization in depth; the same idea underlies
//! classic join ordering in relational optimizers [2].
//!
//! This crate implements the reordering step only. It accepts an unordered
//! [`pattern::BasicPattern`], runs a greedy single-pass selection loop, and
//! returns the same triples in execution order. The ranking is delegated to a
//! pluggable scoring strategy, so a statistics-driven selectivity estimator
//! can replace the default variable-counting heuristic without touching the
//! engine. Query evaluation, statistics collection and pattern parsing live
//! elsewhere.
//!
//! ## Design
//!
//! * [`term`] Terms and variables occupying triple positions.
//! * [`pattern`] Triple patterns and basic graph patterns.
//! * [`scope`] The set of variables bound by already-placed triples.
//! * [`working`] Index-stable working set consumed during one reorder pass.
//! * [`strategy`] Scoring strategy trait and concrete strategies.
//! * [`reorder`] The greedy reorder engine.
//!
//! ## Reference
//!
//! 1. Stocker, M., Seaborne, A., Bernstein, A., Kiefer, C. and Reynolds, D.,
//! 2008. SPARQL basic graph pattern optimization using selectivity
//! estimation. In Proceedings of the 17th international conference on World
//! Wide Web (pp. 595-604).
//! 2. Selinger, P. Griffiths, et al. "Access path selection in a relational
//! database management system." Readings in Artificial Intelligence and
//! Databases. Morgan Kaufmann, 1989. 511-522.

pub mod error;
pub mod pattern;
pub mod reorder;
pub mod scope;
pub mod strategy;
pub mod term;
pub mod working;
