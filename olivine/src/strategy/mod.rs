//! Scoring strategies.
//!
//! A strategy ranks the live entries of the working set and picks the next
//! triple to place. The engine only ever invokes [`ReorderStrategy::choose_next`],
//! so swapping the default variable-counting heuristic for, say, a
//! statistics-weighted selectivity estimator touches nothing but the strategy
//! registration.
//!
//! Concrete strategies are registered in [`StrategyImpl`]; which one is
//! active is a configuration concern of the surrounding engine.

mod var_count;
pub use var_count::*;

use std::fmt::{Debug, Formatter};

use enum_dispatch::enum_dispatch;
use strum_macros::AsRefStr;

use crate::scope::VarScope;
use crate::working::WorkingSet;

/// Picks the next triple to place during a reorder pass.
#[enum_dispatch(StrategyImpl)]
pub trait ReorderStrategy {
    /// Index of the most preferable live entry, or `None` if and only if no
    /// live entries remain. Returning `None` while entries remain is treated
    /// by the engine as a fatal invariant violation.
    fn choose_next(&self, working: &WorkingSet, scope: &VarScope) -> Option<usize>;
}

#[enum_dispatch]
#[derive(Clone, AsRefStr)]
pub enum StrategyImpl {
    VarCountStrategy,
    StaticVarCountStrategy,
}

impl Debug for StrategyImpl {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.as_ref())
    }
}
