use std::collections::HashSet;

use crate::pattern::TriplePattern;
use crate::term::Var;

/// The set of variables bound by triples already placed in the output order.
///
/// The scope only accumulates during one reorder run; a variable bound by a
/// placed triple is never unbound again.
#[derive(Clone, Debug, Default)]
pub struct VarScope {
    vars: HashSet<Var>,
}

impl VarScope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, var: &Var) -> bool {
        self.vars.contains(var)
    }

    /// Add every variable of a newly placed triple to the scope.
    pub fn bind_triple(&mut self, triple: &TriplePattern) {
        for var in triple.vars() {
            self.vars.insert(var.clone());
        }
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}
