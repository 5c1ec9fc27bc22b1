use crate::pattern::TriplePattern;
use crate::scope::VarScope;
use crate::strategy::ReorderStrategy;
use crate::working::WorkingSet;

/// Scope-aware variable counting, the default strategy.
///
/// A candidate scores by how many of its three positions are variables not
/// yet bound by earlier-placed triples (0-3, lower is more selective). A
/// variable already in scope is constrained by the join and no longer counts
/// as free, which is what makes the order improve as triples are placed.
#[derive(Clone, Copy, Default)]
pub struct VarCountStrategy {}

impl VarCountStrategy {
    pub fn new() -> Self {
        Self {}
    }
}

impl ReorderStrategy for VarCountStrategy {
    fn choose_next(&self, working: &WorkingSet, scope: &VarScope) -> Option<usize> {
        choose_min(working, |triple| unbound_var_count(triple, scope))
    }
}

/// Static variable counting: scores a candidate by its own variable count
/// alone, ignoring which variables the scope already binds. Kept as an
/// explicitly named alternative for compatibility testing; prefer
/// [`VarCountStrategy`].
#[derive(Clone, Copy, Default)]
pub struct StaticVarCountStrategy {}

impl StaticVarCountStrategy {
    pub fn new() -> Self {
        Self {}
    }
}

impl ReorderStrategy for StaticVarCountStrategy {
    fn choose_next(&self, working: &WorkingSet, _scope: &VarScope) -> Option<usize> {
        choose_min(working, static_var_count)
    }
}

/// Scan the live entries tracking the true minimum score. Ties keep the
/// earliest candidate, so selection is stable over the working set's slot
/// order.
fn choose_min<F>(working: &WorkingSet, score: F) -> Option<usize>
where
    F: Fn(&TriplePattern) -> u32,
{
    let mut best: Option<(usize, u32)> = None;
    for (idx, triple) in working.live() {
        let x = score(triple);
        match best {
            Some((_, min)) if x >= min => {}
            _ => best = Some((idx, x)),
        }
    }
    best.map(|(idx, _)| idx)
}

fn unbound_var_count(triple: &TriplePattern, scope: &VarScope) -> u32 {
    triple.vars().filter(|var| !scope.contains(var)).count() as u32
}

fn static_var_count(triple: &TriplePattern) -> u32 {
    triple.terms().into_iter().filter(|t| t.is_variable()).count() as u32
}
