use log::{debug, trace};

use crate::error::{OlivineError, OlivineResult};
use crate::pattern::BasicPattern;
use crate::scope::VarScope;
use crate::strategy::{ReorderStrategy, StrategyImpl, VarCountStrategy};
use crate::working::WorkingSet;

/// The greedy reorder engine.
///
/// One [`ReorderEngine::reorder`] call consumes its own working set and
/// scope and runs to completion without suspension points, so concurrent
/// calls on independent inputs need no locking. The selection loop is O(n²)
/// in the number of triples, which is bounded by typical query sizes.
pub struct ReorderEngine {
    strategy: StrategyImpl,
}

impl Default for ReorderEngine {
    fn default() -> Self {
        Self::new(VarCountStrategy::new().into())
    }
}

impl ReorderEngine {
    pub fn new(strategy: StrategyImpl) -> Self {
        Self { strategy }
    }

    pub fn strategy(&self) -> &StrategyImpl {
        &self.strategy
    }

    /// Turn an unordered basic pattern into an execution order. The output
    /// is a permutation of the input.
    pub fn reorder(&self, input: BasicPattern) -> OlivineResult<BasicPattern> {
        reorder_with(&self.strategy, input)
    }
}

/// Drive one greedy pass with an arbitrary strategy implementation.
///
/// Repeatedly asks the strategy for the next working-set index, consumes
/// that slot, appends its triple to the output and binds the triple's
/// variables into the scope. The strategy answering `None` while live
/// entries remain breaks the selection invariant and aborts the pass.
pub fn reorder_with<S: ReorderStrategy>(
    strategy: &S,
    input: BasicPattern,
) -> OlivineResult<BasicPattern> {
    let mut working = WorkingSet::new(input);
    let mut output = BasicPattern::with_capacity(working.len());
    let mut scope = VarScope::new();

    while !working.is_exhausted() {
        let idx = strategy.choose_next(&working, &scope).ok_or_else(|| {
            OlivineError::InvariantViolation(format!(
                "strategy returned no candidate with {} triples remaining",
                working.remaining()
            ))
        })?;
        let triple = working.take(idx)?;
        trace!(
            "placed triple {} at step {}, {} vars in scope",
            triple,
            output.len(),
            scope.len()
        );
        scope.bind_triple(&triple);
        output.push(triple);
    }

    debug!("reordered {} triple patterns: {}", output.len(), output);
    Ok(output)
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::collections::HashMap;

    use super::*;
    use crate::pattern::TriplePattern;
    use crate::strategy::StaticVarCountStrategy;
    use crate::term::Term;

    fn triple(s: &str, p: &str, o: &str) -> TriplePattern {
        let term = |t: &str| {
            if let Some(name) = t.strip_prefix('?') {
                Term::var(name)
            } else {
                Term::bound(t)
            }
        };
        TriplePattern::new(term(s), term(p), term(o))
    }

    /// Counts invocations while delegating to the default strategy.
    struct CountingStrategy {
        inner: VarCountStrategy,
        calls: Cell<usize>,
    }

    impl CountingStrategy {
        fn new() -> Self {
            Self {
                inner: VarCountStrategy::new(),
                calls: Cell::new(0),
            }
        }
    }

    impl ReorderStrategy for CountingStrategy {
        fn choose_next(&self, working: &WorkingSet, scope: &VarScope) -> Option<usize> {
            self.calls.set(self.calls.get() + 1);
            self.inner.choose_next(working, scope)
        }
    }

    /// Defective on purpose: never picks anything.
    struct NeverStrategy {}

    impl ReorderStrategy for NeverStrategy {
        fn choose_next(&self, _working: &WorkingSet, _scope: &VarScope) -> Option<usize> {
            None
        }
    }

    fn multiset(pattern: &BasicPattern) -> HashMap<TriplePattern, usize> {
        let mut counts = HashMap::new();
        for t in pattern {
            *counts.entry(t.clone()).or_insert(0) += 1;
        }
        counts
    }

    #[test]
    fn test_most_selective_first() {
        let input = BasicPattern::from(vec![
            triple("?x", "rdf:type", "?y"),
            triple("?x", "foaf:name", "\"Alice\""),
            triple("?z", "?p", "?o"),
        ]);
        let output = ReorderEngine::default().reorder(input).unwrap();

        let expected = BasicPattern::from(vec![
            triple("?x", "foaf:name", "\"Alice\""),
            triple("?x", "rdf:type", "?y"),
            triple("?z", "?p", "?o"),
        ]);
        assert_eq!(expected, output);
    }

    #[test]
    fn test_fully_bound_keeps_input_order() {
        let input = BasicPattern::from(vec![
            triple("s1", "p1", "o1"),
            triple("s2", "p2", "o2"),
            triple("s3", "p3", "o3"),
        ]);
        let output = ReorderEngine::default().reorder(input.clone()).unwrap();
        assert_eq!(input, output);
    }

    #[test]
    fn test_single_triple_invokes_strategy_once() {
        let input = BasicPattern::from(vec![triple("?x", "p", "o")]);
        let strategy = CountingStrategy::new();
        let output = reorder_with(&strategy, input.clone()).unwrap();
        assert_eq!(input, output);
        assert_eq!(1, strategy.calls.get());
    }

    #[test]
    fn test_empty_input_never_invokes_strategy() {
        let strategy = CountingStrategy::new();
        let output = reorder_with(&strategy, BasicPattern::new()).unwrap();
        assert!(output.is_empty());
        assert_eq!(0, strategy.calls.get());
    }

    #[test]
    fn test_defective_strategy_is_fatal() {
        let input = BasicPattern::from(vec![triple("?x", "p", "o")]);
        let err = reorder_with(&NeverStrategy {}, input).unwrap_err();
        assert!(matches!(err, OlivineError::InvariantViolation(_)));
    }

    #[test]
    fn test_output_is_permutation_of_input() {
        let input = BasicPattern::from(vec![
            triple("?a", "?b", "?c"),
            triple("?a", "p", "?c"),
            triple("?a", "p", "?c"),
            triple("s", "p", "o"),
            triple("?a", "p", "o"),
        ]);
        let output = ReorderEngine::default().reorder(input.clone()).unwrap();
        assert_eq!(input.len(), output.len());
        assert_eq!(multiset(&input), multiset(&output));
    }

    #[test]
    fn test_deterministic() {
        let input = BasicPattern::from(vec![
            triple("?a", "p", "?b"),
            triple("?c", "q", "?d"),
            triple("?a", "r", "o"),
        ]);
        let engine = ReorderEngine::default();
        let first = engine.reorder(input.clone()).unwrap();
        let second = engine.reorder(input).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_chooses_minimum_unbound_at_each_step() {
        // At every step the placed triple must score no worse than any
        // triple placed after it, evaluated against the scope of that step.
        let input = BasicPattern::from(vec![
            triple("?s", "?p", "?o"),
            triple("?s", "rdf:type", "ex:Doc"),
            triple("?o", "ex:author", "?a"),
            triple("?a", "foaf:name", "\"Alice\""),
        ]);
        let output = ReorderEngine::default().reorder(input).unwrap();

        let triples: Vec<TriplePattern> = output.into_iter().collect();
        let mut scope = VarScope::new();
        for i in 0..triples.len() {
            let placed = triples[i].vars().filter(|v| !scope.contains(v)).count();
            for later in &triples[i + 1..] {
                let other = later.vars().filter(|v| !scope.contains(v)).count();
                assert!(
                    placed <= other,
                    "step {}: placed {} scores {} but {} scores {}",
                    i,
                    triples[i],
                    placed,
                    later,
                    other
                );
            }
            scope.bind_triple(&triples[i]);
        }
    }

    #[test]
    fn test_scope_aware_beats_static_on_join_chains() {
        // After ?a is bound by the first triple, the scope-aware strategy
        // prefers the triple joining on ?a; the static one sticks with input
        // order among equal static counts.
        let input = BasicPattern::from(vec![
            triple("?a", "ex:p", "\"v\""),
            triple("?c", "ex:q", "?d"),
            triple("?a", "ex:r", "?b"),
        ]);

        let scoped = ReorderEngine::default().reorder(input.clone()).unwrap();
        let expected = BasicPattern::from(vec![
            triple("?a", "ex:p", "\"v\""),
            triple("?a", "ex:r", "?b"),
            triple("?c", "ex:q", "?d"),
        ]);
        assert_eq!(expected, scoped);

        let static_engine = ReorderEngine::new(StaticVarCountStrategy::new().into());
        let static_order = static_engine.reorder(input.clone()).unwrap();
        assert_eq!(input, static_order);
    }
}
