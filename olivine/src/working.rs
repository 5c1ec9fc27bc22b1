use smallvec::SmallVec;

use crate::error::{OlivineError, OlivineResult};
use crate::pattern::{BasicPattern, TriplePattern};

/// Index-stable working set consumed during one reorder pass.
///
/// Slots keep their original index for the whole pass, so a strategy's
/// returned index always refers to the same triple regardless of how many
/// entries have been consumed before it. Consumed slots read back as `None`
/// rather than shifting their neighbours; strategies skip them via
/// [`WorkingSet::live`].
#[derive(Debug)]
pub struct WorkingSet {
    slots: Vec<TriplePattern>,
    // Typical BGPs are tens of triples, so the bitmap stays inline.
    consumed: SmallVec<[bool; 16]>,
    remaining: usize,
}

impl WorkingSet {
    pub(crate) fn new(pattern: BasicPattern) -> Self {
        let slots: Vec<TriplePattern> = pattern.into_iter().collect();
        let remaining = slots.len();
        Self {
            consumed: SmallVec::from_elem(false, remaining),
            slots,
            remaining,
        }
    }

    /// Total number of slots, consumed or not.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of live (not yet consumed) entries.
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining == 0
    }

    /// The triple at `idx`, or `None` if the slot is consumed or out of
    /// range.
    pub fn get(&self, idx: usize) -> Option<&TriplePattern> {
        if *self.consumed.get(idx)? {
            return None;
        }
        self.slots.get(idx)
    }

    /// Live entries with their stable indices, in slot order.
    pub fn live(&self) -> impl Iterator<Item = (usize, &TriplePattern)> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(idx, _)| !self.consumed[*idx])
    }

    /// Consume the slot at `idx` and hand its triple out. Consuming a dead
    /// or out-of-range slot means the strategy broke its index contract.
    pub(crate) fn take(&mut self, idx: usize) -> OlivineResult<TriplePattern> {
        match self.get(idx) {
            Some(triple) => {
                let triple = triple.clone();
                self.consumed[idx] = true;
                self.remaining -= 1;
                Ok(triple)
            }
            None => Err(OlivineError::InvariantViolation(format!(
                "strategy selected dead slot {} of {}",
                idx,
                self.slots.len()
            ))),
        }
    }
}
