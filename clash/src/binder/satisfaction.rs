//! Bookkeeping for fields still awaiting an explicit value.

/// Fields that have not yet been given a value by a token.
///
/// Starts with every bound field pending; each field leaves the set at most
/// once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct SatisfactionSet {
    pending: Vec<bool>,
}

impl SatisfactionSet {
    pub(super) fn new(fields: usize) -> Self {
        Self {
            pending: vec![true; fields],
        }
    }

    /// Marks `position` satisfied, returning `false` if it already was.
    pub(super) fn satisfy(&mut self, position: usize) -> bool {
        self.pending
            .get_mut(position)
            .is_some_and(|slot| std::mem::replace(slot, false))
    }

    pub(super) fn is_pending(&self, position: usize) -> bool {
        self.pending.get(position).copied().unwrap_or(false)
    }
}
