use std::collections::HashMap;
use std::ops::{Deref, DerefMut};

use crate::grammar::Alternative;

/// How many times each alternative is open on the current derivation path.
///
/// Alternatives are compared by value, so two rules that share an identical
/// alternative (the empty one, say) also share its count. A count that drops
/// back to zero is removed, which makes "never chosen" and "chosen and fully
/// expanded" the same state.
#[derive(Debug, Default)]
pub struct UsageCounts<'g> {
    counts: HashMap<&'g Alternative, u32>,
}

impl<'g> UsageCounts<'g> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self, alternative: &Alternative) -> u32 {
        self.counts.get(alternative).copied().unwrap_or(0)
    }

    /// True when no alternative is open.
    pub fn is_idle(&self) -> bool {
        self.counts.is_empty()
    }

    pub(crate) fn increment(&mut self, alternative: &'g Alternative) {
        *self.counts.entry(alternative).or_insert(0) += 1;
    }

    pub(crate) fn decrement(&mut self, alternative: &'g Alternative) {
        if let Some(count) = self.counts.get_mut(alternative) {
            *count -= 1;
            if *count == 0 {
                self.counts.remove(alternative);
            }
        }
    }

    /// Marks `alternative` as open until the returned guard is dropped.
    /// The guard derefs to the counts so it can be passed further down.
    pub(crate) fn open(&mut self, alternative: &'g Alternative) -> Open<'_, 'g> {
        self.increment(alternative);
        Open {
            counts: self,
            alternative
        }
    }
}

pub(crate) struct Open<'c, 'g> {
    counts: &'c mut UsageCounts<'g>,
    alternative: &'g Alternative,
}

impl<'g> Deref for Open<'_, 'g> {
    type Target = UsageCounts<'g>;

    fn deref(&self) -> &Self::Target {
        self.counts
    }
}

impl<'g> DerefMut for Open<'_, 'g> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.counts
    }
}

impl Drop for Open<'_, '_> {
    fn drop(&mut self) {
        self.counts.decrement(self.alternative);
    }
}
