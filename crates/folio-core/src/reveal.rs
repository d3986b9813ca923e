//! Reveal-on-scroll bookkeeping.
//!
//! Targets are tagged with the `reveal` class up front. Each intersection
//! batch promotes newly visible targets to `active`. Promotion is one-way, and
//! a target that is already active is left untouched.

use crate::constants::{ACTIVE_CLASS, REVEAL_CLASS, STATS_TRIGGER_CLASS};
use crate::ports::{ClassList, IntersectionEntry};
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    Revealed,
    /// The statistics block became visible; counters should start.
    RevealedStats,
}

/// What one intersection batch changed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RevealBatch {
    pub outcomes: SmallVec<[RevealOutcome; 4]>,
}

impl RevealBatch {
    pub fn revealed(&self) -> usize {
        self.outcomes.len()
    }

    pub fn stats_triggered(&self) -> bool {
        self.outcomes.contains(&RevealOutcome::RevealedStats)
    }
}

#[derive(Debug, Default)]
pub struct Revealer {
    revealed_total: usize,
}

impl Revealer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tag every target with the `reveal` class.
    pub fn tag<T: ClassList>(targets: &[T]) {
        for t in targets {
            t.add_class(REVEAL_CLASS);
        }
    }

    /// Number of targets promoted so far.
    pub fn revealed_total(&self) -> usize {
        self.revealed_total
    }

    pub fn on_entries<T, I>(&mut self, entries: I) -> RevealBatch
    where
        T: ClassList,
        I: IntoIterator<Item = IntersectionEntry<T>>,
    {
        let mut batch = RevealBatch::default();
        for entry in entries {
            if !entry.is_intersecting || entry.target.has_class(ACTIVE_CLASS) {
                continue;
            }
            entry.target.add_class(ACTIVE_CLASS);
            let outcome = if entry.target.has_class(STATS_TRIGGER_CLASS) {
                RevealOutcome::RevealedStats
            } else {
                RevealOutcome::Revealed
            };
            batch.outcomes.push(outcome);
        }
        self.revealed_total += batch.revealed();
        if batch.revealed() > 0 {
            log::debug!(
                "[reveal] revealed={} total={}",
                batch.revealed(),
                self.revealed_total
            );
        }
        batch
    }
}
