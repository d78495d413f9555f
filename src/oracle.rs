//! The minimum-adequate-teacher interface: the two external sources of
//! information about the target the learner is never allowed to peek
//! behind.

use crate::core::{Symbol, Word};
use crate::transducer::Transducer;

/// Either the equivalence oracle accepts a hypothesis, or it rejects it
/// with a counterexample word on which the hypothesis and the target
/// disagree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EquivalenceResult {
    /// The hypothesis matches the target as far as the oracle can tell.
    Accepted,
    /// The hypothesis disagrees with the target on this input.
    Rejected(Word),
}

/// A membership oracle: given an input word, returns the target's output.
/// Must be a pure, deterministic function — the engine issues one query
/// per table-fill operation and caches nothing of its own; a caller that
/// needs caching wraps the oracle externally.
pub trait MembershipOracle {
    /// Returns the target's output on `word`.
    fn membership_query(&self, word: &[Symbol]) -> Word;
}

/// An equivalence oracle: given a candidate transducer, either accepts it
/// or returns a counterexample input on which it disagrees with the
/// target. The learner trusts that any returned counterexample is
/// genuinely disputed.
pub trait EquivalenceOracle {
    /// Checks `hypothesis` against the target.
    fn equivalence_query(&mut self, hypothesis: &Transducer) -> EquivalenceResult;
}
