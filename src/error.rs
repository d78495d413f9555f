//! Error kinds surfaced by the crate.

use crate::core::Word;

/// Counterexample-processing strategies a [`crate::learner::mealy::MealyLearner`]
/// can be constructed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CexStrategy {
    /// Rivest–Schapire binary search, adds exactly one suffix per counterexample.
    RivestSchapire,
    /// Shahbaz–Groz suffix-closed addition, may add many suffixes per counterexample.
    ShahbazGroz,
}

/// Errors produced while simulating, learning, or persisting a transducer.
#[derive(Debug, thiserror::Error)]
pub enum LearnerError {
    /// No arc at the current state matches the remaining input. Surfaced to
    /// the caller from [`crate::transducer::Transducer::consume`]; caught and
    /// treated as a skip signal inside lookahead detection, since it means
    /// the access string the detection pass derived does not actually
    /// reach a real state.
    #[error("invalid input: no arc matches remaining input {remaining:?} at state {state}")]
    InvalidInput {
        /// The state the simulation got stuck at.
        state: usize,
        /// The unconsumed tail of the input word.
        remaining: Word,
    },

    /// The learner was asked to use an unknown counterexample-processing
    /// strategy. Fatal, surfaced immediately at construction.
    #[error("unsupported counterexample processing strategy: {0}")]
    UnsupportedStrategy(String),

    /// The text-format loader encountered a line it could not parse.
    #[error("malformed transducer line {line_number}: {reason}")]
    MalformedExternalData {
        /// 1-based line number of the offending line.
        line_number: usize,
        /// Human-readable reason the line was rejected.
        reason: String,
    },

    /// Hypothesis construction was attempted on a table that `is_closed`
    /// had not (yet) reported closed, or an equivalence class was missing
    /// for a row the hypothesis needed. This is a logic error in the outer
    /// loop: the current operation aborts so the caller can re-close the
    /// table and retry.
    #[error("observation table is not closed at row {0:?}")]
    ClosednessViolation(Word),
}
