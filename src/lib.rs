//! Active learning of a deterministic finite-state transducer model of an
//! unknown black-box string-to-string function, through a membership
//! oracle and an equivalence oracle.
//!
//! This crate implements only the learning core: an L*-style observation
//! table, a Mealy-machine learner, a bounded-lookahead transducer learner,
//! two counterexample-processing strategies (Rivest–Schapire and
//! Shahbaz–Groz), and the transducer data type used both as hypothesis
//! and final output. CLI drivers, concrete sanitizer oracles, and a
//! pretty-printer that compiles a transducer into a rule program are
//! intentionally left to callers.
//!
//! ```
//! use lstar_transducer::{
//!     EquivalenceOracle, EquivalenceResult, MealyLearner, MembershipOracle, Symbol, Word,
//! };
//!
//! struct Identity;
//! impl MembershipOracle for Identity {
//!     fn membership_query(&self, word: &[Symbol]) -> Word {
//!         word.to_vec()
//!     }
//! }
//!
//! struct AcceptAfterOneCheck(bool);
//! impl EquivalenceOracle for AcceptAfterOneCheck {
//!     fn equivalence_query(&mut self, hypothesis: &lstar_transducer::Transducer) -> EquivalenceResult {
//!         if self.0 {
//!             return EquivalenceResult::Accepted;
//!         }
//!         self.0 = true;
//!         let probe = vec![0, 1, 0];
//!         if hypothesis.consume(&probe).unwrap() == probe {
//!             EquivalenceResult::Accepted
//!         } else {
//!             EquivalenceResult::Rejected(probe)
//!         }
//!     }
//! }
//!
//! let mq = Identity;
//! let mut eq = AcceptAfterOneCheck(false);
//! let learned = MealyLearner::new(vec![0, 1]).learn(&mq, &mut eq).unwrap();
//! assert_eq!(learned.state_count(), 1);
//! ```

pub mod cex;
pub mod core;
pub mod error;
pub mod learner;
pub mod oracle;
pub mod table;
pub mod transducer;

#[cfg(test)]
mod test_support;

pub use core::{EPSILON_MARKER, Output, Symbol, Word};
pub use error::{CexStrategy, LearnerError};
pub use learner::lookahead::LookaheadLearner;
pub use learner::mealy::MealyLearner;
pub use oracle::{EquivalenceOracle, EquivalenceResult, MembershipOracle};
pub use table::ObservationTable;
pub use transducer::Transducer;
