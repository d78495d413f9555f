//! Counterexample-processing strategies: interchangeable ways to turn a
//! counterexample into new distinguishing suffixes for the observation
//! table.

pub mod rivest_schapire;
pub mod shahbaz_groz;

use crate::core::Symbol;
use crate::error::LearnerError;
use crate::oracle::MembershipOracle;
use crate::table::ObservationTable;
use crate::transducer::Transducer;

/// The contract both counterexample-processing strategies implement,
/// selected at learner construction so the outer loop can dispatch to
/// either one behind a single interface.
pub trait CounterexampleProcessor {
    /// Adds new distinguishing suffixes to `table` in response to
    /// counterexample `ce`, which was found by running `hypothesis`
    /// against the equivalence oracle.
    fn process(
        &self,
        ce: &[Symbol],
        table: &mut ObservationTable,
        hypothesis: &Transducer,
        mq: &impl MembershipOracle,
    ) -> Result<(), LearnerError>;
}
