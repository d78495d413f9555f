//! The L* main loop for transducers without lookahead: initialize,
//! close, hypothesize, query, process counterexample.

use tracing::info;

use super::{close, hypothesize};
use crate::cex::{CounterexampleProcessor, rivest_schapire::RivestSchapire, shahbaz_groz::ShahbazGroz};
use crate::core::Symbol;
use crate::error::{CexStrategy, LearnerError};
use crate::oracle::{EquivalenceOracle, EquivalenceResult, MembershipOracle};
use crate::table::ObservationTable;
use crate::transducer::Transducer;

/// Learns a Mealy-machine model of a target reachable only through a
/// membership and an equivalence oracle.
#[derive(Debug, Clone)]
pub struct MealyLearner {
    alphabet: Vec<Symbol>,
    strategy: CexStrategy,
}

impl MealyLearner {
    /// Creates a learner over `alphabet` using Rivest–Schapire
    /// counterexample processing, the default per the governing
    /// specification (exponentially fewer queries than Shahbaz–Groz).
    pub fn new(alphabet: Vec<Symbol>) -> Self {
        Self {
            alphabet,
            strategy: CexStrategy::RivestSchapire,
        }
    }

    /// Creates a learner over `alphabet` using the given counterexample
    /// processing strategy.
    pub fn with_strategy(alphabet: Vec<Symbol>, strategy: CexStrategy) -> Self {
        Self { alphabet, strategy }
    }

    /// Creates a learner from a strategy name: one of `"rivest_schapire"`
    /// or `"shahbaz_groz"`. Fails with [`LearnerError::UnsupportedStrategy`]
    /// for anything else.
    pub fn from_config(alphabet: Vec<Symbol>, strategy_name: &str) -> Result<Self, LearnerError> {
        let strategy = match strategy_name {
            "rivest_schapire" => CexStrategy::RivestSchapire,
            "shahbaz_groz" => CexStrategy::ShahbazGroz,
            other => return Err(LearnerError::UnsupportedStrategy(other.to_string())),
        };
        Ok(Self { alphabet, strategy })
    }

    /// Runs the L* loop to completion, returning the finalized transducer
    /// once the equivalence oracle accepts.
    pub fn learn(
        &self,
        mq: &impl MembershipOracle,
        eq: &mut impl EquivalenceOracle,
    ) -> Result<Transducer, LearnerError> {
        info!("initializing learning procedure");
        let mut table = ObservationTable::init(self.alphabet.clone(), mq);

        loop {
            close(&mut table, mq);
            let hypothesis = hypothesize(&table)?;
            info!(states = hypothesis.state_count(), "running equivalence query");

            match eq.equivalence_query(&hypothesis) {
                EquivalenceResult::Accepted => {
                    info!("hypothesis accepted, learning complete");
                    return Ok(hypothesis);
                }
                EquivalenceResult::Rejected(ce) => {
                    info!(len = ce.len(), "processing counterexample");
                    self.process_counterexample(&ce, &mut table, &hypothesis, mq)?;
                }
            }
        }
    }

    fn process_counterexample(
        &self,
        ce: &[Symbol],
        table: &mut ObservationTable,
        hypothesis: &Transducer,
        mq: &impl MembershipOracle,
    ) -> Result<(), LearnerError> {
        match self.strategy {
            CexStrategy::RivestSchapire => RivestSchapire.process(ce, table, hypothesis, mq),
            CexStrategy::ShahbazGroz => ShahbazGroz.process(ce, table, hypothesis, mq),
        }
    }
}
