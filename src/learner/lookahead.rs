//! Extends the Mealy learner with a lookahead-discovery pass that finds
//! multi-symbol input transitions whose output could not be predicted
//! from any single-symbol extension.

use tracing::{debug, info};

use super::{close, hypothesize};
use crate::cex::{CounterexampleProcessor, shahbaz_groz::ShahbazGroz};
use crate::core::{Symbol, Word, strip_common_prefix};
use crate::error::LearnerError;
use crate::oracle::{EquivalenceOracle, EquivalenceResult, MembershipOracle};
use crate::table::ObservationTable;
use crate::transducer::Transducer;

/// Learns a bounded-lookahead transducer model of a target reachable only
/// through a membership and an equivalence oracle.
#[derive(Debug, Clone)]
pub struct LookaheadLearner {
    alphabet: Vec<Symbol>,
}

impl LookaheadLearner {
    /// Creates a learner over `alphabet`.
    pub fn new(alphabet: Vec<Symbol>) -> Self {
        Self { alphabet }
    }

    /// Runs the outer loop to completion, returning the finalized
    /// transducer once the equivalence oracle accepts.
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
                    detect_lookahead(&ce, &hypothesis, &mut table, mq);
                    ShahbazGroz.process(&ce, &mut table, &hypothesis, mq)?;
                }
            }
        }
    }
}

/// Scans `ce` for evidence that the target "retracted" previously implied
/// output: finds the earliest position `i` at which `MQ(ce[:i])` is
/// not prefix-extended by `MQ(ce[:i-1])`, derives the lookahead input/output
/// pair from it, and — if the source access string it implies is validated
/// by direct membership query — adds it to the table. Adds at most one
/// lookahead per call; silently does nothing if none is found or the one
/// found fails validation (the source access string is itself wrong and
/// will self-correct on a later iteration of ordinary refinement).
fn detect_lookahead(
    ce: &[Symbol],
    hypothesis: &Transducer,
    table: &mut ObservationTable,
    mq: &impl MembershipOracle,
) {
    let prefix_outputs: Vec<Word> = (0..=ce.len()).map(|i| mq.membership_query(&ce[..i])).collect();

    for i in 1..=ce.len() {
        let out_i = &prefix_outputs[i];
        let out_im1 = &prefix_outputs[i - 1];
        if out_i.starts_with(out_im1.as_slice()) {
            continue;
        }
        debug!(position = i, "lookahead detected: output retracted");

        let Some(j) = (0..i).rev().find(|&j| out_i.starts_with(prefix_outputs[j].as_slice())) else {
            continue;
        };
        let lookahead_input = ce[j..i].to_vec();
        let lookahead_output = strip_common_prefix(&prefix_outputs[j], out_i);

        let Ok(state) = hypothesis.state_at(ce, j) else {
            debug!("lookahead source state unreachable, skipping");
            continue;
        };
        let Some(access_string) = table.access_strings().get_index(state).cloned() else {
            continue;
        };

        let prefix_s = mq.membership_query(&access_string);
        let mut probe = access_string.clone();
        probe.extend_from_slice(&lookahead_input);
        let full_su = mq.membership_query(&probe);
        let observed = strip_common_prefix(&prefix_s, &full_su);

        if observed != lookahead_output {
            debug!(
                ?access_string,
                "lookahead access string is wrong, skipping; will self-correct later"
            );
            continue;
        }

        if table.add_lookahead(access_string.clone(), lookahead_input.clone(), lookahead_output, mq) {
            debug!(?access_string, input = ?lookahead_input, "added lookahead transition");
        }
        return;
    }
}
