//! Rivest–Schapire counterexample processing: binary search over the
//! counterexample for the single breakpoint at which the hypothesis and
//! the target first disagree, adding exactly one distinguishing suffix
//! per counterexample.

use tracing::debug;

use super::CounterexampleProcessor;
use crate::core::{Symbol, strip_common_prefix};
use crate::error::LearnerError;
use crate::oracle::MembershipOracle;
use crate::table::ObservationTable;
use crate::transducer::Transducer;

/// The Rivest–Schapire strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct RivestSchapire;

impl CounterexampleProcessor for RivestSchapire {
    fn process(
        &self,
        ce: &[Symbol],
        table: &mut ObservationTable,
        hypothesis: &Transducer,
        mq: &impl MembershipOracle,
    ) -> Result<(), LearnerError> {
        let mut same = 0usize;
        let mut diff = ce.len();

        while diff - same > 1 {
            let i = (same + diff) / 2;
            let state = hypothesis.state_at(ce, i)?;
            let access_string = table
                .access_strings()
                .get_index(state)
                .cloned()
                .unwrap_or_default();

            if disagrees_at(&access_string, ce, i, mq) {
                diff = i;
            } else {
                same = i;
            }
        }

        let suffix = ce[diff..].to_vec();
        debug!(?suffix, "rivest-schapire found distinguishing suffix");
        table.add_suffix(suffix, mq);
        Ok(())
    }
}

/// Checks whether the suffix-isolated output of `access_string ++ ce[index..]`
/// disagrees with that of `ce` itself, both relative to their own common
/// prefix with their shorter probe — this is the "different at i" test
/// the binary search narrows in on.
fn disagrees_at(
    access_string: &[Symbol],
    ce: &[Symbol],
    index: usize,
    mq: &impl MembershipOracle,
) -> bool {
    let prefix_as = mq.membership_query(access_string);
    let mut probe_as = access_string.to_vec();
    probe_as.extend_from_slice(&ce[index..]);
    let full_as = mq.membership_query(&probe_as);
    let as_suffix = strip_common_prefix(&prefix_as, &full_as);

    let prefix_ce = mq.membership_query(&ce[..index]);
    let full_ce = mq.membership_query(ce);
    let ce_suffix = strip_common_prefix(&prefix_ce, &full_ce);

    as_suffix != ce_suffix
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::table::ObservationTable;

    struct Doubler;
    impl MembershipOracle for Doubler {
        fn membership_query(&self, word: &[Symbol]) -> Word {
            word.iter().flat_map(|&s| [s, s]).collect()
        }
    }

    #[test]
    fn adds_exactly_one_suffix() {
        let mq = Doubler;
        let mut table = ObservationTable::init(vec![0, 1], &mq);
        while let Some(row) = table.is_closed() {
            table.promote(row, &mq);
        }
        let hypothesis = crate::learner::hypothesize(&table).unwrap();
        let before = table.suffixes().len();

        // The doubler is correctly captured by a 1-state hypothesis, so any
        // word is actually a non-counterexample; feed one anyway to exercise
        // the suffix-adding machinery in isolation.
        let ce = vec![0, 1];
        RivestSchapire.process(&ce, &mut table, &hypothesis, &mq).unwrap();
        assert_eq!(table.suffixes().len(), before + 1);
    }
}
