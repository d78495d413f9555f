//! Shahbaz–Groz counterexample processing: add every suffix of the
//! counterexample beyond its longest shared prefix with a known access
//! string, shortest-first.

use tracing::debug;

use super::CounterexampleProcessor;
use crate::core::Symbol;
use crate::error::LearnerError;
use crate::oracle::MembershipOracle;
use crate::table::ObservationTable;
use crate::transducer::Transducer;

/// The Shahbaz–Groz strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShahbazGroz;

impl CounterexampleProcessor for ShahbazGroz {
    fn process(
        &self,
        ce: &[Symbol],
        table: &mut ObservationTable,
        _hypothesis: &Transducer,
        mq: &impl MembershipOracle,
    ) -> Result<(), LearnerError> {
        let maxlen = table
            .access_strings()
            .iter()
            .filter(|row| !row.is_empty())
            .map(|row| common_prefix_len(ce, row))
            .max()
            .unwrap_or(0);

        let mut suffix: Vec<Symbol> = Vec::new();
        for &symbol in ce[maxlen..].iter().rev() {
            suffix.insert(0, symbol);
            debug!(?suffix, "shahbaz-groz adding suffix");
            table.add_suffix(suffix.clone(), mq);
        }
        Ok(())
    }
}

fn common_prefix_len(a: &[Symbol], b: &[Symbol]) -> usize {
    a.iter().zip(b.iter()).take_while(|(x, y)| x == y).count()
}
