//! Shared plumbing for the two learners: the closing loop and hypothesis
//! construction from a closed observation table.

pub mod lookahead;
pub mod mealy;

use tracing::{debug, info};

use crate::core::Output;
use crate::error::LearnerError;
use crate::oracle::MembershipOracle;
use crate::table::ObservationTable;
use crate::transducer::Transducer;

/// Repeatedly closes `table` by promoting escaping rows until
/// [`ObservationTable::is_closed`] reports no more escaping rows.
pub(crate) fn close(table: &mut ObservationTable, mq: &impl MembershipOracle) {
    while let Some(escaping) = table.is_closed() {
        debug!(row = ?escaping, "closing table: promoting escaping row");
        table.promote(escaping, mq);
    }
    debug!("table closed");
}

/// Builds a hypothesis transducer from a closed table: one arc per
/// `(access string, alphabet symbol)` pair, plus one arc per lookahead
/// triple. Fails with [`LearnerError::ClosednessViolation`] if an
/// equivalence class is missing, which only happens if the table was not
/// actually closed when this was called.
pub(crate) fn hypothesize(table: &ObservationTable) -> Result<Transducer, LearnerError> {
    let mut t = Transducer::with_alphabet(table.alphabet().to_vec());

    for (src_idx, s) in table.access_strings().iter().enumerate() {
        for &a in table.alphabet() {
            let mut ext = s.clone();
            ext.push(a);
            let dst = table
                .equivalence_class(&ext)
                .ok_or_else(|| LearnerError::ClosednessViolation(ext.clone()))?;
            let dst_idx = table
                .access_strings()
                .get_index_of(dst)
                .ok_or_else(|| LearnerError::ClosednessViolation(dst.clone()))?;
            let out = table.cell(s, &[a]).cloned().unwrap_or_default();
            t.add_arc(src_idx, dst_idx, vec![a], Output::from_word(out));
        }
    }

    for (s, u, v) in table.lookaheads() {
        let mut row = s.clone();
        row.extend(u.iter().copied());
        let dst = table
            .equivalence_class(&row)
            .ok_or_else(|| LearnerError::ClosednessViolation(row.clone()))?;
        let src_idx = table
            .access_strings()
            .get_index_of(s)
            .ok_or_else(|| LearnerError::ClosednessViolation(s.clone()))?;
        let dst_idx = table
            .access_strings()
            .get_index_of(dst)
            .ok_or_else(|| LearnerError::ClosednessViolation(dst.clone()))?;
        t.add_arc(src_idx, dst_idx, u.clone(), Output::from_word(v.clone()));
    }

    info!(states = t.state_count(), "constructed hypothesis");
    Ok(t)
}
