//! The L*-style observation table: a two-dimensional table of
//! membership-query answers indexed by access-string rows and
//! distinguishing-suffix columns.

use indexmap::{IndexMap, IndexSet};
use tabled::builder::Builder;
use tracing::trace;

use crate::core::{Symbol, Word, strip_common_prefix};
use crate::oracle::MembershipOracle;

/// A lookahead triple `(s, u, v)`: at access string `s`, consuming the
/// multi-symbol input `u` produces output `v` that could not be predicted
/// from any single-symbol extension of `s`.
pub type LookaheadEntry = (Word, Word, Word);

/// Holds every membership-query answer the learner has gathered so far,
/// indexed by row (access string, transition, or lookahead extension) and
/// column (distinguishing suffix).
#[derive(Debug, Clone, Default)]
pub struct ObservationTable {
    alphabet: Vec<Symbol>,
    s: IndexSet<Word>,
    t: IndexSet<Word>,
    e: IndexSet<Word>,
    lookaheads: Vec<LookaheadEntry>,
    cells: IndexMap<Word, IndexMap<Word, Word>>,
    equiv_classes: IndexMap<Word, Word>,
}

impl ObservationTable {
    /// Initializes the table: `S = {()}`, `T = { (a) | a in I }`,
    /// `E = { (a) | a in I }`, with every row filled across every column.
    pub fn init(alphabet: Vec<Symbol>, mq: &impl MembershipOracle) -> Self {
        let mut table = Self {
            alphabet: alphabet.clone(),
            s: IndexSet::new(),
            t: IndexSet::new(),
            e: IndexSet::new(),
            lookaheads: Vec::new(),
            cells: IndexMap::new(),
            equiv_classes: IndexMap::new(),
        };
        table.s.insert(Word::new());
        for &a in &alphabet {
            table.t.insert(vec![a]);
            table.e.insert(vec![a]);
        }

        let rows: Vec<Word> = table.s.iter().chain(table.t.iter()).cloned().collect();
        let cols: Vec<Word> = table.e.iter().cloned().collect();
        for row in &rows {
            for col in &cols {
                table.fill(row, col, mq);
            }
        }
        table
    }

    /// The input alphabet this table was initialized with.
    pub fn alphabet(&self) -> &[Symbol] {
        &self.alphabet
    }

    /// The access strings S, in discovery order; the position of an
    /// access string in this set is the state index it is assigned in a
    /// hypothesis built from the table.
    pub fn access_strings(&self) -> &IndexSet<Word> {
        &self.s
    }

    /// The transition rows T awaiting promotion or already equivalence-classed.
    pub fn transitions(&self) -> &IndexSet<Word> {
        &self.t
    }

    /// The distinguishing suffixes E.
    pub fn suffixes(&self) -> &IndexSet<Word> {
        &self.e
    }

    /// The lookahead triples discovered so far.
    pub fn lookaheads(&self) -> &[LookaheadEntry] {
        &self.lookaheads
    }

    /// The access string `row` was last found equivalent to, if the table
    /// has been successfully closed since `row` was added.
    pub fn equivalence_class(&self, row: &[Symbol]) -> Option<&Word> {
        self.equiv_classes.get(row)
    }

    /// The suffix-isolated cell entry at `(row, col)`, if filled.
    pub fn cell(&self, row: &[Symbol], col: &[Symbol]) -> Option<&Word> {
        self.cells.get(row).and_then(|cols| cols.get(col))
    }

    /// Computes and stores the suffix-isolated entry for `(row, col)`:
    /// `MQ(row ++ col)` with the longest common prefix of `MQ(row)`
    /// stripped.
    pub fn fill(&mut self, row: &Word, col: &Word, mq: &impl MembershipOracle) {
        let prefix = mq.membership_query(row);
        let mut probe = row.clone();
        probe.extend(col.iter().copied());
        let full = mq.membership_query(&probe);
        let entry = strip_common_prefix(&prefix, &full);
        trace!(?row, ?col, ?entry, "filled observation table cell");
        self.cells
            .entry(row.clone())
            .or_default()
            .insert(col.clone(), entry);
    }

    fn row_vector(&self, row: &[Symbol]) -> Vec<&Word> {
        self.e
            .iter()
            .map(|col| {
                self.cell(row, col)
                    .expect("every row must be filled across all of E before comparison")
            })
            .collect()
    }

    /// Every row that must match some access string for the table to be
    /// closed: transition rows plus lookahead-extension rows `s ++ u`.
    fn extension_rows(&self) -> Vec<Word> {
        self.t
            .iter()
            .cloned()
            .chain(self.lookaheads.iter().map(|(s, u, _)| {
                let mut row = s.clone();
                row.extend(u.iter().copied());
                row
            }))
            .collect()
    }

    /// Every row currently tracked by the table: S, T, and lookahead
    /// extension rows, used when a new suffix must be filled everywhere.
    fn all_rows(&self) -> Vec<Word> {
        self.s.iter().cloned().chain(self.extension_rows()).collect()
    }

    /// Checks closedness: every transition row and every
    /// lookahead-extension row must match some access row's vector over
    /// E. Returns the first escaping row if not closed; on success,
    /// (re)populates the equivalence-class map.
    pub fn is_closed(&mut self) -> Option<Word> {
        let mut classes = IndexMap::new();
        for row in self.extension_rows() {
            let row_vec = self.row_vector(&row);
            match self.s.iter().find(|acc| self.row_vector(acc) == row_vec) {
                Some(acc) => {
                    classes.insert(row, acc.clone());
                }
                None => {
                    if let Some(acc) = self.s.iter().next() {
                        if let Some(col) = self.diverging_column(&row, acc) {
                            trace!(?row, ?acc, ?col, "escaping row diverges from first access string");
                        }
                    }
                    return Some(row);
                }
            }
        }
        self.equiv_classes = classes;
        None
    }

    /// First suffix at which `row` and `candidate` disagree; used only to
    /// annotate the trace log emitted when a row escapes closedness.
    fn diverging_column(&self, row: &[Symbol], candidate: &[Symbol]) -> Option<&Word> {
        self.e.iter().find(|col| self.cell(row, col) != self.cell(candidate, col))
    }

    /// Appends `col` to E if not already present, filling it across every
    /// tracked row. Returns whether a new suffix was actually added.
    pub fn add_suffix(&mut self, col: Word, mq: &impl MembershipOracle) -> bool {
        if self.e.contains(&col) {
            return false;
        }
        self.e.insert(col.clone());
        for row in self.all_rows() {
            self.fill(&row, &col, mq);
        }
        true
    }

    /// Promotes `row` from T into S, extending it by every alphabet
    /// symbol to create its new transition rows, and fills everything
    /// across E.
    pub fn promote(&mut self, row: Word, mq: &impl MembershipOracle) {
        self.s.insert(row.clone());
        self.t.shift_remove(&row);
        let cols: Vec<Word> = self.e.iter().cloned().collect();
        for &a in &self.alphabet.clone() {
            let mut ext = row.clone();
            ext.push(a);
            if self.t.insert(ext.clone()) {
                for col in &cols {
                    self.fill(&ext, col, mq);
                }
            }
        }
    }

    /// Idempotent insertion of a lookahead triple into L, filling its row
    /// across E. Returns whether the triple was newly added.
    pub fn add_lookahead(&mut self, s: Word, u: Word, v: Word, mq: &impl MembershipOracle) -> bool {
        if self.lookaheads.iter().any(|(ss, uu, vv)| *ss == s && *uu == u && *vv == v) {
            return false;
        }
        let mut row = s.clone();
        row.extend(u.iter().copied());
        let cols: Vec<Word> = self.e.iter().cloned().collect();
        for col in &cols {
            self.fill(&row, col, mq);
        }
        self.lookaheads.push((s, u, v));
        true
    }
}

impl std::fmt::Display for ObservationTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut builder = Builder::default();
        let mut header = vec!["row".to_string()];
        header.extend(self.e.iter().map(|col| format!("{:?}", col)));
        builder.push_record(header);

        let rows: Vec<Word> = self.s.iter().cloned().chain(self.extension_rows()).collect();
        for row in &rows {
            let mut record = vec![format!("{:?}", row)];
            for col in &self.e {
                record.push(
                    self.cell(row, col)
                        .map(|v| format!("{v:?}"))
                        .unwrap_or_else(|| "?".to_string()),
                );
            }
            builder.push_record(record);
        }

        write!(f, "{}", builder.build())
    }
}
