//! The transducer text format: one arc per line, `src\tdst\tin\tout`,
//! with `in`/`out` as comma-separated integer lists and epsilon output
//! written as the sentinel `0xFFFF`. A line holding a single integer
//! marks that state as having been seen.
//!
//! Actual file I/O (opening paths, choosing encodings for a CLI) is left
//! to the caller; this module only encodes to and decodes from an
//! in-memory string, which is all a save/load round trip needs.

use itertools::Itertools;

use super::Transducer;
use crate::core::{EPSILON_MARKER, Output, Symbol};
use crate::error::LearnerError;

impl Transducer {
    /// Renders the transducer in this module's text format. Every state
    /// is final (the transducer is total over reachable inputs), so every
    /// state index is written on its own marker line after that state's
    /// arcs.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for (src, arcs) in self.arcs_by_state() {
            for arc in arcs {
                let input = arc.input.iter().join(",");
                let output = match &arc.output {
                    Output::Epsilon => EPSILON_MARKER.to_string(),
                    Output::Word(w) => w.iter().join(","),
                };
                out.push_str(&format!("{src}\t{}\t{input}\t{output}\n", arc.dst));
            }
            out.push_str(&format!("{src}\n"));
        }
        out
    }

    fn arcs_by_state(&self) -> impl Iterator<Item = (usize, &[super::Arc])> {
        (0..self.states.len()).map(|i| (i, self.states[i].arcs.as_slice()))
    }

    /// Parses the text format produced by [`Transducer::to_text`]. The
    /// input alphabet is recorded as the union of input-label symbols
    /// seen across all arc lines.
    pub fn from_text(text: &str) -> Result<Self, LearnerError> {
        let mut t = Transducer::new();
        for (idx, raw_line) in text.lines().enumerate() {
            let line_number = idx + 1;
            let line = raw_line.trim();
            if line.is_empty() {
                continue;
            }
            let fields: Vec<&str> = line.split_whitespace().collect();
            match fields.as_slice() {
                [state] => {
                    let state: usize = state.parse().map_err(|_| malformed(line_number, "state index is not an integer"))?;
                    t.ensure_state(state);
                }
                [src, dst, input, output] => {
                    let src: usize = src.parse().map_err(|_| malformed(line_number, "source index is not an integer"))?;
                    let dst: usize = dst.parse().map_err(|_| malformed(line_number, "destination index is not an integer"))?;
                    let input = parse_symbols(input, line_number)?;
                    if input.is_empty() {
                        return Err(malformed(line_number, "input label must be non-empty"));
                    }
                    let output = parse_symbols(output, line_number)?;
                    let output = if output == [EPSILON_MARKER] {
                        Output::Epsilon
                    } else {
                        Output::from_word(output)
                    };
                    t.add_arc(src, dst, input, output);
                }
                _ => return Err(malformed(line_number, "expected 1 or 4 whitespace-separated fields")),
            }
        }
        Ok(t)
    }
}

fn parse_symbols(field: &str, line_number: usize) -> Result<Vec<Symbol>, LearnerError> {
    field
        .split(',')
        .map(|s| {
            s.parse::<Symbol>()
                .map_err(|_| malformed(line_number, &format!("'{s}' is not a valid symbol")))
        })
        .collect()
}

fn malformed(line_number: usize, reason: &str) -> LearnerError {
    LearnerError::MalformedExternalData {
        line_number,
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_simple_transducer() {
        let mut t = Transducer::new();
        t.add_arc(0, 0, vec![1], Output::from_word(vec![1]));
        t.add_arc(0, 1, vec![2], Output::Epsilon);
        t.add_arc(1, 0, vec![3, 4], Output::from_word(vec![9, 9]));

        let text = t.to_text();
        let loaded = Transducer::from_text(&text).unwrap();

        for input in [vec![1, 1, 2, 3, 4], vec![2, 3, 4, 1]] {
            assert_eq!(t.consume(&input).unwrap(), loaded.consume(&input).unwrap());
        }
    }

    #[test]
    fn load_records_alphabet_as_union_of_inputs() {
        let text = "0\t0\t1\t1\n0\t1\t2\t65535\n0\n1\n";
        let t = Transducer::from_text(text).unwrap();
        let mut alphabet = t.alphabet().to_vec();
        alphabet.sort();
        assert_eq!(alphabet, vec![1, 2]);
    }

    #[test]
    fn rejects_malformed_line() {
        let err = Transducer::from_text("0\t0\tnot-a-number\t1\n").unwrap_err();
        assert!(matches!(err, LearnerError::MalformedExternalData { line_number: 1, .. }));
    }

    #[test]
    fn epsilon_sentinel_round_trips() {
        let mut t = Transducer::new();
        t.add_arc(0, 0, vec![7], Output::Epsilon);
        let text = t.to_text();
        assert!(text.contains(&format!("{EPSILON_MARKER}")));
        let loaded = Transducer::from_text(&text).unwrap();
        assert_eq!(loaded.consume(&[7, 7]).unwrap(), Vec::<Symbol>::new());
    }
}
