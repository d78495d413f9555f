//! Randomized equivalence-oracle harness shared by this crate's own unit
//! tests and its integration tests under `tests/`. Compiled only under
//! `cfg(test)` here; the integration tests re-include this same file by
//! path rather than getting their own copy, so there is exactly one
//! implementation of this harness in the crate.

// Reached through the crate's own published name rather than `crate::`,
// since this file is also re-included by path from the integration tests
// under `tests/`, where it is compiled as part of a different crate that
// depends on this one rather than as a module of it.
use lstar_transducer::oracle::{EquivalenceOracle, EquivalenceResult};
use lstar_transducer::transducer::Transducer;
use lstar_transducer::{Symbol, Word};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Randomized equivalence testing in the style of `htmlencoder.py`'s
/// `equivalence_query`: draw random words from the alphabet, occasionally
/// splicing in one of a handful of "interesting" substrings, and compare
/// against `target` until a disagreement turns up or the trial budget
/// runs out.
pub struct RandomEquivalenceOracle<F> {
    target: F,
    alphabet: Vec<Symbol>,
    interesting: Vec<Word>,
    max_len: usize,
    trials: usize,
    rng: StdRng,
}

impl<F> RandomEquivalenceOracle<F>
where
    F: Fn(&[Symbol]) -> Word,
{
    pub fn new(target: F, alphabet: Vec<Symbol>, seed: u64) -> Self {
        Self {
            target,
            alphabet,
            interesting: Vec::new(),
            max_len: 15,
            trials: 300,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn with_interesting(mut self, interesting: Vec<Word>) -> Self {
        self.interesting = interesting;
        self
    }

    pub fn with_trials(mut self, trials: usize) -> Self {
        self.trials = trials;
        self
    }

    pub fn with_max_len(mut self, max_len: usize) -> Self {
        self.max_len = max_len;
        self
    }

    /// Draws one random word: between 1 and `max_len` symbols from the
    /// alphabet, with an interesting substring spliced in after roughly
    /// one symbol in ten once any have been registered.
    pub fn random_word(&mut self) -> Word {
        let len = self.rng.gen_range(1..=self.max_len);
        let mut word = Vec::with_capacity(len);
        for _ in 0..len {
            let idx = self.rng.gen_range(0..self.alphabet.len());
            word.push(self.alphabet[idx]);
            if !self.interesting.is_empty() && self.rng.gen_range(0..10) == 5 {
                let idx = self.rng.gen_range(0..self.interesting.len());
                word.extend_from_slice(&self.interesting[idx]);
            }
        }
        word
    }
}

impl<F> EquivalenceOracle for RandomEquivalenceOracle<F>
where
    F: Fn(&[Symbol]) -> Word,
{
    fn equivalence_query(&mut self, hypothesis: &Transducer) -> EquivalenceResult {
        for _ in 0..self.trials {
            let input = self.random_word();
            let expected = (self.target)(&input);
            if hypothesis.consume(&input).ok().as_ref() != Some(&expected) {
                return EquivalenceResult::Rejected(input);
            }
        }
        EquivalenceResult::Accepted
    }
}
