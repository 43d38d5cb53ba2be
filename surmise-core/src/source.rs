//! The choice-source boundary and the per-example draw handle.
//!
//! A [`ChoiceSource`] supplies the primitive decisions every provider is
//! built from: unbounded integers, bounded integers, and continue/stop
//! decisions for repeated constructs. The engine that records, replays, and
//! shrinks those decisions lives outside this crate; here the stream is an
//! opaque trait plus two small adapters, one deterministic and one random.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{Draw, DrawError};
use crate::provider::Provider;

/// Signal that a choice source has no more data for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Exhausted;

impl From<Exhausted> for DrawError {
    fn from(_: Exhausted) -> DrawError {
        DrawError::Overflow
    }
}

/// The primitive decision stream providers draw from.
///
/// Implementations may be random, recorded, or replayed; the contract is
/// only that each request yields a value in range or reports [`Exhausted`].
pub trait ChoiceSource {
    /// Next unbounded integer.
    fn next_integer(&mut self) -> Result<i64, Exhausted>;

    /// Next integer in `[0, max_inclusive]`.
    fn next_bounded(&mut self, max_inclusive: u64) -> Result<u64, Exhausted>;

    /// Whether a repeated construct should grow another element.
    ///
    /// Consulted once per undecided iteration of a construct sized between
    /// `min_count` and `max_count`; implementations are expected to bias the
    /// answer so that constructs average `target_average` elements. Forced
    /// continues and stops never reach the source.
    fn repeat_decision(
        &mut self,
        min_count: u64,
        max_count: u64,
        target_average: f64,
    ) -> Result<bool, Exhausted>;
}

/// Per-example handle bridging providers to the underlying [`ChoiceSource`].
///
/// A `Source` lives for exactly one example-generation pass; the driver
/// constructs a fresh one per attempt. Exhaustion reported by the primitive
/// layer is converted to [`DrawError::Overflow`] here, so providers above
/// only ever see a value or a control signal, never a raw sentinel.
pub struct Source<'a> {
    choices: &'a mut dyn ChoiceSource,
}

impl<'a> Source<'a> {
    pub fn new(choices: &'a mut dyn ChoiceSource) -> Source<'a> {
        Source { choices }
    }

    /// Draws a value from `provider`. Rejection and Overflow propagate
    /// unchanged.
    pub fn given<P: Provider>(&mut self, provider: &P) -> Draw<P::Value> {
        provider.provide(self)
    }

    /// Abandons the current example attempt unless `condition` holds.
    pub fn assume(&mut self, condition: bool) -> Draw<()> {
        if condition {
            Ok(())
        } else {
            Err(DrawError::Rejected)
        }
    }

    pub(crate) fn next_integer(&mut self) -> Draw<i64> {
        Ok(self.choices.next_integer()?)
    }

    pub(crate) fn next_bounded(&mut self, max_inclusive: u64) -> Draw<u64> {
        Ok(self.choices.next_bounded(max_inclusive)?)
    }

    pub(crate) fn repeat_decision(
        &mut self,
        min_count: u64,
        max_count: u64,
        target_average: f64,
    ) -> Draw<bool> {
        Ok(self
            .choices
            .repeat_decision(min_count, max_count, target_average)?)
    }
}

/// Deterministic [`ChoiceSource`] replaying a recorded script of words.
///
/// Unbounded draws reinterpret the next word as a signed integer, bounded
/// draws reduce it into range, and repeat decisions read it as a flag (zero
/// stops, anything else continues). Once the script runs out every request
/// reports [`Exhausted`].
#[derive(Debug, Clone)]
pub struct ReplaySource {
    script: Vec<u64>,
    cursor: usize,
}

impl ReplaySource {
    pub fn new(script: Vec<u64>) -> ReplaySource {
        ReplaySource { script, cursor: 0 }
    }

    /// Number of script words not yet consumed.
    pub fn remaining(&self) -> usize {
        self.script.len() - self.cursor
    }

    fn next_word(&mut self) -> Result<u64, Exhausted> {
        match self.script.get(self.cursor) {
            Some(&word) => {
                self.cursor += 1;
                Ok(word)
            }
            None => Err(Exhausted),
        }
    }
}

impl ChoiceSource for ReplaySource {
    fn next_integer(&mut self) -> Result<i64, Exhausted> {
        Ok(self.next_word()? as i64)
    }

    fn next_bounded(&mut self, max_inclusive: u64) -> Result<u64, Exhausted> {
        let word = self.next_word()?;
        if max_inclusive == u64::MAX {
            Ok(word)
        } else {
            Ok(word % (max_inclusive + 1))
        }
    }

    fn repeat_decision(
        &mut self,
        _min_count: u64,
        _max_count: u64,
        _target_average: f64,
    ) -> Result<bool, Exhausted> {
        Ok(self.next_word()? != 0)
    }
}

/// Default number of primitive requests a [`RandomSource`] serves.
pub const DEFAULT_DRAW_BUDGET: u64 = 10_000;

/// Seedable random [`ChoiceSource`] for standalone generation.
///
/// Unbounded draws use a bit-width-biased magnitude with a random sign, so
/// small values are common while the full range stays reachable. The finite
/// request budget makes exhaustion reachable: a generation loop that cannot
/// terminate on its own ends in Overflow instead of spinning forever.
#[derive(Debug, Clone)]
pub struct RandomSource {
    rng: StdRng,
    remaining: u64,
}

impl RandomSource {
    /// Source seeded from the operating system.
    pub fn new() -> RandomSource {
        RandomSource {
            rng: StdRng::from_entropy(),
            remaining: DEFAULT_DRAW_BUDGET,
        }
    }

    /// Deterministic source derived from `seed`.
    pub fn from_seed(seed: u64) -> RandomSource {
        RandomSource {
            rng: StdRng::seed_from_u64(seed),
            remaining: DEFAULT_DRAW_BUDGET,
        }
    }

    /// Replaces the request budget.
    pub fn with_budget(mut self, budget: u64) -> RandomSource {
        self.remaining = budget;
        self
    }

    fn spend(&mut self) -> Result<(), Exhausted> {
        if self.remaining == 0 {
            return Err(Exhausted);
        }
        self.remaining -= 1;
        Ok(())
    }
}

impl Default for RandomSource {
    fn default() -> RandomSource {
        RandomSource::new()
    }
}

impl ChoiceSource for RandomSource {
    fn next_integer(&mut self) -> Result<i64, Exhausted> {
        self.spend()?;
        let width = self.rng.gen_range(0..=63u32);
        let magnitude = if width == 0 {
            0
        } else {
            self.rng.gen::<u64>() >> (64 - width)
        };
        if self.rng.gen::<bool>() {
            Ok(magnitude as i64)
        } else {
            Ok(-(magnitude as i64))
        }
    }

    fn next_bounded(&mut self, max_inclusive: u64) -> Result<u64, Exhausted> {
        self.spend()?;
        Ok(self.rng.gen_range(0..=max_inclusive))
    }

    fn repeat_decision(
        &mut self,
        _min_count: u64,
        _max_count: u64,
        target_average: f64,
    ) -> Result<bool, Exhausted> {
        self.spend()?;
        let p_continue = 1.0 - 1.0 / (1.0 + target_average);
        Ok(self.rng.gen_bool(p_continue))
    }
}
