//! Random sources consumed by the tree generators.
//!
//! Generators never reach for ambient global state: every call threads an
//! explicit `&mut` [`RandomSource`] so a run is reproducible from its seed, or
//! fully scripted in tests.

use rand::{Rng, SeedableRng, rngs::SmallRng};

/// Absolute bias below which [`RandomSource::wnext`] takes the exact
/// max-of-k / min-of-k draw instead of the closed-form power transform.
pub const WNEXT_EXACT_LIMIT: u64 = 25;

/// Stream of random integers used by the generators.
///
/// Implementors supply uniform integers and uniform unit floats; the weighted
/// draw and the coin flip are derived from those.
pub trait RandomSource {
    /// Returns an integer uniformly distributed over `low..=high`.
    ///
    /// Callers guarantee `low <= high`.
    fn next(&mut self, low: usize, high: usize) -> usize;

    /// Returns a float uniformly distributed over `[0, 1)`.
    fn next_unit(&mut self) -> f64;

    /// Returns an integer in `low..=high` skewed by `bias`.
    ///
    /// A positive bias skews towards `high`, a negative bias towards `low`,
    /// and zero is uniform. For `|bias| < WNEXT_EXACT_LIMIT` the result is
    /// the maximum (or minimum) of `|bias| + 1` uniform draws; larger biases
    /// use the equivalent closed-form transform of a single unit draw.
    fn wnext(&mut self, low: usize, high: usize, bias: i64) -> usize {
        if bias.unsigned_abs() < WNEXT_EXACT_LIMIT {
            let mut result = self.next(low, high);
            for _ in 0..bias.unsigned_abs() {
                let draw = self.next(low, high);
                result = if bias > 0 {
                    result.max(draw)
                } else {
                    result.min(draw)
                };
            }
            return result;
        }

        let exponent = 1.0 / (bias.unsigned_abs() as f64 + 1.0);
        let unit = self.next_unit().powf(exponent);
        let skewed = if bias > 0 { unit } else { 1.0 - unit };
        let span = high - low + 1;
        let offset = (span as f64 * skewed) as usize;
        low + offset.min(span - 1)
    }

    /// Flips a fair coin, defined as `next(0, 1) == 1`.
    fn coin(&mut self) -> bool {
        self.next(0, 1) == 1
    }
}

/// Shuffles `items` in place with a forward Fisher–Yates pass.
///
/// Element `i` is swapped with a uniformly chosen element of `0..=i` for
/// every `i` from 1 upwards, so the draw order is stable across sources.
///
/// # Examples
/// ```
/// use treegen_core::{SeededSource, shuffle};
///
/// let mut items: Vec<usize> = (0..8).collect();
/// shuffle(&mut SeededSource::new(7), &mut items);
/// items.sort_unstable();
/// assert_eq!(items, (0..8).collect::<Vec<_>>());
/// ```
pub fn shuffle<R: RandomSource + ?Sized, T>(rng: &mut R, items: &mut [T]) {
    for index in 1..items.len() {
        let other = rng.next(0, index);
        items.swap(index, other);
    }
}

/// [`RandomSource`] backed by a seeded [`SmallRng`].
///
/// # Examples
/// ```
/// use treegen_core::{RandomSource, SeededSource};
///
/// let mut left = SeededSource::new(42);
/// let mut right = SeededSource::new(42);
/// assert_eq!(left.next(0, 1_000), right.next(0, 1_000));
/// ```
#[derive(Clone, Debug)]
pub struct SeededSource {
    rng: SmallRng,
}

impl SeededSource {
    /// Creates a deterministic source from `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Creates a source seeded from operating-system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: SmallRng::from_entropy(),
        }
    }
}

impl RandomSource for SeededSource {
    fn next(&mut self, low: usize, high: usize) -> usize {
        self.rng.gen_range(low..=high)
    }

    fn next_unit(&mut self) -> f64 {
        self.rng.r#gen::<f64>()
    }
}

/// [`RandomSource`] that replays a fixed script of integers.
///
/// Each draw consumes one scripted value and maps it into the requested range
/// as `low + value % (high - low + 1)`. The script restarts from the beginning
/// once exhausted; an empty script always yields `low`. Weighted draws ignore
/// the bias and consume a single value, which keeps golden scenarios easy to
/// write by hand.
///
/// # Examples
/// ```
/// use treegen_core::{RandomSource, ScriptedSource};
///
/// let mut source = ScriptedSource::new([1, 5]);
/// assert_eq!(source.next(0, 3), 1);
/// assert_eq!(source.next(0, 3), 1); // 5 % 4
/// assert_eq!(source.draws(), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ScriptedSource {
    script: Vec<usize>,
    cursor: usize,
    draws: usize,
}

impl ScriptedSource {
    /// Creates a source that replays `script`.
    #[must_use]
    pub fn new(script: impl IntoIterator<Item = usize>) -> Self {
        Self {
            script: script.into_iter().collect(),
            cursor: 0,
            draws: 0,
        }
    }

    /// Returns how many values have been consumed so far.
    #[must_use]
    pub fn draws(&self) -> usize {
        self.draws
    }

    fn pop(&mut self) -> Option<usize> {
        let value = self.script.get(self.cursor).copied();
        self.draws += 1;
        self.cursor += 1;
        if self.cursor >= self.script.len() {
            self.cursor = 0;
        }
        value
    }
}

impl RandomSource for ScriptedSource {
    fn next(&mut self, low: usize, high: usize) -> usize {
        let span = high - low + 1;
        self.pop().map_or(low, |value| low + value % span)
    }

    fn next_unit(&mut self) -> f64 {
        const RESOLUTION: usize = 1 << 20;
        self.pop()
            .map_or(0.0, |value| (value % RESOLUTION) as f64 / RESOLUTION as f64)
    }

    fn wnext(&mut self, low: usize, high: usize, _bias: i64) -> usize {
        self.next(low, high)
    }
}
