//! Seeded random-data generator.
//!
//! [`RandomGenerator`] owns a single [`StdRng`] and draws every value from
//! it, so two generators built from the same seed produce identical output
//! for identical call sequences.

use std::collections::HashSet;

use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::alphabet::Alphabet;
use crate::config::{GeneratorConfig, SeedSource};
use crate::error::RandomError;

/// Random strings, booleans, selections and samples from one seeded PRNG.
///
/// Draw methods take `&mut self`; share an instance across threads only
/// behind external synchronisation, or give each thread its own generator.
///
/// # Examples
///
/// ```rust
/// use rando_core::RandomGenerator;
///
/// let mut a = RandomGenerator::from_seed(42);
/// let mut b = RandomGenerator::from_seed(42);
///
/// let id = a.random_string(12);
/// assert_eq!(id.len(), 12);
/// assert_eq!(id, b.random_string(12));
///
/// let colours = ["red", "green", "blue"];
/// let pick = a.select_one(&colours);
/// assert!(colours.contains(&pick.as_str()));
/// ```
#[derive(Clone, Debug)]
pub struct RandomGenerator {
    /// The underlying PRNG instance.
    inner: StdRng,
    /// Seed used for initialisation.
    seed: u64,
    /// Alphabet for [`random_string`](Self::random_string).
    alphabet: Alphabet,
}

impl RandomGenerator {
    /// Creates a generator seeded from the current UTC time in nanoseconds.
    ///
    /// Generators created at different instants produce different
    /// sequences with overwhelming probability, but nothing guarantees it.
    pub fn new() -> Self {
        Self::from_seed(clock_seed())
    }

    /// Creates a generator initialised with `seed`.
    ///
    /// # Arguments
    ///
    /// * `seed` - 64-bit seed; equal seeds give equal output sequences
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rando_core::RandomGenerator;
    ///
    /// let rng = RandomGenerator::from_seed(7);
    /// assert_eq!(rng.seed(), 7);
    /// ```
    pub fn from_seed(seed: u64) -> Self {
        Self::with_parts(seed, Alphabet::default())
    }

    /// Creates a generator from a [`GeneratorConfig`].
    ///
    /// # Arguments
    ///
    /// * `config` - Seed source and optional alphabet override
    pub fn from_config(config: &GeneratorConfig) -> Self {
        let seed = match config.seed_source() {
            SeedSource::Clock => clock_seed(),
            SeedSource::Fixed(seed) => seed,
        };
        Self::with_parts(seed, config.alphabet())
    }

    fn with_parts(seed: u64, alphabet: Alphabet) -> Self {
        tracing::debug!(seed, alphabet_len = alphabet.len(), "random generator initialised");
        Self {
            inner: StdRng::seed_from_u64(seed),
            seed,
            alphabet,
        }
    }

    /// Returns the seed used for initialisation.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns the alphabet used by [`random_string`](Self::random_string).
    #[inline]
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Returns a string of exactly `length` characters drawn uniformly, with
    /// replacement, from the generator's alphabet.
    ///
    /// Unless configured otherwise the alphabet is
    /// [`DEFAULT_ALPHABET`](crate::DEFAULT_ALPHABET).
    ///
    /// # Arguments
    ///
    /// * `length` - Number of characters; `0` yields an empty string
    pub fn random_string(&mut self, length: usize) -> String {
        draw_string(&mut self.inner, self.alphabet.as_slice(), length)
    }

    /// Returns a string of `length` characters drawn from `alphabet`.
    ///
    /// Each position is an independent uniform draw over the symbols, so a
    /// symbol listed twice is twice as likely.
    ///
    /// # Arguments
    ///
    /// * `length` - Number of characters to draw
    /// * `alphabet` - Symbols to draw from, repeats included
    ///
    /// # Errors
    ///
    /// Returns [`RandomError::InvalidArgument`] if `alphabet` is empty,
    /// whatever `length` is.
    pub fn random_string_from_alphabet(
        &mut self,
        length: usize,
        alphabet: &[char],
    ) -> Result<String, RandomError> {
        if alphabet.is_empty() {
            return Err(RandomError::invalid_argument("alphabet must not be empty"));
        }
        Ok(draw_string(&mut self.inner, alphabet, length))
    }

    /// Same as [`random_string_from_alphabet`](Self::random_string_from_alphabet)
    /// over an already validated [`Alphabet`].
    ///
    /// # Arguments
    ///
    /// * `length` - Number of characters to draw
    /// * `alphabet` - Non-empty symbol set
    pub fn random_string_with(&mut self, length: usize, alphabet: &Alphabet) -> String {
        draw_string(&mut self.inner, alphabet.as_slice(), length)
    }

    /// Returns one element of `values` chosen uniformly at random.
    ///
    /// An empty `values` yields an empty string rather than an error.
    ///
    /// # Arguments
    ///
    /// * `values` - Candidates to choose from
    pub fn select_one<S: AsRef<str>>(&mut self, values: &[S]) -> String {
        if values.is_empty() {
            return String::new();
        }
        values[self.index(values.len())].as_ref().to_owned()
    }

    /// Returns `true` or `false` with equal probability.
    #[inline]
    pub fn random_bool(&mut self) -> bool {
        self.inner.gen()
    }

    /// Draws a deduplicated sample of at most `size` elements from `values`.
    ///
    /// Makes up to `size + 1` uniform draws with replacement, keeping each
    /// distinct value once and stopping as soon as `size` distinct values are
    /// held. Colliding draws and repeated entries in `values` can leave the
    /// result shorter than `size`; it is never empty for `size > 0`.
    /// Results keep first-draw order.
    ///
    /// # Arguments
    ///
    /// * `values` - Candidates to draw from; may contain repeats
    /// * `size` - Upper bound on the number of distinct values returned
    ///
    /// # Errors
    ///
    /// Returns [`RandomError::InvalidArgument`] if `size` is negative or
    /// greater than `values.len()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rando_core::RandomGenerator;
    ///
    /// let mut rng = RandomGenerator::from_seed(42);
    /// let values = ["a", "b", "c"];
    ///
    /// assert!(rng.sample(&values, 10).is_err());
    /// assert!(rng.sample(&values, -1).is_err());
    /// assert!(rng.sample(&values, 0).unwrap().is_empty());
    ///
    /// let picked = rng.sample(&values, 2).unwrap();
    /// assert!((1..=2).contains(&picked.len()));
    /// ```
    pub fn sample<S: AsRef<str>>(
        &mut self,
        values: &[S],
        size: isize,
    ) -> Result<Vec<String>, RandomError> {
        let requested = usize::try_from(size).map_err(|_| {
            RandomError::invalid_argument(format!("sample size {} is negative", size))
        })?;
        if requested > values.len() {
            return Err(RandomError::invalid_argument(format!(
                "sample size {} exceeds input length {}",
                requested,
                values.len()
            )));
        }
        if requested == 0 {
            return Ok(Vec::new());
        }

        let mut seen: HashSet<&str> = HashSet::with_capacity(requested);
        let mut sampled = Vec::with_capacity(requested);
        for _ in 0..=requested {
            let candidate = values[self.index(values.len())].as_ref();
            if seen.insert(candidate) {
                sampled.push(candidate.to_owned());
                if sampled.len() == requested {
                    break;
                }
            }
        }

        if sampled.len() < requested {
            tracing::trace!(
                requested,
                sampled = sampled.len(),
                "sample under-filled by colliding draws"
            );
        }
        Ok(sampled)
    }

    /// Uniform index in `0..len`. `len` must be non-zero.
    #[inline]
    fn index(&mut self, len: usize) -> usize {
        self.inner.gen_range(0..len)
    }
}

impl Default for RandomGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Nanoseconds since the Unix epoch, falling back to microseconds once the
/// nanosecond count no longer fits in an `i64`.
fn clock_seed() -> u64 {
    let now = Utc::now();
    let nanos = now
        .timestamp_nanos_opt()
        .unwrap_or_else(|| now.timestamp_micros());
    nanos as u64
}

/// `alphabet` must be non-empty.
fn draw_string(rng: &mut StdRng, alphabet: &[char], length: usize) -> String {
    (0..length)
        .map(|_| alphabet[rng.gen_range(0..alphabet.len())])
        .collect()
}
