//! Materialize regular expressions into concrete strings.
//!
//! The compiler never generates strings itself. It asks a [`PatternSampler`]
//! for them, which makes the randomness injectable:
//! ```
//! // Reproducible output
//! let sampler = RegexSampler::seeded(1234);
//! // Fresh output on every run
//! let sampler = RegexSampler::from_entropy();
//! ```

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::error::PatternError;

/// Default upper bound for unbounded repetitions like `*` and `+`.
pub const DEFAULT_MAX_REPEAT: u32 = 10;

/// Something that can produce strings matching a regular expression.
pub trait PatternSampler {
    /// Generate `count` independent strings that match `pattern`.
    fn sample(&mut self, pattern: &str, count: usize) -> Result<Vec<String>, PatternError>;
}

impl<T: PatternSampler + ?Sized> PatternSampler for Box<T> {
    fn sample(&mut self, pattern: &str, count: usize) -> Result<Vec<String>, PatternError> {
        (**self).sample(pattern, count)
    }
}

/// A [`PatternSampler`] backed by [`rand_regex`].
pub struct RegexSampler<R: Rng = StdRng> {
    rng: R,
    max_repeat: u32,
}

impl RegexSampler<StdRng> {
    /// Create a sampler whose output differs from run to run.
    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Create a sampler that always produces the same sequence of strings.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RegexSampler<R> {
    /// Create a sampler that draws randomness from `rng`.
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng,
            max_repeat: DEFAULT_MAX_REPEAT,
        }
    }

    /// Set the maximum number of repetitions for `*`, `+` and open ranges.
    pub fn max_repeat(mut self, max_repeat: u32) -> Self {
        self.max_repeat = max_repeat;
        self
    }
}

impl<R: Rng> PatternSampler for RegexSampler<R> {
    fn sample(&mut self, pattern: &str, count: usize) -> Result<Vec<String>, PatternError> {
        let regex = rand_regex::Regex::compile(pattern, self.max_repeat)
            .map_err(|e| PatternError::new(pattern, e.to_string()))?;
        let mut samples = Vec::with_capacity(count);

        for _ in 0..count {
            let bytes: Vec<u8> = self.rng.sample(&regex);
            let sample = String::from_utf8(bytes).map_err(|_| PatternError::new(pattern, "generated string is not valid UTF-8"))?;
            samples.push(sample);
        }

        Ok(samples)
    }
}
