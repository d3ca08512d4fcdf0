use crate::{
    error::PatternError,
    grammar::{Mode, Symbol, Terminal},
    sampler::PatternSampler,
};

/// Tokens starting with this character are regular expressions.
pub(crate) const REGEX_MARKER: char = 'r';

const QUOTE: char = '"';

/// The result of rewriting a single token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Transformed {
    Symbol(Symbol),

    /// Multiple literals sampled from one regex
    FanOut(Vec<Terminal>),
}

/// Classifies raw tokens and rewrites them into symbols.
pub(crate) struct TokenTransformer<'a> {
    mode: Mode,
    samples: usize,
    sampler: &'a mut dyn PatternSampler,
}

impl<'a> TokenTransformer<'a> {
    pub(crate) fn new(mode: Mode, samples: usize, sampler: &'a mut dyn PatternSampler) -> Self {
        Self {
            mode,
            samples,
            sampler,
        }
    }

    pub(crate) fn transform(&mut self, token: &str) -> Result<Transformed, PatternError> {
        let token = token.trim_end_matches(['\r', '\n']);

        if token.is_empty() {
            return Ok(Transformed::Symbol(Symbol::terminal("")));
        }

        if let Some(pattern) = token.strip_prefix(REGEX_MARKER) {
            match self.mode {
                Mode::Plain => {},
                Mode::SingleSample => return self.single_sample(pattern).map(Transformed::Symbol),
                Mode::MultiSample => return self.multi_sample(pattern).map(Transformed::FanOut),
            }
        }

        if !token.starts_with(QUOTE) {
            return Ok(Transformed::Symbol(Symbol::non_terminal(token)));
        }

        let literal = token.strip_prefix(QUOTE).unwrap_or(token);
        let literal = literal.strip_suffix(QUOTE).unwrap_or(literal);
        Ok(Transformed::Symbol(Symbol::terminal(literal)))
    }

    fn single_sample(&mut self, pattern: &str) -> Result<Symbol, PatternError> {
        let sample = match self.sampler.sample(pattern, 1)?.into_iter().next() {
            Some(sample) => sample,
            None => return Err(PatternError::new(pattern, "sampler returned no strings")),
        };
        let sample = sample.strip_prefix(REGEX_MARKER).unwrap_or(&sample);

        Ok(Symbol::terminal(sample))
    }

    fn multi_sample(&mut self, pattern: &str) -> Result<Vec<Terminal>, PatternError> {
        let samples = self.sampler.sample(pattern, self.samples)?;

        Ok(samples
            .iter()
            .map(|sample| {
                // Only the last position is checked for a leaked marker
                let sample = sample.strip_suffix(REGEX_MARKER).unwrap_or(sample);
                Terminal::new(sample.trim_matches(QUOTE))
            })
            .collect())
    }
}
