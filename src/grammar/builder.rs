use std::path::Path;

use crate::{
    error::CompileError,
    grammar::{assembler, Grammar},
    parser::{lines, tokens::TokenTransformer},
    sampler::{PatternSampler, RegexSampler},
};

/// The default number of strings a regex token fans out into.
pub const DEFAULT_SAMPLES: usize = 15;

/// How tokens that start with the regex marker `r` are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// No regex support. Such tokens are ordinary non-terminals.
    #[default]
    Plain,

    /// Replace the token with exactly one matching string.
    SingleSample,

    /// Replace the token with several matching strings, each becoming its own alternative.
    MultiSample,
}

/// The GrammarBuilder compiles grammars in text format and accumulates their rules
/// into a single [`Grammar`].
///
/// Use it like so:
/// ```
/// let grammar = Grammar::builder()
///     .mode(Mode::MultiSample)
///     .sampler(RegexSampler::seeded(1234))
///     .text_grammar("grammar.txt").unwrap()
///     .build();
/// ```
pub struct GrammarBuilder {
    grammar: Grammar,
    mode: Mode,
    spacing: bool,
    samples: usize,
    sampler: Box<dyn PatternSampler>,
}

impl GrammarBuilder {
    pub(crate) fn new() -> Self {
        Self {
            grammar: Grammar::new(),
            mode: Mode::default(),
            spacing: false,
            samples: DEFAULT_SAMPLES,
            sampler: Box::new(RegexSampler::from_entropy()),
        }
    }

    fn compile(&mut self, source: &str) -> Result<(), CompileError> {
        let mut transformer = TokenTransformer::new(self.mode, self.samples, &mut self.sampler);

        for rule in lines::parse_lines(source) {
            let rule = rule?;
            let mut tokens = Vec::with_capacity(rule.tokens.len());

            for token in &rule.tokens {
                tokens.push(transformer.transform(token)?);
            }

            let alternatives = self.grammar.alternatives_mut(rule.label);
            alternatives.extend(assembler::assemble(tokens, self.spacing));
        }

        Ok(())
    }
}

impl GrammarBuilder {
    /// Load a grammar in text format from disk.
    ///
    /// Every line has the form `label: token token ...`.
    /// Rules of previously loaded grammars are kept, rules with the same label accumulate.
    pub fn text_grammar<P: AsRef<Path>>(self, path: P) -> Result<Self, CompileError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| CompileError::io(path, e))?;
        self.text_source(&source)
    }

    /// Like [`text_grammar`](Self::text_grammar) but with the grammar in memory.
    pub fn text_source(mut self, source: &str) -> Result<Self, CompileError> {
        self.compile(source)?;
        Ok(self)
    }

    /// Set how regex tokens are handled.
    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Separate the symbols of every alternative by a literal space and
    /// replace escaped newlines in terminals with real ones.
    pub fn spacing(mut self, spacing: bool) -> Self {
        self.spacing = spacing;
        self
    }

    /// Set how many strings a regex token expands to in [`Mode::MultiSample`].
    /// At least one string is always generated.
    pub fn samples(mut self, samples: usize) -> Self {
        self.samples = samples.max(1);
        self
    }

    /// Use `sampler` to materialize regex tokens.
    pub fn sampler<S: PatternSampler + 'static>(mut self, sampler: S) -> Self {
        self.sampler = Box::new(sampler);
        self
    }

    /// Return the compiled [`Grammar`].
    pub fn build(self) -> Grammar {
        self.grammar
    }
}
