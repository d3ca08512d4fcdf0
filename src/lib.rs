//! This library compiles grammars written in a small line-oriented text format
//! into context-free grammars in JSON format.
//!
//! It consists of
//! - __frontend__: Compile text grammars. Every line is a rule `label: token token ...` where
//!   a token is either a non-terminal (`name`), a literal (`"text"`) or a regular expression (`r[0-9]+`)
//!   that gets replaced by strings matching it.
//! - __backend__: Write the compiled grammar as JSON, with a synthetic `<start>` rule.
//!
//! ## Getting Started
//! The first step always is to compile grammars. To do this use the [`Grammar::builder()`](grammar::Grammar::builder) method
//! that will give you access to a [`GrammarBuilder`](grammar::GrammarBuilder) like this:
//! ```
//! let grammar = Grammar::builder()
//!     // Choose how regex tokens are handled
//!     .mode(Mode::MultiSample)
//!     // Make the sampled strings reproducible
//!     .sampler(RegexSampler::seeded(1234))
//!     .text_grammar("grammar.txt").unwrap()
//!     .build();
//! ```
//! Then, hand the grammar to the JSON backend:
//! ```
//! backends::json::JsonGenerator::new().generate("grammar.json", &grammar).unwrap();
//! ```
//! And that's it.

#![deny(missing_docs)]

pub(crate) mod parser;

pub mod error;
pub mod grammar;
pub mod sampler;
pub mod backends;
