//! Serialize a compiled grammar into a JSON document.
//!
//! Use it like so:
//! ```
//! // First, compile a grammar from disk
//! let grammar = Grammar::builder()
//!     .text_grammar("grammar.txt").unwrap()
//!     .build();
//!
//! // Then, write it out. A `<start>` rule pointing at `<module>` is added automatically.
//! JsonGenerator::new().generate("grammar.json", &grammar).unwrap();
//! ```

mod generator;

pub use generator::{JsonGenerator, DEFAULT_ENTRYPOINT, START};
