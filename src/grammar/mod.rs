//! The grammar model and the frontend that compiles text grammars into it.
//!
//! Use it like so:
//! ```
//! // Compile one or more grammar files into a single grammar
//! let grammar = Grammar::builder()
//!     // Expand regex tokens into multiple alternatives
//!     .mode(Mode::MultiSample)
//!     .text_grammar("grammar.txt").unwrap()
//!     .build();
//! ```
//! You can inspect the grammar contents like this:
//! ```
//! for rule in grammar.rules() {
//!     println!("lhs = {}", rule.lhs());
//!
//!     // Every alternative is a sequence of terminals and non-terminals
//!     for alternative in rule.alternatives() {
//!         for symbol in alternative {
//!             match symbol {
//!                 Symbol::Terminal(terminal) => println!("terminal: {:?}", terminal.content()),
//!                 Symbol::NonTerminal(nonterminal) => println!("non-terminal {}", nonterminal.id()),
//!             }
//!         }
//!     }
//! }
//! ```

mod assembler;
mod builder;
mod cfg;

pub use builder::*;
pub use cfg::*;
