use std::collections::HashMap;
use std::fmt::{Display, Formatter, Result as FmtResult};

use ahash::RandomState;

use crate::grammar::GrammarBuilder;

fn enclosed_in(s: &str, start: char, end: char) -> bool {
    s.len() >= 2 && s.starts_with(start) && s.ends_with(end)
}

/// Terminals that could be read as a non-terminal or as an already quoted
/// terminal are wrapped in single quotes.
fn terminal_string(content: &str) -> String {
    if content.starts_with('<') || enclosed_in(content, '\'', '\'') {
        return format!("'{}'", content);
    }

    content.to_string()
}

/// A reference to a rule of the grammar. Renders as `<id>`.
#[derive(Debug, Clone, Eq, Hash, PartialEq)]
pub struct NonTerminal(String);

impl NonTerminal {
    /// Create a reference to the rule named `s` (without brackets).
    pub fn new<S: Into<String>>(s: S) -> Self {
        Self(s.into())
    }

    /// The bare name of the rule.
    pub fn id(&self) -> &str {
        &self.0
    }
}

impl Display for NonTerminal {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        write!(f, "<{}>", self.0)
    }
}

/// A literal string. Renders verbatim.
#[derive(Debug, Clone, Eq, Hash, PartialEq)]
pub struct Terminal(String);

impl Terminal {
    /// Create a literal with content `s`.
    pub fn new<S: Into<String>>(s: S) -> Self {
        Self(s.into())
    }

    /// The literal content.
    pub fn content(&self) -> &str {
        &self.0
    }
}

/// A single element of an [`Alternative`].
#[derive(Debug, Clone, Eq, Hash, PartialEq)]
pub enum Symbol {
    /// A literal, either quoted in the source or sampled from a regex
    Terminal(Terminal),

    /// A reference to another rule
    NonTerminal(NonTerminal),
}

impl Symbol {
    /// Shorthand for a terminal symbol.
    pub fn terminal<S: Into<String>>(s: S) -> Self {
        Symbol::Terminal(Terminal::new(s))
    }

    /// Shorthand for a non-terminal symbol.
    pub fn non_terminal<S: Into<String>>(s: S) -> Self {
        Symbol::NonTerminal(NonTerminal::new(s))
    }

    /// The string this symbol is serialized as.
    /// Terminals never start with `<` in their rendered form.
    pub fn render(&self) -> String {
        match self {
            Symbol::Terminal(term) => terminal_string(term.content()),
            Symbol::NonTerminal(nonterm) => nonterm.to_string(),
        }
    }
}

/// One production of a rule: an ordered sequence of symbols.
pub type Alternative = Vec<Symbol>;

/// A named rule with all of its alternatives.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Rule {
    lhs: NonTerminal,
    alternatives: Vec<Alternative>,
}

impl Rule {
    /// The left-hand-side of this rule.
    pub fn lhs(&self) -> &NonTerminal {
        &self.lhs
    }

    /// All alternatives in the order they were added.
    pub fn alternatives(&self) -> &[Alternative] {
        &self.alternatives
    }
}

/// A context-free grammar that maps rule names to their alternatives.
///
/// Rules keep the order in which they were first declared.
/// Repeated declarations of the same name accumulate alternatives
/// under the existing rule.
#[derive(Debug, Clone, Default)]
pub struct Grammar {
    rules: Vec<Rule>,
    index: HashMap<String, usize, RandomState>,
}

impl Grammar {
    /// Create an empty grammar.
    pub fn new() -> Self {
        Self::default()
    }

    /// Compile grammars from text into a new grammar.
    pub fn builder() -> GrammarBuilder {
        GrammarBuilder::new()
    }

    /// Make sure a rule named `name` exists. Returns its position.
    pub fn declare(&mut self, name: &str) -> usize {
        if let Some(idx) = self.index.get(name) {
            return *idx;
        }

        let idx = self.rules.len();
        self.rules.push(Rule {
            lhs: NonTerminal::new(name),
            alternatives: Vec::new(),
        });
        self.index.insert(name.to_string(), idx);
        idx
    }

    /// Get the alternatives of `name`, creating an empty rule if it does not exist yet.
    pub fn alternatives_mut(&mut self, name: &str) -> &mut Vec<Alternative> {
        let idx = self.declare(name);
        &mut self.rules[idx].alternatives
    }

    /// Get the alternatives of `name` if such a rule exists.
    pub fn alternatives(&self, name: &str) -> Option<&[Alternative]> {
        self.index.get(name).map(|idx| self.rules[*idx].alternatives())
    }

    /// All rules in declaration order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the grammar has no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Total number of alternatives across all rules.
    pub fn alternative_count(&self) -> usize {
        self.rules.iter().map(|rule| rule.alternatives.len()).sum()
    }
}

impl Display for Grammar {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        for rule in &self.rules {
            let alternatives = rule
                .alternatives
                .iter()
                .map(|alt| alt.iter().map(Symbol::render).collect::<Vec<_>>())
                .collect::<Vec<_>>();
            writeln!(f, "{} = {:?}", rule.lhs, alternatives)?;
        }

        Ok(())
    }
}
