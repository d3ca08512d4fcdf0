use itertools::Itertools;

use crate::{
    grammar::{Alternative, Symbol, Terminal},
    parser::tokens::Transformed,
};

/// A newline written as two characters in the source.
const ESCAPED_NEWLINE: &str = "\\n";

/// Interleave single spaces between the symbols of a multi-symbol alternative
/// and turn escaped newlines in terminals into real ones.
fn add_spacing(symbols: Alternative) -> Alternative {
    if symbols.len() <= 1 {
        return symbols;
    }

    let symbols = symbols.into_iter().map(|symbol| match symbol {
        Symbol::Terminal(term) if term.content().contains(ESCAPED_NEWLINE) => {
            Symbol::terminal(term.content().replace(ESCAPED_NEWLINE, "\n"))
        },
        symbol => symbol,
    });

    itertools::intersperse(symbols, Symbol::terminal(" ")).collect()
}

/// Turn the transformed tokens of one source line into alternatives.
///
/// Without regex fan-out this is a single alternative holding all symbols.
/// If any token fanned out, every sample of every fan-out token becomes
/// its own one-symbol alternative and the remaining tokens of the line are dropped.
pub(crate) fn assemble(tokens: Vec<Transformed>, spacing: bool) -> Vec<Alternative> {
    let (symbols, samples): (Vec<_>, Vec<_>) = tokens.into_iter().partition_map(|token| match token {
        Transformed::Symbol(symbol) => itertools::Either::Left(symbol),
        Transformed::FanOut(samples) => itertools::Either::Right(samples),
    });

    if !samples.is_empty() {
        return samples
            .into_iter()
            .flatten()
            .map(|sample: Terminal| vec![Symbol::Terminal(sample)])
            .collect();
    }

    if spacing {
        vec![add_spacing(symbols)]
    } else {
        vec![symbols]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sym(s: Symbol) -> Transformed {
        Transformed::Symbol(s)
    }

    fn fan_out(samples: &[&str]) -> Transformed {
        Transformed::FanOut(samples.iter().map(|s| Terminal::new(*s)).collect())
    }

    #[test]
    fn test_single_alternative() {
        let tokens = vec![sym(Symbol::non_terminal("bar")), sym(Symbol::terminal("baz"))];
        assert_eq!(
            assemble(tokens, false),
            vec![vec![Symbol::non_terminal("bar"), Symbol::terminal("baz")]]
        );
    }

    #[test]
    fn test_spacing() {
        let tokens = vec![
            sym(Symbol::non_terminal("bar")),
            sym(Symbol::terminal("\\n")),
            sym(Symbol::terminal("baz")),
        ];
        assert_eq!(
            assemble(tokens, true),
            vec![vec![
                Symbol::non_terminal("bar"),
                Symbol::terminal(" "),
                Symbol::terminal("\n"),
                Symbol::terminal(" "),
                Symbol::terminal("baz"),
            ]]
        );
    }

    #[test]
    fn test_spacing_single_symbol() {
        let tokens = vec![sym(Symbol::terminal("\\n"))];
        assert_eq!(assemble(tokens, true), vec![vec![Symbol::terminal("\\n")]]);
    }

    #[test]
    fn test_spacing_keeps_nonterminals() {
        let tokens = vec![sym(Symbol::non_terminal("\\n")), sym(Symbol::non_terminal("x"))];
        assert_eq!(
            assemble(tokens, true),
            vec![vec![Symbol::non_terminal("\\n"), Symbol::terminal(" "), Symbol::non_terminal("x")]]
        );
    }

    #[test]
    fn test_fan_out_collapses_line() {
        let tokens = vec![
            sym(Symbol::non_terminal("bar")),
            fan_out(&["1", "2"]),
            sym(Symbol::terminal("baz")),
            fan_out(&["a", "b", "c"]),
        ];
        let expected = ["1", "2", "a", "b", "c"]
            .iter()
            .map(|s| vec![Symbol::terminal(*s)])
            .collect::<Vec<_>>();

        assert_eq!(assemble(tokens.clone(), false), expected);
        assert_eq!(assemble(tokens, true), expected);
    }
}
