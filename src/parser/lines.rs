use crate::error::CompileError;

/// Separates the label of a rule from its body.
pub(crate) const SEPARATOR: &str = ": ";

/// One line of the source split into its label and raw tokens.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct RawRule<'a> {
    pub(crate) label: &'a str,
    pub(crate) tokens: Vec<&'a str>,
}

fn parse_line(line: usize, content: &str) -> Result<RawRule<'_>, CompileError> {
    let (label, body) = match content.split_once(SEPARATOR) {
        Some((label, body)) if !label.trim().is_empty() => (label, body),
        _ => {
            return Err(CompileError::MalformedRule {
                line,
                content: content.trim_end_matches(['\r', '\n']).to_string(),
            });
        },
    };

    Ok(RawRule {
        label: label.trim(),
        // Empty tokens from doubled or trailing separators are kept
        tokens: body.split(' ').collect(),
    })
}

/// Lazily split `source` into rules. Stops being useful at the first error,
/// callers are expected to abort.
pub(crate) fn parse_lines(source: &str) -> impl Iterator<Item = Result<RawRule<'_>, CompileError>> {
    source.split_inclusive('\n').enumerate().map(|(idx, content)| parse_line(idx + 1, content))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split() {
        let rules = parse_lines("foo: bar \"baz\"\n  qux : bar\n").collect::<Result<Vec<_>, _>>().unwrap();
        assert_eq!(rules.len(), 2);
        assert_eq!(rules[0].label, "foo");
        assert_eq!(rules[0].tokens, vec!["bar", "\"baz\"\n"]);
        assert_eq!(rules[1].label, "qux");
        assert_eq!(rules[1].tokens, vec!["bar\n"]);
    }

    #[test]
    fn test_first_separator_wins() {
        let rule = parse_line(1, "a: b: c").unwrap();
        assert_eq!(rule.label, "a");
        assert_eq!(rule.tokens, vec!["b:", "c"]);
    }

    #[test]
    fn test_empty_tokens() {
        let rule = parse_line(1, "a: b  c ").unwrap();
        assert_eq!(rule.tokens, vec!["b", "", "c", ""]);
    }

    #[test]
    fn test_missing_separator() {
        let mut lines = parse_lines("foo: bar\nfoo bar\nqux: x\n");
        assert!(lines.next().unwrap().is_ok());

        match lines.next().unwrap() {
            Err(CompileError::MalformedRule { line, content }) => {
                assert_eq!(line, 2);
                assert_eq!(content, "foo bar");
            },
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_empty_label() {
        assert!(parse_line(1, " : foo").is_err());
    }

    #[test]
    fn test_blank_line_is_malformed() {
        assert!(parse_lines("foo: bar\n\nqux: x\n").any(|r| r.is_err()));
    }

    #[test]
    fn test_no_trailing_newline() {
        let rules = parse_lines("foo: bar").collect::<Result<Vec<_>, _>>().unwrap();
        assert_eq!(rules[0].tokens, vec!["bar"]);
    }
}
