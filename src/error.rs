//! Errors that can appear while compiling a grammar.

use std::path::PathBuf;
use thiserror::Error;

/// The regex sampler could not produce a string for a pattern.
#[derive(Debug, Error)]
pub struct PatternError {
    pattern: String,
    reason: String,
}

impl PatternError {
    /// Create a new PatternError for `pattern`.
    pub fn new<S1: Into<String>, S2: Into<String>>(pattern: S1, reason: S2) -> Self {
        Self {
            pattern: pattern.into(),
            reason: reason.into(),
        }
    }

    /// The pattern that failed.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Why it failed.
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

impl std::fmt::Display for PatternError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Cannot generate a string for pattern '{}': {}", self.pattern, self.reason)
    }
}

/// Every fatal condition of a conversion run.
#[derive(Debug, Error)]
pub enum CompileError {
    /// A line lacks the `": "` separator between label and body
    #[error("Line {line} is not a rule (missing ': '): {content:?}")]
    MalformedRule {
        /// 1-based line number inside the source
        line: usize,

        /// The offending line
        content: String,
    },

    /// A regex token could not be materialized
    #[error(transparent)]
    PatternGeneration(#[from] PatternError),

    /// Reading the grammar or writing the output failed
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// The file that was accessed
        path: PathBuf,

        /// The underlying error
        source: std::io::Error,
    },
}

impl CompileError {
    pub(crate) fn io<P: Into<PathBuf>>(path: P, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = CompileError::MalformedRule {
            line: 3,
            content: "foo bar".to_string(),
        };
        assert_eq!(err.to_string(), "Line 3 is not a rule (missing ': '): \"foo bar\"");

        let err = CompileError::from(PatternError::new("a\\b", "anchors are not supported"));
        assert_eq!(err.to_string(), "Cannot generate a string for pattern 'a\\b': anchors are not supported");

        let err = CompileError::io("grammar.txt", std::io::Error::from(std::io::ErrorKind::NotFound));
        assert!(err.to_string().starts_with("I/O error on grammar.txt: "));
    }
}
