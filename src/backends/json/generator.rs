use serde::ser::Serialize;
use serde_json::{
    ser::PrettyFormatter,
    Map,
    Serializer,
    Value,
};
use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::{
    error::CompileError,
    grammar::{Grammar, NonTerminal},
};

/// Name of the synthetic rule that every generated grammar starts with.
pub const START: &str = "start";

/// The rule that [`START`] points to unless configured otherwise.
pub const DEFAULT_ENTRYPOINT: &str = "module";

fn rule_key(name: &str) -> String {
    NonTerminal::new(name).to_string()
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

fn write_file(path: &Path, buf: &[u8]) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(buf)?;
    file.sync_all()
}

/// This is the main struct of the [`json`](crate::backends::json) backend that serializes a grammar.
pub struct JsonGenerator {
    entrypoint: String,
    indent: Vec<u8>,
}

impl JsonGenerator {
    /// Create a new JsonGenerator.
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self {
            entrypoint: DEFAULT_ENTRYPOINT.to_string(),
            indent: b" ".to_vec(),
        }
    }

    /// Let the `<start>` rule point to `entrypoint` instead of `<module>`.
    pub fn entrypoint<S: Into<String>>(mut self, entrypoint: S) -> Self {
        self.entrypoint = entrypoint.into();
        self
    }

    /// Use `indent` for every level of nesting in the output.
    pub fn indent<S: AsRef<str>>(mut self, indent: S) -> Self {
        self.indent = indent.as_ref().as_bytes().to_vec();
        self
    }

    /// Convert `grammar` into a JSON object, including the `<start>` rule.
    pub fn to_value(&self, grammar: &Grammar) -> Value {
        let mut object = Map::new();

        for rule in grammar.rules() {
            let alternatives = rule
                .alternatives()
                .iter()
                .map(|alt| Value::Array(alt.iter().map(|symbol| Value::String(symbol.render())).collect()))
                .collect();
            object.insert(rule.lhs().to_string(), Value::Array(alternatives));
        }

        // Replaces a user-defined rule of the same name in place
        let start = NonTerminal::new(self.entrypoint.as_str()).to_string();
        object.insert(rule_key(START), Value::Array(vec![Value::Array(vec![Value::String(start)])]));

        Value::Object(object)
    }

    /// Serialize `grammar` into `stream`.
    pub fn write<W: Write>(&self, stream: W, grammar: &Grammar) -> Result<(), serde_json::Error> {
        let formatter = PrettyFormatter::with_indent(&self.indent);
        let mut ser = Serializer::with_formatter(stream, formatter);
        self.to_value(grammar).serialize(&mut ser)
    }

    /// Serialize `grammar` into a string.
    pub fn to_pretty_string(&self, grammar: &Grammar) -> Result<String, serde_json::Error> {
        let mut buf = Vec::new();
        self.write(&mut buf, grammar)?;
        String::from_utf8(buf).map_err(|e| serde_json::Error::io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
    }

    /// Write `grammar` into the output file `path`.
    ///
    /// The document is written to a temporary file next to `path` first and
    /// only renamed to `path` once it is complete.
    pub fn generate<P: AsRef<Path>>(&self, path: P, grammar: &Grammar) -> Result<(), CompileError> {
        let path = path.as_ref();
        let tmp = tmp_path(path);

        let mut buf = Vec::new();
        self.write(&mut buf, grammar)
            .map_err(|e| CompileError::io(path, e.into()))?;

        if let Err(e) = write_file(&tmp, &buf).and_then(|_| fs::rename(&tmp, path)) {
            let _ = fs::remove_file(&tmp);
            return Err(CompileError::io(path, e));
        }

        Ok(())
    }
}
