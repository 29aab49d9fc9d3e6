use crate::error::{ParseError, PulseError};
use crate::transform::flatten;
use crate::yaml;
use serde::{Serialize, Serializer};
use serde_json::Value;
use yaml_rust2::EmitError;

/// A decoded JSON document, ready to be rendered in any of the supported
/// output shapes. Parsing happens once in [`analyze`]; each rendering walks
/// the same value tree.
#[derive(Debug, Clone, PartialEq)]
pub struct TransformResult {
    pub name: String,
    pub value: Value,
}

impl Serialize for TransformResult {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.value.serialize(serializer)
    }
}

impl TransformResult {
    /// The `(path, value)` pairs of every leaf in the document.
    #[must_use]
    pub fn flatten(&self) -> Vec<(String, String)> {
        flatten(&self.value)
    }

    /// Renders the document as one `path: value` line per leaf.
    #[must_use]
    pub fn to_text(&self) -> String {
        let mut text = String::new();
        for (path, value) in self.flatten() {
            if path.is_empty() {
                text.push_str(&value);
            } else {
                text.push_str(&path);
                text.push_str(": ");
                text.push_str(&value);
            }
            text.push('\n');
        }
        text
    }

    /// Serializes the document into a YAML string with 2-space indentation.
    ///
    /// # Errors
    /// Returns an `EmitError` if the YAML emitter fails.
    pub fn to_yaml(&self) -> Result<String, EmitError> {
        yaml::to_string(&self.value)
    }

    /// Serializes the document into a pretty-printed JSON string.
    ///
    /// # Errors
    /// Returns a `serde_json::Error` if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self)
    }
}

/// Decodes a JSON document.
///
/// `name` identifies the input in error reports (a file name, or something
/// like `"<stdin>"`).
///
/// # Errors
///
/// Returns `PulseError::Parse` if `input` is not a single valid JSON document.
pub fn analyze(input: &[u8], name: &str) -> Result<TransformResult, PulseError> {
    log::debug!("decoding {} bytes of JSON from {name}", input.len());

    let value: Value =
        serde_json::from_slice(input).map_err(|err| ParseError::from_json(name, input, &err))?;

    Ok(TransformResult {
        name: name.to_string(),
        value,
    })
}
