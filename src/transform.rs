//! Stateless conversions of JSON documents into dotted-key text and YAML.

use crate::api::analyze;
use crate::error::PulseError;
use serde_json::Value;

const INPUT_NAME: &str = "input.json";

/// Converts a JSON document into one `path: value` line per leaf value.
///
/// Nested object keys are joined with `.` and array elements are addressed as
/// `path[index]`:
///
/// ```
/// let text = stream_pulse::json_to_text(br#"{"person": {"tags": ["a", "b"]}}"#).unwrap();
/// assert_eq!(text, "person.tags[0]: a\nperson.tags[1]: b\n");
/// ```
///
/// # Errors
///
/// Returns `PulseError::Parse` if the input is not valid JSON.
pub fn json_to_text(json: &[u8]) -> Result<String, PulseError> {
    Ok(analyze(json, INPUT_NAME)?.to_text())
}

/// Converts a JSON document into YAML.
///
/// # Errors
///
/// Returns `PulseError::Parse` if the input is not valid JSON, or
/// `PulseError::Yaml` if the decoded value cannot be written as YAML.
pub fn json_to_yaml(json: &[u8]) -> Result<String, PulseError> {
    Ok(analyze(json, INPUT_NAME)?.to_yaml()?)
}

/// Flattens a value tree into `(path, value)` pairs, one per leaf.
///
/// Empty objects and arrays have no leaves and contribute nothing. A scalar
/// root yields a single pair with an empty path.
#[must_use]
pub fn flatten(value: &Value) -> Vec<(String, String)> {
    let mut leaves = Vec::new();
    flatten_into(value, String::new(), &mut leaves);
    leaves
}

fn flatten_into(value: &Value, path: String, leaves: &mut Vec<(String, String)>) {
    match value {
        Value::Object(members) => {
            for (key, member) in members {
                let child = if path.is_empty() {
                    key.clone()
                } else {
                    format!("{path}.{key}")
                };
                flatten_into(member, child, leaves);
            }
        }
        Value::Array(elements) => {
            for (index, element) in elements.iter().enumerate() {
                flatten_into(element, format!("{path}[{index}]"), leaves);
            }
        }
        Value::String(s) => leaves.push((path, s.clone())),
        Value::Number(n) => leaves.push((path, n.to_string())),
        Value::Bool(b) => leaves.push((path, b.to_string())),
        Value::Null => leaves.push((path, "null".to_string())),
    }
}
