//! YAML rendering of decoded JSON values.
//!
//! Nested mappings and sequences are indented two spaces under their parent key,
//! and strings that would read back as another type (`"10001"`, `"true"`) are
//! double-quoted.

use serde_json::Value;
use yaml_rust2::yaml::Hash;
use yaml_rust2::{EmitError, Yaml, YamlEmitter};

/// Converts a JSON value tree into the equivalent YAML node tree.
#[must_use]
pub fn to_yaml_node(value: &Value) -> Yaml {
    match value {
        Value::Null => Yaml::Null,
        Value::Bool(b) => Yaml::Boolean(*b),
        Value::Number(n) => match n.as_i64() {
            Some(i) => Yaml::Integer(i),
            None => Yaml::Real(n.to_string()),
        },
        Value::String(s) => Yaml::String(s.clone()),
        Value::Array(elements) => Yaml::Array(elements.iter().map(to_yaml_node).collect()),
        Value::Object(members) => {
            let mut hash = Hash::new();
            for (key, member) in members {
                hash.insert(Yaml::String(key.clone()), to_yaml_node(member));
            }
            Yaml::Hash(hash)
        }
    }
}

/// Writes a JSON value tree as a YAML document, without the leading `---`
/// marker and with a trailing newline.
///
/// # Errors
/// Returns an `EmitError` if the emitter fails to write the document.
pub fn to_string(value: &Value) -> Result<String, EmitError> {
    let mut out = String::new();
    YamlEmitter::new(&mut out).dump(&to_yaml_node(value))?;

    let body = out.strip_prefix("---").unwrap_or(&out);
    let body = body
        .strip_prefix('\n')
        .or_else(|| body.strip_prefix(' '))
        .unwrap_or(body);

    let mut yaml = String::with_capacity(body.len() + 1);
    yaml.push_str(body);
    yaml.push('\n');
    Ok(yaml)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_sequence_indented_under_key() {
        let yaml = to_string(&json!({ "tags": ["a", "b"] })).unwrap();
        assert_eq!(yaml, "tags:\n  - a\n  - b\n");
    }

    #[test]
    fn test_numeric_string_double_quoted() {
        let yaml = to_string(&json!({ "zipcode": "10001", "n": 10001 })).unwrap();
        assert_eq!(yaml, "n: 10001\nzipcode: \"10001\"\n");
    }

    #[test]
    fn test_number_kinds() {
        assert_eq!(to_yaml_node(&json!(30)), Yaml::Integer(30));
        assert_eq!(to_yaml_node(&json!(1.5)), Yaml::Real("1.5".to_string()));
        assert_eq!(
            to_yaml_node(&json!(u64::MAX)),
            Yaml::Real(u64::MAX.to_string())
        );
    }

    #[test]
    fn test_scalar_root() {
        assert_eq!(to_string(&json!("hello")).unwrap(), "hello\n");
    }
}
