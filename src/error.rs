use miette::{Diagnostic, NamedSource, SourceSpan};
use std::path::PathBuf;
use std::str::Utf8Error;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum PulseError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Parse(#[from] ParseError),

    #[error("Failed to encode YAML")]
    #[diagnostic(
        code(transform::yaml_encoding),
        help("The decoded JSON value could not be written as YAML.")
    )]
    Yaml(#[from] yaml_rust2::EmitError),

    #[error("Failed to read {}", .path.display())]
    #[diagnostic(code(io::read))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A chunk handed to the counter as raw bytes was not valid UTF-8.
/// Nothing from the chunk has been counted when this is returned.
#[derive(Error, Debug, Diagnostic, Clone, PartialEq, Eq)]
#[error("Chunk is not valid UTF-8 (valid up to byte {valid_up_to})")]
#[diagnostic(
    code(processor::invalid_utf8),
    help("Decode the input to text before feeding it, or fix the byte sequence at the reported offset.")
)]
pub struct DecodeError {
    pub valid_up_to: usize,
    #[source]
    source: Utf8Error,
}

impl From<Utf8Error> for DecodeError {
    fn from(source: Utf8Error) -> Self {
        DecodeError {
            valid_up_to: source.valid_up_to(),
            source,
        }
    }
}

#[derive(Error, Debug, Diagnostic, Clone)]
pub enum ParseError {
    #[error("Malformed JSON: {reason}")]
    #[diagnostic(
        code(transform::malformed_json),
        help("The input must be a single, complete JSON document.")
    )]
    MalformedJson {
        #[source_code]
        src: NamedSource<String>,
        #[label("{reason}")]
        span: SourceSpan,
        reason: String,
    },
}

impl ParseError {
    /// Builds a `MalformedJson` diagnostic from a `serde_json` failure,
    /// pointing the label at the line and column the decoder reported.
    pub(crate) fn from_json(name: &str, input: &[u8], err: &serde_json::Error) -> Self {
        let source = String::from_utf8_lossy(input).into_owned();
        let offset = crate::utils::offset_of(&source, err.line(), err.column());
        let len = source[offset..].chars().next().map_or(0, char::len_utf8);
        ParseError::MalformedJson {
            src: NamedSource::new(name, source),
            span: (offset, len).into(),
            reason: err.to_string(),
        }
    }
}
