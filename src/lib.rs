pub mod api;
pub mod error;
pub mod processor;
pub mod transform;
pub mod utils;
pub mod yaml;

pub use api::{analyze, TransformResult};
pub use error::{DecodeError, ParseError, PulseError};
pub use processor::{DataProcessor, WordFrequencyCounter};
pub use transform::{flatten, json_to_text, json_to_yaml};
