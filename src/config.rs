//! Loading of [FormatOptions] from JSON files.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde_json::from_reader;
use tracing::debug;

use crate::error::ConfigError;
use crate::options::FormatOptions;

/// Reads a JSON-encoded type from a given file `path`.
pub fn read_json<D: DeserializeOwned>(path: impl AsRef<Path>) -> Result<D, ConfigError> {
    let file = File::open(path)?;
    Ok(from_reader(BufReader::new(file))?)
}

pub trait FromJsonFile: Sized {
    fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError>;
}

impl<D: DeserializeOwned> FromJsonFile for D {
    fn from_json_file(path: impl AsRef<Path>) -> Result<D, ConfigError> {
        read_json(path)
    }
}

/// Reads formatting options from `path`. Fields absent from the file take their defaults and
/// unknown fields are ignored, so `{}` is a valid configuration.
pub fn read_options(path: impl AsRef<Path>) -> Result<FormatOptions, ConfigError> {
    let path = path.as_ref();
    let options = FormatOptions::from_json_file(path)?;
    debug!("loaded {options:?} from {}", path.display());
    Ok(options)
}
