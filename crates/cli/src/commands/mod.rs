//! Command implementations.
//!
//! Commands write to a caller-supplied writer so they can be exercised in
//! tests without touching stdout.

pub mod format;
pub mod resolve;

use std::io::Read;

use serde::de::DeserializeOwned;

use crate::error::CliError;

/// Path argument meaning "read from stdin".
pub const STDIN_PATH: &str = "-";

/// Read a JSON document from a file, or from stdin when `path` is `-`.
fn read_json<T: DeserializeOwned>(path: &str) -> Result<T, CliError> {
    let content = if path == STDIN_PATH {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(|source| CliError::Read {
                path: path.to_owned(),
                source,
            })?;
        buf
    } else {
        std::fs::read_to_string(path).map_err(|source| CliError::Read {
            path: path.to_owned(),
            source,
        })?
    };

    parse_json(path, &content)
}

fn parse_json<T: DeserializeOwned>(path: &str, content: &str) -> Result<T, CliError> {
    serde_json::from_str(content).map_err(|source| CliError::Json {
        path: path.to_owned(),
        source,
    })
}
