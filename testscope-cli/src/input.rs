//! Standard-input acquisition for `testscope select`.
//!
//! The whole stream is read in one blocking call. An interactive terminal counts as "no input".

use std::io::{self, IsTerminal, Read};
use testscope_types::ChangeSet;
use thiserror::Error;
use tracing::debug;

/// Upper bound on accepted input (16 MiB).
pub const MAX_INPUT_BYTES: u64 = 16 * 1024 * 1024;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("read input: {0}")]
    Read(#[from] io::Error),

    #[error("input exceeds {limit} bytes")]
    TooLarge { limit: u64 },

    #[error("input is not a JSON array of strings: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Read all of stdin, or nothing when a terminal is attached.
pub fn read_stdin() -> Result<String, InputError> {
    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    read_input(stdin.lock(), interactive, MAX_INPUT_BYTES)
}

/// Read `reader` to the end as UTF-8, refusing more than `limit` bytes.
pub fn read_input<R: Read>(reader: R, interactive: bool, limit: u64) -> Result<String, InputError> {
    if interactive {
        debug!("stdin is a terminal; treating as empty input");
        return Ok(String::new());
    }

    let mut text = String::new();
    reader.take(limit + 1).read_to_string(&mut text)?;
    if text.len() as u64 > limit {
        return Err(InputError::TooLarge { limit });
    }
    debug!(bytes = text.len(), "read input");
    Ok(text)
}

/// Parse input text into a change set.
///
/// Blank text is an empty change set. Anything else must be a JSON array of strings; there is no
/// fallback to a partial or default set.
pub fn parse_change_set(text: &str) -> Result<ChangeSet, InputError> {
    if text.trim().is_empty() {
        return Ok(ChangeSet::default());
    }
    Ok(serde_json::from_str(text)?)
}
