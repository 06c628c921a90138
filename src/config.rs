use serde::{Deserialize, Serialize};
use std::{fs::File, io::BufReader, path::Path};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

use crate::{Error, InternalResult};

/// Knobs for [`crate::analysis::analyze_source`] and the CLI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Attach the token list to the report.
    #[serde(default = "default_true")]
    pub include_tokens: bool,

    /// Reject sources longer than this many bytes.
    #[serde(default)]
    pub max_input_bytes: Option<usize>,

    /// Pretty-print JSON output.
    #[serde(default = "default_true")]
    pub pretty: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            include_tokens: default_true(),
            max_input_bytes: None,
            pretty: default_true(),
        }
    }
}

impl AnalysisConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> InternalResult<Self> {
        from_file(path)
    }
}

/// How the CLI renders a report.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, EnumString, Display, EnumIter, AsRefStr,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum OutputFormat {
    /// The `{ success, data }` envelope.
    #[default]
    Json,
    /// Counts and per-semester course listing.
    Summary,
    /// One token per line.
    Tokens,
}

pub fn from_file<T: for<'de> Deserialize<'de>, P: AsRef<Path>>(path: P) -> InternalResult<T> {
    let file = File::open(path)
        .map_err(|e| Error::config(format!("Failed to open config file: {}", e)))?;
    let reader = BufReader::new(file);
    let config = serde_json::from_reader(reader)
        .map_err(|e| Error::config(format!("Failed to parse config file: {}", e)))?;
    Ok(config)
}

pub fn from_str<T: for<'de> Deserialize<'de>>(s: &str) -> InternalResult<T> {
    let config = serde_json::from_str(s)
        .map_err(|e| Error::config(format!("Failed to parse config: {}", e)))?;
    Ok(config)
}

fn default_true() -> bool {
    true
}
