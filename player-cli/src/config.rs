use std::path::{Path, PathBuf};

use pipeline_common::PlayerConfig;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Configuration for the entire program
///
/// Defaults reproduce the built-in demo. Any subset of fields can be
/// overridden from a JSON file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgramConfig {
    /// Local file played by the first playlist item
    pub local_file: PathBuf,

    /// Pre-split segments played by the second item
    pub segments: Vec<String>,

    /// Blob returned by the simulated remote fetch
    pub remote_payload: String,

    /// Watermark text stamped on every chunk of the first run
    pub watermark: String,

    /// Captions cycled through during the first run
    pub subtitles: Vec<String>,

    /// Chunk sizes
    pub player: PlayerConfig,
}

impl Default for ProgramConfig {
    fn default() -> Self {
        Self {
            local_file: PathBuf::from("example.mp3"),
            segments: vec!["seg1".to_string(), "seg2".to_string()],
            remote_payload: "RemoteStreamData".to_string(),
            watermark: "© Doona Studio".to_string(),
            subtitles: vec!["Hello!".to_string(), "Enjoy the show!".to_string()],
            player: PlayerConfig::default(),
        }
    }
}

impl ProgramConfig {
    /// Load overrides from `path`, or use the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self, AppError> {
        match path {
            Some(path) => {
                let content = std::fs::read_to_string(path)?;
                Self::from_json(&content)
            }
            None => Ok(Self::default()),
        }
    }

    pub fn from_json(content: &str) -> Result<Self, AppError> {
        Ok(serde_json::from_str(content)?)
    }
}
