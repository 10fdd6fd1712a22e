use std::fmt::Display;
use std::path::PathBuf;

use bytes::Bytes;
use media_source::{
    DEFAULT_FETCH_CHUNK_SIZE, DEFAULT_FILE_CHUNK_SIZE, FetchSource, FileSource, SourceError,
};
use media_types::OnEvent;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Block size for file-backed sources in bytes
    pub file_chunk_size: usize,

    /// Sub-chunk size for fetch-backed sources in bytes
    pub fetch_chunk_size: usize,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            file_chunk_size: DEFAULT_FILE_CHUNK_SIZE,
            fetch_chunk_size: DEFAULT_FETCH_CHUNK_SIZE,
        }
    }
}

impl Display for PlayerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "PlayerConfig {{ file_chunk_size: {} bytes, fetch_chunk_size: {} bytes }}",
            self.file_chunk_size, self.fetch_chunk_size
        )
    }
}

impl PlayerConfig {
    pub fn builder() -> PlayerConfigBuilder {
        PlayerConfigBuilder::default()
    }

    /// Build a file source with the configured block size.
    pub fn file_source(
        &self,
        path: impl Into<PathBuf>,
        on_event: Option<OnEvent>,
    ) -> Result<FileSource, SourceError> {
        let source = FileSource::new(path).try_with_chunk_size(self.file_chunk_size)?;
        Ok(match on_event {
            Some(on_event) => source.with_observer(on_event),
            None => source,
        })
    }

    /// Build a fetch source with the configured sub-chunk size.
    pub fn fetch_source<F>(&self, fetch: F) -> Result<FetchSource<F>, SourceError>
    where
        F: Fn() -> Result<Bytes, SourceError>,
    {
        FetchSource::from_fn(fetch).try_with_chunk_size(self.fetch_chunk_size)
    }
}

#[derive(Debug, Clone, Default)]
pub struct PlayerConfigBuilder {
    config: PlayerConfig,
}

impl PlayerConfigBuilder {
    pub fn file_chunk_size(mut self, file_chunk_size: usize) -> Self {
        self.config.file_chunk_size = file_chunk_size;
        self
    }

    pub fn fetch_chunk_size(mut self, fetch_chunk_size: usize) -> Self {
        self.config.fetch_chunk_size = fetch_chunk_size;
        self
    }

    pub fn build(self) -> PlayerConfig {
        self.config
    }
}
