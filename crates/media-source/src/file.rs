//! # File Source
//!
//! Reads a local file in fixed-size blocks. Read failures are not fatal: the
//! error is reported and whatever was read before the failure is returned.

use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use bytes::Bytes;
use media_types::{Chunk, OnEvent, PlaybackEvent, keys, notify};
use tracing::{debug, warn};

use crate::source::{DEFAULT_FILE_CHUNK_SIZE, validate_chunk_size};
use crate::{MediaSource, SourceError};

pub struct FileSource {
    path: PathBuf,
    chunk_size: usize,
    on_event: Option<OnEvent>,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            chunk_size: DEFAULT_FILE_CHUNK_SIZE,
            on_event: None,
        }
    }

    /// Set the block size. Zero is clamped to one byte.
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size.max(1);
        self
    }

    pub fn try_with_chunk_size(mut self, chunk_size: usize) -> Result<Self, SourceError> {
        self.chunk_size = validate_chunk_size(chunk_size)?;
        Ok(self)
    }

    pub fn with_observer(mut self, on_event: OnEvent) -> Self {
        self.on_event = Some(on_event);
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Origin label stored under the `source` metadata key.
    ///
    /// Non-UTF-8 path components are replaced with U+FFFD, so for such paths
    /// the label is not byte-identical to the path as given.
    fn origin(&self) -> String {
        self.path.to_string_lossy().into_owned()
    }

    /// Append every block of the file to `chunks`.
    ///
    /// The handle lives only for this call. A block interrupted by an error
    /// is still pushed before the error is returned. Block buffers grow with
    /// the bytes actually read, so a huge `chunk_size` costs no more memory
    /// than the file itself.
    fn read_chunks(&self, chunks: &mut Vec<Chunk>) -> Result<(), SourceError> {
        let mut file = File::open(&self.path)?;
        let origin = self.origin();
        let size_hint = file
            .metadata()
            .map(|meta| usize::try_from(meta.len()).unwrap_or(usize::MAX))
            .unwrap_or(0);
        let capacity = self.chunk_size.min(size_hint);

        loop {
            let (block, result) = read_block(&mut file, self.chunk_size, capacity);
            let filled = block.len();
            if filled > 0 {
                chunks.push(Chunk::with_entry(
                    Bytes::from(block),
                    keys::SOURCE,
                    origin.as_str(),
                ));
            }
            result?;
            if filled < self.chunk_size {
                return Ok(());
            }
        }
    }
}

/// Read up to `limit` bytes, stopping early at EOF or on error.
///
/// Bytes read before an error are kept in the returned block.
fn read_block(
    reader: &mut impl Read,
    limit: usize,
    capacity: usize,
) -> (Vec<u8>, io::Result<()>) {
    let mut block = Vec::with_capacity(capacity);
    let limit = u64::try_from(limit).unwrap_or(u64::MAX);
    let result = reader.take(limit).read_to_end(&mut block).map(|_| ());
    (block, result)
}

impl MediaSource for FileSource {
    fn stream(&self) -> Result<Vec<Chunk>, SourceError> {
        let mut chunks = Vec::new();
        if let Err(e) = self.read_chunks(&mut chunks) {
            warn!(
                path = %self.path.display(),
                error = %e,
                chunks_read = chunks.len(),
                "File source failed, yielding partial stream"
            );
            notify(self.on_event.as_ref(), || PlaybackEvent::SourceError {
                origin: self.origin(),
                error: e.to_string(),
            });
        } else {
            debug!(path = %self.path.display(), chunks = chunks.len(), "File source streamed");
        }
        Ok(chunks)
    }

    fn describe(&self) -> String {
        format!("file:{}", self.path.display())
    }
}
