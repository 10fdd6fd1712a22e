//! # Media Source Trait
//!
//! A [`MediaSource`] produces a finite chunk sequence from its origin. Every
//! call to [`MediaSource::stream`] re-derives the whole sequence, so a source
//! can be played any number of times.

use bytes::Bytes;
use media_types::Chunk;

use crate::SourceError;

/// Block size used by file-backed sources.
pub const DEFAULT_FILE_CHUNK_SIZE: usize = 1024;

/// Sub-chunk size used by fetch-backed sources.
pub const DEFAULT_FETCH_CHUNK_SIZE: usize = 2048;

pub trait MediaSource {
    /// Derive the full chunk sequence from the origin.
    ///
    /// Nothing is cached between calls: a second call re-reads the file,
    /// re-splits the segments or fetches again.
    fn stream(&self) -> Result<Vec<Chunk>, SourceError>;

    /// Human readable label of the origin, used in log lines.
    fn describe(&self) -> String;
}

/// Split `data` into consecutive slices of `chunk_size` bytes.
///
/// The last slice may be shorter. Empty input yields nothing. Slices share
/// the backing buffer of `data`.
pub fn split_fixed(data: &Bytes, chunk_size: usize) -> impl Iterator<Item = Bytes> + '_ {
    let chunk_size = chunk_size.max(1);
    (0..data.len())
        .step_by(chunk_size)
        .map(move |start| data.slice(start..(start + chunk_size).min(data.len())))
}

pub(crate) fn validate_chunk_size(chunk_size: usize) -> Result<usize, SourceError> {
    if chunk_size == 0 {
        return Err(SourceError::InvalidChunkSize(chunk_size));
    }
    Ok(chunk_size)
}
