//! # Fetch Source
//!
//! Wraps a zero-argument fetch capability. This is the only seam for remote
//! retrieval: the capability is invoked once per `stream()` call and its blob
//! is split into fixed-size sub-chunks. A fetch failure is returned as is.

use bytes::Bytes;
use media_types::{Chunk, keys};
use tracing::{debug, error};

use crate::source::{DEFAULT_FETCH_CHUNK_SIZE, validate_chunk_size};
use crate::{MediaSource, SourceError, split_fixed};

/// A zero-argument capability that returns a byte blob.
pub trait Fetcher {
    fn fetch(&self) -> Result<Bytes, SourceError>;
}

impl<F> Fetcher for F
where
    F: Fn() -> Result<Bytes, SourceError>,
{
    fn fetch(&self) -> Result<Bytes, SourceError> {
        self()
    }
}

pub struct FetchSource<F> {
    fetcher: F,
    chunk_size: usize,
}

impl<F: Fetcher> FetchSource<F> {
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            chunk_size: DEFAULT_FETCH_CHUNK_SIZE,
        }
    }

    /// Build a source from a closure.
    pub fn from_fn(fetch: F) -> Self
    where
        F: Fn() -> Result<Bytes, SourceError>,
    {
        Self::new(fetch)
    }

    /// Set the sub-chunk size. Zero is clamped to one byte.
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size.max(1);
        self
    }

    pub fn try_with_chunk_size(mut self, chunk_size: usize) -> Result<Self, SourceError> {
        self.chunk_size = validate_chunk_size(chunk_size)?;
        Ok(self)
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }
}

impl<F: Fetcher> MediaSource for FetchSource<F> {
    fn stream(&self) -> Result<Vec<Chunk>, SourceError> {
        let data = self.fetcher.fetch().inspect_err(|e| {
            error!(error = %e, "Fetch source failed");
        })?;

        let chunks: Vec<Chunk> = split_fixed(&data, self.chunk_size)
            .map(|part| Chunk::with_entry(part, keys::REMOTE, "true"))
            .collect();
        debug!(bytes = data.len(), chunks = chunks.len(), "Fetch source streamed");
        Ok(chunks)
    }

    fn describe(&self) -> String {
        "remote".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_splits_blob_into_sub_chunks() {
        let blob: Vec<u8> = (0..5000u32).map(|i| i as u8).collect();
        let expected = blob.clone();
        let source = FetchSource::from_fn(move || Ok(Bytes::from(blob.clone())));

        let chunks = source.stream().unwrap();
        let sizes: Vec<usize> = chunks.iter().map(Chunk::len).collect();
        assert_eq!(sizes, vec![2048, 2048, 904]);
        assert!(chunks.iter().all(|c| c.metadata[keys::REMOTE] == "true"));

        let joined: Vec<u8> = chunks.iter().flat_map(|c| c.payload.to_vec()).collect();
        assert_eq!(joined, expected);
    }

    #[test]
    fn test_small_blob_is_single_chunk() {
        let source = FetchSource::from_fn(|| Ok(Bytes::from_static(b"RemoteStreamData")));
        let chunks = source.stream().unwrap();
        assert_eq!(chunks.len(), 1);
        assert_eq!(&chunks[0].payload[..], b"RemoteStreamData");
    }

    #[test]
    fn test_empty_blob_yields_nothing() {
        let source = FetchSource::from_fn(|| Ok(Bytes::new()));
        assert!(source.stream().unwrap().is_empty());
    }

    #[test]
    fn test_fetches_again_on_every_stream() {
        let calls = Cell::new(0);
        let source = FetchSource::from_fn(|| {
            calls.set(calls.get() + 1);
            Ok(Bytes::from_static(b"XYZ"))
        })
        .with_chunk_size(2);

        let first = source.stream().unwrap();
        let second = source.stream().unwrap();
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
        assert_eq!(calls.get(), 2);
    }

    struct StaticFetcher(&'static [u8]);

    impl Fetcher for StaticFetcher {
        fn fetch(&self) -> Result<Bytes, SourceError> {
            Ok(Bytes::from_static(self.0))
        }
    }

    #[test]
    fn test_struct_fetcher() {
        let source = FetchSource::new(StaticFetcher(b"abcdef")).with_chunk_size(4);
        let chunks = source.stream().unwrap();
        assert_eq!(chunks.len(), 2);
        assert_eq!(&chunks[1].payload[..], b"ef");
    }

    #[test]
    fn test_fetch_error_propagates() {
        let source = FetchSource::from_fn(|| Err(SourceError::fetch("connection refused")));
        assert!(matches!(source.stream(), Err(SourceError::Fetch(reason)) if reason == "connection refused"));
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn fetch_source_splits_and_restarts(
                blob in prop::collection::vec(any::<u8>(), 0..16_384),
                size in 1usize..=4096,
            ) {
                let blob = Bytes::from(blob);
                let served = blob.clone();
                let calls = Cell::new(0usize);
                let source = FetchSource::from_fn(|| -> Result<Bytes, SourceError> {
                    calls.set(calls.get() + 1);
                    Ok(served.clone())
                })
                .with_chunk_size(size);

                let first = source.stream().unwrap();
                prop_assert_eq!(first.len(), blob.len().div_ceil(size));
                prop_assert!(first.iter().all(|c| c.metadata[keys::REMOTE] == "true"));
                let joined: Vec<u8> = first.iter().flat_map(|c| c.payload.to_vec()).collect();
                prop_assert_eq!(joined, blob.to_vec());

                let second = source.stream().unwrap();
                prop_assert_eq!(first, second);
                prop_assert_eq!(calls.get(), 2);
            }
        }
    }
}
