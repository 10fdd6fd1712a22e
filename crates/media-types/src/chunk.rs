use std::collections::BTreeMap;

use bytes::Bytes;

/// Metadata attached to a chunk.
///
/// Ordered so that log lines and event payloads are deterministic.
pub type Metadata = BTreeMap<String, String>;

/// Well-known metadata keys.
pub mod keys {
    /// Origin path of a file-backed chunk.
    pub const SOURCE: &str = "source";
    /// `HLS-<index>` label of a segment-backed chunk.
    pub const SEGMENT: &str = "segment";
    /// Set to `"true"` on fetch-backed chunks.
    pub const REMOTE: &str = "remote";
    /// Text stamped by the watermark plugin.
    pub const WATERMARK: &str = "watermark";
}

/// A unit of media payload plus its metadata.
///
/// The payload is never mutated once the chunk is built. The metadata is
/// handed out mutably to the render chain so plugins can annotate it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    pub payload: Bytes,
    pub metadata: Metadata,
}

impl Chunk {
    pub fn new(payload: impl Into<Bytes>, metadata: Metadata) -> Self {
        Self {
            payload: payload.into(),
            metadata,
        }
    }

    /// Build a chunk carrying a single metadata entry.
    pub fn with_entry(
        payload: impl Into<Bytes>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        let mut metadata = Metadata::new();
        metadata.insert(key.into(), value.into());
        Self::new(payload, metadata)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.payload.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.payload.is_empty()
    }

    pub fn into_parts(self) -> (Bytes, Metadata) {
        (self.payload, self.metadata)
    }
}
