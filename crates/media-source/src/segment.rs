use bytes::Bytes;
use media_types::{Chunk, keys};

use crate::{MediaSource, SourceError};

/// Adapts an ordered list of pre-split segments, one chunk per segment.
#[derive(Debug, Clone)]
pub struct SegmentSource {
    segments: Vec<Bytes>,
}

impl SegmentSource {
    pub fn new<I, B>(segments: I) -> Self
    where
        I: IntoIterator<Item = B>,
        B: Into<Bytes>,
    {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Label of the segment at `index`.
    pub fn segment_label(index: usize) -> String {
        format!("HLS-{index}")
    }
}

impl MediaSource for SegmentSource {
    fn stream(&self) -> Result<Vec<Chunk>, SourceError> {
        Ok(self
            .segments
            .iter()
            .enumerate()
            .map(|(index, segment)| {
                Chunk::with_entry(segment.clone(), keys::SEGMENT, Self::segment_label(index))
            })
            .collect())
    }

    fn describe(&self) -> String {
        format!("segments:{}", self.segments.len())
    }
}
