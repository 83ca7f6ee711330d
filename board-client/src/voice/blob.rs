//! Recorded audio payloads.

/// Container type the recorder labels its output with.
pub const DEFAULT_AUDIO_MIME: &str = "audio/webm";

/// An opaque, ordered audio payload.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AudioBlob {
    mime_type: String,
    data: Vec<u8>,
}

impl AudioBlob {
    /// Wrap raw bytes.
    #[must_use]
    pub fn new(mime_type: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            mime_type: mime_type.into(),
            data,
        }
    }

    /// Concatenate chunks in order into a single blob.
    #[must_use]
    pub fn from_chunks<I>(mime_type: impl Into<String>, chunks: I) -> Self
    where
        I: IntoIterator<Item = Vec<u8>>,
    {
        let data = chunks.into_iter().flatten().collect();
        Self::new(mime_type, data)
    }

    /// MIME type of the payload.
    #[must_use]
    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// Payload bytes.
    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Payload length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the payload is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Take the payload bytes.
    #[must_use]
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_chunks_preserves_order() {
        let blob = AudioBlob::from_chunks(DEFAULT_AUDIO_MIME, vec![vec![1, 2], vec![], vec![3]]);
        assert_eq!(blob.data(), &[1, 2, 3]);
        assert_eq!(blob.mime_type(), "audio/webm");
        assert_eq!(blob.len(), 3);
    }

    #[test]
    fn test_empty_blob() {
        let blob = AudioBlob::from_chunks(DEFAULT_AUDIO_MIME, Vec::<Vec<u8>>::new());
        assert!(blob.is_empty());
    }
}
