// SPDX-License-Identifier: MPL-2.0
//! Core media types for the domain layer.
//!
//! These types represent pure data without any presentation dependencies.

use std::sync::Arc;

/// Encoded image file chosen by the user.
///
/// The bytes are kept exactly as read from disk and are shared between the
/// editor state and in-flight requests, so cloning is cheap.
///
/// # Example
///
/// ```
/// use iced_portrait::domain::media::SourceImage;
///
/// let image = SourceImage::new("cat.png", "image/png", vec![0x89, b'P', b'N', b'G']);
///
/// assert_eq!(image.file_name(), "cat.png");
/// assert_eq!(image.len(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceImage {
    /// File name sent along with the multipart part.
    file_name: String,
    /// MIME type sniffed from the file contents.
    mime_type: String,
    /// Encoded file contents.
    bytes: Arc<[u8]>,
}

impl SourceImage {
    /// Creates a new `SourceImage`.
    #[must_use]
    pub fn new(
        file_name: impl Into<String>,
        mime_type: impl Into<String>,
        bytes: impl Into<Arc<[u8]>>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            bytes: bytes.into(),
        }
    }

    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    #[must_use]
    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Returns a shared handle to the encoded bytes.
    #[must_use]
    pub fn shared_bytes(&self) -> Arc<[u8]> {
        Arc::clone(&self.bytes)
    }

    /// Returns the encoded size in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
