// SPDX-License-Identifier: MPL-2.0
//! Reading image files for upload and decoding previews.
//!
//! The editor never re-encodes the user's file: the bytes read from disk are
//! uploaded as-is. Decoding only happens to validate a file or a service reply
//! and to learn its dimensions before handing the bytes to Iced.

use crate::domain::media::SourceImage;
use crate::error::{Error, Result};
use iced::widget::image;
use image_rs::GenericImageView;
use std::path::{Path, PathBuf};

/// File extensions offered by the open dialog.
pub const IMAGE_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "webp", "bmp", "gif", "tif", "tiff", "ico",
];

/// Decoded image ready for display.
#[derive(Debug, Clone)]
pub struct PreviewImage {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

/// Builds a [`SourceImage`] from raw file contents.
///
/// The MIME type is sniffed from the magic bytes, not from the file name.
///
/// # Errors
///
/// Returns [`Error::Image`] if the bytes are not a recognized image format.
pub fn source_from_bytes(file_name: impl Into<String>, bytes: Vec<u8>) -> Result<SourceImage> {
    let format = image_rs::guess_format(&bytes)?;
    Ok(SourceImage::new(file_name, format.to_mime_type(), bytes))
}

/// Reads an image file from disk.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read and [`Error::Image`] if it
/// is not an image.
pub async fn read_source_image(path: PathBuf) -> Result<SourceImage> {
    let bytes = tokio::fs::read(&path).await?;
    source_from_bytes(file_name_of(&path), bytes)
}

/// Decodes encoded image bytes into a displayable preview.
///
/// # Errors
///
/// Returns [`Error::Image`] if the bytes cannot be decoded.
pub fn decode_preview(bytes: &[u8]) -> Result<PreviewImage> {
    let decoded = image_rs::load_from_memory(bytes)?;
    let (width, height) = decoded.dimensions();

    Ok(PreviewImage {
        handle: image::Handle::from_bytes(bytes.to_vec()),
        width,
        height,
    })
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string())
}
