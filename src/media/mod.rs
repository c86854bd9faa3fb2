// SPDX-License-Identifier: MPL-2.0
//! Image file handling for the editor.

pub mod image;

// Re-export commonly used types
pub use image::{decode_preview, read_source_image, PreviewImage, IMAGE_EXTENSIONS};
