// SPDX-License-Identifier: MPL-2.0
//! Media domain types.
//!
//! - [`SourceImage`]: The encoded image file uploaded to the editing service

mod types;

pub use types::SourceImage;
