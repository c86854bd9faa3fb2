// SPDX-License-Identifier: MPL-2.0
//! `iced_portrait` is a desktop client for a remote portrait expression
//! editing service, built with the Iced GUI framework.
//!
//! The user picks a photo, moves twelve expression sliders, and the service
//! renders the edited face. Parameter changes are debounced so a burst of
//! slider movements results in a single request.
//!
//! # Layers
//!
//! - [`domain`] - Parameter set and source image types
//! - [`application`] - Port trait for the editing service
//! - [`infrastructure`] - HTTP adapter for that port
//! - [`media`] - Reading image files and decoding previews
//! - [`ui`] - Editor state machine and widgets
//! - [`app`] - Iced application shell, configuration and paths

#![doc(html_root_url = "https://docs.rs/iced_portrait/0.1.0")]

pub mod app;
pub mod application;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod media;
pub mod ui;

#[cfg(test)]
mod test_utils;
