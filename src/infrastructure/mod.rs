// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`http`]: Remote editing service over HTTP (implements [`EditService`])
//!
//! [`EditService`]: crate::application::port::EditService

pub mod http;

// Re-export main types for convenience
pub use http::{HttpEditService, ServiceSettings};
