// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! These traits use only domain types, ensuring the application layer remains
//! independent of concrete implementations.
//!
//! # Available Ports
//!
//! - [`edit_service`]: The remote portrait editing service (initialize, edit)
//!
//! # Design Notes
//!
//! - All traits use domain types only (no Iced handles, no `reqwest` types)
//! - Traits are `Send + Sync` so a single adapter can be shared by every task
//! - Network calls return boxed futures so the trait stays object safe; callers
//!   wrap them in Iced `Task`s

pub mod edit_service;

// Re-export main types for convenience
pub use edit_service::{EditService, InitializeReply, ServiceError, ServiceResult};
