// SPDX-License-Identifier: MPL-2.0
//! Editing service port definition.
//!
//! This module defines the [`EditService`] trait for the external service that
//! prepares a face for editing and renders edited portraits.

use crate::domain::editing::ParameterSet;
use crate::domain::media::SourceImage;
use futures_util::future::BoxFuture;
use std::fmt;

// =============================================================================
// ServiceError
// =============================================================================

/// Errors that can occur while talking to the editing service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// The request never produced a response (connect, DNS, TLS, timeout).
    Transport(String),

    /// The service answered with a non-success HTTP status.
    Status {
        /// Numeric HTTP status code.
        code: u16,
        /// Which endpoint answered.
        endpoint: &'static str,
    },

    /// The response body could not be read or interpreted.
    MalformedResponse(String),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceError::Transport(msg) => write!(f, "Request failed: {msg}"),
            ServiceError::Status { code, endpoint } => {
                write!(f, "{endpoint} request failed with status {code}")
            }
            ServiceError::MalformedResponse(msg) => write!(f, "Malformed response: {msg}"),
        }
    }
}

impl std::error::Error for ServiceError {}

/// Result type for editing service calls.
pub type ServiceResult<T> = Result<T, ServiceError>;

// =============================================================================
// InitializeReply
// =============================================================================

/// Body of a successful `initialize` call.
///
/// The editor only logs it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InitializeReply {
    /// Human readable confirmation from the service, empty when absent.
    pub message: String,
    /// Optional machine readable status (`"success"`).
    pub status: Option<String>,
}

// =============================================================================
// EditService Trait
// =============================================================================

/// Port for the remote portrait editing service.
///
/// # Example
///
/// ```ignore
/// use iced_portrait::application::port::{EditService, ServiceResult};
///
/// async fn preview(service: &dyn EditService, image: SourceImage) -> ServiceResult<Vec<u8>> {
///     service.initialize(image.clone()).await?;
///     service.edit(image, ParameterSet::default()).await
/// }
/// ```
pub trait EditService: Send + Sync {
    /// Uploads `image` so the service can detect and prepare the face.
    ///
    /// # Errors
    ///
    /// Returns a [`ServiceError`] on transport failure, non-success status or
    /// an unreadable reply.
    fn initialize(&self, image: SourceImage) -> BoxFuture<'static, ServiceResult<InitializeReply>>;

    /// Uploads `image` with every expression parameter and returns the
    /// encoded edited image.
    ///
    /// # Errors
    ///
    /// Returns a [`ServiceError`] on transport failure, non-success status or
    /// when the body cannot be read.
    fn edit(
        &self,
        image: SourceImage,
        parameters: ParameterSet,
    ) -> BoxFuture<'static, ServiceResult<Vec<u8>>>;
}
