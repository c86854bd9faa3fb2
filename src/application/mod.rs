// SPDX-License-Identifier: MPL-2.0
//! Application layer - Use cases and orchestration.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Presentation layer uses application layer services
//!
//! # Example
//!
//! ```ignore
//! use iced_portrait::application::port::EditService;
//! use iced_portrait::infrastructure::{HttpEditService, ServiceSettings};
//!
//! // Infrastructure implements the port trait
//! let settings = ServiceSettings::new("http://localhost:8000");
//! let service: Arc<dyn EditService> = Arc::new(HttpEditService::new(settings)?);
//! ```

pub mod port;
