// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core business logic with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`editing`]: Expression editing types ([`ParameterSet`](editing::ParameterSet),
//!   [`Parameter`](editing::Parameter), [`ParameterRange`](editing::ParameterRange))
//! - [`media`]: Media types ([`SourceImage`](media::SourceImage))

pub mod editing;
pub mod media;
