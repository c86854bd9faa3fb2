// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! The editor follows the Elm-style "state down, messages up" pattern.
//!
//! - [`editor`] - Portrait editor screen and its request state machine
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode

pub mod design_tokens;
pub mod editor;
pub mod theming;
