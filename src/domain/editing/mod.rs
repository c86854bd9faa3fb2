// SPDX-License-Identifier: MPL-2.0
//! Editing domain types.
//!
//! This module provides pure domain types for expression editing:
//! - [`ParameterSet`]: The twelve expression values sent with each edit
//! - [`ParameterRange`]: Slider bounds and step of a parameter

pub mod newtypes;
pub mod parameters;

pub use newtypes::ParameterRange;
pub use parameters::{InvalidValue, Parameter, ParameterSet, UnknownParameter};
