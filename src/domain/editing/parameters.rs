// SPDX-License-Identifier: MPL-2.0
//! Expression parameters sent to the editing service.
//!
//! [`ParameterSet`] is a fixed record of twelve numeric fields. The field set
//! is closed: every [`Parameter`] always has a value and no other field can be
//! stored.

use super::newtypes::ParameterRange;
use std::fmt;
use std::str::FromStr;

/// One of the twelve expression parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parameter {
    RotatePitch,
    RotateYaw,
    RotateRoll,
    Blink,
    Eyebrow,
    Wink,
    PupilX,
    PupilY,
    Aaa,
    Eee,
    Woo,
    Smile,
}

impl Parameter {
    /// All parameters, in wire order.
    pub const ALL: [Parameter; 12] = [
        Parameter::RotatePitch,
        Parameter::RotateYaw,
        Parameter::RotateRoll,
        Parameter::Blink,
        Parameter::Eyebrow,
        Parameter::Wink,
        Parameter::PupilX,
        Parameter::PupilY,
        Parameter::Aaa,
        Parameter::Eee,
        Parameter::Woo,
        Parameter::Smile,
    ];

    /// Multipart field name understood by the editing service.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Parameter::RotatePitch => "rotate_pitch",
            Parameter::RotateYaw => "rotate_yaw",
            Parameter::RotateRoll => "rotate_roll",
            Parameter::Blink => "blink",
            Parameter::Eyebrow => "eyebrow",
            Parameter::Wink => "wink",
            Parameter::PupilX => "pupil_x",
            Parameter::PupilY => "pupil_y",
            Parameter::Aaa => "aaa",
            Parameter::Eee => "eee",
            Parameter::Woo => "woo",
            Parameter::Smile => "smile",
        }
    }

    /// Looks up a parameter by its wire name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|param| param.name() == name)
    }

    /// Slider range for this parameter.
    #[must_use]
    pub fn range(self) -> ParameterRange {
        match self {
            Parameter::Smile => ParameterRange::SMILE,
            _ => ParameterRange::EXPRESSION,
        }
    }

    /// i18n key of the slider label.
    #[must_use]
    pub fn label_key(self) -> String {
        format!("parameter-{}-label", self.name().replace('_', "-"))
    }

    /// i18n key of the one-line description shown next to the slider.
    #[must_use]
    pub fn description_key(self) -> String {
        format!("parameter-{}-description", self.name().replace('_', "-"))
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown parameter name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownParameter(pub String);

impl fmt::Display for UnknownParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown parameter: {}", self.0)
    }
}

impl std::error::Error for UnknownParameter {}

impl FromStr for Parameter {
    type Err = UnknownParameter;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| UnknownParameter(s.to_string()))
    }
}

/// Error returned when a numeric input cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidValue {
    pub parameter: Parameter,
    pub input: String,
}

impl fmt::Display for InvalidValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid value {:?} for {}", self.input, self.parameter)
    }
}

impl std::error::Error for InvalidValue {}

/// The full record of expression parameters. All zero by default.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ParameterSet {
    values: [f64; 12],
}

impl ParameterSet {
    /// Returns the value of `parameter`.
    #[must_use]
    pub fn get(&self, parameter: Parameter) -> f64 {
        self.values[parameter.index()]
    }

    /// Overwrites a single field. `-0` is stored as `0`.
    pub fn set(&mut self, parameter: Parameter, value: f64) {
        self.values[parameter.index()] = if value == 0.0 { 0.0 } else { value };
    }

    /// Parses `input` as a float and overwrites `parameter`.
    ///
    /// Surrounding whitespace is ignored. Non-finite results (`NaN`, `inf`)
    /// are rejected along with anything that is not a number; the field keeps
    /// its previous value in that case.
    pub fn set_from_str(&mut self, parameter: Parameter, input: &str) -> Result<f64, InvalidValue> {
        let value = input
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .ok_or_else(|| InvalidValue {
                parameter,
                input: input.to_string(),
            })?;
        self.set(parameter, value);
        Ok(self.get(parameter))
    }

    /// Puts every field back to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Returns true when every field is zero.
    #[must_use]
    pub fn is_neutral(&self) -> bool {
        self.values.iter().all(|value| *value == 0.0)
    }

    /// Iterates `(parameter, value)` pairs in wire order.
    pub fn iter(&self) -> impl Iterator<Item = (Parameter, f64)> + '_ {
        Parameter::ALL.into_iter().map(|param| (param, self.get(param)))
    }

    /// Returns the multipart text fields for the edit request.
    ///
    /// Values are written as plain decimal strings (`0`, `1.5`, `-3`).
    #[must_use]
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        self.iter()
            .map(|(param, value)| (param.name(), value.to_string()))
            .collect()
    }
}
