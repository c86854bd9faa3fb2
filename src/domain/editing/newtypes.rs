// SPDX-License-Identifier: MPL-2.0
//! Editing newtypes.
//!
//! Value ranges for the expression parameters. The ranges describe what the
//! sliders offer; values typed into the numeric inputs are not clamped.

// =============================================================================
// Expression Bounds
// =============================================================================

/// Bounds shared by the head rotation, eye and mouth parameters (-20 to +20).
pub mod expression_bounds {
    /// Minimum slider value.
    pub const MIN: f64 = -20.0;
    /// Maximum slider value.
    pub const MAX: f64 = 20.0;
    /// Slider step.
    pub const STEP: f64 = 1.0;
}

/// Bounds of the smile parameter (-2.0 to +2.0).
pub mod smile_bounds {
    /// Minimum slider value.
    pub const MIN: f64 = -2.0;
    /// Maximum slider value.
    pub const MAX: f64 = 2.0;
    /// Slider step.
    pub const STEP: f64 = 0.1;
}

// =============================================================================
// ParameterRange
// =============================================================================

/// Slider range of a single parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterRange {
    min: f64,
    max: f64,
    step: f64,
    decimals: i32,
}

impl ParameterRange {
    /// Range used by every parameter except smile.
    pub const EXPRESSION: Self = Self {
        min: expression_bounds::MIN,
        max: expression_bounds::MAX,
        step: expression_bounds::STEP,
        decimals: 0,
    };

    /// Range used by the smile parameter.
    pub const SMILE: Self = Self {
        min: smile_bounds::MIN,
        max: smile_bounds::MAX,
        step: smile_bounds::STEP,
        decimals: 1,
    };

    #[must_use]
    pub fn min(self) -> f64 {
        self.min
    }

    #[must_use]
    pub fn max(self) -> f64 {
        self.max
    }

    #[must_use]
    pub fn step(self) -> f64 {
        self.step
    }

    /// Returns whether `value` lies inside the slider range.
    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Rounds a slider value to the step grid.
    ///
    /// Rounds to the range's decimal places, so `15 * 0.1` gives `1.5`.
    #[must_use]
    pub fn snap(self, value: f64) -> f64 {
        let scale = 10f64.powi(self.decimals);
        let snapped = (value * scale).round() / scale;
        // Normalize -0.0 so it serializes as "0"
        if snapped == 0.0 {
            0.0
        } else {
            snapped
        }
    }

    /// Formats a value for the numeric input next to the slider.
    #[must_use]
    pub fn format(self, value: f64) -> String {
        format!("{}", self.snap(value))
    }
}
