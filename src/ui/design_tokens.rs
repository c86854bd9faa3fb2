// SPDX-License-Identifier: MPL-2.0
//! Design system constants for the editor screen.
//!
//! Spacing follows an 8px grid; sizes are logical pixels.

use iced::Color;

// ============================================================================
// Colors
// ============================================================================

pub mod palette {
    use super::Color;

    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9);
}

// ============================================================================
// Spacing
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
}

// ============================================================================
// Sizing
// ============================================================================

pub mod sizing {
    /// Edge of the square preview pane.
    pub const PREVIEW: f32 = 512.0;

    pub const SIDEBAR_WIDTH: f32 = 420.0;
    pub const LABEL_WIDTH: f32 = 110.0;
    pub const INPUT_WIDTH: f32 = 72.0;
    pub const BUTTON_HEIGHT: f32 = 36.0;
}

// ============================================================================
// Typography
// ============================================================================

pub mod typography {
    pub const TITLE_MD: f32 = 20.0;
    pub const BODY: f32 = 14.0;
    pub const CAPTION: f32 = 12.0;
}
