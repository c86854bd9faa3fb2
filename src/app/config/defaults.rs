// SPDX-License-Identifier: MPL-2.0
//! Default values for configuration settings.

// ==========================================================================
// Service Defaults
// ==========================================================================

/// Base URL of the editing service when nothing else is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Environment variable overriding `[service].base_url`.
pub const ENV_API_BASE_URL: &str = "ICED_PORTRAIT_API_BASE_URL";

// ==========================================================================
// Editor Defaults
// ==========================================================================

/// Quiet period after the last parameter change before an edit is sent.
pub const DEFAULT_DEBOUNCE_MS: u64 = 200;

/// Upper bound accepted for `debounce_ms`. Larger values are clamped.
pub const MAX_DEBOUNCE_MS: u64 = 5_000;
