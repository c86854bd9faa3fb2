// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and startup flags.

use crate::domain::media::SourceImage;
use crate::error::Error;
use crate::ui::editor;
use std::path::PathBuf;

/// Top-level messages consumed by [`super::App::update`].
#[derive(Debug, Clone)]
pub enum Message {
    Editor(editor::Message),
    /// The open dialog closed, with the chosen path if any.
    FileDialogResult(Option<PathBuf>),
    /// A file was dropped on the window.
    FileDropped(PathBuf),
    /// Reading a chosen file finished.
    ImageRead(Result<SourceImage, Error>),
}

impl From<editor::Message> for Message {
    fn from(message: editor::Message) -> Self {
        Message::Editor(message)
    }
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `ja`, `en-US`).
    pub lang: Option<String>,
    /// Optional image path to open on startup.
    pub file_path: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_PORTRAIT_CONFIG_DIR`.
    pub config_dir: Option<String>,
    /// Optional service base URL.
    /// Takes precedence over `ICED_PORTRAIT_API_BASE_URL` and the config file.
    pub api_base_url: Option<String>,
    /// Optional debounce window in milliseconds.
    pub debounce_ms: Option<u64>,
}
