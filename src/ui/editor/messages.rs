// SPDX-License-Identifier: MPL-2.0
//! Editor message/effect types re-exported by the facade.

use crate::application::port::{InitializeReply, ServiceResult};
use crate::domain::editing::{Parameter, ParameterSet};
use crate::domain::media::SourceImage;
use crate::error::Error;
use crate::media::PreviewImage;
use std::time::Duration;

/// Messages consumed by [`State::update`](super::State::update).
#[derive(Debug, Clone)]
pub enum Message {
    /// Text typed into the numeric input next to a slider.
    ParameterInput(Parameter, String),
    /// Slider dragged to a new value.
    SliderMoved(Parameter, f64),
    /// Reset button pressed.
    Reset,
    /// "Open image" button pressed.
    OpenImage,
    /// A readable image file was chosen.
    ImageSelected(SourceImage),
    /// Local decode of the chosen file finished.
    LocalPreviewDecoded {
        session: u64,
        result: Result<PreviewImage, Error>,
    },
    /// The `initialize` call for a session finished.
    InitializeCompleted {
        session: u64,
        result: ServiceResult<InitializeReply>,
    },
    /// The debounce timer scheduled for `revision` fired.
    DebounceElapsed(u64),
    /// An edit call finished and its body was decoded (or not).
    EditCompleted {
        sequence: u64,
        result: Result<PreviewImage, Error>,
    },
}

/// Side effects requested by the editor. The application shell runs them and
/// reports back with a [`Message`].
#[derive(Debug, Clone)]
pub enum Effect {
    None,
    /// Show the native open dialog.
    OpenFileDialog,
    /// Decode the file locally and call `initialize`, both for `session`,
    /// and schedule an edit like [`Effect::ScheduleEdit`].
    StartSession {
        session: u64,
        image: SourceImage,
        revision: u64,
        delay: Duration,
    },
    /// Wait `delay`, then deliver [`Message::DebounceElapsed`] with `revision`.
    ScheduleEdit { revision: u64, delay: Duration },
    /// Call `edit` and deliver [`Message::EditCompleted`] with `sequence`.
    SendEdit {
        sequence: u64,
        image: SourceImage,
        parameters: ParameterSet,
    },
}
