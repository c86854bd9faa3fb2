// SPDX-License-Identifier: MPL-2.0
//! Portrait editor: expression sliders bound to the remote editing service.
//!
//! This module follows the "state down, messages up" pattern: [`State::update`]
//! is a pure transition that mutates the owned state and returns an
//! [`Effect`] for the application shell to run. Results of those effects come
//! back as [`Message`]s, so every step of an edit cycle can be driven from a
//! unit test without a window or a network.
//!
//! One edit cycle goes `idle → pending → updated | failed → idle`. Parameter
//! changes bump a debounce revision; only the timer carrying the latest
//! revision sends a request. Requests are numbered and a reply older than the
//! preview on screen is dropped.

mod cycle;
mod messages;
mod session;
mod view;

pub use messages::{Effect, Message};
pub use view::ViewContext;

use crate::domain::editing::{Parameter, ParameterSet};
use crate::domain::media::SourceImage;
use crate::media::PreviewImage;
use std::time::Duration;

/// Default debounce window between the last parameter change and the request.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(200);

/// Flags gating UI interactivity while requests run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RequestState {
    /// At least one edit request is in flight.
    pub loading: bool,
    /// An edit is waiting for the debounce window or in flight.
    pub updating: bool,
    /// The `initialize` call for the current image is in flight.
    pub initializing: bool,
}

/// Where the preview on screen came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewOrigin {
    /// Local decode of the chosen file.
    Local,
    /// Reply to the edit request with this sequence number.
    Edited { sequence: u64 },
}

/// Image shown in the preview pane. Replacing it drops the previous handle.
#[derive(Debug, Clone)]
pub struct Preview {
    pub image: PreviewImage,
    pub origin: PreviewOrigin,
}

/// Local UI state for the editor screen.
#[derive(Debug, Clone)]
pub struct State {
    parameters: ParameterSet,
    /// Text of the numeric inputs, kept apart so partial input like `-` or
    /// `1.` survives until it parses.
    inputs: [String; 12],
    image: Option<SourceImage>,
    /// Bumped on every image selection.
    session: u64,
    preview: Option<Preview>,
    requests: RequestState,
    debounce: Duration,
    /// Bumped on every parameter change.
    revision: u64,
    debounce_pending: bool,
    /// Sequence number of the last edit request sent.
    last_sequence: u64,
    /// Replies with a sequence at or below this are stale.
    displayed_sequence: u64,
    in_flight: usize,
}

impl Default for State {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}

impl State {
    #[must_use]
    pub fn new(debounce: Duration) -> Self {
        let parameters = ParameterSet::default();
        Self {
            parameters,
            inputs: Parameter::ALL.map(|param| param.range().format(parameters.get(param))),
            image: None,
            session: 0,
            preview: None,
            requests: RequestState::default(),
            debounce,
            revision: 0,
            debounce_pending: false,
            last_sequence: 0,
            displayed_sequence: 0,
            in_flight: 0,
        }
    }

    /// Update the state and return the [`Effect`] the shell must run.
    pub fn update(&mut self, message: Message) -> Effect {
        match message {
            Message::ParameterInput(parameter, input) => self.change_parameter(parameter, input),
            Message::SliderMoved(parameter, value) => self.move_slider(parameter, value),
            Message::Reset => self.reset(),
            Message::OpenImage => Effect::OpenFileDialog,
            Message::ImageSelected(image) => self.select_image(image),
            Message::LocalPreviewDecoded { session, result } => {
                self.local_preview_decoded(session, result);
                Effect::None
            }
            Message::InitializeCompleted { session, result } => {
                self.initialize_completed(session, result);
                Effect::None
            }
            Message::DebounceElapsed(revision) => self.debounce_elapsed(revision),
            Message::EditCompleted { sequence, result } => {
                self.edit_completed(sequence, result);
                Effect::None
            }
        }
    }

    #[must_use]
    pub fn parameters(&self) -> &ParameterSet {
        &self.parameters
    }

    /// Text currently shown in the numeric input of `parameter`.
    #[must_use]
    pub fn input(&self, parameter: Parameter) -> &str {
        &self.inputs[parameter.index()]
    }

    #[must_use]
    pub fn image(&self) -> Option<&SourceImage> {
        self.image.as_ref()
    }

    #[must_use]
    pub fn preview(&self) -> Option<&Preview> {
        self.preview.as_ref()
    }

    #[must_use]
    pub fn requests(&self) -> RequestState {
        self.requests
    }

    #[must_use]
    pub fn debounce(&self) -> Duration {
        self.debounce
    }

    /// Whether the sliders and the reset button accept input.
    #[must_use]
    pub fn controls_enabled(&self) -> bool {
        !self.requests.initializing
    }

    fn sync_input(&mut self, parameter: Parameter) {
        self.inputs[parameter.index()] = parameter.range().format(self.parameters.get(parameter));
    }

    fn refresh_flags(&mut self) {
        self.requests.loading = self.in_flight > 0;
        self.requests.updating = self.requests.loading || self.debounce_pending;
    }
}

#[cfg(test)]
mod tests;
