// SPDX-License-Identifier: MPL-2.0
//! Parameter changes and the debounced edit cycle.

use super::{Effect, Preview, PreviewOrigin, State};
use crate::domain::editing::Parameter;
use crate::error::Error;
use crate::media::PreviewImage;

impl State {
    /// Parse a numeric input and overwrite a single parameter.
    ///
    /// Unparsable text stays in the input box but leaves the parameter alone.
    pub(crate) fn change_parameter(&mut self, parameter: Parameter, input: String) -> Effect {
        let result = self.parameters.set_from_str(parameter, &input);
        self.inputs[parameter.index()] = input;

        match result {
            Ok(value) => {
                if !parameter.range().contains(value) {
                    log::warn!("{parameter} = {value} is outside the slider range, sending as-is");
                }
                log::debug!("Updated {parameter} to {value}");
                self.parameters_changed()
            }
            Err(err) => {
                log::debug!("Ignoring input: {err}");
                Effect::None
            }
        }
    }

    /// Handle a slider movement, snapping to the parameter's step.
    pub(crate) fn move_slider(&mut self, parameter: Parameter, value: f64) -> Effect {
        let value = parameter.range().snap(value);
        self.parameters.set(parameter, value);
        self.sync_input(parameter);
        log::debug!("Updated {parameter} to {value}");
        self.parameters_changed()
    }

    /// Put every parameter back to zero. The change goes through the same
    /// debounce as any other edit.
    pub(crate) fn reset(&mut self) -> Effect {
        self.parameters.reset();
        for parameter in Parameter::ALL {
            self.sync_input(parameter);
        }
        self.parameters_changed()
    }

    /// Start (or restart) the debounce window. Nothing is scheduled without an image.
    fn parameters_changed(&mut self) -> Effect {
        if self.image.is_none() {
            return Effect::None;
        }

        self.revision += 1;
        self.debounce_pending = true;
        self.refresh_flags();

        Effect::ScheduleEdit {
            revision: self.revision,
            delay: self.debounce,
        }
    }

    /// Timer fired. Only the timer of the latest revision sends a request.
    pub(crate) fn debounce_elapsed(&mut self, revision: u64) -> Effect {
        if revision != self.revision {
            return Effect::None;
        }

        self.debounce_pending = false;
        self.submit_edit()
    }

    /// Send the current snapshot. No-op without an image.
    pub(crate) fn submit_edit(&mut self) -> Effect {
        let Some(image) = self.image.clone() else {
            self.refresh_flags();
            return Effect::None;
        };

        self.last_sequence += 1;
        self.in_flight += 1;
        self.refresh_flags();

        Effect::SendEdit {
            sequence: self.last_sequence,
            image,
            parameters: self.parameters,
        }
    }

    /// Apply an edit reply. Failures and stale replies leave the preview as is.
    pub(crate) fn edit_completed(&mut self, sequence: u64, result: Result<PreviewImage, Error>) {
        self.in_flight = self.in_flight.saturating_sub(1);

        match result {
            Ok(image) if sequence > self.displayed_sequence => {
                self.displayed_sequence = sequence;
                self.preview = Some(Preview {
                    image,
                    origin: PreviewOrigin::Edited { sequence },
                });
            }
            Ok(_) => {
                log::debug!(
                    "Dropping edit reply #{sequence}, #{} is newer",
                    self.displayed_sequence
                );
            }
            Err(err) => {
                log::error!("Error while sending edit request: {err}");
            }
        }

        self.refresh_flags();
    }
}
