// SPDX-License-Identifier: MPL-2.0
//! Image selection: local preview and service initialization.

use super::{Effect, Preview, PreviewOrigin, State};
use crate::application::port::{InitializeReply, ServiceResult};
use crate::domain::media::SourceImage;
use crate::error::Error;
use crate::media::PreviewImage;

impl State {
    /// Make `image` the current image and start a new session.
    ///
    /// The previous preview is dropped right away and edit replies still in
    /// flight for the previous image become stale. The current parameters are
    /// sent for the new image once the debounce window passes.
    pub(crate) fn select_image(&mut self, image: SourceImage) -> Effect {
        log::info!(
            "Selected {} ({}, {} bytes)",
            image.file_name(),
            image.mime_type(),
            image.len()
        );

        self.session += 1;
        self.image = Some(image.clone());
        self.preview = None;
        self.displayed_sequence = self.last_sequence;
        self.requests.initializing = true;
        self.revision += 1;
        self.debounce_pending = true;
        self.refresh_flags();

        Effect::StartSession {
            session: self.session,
            image,
            revision: self.revision,
            delay: self.debounce,
        }
    }

    /// Show the local decode unless the service already answered an edit.
    pub(crate) fn local_preview_decoded(
        &mut self,
        session: u64,
        result: Result<PreviewImage, Error>,
    ) {
        if session != self.session {
            return;
        }

        match result {
            Ok(image) => {
                let edited_shown = matches!(
                    self.preview,
                    Some(Preview {
                        origin: PreviewOrigin::Edited { .. },
                        ..
                    })
                );
                if !edited_shown {
                    self.preview = Some(Preview {
                        image,
                        origin: PreviewOrigin::Local,
                    });
                }
            }
            Err(err) => log::error!("Failed to decode selected image: {err}"),
        }
    }

    /// Log the `initialize` reply. Only the current session clears the flag.
    pub(crate) fn initialize_completed(
        &mut self,
        session: u64,
        result: ServiceResult<InitializeReply>,
    ) {
        if session == self.session {
            self.requests.initializing = false;
        }

        match result {
            Ok(reply) => match reply.status {
                Some(status) => log::info!("{} ({status})", reply.message),
                None => log::info!("{}", reply.message),
            },
            Err(err) => log::error!("Error during initialization request: {err}"),
        }
    }
}
