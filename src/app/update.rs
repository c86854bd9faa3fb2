// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! The editor decides *what* should happen and returns an [`Effect`]; this
//! module turns each effect into an Iced [`Task`] whose output re-enters the
//! update loop as a [`Message`].

use super::Message;
use crate::application::port::{EditService, ServiceError};
use crate::domain::media::SourceImage;
use crate::error::{Error, Result};
use crate::media::{self, PreviewImage, IMAGE_EXTENSIONS};
use crate::ui::editor::{self, Effect};
use iced::Task;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Mutable state the handlers need.
pub(super) struct UpdateContext<'a> {
    pub editor: &'a mut editor::State,
    pub service: &'a Arc<dyn EditService>,
}

/// Dispatches a top-level message.
pub(super) fn update(ctx: &mut UpdateContext<'_>, message: Message) -> Task<Message> {
    match message {
        Message::Editor(message) => handle_editor_message(ctx, message),
        Message::FileDialogResult(Some(path)) | Message::FileDropped(path) => read_image(path),
        Message::FileDialogResult(None) => Task::none(),
        Message::ImageRead(Ok(image)) => {
            handle_editor_message(ctx, editor::Message::ImageSelected(image))
        }
        Message::ImageRead(Err(err)) => {
            log::error!("Cannot open image: {err}");
            Task::none()
        }
    }
}

fn handle_editor_message(ctx: &mut UpdateContext<'_>, message: editor::Message) -> Task<Message> {
    let effect = ctx.editor.update(message);
    run_effect(ctx.service, effect)
}

/// Turns an editor [`Effect`] into the task that carries it out.
pub(super) fn run_effect(service: &Arc<dyn EditService>, effect: Effect) -> Task<Message> {
    match effect {
        Effect::None => Task::none(),
        Effect::OpenFileDialog => open_file_dialog(),
        Effect::StartSession {
            session,
            image,
            revision,
            delay,
        } => Task::batch([
            start_session(service, session, image),
            schedule_edit(revision, delay),
        ]),
        Effect::ScheduleEdit { revision, delay } => schedule_edit(revision, delay),
        Effect::SendEdit {
            sequence,
            image,
            parameters,
        } => {
            log::debug!("Sending edit #{sequence} for {}", image.file_name());
            let request = service.edit(image, parameters);
            Task::perform(
                async move {
                    let body = request.await?;
                    decode_in_background(body)
                        .await
                        .map_err(|err| Error::Service(malformed(err)))
                },
                move |result| Message::Editor(editor::Message::EditCompleted { sequence, result }),
            )
        }
    }
}

fn schedule_edit(revision: u64, delay: Duration) -> Task<Message> {
    Task::perform(
        async move {
            tokio::time::sleep(delay).await;
            revision
        },
        |revision| Message::Editor(editor::Message::DebounceElapsed(revision)),
    )
}

/// Local decode and `initialize` run side by side.
fn start_session(service: &Arc<dyn EditService>, session: u64, image: SourceImage) -> Task<Message> {
    let bytes = image.shared_bytes();
    let local_preview = Task::perform(
        async move { decode_in_background(bytes.to_vec()).await },
        move |result| Message::Editor(editor::Message::LocalPreviewDecoded { session, result }),
    );

    let initialize = Task::perform(service.initialize(image), move |result| {
        Message::Editor(editor::Message::InitializeCompleted { session, result })
    });

    Task::batch([local_preview, initialize])
}

fn open_file_dialog() -> Task<Message> {
    Task::perform(
        async move {
            rfd::AsyncFileDialog::new()
                .add_filter("Images", IMAGE_EXTENSIONS)
                .pick_file()
                .await
                .map(|handle| handle.path().to_path_buf())
        },
        Message::FileDialogResult,
    )
}

fn read_image(path: PathBuf) -> Task<Message> {
    log::debug!("Reading {}", path.display());
    Task::perform(media::read_source_image(path), Message::ImageRead)
}

/// Decodes image bytes on the blocking pool.
async fn decode_in_background(bytes: Vec<u8>) -> Result<PreviewImage> {
    tokio::task::spawn_blocking(move || media::decode_preview(&bytes))
        .await
        .map_err(|e| Error::Image(e.to_string()))?
}

/// A reply body that is not an image is the service's fault.
fn malformed(err: Error) -> ServiceError {
    match err {
        Error::Service(err) => err,
        other => ServiceError::MalformedResponse(other.to_string()),
    }
}
