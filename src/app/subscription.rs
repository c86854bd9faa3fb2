// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions.

use super::Message;
use iced::{event, window, Event, Subscription};

/// Routes files dropped on the window to [`Message::FileDropped`].
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| match event {
        Event::Window(window::Event::FileDropped(path)) => Some(Message::FileDropped(path)),
        _ => None,
    })
}
