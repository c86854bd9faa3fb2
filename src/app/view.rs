// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::editor::{self, ViewContext as EditorViewContext};
use iced::widget::Container;
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub editor: &'a editor::State,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let content = ctx
        .editor
        .view(EditorViewContext { i18n: ctx.i18n })
        .map(Message::Editor);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
