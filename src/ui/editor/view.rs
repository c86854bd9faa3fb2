// SPDX-License-Identifier: MPL-2.0
//! Editor layout: preview pane on the left, one slider row per parameter on the right.

use super::{Message, RequestState, State};
use crate::domain::editing::Parameter;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use iced::widget::{
    button, container, image, progress_bar, scrollable, slider, text, text_input, Column, Row,
};
use iced::{alignment, ContentFit, Element, Length};

/// Contextual data needed to render the editor.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

impl State {
    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let header = Row::new()
            .spacing(spacing::MD)
            .align_y(alignment::Vertical::Center)
            .push(text(ctx.i18n.tr("window-title")).size(typography::TITLE_MD))
            .push(
                button(text(ctx.i18n.tr("editor-open-image-button")).size(typography::BODY))
                    .padding(spacing::XS)
                    .on_press(Message::OpenImage),
            );

        let body = Row::new()
            .spacing(spacing::LG)
            .push(self.preview_pane(&ctx))
            .push(self.sidebar(&ctx));

        Column::new()
            .spacing(spacing::MD)
            .padding(spacing::MD)
            .push(header)
            .push(body)
            .push(self.status_line(&ctx))
            .into()
    }

    fn preview_pane<'a>(&'a self, ctx: &ViewContext<'a>) -> Element<'a, Message> {
        let content: Element<'a, Message> = match self.preview() {
            Some(preview) => image(preview.image.handle.clone())
                .content_fit(ContentFit::Contain)
                .width(Length::Fixed(sizing::PREVIEW))
                .height(Length::Fixed(sizing::PREVIEW))
                .into(),
            None => text(ctx.i18n.tr("editor-no-image"))
                .size(typography::BODY)
                .color(palette::GRAY_400)
                .into(),
        };

        container(content).center(Length::Fixed(sizing::PREVIEW)).into()
    }

    fn sidebar<'a>(&'a self, ctx: &ViewContext<'a>) -> Element<'a, Message> {
        let enabled = self.controls_enabled();

        let rows = Parameter::ALL
            .into_iter()
            .fold(Column::new().spacing(spacing::SM), |column, parameter| {
                column.push(self.parameter_row(parameter, enabled, ctx))
            });

        let reset = button(text(ctx.i18n.tr("editor-reset-button")).size(typography::BODY))
            .padding(spacing::XS)
            .height(Length::Fixed(sizing::BUTTON_HEIGHT));
        let reset = if enabled {
            reset.on_press(Message::Reset)
        } else {
            reset
        };

        scrollable(
            Column::new()
                .spacing(spacing::MD)
                .push(rows)
                .push(reset)
                .width(Length::Fixed(sizing::SIDEBAR_WIDTH)),
        )
        .height(Length::Fixed(sizing::PREVIEW))
        .into()
    }

    fn parameter_row<'a>(
        &'a self,
        parameter: Parameter,
        enabled: bool,
        ctx: &ViewContext<'a>,
    ) -> Element<'a, Message> {
        let range = parameter.range();
        let value = self.parameters().get(parameter);
        // Typed values may lie outside the slider range.
        let shown = value.clamp(range.min(), range.max());

        let control: Element<'a, Message> = if enabled {
            slider(range.min()..=range.max(), shown, move |value| {
                Message::SliderMoved(parameter, value)
            })
            .step(range.step())
            .into()
        } else {
            progress_bar(range.min() as f32..=range.max() as f32, shown as f32).into()
        };

        let input = text_input("0", self.input(parameter))
            .size(typography::BODY)
            .width(Length::Fixed(sizing::INPUT_WIDTH));
        let input = if enabled {
            input.on_input(move |value| Message::ParameterInput(parameter, value))
        } else {
            input
        };

        let controls = Row::new()
            .spacing(spacing::XS)
            .align_y(alignment::Vertical::Center)
            .push(
                text(ctx.i18n.tr(&parameter.label_key()))
                    .size(typography::BODY)
                    .width(Length::Fixed(sizing::LABEL_WIDTH)),
            )
            .push(control)
            .push(input);

        Column::new()
            .spacing(spacing::XXS)
            .push(controls)
            .push(
                text(ctx.i18n.tr(&parameter.description_key()))
                    .size(typography::CAPTION)
                    .color(palette::GRAY_400),
            )
            .into()
    }

    fn status_line<'a>(&'a self, ctx: &ViewContext<'a>) -> Element<'a, Message> {
        match status_key(self.requests()) {
            Some(key) => text(ctx.i18n.tr(key))
                .size(typography::BODY)
                .color(palette::PRIMARY_500)
                .into(),
            None => Column::new().into(),
        }
    }
}

/// Status message key for the given flags, or `None` when idle.
///
/// Loading wins over updating, which wins over initializing.
pub(super) fn status_key(requests: RequestState) -> Option<&'static str> {
    if requests.loading {
        Some("editor-status-loading")
    } else if requests.updating {
        Some("editor-status-updating")
    } else if requests.initializing {
        Some("editor-status-initializing")
    } else {
        None
    }
}
