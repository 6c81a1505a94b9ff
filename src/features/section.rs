//! Page scaffolding shared by the gallery pages

use gpui::{div, px, Div, FontWeight, IntoElement, ParentElement, Styled};

use crate::theme::UiColors;

/// Page container with a title and a short description
pub(crate) fn page(title: &'static str, description: &'static str) -> Div {
    div()
        .flex()
        .flex_col()
        .gap_6()
        .p_6()
        .child(
            div()
                .flex()
                .flex_col()
                .gap_1()
                .child(
                    div()
                        .text_size(px(22.0))
                        .font_weight(FontWeight::BOLD)
                        .text_color(UiColors::text_primary())
                        .child(title),
                )
                .child(
                    div()
                        .text_size(px(14.0))
                        .text_color(UiColors::text_secondary())
                        .child(description),
                ),
        )
}

/// A titled example block
pub(crate) fn section(title: impl Into<gpui::SharedString>, content: impl IntoElement) -> Div {
    div()
        .flex()
        .flex_col()
        .gap_3()
        .child(
            div()
                .text_size(px(13.0))
                .font_weight(FontWeight::SEMIBOLD)
                .text_color(UiColors::text_secondary())
                .child(title.into()),
        )
        .child(
            div()
                .p_4()
                .rounded_md()
                .border_1()
                .border_color(UiColors::border())
                .bg(UiColors::background())
                .child(content),
        )
}

/// A wrapping row of examples
pub(crate) fn row() -> Div {
    div().flex().flex_row().flex_wrap().items_center().gap_3()
}

/// Caption reporting the latest value or event of an example
pub(crate) fn caption(text: impl Into<gpui::SharedString>) -> Div {
    div()
        .text_size(px(12.0))
        .text_color(UiColors::text_muted())
        .child(text.into())
}
