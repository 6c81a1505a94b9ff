//! Header Component
//!
//! The gallery header with logo, title, and the current page breadcrumb.

use gpui::{div, px, Context, FontWeight, IntoElement, ParentElement, Render, Styled, Window};

use crate::app::entities::AppEntities;
use crate::constants::HEADER_HEIGHT;
use crate::theme::UiColors;

/// Header component
pub struct Header {
    entities: AppEntities,
}

impl Header {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        // Observe settings changes (active page)
        cx.observe(&entities.settings, |_this, _, cx| cx.notify())
            .detach();

        Self { entities }
    }
}

impl Render for Header {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let page = self.entities.settings.read(cx).last_page;

        div()
            .h(px(HEADER_HEIGHT))
            .w_full()
            .flex_none()
            .bg(UiColors::header_bg())
            .flex()
            .items_center()
            .justify_between()
            .px_4()
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_3()
                    .child(
                        div()
                            .size(px(28.0))
                            .rounded_md()
                            .bg(UiColors::primary())
                            .flex()
                            .items_center()
                            .justify_center()
                            .text_color(UiColors::text_light())
                            .font_weight(FontWeight::BOLD)
                            .child("UI"),
                    )
                    .child(
                        div()
                            .text_color(UiColors::text_light())
                            .text_size(px(16.0))
                            .font_weight(FontWeight::SEMIBOLD)
                            .child("Shared UI Gallery"),
                    ),
            )
            .child(
                div()
                    .text_color(UiColors::text_muted())
                    .text_size(px(13.0))
                    .child(format!("{} / {}", page.group().title(), page.title())),
            )
    }
}
