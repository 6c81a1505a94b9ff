//! Shell Component
//!
//! The gallery shell: header on top, sidebar and page content below, and
//! overlay layers stacked above everything.

use gpui::{div, prelude::*, AnyElement, App, IntoElement, ParentElement, RenderOnce, Styled, Window};

use crate::theme::UiColors;

/// Application shell wrapper
#[derive(IntoElement, Default)]
pub struct Shell {
    header: Option<AnyElement>,
    sidebar: Option<AnyElement>,
    content: Option<AnyElement>,
    overlays: Vec<AnyElement>,
}

impl Shell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn header(mut self, header: impl IntoElement) -> Self {
        self.header = Some(header.into_any_element());
        self
    }

    pub fn sidebar(mut self, sidebar: impl IntoElement) -> Self {
        self.sidebar = Some(sidebar.into_any_element());
        self
    }

    pub fn content(mut self, content: impl IntoElement) -> Self {
        self.content = Some(content.into_any_element());
        self
    }

    /// Layer drawn above the layout, e.g. toasts
    pub fn overlay(mut self, overlay: impl IntoElement) -> Self {
        self.overlays.push(overlay.into_any_element());
        self
    }
}

impl RenderOnce for Shell {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        div()
            .relative()
            .size_full()
            .flex()
            .flex_col()
            .bg(UiColors::background())
            .text_color(UiColors::text_primary())
            .children(self.header)
            .child(
                div()
                    .flex_1()
                    .flex()
                    .flex_row()
                    .overflow_hidden()
                    .children(self.sidebar)
                    .child(
                        div()
                            .relative()
                            .flex_1()
                            .flex()
                            .flex_col()
                            .overflow_hidden()
                            .children(self.content),
                    ),
            )
            .children(self.overlays)
    }
}
