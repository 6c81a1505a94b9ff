//! Pagination Component
//!
//! Page navigation footer for the DataTable.

use std::rc::Rc;

use gpui::{div, prelude::*, App, IntoElement, ParentElement, RenderOnce, Styled, Window};

use crate::components::primitives::{Button, ButtonSize, ButtonVariant};
use crate::theme::UiColors;

type PageHandler = Rc<dyn Fn(usize, &mut Window, &mut App) + 'static>;

/// "Previous / Page X of Y (N total) / Next"
#[derive(IntoElement)]
pub struct Pagination {
    current_page: usize,
    total_pages: usize,
    total_items: usize,
    on_page_change: Option<PageHandler>,
}

impl Pagination {
    /// Create a new pagination footer
    pub fn new(current_page: usize, total_pages: usize, total_items: usize) -> Self {
        Self {
            current_page,
            total_pages,
            total_items,
            on_page_change: None,
        }
    }

    /// Called with the requested page number
    pub fn on_page_change(mut self, handler: impl Fn(usize, &mut Window, &mut App) + 'static) -> Self {
        self.on_page_change = Some(Rc::new(handler));
        self
    }

    pub fn summary(&self) -> String {
        format!(
            "Page {} of {} ({} total)",
            self.current_page, self.total_pages, self.total_items
        )
    }
}

impl RenderOnce for Pagination {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let current = self.current_page;
        let can_prev = current > 1;
        let can_next = current < self.total_pages;
        let summary = self.summary();

        let nav_button = |id: &'static str, label: &'static str, target: usize, enabled: bool| {
            let handler = self.on_page_change.clone();
            Button::new(id, label)
                .variant(ButtonVariant::Secondary)
                .size(ButtonSize::Small)
                .disabled(!enabled)
                .on_click(move |_, window, cx| {
                    if let Some(handler) = &handler {
                        handler(target, window, cx);
                    }
                })
        };

        div()
            .w_full()
            .px_4()
            .py_2()
            .flex()
            .items_center()
            .justify_between()
            .border_t_1()
            .border_color(UiColors::border())
            .child(nav_button("prev-page", "Previous", current.saturating_sub(1), can_prev))
            .child(
                div()
                    .text_sm()
                    .text_color(UiColors::text_secondary())
                    .child(summary),
            )
            .child(nav_button("next-page", "Next", current + 1, can_next))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_text() {
        assert_eq!(Pagination::new(2, 3, 25).summary(), "Page 2 of 3 (25 total)");
    }
}
