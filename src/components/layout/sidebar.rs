//! Sidebar Component
//!
//! Component tree navigation, grouped by category.

use gpui::{
    div, prelude::*, px, ClickEvent, Context, FontWeight, InteractiveElement, IntoElement,
    ParentElement, Render, SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::app::navigation::{ComponentPage, PageGroup};
use crate::app::settings::update_settings_and_save;
use crate::constants::SIDEBAR_WIDTH;
use crate::theme::UiColors;

/// Sidebar component
pub struct Sidebar {
    entities: AppEntities,
}

impl Sidebar {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        cx.observe(&entities.settings, |_this, _, cx| cx.notify())
            .detach();

        Self { entities }
    }

    fn render_nav_item(&self, page: ComponentPage, active_page: ComponentPage) -> impl IntoElement {
        let is_active = page == active_page;

        div()
            .id(SharedString::from(format!("nav-{:?}", page)))
            .w_full()
            .pl_6()
            .pr_4()
            .py(px(6.0))
            .border_l_2()
            .border_color(if is_active {
                UiColors::primary()
            } else {
                gpui::rgba(0x00000000)
            })
            .when(is_active, |el| el.bg(UiColors::sidebar_active()))
            .text_color(if is_active {
                UiColors::primary()
            } else {
                UiColors::text_secondary()
            })
            .text_size(px(14.0))
            .cursor_pointer()
            .hover(|s| s.bg(UiColors::table_row_hover()))
            .on_click(move |_event: &ClickEvent, _window, cx| {
                update_settings_and_save(cx, "select_page", move |settings, _| {
                    settings.last_page = page;
                });
            })
            .child(page.title())
    }

    fn render_group(&self, group: PageGroup, active_page: ComponentPage) -> impl IntoElement {
        div()
            .flex()
            .flex_col()
            .pb_2()
            .child(
                div()
                    .px_4()
                    .py_1()
                    .text_xs()
                    .font_weight(FontWeight::SEMIBOLD)
                    .text_color(UiColors::text_muted())
                    .child(group.title().to_uppercase()),
            )
            .children(
                group
                    .pages()
                    .map(|page| self.render_nav_item(page, active_page)),
            )
    }
}

impl Render for Sidebar {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let active_page = self.entities.settings.read(cx).last_page;

        div()
            .id("sidebar")
            .w(px(SIDEBAR_WIDTH))
            .h_full()
            .flex_none()
            .bg(UiColors::sidebar_bg())
            .border_r_1()
            .border_color(UiColors::border())
            .flex()
            .flex_col()
            .pt_4()
            .overflow_y_scroll()
            .children(
                PageGroup::ALL
                    .iter()
                    .map(|group| self.render_group(*group, active_page)),
            )
    }
}
