//! Workspace - Main Shell with Layout and Page Cache
//!
//! The workspace holds the header, the sidebar, the active component page and
//! the toast layer. Pages are built on first visit and kept for the session so
//! their state survives navigation.

use std::time::Duration;

use ahash::AHashMap;
use gpui::{
    div, prelude::*, AnyView, Context, Entity, FocusHandle, Focusable, IntoElement, ParentElement,
    Render, Styled, Window,
};
use tracing::debug;

use crate::app::entities::AppEntities;
use crate::app::navigation::ComponentPage;
use crate::app::settings::{update_settings_and_save, GallerySettings};
use crate::components::layout::header::Header;
use crate::components::layout::shell::Shell;
use crate::components::layout::sidebar::Sidebar;
use crate::features::build_page;
use crate::helpers::{NavAction, NotifyAction};
use crate::theme::UiColors;

/// Main workspace containing the gallery layout
pub struct Workspace {
    entities: AppEntities,
    header: Entity<Header>,
    sidebar: Entity<Sidebar>,
    pages: AHashMap<ComponentPage, AnyView>,
    focus_handle: FocusHandle,
}

impl Workspace {
    pub fn new(entities: AppEntities, window: &mut Window, cx: &mut Context<Self>) -> Self {
        let header = cx.new(|cx| Header::new(entities.clone(), cx));
        let sidebar = cx.new(|cx| Sidebar::new(entities.clone(), cx));

        // Keep the toast layer in step with the persisted preferences
        cx.observe(&entities.settings, |this, settings, cx| {
            let settings = settings.read(cx).clone();
            this.apply_toast_settings(&settings, cx);
            cx.notify();
        })
        .detach();

        let focus_handle = cx.focus_handle();
        window.focus(&focus_handle);

        Self {
            entities,
            header,
            sidebar,
            pages: AHashMap::new(),
            focus_handle,
        }
    }

    fn apply_toast_settings(&self, settings: &GallerySettings, cx: &mut Context<Self>) {
        let position = settings.toast_position;
        let duration = Duration::from_millis(settings.toast_duration_ms);
        self.entities.toasts.update(cx, |toasts, cx| {
            toasts.set_default_duration(duration);
            if toasts.queue().position != position {
                toasts.set_position(position, cx);
            }
        });
    }

    /// Get or create the view for a page
    fn get_or_create_page(
        &mut self,
        page: ComponentPage,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> AnyView {
        if let Some(view) = self.pages.get(&page) {
            return view.clone();
        }
        debug!(page = ?page, "Building gallery page");
        let view = build_page(page, &self.entities, window, cx);
        self.pages.insert(page, view.clone());
        view
    }

    fn on_nav(&mut self, action: &NavAction, _window: &mut Window, cx: &mut Context<Self>) {
        let current = self.entities.settings.read(cx).last_page;
        let target = match action {
            NavAction::Next => current.next(),
            NavAction::Previous => current.previous(),
        };
        update_settings_and_save(cx, "navigate", move |settings, _| {
            settings.last_page = target;
        });
    }

    fn on_notify(&mut self, action: &NotifyAction, _window: &mut Window, cx: &mut Context<Self>) {
        match action {
            NotifyAction::DismissAll => {
                self.entities
                    .toasts
                    .update(cx, |toasts, cx| toasts.dismiss_all(cx));
            }
        }
    }
}

impl Focusable for Workspace {
    fn focus_handle(&self, _cx: &gpui::App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for Workspace {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let active_page = self.entities.settings.read(cx).last_page;
        let content = self.get_or_create_page(active_page, window, cx);

        div()
            .track_focus(&self.focus_handle)
            .key_context("Workspace")
            .on_action(cx.listener(Self::on_nav))
            .on_action(cx.listener(Self::on_notify))
            .size_full()
            .child(
                Shell::new()
                    .header(self.header.clone())
                    .sidebar(self.sidebar.clone())
                    .content(
                        div()
                            .id("page-content")
                            .size_full()
                            .overflow_y_scroll()
                            .bg(UiColors::surface())
                            .child(content),
                    )
                    .overlay(self.entities.toasts.clone()),
            )
    }
}
