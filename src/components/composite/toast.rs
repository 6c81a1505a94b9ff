//! Toast Component
//!
//! Renders a `ToastQueue` as a stack anchored to one corner or edge of its
//! container, and drives auto-dismiss from a background timer.

use std::time::Instant;

use gpui::{
    div, prelude::*, px, Context, EventEmitter, FontWeight, InteractiveElement, IntoElement,
    ParentElement, Render, Rgba, SharedString, StatefulInteractiveElement, Styled, Task, Window,
};
use uuid::Uuid;

use crate::state::{Toast, ToastAction, ToastKind, ToastOptions, ToastPosition, ToastQueue};
use crate::theme::UiColors;

/// Emitted when a toast's action button is pressed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastActionTriggered(pub ToastAction);

pub struct ToastLayer {
    queue: ToastQueue,
    expiry_task: Option<Task<()>>,
}

impl EventEmitter<ToastActionTriggered> for ToastLayer {}

impl ToastLayer {
    pub fn new(queue: ToastQueue) -> Self {
        Self {
            queue,
            expiry_task: None,
        }
    }

    pub fn queue(&self) -> &ToastQueue {
        &self.queue
    }

    pub fn set_position(&mut self, position: ToastPosition, cx: &mut Context<Self>) {
        self.queue.position = position;
        cx.notify();
    }

    pub fn set_default_duration(&mut self, duration: std::time::Duration) {
        self.queue.default_duration = duration;
    }

    /// Show a toast
    pub fn push(
        &mut self,
        message: impl Into<SharedString>,
        options: ToastOptions,
        cx: &mut Context<Self>,
    ) -> Uuid {
        let id = self.queue.push(message, options, Instant::now()).id;
        self.schedule_expiry(cx);
        cx.notify();
        id
    }

    pub fn success(&mut self, message: impl Into<SharedString>, cx: &mut Context<Self>) -> Uuid {
        self.push_kind(ToastKind::Success, message, cx)
    }

    pub fn error(&mut self, message: impl Into<SharedString>, cx: &mut Context<Self>) -> Uuid {
        self.push_kind(ToastKind::Error, message, cx)
    }

    pub fn warning(&mut self, message: impl Into<SharedString>, cx: &mut Context<Self>) -> Uuid {
        self.push_kind(ToastKind::Warning, message, cx)
    }

    pub fn info(&mut self, message: impl Into<SharedString>, cx: &mut Context<Self>) -> Uuid {
        self.push_kind(ToastKind::Info, message, cx)
    }

    fn push_kind(
        &mut self,
        kind: ToastKind,
        message: impl Into<SharedString>,
        cx: &mut Context<Self>,
    ) -> Uuid {
        let options = ToastOptions {
            kind,
            ..ToastOptions::default()
        };
        self.push(message, options, cx)
    }

    pub fn dismiss(&mut self, id: Uuid, cx: &mut Context<Self>) {
        if self.queue.dismiss(id) {
            self.schedule_expiry(cx);
            cx.notify();
        }
    }

    pub fn dismiss_all(&mut self, cx: &mut Context<Self>) {
        self.queue.clear();
        self.expiry_task = None;
        cx.notify();
    }

    /// Sleep until the earliest deadline, expire, and re-arm
    fn schedule_expiry(&mut self, cx: &mut Context<Self>) {
        let Some(deadline) = self.queue.next_deadline() else {
            self.expiry_task = None;
            return;
        };
        let wait = deadline.saturating_duration_since(Instant::now());
        let task = cx.spawn(async move |handle, cx| {
            cx.background_executor().timer(wait).await;
            let _ = handle.update(cx, |this, cx| {
                if this.queue.expire(Instant::now()) > 0 {
                    cx.notify();
                }
                this.schedule_expiry(cx);
            });
        });
        self.expiry_task = Some(task);
    }

    fn kind_colors(kind: ToastKind) -> (Rgba, Rgba) {
        match kind {
            ToastKind::Success => (UiColors::success_bg(), UiColors::success()),
            ToastKind::Error => (UiColors::danger_bg(), UiColors::danger()),
            ToastKind::Warning => (UiColors::warning_bg(), UiColors::warning()),
            ToastKind::Info => (UiColors::info_bg(), UiColors::info()),
        }
    }

    fn render_toast(&self, toast: &Toast, cx: &mut Context<Self>) -> impl IntoElement {
        let (bg, accent) = Self::kind_colors(toast.kind);
        let id = toast.id;

        div()
            .id(SharedString::from(id.to_string()))
            .occlude()
            .w(px(320.0))
            .flex()
            .items_start()
            .gap_3()
            .px_4()
            .py_3()
            .bg(bg)
            .border_l_4()
            .border_color(accent)
            .rounded_md()
            .shadow_md()
            .child(
                div()
                    .size(px(20.0))
                    .flex_none()
                    .rounded_full()
                    .bg(accent)
                    .flex()
                    .items_center()
                    .justify_center()
                    .text_xs()
                    .font_weight(FontWeight::BOLD)
                    .text_color(UiColors::text_light())
                    .child(toast.kind.icon()),
            )
            .child(
                div()
                    .flex_1()
                    .flex()
                    .flex_col()
                    .gap_1()
                    .child(
                        div()
                            .text_sm()
                            .text_color(UiColors::text_primary())
                            .child(toast.message.clone()),
                    )
                    .when_some(toast.action.clone(), |el, action| {
                        el.child(
                            div()
                                .id("toast-action")
                                .text_sm()
                                .font_weight(FontWeight::MEDIUM)
                                .text_color(accent)
                                .cursor_pointer()
                                .hover(|s| s.underline())
                                .child(action.label)
                                .on_click(cx.listener(move |this, _, _window, cx| {
                                    if let Some(action) = this.queue.trigger_action(id) {
                                        cx.emit(ToastActionTriggered(action));
                                    }
                                    this.schedule_expiry(cx);
                                    cx.notify();
                                })),
                        )
                    }),
            )
            .child(
                div()
                    .id("toast-close")
                    .text_color(UiColors::text_muted())
                    .cursor_pointer()
                    .hover(|s| s.text_color(UiColors::text_primary()))
                    .child("×")
                    .on_click(cx.listener(move |this, _, _window, cx| this.dismiss(id, cx))),
            )
    }
}

impl Render for ToastLayer {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let position = self.queue.position;
        let toasts: Vec<_> = self
            .queue
            .toasts()
            .iter()
            .map(|toast| self.render_toast(toast, cx).into_any_element())
            .collect();

        let stack = div()
            .absolute()
            .flex()
            .gap_2()
            .p_4()
            .map(|el| {
                if position.is_top() {
                    el.top_0().flex_col()
                } else {
                    el.bottom_0().flex_col_reverse()
                }
            })
            .map(|el| match position {
                ToastPosition::TopLeft | ToastPosition::BottomLeft => el.left_0().items_start(),
                ToastPosition::TopRight | ToastPosition::BottomRight => el.right_0().items_end(),
                ToastPosition::TopCenter | ToastPosition::BottomCenter => {
                    el.left_0().right_0().items_center()
                }
            })
            .children(toasts);

        div().absolute().inset_0().child(stack)
    }
}
