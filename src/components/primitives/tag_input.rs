//! TagInput Component

use std::time::{Duration, Instant};

use gpui::{
    div, prelude::*, px, App, Context, ElementId, EventEmitter, FocusHandle, Focusable,
    InteractiveElement, IntoElement, KeyDownEvent, MouseButton, MouseDownEvent, ParentElement,
    Render, SharedString, StatefulInteractiveElement, Styled, Task, Window,
};

use super::badge::{Badge, BadgeVariant};
use super::text_input::text_with_caret;
use crate::constants::TAG_ERROR_DISPLAY_MS;
use crate::helpers::edit_key;
use crate::state::{EditKey, TagState};
use crate::theme::UiColors;

/// Emitted with the full tag list after every change
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagsChanged(pub Vec<String>);

pub struct TagInput {
    id: ElementId,
    state: TagState,
    placeholder: SharedString,
    focus_handle: FocusHandle,
    error_task: Option<Task<()>>,
}

impl EventEmitter<TagsChanged> for TagInput {}

impl TagInput {
    pub fn new(id: impl Into<ElementId>, state: TagState, cx: &mut Context<Self>) -> Self {
        Self {
            id: id.into(),
            state,
            placeholder: "Add a tag...".into(),
            focus_handle: cx.focus_handle(),
            error_task: None,
        }
    }

    pub fn placeholder(mut self, placeholder: impl Into<SharedString>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn tags(&self) -> &[String] {
        self.state.tags()
    }

    fn changed(&mut self, cx: &mut Context<Self>) {
        cx.emit(TagsChanged(self.state.tags().to_vec()));
    }

    /// Hide the error once its display time is over
    fn schedule_error_expiry(&mut self, cx: &mut Context<Self>) {
        if self.state.error().is_none() {
            return;
        }
        let task = cx.spawn(async move |handle, cx| {
            cx.background_executor()
                .timer(Duration::from_millis(TAG_ERROR_DISPLAY_MS))
                .await;
            let _ = handle.update(cx, |this, cx| {
                if this.state.expire_error(Instant::now()) {
                    cx.notify();
                }
            });
        });
        self.error_task = Some(task);
    }

    fn on_key(&mut self, event: &KeyDownEvent, _window: &mut Window, cx: &mut Context<Self>) {
        let Some(key) = edit_key(&event.keystroke) else {
            return;
        };
        if matches!(key, EditKey::Tab { .. }) {
            return;
        }
        if self.state.key(&key, Instant::now()) {
            self.changed(cx);
        }
        self.schedule_error_expiry(cx);
        cx.stop_propagation();
        cx.notify();
    }

    fn pick(&mut self, suggestion: &str, cx: &mut Context<Self>) {
        if let Ok(true) = self.state.pick_suggestion(suggestion, Instant::now()) {
            self.changed(cx);
        }
        self.schedule_error_expiry(cx);
        cx.notify();
    }

    fn render_suggestions(&self, cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .id("suggestions")
            .absolute()
            .top_full()
            .left_0()
            .mt_1()
            .w_full()
            .max_h(px(200.0))
            .overflow_y_scroll()
            .occlude()
            .bg(UiColors::surface())
            .border_1()
            .border_color(UiColors::border())
            .rounded_md()
            .shadow_md()
            .py_1()
            .children(self.state.filtered_suggestions().into_iter().map(|suggestion| {
                let value = suggestion.to_string();
                div()
                    .id(SharedString::from(format!("suggestion-{suggestion}")))
                    .px_3()
                    .py(px(6.0))
                    .text_sm()
                    .cursor_pointer()
                    .hover(|s| s.bg(UiColors::table_row_hover()))
                    .child(value.clone())
                    .on_mouse_down(
                        MouseButton::Left,
                        cx.listener(move |this, _: &MouseDownEvent, _window, cx| {
                            this.pick(&value, cx);
                            cx.stop_propagation();
                        }),
                    )
            }))
    }
}

impl Focusable for TagInput {
    fn focus_handle(&self, _cx: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for TagInput {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let is_focused = self.focus_handle.is_focused(window);
        let has_error = self.state.error().is_some();
        let (before, after) = self.state.input.split_at_cursor();
        let placeholder = self.state.tags().is_empty().then(|| self.placeholder.to_string());

        let tags: Vec<Badge> = self
            .state
            .tags()
            .iter()
            .enumerate()
            .map(|(index, tag)| {
                let tag = tag.clone();
                Badge::new(("tag", index), tag.clone())
                    .variant(BadgeVariant::Primary)
                    .on_remove(cx.listener(move |this, _, _window, cx| {
                        if this.state.remove(&tag) {
                            this.changed(cx);
                        }
                        cx.notify();
                    }))
            })
            .collect();

        let field = div()
            .id(self.id.clone())
            .track_focus(&self.focus_handle)
            .on_key_down(cx.listener(Self::on_key))
            .on_mouse_down(
                MouseButton::Left,
                cx.listener(|this, _: &MouseDownEvent, window, cx| {
                    window.focus(&this.focus_handle);
                    this.state.focus();
                    cx.notify();
                }),
            )
            .on_mouse_down_out(cx.listener(|this, _: &MouseDownEvent, _window, cx| {
                this.state.hide_suggestions();
                cx.notify();
            }))
            .flex()
            .flex_wrap()
            .items_center()
            .gap_1()
            .min_h(px(38.0))
            .min_w(px(280.0))
            .px_2()
            .py_1()
            .bg(UiColors::input_bg())
            .border_1()
            .border_color(if has_error {
                UiColors::border_error()
            } else if is_focused {
                UiColors::border_focus()
            } else {
                UiColors::input_border()
            })
            .rounded_md()
            .text_sm()
            .children(tags)
            .when(!self.state.is_full(), |el| {
                el.child(div().min_w(px(80.0)).child(text_with_caret(
                    before.to_string(),
                    after.to_string(),
                    placeholder.as_deref(),
                    is_focused,
                )))
            });

        div()
            .flex()
            .flex_col()
            .gap_1()
            .child(
                div()
                    .relative()
                    .child(field)
                    .when(self.state.shows_suggestions(), |el| {
                        el.child(self.render_suggestions(cx))
                    }),
            )
            .child(
                div()
                    .flex()
                    .justify_between()
                    .text_xs()
                    .child(
                        div()
                            .text_color(UiColors::danger())
                            .children(self.state.error().map(|e| e.to_string())),
                    )
                    .when_some(self.state.counter_text(), |el, counter| {
                        el.child(div().text_color(UiColors::text_muted()).child(counter))
                    }),
            )
    }
}
