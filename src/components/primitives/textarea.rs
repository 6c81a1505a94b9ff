//! Textarea Component

use gpui::{
    div, prelude::*, px, App, Context, ElementId, EventEmitter, FocusHandle, Focusable,
    InteractiveElement, IntoElement, KeyDownEvent, MouseButton, MouseDownEvent, ParentElement,
    Render, Styled, Window,
};

use super::text_input::{field_background, field_border, field_label, field_message, text_with_caret};
use crate::helpers::edit_key;
use crate::state::{EditKey, TextareaState};
use crate::theme::{Typography, UiColors};

/// Emitted with the new value after every edit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextareaChanged(pub String);

pub struct Textarea {
    id: ElementId,
    state: TextareaState,
    focus_handle: FocusHandle,
}

impl EventEmitter<TextareaChanged> for Textarea {}

impl Textarea {
    pub fn new(id: impl Into<ElementId>, state: TextareaState, cx: &mut Context<Self>) -> Self {
        Self {
            id: id.into(),
            state,
            focus_handle: cx.focus_handle(),
        }
    }

    pub fn state(&self) -> &TextareaState {
        &self.state
    }

    pub fn value(&self) -> &str {
        self.state.value()
    }

    pub fn set_value(&mut self, value: impl Into<String>, cx: &mut Context<Self>) {
        self.state.set_value(value);
        cx.notify();
    }

    fn on_key(&mut self, event: &KeyDownEvent, _window: &mut Window, cx: &mut Context<Self>) {
        let Some(key) = edit_key(&event.keystroke) else {
            return;
        };
        if matches!(key, EditKey::Tab { .. } | EditKey::Escape) {
            return;
        }
        if let Some(value) = self.state.key(&key) {
            cx.emit(TextareaChanged(value));
        }
        cx.stop_propagation();
        cx.notify();
    }
}

impl Focusable for Textarea {
    fn focus_handle(&self, _cx: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for Textarea {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let is_focused = self.focus_handle.is_focused(window);
        let meta = &self.state.meta;
        let rows = self.state.visible_rows() as f32;
        let line_height = Typography::line_height(Typography::TEXT_SM);
        let lines = if self.state.buffer.is_empty() {
            div().flex_1().child(text_with_caret(
                String::new(),
                String::new(),
                meta.placeholder.as_deref(),
                is_focused,
            ))
        } else {
            // one row per line; empty lines keep their height
            div().flex().flex_col().flex_1().children(
                self.state.buffer.lines().into_iter().map(|(line, cursor)| {
                    let (before, after) = line.split_at(cursor.unwrap_or(line.len()));
                    div().h(line_height).child(text_with_caret(
                        before.to_string(),
                        after.to_string(),
                        None,
                        is_focused && cursor.is_some(),
                    ))
                }),
            )
        };

        let area = div()
            .id(self.id.clone())
            .track_focus(&self.focus_handle)
            .on_key_down(cx.listener(Self::on_key))
            .on_mouse_down(
                MouseButton::Left,
                cx.listener(|this, _: &MouseDownEvent, window, _cx| {
                    window.focus(&this.focus_handle);
                }),
            )
            .relative()
            .flex()
            .px_3()
            .py_2()
            .min_w(px(280.0))
            .h(line_height * rows + px(16.0))
            .overflow_y_scroll()
            .bg(field_background(meta))
            .border_1()
            .border_color(field_border(meta, is_focused))
            .rounded_md()
            .text_sm()
            .child(lines)
            .when(self.state.shows_clear(), |el| {
                el.child(
                    div()
                        .id("clear")
                        .absolute()
                        .top(px(6.0))
                        .right(px(8.0))
                        .cursor_pointer()
                        .text_color(UiColors::text_muted())
                        .on_mouse_down(
                            MouseButton::Left,
                            cx.listener(|this, _: &MouseDownEvent, window, cx| {
                                if let Some(value) = this.state.clear() {
                                    cx.emit(TextareaChanged(value));
                                }
                                window.focus(&this.focus_handle);
                                cx.stop_propagation();
                                cx.notify();
                            }),
                        )
                        .child("×"),
                )
            });

        let footer = field_message(meta);
        let counter = self.state.char_count_text();

        div()
            .flex()
            .flex_col()
            .gap_1()
            .when_some(field_label(meta), |el, label| el.child(label))
            .child(area)
            .when(footer.is_some() || counter.is_some(), |el| {
                el.child(
                    div()
                        .flex()
                        .justify_between()
                        .child(div().children(footer))
                        .when_some(counter, |el, counter| {
                            el.child(
                                div()
                                    .text_xs()
                                    .text_color(UiColors::text_muted())
                                    .child(counter),
                            )
                        }),
                )
            })
    }
}
