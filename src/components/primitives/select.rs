//! Select Component

use gpui::{
    div, prelude::*, px, App, Context, ElementId, EventEmitter, FocusHandle, Focusable,
    InteractiveElement, IntoElement, KeyDownEvent, MouseButton, MouseDownEvent, ParentElement,
    Render, SharedString, StatefulInteractiveElement, Styled, Window,
};

use super::checkbox::Checkbox;
use super::text_input::{field_border, field_label, field_message, text_with_caret};
use crate::helpers::edit_key;
use crate::state::select_state::{DEFAULT_GROUP, NO_OPTIONS_MESSAGE};
use crate::state::{EditKey, FieldMeta, SelectState, SelectValue};
use crate::theme::UiColors;

/// Emitted when an option is chosen or the selection is cleared
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectChanged(pub SelectValue);

/// A dropdown with optional search, groups and multiple selection
pub struct Select {
    id: ElementId,
    state: SelectState,
    meta: FieldMeta,
    focus_handle: FocusHandle,
}

impl EventEmitter<SelectChanged> for Select {}

impl Select {
    /// Create a new select
    pub fn new(id: impl Into<ElementId>, state: SelectState, cx: &mut Context<Self>) -> Self {
        Self {
            id: id.into(),
            state,
            meta: FieldMeta::default(),
            focus_handle: cx.focus_handle(),
        }
    }

    /// Label, helper and error text around the trigger
    pub fn with_meta(mut self, meta: FieldMeta) -> Self {
        self.meta = meta;
        self
    }

    pub fn state(&self) -> &SelectState {
        &self.state
    }

    /// Controlled write-back
    pub fn set_value(&mut self, value: SelectValue, cx: &mut Context<Self>) {
        self.state.set_value(value);
        cx.notify();
    }

    pub fn set_error(&mut self, error: Option<String>, cx: &mut Context<Self>) {
        self.meta.error = error;
        cx.notify();
    }

    fn toggle(&mut self, _: &MouseDownEvent, window: &mut Window, cx: &mut Context<Self>) {
        self.state.toggle_open();
        window.focus(&self.focus_handle);
        cx.notify();
    }

    fn choose(&mut self, value: &str, cx: &mut Context<Self>) {
        if let Some(next) = self.state.choose(value) {
            cx.emit(SelectChanged(next));
        }
        cx.notify();
    }

    fn on_key(&mut self, event: &KeyDownEvent, _window: &mut Window, cx: &mut Context<Self>) {
        let Some(key) = edit_key(&event.keystroke) else {
            return;
        };
        match key {
            EditKey::Escape if self.state.is_open() => self.state.close(),
            EditKey::Enter | EditKey::Down if !self.state.is_open() => self.state.toggle_open(),
            EditKey::Insert(text) if self.state.is_open() => {
                let query = format!("{}{}", self.state.query(), text);
                self.state.set_query(query);
            }
            EditKey::Backspace if self.state.is_open() => {
                let mut query = self.state.query().to_string();
                query.pop();
                self.state.set_query(query);
            }
            _ => return,
        }
        cx.stop_propagation();
        cx.notify();
    }

    fn render_menu(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let groups = self.state.grouped_options();
        let show_headers = groups.len() > 1 || groups.keys().any(|g| *g != DEFAULT_GROUP);
        let multiple = self.state.is_multiple();

        let mut menu = div()
            .id("select-menu")
            .absolute()
            .top(px(40.0))
            .left_0()
            .w_full()
            .max_h(px(240.0))
            .overflow_y_scroll()
            .occlude()
            .bg(UiColors::surface())
            .border_1()
            .border_color(UiColors::border())
            .rounded_md()
            .shadow_md()
            .py_1();

        if self.state.searchable {
            menu = menu.child(
                div()
                    .mx_2()
                    .mb_1()
                    .px_2()
                    .py_1()
                    .border_1()
                    .border_color(UiColors::input_border())
                    .rounded_sm()
                    .text_sm()
                    .child(text_with_caret(
                        self.state.query().to_string(),
                        String::new(),
                        Some("Search..."),
                        true,
                    )),
            );
        }

        if groups.is_empty() {
            return menu.child(
                div()
                    .px_3()
                    .py_2()
                    .text_sm()
                    .text_color(UiColors::text_muted())
                    .child(NO_OPTIONS_MESSAGE),
            );
        }

        for (group, options) in groups {
            if show_headers {
                menu = menu.child(
                    div()
                        .px_3()
                        .pt_2()
                        .pb_1()
                        .text_xs()
                        .text_color(UiColors::text_muted())
                        .child(SharedString::from(group.to_string())),
                );
            }
            for option in options {
                let selected = self.state.is_selected(&option.value);
                let value = option.value.clone();
                let disabled = option.disabled;
                menu = menu.child(
                    div()
                        .id(SharedString::from(format!("option-{}", option.value)))
                        .flex()
                        .items_center()
                        .gap_2()
                        .px_3()
                        .py(px(6.0))
                        .text_sm()
                        .text_color(UiColors::text_primary())
                        .when(selected && !multiple, |el| el.bg(UiColors::table_row_selected()))
                        .when(multiple, |el| el.child(Checkbox::new("mark").checked(selected)))
                        .child(option.label.clone())
                        .when(disabled, |el| el.opacity(0.5).cursor_not_allowed())
                        .when(!disabled, |el| {
                            el.cursor_pointer()
                                .hover(|s| s.bg(UiColors::table_row_hover()))
                                .on_click(cx.listener(move |this, _, _window, cx| {
                                    this.choose(&value, cx);
                                }))
                        }),
                );
            }
        }
        menu
    }
}

impl Focusable for Select {
    fn focus_handle(&self, _cx: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for Select {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let is_focused = self.focus_handle.is_focused(window);
        let has_value = self.state.has_value();
        let disabled = self.state.disabled;

        let text_color = if has_value {
            UiColors::text_primary()
        } else {
            UiColors::input_placeholder()
        };

        let trigger = div()
            .id(self.id.clone())
            .track_focus(&self.focus_handle)
            .on_key_down(cx.listener(Self::on_key))
            .px_3()
            .py_2()
            .bg(if disabled {
                UiColors::input_disabled_bg()
            } else {
                UiColors::input_bg()
            })
            .border_1()
            .border_color(field_border(&self.meta, is_focused || self.state.is_open()))
            .rounded_md()
            .text_color(text_color)
            .text_sm()
            .min_w(px(200.0))
            .flex()
            .items_center()
            .justify_between()
            .gap_2()
            .when(disabled, |el| el.opacity(0.5).cursor_not_allowed())
            .when(!disabled, |el| {
                el.cursor_pointer()
                    .on_mouse_down(MouseButton::Left, cx.listener(Self::toggle))
            })
            .child(div().flex_1().child(self.state.display_text()))
            .when(has_value && !disabled, |el| {
                el.child(
                    div()
                        .id("clear")
                        .text_color(UiColors::text_muted())
                        .hover(|s| s.text_color(UiColors::text_primary()))
                        .on_mouse_down(
                            MouseButton::Left,
                            cx.listener(|this, _: &MouseDownEvent, _window, cx| {
                                if let Some(next) = this.state.clear() {
                                    cx.emit(SelectChanged(next));
                                }
                                cx.stop_propagation();
                                cx.notify();
                            }),
                        )
                        .child("×"),
                )
            })
            .child(
                div()
                    .text_color(UiColors::text_muted())
                    .text_size(px(10.0))
                    .child(if self.state.is_open() { "▲" } else { "▼" }),
            );

        div()
            .flex()
            .flex_col()
            .gap_1()
            .when_some(field_label(&self.meta), |el, label| el.child(label))
            .child(
                div()
                    .relative()
                    .child(trigger)
                    .when(self.state.is_open(), |el| {
                        el.child(self.render_menu(cx)).on_mouse_down_out(cx.listener(
                            |this, _: &MouseDownEvent, _window, cx| {
                                this.state.close();
                                cx.notify();
                            },
                        ))
                    }),
            )
            .when_some(field_message(&self.meta), |el, message| el.child(message))
    }
}
