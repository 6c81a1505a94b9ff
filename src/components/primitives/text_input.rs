//! TextInput Component

use gpui::{
    div, prelude::*, px, AnyElement, App, Context, ElementId, Entity, EventEmitter, FocusHandle,
    Focusable, InteractiveElement, IntoElement, KeyDownEvent, MouseButton, MouseDownEvent,
    ParentElement, Render, SharedString, Styled, Window,
};

use crate::helpers::edit_key;
use crate::state::{EditKey, FieldMessage, FieldMeta, InputEvent, InputState, InputType};
use crate::theme::UiColors;

/// A labelled single-line input
pub struct TextInput {
    id: ElementId,
    state: InputState,
    focus_handle: FocusHandle,
}

impl EventEmitter<InputEvent> for TextInput {}

impl TextInput {
    /// Create a new text input
    pub fn new(id: impl Into<ElementId>, state: InputState, cx: &mut Context<Self>) -> Self {
        Self {
            id: id.into(),
            state,
            focus_handle: cx.focus_handle(),
        }
    }

    pub fn state(&self) -> &InputState {
        &self.state
    }

    /// Get the value
    pub fn value(&self) -> &str {
        self.state.value()
    }

    /// Owner write-back
    pub fn set_value(&mut self, value: impl Into<String>, cx: &mut Context<Self>) {
        self.state.set_value(value);
        cx.notify();
    }

    pub fn set_error(&mut self, error: Option<String>, cx: &mut Context<Self>) {
        self.state.meta.error = error;
        cx.notify();
    }

    pub fn set_disabled(&mut self, disabled: bool, cx: &mut Context<Self>) {
        self.state.meta.disabled = disabled;
        cx.notify();
    }

    fn on_key(&mut self, event: &KeyDownEvent, _window: &mut Window, cx: &mut Context<Self>) {
        let Some(key) = edit_key(&event.keystroke) else {
            return;
        };
        if matches!(key, EditKey::Tab { .. }) {
            return;
        }
        if let Some(input_event) = self.state.key(&key) {
            cx.emit(input_event);
        }
        cx.stop_propagation();
        cx.notify();
    }

    fn on_clear(&mut self, _: &MouseDownEvent, window: &mut Window, cx: &mut Context<Self>) {
        if let Some(input_event) = self.state.clear() {
            cx.emit(input_event);
        }
        window.focus(&self.focus_handle);
        cx.stop_propagation();
        cx.notify();
    }
}

impl Focusable for TextInput {
    fn focus_handle(&self, _cx: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for TextInput {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let is_focused = self.focus_handle.is_focused(window);
        let meta = &self.state.meta;

        let (before, after) = self.state.buffer.split_at_cursor();
        let (before, after) = match self.state.input_type {
            InputType::Password => (
                "•".repeat(before.chars().count()),
                "•".repeat(after.chars().count()),
            ),
            _ => (before.to_string(), after.to_string()),
        };

        let field = div()
            .id(self.id.clone())
            .track_focus(&self.focus_handle)
            .on_key_down(cx.listener(Self::on_key))
            .on_mouse_down(
                MouseButton::Left,
                cx.listener(|this, _: &MouseDownEvent, window, _cx| {
                    window.focus(&this.focus_handle);
                }),
            )
            .flex()
            .items_center()
            .gap_2()
            .px_3()
            .py_2()
            .min_w(px(200.0))
            .bg(field_background(meta))
            .border_1()
            .border_color(field_border(meta, is_focused))
            .rounded_md()
            .text_sm()
            .child(text_with_caret(
                before,
                after,
                meta.placeholder.as_deref(),
                is_focused,
            ))
            .when(self.state.shows_clear(), |el| {
                el.child(
                    div()
                        .id("clear")
                        .cursor_pointer()
                        .text_color(UiColors::text_muted())
                        .hover(|s| s.text_color(UiColors::text_primary()))
                        .on_mouse_down(MouseButton::Left, cx.listener(Self::on_clear))
                        .child("×"),
                )
            });

        div()
            .flex()
            .flex_col()
            .gap_1()
            .when_some(field_label(meta), |el, label| el.child(label))
            .child(field)
            .when_some(field_message(meta), |el, message| el.child(message))
    }
}

/// Value text split around a caret; the placeholder shows when empty
pub(crate) fn text_with_caret(
    before: String,
    after: String,
    placeholder: Option<&str>,
    focused: bool,
) -> AnyElement {
    let caret = div().w(px(1.0)).h(px(16.0)).bg(UiColors::primary());

    if before.is_empty() && after.is_empty() {
        return div()
            .flex_1()
            .flex()
            .items_center()
            .when(focused, |el| el.child(caret))
            .child(
                div()
                    .text_color(UiColors::input_placeholder())
                    .child(SharedString::from(placeholder.unwrap_or_default().to_string())),
            )
            .into_any_element();
    }

    div()
        .flex_1()
        .flex()
        .items_center()
        .overflow_hidden()
        .text_color(UiColors::text_primary())
        .child(before)
        .when(focused, |el| el.child(caret))
        .child(after)
        .into_any_element()
}

pub(crate) fn field_background(meta: &FieldMeta) -> gpui::Rgba {
    if meta.disabled {
        UiColors::input_disabled_bg()
    } else {
        UiColors::input_bg()
    }
}

pub(crate) fn field_border(meta: &FieldMeta, focused: bool) -> gpui::Rgba {
    if meta.has_error() {
        UiColors::border_error()
    } else if focused {
        UiColors::border_focus()
    } else {
        UiColors::input_border()
    }
}

/// Label with the required marker
pub(crate) fn field_label(meta: &FieldMeta) -> Option<AnyElement> {
    let label = meta.label.clone()?;
    Some(
        div()
            .flex()
            .gap_1()
            .text_sm()
            .text_color(UiColors::text_primary())
            .child(label)
            .when(meta.required, |el| {
                el.child(div().text_color(UiColors::danger()).child("*"))
            })
            .into_any_element(),
    )
}

/// Error or helper line under the field
pub(crate) fn field_message(meta: &FieldMeta) -> Option<AnyElement> {
    let (text, color) = match meta.message()? {
        FieldMessage::Error(text) => (text, UiColors::danger()),
        FieldMessage::Helper(text) => (text, UiColors::text_muted()),
    };
    Some(
        div()
            .text_xs()
            .text_color(color)
            .child(text.to_string())
            .into_any_element(),
    )
}

/// Create a text input entity
pub fn text_input<V: 'static>(
    id: impl Into<ElementId>,
    state: InputState,
    cx: &mut Context<V>,
) -> Entity<TextInput> {
    let id = id.into();
    cx.new(|cx| TextInput::new(id, state, cx))
}
