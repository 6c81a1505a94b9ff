//! SearchBar Component

use std::time::Instant;

use gpui::{
    div, prelude::*, px, App, Context, ElementId, EventEmitter, FocusHandle, Focusable,
    InteractiveElement, IntoElement, KeyDownEvent, MouseButton, MouseDownEvent, ParentElement,
    Render, SharedString, StatefulInteractiveElement, Styled, Task, Window,
};

use super::spinner::{Spinner, SpinnerSize};
use super::text_input::text_with_caret;
use crate::helpers::edit_key;
use crate::state::{EditKey, SearchEvent, SearchState};
use crate::theme::UiColors;

/// Search field with debounced reporting and recent searches.
///
/// Emits `SearchEvent::Changed` on every edit and `SearchEvent::Submitted`
/// when a value settles, Enter is pressed or a recent search is picked.
pub struct SearchBar {
    id: ElementId,
    state: SearchState,
    placeholder: SharedString,
    focus_handle: FocusHandle,
    debounce_task: Option<Task<()>>,
}

impl EventEmitter<SearchEvent> for SearchBar {}

impl SearchBar {
    pub fn new(id: impl Into<ElementId>, state: SearchState, cx: &mut Context<Self>) -> Self {
        Self {
            id: id.into(),
            state,
            placeholder: "Search...".into(),
            focus_handle: cx.focus_handle(),
            debounce_task: None,
        }
    }

    pub fn placeholder(mut self, placeholder: impl Into<SharedString>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn value(&self) -> &str {
        self.state.value()
    }

    pub fn set_loading(&mut self, loading: bool, cx: &mut Context<Self>) {
        self.state.loading = loading;
        cx.notify();
    }

    /// Report the value once it has been stable for the debounce delay
    fn schedule_search(&mut self, cx: &mut Context<Self>) {
        let Some(wait) = self.state.pending_for(Instant::now()) else {
            return;
        };
        let task = cx.spawn(async move |handle, cx| {
            cx.background_executor().timer(wait).await;
            let _ = handle.update(cx, |this, cx| {
                if let Some(query) = this.state.poll(Instant::now()) {
                    cx.emit(SearchEvent::Submitted(query));
                }
            });
        });
        self.debounce_task = Some(task);
    }

    fn sync_focus(&mut self, window: &mut Window) {
        if !self.state.is_focused() && self.focus_handle.is_focused(window) {
            window.blur();
        }
    }

    fn on_key(&mut self, event: &KeyDownEvent, window: &mut Window, cx: &mut Context<Self>) {
        let Some(key) = edit_key(&event.keystroke) else {
            return;
        };
        if matches!(key, EditKey::Tab { .. }) {
            return;
        }
        match self.state.key(&key, Instant::now()) {
            Some(SearchEvent::Changed(value)) => {
                cx.emit(SearchEvent::Changed(value));
                self.schedule_search(cx);
            }
            Some(event) => {
                self.debounce_task = None;
                cx.emit(event);
            }
            None => {}
        }
        self.sync_focus(window);
        cx.stop_propagation();
        cx.notify();
    }

    fn render_recent(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let items: Vec<String> = self.state.recent_searches().map(str::to_string).collect();

        div()
            .id("recent-searches")
            .absolute()
            .top_full()
            .left_0()
            .mt_1()
            .w_full()
            .occlude()
            .bg(UiColors::surface())
            .border_1()
            .border_color(UiColors::border())
            .rounded_md()
            .shadow_md()
            .py_1()
            .child(
                div()
                    .px_3()
                    .py_1()
                    .text_xs()
                    .text_color(UiColors::text_muted())
                    .child("Recent searches"),
            )
            .children(items.into_iter().enumerate().map(|(index, item)| {
                let picked = item.clone();
                let removed = item.clone();
                div()
                    .id(("recent", index))
                    .flex()
                    .items_center()
                    .justify_between()
                    .px_3()
                    .py(px(6.0))
                    .text_sm()
                    .cursor_pointer()
                    .hover(|s| s.bg(UiColors::table_row_hover()))
                    .on_mouse_down(
                        MouseButton::Left,
                        cx.listener(move |this, _: &MouseDownEvent, window, cx| {
                            if let Some(query) = this.state.select_recent(&picked) {
                                this.debounce_task = None;
                                cx.emit(SearchEvent::Submitted(query));
                            }
                            this.sync_focus(window);
                            cx.stop_propagation();
                            cx.notify();
                        }),
                    )
                    .child(item)
                    .child(
                        div()
                            .id(("remove-recent", index))
                            .text_color(UiColors::text_muted())
                            .hover(|s| s.text_color(UiColors::danger()))
                            .on_mouse_down(
                                MouseButton::Left,
                                cx.listener(move |this, _: &MouseDownEvent, _window, cx| {
                                    this.state.remove_recent(&removed);
                                    cx.stop_propagation();
                                    cx.notify();
                                }),
                            )
                            .child("×"),
                    )
            }))
    }
}

impl Focusable for SearchBar {
    fn focus_handle(&self, _cx: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for SearchBar {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let is_focused = self.focus_handle.is_focused(window) && self.state.is_focused();
        let (before, after) = self.state.input.split_at_cursor();

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
                this.state.blur();
                cx.notify();
            }))
            .flex()
            .items_center()
            .gap_2()
            .px_3()
            .py_2()
            .min_w(px(280.0))
            .bg(UiColors::input_bg())
            .border_1()
            .border_color(if is_focused {
                UiColors::border_focus()
            } else {
                UiColors::input_border()
            })
            .rounded_full()
            .text_sm()
            .child(div().text_color(UiColors::text_muted()).child("⌕"))
            .child(text_with_caret(
                before.to_string(),
                after.to_string(),
                Some(self.placeholder.as_ref()),
                is_focused,
            ))
            .when(self.state.loading, |el| {
                el.child(Spinner::new().size(SpinnerSize::Small))
            })
            .when(self.state.shows_clear(), |el| {
                el.child(
                    div()
                        .id("clear")
                        .cursor_pointer()
                        .text_color(UiColors::text_muted())
                        .hover(|s| s.text_color(UiColors::text_primary()))
                        .on_mouse_down(
                            MouseButton::Left,
                            cx.listener(|this, _: &MouseDownEvent, window, cx| {
                                this.state.clear();
                                this.debounce_task = None;
                                window.focus(&this.focus_handle);
                                cx.emit(SearchEvent::Changed(String::new()));
                                cx.stop_propagation();
                                cx.notify();
                            }),
                        )
                        .child("×"),
                )
            });

        div()
            .relative()
            .child(field)
            .when(self.state.shows_recent(), |el| el.child(self.render_recent(cx)))
    }
}
