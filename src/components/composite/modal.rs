//! Modal Component
//!
//! A modal dialog with an overlay, a title bar, a body and footer actions.
//! While open, Tab and Shift-Tab cycle through the dialog's buttons only, and
//! focus returns to the previously focused element on close.

use gpui::{
    div, prelude::*, px, AnyView, App, Context, EventEmitter, FocusHandle, Focusable, FontWeight,
    InteractiveElement, IntoElement, KeyDownEvent, MouseButton, MouseDownEvent, ParentElement,
    Pixels, Render, SharedString, StatefulInteractiveElement, Styled, Window,
};
use tracing::debug;

use crate::components::primitives::{Button, ButtonVariant};
use crate::helpers::{edit_key, FocusRing};
use crate::state::EditKey;
use crate::theme::UiColors;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ModalSize {
    Small,
    #[default]
    Medium,
    Large,
    ExtraLarge,
    /// Fills the window apart from a margin
    Full,
}

impl ModalSize {
    pub const ALL: [ModalSize; 5] = [
        ModalSize::Small,
        ModalSize::Medium,
        ModalSize::Large,
        ModalSize::ExtraLarge,
        ModalSize::Full,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ModalSize::Small => "sm",
            ModalSize::Medium => "md",
            ModalSize::Large => "lg",
            ModalSize::ExtraLarge => "xl",
            ModalSize::Full => "full",
        }
    }

    fn max_width(&self) -> Option<Pixels> {
        match self {
            ModalSize::Small => Some(px(400.0)),
            ModalSize::Medium => Some(px(560.0)),
            ModalSize::Large => Some(px(720.0)),
            ModalSize::ExtraLarge => Some(px(960.0)),
            ModalSize::Full => None,
        }
    }
}

/// Footer button
#[derive(Debug, Clone)]
pub struct ModalAction {
    pub id: SharedString,
    pub label: SharedString,
    pub variant: ButtonVariant,
}

impl ModalAction {
    pub fn new(id: impl Into<SharedString>, label: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            variant: ButtonVariant::Secondary,
        }
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalEvent {
    Opened,
    Closed,
    /// A footer button was pressed; the owner decides whether to close
    Action(SharedString),
}

/// Focusable element inside the dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ModalFocus {
    Close,
    Action(usize),
}

pub struct Modal {
    title: SharedString,
    description: Option<SharedString>,
    content: Option<AnyView>,
    size: ModalSize,
    actions: Vec<ModalAction>,
    open: bool,
    close_on_overlay_click: bool,
    close_on_escape: bool,
    show_close_button: bool,
    focus_handle: FocusHandle,
    close_handle: FocusHandle,
    action_handles: Vec<FocusHandle>,
    ring: FocusRing<ModalFocus>,
    restore_focus: Option<FocusHandle>,
}

impl EventEmitter<ModalEvent> for Modal {}

impl Modal {
    /// Create a closed modal
    pub fn new(title: impl Into<SharedString>, cx: &mut Context<Self>) -> Self {
        let mut modal = Self {
            title: title.into(),
            description: None,
            content: None,
            size: ModalSize::Medium,
            actions: Vec::new(),
            open: false,
            close_on_overlay_click: true,
            close_on_escape: true,
            show_close_button: true,
            focus_handle: cx.focus_handle(),
            close_handle: cx.focus_handle(),
            action_handles: Vec::new(),
            ring: FocusRing::new(Vec::new()),
            restore_focus: None,
        };
        modal.rebuild_ring();
        modal
    }

    pub fn set_title(&mut self, title: impl Into<SharedString>) {
        self.title = title.into();
    }

    pub fn set_description(&mut self, description: Option<SharedString>) {
        self.description = description;
    }

    /// Arbitrary body view
    pub fn set_content(&mut self, content: Option<AnyView>) {
        self.content = content;
    }

    pub fn set_size(&mut self, size: ModalSize) {
        self.size = size;
    }

    pub fn size(&self) -> ModalSize {
        self.size
    }

    pub fn set_actions(&mut self, actions: Vec<ModalAction>, cx: &mut Context<Self>) {
        self.action_handles = actions.iter().map(|_| cx.focus_handle()).collect();
        self.actions = actions;
        self.rebuild_ring();
    }

    pub fn set_close_on_overlay_click(&mut self, close: bool) {
        self.close_on_overlay_click = close;
    }

    pub fn set_close_on_escape(&mut self, close: bool) {
        self.close_on_escape = close;
    }

    pub fn set_show_close_button(&mut self, show: bool) {
        self.show_close_button = show;
        self.rebuild_ring();
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    fn rebuild_ring(&mut self) {
        let mut items = Vec::with_capacity(self.actions.len() + 1);
        if self.show_close_button {
            items.push(ModalFocus::Close);
        }
        items.extend((0..self.actions.len()).map(ModalFocus::Action));
        self.ring.set_items(items);
    }

    fn handle_for(&self, focus: ModalFocus) -> Option<&FocusHandle> {
        match focus {
            ModalFocus::Close => Some(&self.close_handle),
            ModalFocus::Action(ix) => self.action_handles.get(ix),
        }
    }

    fn focus_current(&self, window: &mut Window) {
        match self.ring.current().and_then(|f| self.handle_for(*f)) {
            Some(handle) => window.focus(handle),
            None => window.focus(&self.focus_handle),
        }
    }

    /// Open the dialog and move focus to its first button
    pub fn open(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        if self.open {
            return;
        }
        self.open = true;
        self.restore_focus = window.focused(cx);
        self.ring.activate();
        self.focus_current(window);
        debug!(title = %self.title, "modal opened");
        cx.emit(ModalEvent::Opened);
        cx.notify();
    }

    /// Close the dialog and give focus back
    pub fn close(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        if !self.open {
            return;
        }
        self.open = false;
        self.ring.blur();
        if let Some(handle) = self.restore_focus.take() {
            window.focus(&handle);
        }
        debug!(title = %self.title, "modal closed");
        cx.emit(ModalEvent::Closed);
        cx.notify();
    }

    fn press(&mut self, focus: ModalFocus, window: &mut Window, cx: &mut Context<Self>) {
        match focus {
            ModalFocus::Close => self.close(window, cx),
            ModalFocus::Action(ix) => {
                if let Some(action) = self.actions.get(ix) {
                    cx.emit(ModalEvent::Action(action.id.clone()));
                }
            }
        }
    }

    fn on_key(&mut self, event: &KeyDownEvent, window: &mut Window, cx: &mut Context<Self>) {
        match edit_key(&event.keystroke) {
            Some(EditKey::Tab { shift }) => {
                self.ring.tab(shift);
                self.focus_current(window);
            }
            Some(EditKey::Escape) if self.close_on_escape => self.close(window, cx),
            Some(EditKey::Enter) => match self.ring.current().copied() {
                Some(focus) => self.press(focus, window, cx),
                None => return,
            },
            _ => return,
        }
        cx.stop_propagation();
        cx.notify();
    }

    fn render_header(&self, window: &Window, cx: &mut Context<Self>) -> impl IntoElement {
        let close_focused = self.close_handle.is_focused(window);

        div()
            .px_6()
            .py_4()
            .border_b_1()
            .border_color(UiColors::border())
            .flex()
            .items_center()
            .justify_between()
            .child(
                div()
                    .text_size(px(16.0))
                    .font_weight(FontWeight::SEMIBOLD)
                    .text_color(UiColors::text_primary())
                    .child(self.title.clone()),
            )
            .when(self.show_close_button, |el| {
                el.child(
                    div()
                        .id("modal-close")
                        .track_focus(&self.close_handle)
                        .size(px(24.0))
                        .rounded_sm()
                        .flex()
                        .items_center()
                        .justify_center()
                        .border_1()
                        .border_color(if close_focused {
                            UiColors::border_focus()
                        } else {
                            gpui::rgba(0x00000000)
                        })
                        .text_color(UiColors::text_muted())
                        .text_size(px(16.0))
                        .cursor_pointer()
                        .hover(|s| s.bg(UiColors::table_row_hover()))
                        .on_click(cx.listener(|this, _, window, cx| this.close(window, cx)))
                        .child("×"),
                )
            })
    }

    fn render_footer(&self, window: &Window, cx: &mut Context<Self>) -> Option<impl IntoElement> {
        if self.actions.is_empty() {
            return None;
        }
        let buttons: Vec<_> = self
            .actions
            .iter()
            .zip(&self.action_handles)
            .enumerate()
            .map(|(ix, (action, handle))| {
                div().track_focus(handle).child(
                    Button::new(SharedString::from(format!("modal-action-{}", action.id)), action.label.clone())
                        .variant(action.variant)
                        .focused(handle.is_focused(window))
                        .on_click(cx.listener(move |this, _, window, cx| {
                            this.ring.focus(&ModalFocus::Action(ix));
                            this.press(ModalFocus::Action(ix), window, cx);
                        })),
                )
            })
            .collect();

        Some(
            div()
                .px_6()
                .py_4()
                .border_t_1()
                .border_color(UiColors::border())
                .flex()
                .justify_end()
                .gap_2()
                .children(buttons),
        )
    }
}

impl Focusable for Modal {
    fn focus_handle(&self, _cx: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for Modal {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        if !self.open {
            return div().id("modal-overlay");
        }

        let dialog = div()
            .id("modal-dialog")
            .track_focus(&self.focus_handle)
            .on_key_down(cx.listener(Self::on_key))
            .on_mouse_down(MouseButton::Left, |_, _, cx| cx.stop_propagation())
            .bg(UiColors::surface())
            .rounded_lg()
            .shadow_lg()
            .flex()
            .flex_col()
            .map(|el| match self.size.max_width() {
                Some(width) => el.w_full().max_w(width),
                None => el.size_full(),
            })
            .child(self.render_header(window, cx))
            .child(
                div()
                    .id("modal-body")
                    .flex_1()
                    .px_6()
                    .py_4()
                    .flex()
                    .flex_col()
                    .gap_4()
                    .overflow_y_scroll()
                    .when_some(self.description.clone(), |el, text| {
                        el.child(
                            div()
                                .text_sm()
                                .text_color(UiColors::text_secondary())
                                .child(text),
                        )
                    })
                    .children(self.content.clone()),
            )
            .children(self.render_footer(window, cx));

        div()
            .id("modal-overlay")
            .absolute()
            .inset_0()
            .occlude()
            .bg(UiColors::overlay())
            .flex()
            .items_center()
            .justify_center()
            .p_8()
            .on_mouse_down(
                MouseButton::Left,
                cx.listener(|this, _: &MouseDownEvent, window, cx| {
                    if this.close_on_overlay_click {
                        this.close(window, cx);
                    }
                }),
            )
            .child(dialog)
    }
}
