//! Tabs Component

use gpui::{
    div, prelude::*, px, AnyView, App, Context, EventEmitter, FocusHandle, Focusable,
    InteractiveElement, IntoElement, KeyDownEvent, ParentElement, Render, SharedString,
    StatefulInteractiveElement, Styled, Window,
};

use crate::state::{TabItem, TabNav, TabsOrientation, TabsState, TabsVariant};
use crate::theme::UiColors;

/// Emitted with the newly selected tab id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabChanged(pub SharedString);

/// Tab strip with keyboard navigation and optional panels
pub struct Tabs {
    state: TabsState,
    panels: Vec<(SharedString, AnyView)>,
    focus_handle: FocusHandle,
}

impl EventEmitter<TabChanged> for Tabs {}

impl Tabs {
    pub fn new(state: TabsState, cx: &mut Context<Self>) -> Self {
        Self {
            state,
            panels: Vec::new(),
            focus_handle: cx.focus_handle(),
        }
    }

    /// View shown while `tab` is active
    pub fn panel(mut self, tab: impl Into<SharedString>, view: AnyView) -> Self {
        self.panels.push((tab.into(), view));
        self
    }

    pub fn state(&self) -> &TabsState {
        &self.state
    }

    pub fn tabs(&self) -> &[TabItem] {
        self.state.tabs()
    }

    /// Controlled write-back
    pub fn set_active(&mut self, id: impl Into<SharedString>, cx: &mut Context<Self>) {
        self.state.set_active(id);
        cx.notify();
    }

    fn select(&mut self, id: &str, cx: &mut Context<Self>) {
        if let Some(id) = self.state.select(id) {
            cx.emit(TabChanged(id));
            cx.notify();
        }
    }

    fn on_key(&mut self, event: &KeyDownEvent, _window: &mut Window, cx: &mut Context<Self>) {
        let Some(nav) = TabNav::from_key(&event.keystroke.key, self.state.orientation) else {
            return;
        };
        if let Some(id) = self.state.key(nav) {
            cx.emit(TabChanged(id));
        }
        cx.stop_propagation();
        cx.notify();
    }

    fn render_tab(&self, tab: &TabItem, focused: bool, cx: &mut Context<Self>) -> impl IntoElement {
        let active = self.state.is_active(&tab.id);
        let vertical = self.state.orientation == TabsOrientation::Vertical;
        let id = tab.id.clone();

        let base = div()
            .id(SharedString::from(format!("tab-{}", tab.id)))
            .px_4()
            .py_2()
            .text_sm()
            .child(tab.label.clone());

        let styled = match self.state.variant {
            TabsVariant::Default => base
                .rounded_t_md()
                .when(active, |el| {
                    el.bg(UiColors::surface())
                        .border_1()
                        .border_color(UiColors::border())
                        .text_color(UiColors::primary())
                })
                .when(!active, |el| el.text_color(UiColors::text_secondary())),
            TabsVariant::Pills => base
                .rounded_full()
                .when(active, |el| {
                    el.bg(UiColors::primary()).text_color(UiColors::text_light())
                })
                .when(!active, |el| el.text_color(UiColors::text_secondary())),
            TabsVariant::Underline => base
                .map(|el| if vertical { el.border_r_2() } else { el.border_b_2() })
                .border_color(if active {
                    UiColors::primary()
                } else {
                    gpui::rgba(0x00000000)
                })
                .text_color(if active {
                    UiColors::primary()
                } else {
                    UiColors::text_secondary()
                }),
        };

        styled
            .when(active && focused, |el| el.underline())
            .when(tab.disabled, |el| el.opacity(0.5).cursor_not_allowed())
            .when(!tab.disabled, |el| {
                el.cursor_pointer()
                    .hover(|s| s.text_color(UiColors::primary()))
                    .on_click(cx.listener(move |this, _, window, cx| {
                        window.focus(&this.focus_handle);
                        this.select(&id, cx);
                    }))
            })
    }
}

impl Focusable for Tabs {
    fn focus_handle(&self, _cx: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for Tabs {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let focused = self.focus_handle.is_focused(window);
        let vertical = self.state.orientation == TabsOrientation::Vertical;

        let tabs: Vec<_> = self
            .state
            .tabs()
            .iter()
            .map(|tab| self.render_tab(tab, focused, cx).into_any_element())
            .collect();

        let strip = div()
            .id("tab-list")
            .track_focus(&self.focus_handle)
            .on_key_down(cx.listener(Self::on_key))
            .flex()
            .gap_1()
            .map(|el| if vertical { el.flex_col().min_w(px(160.0)) } else { el.flex_row() })
            .when(self.state.variant != TabsVariant::Pills, |el| {
                if vertical {
                    el.border_r_1().border_color(UiColors::border())
                } else {
                    el.border_b_1().border_color(UiColors::border())
                }
            })
            .children(tabs);

        let panel = self
            .state
            .active()
            .and_then(|active| self.panels.iter().find(|(id, _)| id == active))
            .map(|(_, view)| view.clone());

        div()
            .flex()
            .gap_4()
            .map(|el| if vertical { el.flex_row() } else { el.flex_col() })
            .child(strip)
            .when_some(panel, |el, view| el.child(div().flex_1().child(view)))
    }
}
