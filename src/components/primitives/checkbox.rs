//! Checkbox Component

use gpui::{
    div, px, App, ElementId, InteractiveElement, IntoElement, ParentElement, RenderOnce,
    SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::theme::UiColors;

/// A checkbox component
#[derive(IntoElement)]
pub struct Checkbox {
    id: ElementId,
    checked: bool,
    indeterminate: bool,
    label: Option<SharedString>,
    disabled: bool,
    on_change: Option<Box<dyn Fn(bool, &mut Window, &mut App) + 'static>>,
}

impl Checkbox {
    /// Create a new checkbox
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            checked: false,
            indeterminate: false,
            label: None,
            disabled: false,
            on_change: None,
        }
    }

    /// Set the checked state
    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    /// Partially checked (some rows of a page selected)
    pub fn indeterminate(mut self, indeterminate: bool) -> Self {
        self.indeterminate = indeterminate;
        self
    }

    /// Set the label
    pub fn label(mut self, label: impl Into<SharedString>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set disabled state
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set the change handler, called with the new checked state
    pub fn on_change(mut self, handler: impl Fn(bool, &mut Window, &mut App) + 'static) -> Self {
        self.on_change = Some(Box::new(handler));
        self
    }
}

impl RenderOnce for Checkbox {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let checked = self.checked;
        let filled = checked || self.indeterminate;

        let (checkbox_bg, border_color) = if filled {
            (UiColors::primary(), UiColors::primary())
        } else {
            (UiColors::input_bg(), UiColors::input_border())
        };

        let mark = if checked {
            "✓"
        } else if self.indeterminate {
            "–"
        } else {
            ""
        };

        let mut checkbox = div()
            .id(self.id)
            .flex()
            .items_center()
            .gap_2()
            .child(
                div()
                    .size(px(16.0))
                    .rounded_sm()
                    .border_1()
                    .border_color(border_color)
                    .bg(checkbox_bg)
                    .flex()
                    .items_center()
                    .justify_center()
                    .text_color(UiColors::text_light())
                    .text_size(px(11.0))
                    .child(mark),
            );

        if let Some(label) = self.label {
            checkbox = checkbox.child(
                div()
                    .text_sm()
                    .text_color(UiColors::text_primary())
                    .child(label),
            );
        }

        if self.disabled {
            checkbox = checkbox.opacity(0.5).cursor_not_allowed();
        } else {
            checkbox = checkbox.cursor_pointer();
            if let Some(handler) = self.on_change {
                checkbox = checkbox.on_click(move |_event, window, cx| {
                    cx.stop_propagation();
                    handler(!checked, window, cx);
                });
            }
        }

        checkbox
    }
}
