//! Button Component

use gpui::{
    div, prelude::*, px, App, ClickEvent, ElementId, InteractiveElement, IntoElement, ParentElement,
    Rgba, RenderOnce, SharedString, StatefulInteractiveElement, Styled, Window,
};

use super::spinner::{Spinner, SpinnerSize};
use crate::theme::UiColors;

/// Button variant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Success,
    Danger,
    /// Transparent with a border
    Outline,
    /// Transparent, no border
    Ghost,
    /// Styled as a text link
    Link,
}

impl ButtonVariant {
    pub const ALL: [ButtonVariant; 7] = [
        ButtonVariant::Primary,
        ButtonVariant::Secondary,
        ButtonVariant::Success,
        ButtonVariant::Danger,
        ButtonVariant::Outline,
        ButtonVariant::Ghost,
        ButtonVariant::Link,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "Primary",
            ButtonVariant::Secondary => "Secondary",
            ButtonVariant::Success => "Success",
            ButtonVariant::Danger => "Danger",
            ButtonVariant::Outline => "Outline",
            ButtonVariant::Ghost => "Ghost",
            ButtonVariant::Link => "Link",
        }
    }

    /// Background, text, hover background and border colors
    fn palette(&self) -> (Rgba, Rgba, Rgba, Option<Rgba>) {
        let clear = gpui::rgba(0x00000000);
        match self {
            ButtonVariant::Primary => (
                UiColors::primary(),
                UiColors::text_light(),
                UiColors::primary_hover(),
                None,
            ),
            ButtonVariant::Secondary => (
                UiColors::secondary(),
                UiColors::text_primary(),
                UiColors::secondary_hover(),
                None,
            ),
            ButtonVariant::Success => (
                UiColors::success(),
                UiColors::text_light(),
                gpui::rgb(0x16a34a),
                None,
            ),
            ButtonVariant::Danger => (
                UiColors::danger(),
                UiColors::text_light(),
                UiColors::danger_hover(),
                None,
            ),
            ButtonVariant::Outline => (
                clear,
                UiColors::primary(),
                UiColors::info_bg(),
                Some(UiColors::primary()),
            ),
            ButtonVariant::Ghost => (
                clear,
                UiColors::text_secondary(),
                UiColors::table_row_hover(),
                None,
            ),
            ButtonVariant::Link => (clear, UiColors::primary(), clear, None),
        }
    }
}

/// Button size
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonSize {
    Small,
    #[default]
    Medium,
    Large,
}

/// A styled button component
#[derive(IntoElement)]
pub struct Button {
    id: ElementId,
    label: SharedString,
    variant: ButtonVariant,
    size: ButtonSize,
    disabled: bool,
    loading: bool,
    full_width: bool,
    focused: bool,
    on_click: Option<Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>>,
}

impl Button {
    /// Create a new button
    pub fn new(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            variant: ButtonVariant::Primary,
            size: ButtonSize::Medium,
            disabled: false,
            loading: false,
            full_width: false,
            focused: false,
            on_click: None,
        }
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Show a spinner; a loading button is also disabled
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// Stretch to the container width
    pub fn full_width(mut self, full_width: bool) -> Self {
        self.full_width = full_width;
        self
    }

    /// Draw a focus ring (keyboard focus inside dialogs)
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn on_click(mut self, handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }

    pub fn primary(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Primary)
    }

    pub fn secondary(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Secondary)
    }

    pub fn danger(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Danger)
    }

    pub fn ghost(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Ghost)
    }

    /// Whether clicks are ignored
    pub fn is_inert(&self) -> bool {
        self.disabled || self.loading
    }
}

impl RenderOnce for Button {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let inert = self.is_inert();
        let (bg_color, text_color, hover_bg, border) = self.variant.palette();
        let is_link = self.variant == ButtonVariant::Link;

        let (padding_x, padding_y, font_size, spinner_size) = match self.size {
            ButtonSize::Small => (px(8.0), px(4.0), px(12.0), SpinnerSize::Small),
            ButtonSize::Medium => (px(16.0), px(8.0), px(14.0), SpinnerSize::Small),
            ButtonSize::Large => (px(24.0), px(12.0), px(16.0), SpinnerSize::Medium),
        };

        let mut element = div()
            .id(self.id)
            .flex()
            .items_center()
            .justify_center()
            .gap_2()
            .px(padding_x)
            .py(padding_y)
            .bg(bg_color)
            .text_color(text_color)
            .text_size(font_size)
            .rounded_md()
            .border_1()
            .border_color(border.unwrap_or(gpui::rgba(0x00000000)))
            .when(self.focused, |el| el.border_color(UiColors::border_focus()))
            .when(self.full_width, |el| el.w_full())
            .when(is_link, |el| el.underline())
            .when(self.loading, |el| {
                el.child(Spinner::new().size(spinner_size).color(text_color))
            })
            .child(self.label);

        if inert {
            element = element.opacity(0.5).cursor_not_allowed();
        } else {
            element = element.cursor_pointer().hover(|s| s.bg(hover_bg));
            if let Some(handler) = self.on_click {
                element = element.on_click(handler);
            }
        }

        element
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loading_implies_inert() {
        let button = Button::new("save", "Save").loading(true);
        assert!(button.is_inert());
        assert!(!Button::new("save", "Save").is_inert());
    }

    #[test]
    fn test_every_variant_has_a_label() {
        let labels: Vec<&str> = ButtonVariant::ALL.iter().map(ButtonVariant::label).collect();
        assert_eq!(labels.len(), 7);
        assert!(labels.contains(&"Outline"));
    }
}
