//! Badge Component

use gpui::{
    div, prelude::*, px, App, ClickEvent, ElementId, InteractiveElement, IntoElement,
    ParentElement, Rgba, RenderOnce, SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::theme::UiColors;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BadgeVariant {
    #[default]
    Default,
    Primary,
    Success,
    Warning,
    Danger,
    Info,
}

impl BadgeVariant {
    pub const ALL: [BadgeVariant; 6] = [
        BadgeVariant::Default,
        BadgeVariant::Primary,
        BadgeVariant::Success,
        BadgeVariant::Warning,
        BadgeVariant::Danger,
        BadgeVariant::Info,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            BadgeVariant::Default => "Default",
            BadgeVariant::Primary => "Primary",
            BadgeVariant::Success => "Success",
            BadgeVariant::Warning => "Warning",
            BadgeVariant::Danger => "Danger",
            BadgeVariant::Info => "Info",
        }
    }

    fn colors(&self) -> (Rgba, Rgba) {
        match self {
            BadgeVariant::Default => (UiColors::tag_bg(), UiColors::tag_text()),
            BadgeVariant::Primary => (UiColors::primary(), UiColors::text_light()),
            BadgeVariant::Success => (UiColors::success_bg(), UiColors::success()),
            BadgeVariant::Warning => (UiColors::warning_bg(), UiColors::warning()),
            BadgeVariant::Danger => (UiColors::danger_bg(), UiColors::danger()),
            BadgeVariant::Info => (UiColors::info_bg(), UiColors::info()),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BadgeSize {
    Small,
    #[default]
    Medium,
    Large,
}

/// Small status label, optionally removable
#[derive(IntoElement)]
pub struct Badge {
    id: ElementId,
    label: SharedString,
    variant: BadgeVariant,
    size: BadgeSize,
    on_remove: Option<Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>>,
}

impl Badge {
    pub fn new(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            variant: BadgeVariant::Default,
            size: BadgeSize::Medium,
            on_remove: None,
        }
    }

    pub fn variant(mut self, variant: BadgeVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: BadgeSize) -> Self {
        self.size = size;
        self
    }

    /// Show a remove button calling `handler`
    pub fn on_remove(
        mut self,
        handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_remove = Some(Box::new(handler));
        self
    }
}

impl RenderOnce for Badge {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let (bg, fg) = self.variant.colors();
        let (padding_x, font_size) = match self.size {
            BadgeSize::Small => (px(6.0), px(10.0)),
            BadgeSize::Medium => (px(8.0), px(12.0)),
            BadgeSize::Large => (px(10.0), px(14.0)),
        };

        div()
            .id(self.id)
            .flex()
            .items_center()
            .gap_1()
            .px(padding_x)
            .py(px(2.0))
            .rounded_full()
            .bg(bg)
            .text_color(fg)
            .text_size(font_size)
            .child(self.label)
            .when_some(self.on_remove, |el, handler| {
                el.child(
                    div()
                        .id("badge-remove")
                        .cursor_pointer()
                        .opacity(0.7)
                        .hover(|s| s.opacity(1.0))
                        .child("×")
                        .on_click(handler),
                )
            })
    }
}
