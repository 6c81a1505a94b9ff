//! Spinner Component

use std::time::Duration;

use gpui::{
    div, prelude::*, pulsating_between, px, Animation, AnimationExt, App, IntoElement,
    ParentElement, Pixels, Rgba, RenderOnce, SharedString, Styled, Window,
};

use crate::theme::UiColors;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SpinnerSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl SpinnerSize {
    fn diameter(&self) -> Pixels {
        match self {
            SpinnerSize::Small => px(14.0),
            SpinnerSize::Medium => px(24.0),
            SpinnerSize::Large => px(40.0),
        }
    }
}

/// Pulsing ring with an optional caption
#[derive(IntoElement)]
pub struct Spinner {
    size: SpinnerSize,
    color: Rgba,
    text: Option<SharedString>,
}

impl Spinner {
    pub fn new() -> Self {
        Self {
            size: SpinnerSize::Medium,
            color: UiColors::primary(),
            text: None,
        }
    }

    pub fn size(mut self, size: SpinnerSize) -> Self {
        self.size = size;
        self
    }

    pub fn color(mut self, color: Rgba) -> Self {
        self.color = color;
        self
    }

    /// Caption shown next to the ring
    pub fn text(mut self, text: impl Into<SharedString>) -> Self {
        self.text = Some(text.into());
        self
    }
}

impl Default for Spinner {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderOnce for Spinner {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let diameter = self.size.diameter();
        let ring = div()
            .size(diameter)
            .rounded_full()
            .border_2()
            .border_color(self.color)
            .with_animation(
                "spinner-pulse",
                Animation::new(Duration::from_millis(900))
                    .repeat()
                    .with_easing(pulsating_between(0.3, 1.0)),
                |ring, delta| ring.opacity(delta),
            );

        div()
            .flex()
            .items_center()
            .gap_2()
            .child(ring)
            .when_some(self.text, |el, text| {
                el.child(
                    div()
                        .text_sm()
                        .text_color(UiColors::text_secondary())
                        .child(text),
                )
            })
    }
}
