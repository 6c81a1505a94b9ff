//! Common Pages
//!
//! Button, badge, card and spinner examples.

use std::time::Duration;

use gpui::{
    div, prelude::*, ClickEvent, Context, IntoElement, ParentElement, Render, SharedString,
    Styled, Task, Window,
};

use crate::components::composite::{Card, CardPadding, CardVariant};
use crate::components::primitives::{
    Badge, BadgeSize, BadgeVariant, Button, ButtonSize, ButtonVariant, Spinner, SpinnerSize,
};
use crate::features::section::{caption, page, row, section};
use crate::theme::UiColors;

/// How long the "Save" example stays in its loading state
const SIMULATED_SAVE: Duration = Duration::from_millis(1500);

pub struct ButtonPage {
    clicks: usize,
    saving: bool,
    _save_task: Option<Task<()>>,
}

impl ButtonPage {
    pub fn new() -> Self {
        Self {
            clicks: 0,
            saving: false,
            _save_task: None,
        }
    }

    fn on_save(&mut self, _event: &ClickEvent, _window: &mut Window, cx: &mut Context<Self>) {
        self.saving = true;
        self._save_task = Some(cx.spawn(async move |this, cx| {
            cx.background_executor().timer(SIMULATED_SAVE).await;
            let _ = this.update(cx, |this, cx| {
                this.saving = false;
                cx.notify();
            });
        }));
        cx.notify();
    }
}

impl Render for ButtonPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let variants = ButtonVariant::ALL.iter().map(|variant| {
            Button::new(SharedString::from(format!("variant-{}", variant.label())), variant.label())
                .variant(*variant)
                .on_click(cx.listener(|this, _, _, cx| {
                    this.clicks += 1;
                    cx.notify();
                }))
        });

        let sizes = [
            (ButtonSize::Small, "Small"),
            (ButtonSize::Medium, "Medium"),
            (ButtonSize::Large, "Large"),
        ]
        .into_iter()
        .map(|(size, label)| {
            Button::primary(SharedString::from(format!("size-{label}")), label).size(size)
        });

        page("Button", "Clickable actions in seven variants and three sizes.")
            .child(section(
                "Variants",
                div()
                    .flex()
                    .flex_col()
                    .gap_2()
                    .child(row().children(variants))
                    .child(caption(format!("Clicked {} times", self.clicks))),
            ))
            .child(section("Sizes", row().children(sizes)))
            .child(section(
                "States",
                row()
                    .child(Button::secondary("state-disabled", "Disabled").disabled(true))
                    .child(
                        Button::primary("state-save", if self.saving { "Saving" } else { "Save" })
                            .loading(self.saving)
                            .on_click(cx.listener(Self::on_save)),
                    ),
            ))
            .child(section(
                "Full width",
                Button::primary("full-width", "Continue").full_width(true),
            ))
    }
}

pub struct BadgePage {
    tags: Vec<SharedString>,
}

impl BadgePage {
    pub fn new() -> Self {
        Self {
            tags: ["rust", "gpui", "design", "components"]
                .into_iter()
                .map(SharedString::from)
                .collect(),
        }
    }
}

impl Render for BadgePage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let variants = BadgeVariant::ALL.iter().map(|variant| {
            Badge::new(SharedString::from(format!("badge-{}", variant.label())), variant.label())
                .variant(*variant)
        });

        let sizes = [
            (BadgeSize::Small, "Small"),
            (BadgeSize::Medium, "Medium"),
            (BadgeSize::Large, "Large"),
        ]
        .into_iter()
        .map(|(size, label)| {
            Badge::new(SharedString::from(format!("badge-size-{label}")), label)
                .variant(BadgeVariant::Primary)
                .size(size)
        });

        let removable: Vec<Badge> = self
            .tags
            .iter()
            .map(|tag| {
                let removed = tag.clone();
                Badge::new(SharedString::from(format!("badge-tag-{tag}")), tag.clone()).on_remove(
                    cx.listener(move |this, _, _, cx| {
                        this.tags.retain(|t| *t != removed);
                        cx.notify();
                    }),
                )
            })
            .collect();

        page("Badge", "Compact labels for status and metadata.")
            .child(section("Variants", row().children(variants)))
            .child(section("Sizes", row().children(sizes)))
            .child(section(
                "Removable",
                div()
                    .flex()
                    .flex_col()
                    .gap_2()
                    .child(row().children(removable))
                    .when(self.tags.is_empty(), |el| el.child(caption("All badges removed"))),
            ))
    }
}

pub struct CardPage;

impl Render for CardPage {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        let variants = [
            (CardVariant::Default, "Default"),
            (CardVariant::Outlined, "Outlined"),
            (CardVariant::Elevated, "Elevated"),
        ]
        .into_iter()
        .map(|(variant, label)| {
            div().w_64().child(
                Card::new()
                    .variant(variant)
                    .title(label)
                    .subtitle("Card subtitle")
                    .child("Cards group related content on a single surface."),
            )
        });

        let paddings = [
            (CardPadding::None, "None"),
            (CardPadding::Small, "Small"),
            (CardPadding::Medium, "Medium"),
            (CardPadding::Large, "Large"),
        ]
        .into_iter()
        .map(|(padding, label)| {
            div().w_48().child(
                Card::new()
                    .variant(CardVariant::Outlined)
                    .padding(padding)
                    .child(format!("Padding: {label}")),
            )
        });

        page("Card", "Surfaces with optional header and footer.")
            .child(section("Variants", row().items_start().children(variants)))
            .child(section("Padding", row().items_start().children(paddings)))
            .child(section(
                "Header and footer",
                div().w_96().child(
                    Card::new()
                        .variant(CardVariant::Elevated)
                        .header(
                            div()
                                .flex()
                                .justify_between()
                                .child("Project status")
                                .child(Badge::new("card-badge", "Active").variant(BadgeVariant::Success)),
                        )
                        .footer(
                            row()
                                .justify_end()
                                .child(Button::ghost("card-cancel", "Cancel"))
                                .child(Button::primary("card-open", "Open")),
                        )
                        .child(
                            div()
                                .text_color(UiColors::text_secondary())
                                .child("Last deployed two hours ago."),
                        ),
                ),
            ))
    }
}

pub struct SpinnerPage;

impl Render for SpinnerPage {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        page("Loading Spinner", "Indicates work in progress.")
            .child(section(
                "Sizes",
                row()
                    .gap_6()
                    .child(Spinner::new().size(SpinnerSize::Small))
                    .child(Spinner::new().size(SpinnerSize::Medium))
                    .child(Spinner::new().size(SpinnerSize::Large)),
            ))
            .child(section(
                "With text",
                row()
                    .gap_6()
                    .child(Spinner::new().text("Loading..."))
                    .child(Spinner::new().color(UiColors::success()).text("Syncing")),
            ))
    }
}
