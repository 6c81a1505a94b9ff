//! Card Component

use gpui::{
    div, prelude::*, px, AnyElement, App, FontWeight, IntoElement, ParentElement, RenderOnce,
    SharedString, Styled, Window,
};

use crate::theme::UiColors;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CardVariant {
    #[default]
    Default,
    Outlined,
    Elevated,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CardPadding {
    None,
    Small,
    #[default]
    Medium,
    Large,
}

/// Surface grouping related content, with optional header and footer
#[derive(IntoElement)]
pub struct Card {
    title: Option<SharedString>,
    subtitle: Option<SharedString>,
    header: Option<AnyElement>,
    footer: Option<AnyElement>,
    children: Vec<AnyElement>,
    variant: CardVariant,
    padding: CardPadding,
}

impl Card {
    pub fn new() -> Self {
        Self {
            title: None,
            subtitle: None,
            header: None,
            footer: None,
            children: Vec::new(),
            variant: CardVariant::Default,
            padding: CardPadding::Medium,
        }
    }

    pub fn title(mut self, title: impl Into<SharedString>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn subtitle(mut self, subtitle: impl Into<SharedString>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    /// Custom header; replaces the title block
    pub fn header(mut self, header: impl IntoElement) -> Self {
        self.header = Some(header.into_any_element());
        self
    }

    pub fn footer(mut self, footer: impl IntoElement) -> Self {
        self.footer = Some(footer.into_any_element());
        self
    }

    pub fn variant(mut self, variant: CardVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn padding(mut self, padding: CardPadding) -> Self {
        self.padding = padding;
        self
    }
}

impl Default for Card {
    fn default() -> Self {
        Self::new()
    }
}

impl ParentElement for Card {
    fn extend(&mut self, elements: impl IntoIterator<Item = AnyElement>) {
        self.children.extend(elements);
    }
}

impl RenderOnce for Card {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let padding = match self.padding {
            CardPadding::None => px(0.0),
            CardPadding::Small => px(8.0),
            CardPadding::Medium => px(16.0),
            CardPadding::Large => px(24.0),
        };

        let header = self.header.or_else(|| {
            let title = self.title?;
            Some(
                div()
                    .flex()
                    .flex_col()
                    .gap_1()
                    .child(
                        div()
                            .text_base()
                            .font_weight(FontWeight::SEMIBOLD)
                            .text_color(UiColors::text_primary())
                            .child(title),
                    )
                    .when_some(self.subtitle, |el, subtitle| {
                        el.child(
                            div()
                                .text_sm()
                                .text_color(UiColors::text_secondary())
                                .child(subtitle),
                        )
                    })
                    .into_any_element(),
            )
        });

        div()
            .flex()
            .flex_col()
            .bg(UiColors::surface())
            .rounded_lg()
            .map(|el| match self.variant {
                CardVariant::Default => el.border_1().border_color(UiColors::border()),
                CardVariant::Outlined => el.border_2().border_color(UiColors::border_focus()),
                CardVariant::Elevated => el.shadow_lg(),
            })
            .when_some(header, |el, header| {
                el.child(
                    div()
                        .p(padding)
                        .border_b_1()
                        .border_color(UiColors::border())
                        .child(header),
                )
            })
            .child(
                div()
                    .p(padding)
                    .flex()
                    .flex_col()
                    .gap_3()
                    .children(self.children),
            )
            .when_some(self.footer, |el, footer| {
                el.child(
                    div()
                        .p(padding)
                        .border_t_1()
                        .border_color(UiColors::border())
                        .bg(UiColors::background())
                        .child(footer),
                )
            })
    }
}
