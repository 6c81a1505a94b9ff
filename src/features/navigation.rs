//! Navigation Page
//!
//! Tabs in every variant, a vertical strip with a disabled tab, and a
//! controlled strip whose active tab is owned by the page.

use gpui::{
    div, prelude::*, AnyView, App, Context, Entity, IntoElement, ParentElement, Render,
    SharedString, Styled, Subscription, Window,
};

use crate::components::composite::{TabChanged, Tabs};
use crate::features::section::{caption, page, section};
use crate::state::{TabItem, TabsOrientation, TabsState, TabsVariant};
use crate::theme::UiColors;

struct TabPanel {
    text: SharedString,
}

impl Render for TabPanel {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .p_3()
            .text_color(UiColors::text_secondary())
            .child(self.text.clone())
    }
}

fn panel(text: String, cx: &mut App) -> AnyView {
    cx.new(|_| TabPanel { text: text.into() }).into()
}

fn sample_tabs() -> Vec<TabItem> {
    vec![
        TabItem::new("1", "Tab 1"),
        TabItem::new("2", "Tab 2"),
        TabItem::new("3", "Tab 3"),
    ]
}

fn tabs_with_panels(
    mut state: TabsState,
    variant: TabsVariant,
    orientation: TabsOrientation,
    cx: &mut Context<Tabs>,
) -> Tabs {
    state.variant = variant;
    state.orientation = orientation;
    let items: Vec<TabItem> = state.tabs().to_vec();
    items.into_iter().fold(Tabs::new(state, cx), |tabs, item| {
        let view = panel(format!("Content for {}", item.label), cx);
        tabs.panel(item.id, view)
    })
}

pub struct TabsPage {
    variants: Vec<(&'static str, Entity<Tabs>)>,
    vertical: Entity<Tabs>,
    controlled: Entity<Tabs>,
    active: SharedString,
    _subscriptions: Vec<Subscription>,
}

impl TabsPage {
    pub fn new(cx: &mut Context<Self>) -> Self {
        let variants = [
            ("Default", TabsVariant::Default),
            ("Pills", TabsVariant::Pills),
            ("Underline", TabsVariant::Underline),
        ]
        .into_iter()
        .map(|(label, variant)| {
            let tabs = cx.new(|cx| {
                tabs_with_panels(
                    TabsState::new(sample_tabs(), None),
                    variant,
                    TabsOrientation::Horizontal,
                    cx,
                )
            });
            (label, tabs)
        })
        .collect();

        let vertical = cx.new(|cx| {
            let items = vec![
                TabItem::new("profile", "Profile"),
                TabItem::new("billing", "Billing").disabled(),
                TabItem::new("security", "Security"),
                TabItem::new("alerts", "Notifications"),
            ];
            tabs_with_panels(
                TabsState::new(items, Some("security".into())),
                TabsVariant::Pills,
                TabsOrientation::Vertical,
                cx,
            )
        });

        let controlled = cx.new(|cx| {
            tabs_with_panels(
                TabsState::controlled(sample_tabs(), "2"),
                TabsVariant::Underline,
                TabsOrientation::Horizontal,
                cx,
            )
        });

        let _subscriptions = vec![cx.subscribe(&controlled, |this, tabs, event: &TabChanged, cx| {
            this.active = event.0.clone();
            let active = this.active.clone();
            tabs.update(cx, |tabs, cx| tabs.set_active(active, cx));
            cx.notify();
        })];

        Self {
            variants,
            vertical,
            controlled,
            active: "2".into(),
            _subscriptions,
        }
    }
}

impl Render for TabsPage {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        page("Tabs", "Switch between panels; arrow keys, Home and End move between tabs.")
            .children(
                self.variants
                    .iter()
                    .map(|(label, tabs)| section(*label, tabs.clone())),
            )
            .child(section("Vertical with a disabled tab", div().h_48().child(self.vertical.clone())))
            .child(section(
                "Controlled",
                div()
                    .flex()
                    .flex_col()
                    .gap_2()
                    .child(self.controlled.clone())
                    .child(caption(format!("Active tab owned by the page: {}", self.active))),
            ))
    }
}
