//! Feedback Page
//!
//! Toast notifications: one button per kind, an action toast, a sticky
//! toast, and a position picker persisted in the gallery settings.

use std::time::Duration;

use gpui::{
    div, prelude::*, Context, IntoElement, ParentElement, Render, SharedString, Styled,
    Subscription, Window,
};

use crate::app::entities::AppEntities;
use crate::app::settings::update_settings_and_save;
use crate::components::composite::ToastActionTriggered;
use crate::components::primitives::{Button, ButtonVariant};
use crate::features::section::{caption, page, row, section};
use crate::helpers::{humanize_keystroke, NotifyAction};
use crate::state::{ToastAction, ToastKind, ToastOptions, ToastPosition};

const UNDO_ACTION: &str = "undo";

pub struct ToastPage {
    entities: AppEntities,
    last_action: Option<SharedString>,
    _subscriptions: Vec<Subscription>,
}

impl ToastPage {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        let _subscriptions = vec![
            cx.subscribe(&entities.toasts, |this, toasts, event: &ToastActionTriggered, cx| {
                if event.0.id.as_ref() == UNDO_ACTION {
                    toasts.update(cx, |toasts, cx| {
                        toasts.info("Message restored", cx);
                    });
                }
                this.last_action = Some(event.0.label.clone());
                cx.notify();
            }),
            cx.observe(&entities.settings, |_this, _, cx| cx.notify()),
        ];

        Self {
            entities,
            last_action: None,
            _subscriptions,
        }
    }

    fn show(&self, kind: ToastKind, cx: &mut Context<Self>) {
        let message = match kind {
            ToastKind::Success => "Changes saved successfully",
            ToastKind::Error => "Something went wrong",
            ToastKind::Warning => "Your session expires soon",
            ToastKind::Info => "This is a toast notification",
        };
        let options = ToastOptions {
            kind,
            ..ToastOptions::default()
        };
        self.entities
            .toasts
            .update(cx, |toasts, cx| toasts.push(message, options, cx));
    }

    fn show_with_action(&self, cx: &mut Context<Self>) {
        let options = ToastOptions {
            kind: ToastKind::Info,
            duration: None,
            action: Some(ToastAction {
                id: UNDO_ACTION.into(),
                label: "Undo".into(),
            }),
        };
        self.entities
            .toasts
            .update(cx, |toasts, cx| toasts.push("Message archived", options, cx));
    }

    fn show_sticky(&self, cx: &mut Context<Self>) {
        let options = ToastOptions {
            kind: ToastKind::Warning,
            duration: Some(Duration::ZERO),
            action: None,
        };
        self.entities.toasts.update(cx, |toasts, cx| {
            toasts.push("This toast stays until dismissed", options, cx)
        });
    }
}

impl Render for ToastPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let current = self.entities.settings.read(cx).toast_position;

        let kinds = [
            (ToastKind::Success, ButtonVariant::Success),
            (ToastKind::Error, ButtonVariant::Danger),
            (ToastKind::Warning, ButtonVariant::Outline),
            (ToastKind::Info, ButtonVariant::Primary),
        ]
        .into_iter()
        .map(|(kind, variant)| {
            Button::new(SharedString::from(format!("toast-{}", kind.label())), kind.label())
                .variant(variant)
                .on_click(cx.listener(move |this, _, _, cx| this.show(kind, cx)))
        });

        let positions = ToastPosition::ALL.iter().map(|position| {
            let position = *position;
            Button::new(
                SharedString::from(format!("position-{}", position.label())),
                position.label(),
            )
            .variant(if position == current {
                ButtonVariant::Primary
            } else {
                ButtonVariant::Secondary
            })
            .on_click(move |_, _, cx| {
                update_settings_and_save(cx, "toast_position", move |settings, _| {
                    settings.toast_position = position;
                });
            })
        });

        let shortcut = humanize_keystroke("secondary-shift-x");

        page("Toast", "Transient notifications stacked in a corner of the window.")
            .child(section("Kinds", row().children(kinds)))
            .child(section(
                "Action and sticky",
                div()
                    .flex()
                    .flex_col()
                    .gap_2()
                    .child(
                        row()
                            .child(
                                Button::secondary("toast-action", "With action")
                                    .on_click(cx.listener(|this, _, _, cx| this.show_with_action(cx))),
                            )
                            .child(
                                Button::secondary("toast-sticky", "Sticky")
                                    .on_click(cx.listener(|this, _, _, cx| this.show_sticky(cx))),
                            )
                            .child(
                                Button::ghost("toast-dismiss-all", "Dismiss all").on_click(
                                    |_, window, cx| {
                                        window.dispatch_action(Box::new(NotifyAction::DismissAll), cx)
                                    },
                                ),
                            ),
                    )
                    .child(caption(format!("Dismiss all with {shortcut}")))
                    .when_some(self.last_action.clone(), |el, action| {
                        el.child(caption(format!("Last action: {action}")))
                    }),
            ))
            .child(section("Position", row().children(positions)))
    }
}
