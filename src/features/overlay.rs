//! Overlay Page
//!
//! One modal per size, and a confirmation dialog with custom content that
//! ignores overlay clicks.

use gpui::{
    div, prelude::*, px, Context, Entity, IntoElement, ParentElement, Render,
    SharedString, Styled, Subscription, Window,
};

use crate::components::composite::{Modal, ModalAction, ModalEvent, ModalSize};
use crate::components::primitives::{Button, ButtonVariant};
use crate::features::section::{caption, page, row, section};
use crate::theme::UiColors;

/// Body of the confirmation dialog
struct ConfirmBody;

impl Render for ConfirmBody {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .flex()
            .flex_col()
            .gap_2()
            .child("The project and all of its deployments will be removed.")
            .child(
                div()
                    .text_size(px(12.0))
                    .text_color(UiColors::danger())
                    .child("This action cannot be undone."),
            )
    }
}

pub struct ModalPage {
    sized: Vec<(ModalSize, Entity<Modal>)>,
    confirm: Entity<Modal>,
    last_event: Option<String>,
    _subscriptions: Vec<Subscription>,
}

impl ModalPage {
    pub fn new(window: &mut Window, cx: &mut Context<Self>) -> Self {
        let sized: Vec<(ModalSize, Entity<Modal>)> = ModalSize::ALL
            .iter()
            .map(|size| {
                let size = *size;
                let modal = cx.new(|cx| {
                    let mut modal = Modal::new(format!("{} modal", size.label()), cx);
                    modal.set_size(size);
                    modal.set_description(Some("Modal content goes here".into()));
                    modal.set_actions(
                        vec![
                            ModalAction::new("close", "Close"),
                            ModalAction::new("ok", "OK").variant(ButtonVariant::Primary),
                        ],
                        cx,
                    );
                    modal
                });
                (size, modal)
            })
            .collect();

        let confirm = cx.new(|cx| {
            let mut modal = Modal::new("Delete project?", cx);
            modal.set_size(ModalSize::Small);
            modal.set_content(Some(cx.new(|_| ConfirmBody).into()));
            modal.set_close_on_overlay_click(false);
            modal.set_actions(
                vec![
                    ModalAction::new("cancel", "Cancel"),
                    ModalAction::new("delete", "Delete").variant(ButtonVariant::Danger),
                ],
                cx,
            );
            modal
        });

        let _subscriptions = sized
            .iter()
            .map(|(_, modal)| modal)
            .chain(std::iter::once(&confirm))
            .map(|modal| cx.subscribe_in(modal, window, Self::on_modal_event))
            .collect();

        Self {
            sized,
            confirm,
            last_event: None,
            _subscriptions,
        }
    }

    fn on_modal_event(
        &mut self,
        modal: &Entity<Modal>,
        event: &ModalEvent,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        let text = match event {
            ModalEvent::Opened => "opened".to_string(),
            ModalEvent::Closed => "closed".to_string(),
            ModalEvent::Action(id) => {
                modal.update(cx, |modal, cx| modal.close(window, cx));
                format!("action \"{id}\"")
            }
        };
        self.last_event = Some(text);
        cx.notify();
    }
}

impl Render for ModalPage {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        let openers = self.sized.iter().map(|(size, modal)| {
            let modal = modal.clone();
            Button::secondary(
                SharedString::from(format!("open-{}", size.label())),
                format!("Open {}", size.label()),
            )
            .on_click(move |_, window, cx| modal.update(cx, |modal, cx| modal.open(window, cx)))
        });

        let confirm = self.confirm.clone();

        page("Modal", "Dialogs with a focus trap, Escape to close and focus restore.")
            .relative()
            .child(section("Sizes", row().children(openers)))
            .child(section(
                "Confirmation",
                div()
                    .flex()
                    .flex_col()
                    .gap_2()
                    .child(
                        row().child(
                            Button::danger("open-confirm", "Delete project").on_click(
                                move |_, window, cx| {
                                    confirm.update(cx, |modal, cx| modal.open(window, cx))
                                },
                            ),
                        ),
                    )
                    .child(caption("Overlay clicks are ignored; use Escape or the buttons")),
            ))
            .when_some(self.last_event.clone(), |el, event| {
                el.child(caption(format!("Last event: {event}")))
            })
            .children(self.sized.iter().map(|(_, modal)| modal.clone()))
            .child(self.confirm.clone())
    }
}
