//! ToastState - Queue of transient notifications

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use gpui::SharedString;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::constants::{TOAST_DEFAULT_DURATION_MS, TOAST_QUEUE_CAPACITY};

/// Toast kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastKind {
    Success,
    Error,
    Warning,
    #[default]
    Info,
}

impl ToastKind {
    pub fn label(&self) -> &'static str {
        match self {
            ToastKind::Success => "Success",
            ToastKind::Error => "Error",
            ToastKind::Warning => "Warning",
            ToastKind::Info => "Info",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ToastKind::Success => "✓",
            ToastKind::Error => "✕",
            ToastKind::Warning => "!",
            ToastKind::Info => "i",
        }
    }
}

/// Where the toast stack is anchored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToastPosition {
    #[default]
    TopRight,
    TopLeft,
    TopCenter,
    BottomRight,
    BottomLeft,
    BottomCenter,
}

impl ToastPosition {
    pub const ALL: [ToastPosition; 6] = [
        ToastPosition::TopRight,
        ToastPosition::TopLeft,
        ToastPosition::TopCenter,
        ToastPosition::BottomRight,
        ToastPosition::BottomLeft,
        ToastPosition::BottomCenter,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ToastPosition::TopRight => "top-right",
            ToastPosition::TopLeft => "top-left",
            ToastPosition::TopCenter => "top-center",
            ToastPosition::BottomRight => "bottom-right",
            ToastPosition::BottomLeft => "bottom-left",
            ToastPosition::BottomCenter => "bottom-center",
        }
    }

    pub fn is_top(&self) -> bool {
        matches!(
            self,
            ToastPosition::TopRight | ToastPosition::TopLeft | ToastPosition::TopCenter
        )
    }
}

/// Action button on a toast; the caller dispatches on `id`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastAction {
    pub id: SharedString,
    pub label: SharedString,
}

/// Request to show a toast
#[derive(Debug, Clone, Default)]
pub struct ToastOptions {
    pub kind: ToastKind,
    /// Overrides the queue default; zero disables auto-dismiss
    pub duration: Option<Duration>,
    pub action: Option<ToastAction>,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub id: Uuid,
    pub message: SharedString,
    pub kind: ToastKind,
    pub duration: Duration,
    pub action: Option<ToastAction>,
    pub created: Instant,
}

impl Toast {
    /// Deadline for auto-dismiss, if any
    pub fn expires_at(&self) -> Option<Instant> {
        (!self.duration.is_zero()).then(|| self.created + self.duration)
    }
}

/// Visible toasts, oldest first
#[derive(Debug)]
pub struct ToastQueue {
    toasts: VecDeque<Toast>,
    capacity: usize,
    pub default_duration: Duration,
    pub position: ToastPosition,
}

impl ToastQueue {
    /// Create a queue holding at most `capacity` toasts
    pub fn new(capacity: usize) -> Self {
        Self {
            toasts: VecDeque::with_capacity(capacity),
            capacity,
            default_duration: Duration::from_millis(TOAST_DEFAULT_DURATION_MS),
            position: ToastPosition::default(),
        }
    }

    /// Show a toast. The oldest toast is dropped when the queue is full.
    pub fn push(&mut self, message: impl Into<SharedString>, options: ToastOptions, now: Instant) -> &Toast {
        let toast = Toast {
            id: Uuid::now_v7(),
            message: message.into(),
            kind: options.kind,
            duration: options.duration.unwrap_or(self.default_duration),
            action: options.action,
            created: now,
        };
        debug!(id = %toast.id, kind = toast.kind.label(), "toast shown");

        if self.toasts.len() >= self.capacity.max(1) {
            self.toasts.pop_front();
        }
        self.toasts.push_back(toast);
        &self.toasts[self.toasts.len() - 1]
    }

    fn push_kind(&mut self, kind: ToastKind, message: impl Into<SharedString>, now: Instant) -> Uuid {
        let options = ToastOptions {
            kind,
            ..ToastOptions::default()
        };
        self.push(message, options, now).id
    }

    pub fn success(&mut self, message: impl Into<SharedString>, now: Instant) -> Uuid {
        self.push_kind(ToastKind::Success, message, now)
    }

    pub fn error(&mut self, message: impl Into<SharedString>, now: Instant) -> Uuid {
        self.push_kind(ToastKind::Error, message, now)
    }

    pub fn warning(&mut self, message: impl Into<SharedString>, now: Instant) -> Uuid {
        self.push_kind(ToastKind::Warning, message, now)
    }

    pub fn info(&mut self, message: impl Into<SharedString>, now: Instant) -> Uuid {
        self.push_kind(ToastKind::Info, message, now)
    }

    /// Close a toast. Returns whether it was visible.
    pub fn dismiss(&mut self, id: Uuid) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        let removed = before != self.toasts.len();
        if removed {
            debug!(%id, "toast dismissed");
        }
        removed
    }

    /// Drop toasts whose duration elapsed. Returns how many were removed.
    pub fn expire(&mut self, now: Instant) -> usize {
        let before = self.toasts.len();
        self.toasts
            .retain(|t| t.expires_at().is_none_or(|deadline| now < deadline));
        before - self.toasts.len()
    }

    /// Action button click: returns the action and dismisses the toast
    pub fn trigger_action(&mut self, id: Uuid) -> Option<ToastAction> {
        let action = self.get(id)?.action.clone()?;
        self.dismiss(id);
        Some(action)
    }

    pub fn get(&self, id: Uuid) -> Option<&Toast> {
        self.toasts.iter().find(|t| t.id == id)
    }

    /// Earliest pending auto-dismiss deadline
    pub fn next_deadline(&self) -> Option<Instant> {
        self.toasts.iter().filter_map(Toast::expires_at).min()
    }

    pub fn toasts(&self) -> &VecDeque<Toast> {
        &self.toasts
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    pub fn clear(&mut self) {
        self.toasts.clear();
    }
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new(TOAST_QUEUE_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_uses_default_duration() {
        let now = Instant::now();
        let mut queue = ToastQueue::default();
        let id = queue.success("Saved", now);
        let toast = queue.get(id).expect("toast");
        assert_eq!(toast.kind, ToastKind::Success);
        assert_eq!(toast.duration, Duration::from_millis(5000));
    }

    #[test]
    fn test_expire_respects_duration() {
        let now = Instant::now();
        let mut queue = ToastQueue::default();
        queue.info("short", now);
        queue.push(
            "sticky",
            ToastOptions {
                duration: Some(Duration::ZERO),
                ..ToastOptions::default()
            },
            now,
        );

        assert_eq!(queue.expire(now + Duration::from_millis(4999)), 0);
        assert_eq!(queue.expire(now + Duration::from_millis(5000)), 1);
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.toasts()[0].message.as_ref(), "sticky");
        assert_eq!(queue.next_deadline(), None);
    }

    #[test]
    fn test_trigger_action_dismisses() {
        let now = Instant::now();
        let mut queue = ToastQueue::default();
        let id = queue
            .push(
                "File deleted",
                ToastOptions {
                    kind: ToastKind::Warning,
                    action: Some(ToastAction {
                        id: "undo".into(),
                        label: "Undo".into(),
                    }),
                    ..ToastOptions::default()
                },
                now,
            )
            .id;

        let action = queue.trigger_action(id).expect("action");
        assert_eq!(action.id.as_ref(), "undo");
        assert!(queue.is_empty());
        assert_eq!(queue.trigger_action(id), None);
    }

    #[test]
    fn test_capacity_drops_oldest() {
        let now = Instant::now();
        let mut queue = ToastQueue::new(2);
        let first = queue.info("one", now);
        queue.info("two", now);
        queue.info("three", now);
        assert_eq!(queue.len(), 2);
        assert!(queue.get(first).is_none());
    }

    #[test]
    fn test_dismiss_unknown_is_false() {
        let mut queue = ToastQueue::default();
        assert!(!queue.dismiss(Uuid::now_v7()));
    }

    #[test]
    fn test_position_serializes_kebab_case() {
        let json = serde_json::to_string(&ToastPosition::BottomCenter).expect("serialize");
        assert_eq!(json, "\"bottom-center\"");
    }
}
