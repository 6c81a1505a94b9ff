//! AppEntities - Global Entity Handles
//!
//! Gallery-wide entities shared by the sidebar, the header and the demo pages.

use std::sync::Arc;
use std::time::Duration;

use gpui::{App, AppContext, Entity, Global};

use crate::app::settings::GallerySettings;
use crate::components::composite::ToastLayer;
use crate::constants::TOAST_QUEUE_CAPACITY;
use crate::state::ToastQueue;
use crate::storage::KeyValueStore;

/// Collection of all global Entity handles
#[derive(Clone)]
pub struct AppEntities {
    /// Persisted gallery preferences
    pub settings: Entity<GallerySettings>,
    /// Toast stack rendered above every page
    pub toasts: Entity<ToastLayer>,
    /// Backing store for component data such as recent searches
    pub storage: Arc<dyn KeyValueStore>,
}

impl Global for AppEntities {}

impl AppEntities {
    /// Initialize all entities from the loaded settings
    pub fn init(settings: GallerySettings, storage: Arc<dyn KeyValueStore>, cx: &mut App) -> Self {
        let mut queue = ToastQueue::new(TOAST_QUEUE_CAPACITY);
        queue.position = settings.toast_position;
        queue.default_duration = Duration::from_millis(settings.toast_duration_ms);

        Self {
            settings: cx.new(|_| settings),
            toasts: cx.new(|_| ToastLayer::new(queue)),
            storage,
        }
    }
}
