//! Application - App Initialization and Window Management
//!
//! Main entry point for the GPUI application.

use std::sync::Arc;

use gpui::{
    px, App, AppContext, Application, Bounds, SharedString, TitlebarOptions, WindowBounds,
    WindowOptions,
};
use tracing::{error, info, warn};

use crate::app::entities::AppEntities;
use crate::app::settings::GallerySettings;
use crate::app::workspace::Workspace;
use crate::constants::{DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH};
use crate::helpers::{new_key_bindings, MenuAction};
use crate::storage::{seed_recent_searches, JsonFileStore, KeyValueStore, MemoryStore};

/// Open the store backing component data, in memory if the data directory is unusable
fn open_storage() -> Arc<dyn KeyValueStore> {
    match JsonFileStore::open_default() {
        Ok(store) => {
            info!(path = ?store.path(), "Opened component storage");
            Arc::new(store)
        }
        Err(e) => {
            warn!(error = %e, "Failed to open component storage, using memory store");
            Arc::new(MemoryStore::new())
        }
    }
}

/// Run the gallery application
pub fn run_app() {
    Application::new().run(|cx: &mut App| {
        cx.bind_keys(new_key_bindings());
        cx.on_action(|action: &MenuAction, cx: &mut App| match action {
            MenuAction::Quit => cx.quit(),
        });

        // Quit the app when all windows are closed (macOS behavior)
        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        let settings = GallerySettings::load_or_default();
        let storage = open_storage();
        match seed_recent_searches(&*storage) {
            Ok(true) => info!("Seeded sample recent searches"),
            Ok(false) => {}
            Err(e) => warn!(error = %e, "Failed to seed recent searches"),
        }

        let entities = AppEntities::init(settings, storage, cx);
        cx.set_global(entities.clone());

        let bounds = Bounds::centered(
            None,
            gpui::size(px(DEFAULT_WINDOW_WIDTH), px(DEFAULT_WINDOW_HEIGHT)),
            cx,
        );
        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            titlebar: Some(TitlebarOptions {
                title: Some(SharedString::from("Shared UI Gallery")),
                appears_transparent: true,
                traffic_light_position: Some(gpui::point(px(9.0), px(9.0))),
            }),
            ..Default::default()
        };

        if let Err(e) = cx.open_window(window_options, |window, cx| {
            cx.new(|cx| Workspace::new(entities.clone(), window, cx))
        }) {
            error!(error = %e, "Failed to open gallery window");
            cx.quit();
            return;
        }

        cx.activate(true);
    });
}
