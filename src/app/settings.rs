//! Gallery Settings
//!
//! User preferences persisted as TOML in the platform config directory.

use std::path::{Path, PathBuf};

use gpui::{App, AppContext};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::app::entities::AppEntities;
use crate::app::navigation::ComponentPage;
use crate::constants::{SEARCH_DEBOUNCE_MS, TOAST_DEFAULT_DURATION_MS};
use crate::error::Result;
use crate::helpers::get_or_create_config_dir;
use crate::state::ToastPosition;

const SETTINGS_FILE: &str = "shared-ui-gallery.toml";

/// Default page size for the data table demo
pub const DEFAULT_TABLE_PAGE_SIZE: usize = 5;

fn get_settings_path() -> Result<PathBuf> {
    let config_dir = get_or_create_config_dir()?;
    let path = config_dir.join(SETTINGS_FILE);
    if !path.exists() {
        std::fs::write(&path, "")?;
    }
    Ok(path)
}

/// Persisted gallery preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GallerySettings {
    /// Page shown on startup
    pub last_page: ComponentPage,
    pub toast_position: ToastPosition,
    pub toast_duration_ms: u64,
    pub search_debounce_ms: u64,
    pub table_page_size: usize,
}

impl Default for GallerySettings {
    fn default() -> Self {
        Self {
            last_page: ComponentPage::default(),
            toast_position: ToastPosition::default(),
            toast_duration_ms: TOAST_DEFAULT_DURATION_MS,
            search_debounce_ms: SEARCH_DEBOUNCE_MS,
            table_page_size: DEFAULT_TABLE_PAGE_SIZE,
        }
    }
}

impl GallerySettings {
    /// Load settings from the config file; an empty file yields defaults
    pub fn try_load() -> Result<Self> {
        let path = get_settings_path()?;
        Self::load_from(&path)
    }

    /// Load from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        info!(path = ?path, "Loading settings file");
        let value = std::fs::read_to_string(path)?;

        if value.trim().is_empty() {
            return Ok(Self::default());
        }

        let settings: Self = toml::from_str(&value).map_err(|e| {
            error!(error = %e, path = ?path, "Failed to parse settings file");
            e
        })?;
        Ok(settings)
    }

    /// Load, falling back to defaults on any error
    pub fn load_or_default() -> Self {
        Self::try_load().unwrap_or_default()
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let value = toml::to_string(self)?;
        std::fs::write(path, value)?;
        Ok(())
    }
}

/// Save settings to disk
pub fn save_settings(settings: &GallerySettings) -> Result<()> {
    let path = get_settings_path()?;
    settings.save_to(&path)
}

/// Update settings and save to disk asynchronously
pub fn update_settings_and_save<F>(cx: &App, action_name: &'static str, mutation: F)
where
    F: FnOnce(&mut GallerySettings, &App) + 'static,
{
    let settings = cx.global::<AppEntities>().settings.clone();

    cx.spawn(async move |cx| {
        let current = settings.update(cx, |settings, cx| {
            mutation(settings, cx);
            cx.notify();
            settings.clone()
        });

        if let Ok(settings) = current {
            cx.background_executor()
                .spawn(async move {
                    if let Err(e) = save_settings(&settings) {
                        error!(error = %e, action = action_name, "Failed to save settings");
                    } else {
                        info!(action = action_name, "Settings saved successfully");
                    }
                })
                .await;
        }
    })
    .detach();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_yields_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(SETTINGS_FILE);
        std::fs::write(&path, "  \n").expect("write");
        assert_eq!(
            GallerySettings::load_from(&path).expect("load"),
            GallerySettings::default()
        );
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(SETTINGS_FILE);
        let settings = GallerySettings {
            last_page: ComponentPage::DataTable,
            toast_position: ToastPosition::BottomLeft,
            table_page_size: 10,
            ..GallerySettings::default()
        };
        settings.save_to(&path).expect("save");

        let text = std::fs::read_to_string(&path).expect("read");
        assert!(text.contains("last_page = \"data-table\""));
        assert!(text.contains("toast_position = \"bottom-left\""));
        assert_eq!(GallerySettings::load_from(&path).expect("load"), settings);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(SETTINGS_FILE);
        std::fs::write(&path, "table_page_size = 3\n").expect("write");
        let settings = GallerySettings::load_from(&path).expect("load");
        assert_eq!(settings.table_page_size, 3);
        assert_eq!(settings.toast_duration_ms, 5000);
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(SETTINGS_FILE);
        std::fs::write(&path, "table_page_size = \"many\"").expect("write");
        assert!(GallerySettings::load_from(&path).is_err());
    }
}
