//! File System Utilities
//!
//! Configuration and data directory management.

use std::fs;
use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::{Error, Result};

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("dev", "shared-ui", "shared-ui-gallery").ok_or_else(|| Error::Invalid {
        message: "Could not determine project directories".to_string(),
    })
}

/// Get or create the gallery's configuration directory
///
/// Platform-specific locations:
/// - **Linux**: `~/.config/shared-ui-gallery/`
/// - **macOS**: `~/Library/Application Support/dev.shared-ui.shared-ui-gallery/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\shared-ui\shared-ui-gallery\config\`
pub fn get_or_create_config_dir() -> Result<PathBuf> {
    let dirs = project_dirs()?;
    let config_dir = dirs.config_dir();
    if !config_dir.exists() {
        fs::create_dir_all(config_dir)?;
    }
    Ok(config_dir.to_path_buf())
}

/// Get or create the data directory (storage file, logs)
///
/// Platform-specific locations:
/// - **Linux**: `~/.local/share/shared-ui-gallery/`
/// - **macOS**: `~/Library/Application Support/dev.shared-ui.shared-ui-gallery/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\shared-ui\shared-ui-gallery\data\`
pub fn get_or_create_data_dir() -> Result<PathBuf> {
    let dirs = project_dirs()?;
    let data_dir = dirs.data_dir();
    if !data_dir.exists() {
        fs::create_dir_all(data_dir)?;
    }
    Ok(data_dir.to_path_buf())
}
