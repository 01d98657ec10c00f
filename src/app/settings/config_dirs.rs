use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use directories_next::ProjectDirs;

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "picZoom")
}

/// Per-user config directory for this app, if the platform has one.
pub fn project_config_dir() -> Option<PathBuf> {
    project_dirs().map(|d| d.config_dir().to_path_buf())
}

/// Per-user cache directory; log files go here.
pub fn user_cache_dir() -> Option<PathBuf> {
    project_dirs().map(|d| d.cache_dir().to_path_buf())
}

/// Create the config and cache directories if they are missing.
pub fn ensure_dirs_exist() -> Result<()> {
    for dir in [project_config_dir(), user_cache_dir()].into_iter().flatten() {
        fs::create_dir_all(&dir)?;
    }
    Ok(())
}
