use crate::app::{AppMode, AppState};
use crate::io;
use anyhow::Result;
use log::error;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

fn save_path(app: &AppState) -> PathBuf {
    app.filename
        .clone()
        .or_else(|| app.config.default_file.clone())
        .unwrap_or_else(|| PathBuf::from(app.map.export_snapshot().default_file_name()))
}

/// Saves to the session file, picking one first if the session has none.
pub fn save(app: &mut AppState) -> Result<()> {
    let path = save_path(app);
    match io::save_map_json(&app.map, &path) {
        Ok(()) => {
            app.set_message(format!("Saved to {}", path.display()));
            app.filename = Some(path);
            app.is_dirty = false;
            app.last_save_time = Some(Instant::now());
            Ok(())
        }
        Err(e) => {
            error!("save to {} failed: {}", path.display(), e);
            app.set_message(format!("Failed to save: {}", e));
            Err(e.into())
        }
    }
}

/// Writes a snapshot into the working directory under its default name.
pub fn export(app: &mut AppState) -> Result<()> {
    let dir = std::env::current_dir()?;
    export_to(app, &dir)?;
    Ok(())
}

pub fn export_to(app: &mut AppState, dir: &Path) -> Result<PathBuf> {
    match io::export_to_dir(&app.map, dir) {
        Ok(path) => {
            app.set_message(format!("Exported to {}", path.display()));
            Ok(path)
        }
        Err(e) => {
            error!("export to {} failed: {}", dir.display(), e);
            app.set_message(format!("Failed to export: {}", e));
            Err(e.into())
        }
    }
}

/// Saves when auto-save is on, a file is attached and the last change is at
/// least `auto_save_interval` seconds old. Returns whether it saved.
///
/// Never saves while a rename is open; the node would be written with its
/// editing flag still set.
pub fn auto_save_if_due(app: &mut AppState) -> Result<bool> {
    if !app.config.auto_save || !app.is_dirty || app.filename.is_none() {
        return Ok(false);
    }
    if matches!(app.mode, AppMode::Editing { .. }) {
        return Ok(false);
    }
    let Some(modified) = app.last_modify_time else {
        return Ok(false);
    };
    let interval = Duration::from_secs(app.config.auto_save_interval);
    if modified.elapsed() < interval {
        return Ok(false);
    }
    // A failing save is retried at most once per interval
    if app.last_save_time.is_some_and(|t| t.elapsed() < interval) {
        return Ok(false);
    }

    app.last_save_time = Some(Instant::now());
    save(app)?;
    Ok(true)
}
