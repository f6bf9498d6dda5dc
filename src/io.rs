use crate::core::{MindMap, Snapshot};
use crate::errors::{AppError, AppResult};
use log::info;
use std::fs::{File, OpenOptions};
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IoError {
    #[error("File not found: {0}")]
    FileNotFound(String),
    #[error("Permission denied: {0}")]
    PermissionDenied(String),
    #[error("I/O error: {0}")]
    GenericIo(#[from] io::Error),
}

fn classify(err: io::Error, path: &Path) -> IoError {
    match err.kind() {
        io::ErrorKind::NotFound => IoError::FileNotFound(path.display().to_string()),
        io::ErrorKind::PermissionDenied => IoError::PermissionDenied(path.display().to_string()),
        _ => IoError::GenericIo(err),
    }
}

/// Loads a mind map from a snapshot JSON file, validating the tree.
pub fn load_map_json(path: &Path) -> AppResult<MindMap> {
    let file = File::open(path).map_err(|e| classify(e, path))?;
    let mut text = String::new();
    BufReader::new(file)
        .read_to_string(&mut text)
        .map_err(|e| classify(e, path))?;

    let snapshot = Snapshot::from_json(&text)?;
    let map = MindMap::from_snapshot(snapshot)?;
    info!("loaded {} nodes from {}", map.len(), path.display());
    Ok(map)
}

/// Writes the map's snapshot to `path`, replacing any existing file.
pub fn save_map_json(map: &MindMap, path: &Path) -> AppResult<()> {
    let file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .map_err(|e| classify(e, path))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &map.export_snapshot())?;
    writer.write_all(b"\n").map_err(|e| classify(e, path))?;
    writer.flush().map_err(|e| classify(e, path))?;
    info!("saved {} nodes to {}", map.len(), path.display());
    Ok(())
}

/// Exports into `dir` under the snapshot's default file name and returns
/// the written path.
pub fn export_to_dir(map: &MindMap, dir: &Path) -> AppResult<PathBuf> {
    if !dir.is_dir() {
        return Err(AppError::InvalidPath(dir.to_path_buf()));
    }
    let path = dir.join(map.export_snapshot().default_file_name());
    save_map_json(map, &path)?;
    Ok(path)
}
