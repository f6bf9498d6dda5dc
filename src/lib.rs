pub mod app;
pub mod config;
pub mod core;
pub mod errors;
pub mod io;
pub mod layout;
pub mod logging;
pub mod outline;
pub mod ui;

// Internal modules
pub mod actions;
pub mod event;

// Re-export commonly used types
pub use app::{AppMode, AppState};
pub use config::AppConfig;
pub use crate::core::{Color, MindMap, Node, NodeId, NodePatch, Position, Snapshot};
pub use errors::{AppError, AppResult};
