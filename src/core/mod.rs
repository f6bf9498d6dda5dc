//! Mind-map data model: the node tree, radial placement, visibility and
//! the mutation API. Pure in-memory state; no I/O happens here.

pub mod clock;
pub mod layout;
pub mod mind_map;
mod mutator;
pub mod node;
pub mod palette;
pub mod snapshot;
pub mod store;
pub mod visibility;

pub use mind_map::MindMap;
pub use node::{EditState, Node, NodeId, NodePatch, Position};
pub use palette::Color;
pub use snapshot::{Snapshot, SnapshotError};
pub use store::NodeStore;
pub use visibility::Connection;
