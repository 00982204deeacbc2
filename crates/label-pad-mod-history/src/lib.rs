/// Linear undo/redo history of label snapshots.
///
/// Provides a `HistoryStore` that keeps every committed `Snapshot` of the
/// label (text, style, position) in order, with a cursor marking the one
/// currently shown. History lives only as long as the editing session.
pub mod config;
pub mod error;
pub mod snapshot;
pub mod store;

pub use config::HistoryConfig;
pub use error::EditError;
pub use snapshot::{FontSize, Position, Snapshot, TextStyle};
pub use store::HistoryStore;
