/// Linear undo/redo store.
///
/// Holds every committed snapshot in order plus a cursor pointing at the one
/// currently shown. Undo and redo only move the cursor; a new commit after an
/// undo drops everything past the cursor before appending.
use tracing::{debug, trace};

use crate::config::HistoryConfig;
use crate::snapshot::Snapshot;

/// Undo/redo history for a single label.
///
/// `entries` is never empty and `cursor` always indexes into it.
#[derive(Clone)]
pub struct HistoryStore {
    /// Snapshots, oldest first.
    entries: Vec<Snapshot>,
    /// Index of the current snapshot.
    cursor: usize,
    config: HistoryConfig,
}

impl std::fmt::Debug for HistoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HistoryStore")
            .field("len", &self.entries.len())
            .field("cursor", &self.cursor)
            .field("max_depth", &self.config.max_depth)
            .finish()
    }
}

impl HistoryStore {
    /// Creates a store seeded with `seed` and default config.
    pub fn new(seed: Snapshot) -> Self {
        Self::with_config(seed, HistoryConfig::default())
    }

    pub fn with_config(seed: Snapshot, mut config: HistoryConfig) -> Self {
        config.max_depth = config.max_depth.max(1);
        Self {
            entries: vec![seed],
            cursor: 0,
            config,
        }
    }

    /// Records `snapshot` as the new current state.
    ///
    /// Returns `false` without touching anything if `snapshot` equals the
    /// current one. Otherwise the redo tail is discarded, the snapshot is
    /// appended and the cursor moves onto it.
    pub fn commit(&mut self, snapshot: Snapshot) -> bool {
        if snapshot == self.entries[self.cursor] {
            trace!("Commit skipped: snapshot unchanged");
            return false;
        }

        let discarded = self.entries.len() - 1 - self.cursor;
        if discarded > 0 {
            debug!("Discarding {discarded} redo entries");
            self.entries.truncate(self.cursor + 1);
        }
        self.entries.push(snapshot);

        if self.entries.len() > self.config.max_depth {
            let excess = self.entries.len() - self.config.max_depth;
            debug!("History over capacity, evicting {excess} oldest entries");
            self.entries.drain(..excess);
        }
        self.cursor = self.entries.len() - 1;
        trace!(len = self.entries.len(), cursor = self.cursor, "Committed");
        true
    }

    /// Steps back one entry. Returns `None` if already at the oldest.
    pub fn undo(&mut self) -> Option<&Snapshot> {
        if !self.can_undo() {
            return None;
        }
        self.cursor -= 1;
        trace!(cursor = self.cursor, "Undo");
        Some(&self.entries[self.cursor])
    }

    /// Steps forward one entry. Returns `None` if already at the newest.
    pub fn redo(&mut self) -> Option<&Snapshot> {
        if !self.can_redo() {
            return None;
        }
        self.cursor += 1;
        trace!(cursor = self.cursor, "Redo");
        Some(&self.entries[self.cursor])
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor < self.entries.len() - 1
    }

    pub fn current(&self) -> &Snapshot {
        &self.entries[self.cursor]
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; a store holds at least its seed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[Snapshot] {
        &self.entries
    }

    /// Number of steps `undo` can take from here.
    pub fn undo_depth(&self) -> usize {
        self.cursor
    }

    /// Number of steps `redo` can take from here.
    pub fn redo_depth(&self) -> usize {
        self.entries.len() - 1 - self.cursor
    }

    pub fn config(&self) -> &HistoryConfig {
        &self.config
    }

    /// Drops all history except the current snapshot, which becomes the seed.
    pub fn clear(&mut self) {
        let current = self.entries.swap_remove(self.cursor);
        self.entries.clear();
        self.entries.push(current);
        self.cursor = 0;
        debug!("History cleared");
    }
}
