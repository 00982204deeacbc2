/// Live editing session for a single label.
///
/// `EditSession` owns the label's `HistoryStore` and is the only way to
/// mutate it. Each setter derives a new snapshot from the current one,
/// validates it and commits it once; undo/redo just move the history cursor.
use label_pad_config::{EditorConfig, HexColor};
use serde::Serialize;

use crate::history::{
    seed_snapshot, EditError, FontSize, HistoryConfig, HistoryStore, Position, Snapshot,
};

/// What the view needs after every call: the snapshot to render and the
/// enable state of the undo/redo controls.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionState {
    pub snapshot: Snapshot,
    pub can_undo: bool,
    pub can_redo: bool,
}

/// A label being edited.
#[derive(Debug, Clone)]
pub struct EditSession {
    history: HistoryStore,
    allowed_fonts: Vec<String>,
}

impl EditSession {
    /// Starts a session from an already validated seed.
    pub fn new(seed: Snapshot, allowed_fonts: Vec<String>, config: HistoryConfig) -> Self {
        Self {
            history: HistoryStore::with_config(seed, config),
            allowed_fonts,
        }
    }

    /// Starts a session seeded from the editor configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured initial values are invalid.
    pub fn from_config(config: &EditorConfig) -> Result<Self, EditError> {
        let seed = seed_snapshot(config)?;
        tracing::debug!(
            fonts = config.allowed_font_families.len(),
            max_depth = config.max_history_depth,
            "Starting edit session"
        );
        Ok(Self::new(
            seed,
            config.allowed_font_families.clone(),
            HistoryConfig::from(config),
        ))
    }

    pub fn current(&self) -> &Snapshot {
        self.history.current()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    pub fn allowed_fonts(&self) -> &[String] {
        &self.allowed_fonts
    }

    pub fn state(&self) -> SessionState {
        SessionState {
            snapshot: self.current().clone(),
            can_undo: self.can_undo(),
            can_redo: self.can_redo(),
        }
    }

    pub fn set_text(&mut self, text: impl Into<String>) -> SessionState {
        let next = self.current().with_content(text);
        self.commit(next)
    }

    /// Sets the label color from a `#RRGGBB` string.
    pub fn set_color(&mut self, hex: &str) -> Result<SessionState, EditError> {
        let color =
            HexColor::from_hex(hex).ok_or_else(|| EditError::InvalidColor(hex.to_string()))?;
        let next = self.current().with_color(color);
        Ok(self.commit(next))
    }

    pub fn set_font_size(&mut self, points: i64) -> Result<SessionState, EditError> {
        let size = FontSize::new(points)?;
        let next = self.current().with_font_size(size);
        Ok(self.commit(next))
    }

    pub fn set_font_family(&mut self, family: &str) -> Result<SessionState, EditError> {
        let next = self.current().with_font_family(family, &self.allowed_fonts)?;
        Ok(self.commit(next))
    }

    /// Moves the label anchor, e.g. at the end of a drag.
    pub fn set_position(&mut self, x: f64, y: f64) -> Result<SessionState, EditError> {
        let position = Position::new(x, y)?;
        let next = self.current().with_position(position);
        Ok(self.commit(next))
    }

    /// Steps back one entry. At the oldest entry this changes nothing and
    /// the returned state reports `can_undo == false`.
    pub fn undo(&mut self) -> SessionState {
        if self.history.undo().is_none() {
            tracing::trace!("Nothing to undo");
        }
        self.state()
    }

    /// Steps forward one entry. At the newest entry this changes nothing and
    /// the returned state reports `can_redo == false`.
    pub fn redo(&mut self) -> SessionState {
        if self.history.redo().is_none() {
            tracing::trace!("Nothing to redo");
        }
        self.state()
    }

    /// Forgets all undo/redo steps, keeping what is currently shown.
    pub fn clear_history(&mut self) -> SessionState {
        self.history.clear();
        self.state()
    }

    fn commit(&mut self, next: Snapshot) -> SessionState {
        self.history.commit(next);
        self.state()
    }
}
