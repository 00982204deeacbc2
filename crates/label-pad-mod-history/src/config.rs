/// Configuration for the history system.
use label_pad_config::config::DEFAULT_MAX_HISTORY_DEPTH;
use label_pad_config::EditorConfig;

/// Configuration for the history system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryConfig {
    /// Max snapshots kept, seed included. Oldest entries are evicted first.
    pub max_depth: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_HISTORY_DEPTH,
        }
    }
}

impl From<&EditorConfig> for HistoryConfig {
    fn from(config: &EditorConfig) -> Self {
        Self {
            max_depth: config.max_history_depth,
        }
    }
}
