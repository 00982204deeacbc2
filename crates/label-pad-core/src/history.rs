// Re-exports from label-pad-mod-history and conversions from editor config.
// Bridges the history crate's snapshot types with label-pad-config's EditorConfig.
pub use label_pad_mod_history::{
    EditError, FontSize, HistoryConfig, HistoryStore, Position, Snapshot, TextStyle,
};

use label_pad_config::EditorConfig;

/// Builds the seed snapshot described by `config`.
///
/// # Errors
///
/// Returns an error if the configured values do not form a valid snapshot,
/// e.g. an initial font family outside the allow-list of an unsanitized config.
pub fn seed_snapshot(config: &EditorConfig) -> Result<Snapshot, EditError> {
    let font_size = FontSize::new(i64::from(config.initial_font_size))?;
    let style = TextStyle::new(
        config.initial_color,
        font_size,
        config.initial_font_family.as_str(),
    );
    let position = Position::new(config.initial_x, config.initial_y)?;
    Snapshot::new(
        config.initial_text.as_str(),
        style,
        position,
        &config.allowed_font_families,
    )
}
