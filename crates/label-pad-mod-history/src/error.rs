/// Validation failures for label edits.
use thiserror::Error;

/// Why an edit was rejected. The session is left unchanged in every case.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EditError {
    #[error("invalid color {0:?}: expected #RRGGBB")]
    InvalidColor(String),

    #[error("invalid font size {0}: expected a positive integer")]
    InvalidFontSize(String),

    #[error("font family {0:?} is not in the allowed list")]
    InvalidFontFamily(String),

    #[error("invalid position ({x}, {y}): coordinates must be finite")]
    InvalidPosition { x: f64, y: f64 },
}
