/// Immutable point-in-time state of the label.
///
/// Every field type validates on construction, so a `Snapshot` that exists
/// is always renderable: the color is `#RRGGBB`, the font size is a positive
/// integer, the font family came from the allow-list and the position is finite.
use label_pad_config::HexColor;
use serde::Serialize;

use crate::error::EditError;

/// Font size in points. Always a positive integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct FontSize(u32);

impl FontSize {
    /// Accepts `1..=u32::MAX`; zero and negative values are rejected.
    pub fn new(points: i64) -> Result<Self, EditError> {
        u32::try_from(points)
            .ok()
            .filter(|&p| p > 0)
            .map(Self)
            .ok_or_else(|| EditError::InvalidFontSize(points.to_string()))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl TryFrom<f64> for FontSize {
    type Error = EditError;

    /// Rejects fractional, non-finite and non-positive values.
    fn try_from(points: f64) -> Result<Self, Self::Error> {
        if !points.is_finite() || points.fract() != 0.0 || points < 1.0 || points > u32::MAX as f64
        {
            return Err(EditError::InvalidFontSize(points.to_string()));
        }
        Ok(Self(points as u32))
    }
}

impl std::fmt::Display for FontSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}pt", self.0)
    }
}

/// Canvas coordinates of the label's anchor.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Position {
    x: f64,
    y: f64,
}

impl Position {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Result<Self, EditError> {
        if x.is_finite() && y.is_finite() {
            Ok(Self { x, y })
        } else {
            Err(EditError::InvalidPosition { x, y })
        }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }
}

/// Visual style of the label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct TextStyle {
    color: HexColor,
    font_size: FontSize,
    font_family: String,
}

impl TextStyle {
    /// The family is only checked against an allow-list once the style is
    /// placed into a [`Snapshot`].
    pub fn new(color: HexColor, font_size: FontSize, font_family: impl Into<String>) -> Self {
        Self {
            color,
            font_size,
            font_family: font_family.into(),
        }
    }

    pub fn color(&self) -> HexColor {
        self.color
    }

    pub fn font_size(&self) -> FontSize {
        self.font_size
    }

    pub fn font_family(&self) -> &str {
        &self.font_family
    }
}

/// One entry of the label history: content, style and position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    content: String,
    style: TextStyle,
    position: Position,
}

impl Snapshot {
    /// Builds a snapshot, rejecting a font family outside `allowed_fonts`.
    pub fn new(
        content: impl Into<String>,
        style: TextStyle,
        position: Position,
        allowed_fonts: &[String],
    ) -> Result<Self, EditError> {
        check_family(&style.font_family, allowed_fonts)?;
        Ok(Self {
            content: content.into(),
            style,
            position,
        })
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn style(&self) -> &TextStyle {
        &self.style
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn with_content(&self, content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..self.clone()
        }
    }

    pub fn with_color(&self, color: HexColor) -> Self {
        let mut next = self.clone();
        next.style.color = color;
        next
    }

    pub fn with_font_size(&self, font_size: FontSize) -> Self {
        let mut next = self.clone();
        next.style.font_size = font_size;
        next
    }

    pub fn with_font_family(
        &self,
        family: impl Into<String>,
        allowed_fonts: &[String],
    ) -> Result<Self, EditError> {
        let family = family.into();
        check_family(&family, allowed_fonts)?;
        let mut next = self.clone();
        next.style.font_family = family;
        Ok(next)
    }

    pub fn with_position(&self, position: Position) -> Self {
        Self {
            position,
            ..self.clone()
        }
    }
}

fn check_family(family: &str, allowed_fonts: &[String]) -> Result<(), EditError> {
    if allowed_fonts.iter().any(|f| f == family) {
        Ok(())
    } else {
        Err(EditError::InvalidFontFamily(family.to_string()))
    }
}
