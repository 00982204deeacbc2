/// Editor configuration: load, save, and sanitize.
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::color::HexColor;

/// Smallest font size a label can be seeded with.
pub const MIN_FONT_SIZE: u32 = 1;

/// Largest font size a label can be seeded with.
pub const MAX_FONT_SIZE: u32 = 1000;

/// Default cap on the number of history entries kept per session.
pub const DEFAULT_MAX_HISTORY_DEPTH: usize = 10_000;

/// Font families offered when the config does not list any.
pub fn default_font_families() -> Vec<String> {
    ["Arial", "Verdana", "Times New Roman"]
        .into_iter()
        .map(String::from)
        .collect()
}

/// Construction-time configuration of an editing session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub initial_text: String,
    pub initial_color: HexColor,
    pub initial_font_size: u32,
    pub initial_font_family: String,
    /// Font families the label may use. Order is preserved for display.
    pub allowed_font_families: Vec<String>,
    /// Canvas anchor of the label when the session starts.
    pub initial_x: f64,
    pub initial_y: f64,
    /// Maximum number of snapshots kept in history (seed included).
    pub max_history_depth: usize,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            initial_text: "Type your text here".to_string(),
            initial_color: HexColor::BLACK,
            initial_font_size: 20,
            initial_font_family: "Arial".to_string(),
            allowed_font_families: default_font_families(),
            initial_x: 0.0,
            initial_y: 0.0,
            max_history_depth: DEFAULT_MAX_HISTORY_DEPTH,
        }
    }
}

impl EditorConfig {
    /// Returns the config file path: exe directory + `label-pad.json`.
    pub fn config_path() -> PathBuf {
        std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|d| d.join("label-pad.json")))
            .unwrap_or_else(|| PathBuf::from("label-pad.json"))
    }

    /// Loads config from `path`, creating a default file if it doesn't exist.
    /// Returns defaults on any error (unreadable file, parse error, etc.).
    pub fn load_or_create(path: &Path) -> Self {
        if path.exists() {
            match Self::load(path) {
                Ok(config) => return config,
                Err(e) => {
                    tracing::warn!("Failed to load config at {}: {e:#}", path.display());
                }
            }
            // Return defaults on error (don't overwrite broken file)
            Self::default()
        } else {
            let config = Self::default();
            if let Err(e) = config.save(path) {
                tracing::warn!("Failed to create default config at {}: {e:#}", path.display());
            }
            config
        }
    }

    /// Reads and sanitizes the config at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid JSON.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let mut config: EditorConfig = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        config.sanitize();
        Ok(config)
    }

    /// Saves config to `path` as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))
    }

    /// Whether `family` is one of the allowed font families.
    pub fn is_font_allowed(&self, family: &str) -> bool {
        self.allowed_font_families.iter().any(|f| f == family)
    }

    /// Clamps values to valid ranges and resets invalid fields.
    pub fn sanitize(&mut self) {
        self.initial_font_size = self.initial_font_size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE);
        self.max_history_depth = self.max_history_depth.max(1);

        if !self.initial_x.is_finite() {
            self.initial_x = 0.0;
        }
        if !self.initial_y.is_finite() {
            self.initial_y = 0.0;
        }

        let mut seen = Vec::with_capacity(self.allowed_font_families.len());
        for family in self.allowed_font_families.drain(..) {
            let family = family.trim().to_string();
            if !family.is_empty() && !seen.contains(&family) {
                seen.push(family);
            }
        }
        self.allowed_font_families = if seen.is_empty() {
            default_font_families()
        } else {
            seen
        };

        if !self.is_font_allowed(&self.initial_font_family) {
            tracing::warn!(
                "Initial font family {:?} is not in the allow-list; using {:?}",
                self.initial_font_family,
                self.allowed_font_families[0]
            );
            self.initial_font_family = self.allowed_font_families[0].clone();
        }
    }
}
