//! Console layout configuration

use crate::assets::CROSS_ICON;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Fixed layout constants of the console app
///
/// Loaded from JSON; every field is optional and falls back to the
/// watch-face defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleLayout {
    /// Height of the watch viewport
    pub viewport_height: f32,
    /// Space reserved above the scrollback for the exit icon
    pub header_height: f32,
    /// Vertical advance between scrollback lines
    pub line_height: f32,
    pub font_size: f32,
    /// 0xRRGGBB
    pub text_color: u32,
    /// Marker drawn before the input line and echoed commands
    pub prompt: String,
    /// Icon used as the exit hot-corner
    pub exit_icon: String,
}

impl Default for ConsoleLayout {
    fn default() -> Self {
        Self {
            viewport_height: 128.0,
            header_height: 16.0,
            line_height: 7.0,
            font_size: 7.0,
            text_color: 0xFFFFFF,
            prompt: "> ".to_string(),
            exit_icon: CROSS_ICON.to_string(),
        }
    }
}

impl ConsoleLayout {
    /// Number of scrollback lines that fit below the header
    ///
    /// Degenerate layouts (header taller than the viewport, zero or negative
    /// line height, non-finite values) yield 0.
    pub fn capacity(&self) -> usize {
        if self.line_height.is_nan() || self.line_height <= 0.0 {
            return 0;
        }
        let lines = ((self.viewport_height - self.header_height) / self.line_height).floor();
        if lines.is_finite() && lines > 0.0 {
            lines as usize
        } else {
            0
        }
    }

    pub fn with_viewport_height(mut self, height: f32) -> Self {
        self.viewport_height = height;
        self
    }

    pub fn with_header_height(mut self, height: f32) -> Self {
        self.header_height = height;
        self
    }

    /// Set line height and font size together
    pub fn with_line_height(mut self, height: f32) -> Self {
        self.line_height = height;
        self.font_size = height;
        self
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Layout whose capacity is exactly `lines`
    pub fn with_capacity(lines: usize) -> Self {
        let base = Self::default();
        let viewport_height = base.header_height + base.line_height * lines as f32;
        base.with_viewport_height(viewport_height)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let layout = Self::from_json_str(&json)?;
        tracing::debug!("Loaded layout from {}", path.display());
        Ok(layout)
    }
}
