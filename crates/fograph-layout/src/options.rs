use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, LayoutResult};
use crate::path::{CurveStyle, Grid};

/// How columns are reassigned after every row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepackMode {
    /// Every lane takes the next free column; gaps close immediately
    Compact,
    /// Lanes only move right, and only to resolve a collision
    #[default]
    Monotonic,
}

/// Geometry and colouring options of a layout run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutOptions {
    /// Horizontal distance between two lanes
    #[serde(default = "default_lane_spacing")]
    pub lane_spacing: f64,
    /// Vertical distance between two rows
    #[serde(default = "default_row_height")]
    pub row_height: f64,
    #[serde(default)]
    pub curve_style: CurveStyle,
    /// Number of distinct lane colours
    #[serde(default = "default_palette_size")]
    pub palette_size: usize,
    /// Horizontal and vertical margin around the drawing
    #[serde(default = "default_margins")]
    pub margins: (f64, f64),
    /// Estimated advance of one label character
    #[serde(default = "default_glyph_width")]
    pub glyph_width: f64,
    /// Space between the right-most lane and the labels
    #[serde(default = "default_label_gap")]
    pub label_gap: f64,
    #[serde(default)]
    pub repack: RepackMode,
    /// Fixed palette seed; a random one is drawn when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub palette_seed: Option<u64>,
}

fn default_lane_spacing() -> f64 {
    30.0
}

fn default_row_height() -> f64 {
    25.0
}

fn default_palette_size() -> usize {
    6
}

fn default_margins() -> (f64, f64) {
    (50.0, 50.0)
}

fn default_glyph_width() -> f64 {
    7.5
}

fn default_label_gap() -> f64 {
    20.0
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            lane_spacing: default_lane_spacing(),
            row_height: default_row_height(),
            curve_style: CurveStyle::default(),
            palette_size: default_palette_size(),
            margins: default_margins(),
            glyph_width: default_glyph_width(),
            label_gap: default_label_gap(),
            repack: RepackMode::default(),
            palette_seed: None,
        }
    }
}

impl LayoutOptions {
    /// Reject unusable geometry before any layout work starts
    pub fn validate(&self) -> LayoutResult<()> {
        positive("lane_spacing", self.lane_spacing)?;
        positive("row_height", self.row_height)?;
        positive("horizontal margin", self.margins.0)?;
        positive("vertical margin", self.margins.1)?;
        positive("glyph_width", self.glyph_width)?;

        if !self.label_gap.is_finite() || self.label_gap < 0.0 {
            return Err(LayoutError::invalid_config(format!(
                "label_gap must be a non-negative number, got {}",
                self.label_gap
            )));
        }
        if self.palette_size == 0 {
            return Err(LayoutError::invalid_config(
                "palette_size must be at least 1",
            ));
        }
        Ok(())
    }

    pub fn grid(&self) -> Grid {
        Grid::new(self.lane_spacing, self.row_height)
    }
}

fn positive(name: &str, value: f64) -> LayoutResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(LayoutError::invalid_config(format!(
            "{name} must be a positive number, got {value}"
        )))
    }
}
