//! Type definitions for label rendering

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RendererError;
use crate::geometry;

/// Rectangle with position and size (points)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn left(&self) -> f64 {
        self.x
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }
}

/// Nominal label size selector
///
/// The wire tokens match the physical page dimensions: `48x25mm` is a single
/// cell, `96x25mm` is two identical cells side by side on one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LabelSize {
    #[serde(rename = "48x25mm")]
    Single,
    #[serde(rename = "96x25mm")]
    Double,
}

impl LabelSize {
    /// Number of label cells on the page
    pub fn cell_count(self) -> usize {
        match self {
            LabelSize::Single => 1,
            LabelSize::Double => 2,
        }
    }

    /// Wire token for this size, also used in export filenames
    pub fn tag(self) -> &'static str {
        match self {
            LabelSize::Single => "48x25mm",
            LabelSize::Double => "96x25mm",
        }
    }
}

impl FromStr for LabelSize {
    type Err = RendererError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "48x25mm" => Ok(LabelSize::Single),
            "96x25mm" => Ok(LabelSize::Double),
            _ => Err(RendererError::InvalidSize(s.to_string())),
        }
    }
}

impl fmt::Display for LabelSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Immutable input for a single render call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelSpec {
    pub text: String,
    pub date_text: String,
    pub size: LabelSize,
}

impl LabelSpec {
    pub fn new(text: impl Into<String>, date_text: impl Into<String>, size: LabelSize) -> Self {
        Self {
            text: text.into(),
            date_text: date_text.into(),
            size,
        }
    }
}

/// Page geometry derived from a label size (points)
#[derive(Debug, Clone, Copy)]
pub struct PageGeometry {
    pub cell_width: f64,
    pub cell_height: f64,
    pub cell_count: usize,
}

impl PageGeometry {
    pub fn for_size(size: LabelSize) -> Self {
        Self {
            cell_width: geometry::BASE_CELL_WIDTH_PT,
            cell_height: geometry::CELL_HEIGHT_PT,
            cell_count: size.cell_count(),
        }
    }

    pub fn page_width(&self) -> f64 {
        self.cell_width * self.cell_count as f64
    }

    pub fn page_height(&self) -> f64 {
        self.cell_height
    }

    pub fn cell_x_offset(&self, index: usize) -> f64 {
        self.cell_width * index as f64
    }

    /// Rectangle covering one cell, in page coordinates
    pub fn cell_rect(&self, index: usize) -> Rect {
        Rect::new(
            self.cell_x_offset(index),
            0.0,
            self.cell_width,
            self.cell_height,
        )
    }
}

/// Font sizes computed for one cell
///
/// The name size here is the starting point for the shrink-to-fit pass; the
/// date size is final.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontPlan {
    pub name_font_size: i32,
    pub date_font_size: i32,
}

impl FontPlan {
    /// Derive font sizes from the cell width.
    ///
    /// Sizes grow linearly with the width relative to the 48 mm reference
    /// cell and are floored to whole points, with minimums of 12 pt for the
    /// name and 8 pt for the date.
    pub fn for_cell_width(cell_width: f64) -> Self {
        let scale_factor = cell_width / geometry::BASE_CELL_WIDTH_PT;
        Self {
            name_font_size: ((16.0 * scale_factor).floor() as i32).max(12),
            date_font_size: ((12.0 * scale_factor).floor() as i32).max(8),
        }
    }
}
