//! High-level Canvas-like API wrapper for pdf-writer
//!
//! Tracks the current font state and exposes the handful of drawing
//! operations a label page needs: text runs and rectangle outlines.

use pdf_writer::{Content, Name, Str};

use crate::error::RendererResult;
use crate::types::Rect;
use crate::unicode_utils::encode_winansi;

/// Canvas state for graphics operations
#[derive(Clone)]
struct CanvasState {
    font_name: Name<'static>,
    font_size: f64,
}

impl Default for CanvasState {
    fn default() -> Self {
        Self {
            font_name: Name(b"F1"), // Default font (must be registered)
            font_size: 12.0,
        }
    }
}

/// High-level canvas wrapper for a single page content stream
pub struct PdfCanvas {
    content: Content,
    state: CanvasState,
}

impl PdfCanvas {
    pub fn new() -> Self {
        Self {
            content: Content::new(),
            state: CanvasState::default(),
        }
    }

    /// Get content bytes (for finalizing)
    pub fn finish(self) -> Vec<u8> {
        self.content.finish()
    }

    // ===== Drawing =====

    pub fn rect(&mut self, rect: Rect, fill: bool, stroke: bool) {
        self.content.rect(
            rect.x as f32,
            rect.y as f32,
            rect.width as f32,
            rect.height as f32,
        );
        if fill {
            self.content.fill_nonzero();
        }
        if stroke {
            self.content.stroke();
        }
    }

    // ===== Text =====

    pub fn set_font(&mut self, font_name: Name<'static>, size: f64) {
        self.state.font_name = font_name;
        self.state.font_size = size;
    }

    /// Draw a text run with its baseline starting at (x, y).
    ///
    /// Text is converted to WinAnsiEncoding for the standard Type1 fonts;
    /// a character without a mapping fails the call before anything is
    /// written to the content stream.
    pub fn draw_string(&mut self, x: f64, y: f64, text: &str) -> RendererResult<()> {
        let winansi_bytes = encode_winansi(text)?;

        self.content.begin_text();
        self.content
            .set_font(self.state.font_name, self.state.font_size as f32);
        self.content.next_line(x as f32, y as f32);
        self.content.show(Str(&winansi_bytes));
        self.content.end_text();
        Ok(())
    }
}

impl Default for PdfCanvas {
    fn default() -> Self {
        Self::new()
    }
}
