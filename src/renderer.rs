//! Main label renderer implementation
//!
//! ## Architecture
//!
//! `LabelRenderer` assembles a complete single-page PDF per call: catalog,
//! page tree, the standard Helvetica-Bold Type1 font and one content stream
//! holding one or two label cells. All layout decisions (font sizes,
//! shrink-to-fit, centering) are made in the `layout` module before anything
//! is drawn.
//!
//! ## Data Flow
//!
//! ```text
//! LabelSpec → PageGeometry → layout_cell (per cell) → PdfCanvas → PDF bytes
//! ```
//!
//! A render call is a pure function of its inputs; the renderer holds no
//! cross-call mutable state, so a single instance can serve concurrent
//! callers without locking.

use std::path::Path;

use chrono::Local;
use log::debug;
use pdf_writer::{Finish, Name, Pdf, Rect as PdfRect, Ref};

use crate::canvas::PdfCanvas;
use crate::error::RendererResult;
use crate::font_metrics::HelveticaBold;
use crate::layout::layout_cell;
use crate::types::{LabelSize, LabelSpec, PageGeometry, Rect};

/// Font resource name used on the label page
const LABEL_FONT: Name<'static> = Name(b"F1");

/// Main label renderer
#[derive(Debug, Clone, Copy, Default)]
pub struct LabelRenderer {
    metrics: HelveticaBold,
}

impl LabelRenderer {
    pub fn new() -> Self {
        Self {
            metrics: HelveticaBold,
        }
    }

    /// Render a complete label page and return the PDF bytes.
    ///
    /// The page media box matches the nominal label size exactly, and the
    /// only font used is a standard Type1 font, so the document needs no
    /// external resources when printed.
    pub fn render(&self, spec: &LabelSpec) -> RendererResult<Vec<u8>> {
        let geometry = PageGeometry::for_size(spec.size);
        debug!(
            "rendering {} page, {} cell(s), {:.2}x{:.2} pt",
            spec.size,
            geometry.cell_count,
            geometry.page_width(),
            geometry.page_height()
        );

        let mut pdf = Pdf::new();

        // Fixed object layout: catalog, page tree, font, page, contents.
        let catalog_id = Ref::new(1);
        let page_tree_id = Ref::new(2);
        let font_id = Ref::new(3);
        let page_id = Ref::new(4);
        let content_id = Ref::new(5);

        pdf.catalog(catalog_id).pages(page_tree_id);

        // Standard Type1 font; text is WinAnsi-encoded in the canvas.
        pdf.type1_font(font_id).base_font(Name(b"Helvetica-Bold"));

        let mut canvas = PdfCanvas::new();
        for index in 0..geometry.cell_count {
            self.draw_cell(&mut canvas, spec, geometry.cell_rect(index))?;
        }
        let content_bytes = canvas.finish();
        pdf.stream(content_id, &content_bytes);

        let mut page = pdf.page(page_id);
        page.media_box(PdfRect::new(
            0.0,
            0.0,
            geometry.page_width() as f32,
            geometry.page_height() as f32,
        ));
        page.parent(page_tree_id);
        page.contents(content_id);
        page.resources().fonts().pair(LABEL_FONT, font_id);
        page.finish();

        let mut page_tree = pdf.pages(page_tree_id);
        page_tree.kids([page_id]);
        page_tree.count(1);
        page_tree.finish();

        Ok(pdf.finish())
    }

    /// Positional form of [`render`](Self::render).
    pub fn render_label(
        &self,
        text: &str,
        date_text: &str,
        size: LabelSize,
    ) -> RendererResult<Vec<u8>> {
        self.render(&LabelSpec::new(text, date_text, size))
    }

    /// Render with the current local date in DD/MM/YYYY format.
    pub fn render_today(&self, text: &str, size: LabelSize) -> RendererResult<Vec<u8>> {
        let date_text = Local::now().format("%d/%m/%Y").to_string();
        self.render_label(text, &date_text, size)
    }

    /// Render a [`LabelSpec`] handed over as JSON.
    pub fn render_spec_json(&self, json: &str) -> RendererResult<Vec<u8>> {
        let spec: LabelSpec = serde_json::from_str(json)?;
        self.render(&spec)
    }

    /// Render and write the PDF to disk.
    pub fn render_to_file(&self, spec: &LabelSpec, path: impl AsRef<Path>) -> RendererResult<()> {
        let bytes = self.render(spec)?;
        std::fs::write(path, bytes)?;
        Ok(())
    }

    /// Draw one label cell: name, date, border.
    fn draw_cell(
        &self,
        canvas: &mut PdfCanvas,
        spec: &LabelSpec,
        cell: Rect,
    ) -> RendererResult<()> {
        let cell_layout = layout_cell(&self.metrics, &spec.text, &spec.date_text, cell)?;

        canvas.set_font(LABEL_FONT, f64::from(cell_layout.name.font_size));
        canvas.draw_string(cell_layout.name.x, cell_layout.name.y, &spec.text)?;

        canvas.set_font(LABEL_FONT, f64::from(cell_layout.date.font_size));
        canvas.draw_string(cell_layout.date.x, cell_layout.date.y, &spec.date_text)?;

        canvas.rect(cell_layout.border, false, true);
        Ok(())
    }
}
