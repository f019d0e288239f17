//! PDF Label Renderer
//!
//! Renders printable product labels using pdf-writer library.
//! A label page holds one or two identical 48x25 mm cells, each with a
//! centered product name, a date line and a border. Font sizes scale with
//! the cell width and the name is shrunk until it fits its cell.

mod canvas;
mod error;
mod font_metrics;
mod geometry;
mod layout;
mod naming;
pub mod renderer;
mod types;
mod unicode_utils;

pub use error::{RendererError, RendererResult};
pub use font_metrics::{HelveticaBold, TextMeasurer};
pub use layout::{layout_cell, CellLayout, TextRun, MIN_NAME_FONT_SIZE};
pub use naming::{export_file_name, export_file_name_now};
pub use renderer::LabelRenderer;
pub use types::{FontPlan, LabelSize, LabelSpec, PageGeometry, Rect};
