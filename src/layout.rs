//! Cell layout: font scaling, shrink-to-fit and text positioning
//!
//! All measurement happens here, before anything touches the canvas. The
//! layout pass is a pure function of the cell rectangle, the two text runs
//! and a `TextMeasurer`, which keeps it testable without a PDF backend.

use log::{debug, warn};

use crate::error::RendererResult;
use crate::font_metrics::TextMeasurer;
use crate::geometry::BORDER_PADDING_PT;
use crate::types::{FontPlan, Rect};

/// Hard floor for the shrink-to-fit pass, in points
pub const MIN_NAME_FONT_SIZE: i32 = 8;

/// Fraction of the cell width available to a text run
const AVAILABLE_WIDTH_FRACTION: f64 = 0.9;

/// A positioned text run within one cell
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextRun {
    pub x: f64,
    pub y: f64,
    pub font_size: i32,
}

/// Complete placement for one label cell
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellLayout {
    pub name: TextRun,
    pub date: TextRun,
    pub border: Rect,
}

/// Reduce a font size until the text fits the available width.
///
/// Bounded linear shrink: one point per step, stopping at
/// `MIN_NAME_FONT_SIZE`. Text that still overflows at the floor is accepted
/// and drawn as-is.
pub fn shrink_to_fit(
    measurer: &dyn TextMeasurer,
    text: &str,
    start_size: i32,
    available_width: f64,
) -> RendererResult<i32> {
    let mut font_size = start_size;
    let mut text_width = measurer.string_width(text, f64::from(font_size))?;

    while text_width > available_width && font_size > MIN_NAME_FONT_SIZE {
        font_size -= 1;
        text_width = measurer.string_width(text, f64::from(font_size))?;
    }

    if text_width > available_width {
        warn!(
            "text {:?} overflows its cell at the minimum font size {}",
            text, font_size
        );
    }

    Ok(font_size)
}

/// Horizontal position that centers a run of the given measured width.
fn centered_x(cell: &Rect, text_width: f64) -> f64 {
    cell.x + (cell.width - text_width) / 2.0
}

/// Lay out one cell: plan font sizes, shrink the name, center both runs.
///
/// Only the name shrinks; the date keeps its planned size.
pub fn layout_cell(
    measurer: &dyn TextMeasurer,
    text: &str,
    date_text: &str,
    cell: Rect,
) -> RendererResult<CellLayout> {
    let plan = FontPlan::for_cell_width(cell.width);
    debug!("cell at x={:.2}: {:?}", cell.x, plan);

    // Vertical band: 10% padding top and bottom, name in the upper part of
    // the remaining 80%, date in the lower part.
    let padding = cell.height * 0.1;
    let usable_height = cell.height - 2.0 * padding;
    let name_y = cell.y + padding + usable_height * 0.7;
    let date_y = cell.y + padding + usable_height * 0.25;

    let available_width = cell.width * AVAILABLE_WIDTH_FRACTION;
    let name_font_size = shrink_to_fit(measurer, text, plan.name_font_size, available_width)?;
    let name_width = measurer.string_width(text, f64::from(name_font_size))?;
    let date_width = measurer.string_width(date_text, f64::from(plan.date_font_size))?;

    Ok(CellLayout {
        name: TextRun {
            x: centered_x(&cell, name_width),
            y: name_y,
            font_size: name_font_size,
        },
        date: TextRun {
            x: centered_x(&cell, date_width),
            y: date_y,
            font_size: plan.date_font_size,
        },
        border: Rect::new(
            cell.x + BORDER_PADDING_PT,
            cell.y + BORDER_PADDING_PT,
            cell.width - 2.0 * BORDER_PADDING_PT,
            cell.height - 2.0 * BORDER_PADDING_PT,
        ),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RendererResult;
    use crate::font_metrics::HelveticaBold;
    use crate::geometry::{BASE_CELL_WIDTH_PT, CELL_HEIGHT_PT};

    /// Deterministic fake: every character is `advance` points wide per
    /// point of font size.
    struct FixedAdvance {
        advance: f64,
    }

    impl TextMeasurer for FixedAdvance {
        fn string_width(&self, text: &str, font_size: f64) -> RendererResult<f64> {
            Ok(text.chars().count() as f64 * self.advance * font_size)
        }
    }

    fn reference_cell() -> Rect {
        Rect::new(0.0, 0.0, BASE_CELL_WIDTH_PT, CELL_HEIGHT_PT)
    }

    #[test]
    fn short_text_keeps_its_planned_size() {
        let measurer = FixedAdvance { advance: 0.1 };
        let layout = layout_cell(&measurer, "Milk", "01/01/2025", reference_cell()).unwrap();
        assert_eq!(layout.name.font_size, 16);
        assert_eq!(layout.date.font_size, 12);
    }

    #[test]
    fn long_text_shrinks_until_it_fits() {
        let measurer = FixedAdvance { advance: 0.55 };
        let text = "Pomegranate Molasses";
        let cell = reference_cell();
        let layout = layout_cell(&measurer, text, "01/01/2025", cell).unwrap();

        assert!(layout.name.font_size < 16);
        assert!(layout.name.font_size >= MIN_NAME_FONT_SIZE);
        let width = measurer
            .string_width(text, f64::from(layout.name.font_size))
            .unwrap();
        assert!(width <= cell.width * 0.9);
        // One point larger would not have fit.
        let wider = measurer
            .string_width(text, f64::from(layout.name.font_size + 1))
            .unwrap();
        assert!(wider > cell.width * 0.9);
    }

    #[test]
    fn overflow_stops_at_the_floor() {
        let measurer = FixedAdvance { advance: 10.0 };
        let layout =
            layout_cell(&measurer, "Unreasonably Long Name", "01/01/2025", reference_cell())
                .unwrap();
        assert_eq!(layout.name.font_size, MIN_NAME_FONT_SIZE);
    }

    #[test]
    fn name_size_is_monotonic_in_text_length() {
        let measurer = FixedAdvance { advance: 0.4 };
        let cell = reference_cell();
        let mut previous = i32::MAX;
        for len in 1..=40 {
            let text: String = std::iter::repeat('a').take(len).collect();
            let layout = layout_cell(&measurer, &text, "01/01/2025", cell).unwrap();
            assert!(layout.name.font_size <= previous);
            assert!(layout.name.font_size >= MIN_NAME_FONT_SIZE);
            previous = layout.name.font_size;
        }
    }

    #[test]
    fn date_is_never_shrunk() {
        // A measurer wide enough to force the name to the floor must leave
        // the date at its planned size.
        let measurer = FixedAdvance { advance: 10.0 };
        let layout =
            layout_cell(&measurer, "Some Product", "01/01/2025", reference_cell()).unwrap();
        assert_eq!(layout.date.font_size, 12);
    }

    #[test]
    fn runs_are_centered() {
        let cell = reference_cell();
        let text = "Greek Yogurt 500g";
        let layout = layout_cell(&HelveticaBold, text, "01/01/2025", cell).unwrap();

        let width = HelveticaBold
            .string_width(text, f64::from(layout.name.font_size))
            .unwrap();
        let left_gap = layout.name.x - cell.left();
        let right_gap = cell.right() - (layout.name.x + width);
        assert!((left_gap - right_gap).abs() < 1e-9);
    }

    #[test]
    fn empty_text_centers_on_the_cell_midline() {
        let layout = layout_cell(&HelveticaBold, "", "01/01/2025", reference_cell()).unwrap();
        assert!((layout.name.x - BASE_CELL_WIDTH_PT / 2.0).abs() < 1e-9);
        assert_eq!(layout.name.font_size, 16);
    }

    #[test]
    fn baselines_follow_the_vertical_band() {
        let cell = reference_cell();
        let layout = layout_cell(&HelveticaBold, "Milk 1L", "01/01/2025", cell).unwrap();

        let padding = cell.height * 0.1;
        let usable = cell.height - 2.0 * padding;
        assert!((layout.name.y - (padding + usable * 0.7)).abs() < 1e-9);
        assert!((layout.date.y - (padding + usable * 0.25)).abs() < 1e-9);
    }

    #[test]
    fn border_is_inset_from_the_cell() {
        let cell = Rect::new(BASE_CELL_WIDTH_PT, 0.0, BASE_CELL_WIDTH_PT, CELL_HEIGHT_PT);
        let layout = layout_cell(&HelveticaBold, "Milk 1L", "01/01/2025", cell).unwrap();
        assert!((layout.border.x - (cell.x + 2.0)).abs() < 1e-9);
        assert!((layout.border.y - 2.0).abs() < 1e-9);
        assert!((layout.border.width - (cell.width - 4.0)).abs() < 1e-9);
        assert!((layout.border.height - (cell.height - 4.0)).abs() < 1e-9);
    }

    #[test]
    fn second_cell_is_a_pure_translation_of_the_first() {
        let left = layout_cell(&HelveticaBold, "Milk 1L", "01/01/2025", reference_cell()).unwrap();
        let right = layout_cell(
            &HelveticaBold,
            "Milk 1L",
            "01/01/2025",
            Rect::new(BASE_CELL_WIDTH_PT, 0.0, BASE_CELL_WIDTH_PT, CELL_HEIGHT_PT),
        )
        .unwrap();

        assert_eq!(left.name.font_size, right.name.font_size);
        assert_eq!(left.date.font_size, right.date.font_size);
        assert!((right.name.x - left.name.x - BASE_CELL_WIDTH_PT).abs() < 1e-9);
        assert!((right.date.x - left.date.x - BASE_CELL_WIDTH_PT).abs() < 1e-9);
        assert!((right.border.x - left.border.x - BASE_CELL_WIDTH_PT).abs() < 1e-9);
        assert_eq!(left.name.y, right.name.y);
        assert_eq!(left.date.y, right.date.y);
    }

    #[test]
    fn real_metrics_scenarios() {
        let cell = reference_cell();

        // Short name fits at the planned 16 pt.
        let short = layout_cell(&HelveticaBold, "Milk 1L", "01/01/2025", cell).unwrap();
        assert_eq!(short.name.font_size, 16);

        // A very long name bottoms out at the floor and is still accepted.
        let long = layout_cell(
            &HelveticaBold,
            "Extra Strong Dark Roast Ground Coffee Premium Blend",
            "01/01/2025",
            cell,
        )
        .unwrap();
        assert_eq!(long.name.font_size, MIN_NAME_FONT_SIZE);
    }
}
