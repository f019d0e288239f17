//! Export filename convention for rendered labels
//!
//! The renderer itself never picks filenames; this helper exists so every
//! caller that writes labels to disk produces the same artifact names.

use chrono::{DateTime, Local};

use crate::types::LabelSize;

/// Build the export filename for a rendered label:
/// `{sanitized_product_name}_{size_tag}_{YYYYMMDD_HHMMSS}.pdf`.
///
/// Path-unsafe characters in the product name (space, forward slash,
/// backslash) become underscores.
pub fn export_file_name(
    product_name: &str,
    size: LabelSize,
    timestamp: DateTime<Local>,
) -> String {
    let safe_name: String = product_name
        .chars()
        .map(|ch| match ch {
            ' ' | '/' | '\\' => '_',
            other => other,
        })
        .collect();
    format!(
        "{}_{}_{}.pdf",
        safe_name,
        size,
        timestamp.format("%Y%m%d_%H%M%S")
    )
}

/// `export_file_name` stamped with the current local time.
pub fn export_file_name_now(product_name: &str, size: LabelSize) -> String {
    export_file_name(product_name, size, Local::now())
}
