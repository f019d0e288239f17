//! Unicode utilities for PDF text rendering
//!
//! Provides conversion from Unicode (UTF-8) to PDF text encoding
//! (WinAnsiEncoding) for the standard Type1 fonts.
//!
//! A character without a WinAnsi mapping cannot be drawn with a standard
//! font; the whole render call fails rather than substituting glyphs.

use crate::error::{RendererError, RendererResult};

/// Map a single character to its WinAnsiEncoding byte, if one exists.
///
/// WinAnsiEncoding is a superset of ISO 8859-1 (Latin-1): the printable
/// ASCII and Latin-1 ranges map straight through, and the 0x80-0x9F window
/// holds typographic extras (euro sign, dashes, curly quotes, OE ligatures).
pub fn winansi_byte(ch: char) -> Option<u8> {
    match ch {
        // Printable ASCII (0x20-0x7E)
        ' '..='~' => Some(ch as u8),

        // WinAnsi extras in the 0x80-0x9F window
        '\u{20AC}' => Some(0x80), // euro sign
        '\u{201A}' => Some(0x82), // single low quote
        '\u{0192}' => Some(0x83), // florin
        '\u{201E}' => Some(0x84), // double low quote
        '\u{2026}' => Some(0x85), // ellipsis
        '\u{2020}' => Some(0x86), // dagger
        '\u{2021}' => Some(0x87), // double dagger
        '\u{02C6}' => Some(0x88), // modifier circumflex
        '\u{2030}' => Some(0x89), // per mille
        '\u{0160}' => Some(0x8A), // S caron
        '\u{2039}' => Some(0x8B), // single left guillemet
        '\u{0152}' => Some(0x8C), // OE ligature
        '\u{017D}' => Some(0x8E), // Z caron
        '\u{2018}' => Some(0x91), // left single quote
        '\u{2019}' => Some(0x92), // right single quote
        '\u{201C}' => Some(0x93), // left double quote
        '\u{201D}' => Some(0x94), // right double quote
        '\u{2022}' => Some(0x95), // bullet
        '\u{2013}' => Some(0x96), // en dash
        '\u{2014}' => Some(0x97), // em dash
        '\u{02DC}' => Some(0x98), // small tilde
        '\u{2122}' => Some(0x99), // trademark
        '\u{0161}' => Some(0x9A), // s caron
        '\u{203A}' => Some(0x9B), // single right guillemet
        '\u{0153}' => Some(0x9C), // oe ligature
        '\u{017E}' => Some(0x9E), // z caron
        '\u{0178}' => Some(0x9F), // Y dieresis

        // Latin-1 range (0xA0-0xFF) maps straight through
        '\u{00A0}'..='\u{00FF}' => Some(ch as u32 as u8),

        _ => None,
    }
}

/// Convert Unicode text to WinAnsiEncoding bytes for PDF text rendering.
///
/// Fails on the first character outside WinAnsi.
pub fn encode_winansi(text: &str) -> RendererResult<Vec<u8>> {
    let mut result = Vec::with_capacity(text.len());

    for ch in text.chars() {
        match winansi_byte(ch) {
            Some(byte) => result.push(byte),
            None => return Err(RendererError::Unencodable(ch)),
        }
    }

    Ok(result)
}
