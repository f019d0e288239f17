//! Text measurement for the label font
//!
//! Layout needs exact advance widths before anything is drawn, so text
//! measurement is modeled as a capability (`TextMeasurer`) injected into the
//! layout pass. The production implementation is a static Adobe AFM width
//! table for Helvetica-Bold, keyed by WinAnsiEncoding code point, so the
//! measured widths match what a PDF viewer shows for the standard font.

use crate::error::RendererResult;
use crate::unicode_utils::encode_winansi;

/// Measures rendered text width at a given font size.
///
/// Widths are returned in points. Implementations fail for text they cannot
/// measure (e.g. characters outside the font's encoding).
pub trait TextMeasurer {
    fn string_width(&self, text: &str, font_size: f64) -> RendererResult<f64>;
}

/// Helvetica-Bold advance widths in 1/1000 em units, indexed by WinAnsi
/// code point. Unassigned code points hold 0; they are rejected at encoding
/// time and never reach a lookup.
#[rustfmt::skip]
static HELVETICA_BOLD_WIDTHS: [u16; 256] = [
    // 0x00-0x1F: control characters, not encodable
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    // 0x20: space ! " # $ % & ' ( ) * + , - . /
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    // 0x30: 0-9 : ; < = > ?
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    // 0x40: @ A-O
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    // 0x50: P-Z [ \ ] ^ _
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    // 0x60: ` a-o
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    // 0x70: p-z { | } ~
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584, 0,
    // 0x80: euro, low quotes, florin, ellipsis, daggers, circumflex, permille, Scaron, guilsingl, OE, Zcaron
    556, 0, 278, 556, 500, 1000, 556, 556, 333, 1000, 667, 333, 1000, 0, 611, 0,
    // 0x90: curly quotes, bullet, dashes, tilde, trademark, scaron, oe, zcaron, Ydieresis
    0, 278, 278, 500, 500, 350, 556, 1000, 333, 1000, 556, 333, 944, 0, 500, 667,
    // 0xA0: nbsp and Latin-1 punctuation
    278, 333, 556, 556, 556, 556, 280, 556, 333, 737, 370, 556, 584, 333, 737, 333,
    // 0xB0: degree, plusminus, superiors, mu, pilcrow, fractions
    400, 584, 333, 333, 333, 611, 556, 278, 333, 333, 365, 556, 834, 834, 834, 611,
    // 0xC0: A-grave..I-dieresis
    722, 722, 722, 722, 722, 722, 1000, 722, 667, 667, 667, 667, 278, 278, 278, 278,
    // 0xD0: Eth..Thorn, germandbls
    722, 722, 778, 778, 778, 778, 778, 584, 778, 722, 722, 722, 722, 667, 667, 611,
    // 0xE0: a-grave..i-dieresis
    556, 556, 556, 556, 556, 556, 889, 556, 556, 556, 556, 556, 278, 278, 278, 278,
    // 0xF0: eth..y-dieresis
    611, 611, 611, 611, 611, 611, 611, 584, 611, 611, 611, 611, 611, 556, 611, 556,
];

/// Width provider for the built-in Helvetica-Bold label font.
#[derive(Debug, Clone, Copy, Default)]
pub struct HelveticaBold;

impl HelveticaBold {
    /// Advance width of one WinAnsi code point in 1/1000 em units.
    pub fn advance(byte: u8) -> u16 {
        HELVETICA_BOLD_WIDTHS[byte as usize]
    }
}

impl TextMeasurer for HelveticaBold {
    fn string_width(&self, text: &str, font_size: f64) -> RendererResult<f64> {
        let bytes = encode_winansi(text)?;
        let units: u32 = bytes.iter().map(|&b| u32::from(Self::advance(b))).sum();
        Ok(f64::from(units) * font_size / 1000.0)
    }
}
