//! Text measurement and encoding for the standard Helvetica Type1 font.

/// Advance widths of Helvetica for WinAnsi codes 32..=126, in 1/1000 em.
#[rustfmt::skip]
const HELVETICA_WIDTHS: [u16; 95] = [
    // space ! " # $ % & ' ( ) * + , - . /
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    // 0-9
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    // : ; < = > ? @
    278, 278, 584, 584, 584, 556, 1015,
    // A-Z
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    // [ \ ] ^ _ `
    278, 278, 278, 469, 556, 333,
    // a-z
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833,
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500,
    // { | } ~
    334, 260, 334, 584,
];

/// Used for codes outside the printable ASCII range.
const FALLBACK_WIDTH: u16 = 556;

fn glyph_width(code: u8) -> u16 {
    match code {
        32..=126 => HELVETICA_WIDTHS[usize::from(code - 32)],
        _ => FALLBACK_WIDTH,
    }
}

/// Width in points of `encoded` WinAnsi bytes set in Helvetica at `font_size`.
pub fn helvetica_width(encoded: &[u8], font_size: f64) -> f64 {
    let units: u32 = encoded.iter().map(|&b| u32::from(glyph_width(b))).sum();
    f64::from(units) * font_size / 1000.0
}

/// Encodes text for a WinAnsi Type1 font. Characters outside Latin-1 become `?`.
pub fn to_win_ansi(s: &str) -> Vec<u8> {
    let mut lossy = false;
    let encoded = s
        .chars()
        .map(|c| {
            u8::try_from(u32::from(c)).unwrap_or_else(|_| {
                lossy = true;
                b'?'
            })
        })
        .collect();
    if lossy {
        log::warn!("Text '{}' has characters outside Latin-1; replaced with '?'", s);
    }
    encoded
}
