//! Color type and conversion helpers.

use core::fmt::Write as _;

use heapless::String;
use smart_leds::RGB8;

pub type Rgb = RGB8;

/// Parse a `#rrggbb` hex color (leading `#` optional).
pub fn rgb_from_hex(hex: &str) -> Option<Rgb> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let channel = |range: core::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
    Some(Rgb {
        r: channel(0..2)?,
        g: channel(2..4)?,
        b: channel(4..6)?,
    })
}

/// Format a color as `#rrggbb`.
pub fn rgb_to_hex(color: Rgb) -> String<7> {
    let mut out = String::new();
    // Cannot overflow: 7 bytes is exactly "#rrggbb".
    let _ = write!(out, "#{:02x}{:02x}{:02x}", color.r, color.g, color.b);
    out
}

/// Scale a color by a percentage (0-100), saturating at 100.
///
/// Display-side counterpart of the brightness byte: the wire format carries
/// brightness separately and never pre-multiplies it into the channels.
#[allow(clippy::cast_possible_truncation, clippy::cast_lossless)]
pub const fn scale_by_percent(color: Rgb, percent: u8) -> Rgb {
    let percent = if percent > 100 { 100 } else { percent };
    const fn scale(value: u8, percent: u8) -> u8 {
        ((value as u16 * percent as u16) / 100) as u8
    }
    Rgb {
        r: scale(color.r, percent),
        g: scale(color.g, percent),
        b: scale(color.b, percent),
    }
}
