//! Packed RGB565 color codes
//!
//! A [`ColorCode`] keeps the top 5 bits of red, the top 6 bits of green and
//! the top 5 bits of blue in a single `u16`, laid out `RRRRRGGGGGGBBBBB`.
//! Channels are truncated with a right shift, never rounded.

use std::fmt;

use super::rgb::Rgb;

/// Bit width of the packed code.
pub const CODE_BITS: u32 = 16;

/// A quantized 16-bit color in RGB565 layout.
///
/// `Display` renders the code as a sized Verilog binary literal:
///
/// ```
/// use pixel_lut::{ColorCode, Rgb};
///
/// let red = ColorCode::quantize(Rgb::new(255, 0, 0));
/// assert_eq!(red.to_string(), "16'b1111100000000000");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ColorCode(u16);

impl ColorCode {
    /// Code produced by `(0, 0, 0)`.
    pub const BLACK: Self = Self(0x0000);
    /// Code produced by `(255, 255, 255)`.
    pub const WHITE: Self = Self(0xFFFF);

    /// Pack an 8-bit color: `(R>>3)<<11 | (G>>2)<<5 | (B>>3)`.
    #[inline]
    pub const fn quantize(color: Rgb) -> Self {
        let r5 = (color.r >> 3) as u16;
        let g6 = (color.g >> 2) as u16;
        let b5 = (color.b >> 3) as u16;
        Self((r5 << 11) | (g6 << 5) | b5)
    }

    /// Wrap an already packed value.
    #[inline]
    pub const fn from_raw(raw: u16) -> Self {
        Self(raw)
    }

    /// The packed value.
    #[inline]
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Red field (0..=31).
    #[inline]
    pub const fn red(self) -> u8 {
        (self.0 >> 11) as u8
    }

    /// Green field (0..=63).
    #[inline]
    pub const fn green(self) -> u8 {
        ((self.0 >> 5) & 0x3F) as u8
    }

    /// Blue field (0..=31).
    #[inline]
    pub const fn blue(self) -> u8 {
        (self.0 & 0x1F) as u8
    }
}

impl From<Rgb> for ColorCode {
    fn from(color: Rgb) -> Self {
        Self::quantize(color)
    }
}

impl fmt::Display for ColorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}'b{:05b}{:06b}{:05b}",
            CODE_BITS,
            self.red(),
            self.green(),
            self.blue()
        )
    }
}
