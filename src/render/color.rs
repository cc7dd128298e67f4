//! # RGB565 Color Packing
//!
//! MinerScreen arrays store one `u16` per pixel with 5 bits of red,
//! 6 bits of green and 5 bits of blue (MSB first).

/// Pack an 8-bit-per-channel RGB triple into an RGB565 word.
///
/// ## Algorithm
///
/// ```text
/// r5 = (r * 31 + 127) / 255
/// g6 = (g * 63 + 127) / 255
/// b5 = (b * 31 + 127) / 255
/// packed = r5 << 11 | g6 << 5 | b5
/// ```
///
/// The `+ 127` rounds to nearest, which keeps output bit-identical with
/// previously generated headers.
///
/// ## Example
///
/// ```
/// use pugmark::render::color::rgb_to_565;
///
/// assert_eq!(rgb_to_565(255, 0, 0), 0xF800);
/// assert_eq!(rgb_to_565(0, 255, 0), 0x07E0);
/// assert_eq!(rgb_to_565(255, 255, 255), 0xFFFF);
/// ```
#[inline]
pub const fn rgb_to_565(r: u8, g: u8, b: u8) -> u16 {
    let r5 = (r as u16 * 31 + 127) / 255;
    let g6 = (g as u16 * 63 + 127) / 255;
    let b5 = (b as u16 * 31 + 127) / 255;
    (r5 << 11) | (g6 << 5) | b5
}

/// Expand an RGB565 word back to 8-bit channels (for previews).
#[inline]
pub const fn rgb565_to_rgb(value: u16) -> [u8; 3] {
    let r5 = (value >> 11) & 0x1F;
    let g6 = (value >> 5) & 0x3F;
    let b5 = value & 0x1F;
    [
        ((r5 * 255 + 15) / 31) as u8,
        ((g6 * 255 + 31) / 63) as u8,
        ((b5 * 255 + 15) / 31) as u8,
    ]
}

/// Named color roles used by the logo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Panel outline
    pub border: u16,
    /// Panel fill
    pub outer_bg: u16,
    /// Inner rectangle fill, also used for the motif highlights
    pub inner_bg: u16,
    /// Strip along the top of the inner rectangle
    pub accent: u16,
    /// Left motif circle
    pub left_motif: u16,
    /// Right motif circle
    pub right_motif: u16,
    /// Logo caption
    pub text: u16,
}

impl Palette {
    /// The Pugminer palette.
    ///
    /// | Role | RGB |
    /// |------|-----|
    /// | border | 240, 240, 240 |
    /// | outer_bg | 14, 14, 18 |
    /// | inner_bg | 28, 28, 34 |
    /// | accent | 196, 160, 64 |
    /// | left_motif | 70, 62, 58 |
    /// | right_motif | 212, 200, 178 |
    /// | text | 248, 248, 248 |
    pub const PUGMINER: Self = Self {
        border: rgb_to_565(240, 240, 240),
        outer_bg: rgb_to_565(14, 14, 18),
        inner_bg: rgb_to_565(28, 28, 34),
        accent: rgb_to_565(196, 160, 64),
        left_motif: rgb_to_565(70, 62, 58),
        right_motif: rgb_to_565(212, 200, 178),
        text: rgb_to_565(248, 248, 248),
    };
}

impl Default for Palette {
    fn default() -> Self {
        Self::PUGMINER
    }
}
