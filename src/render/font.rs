//! # 5x7 Logo Font
//!
//! A closed set of hand-drawn glyphs covering the letters of the logo
//! caption. Each glyph is 7 rows of 5 cells, `#` for ink and `.` for blank.
//! Characters outside the set advance the cursor without drawing.

use super::canvas::Canvas;

/// Glyph width in cells.
pub const FONT_WIDTH: i32 = 5;
/// Glyph height in cells.
pub const FONT_HEIGHT: i32 = 7;

/// Horizontal advance per character at scale 1 (one blank column between glyphs).
pub const ADVANCE: i32 = FONT_WIDTH + 1;

/// One glyph: `FONT_HEIGHT` rows of `FONT_WIDTH` cells.
pub type Glyph = [&'static str; FONT_HEIGHT as usize];

const P: Glyph = ["#####", "#...#", "#####", "#....", "#....", "#....", "#...."];
const U: Glyph = ["#...#", "#...#", "#...#", "#...#", "#...#", "#...#", "#####"];
const G: Glyph = [".####", "#....", "#....", "#.###", "#...#", "#...#", ".###."];
const M: Glyph = ["#...#", "##.##", "#.#.#", "#.#.#", "#...#", "#...#", "#...#"];
const I: Glyph = ["#####", "..#..", "..#..", "..#..", "..#..", "..#..", "#####"];
const N: Glyph = ["#...#", "##..#", "#.#.#", "#..##", "#..##", "#...#", "#...#"];
const E: Glyph = ["#####", "#....", "####.", "#....", "#....", "#....", "#####"];
const R: Glyph = ["#####", "#...#", "#...#", "####.", "#..#.", "#...#", "#...#"];

/// Look up the glyph for a character.
pub fn glyph(ch: char) -> Option<&'static Glyph> {
    let glyph = match ch {
        'P' => &P,
        'U' => &U,
        'G' => &G,
        'M' => &M,
        'I' => &I,
        'N' => &N,
        'E' => &E,
        'R' => &R,
        _ => return None,
    };
    Some(glyph)
}

/// Width in pixels of `text` rendered at `scale`, including the trailing gap column.
///
/// Saturates at the `i32` range.
pub fn text_width(text: &str, scale: i32) -> i32 {
    let chars = i32::try_from(text.chars().count()).unwrap_or(i32::MAX);
    scale.saturating_mul(chars).saturating_mul(ADVANCE)
}

/// Stamp `text` onto `canvas` with its top-left corner at `(x, y)`.
///
/// Every ink cell becomes a `scale x scale` square. The cursor advances by
/// `scale * (FONT_WIDTH + 1)` per character whether or not a glyph exists.
///
/// Returns the cursor position after the last character, saturated to the
/// `i32` range.
///
/// ## Example
///
/// ```
/// use pugmark::render::canvas::Canvas;
/// use pugmark::render::font::draw_text;
///
/// let mut buf = vec![0u16; 40 * 10];
/// let mut canvas = Canvas::new(&mut buf, 40, 10).unwrap();
/// let end = draw_text(&mut canvas, "PUG", 1, 1, 1, 0xFFFF);
/// assert_eq!(end, 1 + 3 * 6);
/// assert_eq!(canvas.get_pixel(1, 1), Some(0xFFFF));
/// ```
pub fn draw_text(canvas: &mut Canvas, text: &str, x: i32, y: i32, scale: i32, color: u16) -> i32 {
    let (y, scale) = (i64::from(y), i64::from(scale));
    let advance = scale * i64::from(ADVANCE);
    let mut cursor_x = i64::from(x);
    for ch in text.chars() {
        if let Some(glyph) = glyph(ch) {
            for (row, cells) in glyph.iter().enumerate() {
                for (col, cell) in cells.bytes().enumerate() {
                    if cell == b'#' {
                        let px = cursor_x + col as i64 * scale;
                        let py = y + row as i64 * scale;
                        canvas.fill_span(px, py, px + scale, py + scale, color);
                    }
                }
            }
        }
        cursor_x = cursor_x.saturating_add(advance);
    }
    cursor_x.clamp(i32::MIN.into(), i32::MAX.into()) as i32
}
