//! # Pugminer Logo
//!
//! Paints the logo onto an existing MinerScreen canvas: a bordered panel,
//! an accent band, two motif circles with highlight cutouts, and the
//! caption in the 5x7 logo font.
//!
//! ## Usage
//!
//! ```
//! use pugmark::logo;
//! use pugmark::render::{Canvas, Palette};
//!
//! let mut pixels = vec![0u16; 320 * 240];
//! let mut canvas = Canvas::new(&mut pixels, 320, 240).unwrap();
//! logo::compose(&mut canvas, &Palette::PUGMINER);
//! assert_eq!(canvas.get_pixel(6, 12), Some(Palette::PUGMINER.border));
//! ```

pub mod layout;

pub use layout::{LOGO_TEXT, LogoLayout, Rect, TextPlacement};

use crate::render::font::draw_text;
use crate::render::{Canvas, Palette};

/// Draw the logo onto `canvas`.
///
/// The result depends only on the canvas dimensions and the palette; the
/// previous pixel contents show through wherever the logo does not paint.
pub fn compose(canvas: &mut Canvas, palette: &Palette) {
    let layout = LogoLayout::compute(canvas.width(), canvas.height());
    draw(canvas, &layout, palette);
}

/// Draw a precomputed layout.
pub fn draw(canvas: &mut Canvas, layout: &LogoLayout, palette: &Palette) {
    let LogoLayout { panel, inner, .. } = *layout;

    canvas.fill_rect(panel.x0, panel.y0, panel.x1, panel.y1, palette.outer_bg);
    canvas.draw_border(
        panel.x0,
        panel.y0,
        panel.x1,
        panel.y1,
        palette.border,
        layout.border_thickness,
    );

    canvas.fill_rect(inner.x0, inner.y0, inner.x1, inner.y1, palette.inner_bg);
    canvas.fill_rect(
        inner.x0,
        inner.y0,
        inner.x1,
        inner.y0 + layout.accent_height,
        palette.accent,
    );

    let radius = layout.circle_radius;
    canvas.draw_circle(layout.left_cx, layout.circle_y, radius, palette.left_motif);
    canvas.draw_circle(layout.right_cx, layout.circle_y, radius, palette.right_motif);

    // Highlights are overdrawn in the inner background color
    let (hx, hy) = layout.left_highlight();
    canvas.draw_circle(hx, hy, layout.highlight_radius, palette.inner_bg);
    let (hx, hy) = layout.right_highlight();
    canvas.draw_circle(hx, hy, layout.highlight_radius, palette.inner_bg);

    if let Some(text) = layout.text {
        draw_text(canvas, LOGO_TEXT, text.x, text.y, text.scale, palette.text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn histogram(pixels: &[u16]) -> BTreeMap<u16, usize> {
        let mut counts = BTreeMap::new();
        for &p in pixels {
            *counts.entry(p).or_insert(0) += 1;
        }
        counts
    }

    fn composed(width: usize, height: usize) -> Vec<u16> {
        let mut pixels = vec![0u16; width * height];
        let mut canvas = Canvas::new(&mut pixels, width, height).unwrap();
        compose(&mut canvas, &Palette::PUGMINER);
        pixels
    }

    #[test]
    fn test_color_histogram_40x30() {
        let counts = histogram(&composed(40, 30));
        let expected: BTreeMap<u16, usize> = [
            (0x0000, 257),
            (0x1062, 111),
            (0x18E4, 382),
            (0x49E7, 68),
            (0xC508, 96),
            (0xD636, 67),
            (0xEF7D, 118),
            (0xF7BE, 101),
        ]
        .into_iter()
        .collect();
        assert_eq!(counts, expected);
    }

    #[test]
    fn test_color_histogram_320x240() {
        let counts = histogram(&composed(320, 240));
        let expected: BTreeMap<u16, usize> = [
            (0x0000, 60184),
            (0x1062, 1416),
            (0x18E4, 9208),
            (0x49E7, 940),
            (0xC508, 1560),
            (0xD636, 940),
            (0xEF7D, 2000),
            (0xF7BE, 552),
        ]
        .into_iter()
        .collect();
        assert_eq!(counts, expected);
    }

    #[test]
    fn test_histogram_without_text() {
        let counts = histogram(&composed(10, 10));
        assert_eq!(counts.get(&Palette::PUGMINER.text), None);
        assert_eq!(counts.get(&0x0000), Some(&58));
        assert_eq!(counts.get(&Palette::PUGMINER.border), Some(&20));
    }

    #[test]
    fn test_40x30_rows() {
        let pixels = composed(40, 30);
        let p = Palette::PUGMINER;
        let row = |y: usize| &pixels[y * 40..(y + 1) * 40];
        // Untouched margins
        assert!(row(0).iter().all(|&v| v == 0));
        assert!(row(29).iter().all(|&v| v == 0));
        // Top border spans the panel
        assert!(row(2)[2..38].iter().all(|&v| v == p.border));
        assert_eq!(row(2)[1], 0);
        // Accent band
        assert!(row(4)[4..36].iter().all(|&v| v == p.accent));
        assert_eq!(row(4)[3], p.outer_bg);
        // Highlights cut into both circle centers
        assert_eq!(row(13)[6], p.left_motif);
        assert_eq!(row(13)[24], p.right_motif);
        assert_eq!(row(13)[11], p.inner_bg);
        assert_eq!(row(13)[29], p.inner_bg);
    }

    #[test]
    fn test_compose_preserves_background_outside_logo() {
        let mut pixels = vec![0xABCDu16; 160 * 80];
        let mut canvas = Canvas::new(&mut pixels, 160, 80).unwrap();
        compose(&mut canvas, &Palette::PUGMINER);
        assert_eq!(canvas.get_pixel(159, 79), Some(0xABCD));
        assert_eq!(canvas.get_pixel(100, 10), Some(0xABCD));
        assert_eq!(canvas.get_pixel(3, 4), Some(Palette::PUGMINER.border));
    }

    #[test]
    fn test_compose_is_repeatable() {
        assert_eq!(composed(40, 30), composed(40, 30));
        let mut once = composed(160, 80);
        let mut canvas = Canvas::new(&mut once, 160, 80).unwrap();
        compose(&mut canvas, &Palette::PUGMINER);
        assert_eq!(once, composed(160, 80));
    }

    #[test]
    fn test_compose_tiny_canvases() {
        for (w, h) in [(0, 0), (1, 1), (3, 3), (2, 50), (50, 2)] {
            let mut pixels = vec![0u16; w * h];
            let mut canvas = Canvas::new(&mut pixels, w, h).unwrap();
            compose(&mut canvas, &Palette::PUGMINER);
            assert_eq!(pixels.len(), w * h);
        }
    }
}
