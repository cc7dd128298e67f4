//! # Logo Geometry
//!
//! All positions and sizes of the logo are derived from the canvas
//! dimensions alone. The arithmetic is integer floor division except for
//! the four proportional factors, which are computed in `f64` and truncated
//! so the output stays pixel-identical with existing assets.
//!
//! ```text
//!  (x0, y0) ┌──────────── panel ─────────────┐
//!           │ ┌────────── inner ───────────┐ │
//!           │ │███████ accent band ████████│ │
//!           │ │   ( L )            ( R )   │ │
//!           │ │        P U G M I N E R     │ │
//!           │ └────────────────────────────┘ │
//!           └────────────────────────────────┘ (x1, y1)
//! ```

use crate::render::font::{ADVANCE, FONT_HEIGHT};

/// Caption stamped under the motif circles.
pub const LOGO_TEXT: &str = "PUGMINER";

/// Floor division (rounds toward negative infinity for a positive divisor).
#[inline]
pub fn floor_div(a: i32, b: i32) -> i32 {
    a.div_euclid(b)
}

/// `value`, but never below `floor`.
#[inline]
pub fn clamp_min(floor: i32, value: i32) -> i32 {
    value.max(floor)
}

/// `value` capped at `ceiling`, then raised to at least `floor`.
///
/// `floor` wins when the two conflict, so tiny canvases still get a
/// minimum-size panel that is later clipped.
#[inline]
pub fn clamp_range(floor: i32, value: i32, ceiling: i32) -> i32 {
    value.min(ceiling).max(floor)
}

/// `dim * factor`, truncated toward zero.
#[inline]
fn proportion(dim: i32, factor: f64) -> i32 {
    (dim as f64 * factor) as i32
}

/// Half-open rectangle `[x0, x1) x [y0, y1)`. May be empty or inverted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl Rect {
    #[inline]
    pub fn width(&self) -> i32 {
        self.x1 - self.x0
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.y1 - self.y0
    }

    /// Shrink by `margin` on every side.
    pub fn inset(&self, margin: i32) -> Rect {
        Rect {
            x0: self.x0 + margin,
            y0: self.y0 + margin,
            x1: self.x1 - margin,
            y1: self.y1 - margin,
        }
    }
}

/// Where and how large the caption is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextPlacement {
    pub x: i32,
    pub y: i32,
    pub scale: i32,
}

/// Complete geometry of the logo for one canvas size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogoLayout {
    /// Outer panel
    pub panel: Rect,
    /// Nominal panel width before clamping to the canvas edge
    pub panel_width: i32,
    pub border_thickness: i32,
    /// Panel inset by the inner margin
    pub inner: Rect,
    pub accent_height: i32,
    pub circle_radius: i32,
    /// Shared vertical center of both motif circles
    pub circle_y: i32,
    pub left_cx: i32,
    pub right_cx: i32,
    pub highlight_radius: i32,
    /// `None` when no vertical or horizontal room is left for the caption
    pub text: Option<TextPlacement>,
}

impl LogoLayout {
    /// Compute the layout for a `width x height` canvas.
    ///
    /// ## Algorithm
    ///
    /// ```text
    /// panel_w = max(48, min(int(0.42 * w), w - 4))
    /// panel_h = max(36, min(int(0.52 * h), h - 4))
    /// origin  = (max(2, int(0.02 * w)), max(2, int(0.05 * h)))
    /// far edge clamped to (w - 2, h - 2)
    /// border  = max(1, panel_w / 32)
    /// margin  = max(2, panel_w / 18)
    /// accent  = max(3, inner_h / 8)
    /// radius  = max(4, min(inner_w / 6, inner_h / 4))
    /// ```
    pub fn compute(width: usize, height: usize) -> Self {
        let w = i32::try_from(width).unwrap_or(i32::MAX);
        let h = i32::try_from(height).unwrap_or(i32::MAX);

        let panel_width = clamp_range(48, proportion(w, 0.42), w.saturating_sub(4));
        let panel_height = clamp_range(36, proportion(h, 0.52), h.saturating_sub(4));
        let x0 = clamp_min(2, proportion(w, 0.02));
        let y0 = clamp_min(2, proportion(h, 0.05));
        let panel = Rect {
            x0,
            y0,
            x1: (x0 + panel_width).min(w.saturating_sub(2)),
            y1: (y0 + panel_height).min(h.saturating_sub(2)),
        };

        let border_thickness = clamp_min(1, floor_div(panel_width, 32));
        let inner = panel.inset(clamp_min(2, floor_div(panel_width, 18)));

        let accent_height = clamp_min(3, floor_div(inner.height(), 8));

        let circle_radius = clamp_min(
            4,
            floor_div(inner.width(), 6).min(floor_div(inner.height(), 4)),
        );
        let circle_y = inner.y0 + accent_height + circle_radius + clamp_min(1, circle_radius / 4);
        let side_inset = circle_radius + clamp_min(1, circle_radius / 2);
        let left_cx = inner.x0 + side_inset;
        let right_cx = inner.x1 - side_inset;
        let highlight_radius = clamp_min(2, circle_radius / 2);

        let text = place_text(&inner, circle_y, circle_radius, LOGO_TEXT);

        Self {
            panel,
            panel_width,
            border_thickness,
            inner,
            accent_height,
            circle_radius,
            circle_y,
            left_cx,
            right_cx,
            highlight_radius,
            text,
        }
    }

    /// Center of the left motif's highlight disc.
    pub fn left_highlight(&self) -> (i32, i32) {
        let offset = self.highlight_radius / 2;
        (self.left_cx - offset, self.circle_y - offset)
    }

    /// Center of the right motif's highlight disc.
    pub fn right_highlight(&self) -> (i32, i32) {
        let offset = self.highlight_radius / 3;
        (self.right_cx + offset, self.circle_y - offset)
    }
}

/// Fit `text` into the inner rectangle below the motif circles.
///
/// The scale is the largest integer that fits both the inner width and the
/// remaining height, with a minimum of 1.
fn place_text(inner: &Rect, circle_y: i32, circle_radius: i32, text: &str) -> Option<TextPlacement> {
    let chars = text.chars().count() as i32;
    let available_width = inner.width();
    let available_height = inner.y1 - circle_y - circle_radius - 2;
    if chars == 0 || available_width <= 0 || available_height <= 0 {
        return None;
    }

    let scale_x = clamp_min(1, floor_div(available_width, chars * ADVANCE));
    let scale_y = clamp_min(1, floor_div(available_height, FONT_HEIGHT + 1));
    let scale = clamp_min(1, scale_x.min(scale_y));

    let text_width = scale * chars * ADVANCE;
    let x = inner.x0 + clamp_min(0, floor_div(available_width - text_width, 2));
    let mut y = circle_y + circle_radius + clamp_min(2, scale);
    if y + FONT_HEIGHT * scale > inner.y1 {
        y = inner.y1 - FONT_HEIGHT * scale - 1;
    }

    Some(TextPlacement { x, y, scale })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_clamp_helpers() {
        assert_eq!(clamp_min(2, 1), 2);
        assert_eq!(clamp_min(2, 5), 5);
        assert_eq!(clamp_range(48, 134, 316), 134);
        assert_eq!(clamp_range(48, 16, 36), 48);
        assert_eq!(clamp_range(48, 100, 6), 48);
        assert_eq!(clamp_range(0, 100, 60), 60);
    }

    #[test]
    fn test_floor_div_negative() {
        assert_eq!(floor_div(7, 2), 3);
        assert_eq!(floor_div(-5, 6), -1);
        assert_eq!(floor_div(-5, 4), -2);
        assert_eq!(floor_div(-8, 4), -2);
    }

    #[test]
    fn test_layout_320x240() {
        let layout = LogoLayout::compute(320, 240);
        assert_eq!(
            layout,
            LogoLayout {
                panel: Rect { x0: 6, y0: 12, x1: 140, y1: 136 },
                panel_width: 134,
                border_thickness: 4,
                inner: Rect { x0: 13, y0: 19, x1: 133, y1: 129 },
                accent_height: 13,
                circle_radius: 20,
                circle_y: 57,
                left_cx: 43,
                right_cx: 103,
                highlight_radius: 10,
                text: Some(TextPlacement { x: 25, y: 79, scale: 2 }),
            }
        );
        assert_eq!(layout.left_highlight(), (38, 52));
        assert_eq!(layout.right_highlight(), (106, 54));
    }

    #[test]
    fn test_layout_480x320() {
        let layout = LogoLayout::compute(480, 320);
        assert_eq!(layout.panel, Rect { x0: 9, y0: 16, x1: 210, y1: 182 });
        assert_eq!(layout.border_thickness, 6);
        assert_eq!(layout.inner, Rect { x0: 20, y0: 27, x1: 199, y1: 171 });
        assert_eq!(layout.circle_radius, 29);
        assert_eq!((layout.left_cx, layout.right_cx, layout.circle_y), (63, 156, 81));
        assert_eq!(layout.text, Some(TextPlacement { x: 37, y: 113, scale: 3 }));
    }

    #[test]
    fn test_layout_small_canvas_uses_floors() {
        let layout = LogoLayout::compute(40, 30);
        assert_eq!(layout.panel, Rect { x0: 2, y0: 2, x1: 38, y1: 28 });
        assert_eq!(layout.panel_width, 48);
        assert_eq!(layout.border_thickness, 1);
        assert_eq!(layout.inner, Rect { x0: 4, y0: 4, x1: 36, y1: 26 });
        assert_eq!(layout.accent_height, 3);
        assert_eq!(layout.circle_radius, 5);
        assert_eq!(layout.circle_y, 13);
        // Text does not fit below the circles, so it is pulled up
        assert_eq!(layout.text, Some(TextPlacement { x: 4, y: 18, scale: 1 }));
    }

    #[test]
    fn test_layout_without_room_for_text() {
        let layout = LogoLayout::compute(10, 10);
        assert_eq!(layout.inner, Rect { x0: 4, y0: 4, x1: 6, y1: 6 });
        assert_eq!(layout.circle_radius, 4);
        assert_eq!(layout.right_cx, 0);
        assert_eq!(layout.text, None);
    }

    #[test]
    fn test_layout_degenerate_canvas() {
        for (w, h) in [(0, 0), (1, 1), (3, 3), (1, 500), (500, 1)] {
            let layout = LogoLayout::compute(w, h);
            assert!(layout.circle_radius >= 4);
            assert!(layout.border_thickness >= 1);
            assert!(layout.highlight_radius >= 2);
        }
        let layout = LogoLayout::compute(3, 3);
        assert_eq!(layout.inner, Rect { x0: 4, y0: 4, x1: -1, y1: -1 });
        assert_eq!(layout.right_cx, -7);
        assert_eq!(layout.text, None);
    }
}
