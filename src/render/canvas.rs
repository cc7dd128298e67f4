//! # Clipped RGB565 Canvas
//!
//! A thin drawing surface over an existing pixel buffer. Every primitive
//! clips against the canvas bounds, so shapes may hang off any edge and
//! nothing outside `[0, width) x [0, height)` is ever written.
//!
//! Coordinates are signed; negative or oversized values are legal input.

/// Drawing surface borrowing a row-major `u16` buffer.
#[derive(Debug)]
pub struct Canvas<'a> {
    pixels: &'a mut [u16],
    width: usize,
    height: usize,
}

impl<'a> Canvas<'a> {
    /// Wrap `pixels` as a `width x height` canvas.
    ///
    /// Returns `None` unless `pixels.len() == width * height`.
    pub fn new(pixels: &'a mut [u16], width: usize, height: usize) -> Option<Self> {
        if width.checked_mul(height)? != pixels.len() {
            return None;
        }
        Some(Self {
            pixels,
            width,
            height,
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Read-only view of the pixel buffer.
    pub fn pixels(&self) -> &[u16] {
        &*self.pixels
    }

    /// Get pixel at coordinates, `None` when out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<u16> {
        self.index(x, y).map(|idx| self.pixels[idx])
    }

    /// Set pixel at coordinates. Out-of-range coordinates are ignored.
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, value: u16) {
        if let Some(idx) = self.index(x, y) {
            self.pixels[idx] = value;
        }
    }

    /// Fill the half-open rectangle `[x0, x1) x [y0, y1)`, clipped to the canvas.
    pub fn fill_rect(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, value: u16) {
        self.fill_span(x0.into(), y0.into(), x1.into(), y1.into(), value);
    }

    /// Draw `thickness` nested one-pixel outlines inward from `[x0, x1) x [y0, y1)`.
    ///
    /// Each level is four independent strokes (top, bottom, left, right), so
    /// a thickness larger than half the rectangle just overpaints itself.
    pub fn draw_border(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, value: u16, thickness: i32) {
        let (x0, y0, x1, y1) = (i64::from(x0), i64::from(y0), i64::from(x1), i64::from(y1));
        let (w, h) = (self.width as i64, self.height as i64);
        for t in 0..i64::from(thickness.max(0)) {
            let (left, top, right, bottom) = (x0 + t, y0 + t, x1 - t, y1 - t);
            // Levels only move inward; once one draws nothing, none after it will.
            let collapsed = left >= right && top >= bottom;
            let off_canvas = (left >= w && right <= 0) || (top >= h && bottom <= 0);
            if collapsed || off_canvas {
                break;
            }
            self.fill_span(left, top, right, top + 1, value);
            self.fill_span(left, bottom - 1, right, bottom, value);
            self.fill_span(left, top, left + 1, bottom, value);
            self.fill_span(right - 1, top, right, bottom, value);
        }
    }

    /// Fill every pixel with `(x - cx)^2 + (y - cy)^2 <= radius^2`.
    ///
    /// Only the part of the bounding box `[cx - r, cx + r] x [cy - r, cy + r]`
    /// that overlaps the canvas is visited. A negative radius draws nothing.
    pub fn draw_circle(&mut self, cx: i32, cy: i32, radius: i32, value: u16) {
        if radius < 0 || self.pixels.is_empty() {
            return;
        }
        let (cx, cy, r) = (i64::from(cx), i64::from(cy), i64::from(radius));
        let r_sq = r * r;
        let (xs, xe) = clip_span(cx - r, cx + r + 1, self.width);
        let (ys, ye) = clip_span(cy - r, cy + r + 1, self.height);
        for y in ys..ye {
            let dy = y as i64 - cy;
            let row = y * self.width;
            for x in xs..xe {
                let dx = x as i64 - cx;
                if dx * dx + dy * dy <= r_sq {
                    self.pixels[row + x] = value;
                }
            }
        }
    }

    /// [`Canvas::fill_rect`] over widened coordinates.
    pub(super) fn fill_span(&mut self, x0: i64, y0: i64, x1: i64, y1: i64, value: u16) {
        let (xs, xe) = clip_span(x0, x1, self.width);
        let (ys, ye) = clip_span(y0, y1, self.height);
        if xs >= xe || ys >= ye {
            return;
        }
        for y in ys..ye {
            let row = y * self.width;
            self.pixels[row + xs..row + xe].fill(value);
        }
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }
}

/// Clip `[start, end)` to `[0, limit)`.
#[inline]
fn clip_span(start: i64, end: i64, limit: usize) -> (usize, usize) {
    let clamp = |v: i64| usize::try_from(v.max(0)).map_or(limit, |v| v.min(limit));
    (clamp(start), clamp(end))
}

// ============================================================================
// TESTS
// ============================================================================
