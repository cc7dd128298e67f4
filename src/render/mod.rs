//! # Rendering Module
//!
//! Low-level drawing onto RGB565 pixel buffers.
//!
//! ## Modules
//!
//! - [`color`]: RGB888 to RGB565 packing and the logo palette
//! - [`canvas`]: Clipped point, rectangle, border and disc primitives
//! - [`font`]: 5x7 bitmap glyphs and scaled text stamping
//!
//! ## Usage Example
//!
//! ```
//! use pugmark::render::{Canvas, color::rgb_to_565, font::draw_text};
//!
//! let mut pixels = vec![0u16; 64 * 32];
//! let mut canvas = Canvas::new(&mut pixels, 64, 32).unwrap();
//!
//! let gold = rgb_to_565(196, 160, 64);
//! canvas.fill_rect(0, 0, 64, 4, gold);
//! canvas.draw_circle(32, 16, 6, 0xFFFF);
//! draw_text(&mut canvas, "PUG", 2, 24, 1, 0xFFFF);
//! ```

pub mod canvas;
pub mod color;
pub mod font;

pub use canvas::Canvas;
pub use color::{Palette, rgb_to_565};
