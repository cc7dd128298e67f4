//! # Pugmark - MinerScreen Logo Stamper
//!
//! Pugmark rewrites the RGB565 `MinerScreen` bitmaps embedded in generated
//! C headers so they carry the Pugminer logo. It provides:
//!
//! - **Rendering**: clipped canvas primitives, a 5x7 bitmap font and RGB565 packing
//! - **Logo**: layout computed from the screen size and the drawing sequence
//! - **Codec**: locating, decoding and re-emitting the hex array literal
//! - **Update**: per-document and per-file rewriting with all-or-nothing writes
//!
//! ## Quick Start
//!
//! ```
//! use pugmark::{TargetConfig, render::Palette, update};
//!
//! let header = "const uint16_t MinerWidth = 4;\n\
//!               const uint16_t MinerHeight = 2;\n\
//!               const unsigned short MinerScreen[8] PROGMEM={\n\
//!               0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000,\n\
//!               };\n";
//!
//! let rewritten = update::update_document(header, &TargetConfig::MINER_SCREEN, &Palette::PUGMINER)?;
//! assert!(rewritten.contains("  // 0x0008 (8)"));
//! # Ok::<(), pugmark::PugmarkError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`render`] | Canvas, font and color primitives |
//! | [`logo`] | Logo layout and composition |
//! | [`codec`] | Header array locator and hex codec |
//! | [`update`] | Document and file rewriting |
//! | [`preview`] | PNG previews of RGB565 buffers |
//! | [`config`] | Target header configuration |
//! | [`error`] | Error types |

pub mod codec;
pub mod config;
pub mod error;
pub mod logo;
pub mod preview;
pub mod render;
pub mod update;

// Re-exports for convenience
pub use config::TargetConfig;
pub use error::PugmarkError;
