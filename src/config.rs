//! # Target Configuration
//!
//! Describes which headers to rewrite and how their declarations are named.
//!
//! ## Usage
//!
//! ```
//! use pugmark::config::TargetConfig;
//!
//! let config = TargetConfig::MINER_SCREEN;
//! assert_eq!(config.array_name, "MinerScreen");
//! ```

/// # Target Configuration
///
/// A generated header is expected to contain:
///
/// ```text
/// const uint16_t MinerWidth = 320;
/// const uint16_t MinerHeight = 240;
/// const unsigned short MinerScreen[0x12C00] PROGMEM={
/// 0x0000, 0x0000, ...,
///   // 0x0010 (16)
/// ...
/// };
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetConfig {
    /// Name of the `const uint16_t` holding the canvas width
    pub width_decl: &'static str,

    /// Name of the `const uint16_t` holding the canvas height
    pub height_decl: &'static str,

    /// Name of the `const unsigned short ... PROGMEM` pixel array
    pub array_name: &'static str,

    /// Glob (relative to the media directory) selecting candidate headers
    pub file_glob: &'static str,
}

impl TargetConfig {
    /// MinerScreen images shipped under `src/media/images_*_*.h`.
    pub const MINER_SCREEN: Self = Self {
        width_decl: "MinerWidth",
        height_decl: "MinerHeight",
        array_name: "MinerScreen",
        file_glob: "images_*_*.h",
    };

    /// Directory searched when none is given on the command line.
    pub const DEFAULT_MEDIA_DIR: &'static str = "src/media";
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self::MINER_SCREEN
    }
}
