//! # Structural Locator
//!
//! Finds the dimension declarations and the pixel array inside a header
//! and reports byte offsets. No values are parsed here besides the two
//! dimensions and the declared array length.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::TargetConfig;
use crate::error::PugmarkError;

static LENGTH_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"0x[0-9A-Fa-f]+|\d+").expect("length token pattern is valid"));

/// Byte offsets of the pixel array inside a document.
///
/// ```text
/// const unsigned short MinerScreen[0x4B0] PROGMEM={ 0x0000, ... \n};
/// ^ start                                        ^ body_start  ^ body_end
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArrayRegion {
    /// Start of the array declaration
    pub start: usize,
    /// First byte after the opening brace
    pub body_start: usize,
    /// Start of the `\n};` terminator
    pub body_end: usize,
    /// First byte after the terminator
    pub end: usize,
    /// Element count from the size annotation
    pub expected_length: usize,
}

/// Read `(width, height)` from the `const uint16_t` declarations.
pub fn dimensions(document: &str, config: &TargetConfig) -> Result<(usize, usize), PugmarkError> {
    let width = dimension(document, config.width_decl)?;
    let height = dimension(document, config.height_decl)?;
    Ok((width, height))
}

fn dimension(document: &str, name: &str) -> Result<usize, PugmarkError> {
    let pattern = format!(r"const\s+uint16_t\s+{}\s*=\s*(\d+)\s*;", regex::escape(name));
    let re = Regex::new(&pattern).map_err(|e| PugmarkError::Structure(e.to_string()))?;
    let digits = re
        .captures(document)
        .and_then(|caps| caps.get(1))
        .ok_or_else(|| PugmarkError::Structure(format!("declaration of {name} not found")))?;
    digits
        .as_str()
        .parse()
        .map_err(|_| PugmarkError::Structure(format!("{name} = {} is out of range", digits.as_str())))
}

/// Locate `const unsigned short <array>[<size>] PROGMEM = { ... \n};`.
pub fn array_region(document: &str, config: &TargetConfig) -> Result<ArrayRegion, PugmarkError> {
    let pattern = format!(
        r"(?s)const\s+unsigned\s+short\s+{}\s*\[(?<size>[^\]]+)\]\s*PROGMEM\s*=\s*\{{(?<body>.*?)(?<close>\n\}};)",
        regex::escape(config.array_name)
    );
    let re = Regex::new(&pattern).map_err(|e| PugmarkError::Structure(e.to_string()))?;
    let caps = re.captures(document).ok_or_else(|| {
        PugmarkError::Structure(format!("array {} with braces not found", config.array_name))
    })?;

    let (Some(whole), Some(size), Some(body), Some(close)) =
        (caps.get(0), caps.name("size"), caps.name("body"), caps.name("close"))
    else {
        return Err(PugmarkError::Structure(format!(
            "array {} is incomplete",
            config.array_name
        )));
    };

    Ok(ArrayRegion {
        start: whole.start(),
        body_start: body.start(),
        body_end: close.start(),
        end: close.end(),
        expected_length: declared_length(size.as_str())?,
    })
}

/// First decimal or `0x` number inside the size annotation.
///
/// `MinerScreen[0x12C00]` gives 76800, `MinerScreen[320 * 240]` gives 320.
pub fn declared_length(annotation: &str) -> Result<usize, PugmarkError> {
    let token = LENGTH_TOKEN
        .find(annotation)
        .ok_or_else(|| PugmarkError::Structure(format!("no array length in [{annotation}]")))?
        .as_str();
    let parsed = match token.strip_prefix("0x") {
        Some(hex) => usize::from_str_radix(hex, 16),
        None => token.parse(),
    };
    parsed.map_err(|_| PugmarkError::Structure(format!("array length {token} is out of range")))
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "#pragma once\n\
                          const uint16_t MinerWidth = 4;\n\
                          const uint16_t MinerHeight = 2;\n\
                          const unsigned short MinerScreen[0x8] PROGMEM={\n\
                          0x0000, 0x0001, 0x0002, 0x0003, 0x0004, 0x0005, 0x0006, 0x0007,\n  \
                          // 0x0008 (8)\n\
                          };\n\
                          // trailer\n";

    #[test]
    fn test_dimensions() {
        assert_eq!(dimensions(HEADER, &TargetConfig::MINER_SCREEN).unwrap(), (4, 2));
    }

    #[test]
    fn test_missing_dimension() {
        let doc = HEADER.replace("MinerHeight", "OtherHeight");
        let err = dimensions(&doc, &TargetConfig::MINER_SCREEN).unwrap_err();
        assert!(matches!(err, PugmarkError::Structure(msg) if msg.contains("MinerHeight")));
    }

    #[test]
    fn test_dimension_overflow() {
        let doc = HEADER.replace("= 4;", "= 99999999999999999999999;");
        assert!(dimensions(&doc, &TargetConfig::MINER_SCREEN).is_err());
    }

    #[test]
    fn test_array_region_offsets() {
        let region = array_region(HEADER, &TargetConfig::MINER_SCREEN).unwrap();
        assert_eq!(region.expected_length, 8);
        assert!(HEADER[region.start..].starts_with("const unsigned short MinerScreen"));
        assert!(HEADER[..region.body_start].ends_with("PROGMEM={"));
        assert!(HEADER[region.body_start..].starts_with("\n0x0000"));
        assert_eq!(&HEADER[region.body_end..region.end], "\n};");
        assert_eq!(&HEADER[region.end..], "\n// trailer\n");
    }

    #[test]
    fn test_array_region_missing_close() {
        let doc = HEADER.replace("\n};", "\n}");
        assert!(matches!(
            array_region(&doc, &TargetConfig::MINER_SCREEN),
            Err(PugmarkError::Structure(_))
        ));
    }

    #[test]
    fn test_array_region_missing_open() {
        let doc = HEADER.replace("PROGMEM={", "PROGMEM=");
        assert!(array_region(&doc, &TargetConfig::MINER_SCREEN).is_err());
    }

    #[test]
    fn test_declared_length_forms() {
        assert_eq!(declared_length("0x12C00").unwrap(), 76800);
        assert_eq!(declared_length("76800").unwrap(), 76800);
        assert_eq!(declared_length(" 320 * 240 ").unwrap(), 320);
        assert!(declared_length("MinerWidth * MinerHeight").is_err());
    }

    #[test]
    fn test_declared_length_rejects_bad_annotations() {
        for annotation in ["", "  ", "0xFFFFFFFFFFFFFFFFFF", "99999999999999999999999"] {
            let err = declared_length(annotation).unwrap_err();
            assert!(matches!(err, PugmarkError::Structure(_)), "[{annotation}]");
        }
    }
}
