//! # Hex Array Body Codec
//!
//! Tokenizes and emits the numeric body of a C array literal.
//!
//! ## Row Format
//!
//! ```text
//! 0x0000, 0x0000, ... 16 values ..., 0xFFFF,
//!   // 0x0010 (16)
//! ```
//!
//! The comment after every row holds the running element count in hex and
//! decimal. It is regenerated on every encode and ignored on decode.

use std::fmt::Write;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::PugmarkError;

/// Values per emitted row.
pub const VALUES_PER_ROW: usize = 16;

static HEX_LITERAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"0x[0-9A-Fa-f]+").expect("hex literal pattern is valid"));

/// Line terminator used inside an array body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
}

impl LineEnding {
    /// Guess from a body that runs up to (not including) the `\n};` terminator.
    ///
    /// A CRLF body leaves its final `\r` just before the terminator.
    pub fn detect(body: &str) -> Self {
        if body.ends_with('\r') {
            LineEnding::CrLf
        } else {
            LineEnding::Lf
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

/// Parse every `0x...` literal in `body`, ignoring `//` comments.
///
/// Fails only when a literal does not fit in 16 bits.
///
/// ## Example
///
/// ```
/// use pugmark::codec::array::decode;
///
/// let body = "0x0001, 0xF800,\n  // 0x0002 (2)\n";
/// assert_eq!(decode(body).unwrap(), vec![0x0001, 0xF800]);
/// ```
pub fn decode(body: &str) -> Result<Vec<u16>, PugmarkError> {
    let mut values = Vec::new();
    for line in body.lines() {
        let code = line.split_once("//").map_or(line, |(code, _)| code);
        for token in HEX_LITERAL.find_iter(code) {
            let literal = token.as_str();
            let value = u16::from_str_radix(&literal[2..], 16).map_err(|_| {
                PugmarkError::Structure(format!("literal {literal} does not fit in 16 bits"))
            })?;
            values.push(value);
        }
    }
    Ok(values)
}

/// Emit `values` as rows of 16 upper-case, zero-padded literals.
///
/// Rows are joined with `\n`; there is no leading or trailing newline.
///
/// ## Example
///
/// ```
/// use pugmark::codec::array::encode;
///
/// assert_eq!(encode(&[0x1, 0xABCD]), "0x0001, 0xABCD,\n  // 0x0002 (2)");
/// assert_eq!(encode(&[]), "");
/// ```
pub fn encode(values: &[u16]) -> String {
    encode_with(values, LineEnding::Lf)
}

/// [`encode`] with an explicit line terminator.
pub fn encode_with(values: &[u16], ending: LineEnding) -> String {
    let newline = ending.as_str();
    // "0xABCD, " per value plus the count comment
    let mut out = String::with_capacity(values.len() * 8 + values.len() / VALUES_PER_ROW * 24);
    for (row, chunk) in values.chunks(VALUES_PER_ROW).enumerate() {
        if row > 0 {
            out.push_str(newline);
        }
        for (i, value) in chunk.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            let _ = write!(out, "0x{value:04X}");
        }
        let next_index = row * VALUES_PER_ROW + chunk.len();
        let _ = write!(out, ",{newline}  // 0x{next_index:04X} ({next_index})");
    }
    out
}
