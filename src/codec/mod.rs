//! # MinerScreen Header Codec
//!
//! Splits a header into the text before the array body, the decoded pixel
//! values, and the text from the closing brace onward, then stitches it back
//! together after the pixels are modified.
//!
//! ## Architecture
//!
//! ```text
//! document ──locate──▶ ArrayRegion (byte offsets)
//!             │
//!             └──array::decode(body)──▶ Vec<u16>
//!
//! prefix + "\n" + array::encode(values) + suffix ──▶ document
//! ```
//!
//! Everything outside the array body is passed through byte for byte. A body
//! written with CRLF line endings is re-emitted with CRLF.

pub mod array;
pub mod locate;

pub use array::LineEnding;
pub use locate::ArrayRegion;

use crate::config::TargetConfig;
use crate::error::PugmarkError;

/// A header split around its pixel array body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayFragment<'a> {
    /// Document text up to and including the opening brace
    pub prefix: &'a str,
    /// Every literal in the body, including any past `expected_length`
    pub values: Vec<u16>,
    /// Document text from the `\n};` terminator to the end
    pub suffix: &'a str,
    /// Element count from the array's size annotation
    pub expected_length: usize,
    /// Line terminator found in the original body
    pub line_ending: LineEnding,
}

impl ArrayFragment<'_> {
    /// The declared part of the buffer. Trailing extra values are excluded.
    pub fn screen_mut(&mut self) -> &mut [u16] {
        &mut self.values[..self.expected_length]
    }

    /// Rebuild the full document from the current values.
    pub fn recompose(&self) -> String {
        recompose_with(self.prefix, &self.values, self.suffix, self.line_ending)
    }
}

/// Locate the pixel array in `document` and decode its body.
///
/// ## Errors
///
/// - [`PugmarkError::Structure`] when the declaration, braces or size
///   annotation are missing
/// - [`PugmarkError::BufferTooShort`] when the body holds fewer literals
///   than the declared length
pub fn locate_and_decode<'a>(
    document: &'a str,
    config: &TargetConfig,
) -> Result<ArrayFragment<'a>, PugmarkError> {
    let region = locate::array_region(document, config)?;
    let body = &document[region.body_start..region.body_end];
    let values = array::decode(body)?;
    if values.len() < region.expected_length {
        return Err(PugmarkError::BufferTooShort {
            expected: region.expected_length,
            found: values.len(),
        });
    }

    Ok(ArrayFragment {
        prefix: &document[..region.body_start],
        values,
        suffix: &document[region.body_end..],
        expected_length: region.expected_length,
        line_ending: LineEnding::detect(body),
    })
}

/// Join `prefix`, the encoded `values` and `suffix` into a document.
pub fn recompose(prefix: &str, values: &[u16], suffix: &str) -> String {
    recompose_with(prefix, values, suffix, LineEnding::Lf)
}

/// [`recompose`] for a body using `ending`.
///
/// `suffix` starts at the `\n` of the terminator, so a CRLF body gets its
/// last `\r` written before it.
pub fn recompose_with(prefix: &str, values: &[u16], suffix: &str, ending: LineEnding) -> String {
    let body = array::encode_with(values, ending);
    let mut out = String::with_capacity(prefix.len() + body.len() + suffix.len() + 3);
    out.push_str(prefix);
    out.push_str(ending.as_str());
    out.push_str(&body);
    if ending == LineEnding::CrLf {
        out.push('\r');
    }
    out.push_str(suffix);
    out
}
