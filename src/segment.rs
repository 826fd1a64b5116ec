//! Source segmentation
//!
//! Aligns a compiled pattern's placeholders against a concrete source string.
//! The literal text between placeholders acts as a separator: each capture is
//! exactly the text between two located anchors. Matching is leftmost and
//! greedy over a single forward pass; when a separator occurs multiple times
//! the first occurrence at or after the cursor wins, and there is no
//! backtracking.

use std::ops::Range;

use crate::error::ScanError;
use crate::pattern::CompiledPattern;

/// Byte range of the source text captured by one placeholder
pub type SourceBinding = Range<usize>;

/// Compute one capture range per placeholder, in placeholder order
///
/// The range `start..end` of binding `i` satisfies `start <= end`, both within
/// the source bounds. A non-empty leading separator that does not occur in the
/// source at or after the previous capture's end is a hard
/// [`SeparatorNotFound`](ScanError::SeparatorNotFound) error; a missing
/// trailing separator extends the capture to the end of the source.
pub fn segment(
    pattern: &CompiledPattern,
    source: &str,
) -> Result<Vec<SourceBinding>, ScanError> {
    let mut bindings = Vec::with_capacity(pattern.placeholder_count());
    let mut prev_end = 0;

    for index in 0..pattern.placeholder_count() {
        let leading = pattern.leading_separator(index);
        let start = if leading.is_empty() {
            prev_end
        } else {
            match source[prev_end..].find(leading) {
                Some(at) => prev_end + at + leading.len(),
                None => {
                    return Err(ScanError::SeparatorNotFound {
                        index,
                        separator: leading.to_string(),
                    })
                }
            }
        };

        let end = if pattern.closes_at_end(index) {
            source.len()
        } else {
            match source[start..].find(pattern.trailing_separator(index)) {
                Some(at) => start + at,
                None => source.len(),
            }
        };

        bindings.push(start..end);
        prev_end = end;
    }

    Ok(bindings)
}
