//! Error types shared across the scan pipeline
//!
//! A single classified enum covers pattern-authoring mistakes (reported by
//! [`compile`](crate::compile), before any data is processed) and per-scan
//! data mistakes (reported by the `scan*` entry points). The first error
//! encountered anywhere in the pipeline aborts the remaining work and is
//! returned as the sole result.

use std::fmt;

use crate::convert::TypeCategory;
use crate::pattern::Specifier;

/// Errors that can occur while compiling a pattern or scanning a source
#[derive(Debug, Clone, PartialEq)]
pub enum ScanError {
    /// The pattern ends inside `{` or `{%`
    UnclosedPlaceholder {
        /// Byte offset of the opening `{`
        open: usize,
    },
    /// The character after `%` is not one of `d`, `u`, `f`, `s`
    InvalidSpecifier { found: char, position: usize },
    /// A `}` is absent where the placeholder grammar requires one
    MissingClosingBrace { position: usize },
    /// The number of requested output types does not match the placeholder count
    PlaceholderCountMismatch { expected: usize, requested: usize },
    /// A non-empty separator before a placeholder does not occur in the source
    /// at or after the previous capture's end
    SeparatorNotFound { index: usize, separator: String },
    /// The placeholder carries an explicit specifier and the requested type's
    /// category disagrees with it
    SpecifierMismatch {
        index: usize,
        specifier: Specifier,
        requested: TypeCategory,
    },
    /// The captured substring is not consumable as a number of the requested type
    InvalidNumericLiteral { capture: String },
    /// The parsed magnitude exceeds the requested type's range
    NumericOverflow { capture: String },
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanError::UnclosedPlaceholder { open } => {
                write!(f, "unclosed placeholder opened at byte {}", open)
            }
            ScanError::InvalidSpecifier { found, position } => {
                write!(
                    f,
                    "invalid specifier '{}' at byte {} (expected one of 'd', 'u', 'f', 's')",
                    found, position
                )
            }
            ScanError::MissingClosingBrace { position } => {
                write!(f, "expected '}}' at byte {}", position)
            }
            ScanError::PlaceholderCountMismatch {
                expected,
                requested,
            } => {
                write!(
                    f,
                    "pattern has {} placeholder(s) but {} value(s) were requested",
                    expected, requested
                )
            }
            ScanError::SeparatorNotFound { index, separator } => {
                write!(
                    f,
                    "separator {:?} leading placeholder {} not found in source",
                    separator, index
                )
            }
            ScanError::SpecifierMismatch {
                index,
                specifier,
                requested,
            } => {
                write!(
                    f,
                    "placeholder {} is declared '{}' but a {} value was requested",
                    index, specifier, requested
                )
            }
            ScanError::InvalidNumericLiteral { capture } => {
                write!(f, "cannot parse {:?} as a number", capture)
            }
            ScanError::NumericOverflow { capture } => {
                write!(f, "{:?} does not fit in the requested type", capture)
            }
        }
    }
}

impl std::error::Error for ScanError {}
