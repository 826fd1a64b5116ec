//! Typed value conversion
//!
//! Converts a captured substring into the caller's requested type. When the
//! placeholder carried an explicit specifier, the requested type's category
//! must agree with it; a bare `{}` places no constraint and simply attempts
//! the conversion the caller asked for. The capture is converted exactly as
//! segmented; no whitespace trimming is performed.

use std::fmt;
use std::num::IntErrorKind;

use serde::Serialize;

use crate::error::ScanError;
use crate::pattern::Specifier;

/// Category of a requested output type, matched against placeholder specifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeCategory {
    Signed,
    Unsigned,
    Float,
    Text,
}

impl fmt::Display for TypeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TypeCategory::Signed => "signed integer",
            TypeCategory::Unsigned => "unsigned integer",
            TypeCategory::Float => "floating point",
            TypeCategory::Text => "text",
        };
        write!(f, "{}", name)
    }
}

/// Check a requested category against a placeholder's specifier, if any
pub(crate) fn check_compatibility(
    index: usize,
    specifier: Option<Specifier>,
    requested: TypeCategory,
) -> Result<(), ScanError> {
    let specifier = match specifier {
        Some(specifier) => specifier,
        None => return Ok(()),
    };
    let allowed = match specifier {
        Specifier::Decimal => TypeCategory::Signed,
        Specifier::Unsigned => TypeCategory::Unsigned,
        Specifier::Float => TypeCategory::Float,
        Specifier::Text => TypeCategory::Text,
    };
    if allowed == requested {
        Ok(())
    } else {
        Err(ScanError::SpecifierMismatch {
            index,
            specifier,
            requested,
        })
    }
}

/// Conversion from a captured substring into a concrete output type
///
/// Text conversions borrow the capture verbatim; numeric conversions parse it
/// as a base-10 literal with an optional leading sign.
pub trait Capture<'s>: Sized {
    /// Category used for specifier compatibility checks
    const CATEGORY: TypeCategory;

    /// Convert the capture exactly as segmented
    fn from_capture(capture: &'s str) -> Result<Self, ScanError>;
}

macro_rules! impl_capture_int {
    ($($ty:ty => $category:expr),* $(,)?) => {
        $(
            impl<'s> Capture<'s> for $ty {
                const CATEGORY: TypeCategory = $category;

                fn from_capture(capture: &'s str) -> Result<Self, ScanError> {
                    capture.parse::<$ty>().map_err(|err| match err.kind() {
                        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                            ScanError::NumericOverflow {
                                capture: capture.to_string(),
                            }
                        }
                        _ => ScanError::InvalidNumericLiteral {
                            capture: capture.to_string(),
                        },
                    })
                }
            }
        )*
    };
}

impl_capture_int! {
    i8 => TypeCategory::Signed,
    i16 => TypeCategory::Signed,
    i32 => TypeCategory::Signed,
    i64 => TypeCategory::Signed,
    u8 => TypeCategory::Unsigned,
    u16 => TypeCategory::Unsigned,
    u32 => TypeCategory::Unsigned,
    u64 => TypeCategory::Unsigned,
}

/// Shape check for float captures: an optional sign, digits with an optional
/// fraction, and an optional exponent. Rejects alphabetic spellings such as
/// `inf` and `NaN`, which `str::parse` would otherwise accept.
fn is_float_literal(s: &str) -> bool {
    let unsigned = s.strip_prefix(&['+', '-'][..]).unwrap_or(s);
    if unsigned.is_empty() {
        return false;
    }

    let (mantissa, exponent) = match unsigned.split_once(&['e', 'E'][..]) {
        Some((mantissa, exponent)) => (mantissa, Some(exponent)),
        None => (unsigned, None),
    };

    let mantissa_ok = match mantissa.split_once('.') {
        Some((int, frac)) => {
            (!int.is_empty() || !frac.is_empty())
                && int.chars().all(|c| c.is_ascii_digit())
                && frac.chars().all(|c| c.is_ascii_digit())
        }
        None => !mantissa.is_empty() && mantissa.chars().all(|c| c.is_ascii_digit()),
    };

    let exponent_ok = match exponent {
        Some(exponent) => {
            let digits = exponent.strip_prefix(&['+', '-'][..]).unwrap_or(exponent);
            !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
        }
        None => true,
    };

    mantissa_ok && exponent_ok
}

macro_rules! impl_capture_float {
    ($($ty:ty),* $(,)?) => {
        $(
            impl<'s> Capture<'s> for $ty {
                const CATEGORY: TypeCategory = TypeCategory::Float;

                fn from_capture(capture: &'s str) -> Result<Self, ScanError> {
                    if !is_float_literal(capture) {
                        return Err(ScanError::InvalidNumericLiteral {
                            capture: capture.to_string(),
                        });
                    }
                    let value = capture.parse::<$ty>().map_err(|_| {
                        ScanError::InvalidNumericLiteral {
                            capture: capture.to_string(),
                        }
                    })?;
                    // a shape-valid literal can only turn infinite by overflow
                    if value.is_infinite() {
                        return Err(ScanError::NumericOverflow {
                            capture: capture.to_string(),
                        });
                    }
                    Ok(value)
                }
            }
        )*
    };
}

impl_capture_float!(f32, f64);

impl<'s> Capture<'s> for &'s str {
    const CATEGORY: TypeCategory = TypeCategory::Text;

    fn from_capture(capture: &'s str) -> Result<Self, ScanError> {
        Ok(capture)
    }
}

impl<'s> Capture<'s> for String {
    const CATEGORY: TypeCategory = TypeCategory::Text;

    fn from_capture(capture: &'s str) -> Result<Self, ScanError> {
        Ok(capture.to_string())
    }
}
