//! Scan orchestration
//!
//! Ties analysis, segmentation and conversion together. The requested output
//! arity is validated against the pattern's placeholder count before any
//! segmentation happens; after that the pipeline segments once, converts each
//! capture in placeholder order and stops at the first failure. No partial
//! result is ever returned.

use std::fmt;

use serde::Serialize;

use crate::convert::{self, Capture, TypeCategory};
use crate::error::ScanError;
use crate::pattern::CompiledPattern;
use crate::segment::{self, SourceBinding};

/// Runtime type list entry for [`CompiledPattern::scan_values`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeRequest {
    Signed,
    Unsigned,
    Float,
    Text,
}

impl TypeRequest {
    pub fn category(self) -> TypeCategory {
        match self {
            TypeRequest::Signed => TypeCategory::Signed,
            TypeRequest::Unsigned => TypeCategory::Unsigned,
            TypeRequest::Float => TypeCategory::Float,
            TypeRequest::Text => TypeCategory::Text,
        }
    }

    /// Single-letter form used by type lists (`d`, `u`, `f`, `s`)
    pub fn from_letter(c: char) -> Option<Self> {
        match c {
            'd' => Some(TypeRequest::Signed),
            'u' => Some(TypeRequest::Unsigned),
            'f' => Some(TypeRequest::Float),
            's' => Some(TypeRequest::Text),
            _ => None,
        }
    }
}

/// A scanned value tagged with its runtime type
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Value {
    Signed(i64),
    Unsigned(u64),
    Float(f64),
    Text(String),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Signed(v) => write!(f, "{}", v),
            Value::Unsigned(v) => write!(f, "{}", v),
            Value::Float(v) => write!(f, "{}", v),
            Value::Text(v) => write!(f, "{}", v),
        }
    }
}

/// Ordered extraction of one converted value per placeholder
///
/// Implemented for tuples of [`Capture`] types up to arity 8, including the
/// unit tuple for zero-placeholder patterns.
pub trait CaptureTuple<'s>: Sized {
    /// Number of placeholders this tuple consumes
    const ARITY: usize;

    fn extract(
        pattern: &CompiledPattern,
        source: &'s str,
        bindings: &[SourceBinding],
    ) -> Result<Self, ScanError>;
}

fn convert_at<'s, T: Capture<'s>>(
    pattern: &CompiledPattern,
    source: &'s str,
    bindings: &[SourceBinding],
    index: usize,
) -> Result<T, ScanError> {
    convert::check_compatibility(
        index,
        pattern.placeholders()[index].specifier,
        T::CATEGORY,
    )?;
    T::from_capture(&source[bindings[index].clone()])
}

impl<'s> CaptureTuple<'s> for () {
    const ARITY: usize = 0;

    fn extract(
        _pattern: &CompiledPattern,
        _source: &'s str,
        _bindings: &[SourceBinding],
    ) -> Result<Self, ScanError> {
        Ok(())
    }
}

macro_rules! impl_capture_tuple {
    ($count:expr => $($name:ident : $idx:tt),+) => {
        impl<'s, $($name: Capture<'s>),+> CaptureTuple<'s> for ($($name,)+) {
            const ARITY: usize = $count;

            fn extract(
                pattern: &CompiledPattern,
                source: &'s str,
                bindings: &[SourceBinding],
            ) -> Result<Self, ScanError> {
                Ok(($(convert_at::<$name>(pattern, source, bindings, $idx)?,)+))
            }
        }
    };
}

impl_capture_tuple!(1 => A: 0);
impl_capture_tuple!(2 => A: 0, B: 1);
impl_capture_tuple!(3 => A: 0, B: 1, C: 2);
impl_capture_tuple!(4 => A: 0, B: 1, C: 2, D: 3);
impl_capture_tuple!(5 => A: 0, B: 1, C: 2, D: 3, E: 4);
impl_capture_tuple!(6 => A: 0, B: 1, C: 2, D: 3, E: 4, F: 5);
impl_capture_tuple!(7 => A: 0, B: 1, C: 2, D: 3, E: 4, F: 5, G: 6);
impl_capture_tuple!(8 => A: 0, B: 1, C: 2, D: 3, E: 4, F: 5, G: 6, H: 7);

impl CompiledPattern {
    /// Scan `source` and extract one converted value per placeholder
    ///
    /// ```
    /// use descan::compile;
    ///
    /// let pattern = compile("{%d} and {}").unwrap();
    /// let (count, rest): (i32, &str) = pattern.scan("42 and 3.1415926").unwrap();
    /// assert_eq!(count, 42);
    /// assert_eq!(rest, "3.1415926");
    /// ```
    pub fn scan<'s, T: CaptureTuple<'s>>(&self, source: &'s str) -> Result<T, ScanError> {
        if T::ARITY != self.placeholder_count() {
            return Err(ScanError::PlaceholderCountMismatch {
                expected: self.placeholder_count(),
                requested: T::ARITY,
            });
        }
        let bindings = segment::segment(self, source)?;
        T::extract(self, source, &bindings)
    }

    /// Scan `source` with a runtime type list, yielding tagged values
    ///
    /// The list must name one type per placeholder, in placeholder order.
    pub fn scan_values(
        &self,
        source: &str,
        requests: &[TypeRequest],
    ) -> Result<Vec<Value>, ScanError> {
        if requests.len() != self.placeholder_count() {
            return Err(ScanError::PlaceholderCountMismatch {
                expected: self.placeholder_count(),
                requested: requests.len(),
            });
        }
        let bindings = segment::segment(self, source)?;

        let mut values = Vec::with_capacity(requests.len());
        for (index, (request, binding)) in requests.iter().zip(&bindings).enumerate() {
            convert::check_compatibility(
                index,
                self.placeholders()[index].specifier,
                request.category(),
            )?;
            let capture = &source[binding.clone()];
            let value = match request {
                TypeRequest::Signed => Value::Signed(i64::from_capture(capture)?),
                TypeRequest::Unsigned => Value::Unsigned(u64::from_capture(capture)?),
                TypeRequest::Float => Value::Float(f64::from_capture(capture)?),
                TypeRequest::Text => Value::Text(String::from_capture(capture)?),
            };
            values.push(value);
        }
        Ok(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::compile;

    #[test]
    fn test_tuple_scan_with_specifiers() {
        let pattern = compile("some text {%d}, txt {%u}, txt {%s}").unwrap();
        let (a, b, c): (i32, u32, &str) = pattern
            .scan("some text -15, txt 10, txt string")
            .unwrap();
        assert_eq!(a, -15);
        assert_eq!(b, 10);
        assert_eq!(c, "string");
    }

    #[test]
    fn test_tuple_scan_bare_placeholders() {
        let pattern = compile("{}, {}, {}").unwrap();
        let (a, b, c): (i32, u32, &str) = pattern.scan("-30, 20, sstring").unwrap();
        assert_eq!(a, -30);
        assert_eq!(b, 20);
        assert_eq!(c, "sstring");
    }

    #[test]
    fn test_bare_placeholder_type_decided_by_caller() {
        let pattern = compile("some str {} some str").unwrap();

        let (s,): (&str,) = pattern.scan("some str string some str").unwrap();
        assert_eq!(s, "string");

        let (n,): (i32,) = pattern.scan("some str 1024 some str").unwrap();
        assert_eq!(n, 1024);
    }

    #[test]
    fn test_zero_placeholder_scan() {
        let pattern = compile("just literal text").unwrap();
        let () = pattern.scan("whatever").unwrap();
    }

    #[test]
    fn test_arity_mismatch_is_checked_first() {
        let pattern = compile("{%d}").unwrap();
        // two types against a one-placeholder pattern, and a source that
        // would not even segment
        let err = pattern.scan::<(i32, i32)>("").unwrap_err();
        assert_eq!(
            err,
            ScanError::PlaceholderCountMismatch {
                expected: 1,
                requested: 2
            }
        );
    }

    #[test]
    fn test_specifier_mismatch() {
        let pattern = compile("{%u}").unwrap();
        let err = pattern.scan::<(i32,)>("10").unwrap_err();
        assert_eq!(
            err,
            ScanError::SpecifierMismatch {
                index: 0,
                specifier: crate::pattern::Specifier::Unsigned,
                requested: TypeCategory::Signed
            }
        );
    }

    #[test]
    fn test_failure_yields_no_partial_result() {
        let pattern = compile("{%d} {%d}").unwrap();
        let err = pattern.scan::<(i32, i32)>("1 abc").unwrap_err();
        assert_eq!(
            err,
            ScanError::InvalidNumericLiteral {
                capture: "abc".to_string()
            }
        );
    }

    #[test]
    fn test_scan_values_in_placeholder_order() {
        let pattern = compile("{%d} and {%f} and {%s}").unwrap();
        let values = pattern
            .scan_values(
                "-45 and 2.5 and tail",
                &[TypeRequest::Signed, TypeRequest::Float, TypeRequest::Text],
            )
            .unwrap();
        assert_eq!(
            values,
            vec![
                Value::Signed(-45),
                Value::Float(2.5),
                Value::Text("tail".to_string()),
            ]
        );
    }

    #[test]
    fn test_scan_values_arity_mismatch() {
        let pattern = compile("{}").unwrap();
        let err = pattern.scan_values("x", &[]).unwrap_err();
        assert_eq!(
            err,
            ScanError::PlaceholderCountMismatch {
                expected: 1,
                requested: 0
            }
        );
    }

    #[test]
    fn test_type_request_letters() {
        assert_eq!(TypeRequest::from_letter('d'), Some(TypeRequest::Signed));
        assert_eq!(TypeRequest::from_letter('u'), Some(TypeRequest::Unsigned));
        assert_eq!(TypeRequest::from_letter('f'), Some(TypeRequest::Float));
        assert_eq!(TypeRequest::from_letter('s'), Some(TypeRequest::Text));
        assert_eq!(TypeRequest::from_letter('x'), None);
    }

    #[test]
    fn test_value_display() {
        assert_eq!(Value::Signed(-45).to_string(), "-45");
        assert_eq!(Value::Unsigned(30).to_string(), "30");
        assert_eq!(Value::Float(2.5).to_string(), "2.5");
        assert_eq!(Value::Text("story".to_string()).to_string(), "story");
    }
}
