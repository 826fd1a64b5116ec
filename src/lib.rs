//! # descan
//!
//! A typed inverse of template-substitution formatting: compile a pattern
//! containing `{}` / `{%d}`-style placeholders, then scan source strings
//! against it and recover strongly-typed values. The literal text around each
//! placeholder anchors the corresponding capture in the source.
//!
//! Placeholder syntax: `{}` unconstrained, `{%d}` signed integer, `{%u}`
//! unsigned integer, `{%f}` floating point, `{%s}` text. Any other character
//! after `%`, or a missing closing brace, is a syntax error reported at
//! compile time, before any data is processed.
//!
//! ```
//! use descan::compile;
//!
//! let pattern = compile("{%d} and {}").unwrap();
//! let (count, rest): (i32, &str) = pattern.scan("42 and 3.1415926").unwrap();
//! assert_eq!(count, 42);
//! assert_eq!(rest, "3.1415926");
//! ```
//!
//! A [`CompiledPattern`] is immutable and freely shareable across threads;
//! compile it once (or use [`compile_cached`]) and scan as many sources as
//! needed.

pub mod cache;
pub mod convert;
pub mod error;
pub mod pattern;
pub mod scan;
pub mod segment;

pub use cache::compile_cached;
pub use convert::{Capture, TypeCategory};
pub use error::ScanError;
pub use pattern::{compile, CompiledPattern, Placeholder, Specifier};
pub use scan::{CaptureTuple, TypeRequest, Value};
pub use segment::SourceBinding;
