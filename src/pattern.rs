//! Pattern module for scan patterns
//!
//! This module contains the tokenizer and the placeholder analyzer. The
//! analyzer's output, a [`CompiledPattern`], is immutable and reusable: build
//! it once per distinct pattern text and scan as many source strings as
//! needed against it.

pub mod analyzer;
pub mod lexer;

pub use analyzer::{compile, CompiledPattern, Placeholder, Specifier};
