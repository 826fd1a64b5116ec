//! Memoized pattern compilation
//!
//! Validating a pattern ahead of any data processing is the preferred mode:
//! compile once at startup, then scan freely. Callers that cannot hoist the
//! [`CompiledPattern`] out of a hot path can go through this cache instead
//! and pay the analysis once per distinct pattern text. Only successful
//! compiles are memoized, so a malformed pattern keeps reporting its error.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use once_cell::sync::Lazy;

use crate::error::ScanError;
use crate::pattern::{self, CompiledPattern};

static COMPILED: Lazy<RwLock<HashMap<String, Arc<CompiledPattern>>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

/// Compile `pattern`, reusing a previously compiled instance when available
pub fn compile_cached(pattern: &str) -> Result<Arc<CompiledPattern>, ScanError> {
    if let Ok(cache) = COMPILED.read() {
        if let Some(compiled) = cache.get(pattern) {
            return Ok(Arc::clone(compiled));
        }
    }

    let compiled = Arc::new(pattern::compile(pattern)?);
    match COMPILED.write() {
        Ok(mut cache) => Ok(Arc::clone(
            cache.entry(pattern.to_string()).or_insert(compiled),
        )),
        // a poisoned lock degrades to uncached compilation
        Err(_) => Ok(compiled),
    }
}
