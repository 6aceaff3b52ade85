// phishcheck-entropy/src/lib.rs
#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod entropy;
pub mod keywords;

/// Common type definitions
pub type EntropyScore = f64;
