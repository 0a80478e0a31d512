#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// image filtering module.
pub mod filter;

/// border extension policies.
pub mod padding;

/// module containing parallization utilities.
pub mod parallel;
