//! Filter operations
//!
//! This module provides the smoothing filters, the generic 2D convolution and the
//! separable convolution the smoothing filters run on.

/// Filter kernels
pub mod kernels;

/// 2D convolution primitive
mod convolution;
pub use convolution::*;

/// Separable convolution primitive
mod separable_filter;
pub use separable_filter::*;

/// Smoothing filters and kernel sizing
mod ops;
pub use ops::*;

/// Algorithm and kernel size selection
mod selection;
pub use selection::*;
