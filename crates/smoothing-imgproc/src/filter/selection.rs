use std::str::FromStr;

use smoothing_image::{Image, ImageError};

use super::ops::{box_filter_with_strategy, compute_kernel_size, gaussian_filter_with_strategy};
use crate::parallel::ExecutionStrategy;

/// The kernel side used by [`KernelSizePolicy::Fixed`].
pub const FIXED_KERNEL_SIZE: usize = 5;

/// The smoothing algorithms available to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SmoothingFilter {
    /// Unweighted local mean, see [`box_filter`](super::box_filter).
    Box,
    /// Gaussian weighted mean, see [`gaussian_filter`](super::gaussian_filter).
    Gaussian,
}

impl SmoothingFilter {
    /// The option name of the algorithm.
    pub fn name(&self) -> &'static str {
        match self {
            SmoothingFilter::Box => "average_smoothing",
            SmoothingFilter::Gaussian => "gaussian_smoothing",
        }
    }

    /// The file stem used when persisting the filtered image.
    pub fn output_stem(&self) -> &'static str {
        match self {
            SmoothingFilter::Box => "average_image",
            SmoothingFilter::Gaussian => "gaussian_image",
        }
    }
}

impl std::fmt::Display for SmoothingFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SmoothingFilter {
    type Err = ImageError;

    /// Parse an algorithm name, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "average_smoothing" => Ok(SmoothingFilter::Box),
            "gaussian_smoothing" => Ok(SmoothingFilter::Gaussian),
            _ => Err(ImageError::UnknownFilter(s.to_string())),
        }
    }
}

/// How the kernel side is chosen for an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KernelSizePolicy {
    /// Always [`FIXED_KERNEL_SIZE`].
    Fixed,
    /// Derived from the image dimensions with [`compute_kernel_size`].
    #[default]
    Automatic,
}

impl KernelSizePolicy {
    /// The kernel side for `image` under this policy.
    pub fn kernel_size(&self, image: &Image<u8, 3>) -> usize {
        match self {
            KernelSizePolicy::Fixed => FIXED_KERNEL_SIZE,
            KernelSizePolicy::Automatic => compute_kernel_size(image),
        }
    }
}

impl FromStr for KernelSizePolicy {
    type Err = ImageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fixed" => Ok(KernelSizePolicy::Fixed),
            "automatic" | "auto" => Ok(KernelSizePolicy::Automatic),
            _ => Err(ImageError::UnknownKernelPolicy(s.to_string())),
        }
    }
}

/// Smooth an image with the selected algorithm into a newly allocated image.
///
/// # Examples
///
/// ```
/// use smoothing_image::Image;
/// use smoothing_imgproc::filter::{smooth, SmoothingFilter};
///
/// let src = Image::<u8, 3>::from_size_val([16, 16].into(), 10).unwrap();
/// let filter: SmoothingFilter = "Average_Smoothing".parse().unwrap();
/// let dst = smooth(&src, filter, 5).unwrap();
/// assert_eq!(dst.size(), src.size());
/// ```
pub fn smooth(
    src: &Image<u8, 3>,
    filter: SmoothingFilter,
    kernel_size: usize,
) -> Result<Image<u8, 3>, ImageError> {
    smooth_with_strategy(src, filter, kernel_size, ExecutionStrategy::default())
}

/// Same as [`smooth`], scheduling the rows with the given strategy.
pub fn smooth_with_strategy(
    src: &Image<u8, 3>,
    filter: SmoothingFilter,
    kernel_size: usize,
    strategy: ExecutionStrategy,
) -> Result<Image<u8, 3>, ImageError> {
    let mut dst = Image::from_size_val(src.size(), 0u8)?;
    match filter {
        SmoothingFilter::Box => box_filter_with_strategy(src, &mut dst, kernel_size, strategy)?,
        SmoothingFilter::Gaussian => {
            gaussian_filter_with_strategy(src, &mut dst, kernel_size, strategy)?
        }
    }
    log::debug!(
        "applied {filter} with kernel size {kernel_size} on {} ({strategy:?})",
        src.size()
    );
    Ok(dst)
}
