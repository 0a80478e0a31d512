use smoothing_image::{Image, ImageError, ImageSize};

use super::{kernels, separable_filter::separable_filter};
use crate::padding::PaddingMode;
use crate::parallel::ExecutionStrategy;

/// The border policy shared by the smoothing filters.
pub const DEFAULT_PADDING: PaddingMode = PaddingMode::Reflect101;

/// The standard deviation of the gaussian smoothing kernel, on both axes.
pub const GAUSSIAN_SIGMA: f32 = 1.0;

/// The smallest kernel side accepted by the smoothing filters.
pub const MIN_KERNEL_SIZE: usize = 3;

/// Compute a kernel size proportional to the image dimensions.
///
/// Takes the smaller image side, divides it by 20, forces the result to be odd and
/// floors it at 3. Larger images get proportionally larger neighbourhoods.
///
/// # Examples
///
/// ```
/// use smoothing_image::Image;
/// use smoothing_imgproc::filter::compute_kernel_size;
///
/// let image = Image::<u8, 3>::from_size_val([300, 100].into(), 0).unwrap();
/// assert_eq!(compute_kernel_size(&image), 5);
/// ```
pub fn compute_kernel_size(image: &Image<u8, 3>) -> usize {
    let smallest_side = image.width().min(image.height());
    MIN_KERNEL_SIZE.max((smallest_side / 20) | 1)
}

/// Check that `kernel_size` is a valid smoothing kernel side for an image of `size`.
///
/// # Errors
///
/// [`ImageError::InvalidKernelSize`] for even sizes or sizes below 3, and
/// [`ImageError::KernelLargerThanImage`] when the kernel does not fit in the image.
pub fn validate_kernel_size(kernel_size: usize, size: ImageSize) -> Result<(), ImageError> {
    if kernel_size < MIN_KERNEL_SIZE || kernel_size % 2 == 0 {
        return Err(ImageError::InvalidKernelSize(kernel_size));
    }
    if kernel_size > size.width || kernel_size > size.height {
        return Err(ImageError::KernelLargerThanImage(
            kernel_size,
            size.width,
            size.height,
        ));
    }
    Ok(())
}

/// Smooth an image with an unweighted local mean (average smoothing).
///
/// # Arguments
///
/// * `src` - The source image with shape (H, W, 3).
/// * `dst` - The destination image with shape (H, W, 3).
/// * `kernel_size` - The side of the square window, odd and at least 3.
///
/// PRECONDITION: `src` and `dst` must have the same shape.
///
/// # Examples
///
/// ```
/// use smoothing_image::Image;
/// use smoothing_imgproc::filter::box_filter;
///
/// let src = Image::<u8, 3>::from_size_val([8, 8].into(), 42).unwrap();
/// let mut dst = Image::<u8, 3>::from_size_val(src.size(), 0).unwrap();
/// box_filter(&src, &mut dst, 3).unwrap();
/// assert!(dst.as_slice().iter().all(|&v| v == 42));
/// ```
pub fn box_filter(
    src: &Image<u8, 3>,
    dst: &mut Image<u8, 3>,
    kernel_size: usize,
) -> Result<(), ImageError> {
    box_filter_with_strategy(src, dst, kernel_size, ExecutionStrategy::default())
}

/// Same as [`box_filter`], scheduling the rows with the given strategy.
///
/// The square box kernel is the outer product of two 1D box kernels, so the image is
/// filtered with [`separable_filter`].
pub fn box_filter_with_strategy(
    src: &Image<u8, 3>,
    dst: &mut Image<u8, 3>,
    kernel_size: usize,
    strategy: ExecutionStrategy,
) -> Result<(), ImageError> {
    validate_kernel_size(kernel_size, src.size())?;
    let kernel = kernels::box_kernel_1d(kernel_size);
    separable_filter(src, dst, &kernel, &kernel, DEFAULT_PADDING, strategy)
}

/// Smooth an image with a gaussian kernel of standard deviation [`GAUSSIAN_SIGMA`].
///
/// The kernel is the gaussian density sampled on the integer grid and is not
/// rescaled to sum to one, see [`kernels::gaussian_kernel_2d`]. Outputs are therefore
/// scaled by the kernel sum: a constant image of value `v` becomes
/// `round(v * sum)`, e.g. 255 maps to 199 with a 3x3 kernel.
///
/// # Arguments
///
/// * `src` - The source image with shape (H, W, 3).
/// * `dst` - The destination image with shape (H, W, 3).
/// * `kernel_size` - The side of the square kernel, odd and at least 3.
///
/// PRECONDITION: `src` and `dst` must have the same shape.
pub fn gaussian_filter(
    src: &Image<u8, 3>,
    dst: &mut Image<u8, 3>,
    kernel_size: usize,
) -> Result<(), ImageError> {
    gaussian_filter_with_strategy(src, dst, kernel_size, ExecutionStrategy::default())
}

/// Same as [`gaussian_filter`], scheduling the rows with the given strategy.
///
/// The 2D gaussian factors into two [`kernels::gaussian_kernel_1d`], so the image is
/// filtered with [`separable_filter`].
pub fn gaussian_filter_with_strategy(
    src: &Image<u8, 3>,
    dst: &mut Image<u8, 3>,
    kernel_size: usize,
    strategy: ExecutionStrategy,
) -> Result<(), ImageError> {
    validate_kernel_size(kernel_size, src.size())?;
    let kernel = kernels::gaussian_kernel_1d(kernel_size, GAUSSIAN_SIGMA);
    separable_filter(src, dst, &kernel, &kernel, DEFAULT_PADDING, strategy)
}
