use smoothing_image::{Image, ImageError};

use super::kernels::Kernel2d;
use crate::padding::PaddingMode;
use crate::parallel::{self, ExecutionStrategy};

/// Round to the nearest integer (ties to even) and clamp into the `u8` range.
#[inline]
pub fn saturate_cast_u8(val: f32) -> u8 {
    val.round_ties_even().clamp(0.0, 255.0) as u8
}

/// Apply a 2D kernel to an image, independently on each channel.
///
/// The kernel is correlated with the image: its center is aligned with the output
/// pixel and `dst[r, c] = Σ kernel[i, j] * src[r + i - k/2, c + j - k/2]`. Samples
/// outside the image are produced by `padding`. Sums are accumulated in `f32` and
/// written back with [`saturate_cast_u8`].
///
/// # Arguments
///
/// * `src` - The source image with shape (H, W, C).
/// * `dst` - The destination image with shape (H, W, C).
/// * `kernel` - The square kernel.
/// * `padding` - The border extension policy.
/// * `strategy` - How rows are scheduled.
///
/// # Errors
///
/// Fails if `dst` does not have the size of `src`, or if the kernel side is larger
/// than the image width or height.
pub fn filter2d<const C: usize>(
    src: &Image<u8, C>,
    dst: &mut Image<u8, C>,
    kernel: &Kernel2d,
    padding: PaddingMode,
    strategy: ExecutionStrategy,
) -> Result<(), ImageError> {
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    let ksize = kernel.size();
    if ksize > src.cols() || ksize > src.rows() {
        return Err(ImageError::KernelLargerThanImage(
            ksize,
            src.cols(),
            src.rows(),
        ));
    }

    let cols = src.cols();
    let row_stride = cols * C;

    // source indices for every (position, tap) pair, shared by all rows
    let row_table = padding.window_table(src.rows(), ksize);
    let col_table = padding.window_table(cols, ksize);

    let weights = kernel.as_slice();
    let src_data = src.as_slice();

    parallel::for_each_row_mut(dst.as_slice_mut(), row_stride, strategy, |r, dst_row| {
        let src_rows = &row_table[r * ksize..(r + 1) * ksize];

        for (c, dst_pixel) in dst_row.chunks_exact_mut(C).enumerate() {
            let src_cols = &col_table[c * ksize..(c + 1) * ksize];
            let mut acc = [0.0f32; C];

            for (kernel_row, src_y) in weights.chunks_exact(ksize).zip(src_rows) {
                let Some(src_y) = *src_y else {
                    continue;
                };
                let src_row = &src_data[src_y * row_stride..(src_y + 1) * row_stride];

                for (&w, src_x) in kernel_row.iter().zip(src_cols) {
                    let Some(src_x) = *src_x else {
                        continue;
                    };
                    let pixel = &src_row[src_x * C..(src_x + 1) * C];
                    for (acc_val, &val) in acc.iter_mut().zip(pixel) {
                        *acc_val += w * val as f32;
                    }
                }
            }

            for (out, &acc_val) in dst_pixel.iter_mut().zip(acc.iter()) {
                *out = saturate_cast_u8(acc_val);
            }
        }
    })?;

    Ok(())
}
