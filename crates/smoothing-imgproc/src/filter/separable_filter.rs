use smoothing_image::{Image, ImageError};

use super::convolution::saturate_cast_u8;
use crate::padding::PaddingMode;
use crate::parallel::{self, ExecutionStrategy};

/// Apply a separable kernel to an image, independently on each channel.
///
/// This is [`filter2d`](super::filter2d) with the kernel `kernel_y[i] * kernel_x[j]`,
/// computed as a horizontal pass into an `f32` buffer followed by a vertical pass
/// into `dst`. A sample costs `kx + ky` taps instead of `kx * ky`. Only the final
/// sums are rounded, so the output matches the 2D correlation up to the `f32`
/// summation order.
///
/// # Arguments
///
/// * `src` - The source image with shape (H, W, C).
/// * `dst` - The destination image with shape (H, W, C).
/// * `kernel_x` - The horizontal kernel, of odd length.
/// * `kernel_y` - The vertical kernel, of odd length.
/// * `padding` - The border extension policy.
/// * `strategy` - How rows are scheduled, for both passes.
///
/// # Errors
///
/// Fails if `dst` does not have the size of `src`, if a kernel has an even or zero
/// length, or if a kernel is longer than the image side it runs along.
pub fn separable_filter<const C: usize>(
    src: &Image<u8, C>,
    dst: &mut Image<u8, C>,
    kernel_x: &[f32],
    kernel_y: &[f32],
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

    for kernel in [kernel_x, kernel_y] {
        if kernel.is_empty() || kernel.len() % 2 == 0 {
            return Err(ImageError::InvalidKernelSize(kernel.len()));
        }
    }

    let (kx, ky) = (kernel_x.len(), kernel_y.len());
    if kx > src.cols() || ky > src.rows() {
        return Err(ImageError::KernelLargerThanImage(
            kx.max(ky),
            src.cols(),
            src.rows(),
        ));
    }

    let cols = src.cols();
    let row_stride = cols * C;

    let col_table = padding.window_table(cols, kx);
    let row_table = padding.window_table(src.rows(), ky);

    let src_data = src.as_slice();
    let mut temp = vec![0.0f32; src_data.len()];

    // horizontal
    parallel::for_each_row_mut(&mut temp, row_stride, strategy, |r, temp_row| {
        let src_row = &src_data[r * row_stride..(r + 1) * row_stride];

        for (c, temp_pixel) in temp_row.chunks_exact_mut(C).enumerate() {
            let src_cols = &col_table[c * kx..(c + 1) * kx];
            for (&w, src_x) in kernel_x.iter().zip(src_cols) {
                let Some(src_x) = *src_x else {
                    continue;
                };
                let pixel = &src_row[src_x * C..(src_x + 1) * C];
                for (acc_val, &val) in temp_pixel.iter_mut().zip(pixel) {
                    *acc_val += w * val as f32;
                }
            }
        }
    })?;

    // vertical
    let temp = temp.as_slice();
    parallel::for_each_row_mut(dst.as_slice_mut(), row_stride, strategy, |r, dst_row| {
        let src_rows = &row_table[r * ky..(r + 1) * ky];

        for (c, dst_pixel) in dst_row.chunks_exact_mut(C).enumerate() {
            let mut acc = [0.0f32; C];
            for (&w, src_y) in kernel_y.iter().zip(src_rows) {
                let Some(src_y) = *src_y else {
                    continue;
                };
                let offset = src_y * row_stride + c * C;
                for (acc_val, &val) in acc.iter_mut().zip(&temp[offset..offset + C]) {
                    *acc_val += w * val;
                }
            }

            for (out, &acc_val) in dst_pixel.iter_mut().zip(acc.iter()) {
                *out = saturate_cast_u8(acc_val);
            }
        }
    })?;

    Ok(())
}
