use rand::{rngs::StdRng, Rng, SeedableRng};

use smoothing_image::{Image, ImageError, ImageSize};
use smoothing_imgproc::filter::{
    box_filter, compute_kernel_size, filter2d, gaussian_filter, kernels, separable_filter, smooth,
    KernelSizePolicy, SmoothingFilter, DEFAULT_PADDING, GAUSSIAN_SIGMA,
};
use smoothing_imgproc::padding::PaddingMode;
use smoothing_imgproc::parallel::ExecutionStrategy;

fn random_image(size: ImageSize, seed: u64) -> Result<Image<u8, 3>, ImageError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let data = (0..size.width * size.height * 3)
        .map(|_| rng.random::<u8>())
        .collect();
    Image::new(size, data)
}

#[test]
fn filters_preserve_shape_and_change_content() -> Result<(), ImageError> {
    let src = random_image([100, 100].into(), 7)?;
    let automatic = compute_kernel_size(&src);
    assert_eq!(automatic, 5);

    for kernel_size in [3, automatic, 9] {
        for filter in [SmoothingFilter::Box, SmoothingFilter::Gaussian] {
            let dst = smooth(&src, filter, kernel_size)?;
            assert_eq!(dst.size(), src.size());
            assert_eq!(dst.shape(), [100, 100, 3]);
            assert_ne!(
                dst.as_slice(),
                src.as_slice(),
                "{filter} with kernel size {kernel_size} left the image unchanged"
            );
        }
    }
    Ok(())
}

#[test]
fn filters_do_not_mutate_source() -> Result<(), ImageError> {
    let src = random_image([31, 17].into(), 11)?;
    let original = src.clone();
    let mut dst = Image::from_size_val(src.size(), 0u8)?;

    box_filter(&src, &mut dst, 5)?;
    gaussian_filter(&src, &mut dst, 5)?;

    assert_eq!(src, original);
    Ok(())
}

#[test]
fn box_filter_keeps_constant_image() -> Result<(), ImageError> {
    for value in [0u8, 1, 77, 200, 255] {
        let src = Image::<u8, 3>::from_size_val([23, 13].into(), value)?;
        let mut dst = Image::from_size_val(src.size(), 0u8)?;
        for kernel_size in [3, 5, 7, 13] {
            box_filter(&src, &mut dst, kernel_size)?;
            // reflected borders only read image pixels, so edges stay constant as well
            assert!(
                dst.as_slice().iter().all(|&v| v == value),
                "value {value}, kernel size {kernel_size}"
            );
        }
    }
    Ok(())
}

#[test]
fn constant_padding_darkens_borders_only() -> Result<(), ImageError> {
    let src = Image::<u8, 3>::from_size_val([9, 9].into(), 90)?;
    let mut dst = Image::from_size_val(src.size(), 0u8)?;
    let kernel = kernels::box_kernel_2d(3)?;

    filter2d(
        &src,
        &mut dst,
        &kernel,
        PaddingMode::Constant,
        ExecutionStrategy::Serial,
    )?;

    // interior pixels see nine samples, edges six and corners four
    assert_eq!(dst.get([4, 4, 0]), Some(&90));
    assert_eq!(dst.get([0, 4, 1]), Some(&60));
    assert_eq!(dst.get([0, 0, 2]), Some(&40));
    Ok(())
}

#[test]
fn gaussian_filter_scales_constant_image() -> Result<(), ImageError> {
    let value = 100u8;
    let src = Image::<u8, 3>::from_size_val([15, 11].into(), value)?;
    let mut dst = Image::from_size_val(src.size(), 0u8)?;

    for (kernel_size, expected) in [(3, 78u8), (5, 98), (7, 100)] {
        gaussian_filter(&src, &mut dst, kernel_size)?;
        assert!(
            dst.as_slice().iter().all(|&v| v == expected),
            "kernel size {kernel_size}"
        );
    }
    Ok(())
}

#[test]
fn gaussian_weights_the_center_more() -> Result<(), ImageError> {
    // a single bright pixel spreads less under the gaussian than under the box
    let size = ImageSize {
        width: 7,
        height: 7,
    };
    let mut data = vec![0u8; 7 * 7 * 3];
    let center = (3 * 7 + 3) * 3;
    data[center..center + 3].copy_from_slice(&[255, 255, 255]);
    let src = Image::new(size, data)?;

    let boxed = smooth(&src, SmoothingFilter::Box, 3)?;
    let gauss = smooth(&src, SmoothingFilter::Gaussian, 3)?;

    assert_eq!(boxed.get([3, 3, 0]), Some(&28));
    assert_eq!(boxed.get([2, 2, 0]), Some(&28));
    // 255 / 2π and 255 * e^-1 / 2π
    assert_eq!(gauss.get([3, 3, 0]), Some(&41));
    assert_eq!(gauss.get([2, 2, 0]), Some(&15));
    assert_eq!(gauss.get([0, 0, 0]), Some(&0));
    Ok(())
}

#[test]
fn automatic_policy_matches_sizer() -> Result<(), ImageError> {
    let src = random_image([64, 48].into(), 3)?;
    let kernel_size = KernelSizePolicy::Automatic.kernel_size(&src);
    assert_eq!(kernel_size, compute_kernel_size(&src));
    assert_eq!(kernel_size, 3);

    let dst = smooth(&src, SmoothingFilter::Gaussian, kernel_size)?;
    assert_eq!(dst.size(), src.size());
    Ok(())
}

#[test]
fn tiny_images_reject_automatic_kernel() -> Result<(), ImageError> {
    let src = random_image([2, 2].into(), 5)?;
    let kernel_size = compute_kernel_size(&src);
    assert_eq!(kernel_size, 3);
    assert_eq!(
        smooth(&src, SmoothingFilter::Box, kernel_size),
        Err(ImageError::KernelLargerThanImage(3, 2, 2))
    );
    Ok(())
}

#[test]
fn large_automatic_kernels_match_direct_convolution() -> Result<(), ImageError> {
    let src = random_image([400, 300].into(), 13)?;
    let kernel_size = compute_kernel_size(&src);
    assert_eq!(kernel_size, 15);

    let cases = [
        (
            SmoothingFilter::Box,
            kernels::box_kernel_2d(kernel_size)?,
        ),
        (
            SmoothingFilter::Gaussian,
            kernels::gaussian_kernel_2d(kernel_size, GAUSSIAN_SIGMA)?,
        ),
    ];
    for (filter, kernel) in cases.iter() {
        let fast = smooth(&src, *filter, kernel_size)?;
        let mut direct = Image::from_size_val(src.size(), 0u8)?;
        filter2d(
            &src,
            &mut direct,
            kernel,
            DEFAULT_PADDING,
            ExecutionStrategy::ParallelRows,
        )?;

        let max_diff = fast
            .as_slice()
            .iter()
            .zip(direct.as_slice())
            .map(|(&a, &b)| a.abs_diff(b))
            .max();
        assert!(max_diff <= Some(1), "{filter}");
    }
    Ok(())
}

#[test]
fn separable_constant_padding_darkens_borders_only() -> Result<(), ImageError> {
    let src = Image::<u8, 3>::from_size_val([9, 9].into(), 90)?;
    let mut dst = Image::from_size_val(src.size(), 0u8)?;
    let kernel = kernels::box_kernel_1d(3);

    separable_filter(
        &src,
        &mut dst,
        &kernel,
        &kernel,
        PaddingMode::Constant,
        ExecutionStrategy::Serial,
    )?;

    assert_eq!(dst.get([4, 4, 0]), Some(&90));
    assert_eq!(dst.get([0, 4, 1]), Some(&60));
    assert_eq!(dst.get([0, 0, 2]), Some(&40));
    Ok(())
}
