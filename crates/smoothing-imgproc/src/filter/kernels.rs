use smoothing_image::ImageError;

/// A square 2D kernel of odd side, stored row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct Kernel2d {
    size: usize,
    data: Vec<f32>,
}

impl Kernel2d {
    /// Create a kernel from its side length and row-major weights.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::InvalidKernelSize`] if `size` is zero or even, and
    /// [`ImageError::InvalidKernelData`] if `data` does not hold `size * size` weights.
    pub fn new(size: usize, data: Vec<f32>) -> Result<Self, ImageError> {
        if size == 0 || size % 2 == 0 {
            return Err(ImageError::InvalidKernelSize(size));
        }
        if data.len() != size * size {
            return Err(ImageError::InvalidKernelData(data.len(), size * size));
        }
        Ok(Self { size, data })
    }

    /// The side length of the kernel.
    pub fn size(&self) -> usize {
        self.size
    }

    /// The weights in row-major order.
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// The weight at `row`, `col`, or `None` if out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<f32> {
        if row >= self.size || col >= self.size {
            return None;
        }
        self.data.get(row * self.size + col).copied()
    }

    /// The sum of all weights.
    pub fn sum(&self) -> f32 {
        self.data.iter().sum()
    }
}

/// Create a box blur kernel.
///
/// Every weight equals `1 / (kernel_size * kernel_size)`, so the weights sum to one.
///
/// # Arguments
///
/// * `kernel_size` - The side of the kernel, must be odd.
pub fn box_kernel_2d(kernel_size: usize) -> Result<Kernel2d, ImageError> {
    let weight = 1.0 / (kernel_size * kernel_size) as f32;
    Kernel2d::new(kernel_size, vec![weight; kernel_size * kernel_size])
}

/// Create a gaussian kernel sampled on the integer grid.
///
/// The weight at offset `(x, y)` from the center is
/// `exp(-(x² + y²) / (2σ²)) / (2πσ²)`, for `x, y` in `-k/2..=k/2`.
///
/// NOTE: the weights are the sampled density and are not rescaled to sum to one,
/// so the kernel sum is below one for small sizes (≈0.78 for 3x3 with σ = 1).
///
/// # Arguments
///
/// * `kernel_size` - The side of the kernel, must be odd.
/// * `sigma` - The standard deviation of the gaussian, shared by both axes.
pub fn gaussian_kernel_2d(kernel_size: usize, sigma: f32) -> Result<Kernel2d, ImageError> {
    let half = (kernel_size / 2) as isize;
    let two_sigma_sq = 2.0 * sigma * sigma;
    let norm = 1.0 / (std::f32::consts::PI * two_sigma_sq);

    let mut data = Vec::with_capacity(kernel_size * kernel_size);
    for y in -half..=half {
        for x in -half..=half {
            let dist_sq = (x * x + y * y) as f32;
            data.push((-dist_sq / two_sigma_sq).exp() * norm);
        }
    }

    Kernel2d::new(kernel_size, data)
}

/// Create a 1D box blur kernel of `kernel_size` weights equal to `1 / kernel_size`.
///
/// The outer product of two such kernels is [`box_kernel_2d`].
pub fn box_kernel_1d(kernel_size: usize) -> Vec<f32> {
    vec![1.0 / kernel_size as f32; kernel_size]
}

/// Create a 1D gaussian kernel sampled on the integer grid.
///
/// The weight at offset `x` from the center is `exp(-x² / (2σ²)) / (√(2π) σ)`. The
/// outer product of two such kernels is [`gaussian_kernel_2d`], including its
/// missing normalization.
///
/// # Arguments
///
/// * `kernel_size` - The size of the kernel, must be odd.
/// * `sigma` - The standard deviation of the gaussian.
pub fn gaussian_kernel_1d(kernel_size: usize, sigma: f32) -> Vec<f32> {
    let half = (kernel_size / 2) as isize;
    let two_sigma_sq = 2.0 * sigma * sigma;
    let norm = 1.0 / ((2.0 * std::f32::consts::PI).sqrt() * sigma);

    (-half..=half)
        .map(|x| (-((x * x) as f32) / two_sigma_sq).exp() * norm)
        .collect()
}
