/// An error type for the image and image processing modules.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ImageError {
    /// Error when the data length does not match the image size.
    #[error("Data length ({0}) does not match the image size ({1})")]
    InvalidChannelShape(usize, usize),

    /// Error when the image has a zero width or height.
    #[error("Image must have a non-zero size, got width {0} and height {1}")]
    ZeroSizedImage(usize, usize),

    /// Error when the number of channels does not match the image type.
    #[error("Invalid number of channels: got {0}, expected {1}")]
    InvalidNumChannels(usize, usize),

    /// Error when the source and destination image sizes differ.
    #[error("Source image size ({0}x{1}) does not match destination size ({2}x{3})")]
    InvalidImageSize(usize, usize, usize, usize),

    /// Error when the kernel size is even or below the allowed minimum.
    #[error("Invalid kernel size {0}: expected an odd value of at least 3")]
    InvalidKernelSize(usize),

    /// Error when the kernel side is larger than one of the image sides.
    #[error("Kernel size {0} is larger than the image ({1}x{2})")]
    KernelLargerThanImage(usize, usize, usize),

    /// Error when the kernel weights do not form a square of odd side.
    #[error("Kernel data length ({0}) does not match the kernel size ({1})")]
    InvalidKernelData(usize, usize),

    /// Error when the smoothing algorithm name is not recognized.
    #[error("Unknown smoothing algorithm: {0}")]
    UnknownFilter(String),

    /// Error when the kernel size policy name is not recognized.
    #[error("Unknown kernel size policy: {0}")]
    UnknownKernelPolicy(String),

    /// Error raised by the parallel execution backend.
    #[error("Parallel execution failed: {0}")]
    Parallel(String),
}
