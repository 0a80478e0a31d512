use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use smoothing_image::Image;

use crate::error::IoError;

/// Writes the given RGB image to a PNG file.
///
/// # Arguments
///
/// * `file_path` - The path to the PNG image.
/// * `image` - The image with three channels (rgb8).
pub fn write_image_png_rgb8(
    file_path: impl AsRef<Path>,
    image: &Image<u8, 3>,
) -> Result<(), IoError> {
    image::save_buffer_with_format(
        file_path.as_ref(),
        image.as_slice(),
        image.width() as u32,
        image.height() as u32,
        image::ExtendedColorType::Rgb8,
        image::ImageFormat::Png,
    )
    .map_err(|e| IoError::PngEncodingError(e.to_string()))?;

    log::debug!("wrote {} to {}", image.size(), file_path.as_ref().display());

    Ok(())
}

static NAME_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Returns a fresh PNG file name for a processed image, `{unique}_{stem}.png`.
///
/// The unique prefix combines the current time in nanoseconds with a process-wide
/// counter, so two calls never return the same name within a process.
pub fn processed_file_name(stem: &str) -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default();
    let count = NAME_COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("{nanos:x}{count:04x}_{stem}.png")
}
