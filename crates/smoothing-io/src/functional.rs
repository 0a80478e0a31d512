use std::path::Path;

use smoothing_image::{Image, ImageSize};

use crate::error::IoError;

/// Reads an image from the given file path as 8-bit RGB.
///
/// The method tries to read from any image format supported by the image crate,
/// guessing the format from the file content. Grayscale inputs are expanded to
/// three channels and alpha channels are dropped, so the returned buffer is always
/// in RGB order.
///
/// # Arguments
///
/// * `file_path` - The path to a valid image file.
///
/// # Returns
///
/// An RGB image with three channels (rgb8).
pub fn read_image_any_rgb8(file_path: impl AsRef<Path>) -> Result<Image<u8, 3>, IoError> {
    let file_path = file_path.as_ref().to_owned();

    // verify the file exists
    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path));
    }

    let bytes = std::fs::read(&file_path)?;
    decode_image_any_rgb8(&bytes)
}

/// Decodes an encoded image held in memory as 8-bit RGB.
///
/// # Arguments
///
/// * `bytes` - The encoded image, in any format supported by the image crate.
pub fn decode_image_any_rgb8(bytes: &[u8]) -> Result<Image<u8, 3>, IoError> {
    let img = image::ImageReader::new(std::io::Cursor::new(bytes))
        .with_guessed_format()?
        .decode()?;

    log::debug!(
        "decoded {}x{} image with color type {:?}",
        img.width(),
        img.height(),
        img.color()
    );

    let size = ImageSize {
        width: img.width() as usize,
        height: img.height() as usize,
    };

    Ok(Image::new(size, img.into_rgb8().into_raw())?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_missing_file() {
        let res = read_image_any_rgb8("does/not/exist.png");
        assert!(matches!(res, Err(IoError::FileDoesNotExist(_))));
    }

    #[test]
    fn decode_gray_as_rgb() -> Result<(), IoError> {
        let gray = image::GrayImage::from_raw(2, 1, vec![10, 200])
            .ok_or_else(|| IoError::PngEncodingError("invalid buffer".to_string()))?;
        let mut bytes = Vec::new();
        gray.write_to(
            &mut std::io::Cursor::new(&mut bytes),
            image::ImageFormat::Png,
        )?;

        let image = decode_image_any_rgb8(&bytes)?;
        assert_eq!(image.size(), [2, 1].into());
        assert_eq!(image.as_slice(), &[10, 10, 10, 200, 200, 200]);
        Ok(())
    }

    #[test]
    fn decode_garbage_fails() {
        let res = decode_image_any_rgb8(&[0u8, 1, 2, 3]);
        assert!(matches!(res, Err(IoError::ImageDecodeError(_))));
    }
}
