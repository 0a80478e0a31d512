#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

#[doc(inline)]
pub use smoothing_image as image;

#[doc(inline)]
pub use smoothing_imgproc as imgproc;

#[doc(inline)]
pub use smoothing_io as io;
