use image::RgbaImage;
use tracing::{debug, info};

use crate::core::params::ConversionParams;
use crate::core::processing::colorkey::key_white_to_transparent;
use crate::core::processing::padding::pad_to_square;
use crate::core::processing::resize::resize_rgba;
use crate::error::{Error, Result};
use crate::types::{Dimensions, ICON_SIZES, IconSize};

/// One square frame of an icon container.
#[derive(Debug, Clone)]
pub struct IconFrame {
    pub size: IconSize,
    pub image: RgbaImage,
}

/// Source image after keying and padding, ready for resampling.
#[derive(Debug, Clone)]
pub struct PreparedSource {
    pub image: RgbaImage,
    pub source_dimensions: Dimensions,
    pub keyed_pixels: usize,
}

/// Applies optional white keying, then pads to square.
/// Keying runs before padding so the transparent border is never re-examined.
pub fn prepare_source(mut image: RgbaImage, params: &ConversionParams) -> PreparedSource {
    let source_dimensions = Dimensions::new(image.width(), image.height());
    let keyed_pixels = if params.remove_white {
        key_white_to_transparent(&mut image, params.tolerance)
    } else {
        0
    };
    let image = pad_to_square(image);
    debug!(
        "Prepared source: {} -> {}x{}",
        source_dimensions,
        image.width(),
        image.height()
    );
    PreparedSource {
        image,
        source_dimensions,
        keyed_pixels,
    }
}

/// Resamples every entry of [`ICON_SIZES`] independently from `source`.
pub fn build_icon_frames(source: &RgbaImage) -> Result<Vec<IconFrame>> {
    let (width, height) = source.dimensions();
    if width != height {
        return Err(Error::Processing(format!(
            "icon source must be square, got {}x{}",
            width, height
        )));
    }

    let mut frames = Vec::with_capacity(ICON_SIZES.len());
    for size in ICON_SIZES {
        let image = resize_rgba(source, size.dimensions())?;
        info!("Resampled {}x{} -> {}", width, height, size);
        frames.push(IconFrame { size, image });
    }
    Ok(frames)
}
