use crate::error::Result;
use crate::types::Dimensions;
use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer, images::Image};
use image::RgbaImage;
use tracing::{debug, warn};

/// Scales `original` so its long side equals `target_size`, keeping the aspect
/// ratio. Images already smaller than `target_size` keep their dimensions.
pub fn calculate_resize_dimensions(original: Dimensions, target_size: u32) -> Dimensions {
    let (original_cols, original_rows) = (original.width, original.height);
    let short_side = original_rows.min(original_cols);
    let long_side = original_rows.max(original_cols);

    if target_size >= long_side {
        if target_size > long_side {
            debug!(
                "Target size {} is larger than original long side {}. Keeping original dimensions {}",
                target_size, long_side, original
            );
        }
        return original;
    }

    let scale_factor = target_size as f64 / long_side as f64;
    let new_short_side = ((short_side as f64 * scale_factor).round() as u32).max(1);

    if original_cols > original_rows {
        Dimensions::new(target_size, new_short_side)
    } else {
        Dimensions::new(new_short_side, target_size)
    }
}

/// Lanczos3 resample of an RGBA image. The resizer premultiplies alpha before
/// filtering, so transparent pixels do not bleed colour into their neighbours.
pub fn resize_rgba(image: &RgbaImage, target: Dimensions) -> Result<RgbaImage> {
    let (original_cols, original_rows) = image.dimensions();
    if (original_cols, original_rows) == (target.width, target.height) {
        return Ok(image.clone());
    }
    if target.width == 0 || target.height == 0 || original_cols == 0 || original_rows == 0 {
        warn!(
            "Cannot resize {}x{} to {}",
            original_cols, original_rows, target
        );
        return Err(crate::error::Error::InvalidInput {
            arg: "size",
            value: target.to_string(),
        });
    }

    let resize_options =
        ResizeOptions::new().resize_alg(ResizeAlg::Convolution(FilterType::Lanczos3));
    let mut resizer = Resizer::new();

    let src_image = Image::from_vec_u8(
        original_cols,
        original_rows,
        image.as_raw().to_vec(),
        PixelType::U8x4,
    )?;
    let mut dst_image = Image::new(target.width, target.height, PixelType::U8x4);
    resizer.resize(&src_image, &mut dst_image, &resize_options)?;

    RgbaImage::from_raw(target.width, target.height, dst_image.into_vec()).ok_or_else(|| {
        crate::error::Error::Processing(format!("resized buffer does not match {}", target))
    })
}

/// Downscales `image` to fit inside a `box_size` square; never upscales.
pub fn fit_within(image: &RgbaImage, box_size: u32) -> Result<RgbaImage> {
    let original = Dimensions::new(image.width(), image.height());
    let target = calculate_resize_dimensions(original, box_size);
    debug!("Fitting {} into {}px box: {}", original, box_size, target);
    resize_rgba(image, target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn dimensions_keep_aspect_ratio() {
        assert_eq!(
            calculate_resize_dimensions(Dimensions::new(600, 300), 300),
            Dimensions::new(300, 150)
        );
        assert_eq!(
            calculate_resize_dimensions(Dimensions::new(300, 900), 300),
            Dimensions::new(100, 300)
        );
    }

    #[test]
    fn small_images_are_never_upscaled() {
        let small = Dimensions::new(120, 80);
        assert_eq!(calculate_resize_dimensions(small, 300), small);
    }

    #[test]
    fn resize_preserves_transparent_and_opaque_regions() {
        let img = RgbaImage::from_fn(64, 64, |x, _| {
            if x < 32 {
                Rgba([0, 0, 255, 255])
            } else {
                Rgba([0, 0, 0, 0])
            }
        });
        let out = resize_rgba(&img, Dimensions::square(16)).unwrap();

        assert_eq!(out.dimensions(), (16, 16));
        let left = out.get_pixel(2, 8);
        assert!(left[3] > 250, "left alpha {:?}", left);
        assert!(left[2] > 250, "left blue {:?}", left);
        assert!(out.get_pixel(13, 8)[3] < 5);
    }

    #[test]
    fn same_size_resize_is_a_copy() {
        let img = RgbaImage::from_pixel(5, 5, Rgba([1, 2, 3, 4]));
        assert_eq!(resize_rgba(&img, Dimensions::square(5)).unwrap(), img);
    }

    #[test]
    fn zero_target_is_rejected() {
        let img = RgbaImage::from_pixel(5, 5, Rgba([1, 2, 3, 4]));
        assert!(resize_rgba(&img, Dimensions::new(0, 5)).is_err());
    }

    #[test]
    fn fit_within_bounds_long_side() {
        let img = RgbaImage::new(1000, 1000);
        assert_eq!(fit_within(&img, 300).unwrap().dimensions(), (300, 300));
        let tiny = RgbaImage::new(40, 40);
        assert_eq!(fit_within(&tiny, 300).unwrap().dimensions(), (40, 40));
    }
}
