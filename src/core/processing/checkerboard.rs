use image::{Rgb, RgbImage, RgbaImage};

pub const DEFAULT_BLOCK: u32 = 8;

const LIGHT_GRAY: Rgb<u8> = Rgb([200, 200, 200]);
const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

/// Two-tone tiled background used to make transparency visible.
/// A `block` of 0 is treated as 1.
pub fn checkerboard(width: u32, height: u32, block: u32) -> RgbImage {
    let block = block.max(1);
    RgbImage::from_fn(width, height, |x, y| {
        if (x / block + y / block) % 2 == 0 {
            LIGHT_GRAY
        } else {
            WHITE
        }
    })
}

/// Pastes `image` onto a checkerboard of the same size, using its own alpha
/// channel as the mask.
pub fn composite_over_checkerboard(image: &RgbaImage, block: u32) -> RgbImage {
    let mut bg = checkerboard(image.width(), image.height(), block);
    for (dst, src) in bg.pixels_mut().zip(image.pixels()) {
        let alpha = src[3] as u32;
        for c in 0..3 {
            let blended = src[c] as u32 * alpha + dst[c] as u32 * (255 - alpha);
            dst[c] = ((blended + 127) / 255) as u8;
        }
    }
    bg
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn tiles_alternate_by_block() {
        let bg = checkerboard(32, 16, 8);
        assert_eq!(*bg.get_pixel(0, 0), LIGHT_GRAY);
        assert_eq!(*bg.get_pixel(7, 7), LIGHT_GRAY);
        assert_eq!(*bg.get_pixel(8, 0), WHITE);
        assert_eq!(*bg.get_pixel(0, 8), WHITE);
        assert_eq!(*bg.get_pixel(8, 8), LIGHT_GRAY);
        assert_eq!(*bg.get_pixel(31, 15), LIGHT_GRAY);
    }

    #[test]
    fn zero_block_behaves_like_single_pixel_tiles() {
        let bg = checkerboard(2, 2, 0);
        assert_eq!(*bg.get_pixel(0, 0), LIGHT_GRAY);
        assert_eq!(*bg.get_pixel(1, 0), WHITE);
        assert_eq!(*bg.get_pixel(1, 1), LIGHT_GRAY);
    }

    #[test]
    fn composite_respects_alpha_mask() {
        let mut img = RgbaImage::new(16, 1);
        img.put_pixel(0, 0, Rgba([255, 0, 0, 255]));
        img.put_pixel(1, 0, Rgba([255, 0, 0, 0]));
        img.put_pixel(8, 0, Rgba([0, 0, 0, 0]));

        let out = composite_over_checkerboard(&img, DEFAULT_BLOCK);
        assert_eq!(out.dimensions(), (16, 1));
        assert_eq!(*out.get_pixel(0, 0), Rgb([255, 0, 0]));
        assert_eq!(*out.get_pixel(1, 0), LIGHT_GRAY);
        assert_eq!(*out.get_pixel(8, 0), WHITE);
    }

    #[test]
    fn half_alpha_blends_toward_background() {
        let img = RgbaImage::from_pixel(1, 1, Rgba([0, 0, 0, 128]));
        let out = composite_over_checkerboard(&img, DEFAULT_BLOCK);
        // 200 * 127 / 255 ≈ 99.6
        assert_eq!(*out.get_pixel(0, 0), Rgb([100, 100, 100]));
    }
}
