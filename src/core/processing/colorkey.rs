use image::RgbaImage;
use tracing::debug;

/// Default per-channel distance from pure white still treated as white.
pub const DEFAULT_TOLERANCE: u8 = 10;

/// True when every colour channel is at least `255 - tolerance`.
#[inline]
pub fn is_near_white(rgb: [u8; 3], tolerance: u8) -> bool {
    let floor = 255 - tolerance;
    rgb.iter().all(|&c| c >= floor)
}

/// Makes near-white pixels fully transparent in place, leaving their colour
/// channels alone. Returns the number of keyed pixels.
pub fn key_white_to_transparent(image: &mut RgbaImage, tolerance: u8) -> usize {
    let mut keyed = 0;
    for pixel in image.pixels_mut() {
        let [r, g, b, _] = pixel.0;
        if is_near_white([r, g, b], tolerance) {
            pixel.0[3] = 0;
            keyed += 1;
        }
    }
    debug!(
        "Colour keying: tolerance={}, keyed {} of {} pixels",
        tolerance,
        keyed,
        image.width() as usize * image.height() as usize
    );
    keyed
}
