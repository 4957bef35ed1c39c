use image::RgbaImage;
use std::path::Path;
use tracing::{debug, info};

use crate::error::Result;

/// Raster extensions accepted by the file picker and batch mode.
pub const SUPPORTED_EXTENSIONS: [&str; 6] = ["png", "jpg", "jpeg", "bmp", "gif", "tiff"];

/// True when `path` carries one of [`SUPPORTED_EXTENSIONS`] (case-insensitive).
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
        .unwrap_or(false)
}

/// Decodes any raster the `image` crate understands and converts it to RGBA8.
/// Format detection uses file content, so a mislabeled extension still loads.
pub fn open_rgba(path: &Path) -> Result<RgbaImage> {
    debug!("Opening source image: {:?}", path);
    let img = image::ImageReader::open(path)?
        .with_guessed_format()?
        .decode()?;
    info!(
        "Loaded {:?}: {}x{} ({:?})",
        path,
        img.width(),
        img.height(),
        img.color()
    );
    Ok(img.to_rgba8())
}
