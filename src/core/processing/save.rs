use image::RgbaImage;
use std::path::Path;
use tracing::info;

use crate::core::processing::pipeline::build_icon_frames;
use crate::error::Result;
use crate::io::writers::ico::write_ico;
use crate::types::IconSize;

/// Resamples a padded square source to every icon size and writes the
/// container to `output`. Returns the sizes written, smallest first.
pub fn save_icon(source: &RgbaImage, output: &Path) -> Result<Vec<IconSize>> {
    let frames = build_icon_frames(source)?;
    write_ico(&frames, output)?;
    info!("Wrote {} frames to {:?}", frames.len(), output);
    Ok(frames.iter().map(|f| f.size).collect())
}
