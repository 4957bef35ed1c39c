//! High-level, ergonomic library API: convert a raster to an `.ico` on disk or
//! to in-memory frames, render the previews shown before conversion, and batch
//! helpers for directories. Prefer these entrypoints over the low-level
//! processing modules when integrating ICONFORGE.
use std::path::{Path, PathBuf};

use image::{RgbImage, RgbaImage};
use tracing::{debug, info, warn};

use crate::core::params::ConversionParams;
use crate::core::processing::checkerboard::{DEFAULT_BLOCK, composite_over_checkerboard};
use crate::core::processing::padding::pad_to_square;
use crate::core::processing::pipeline::{IconFrame, build_icon_frames, prepare_source};
use crate::core::processing::resize::{fit_within, resize_rgba};
use crate::core::processing::save::save_icon;
use crate::error::{Error, Result};
use crate::io::source::{is_supported_image, open_rgba};
use crate::types::{Dimensions, ICON_SIZES, IconSize};

/// Bounding box, in pixels, of the single-image preview.
pub const PREVIEW_BOX: u32 = 300;

/// Name of the directory, under the working directory, icons land in by default.
pub const DEFAULT_OUTPUT_DIR_NAME: &str = "output";

/// Outcome of a successful conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionReport {
    pub source: PathBuf,
    pub output_path: PathBuf,
    pub sizes: Vec<IconSize>,
    pub white_removed: bool,
    pub tolerance: u8,
    pub keyed_pixels: usize,
    pub source_dimensions: Dimensions,
}

/// Result of in-memory conversion (no disk I/O)
#[derive(Debug, Clone)]
pub struct IconFrames {
    pub base_name: String,
    pub source_dimensions: Dimensions,
    pub keyed_pixels: usize,
    pub frames: Vec<IconFrame>,
}

/// One cell of the multi-size preview: the resized icon over a checkerboard.
#[derive(Debug, Clone)]
pub struct PreviewTile {
    pub size: IconSize,
    pub label: String,
    pub image: RgbImage,
}

/// `<cwd>/output`, resolved once by the front ends and passed down explicitly.
pub fn default_output_dir() -> Result<PathBuf> {
    Ok(std::env::current_dir()?.join(DEFAULT_OUTPUT_DIR_NAME))
}

pub fn ensure_output_dir(output_dir: &Path) -> Result<()> {
    if !output_dir.exists() {
        debug!("Creating output directory {:?}", output_dir);
    }
    std::fs::create_dir_all(output_dir)?;
    Ok(())
}

fn base_name(source: &Path) -> Result<String> {
    source
        .file_stem()
        .and_then(|s| s.to_str())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .ok_or_else(|| Error::InvalidInput {
            arg: "source",
            value: source.display().to_string(),
        })
}

/// `<output_dir>/<source file stem>.ico`
pub fn output_path_for(source: &Path, output_dir: &Path) -> Result<PathBuf> {
    Ok(output_dir.join(format!("{}.ico", base_name(source)?)))
}

/// Open, optionally key, pad and resample `source` into icon frames in memory
pub fn convert_to_frames(source: &Path, params: &ConversionParams) -> Result<IconFrames> {
    let base_name = base_name(source)?;
    let prepared = prepare_source(open_rgba(source)?, params);
    let frames = build_icon_frames(&prepared.image)?;
    Ok(IconFrames {
        base_name,
        source_dimensions: prepared.source_dimensions,
        keyed_pixels: prepared.keyed_pixels,
        frames,
    })
}

/// Convert `source` into `<output_dir>/<base>.ico`.
///
/// Every failure along open/key/pad/resample/write comes back as an [`Error`];
/// a partially written file is left in place.
pub fn convert_to_ico(
    source: &Path,
    output_dir: &Path,
    params: &ConversionParams,
) -> Result<ConversionReport> {
    let output_path = output_path_for(source, output_dir)?;
    info!("Converting {:?} -> {:?}", source, output_path);
    debug!(
        "White removal: {}, tolerance: {}",
        params.remove_white, params.tolerance
    );

    let prepared = prepare_source(open_rgba(source)?, params);
    let sizes = save_icon(&prepared.image, &output_path)?;

    Ok(ConversionReport {
        source: source.to_path_buf(),
        output_path,
        sizes,
        white_removed: params.remove_white,
        tolerance: params.tolerance,
        keyed_pixels: prepared.keyed_pixels,
        source_dimensions: prepared.source_dimensions,
    })
}

/// Opens `source` and pads it to a square, without keying.
pub fn load_padded(source: &Path) -> Result<RgbaImage> {
    Ok(pad_to_square(open_rgba(source)?))
}

/// Padded source scaled down to fit the [`PREVIEW_BOX`]
pub fn render_preview(source: &Path) -> Result<RgbaImage> {
    fit_preview(&load_padded(source)?)
}

pub fn fit_preview(padded: &RgbaImage) -> Result<RgbaImage> {
    fit_within(padded, PREVIEW_BOX)
}

/// One checkerboard-backed tile per icon size, smallest first
pub fn render_multi_preview(padded: &RgbaImage) -> Result<Vec<PreviewTile>> {
    ICON_SIZES
        .iter()
        .map(|&size| {
            let resized = resize_rgba(padded, size.dimensions())?;
            Ok(PreviewTile {
                size,
                label: size.label(),
                image: composite_over_checkerboard(&resized, DEFAULT_BLOCK),
            })
        })
        .collect()
}

/// Batch processing report
#[derive(Debug, Clone, Copy, Default)]
pub struct BatchReport {
    pub processed: usize,
    pub skipped: usize,
    pub errors: usize,
}

/// Convert every supported image in `input_dir` into `output_dir`.
/// If `continue_on_error` is true, errors are counted in the report and processing continues; otherwise, the first error is returned.
pub fn process_directory_to_path(
    input_dir: &Path,
    output_dir: &Path,
    params: &ConversionParams,
    continue_on_error: bool,
) -> Result<BatchReport> {
    ensure_output_dir(output_dir)?;

    let mut report = BatchReport::default();
    let mut sources = Vec::new();
    for entry in std::fs::read_dir(input_dir)? {
        let path = entry?.path();
        if path.is_file() && is_supported_image(&path) {
            sources.push(path);
        } else {
            debug!("Skipping {:?}", path);
            report.skipped += 1;
        }
    }
    sources.sort();

    for path in sources {
        match convert_to_ico(&path, output_dir, params) {
            Ok(converted) => {
                info!("Converted {:?} -> {:?}", path, converted.output_path);
                report.processed += 1;
            }
            Err(e) => {
                warn!("Error converting {:?}: {}", path, e);
                report.errors += 1;
                if !continue_on_error {
                    return Err(e);
                }
            }
        }
    }

    Ok(report)
}
