use std::path::{Path, PathBuf};

use tracing::{info, warn};

use iconforge::api::{fit_preview, load_padded};
use iconforge::io::is_supported_image;
use iconforge::{
    ConversionParams, SUPPORTED_EXTENSIONS, convert_to_ico, default_output_dir, ensure_output_dir,
    output_path_for, process_directory_to_path, render_multi_preview,
};

use super::args::CliArgs;
use super::errors::AppError;

/// Preset first, then flags on top of it.
fn resolve_params(args: &CliArgs) -> Result<ConversionParams, AppError> {
    let mut params = match &args.preset {
        Some(path) => ConversionParams::from_json_file(path)?,
        None => ConversionParams::default(),
    };
    if args.remove_white {
        params.remove_white = true;
    }
    if let Some(tolerance) = args.tolerance {
        params.tolerance = tolerance;
    }
    Ok(params)
}

/// Writes `<base>_preview.png` and `<base>_<N>x<N>_preview.png` next to the icon.
fn write_previews(input: &Path, output_dir: &Path) -> Result<(), AppError> {
    let icon_path = output_path_for(input, output_dir)?;
    let stem = icon_path.with_extension("");

    let padded = load_padded(input)?;
    let preview = fit_preview(&padded)?;
    let preview_path = PathBuf::from(format!("{}_preview.png", stem.display()));
    preview
        .save(&preview_path)
        .map_err(iconforge::Error::from)?;
    info!("Preview written: {:?}", preview_path);

    for tile in render_multi_preview(&padded)? {
        let tile_path = PathBuf::from(format!("{}_{}_preview.png", stem.display(), tile.size));
        tile.image.save(&tile_path).map_err(iconforge::Error::from)?;
        info!("Preview written: {:?} ({})", tile_path, tile.label);
    }
    Ok(())
}

fn process_single_file(
    input: &Path,
    output_dir: &Path,
    params: &ConversionParams,
    previews: bool,
) -> Result<(), AppError> {
    if !is_supported_image(input) {
        return Err(AppError::UnsupportedInput {
            path: input.to_path_buf(),
            expected: SUPPORTED_EXTENSIONS.join(", "),
        });
    }

    ensure_output_dir(output_dir)?;
    if previews {
        write_previews(input, output_dir)?;
    }

    let report = convert_to_ico(input, output_dir, params)?;
    info!(
        "Successfully converted: {:?} -> {:?}",
        input, report.output_path
    );
    info!(
        "Included sizes: {}",
        report
            .sizes
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    );
    info!(
        "White→Transparent: {}",
        if report.white_removed {
            "Enabled"
        } else {
            "Disabled"
        }
    );
    println!("{}", report.output_path.display());
    Ok(())
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }

    let params = resolve_params(&args)?;
    let output_dir = match &args.output_dir {
        Some(dir) => dir.clone(),
        None => default_output_dir()?,
    };

    match (&args.input, &args.input_dir) {
        (Some(_), Some(_)) => Err(AppError::ConflictingArguments {
            first: "--input".to_string(),
            second: "--input-dir".to_string(),
        }
        .into()),
        (None, Some(input_dir)) => {
            info!("Starting batch conversion from directory: {:?}", input_dir);
            info!("Output directory: {:?}", output_dir);
            let report = process_directory_to_path(input_dir, &output_dir, &params, args.batch)
                .map_err(AppError::from)?;

            info!("Batch conversion complete!");
            info!("Processed: {}", report.processed);
            info!("Skipped: {}", report.skipped);
            info!("Errors: {}", report.errors);
            if report.errors > 0 {
                warn!("{} file(s) failed to convert", report.errors);
            }
            Ok(())
        }
        (Some(input), None) => Ok(process_single_file(
            input,
            &output_dir,
            &params,
            args.previews,
        )?),
        (None, None) => Err(AppError::MissingArgument {
            arg: "--input or --input-dir".to_string(),
        }
        .into()),
    }
}
