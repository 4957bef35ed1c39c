use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "iconforge", version, about = "ICONFORGE CLI")]
pub struct CliArgs {
    /// Input image (single file mode): png, jpg, jpeg, bmp, gif or tiff
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Input directory whose images are all converted (batch mode)
    #[arg(long)]
    pub input_dir: Option<PathBuf>,

    /// Directory the .ico files are written to [default: ./output]
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Make white and near-white pixels transparent before padding
    #[arg(long, default_value_t = false)]
    pub remove_white: bool,

    /// Per-channel distance from 255 still treated as white (0-255)
    #[arg(short, long)]
    pub tolerance: Option<u8>,

    /// JSON preset with `remove_white` / `tolerance`; flags override it
    #[arg(long)]
    pub preset: Option<PathBuf>,

    /// Also write the preview and per-size checkerboard previews as PNG (single file mode)
    #[arg(long, default_value_t = false)]
    pub previews: bool,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,

    /// Batch mode: continue with the remaining files when one fails
    #[arg(long, default_value_t = false)]
    pub batch: bool,
}
