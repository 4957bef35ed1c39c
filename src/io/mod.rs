//! I/O layer for reading source rasters and writing icon containers.
//! Provides the `source` loader and `writers` for ICO output.
pub mod source;
pub use source::{SUPPORTED_EXTENSIONS, is_supported_image, open_rgba};

pub mod writers;
