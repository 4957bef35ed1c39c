#![doc = r#"
ICONFORGE: turn a single raster image into a multi-resolution Windows icon.

This crate loads a PNG, JPEG, BMP, GIF or TIFF image, optionally makes near-white
pixels transparent, pads it to a square with a transparent border, resamples it
with a Lanczos3 filter to 16, 32, 48, 64, 128 and 256 pixels, and packs all six
frames into one `.ico` file. It powers both the `iconforge` CLI and the
`iconforgeUI` GUI, and can be embedded in your own Rust applications.

Add dependency
--------------
```toml
[dependencies]
iconforge = { version = "0.1", default-features = false }
```

Quick start: convert a file
---------------------------
```rust,no_run
use std::path::Path;
use iconforge::{convert_to_ico, ensure_output_dir, ConversionParams};

fn main() -> iconforge::Result<()> {
    let params = ConversionParams {
        remove_white: true,
        tolerance: 10,
    };
    let out = Path::new("output");
    ensure_output_dir(out)?;

    let report = convert_to_ico(Path::new("logo.png"), out, &params)?;
    println!("wrote {:?} with {} frames", report.output_path, report.sizes.len());
    Ok(())
}
```

In-memory frames
----------------
```rust,no_run
use std::path::Path;
use iconforge::{convert_to_frames, ConversionParams};

fn main() -> iconforge::Result<()> {
    let icon = convert_to_frames(Path::new("logo.png"), &ConversionParams::default())?;
    for frame in &icon.frames {
        println!("{} -> {} bytes", frame.size, frame.image.as_raw().len());
    }
    Ok(())
}
```

Interactive flow
----------------
Implement [`session::Presenter`] for your UI toolkit and hand it to
[`session::run_session`]; every presenter call blocks until the user has
acknowledged it.

Error handling
--------------
All public functions return `iconforge::Result<T>`; use [`Error::kind`] to branch
on the failure class.

```rust,no_run
use std::path::Path;
use iconforge::{convert_to_ico, ConversionParams, ErrorKind};

fn main() {
    match convert_to_ico(Path::new("missing.png"), Path::new("output"), &ConversionParams::default()) {
        Ok(report) => println!("{:?}", report.output_path),
        Err(e) if e.kind() == ErrorKind::Decode => eprintln!("not an image: {e}"),
        Err(e) => eprintln!("failed: {e}"),
    }
}
```

Feature flags
-------------
- `gui`: builds the eframe GUI module and the `iconforgeUI` binary.
- `full`: enables a complete feature set.

Useful modules
--------------
- [`api`]: high-level, ergonomic entry points.
- [`session`]: toolkit-independent interactive flow.
- [`core`]: padding, keying, checkerboard, resampling primitives.
- [`io`]: source loading and the ICO writer.
- [`error`]: crate-level `Error`, `ErrorKind` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod session;
pub mod types;

// GUI module (only available with gui feature)
#[cfg(feature = "gui")]
pub mod gui;

// Curated public API surface
// Types
pub use crate::core::params::ConversionParams;
pub use crate::core::processing::pipeline::IconFrame;
pub use error::{Error, ErrorKind, Result};
pub use types::{Dimensions, ICON_SIZES, IconSize};

// Primitives
pub use crate::core::processing::checkerboard::{checkerboard, composite_over_checkerboard};
pub use crate::core::processing::colorkey::{DEFAULT_TOLERANCE, key_white_to_transparent};
pub use crate::core::processing::padding::pad_to_square;
pub use crate::core::processing::resize::resize_rgba;
pub use crate::io::source::{SUPPORTED_EXTENSIONS, open_rgba};

// High-level API re-exports
pub use api::{
    BatchReport, ConversionReport, IconFrames, PreviewTile, convert_to_frames, convert_to_ico,
    default_output_dir, ensure_output_dir, output_path_for, process_directory_to_path,
    render_multi_preview, render_preview,
};
pub use session::{Presenter, SessionOutcome, run_session};
