//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Converts underlying I/O, image codec, resampler and preset errors, and exposes
//! an [`ErrorKind`] so callers can branch on the failure class without parsing
//! messages.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Resize error: {0}")]
    Resize(#[from] fast_image_resize::ResizeError),

    #[error("Image buffer error: {0}")]
    ImageBuffer(#[from] fast_image_resize::ImageBufferError),

    #[error("Invalid argument: {arg}={value}")]
    InvalidInput { arg: &'static str, value: String },

    #[error("Icon frames must be square and one of 16/32/48/64/128/256, got: {width}x{height}")]
    UnsupportedSize { width: u32, height: u32 },

    #[error("Invalid preset: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Processing error: {0}")]
    Processing(String),
}

/// Coarse failure class of an [`Error`].
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum ErrorKind {
    Io,
    Decode,
    Encode,
    Resize,
    InvalidInput,
    Processing,
    Config,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ErrorKind::Io => "io",
            ErrorKind::Decode => "decode",
            ErrorKind::Encode => "encode",
            ErrorKind::Resize => "resize",
            ErrorKind::InvalidInput => "invalid-input",
            ErrorKind::Processing => "processing",
            ErrorKind::Config => "config",
        };
        write!(f, "{}", s)
    }
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Io(_) => ErrorKind::Io,
            Error::Image(e) => match e {
                image::ImageError::IoError(_) => ErrorKind::Io,
                image::ImageError::Encoding(_) => ErrorKind::Encode,
                image::ImageError::Parameter(_) | image::ImageError::Limits(_) => {
                    ErrorKind::Processing
                }
                _ => ErrorKind::Decode,
            },
            Error::Resize(_) | Error::ImageBuffer(_) => ErrorKind::Resize,
            Error::InvalidInput { .. } => ErrorKind::InvalidInput,
            Error::UnsupportedSize { .. } | Error::Processing(_) => ErrorKind::Processing,
            Error::Config(_) => ErrorKind::Config,
        }
    }

    pub fn processing<E: std::fmt::Display>(e: E) -> Self {
        Error::Processing(e.to_string())
    }
}
