use std::path::PathBuf;
use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Missing required argument: {arg}")]
    MissingArgument { arg: String },

    #[error("Conflicting arguments: {first} and {second} cannot be used together")]
    ConflictingArguments { first: String, second: String },

    #[error("Unsupported input file: {path:?}. Expected one of: {expected}")]
    UnsupportedInput { path: PathBuf, expected: String },

    #[error("Conversion error ({kind}): {source}")]
    Conversion {
        kind: iconforge::ErrorKind,
        #[source]
        source: iconforge::Error,
    },
}

impl From<iconforge::Error> for AppError {
    fn from(source: iconforge::Error) -> Self {
        AppError::Conversion {
            kind: source.kind(),
            source,
        }
    }
}
