//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Converts the payload decoder's errors and provides semantic variants for
//! blank input, pipeline invariant violations, and inference failures.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Payload decode error: {0}")]
    Decode(#[from] crate::io::DecodeError),

    #[error("No foreground pixels found; the image is blank")]
    EmptyImage,

    #[error("Resampling produced {rows}x{cols}, exceeding the {target_rows}x{target_cols} target")]
    Oversize {
        rows: usize,
        cols: usize,
        target_rows: usize,
        target_cols: usize,
    },

    #[error("Invalid argument: {arg}={value}")]
    InvalidArgument { arg: &'static str, value: String },

    #[error("Inference error: {0}")]
    Inference(String),

    #[error("Processing error: {0}")]
    Processing(String),
}

impl Error {
    pub fn inference<E: std::fmt::Display>(e: E) -> Self {
        Error::Inference(e.to_string())
    }

    /// True for failures caused by the client's input rather than this service.
    pub fn is_client_input(&self) -> bool {
        matches!(self, Error::Decode(_) | Error::EmptyImage)
    }
}
