use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid bind address: {addr}")]
    InvalidBindAddress { addr: String },

    #[error("{arg} must be greater than 0")]
    ZeroSize { arg: &'static str },

    #[error("This binary was built without the 'onnx' feature; no classifier is available")]
    OnnxSupportMissing,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
