//! Shared types and enums used across digitd.
//! Includes `ModelFamily` (how the normalized matrix is laid out for the
//! model) and the `Prediction` wire type returned to callers.
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Input layout expected by the classifier's model family.
///
/// `Mlp` flattens the normalized matrix to a single `[1, H*W]` row;
/// `Cnn` keeps the spatial axes and appends a trailing channel axis
/// (`[1, H, W, 1]`, NHWC).
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
pub enum ModelFamily {
    Mlp,
    Cnn,
}

impl std::fmt::Display for ModelFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ModelFamily::Mlp => "Mlp",
            ModelFamily::Cnn => "Cnn",
        };
        write!(f, "{}", s)
    }
}

/// A single ranked classification result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub class: usize,
    pub prob: f32,
}
