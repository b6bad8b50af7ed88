//! Core normalization building blocks: trimming, square padding, resizing,
//! and the pipeline that chains them. These are internal primitives
//! consumed by the high-level `api` module.
pub mod params;
pub mod processing;
