//! I/O layer for turning encoded image payloads into intensity matrices.
//! Provides the `payload` decoder for data-URL strings and raw image bytes.
pub mod payload;
pub use payload::{DecodeError, matrix_from_data_url, matrix_from_image_bytes};
