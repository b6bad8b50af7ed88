//! Command Line Interface (CLI) layer for digitd.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) for the serve and single-file
//! flows. It wires user-provided options to the underlying library
//! functionality exposed via `digitd::api` and `digitd::server`.
//!
//! If you are embedding digitd into another application, prefer using
//! the high-level `digitd::api` module instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
