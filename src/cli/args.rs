use clap::Parser;
use std::path::PathBuf;

use digitd::types::ModelFamily;

#[derive(Parser)]
#[command(name = "digitd", version, about = "digitd - handwritten digit classification service")]
pub struct CliArgs {
    /// Path to the ONNX model file
    #[arg(short, long)]
    pub model: PathBuf,

    /// Model family; decides how the normalized matrix is laid out
    /// (mlp = flattened row, cnn = trailing channel axis)
    #[arg(long, value_enum, default_value_t = ModelFamily::Mlp)]
    pub family: ModelFamily,

    /// Address to serve the HTTP front end on (serve mode)
    #[arg(short, long, default_value = "127.0.0.1:8080")]
    pub bind: String,

    /// Classify a single image file and print JSON instead of serving
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Number of ranked predictions to return
    #[arg(long, default_value_t = 3)]
    pub top: usize,

    /// Tile height constraining the padded square; also the output height
    #[arg(long, default_value_t = 28)]
    pub tile_height: usize,

    /// Tile width constraining the padded square; also the output width
    #[arg(long, default_value_t = 28)]
    pub tile_width: usize,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
