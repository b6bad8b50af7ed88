use std::fs;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use tracing::info;

use digitd::api::classify_image_bytes;
use digitd::core::params::NormalizeParams;
use digitd::infer::Classifier;
use digitd::server::{self, AppState};
use digitd::types::ModelFamily;

use super::args::CliArgs;
use super::errors::AppError;

#[cfg(feature = "onnx")]
fn build_classifier(
    model: PathBuf,
    family: ModelFamily,
) -> Result<Arc<dyn Classifier>, Box<dyn std::error::Error>> {
    let classifier = digitd::infer::OnnxClassifier::new(model, family)?;
    Ok(Arc::new(classifier))
}

#[cfg(not(feature = "onnx"))]
fn build_classifier(
    _model: PathBuf,
    _family: ModelFamily,
) -> Result<Arc<dyn Classifier>, Box<dyn std::error::Error>> {
    Err(AppError::OnnxSupportMissing.into())
}

fn classify_single_file(
    input: &PathBuf,
    params: &NormalizeParams,
    classifier: &dyn Classifier,
    top: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    let bytes = fs::read(input)?;
    let (predictions, normalized) = classify_image_bytes(&bytes, params, classifier, top)?;

    info!(
        "Classified {:?} ({}x{} source, crop at row {}, col {})",
        input,
        normalized.source_rows,
        normalized.source_cols,
        normalized.crop.top,
        normalized.crop.left
    );

    println!("{}", serde_json::to_string_pretty(&predictions)?);
    Ok(())
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }

    if args.top == 0 {
        return Err(AppError::ZeroSize { arg: "--top" }.into());
    }
    if args.tile_height == 0 {
        return Err(AppError::ZeroSize { arg: "--tile-height" }.into());
    }
    if args.tile_width == 0 {
        return Err(AppError::ZeroSize { arg: "--tile-width" }.into());
    }

    let params = NormalizeParams {
        tile_height: args.tile_height,
        tile_width: args.tile_width,
        fill: 0,
        target_width: args.tile_width,
        target_height: args.tile_height,
    };

    let classifier = build_classifier(args.model, args.family)?;

    if let Some(input) = args.input {
        return classify_single_file(&input, &params, classifier.as_ref(), args.top);
    }

    let addr: SocketAddr = args.bind.parse().map_err(|_| AppError::InvalidBindAddress {
        addr: args.bind.clone(),
    })?;

    let state = AppState::new(classifier, params, args.top);

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(server::serve(state, addr))?;
    Ok(())
}
