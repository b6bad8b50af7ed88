#![doc = r#"
digitd — a handwritten-digit normalization pipeline and classification service.

This crate turns arbitrary hand-drawn digit images (any size, aspect ratio,
or offset) into the fixed-size square rasters a digit classifier expects,
and serves predictions over a thin HTTP front end. It powers the `digitd`
binary and can be embedded in your own Rust applications.

The pipeline
------------
Four stages run strictly in sequence, each producing a fresh matrix:

1. **Decode** — strip the `data:image/...;base64,` envelope, decode the
   image, take the first channel, and invert intensities so ink reads high.
2. **Trim** — crop to the bounding box of foreground content; blank input
   is an explicit error.
3. **Square** — pad into a square sized by the configured tile grid, with
   margin on all sides.
4. **Resize** — downsample to the exact target resolution, correcting the
   one-pixel shortfall quantized resampling can leave.

Every stage is a pure function of its input; independent requests run
concurrently with no shared state.

Quick start: normalize a payload
--------------------------------
```rust
use digitd::{NormalizeParams, normalize_data_url};

fn handle(payload: &str) -> digitd::Result<()> {
    let normalized = normalize_data_url(payload, &NormalizeParams::default())?;
    assert_eq!(normalized.pixels.dim(), (28, 28));
    println!(
        "glyph was {} rows tall, padded by {} on top",
        normalized.crop.rows(),
        normalized.padding.top
    );
    Ok(())
}
```

Classify with your own engine
-----------------------------
Implement [`Classifier`] for any model backend and hand it to the API:

```rust
use digitd::{Classifier, NormalizeParams, classify_data_url};
use ndarray::Array2;

struct Uniform;

impl Classifier for Uniform {
    fn classify(&self, _pixels: &Array2<u8>) -> digitd::Result<Vec<f32>> {
        Ok(vec![0.1; 10])
    }
    fn name(&self) -> &str {
        "uniform"
    }
}

fn handle(payload: &str) -> digitd::Result<()> {
    let (predictions, _normalized) =
        classify_data_url(payload, &NormalizeParams::default(), &Uniform, 3)?;
    for p in predictions {
        println!("class {} with probability {}", p.class, p.prob);
    }
    Ok(())
}
```

With the default `onnx` feature, [`OnnxClassifier`] runs an ONNX model,
acquiring its inference session per request (load, infer, release) so no
session state is shared across requests.

Serving
-------
The `digitd` binary serves `POST /predict` and `GET /health`:

```text
digitd --model models/deep_mlp.onnx --family mlp --bind 127.0.0.1:8080 --log
```

Single-file mode classifies one image from disk and prints JSON:

```text
digitd --model models/deep_mlp.onnx --input seven.png --top 3
```

Error handling
--------------
All public functions return `digitd::Result<T>`; match on `digitd::Error`
to distinguish client-input failures (bad payloads, blank images) from
internal faults.

Feature flags
-------------
- `onnx` (default): builds the ONNX-Runtime-backed classifier.

Useful modules
--------------
- [`api`] — high-level, ergonomic entry points.
- [`core`] — normalization primitives (trim, square, resize, pipeline).
- [`infer`] — the `Classifier` seam and prediction ranking.
- [`io`] — payload decoding.
- [`server`] — the axum HTTP front end.
- [`error`] — crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod core;
pub mod error;
pub mod infer;
pub mod io;
pub mod server;
pub mod types;

// Curated public API surface
// Types
pub use crate::core::params::NormalizeParams;
pub use crate::core::processing::pipeline::NormalizedImage;
pub use crate::core::processing::square::PaddingAmounts;
pub use crate::core::processing::trim::BoundingBox;
pub use error::{Error, Result};
pub use types::{ModelFamily, Prediction};

// Decoder
pub use io::payload::{DecodeError, matrix_from_data_url, matrix_from_image_bytes};

// Inference seam
pub use infer::{Classifier, top_predictions};
#[cfg(feature = "onnx")]
pub use infer::OnnxClassifier;

// High-level API re-exports
pub use api::{
    classify_data_url, classify_image_bytes, normalize_data_url, normalize_image_bytes,
};
