use serde::{Deserialize, Serialize};

/// Normalization parameters suitable for config files and presets.
///
/// The tile size constrains the padded square's side and doubles as the
/// pipeline's final output resolution; both default to the classic 28x28
/// training geometry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct NormalizeParams {
    pub tile_height: usize,
    pub tile_width: usize,
    /// Value used for padding and shortfall fill
    pub fill: u8,
    pub target_width: usize,
    pub target_height: usize,
}

impl Default for NormalizeParams {
    fn default() -> Self {
        Self {
            tile_height: 28,
            tile_width: 28,
            fill: 0,
            target_width: 28,
            target_height: 28,
        }
    }
}
