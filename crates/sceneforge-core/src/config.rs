//! Editor configuration.
//!
//! Every field has a default so a partial JSON document (or none at all) is a
//! valid configuration.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use crate::error::{EditorError, Result};
use crate::limits;

/// Tunables for editing behaviour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EditorConfig {
    /// Colour used for new text and shape layers when the caller gives none.
    pub default_color: String,
    /// Maximum number of undo steps kept.
    pub history_depth: usize,
    /// Percent offset applied to duplicated layers.
    pub duplicate_offset: f64,
    /// Minimum layer edge in pixels for resize gestures.
    pub min_layer_size_px: f64,
    /// Frame rate used to compute export frame counts.
    pub export_frame_rate: u32,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            default_color: "#FFFFFF".to_string(),
            history_depth: limits::HISTORY_DEPTH,
            duplicate_offset: limits::DUPLICATE_OFFSET_PERCENT,
            min_layer_size_px: limits::MIN_LAYER_SIZE_PX,
            export_frame_rate: 30,
        }
    }
}

impl EditorConfig {
    /// Parse a configuration from JSON bytes.
    pub fn from_json(data: &[u8]) -> Result<Self> {
        let config: Self = serde_json::from_slice(data)
            .map_err(|e| EditorError::Serialization(format!("Invalid editor config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "Loading editor config");
        let data = std::fs::read(path)?;
        Self::from_json(&data)
    }

    fn validate(&self) -> Result<()> {
        if self.history_depth == 0 {
            return Err(EditorError::InvalidParameter(
                "historyDepth must be at least 1".into(),
            ));
        }
        if !(self.min_layer_size_px.is_finite() && self.min_layer_size_px >= 0.0) {
            return Err(EditorError::InvalidParameter(
                "minLayerSizePx must be a non-negative number".into(),
            ));
        }
        if self.export_frame_rate == 0 {
            return Err(EditorError::InvalidParameter(
                "exportFrameRate must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
