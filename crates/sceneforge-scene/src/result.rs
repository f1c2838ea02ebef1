//! Result contract shared by every edit operation.
//!
//! Operations never fail by panicking or by returning a partially edited
//! scene list: either the whole edit is applied, or the caller gets its input
//! back together with the reason.

use thiserror::Error;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::layer::LayerType;
use crate::scene::Scene;

/// Why an edit operation was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OperationError {
    #[error("Invalid scene index")]
    InvalidSceneIndex { index: usize, len: usize },

    #[error("Layer not found")]
    LayerNotFound(Uuid),

    #[error("Cannot delete the last scene")]
    LastScene,

    #[error("Layer is not a {expected} layer")]
    LayerKindMismatch {
        expected: LayerType,
        found: LayerType,
    },

    #[error("Invalid value: {0}")]
    InvalidValue(String),
}

/// Outcome of an edit operation.
#[must_use]
#[derive(Debug, Clone, PartialEq)]
pub struct OperationResult {
    /// The edited scenes on success, the untouched input on failure.
    pub updated_scenes: Vec<Scene>,
    pub error: Option<OperationError>,
    /// Scene the caller should focus after scene-level operations.
    pub new_scene_index: Option<usize>,
}

/// Successful edit payload produced inside an operation.
pub(crate) struct Applied {
    pub scenes: Vec<Scene>,
    pub new_scene_index: Option<usize>,
}

impl From<Vec<Scene>> for Applied {
    fn from(scenes: Vec<Scene>) -> Self {
        Self {
            scenes,
            new_scene_index: None,
        }
    }
}

impl OperationResult {
    /// Settle an operation body into a result, logging the outcome.
    pub(crate) fn settle(
        op: &'static str,
        scenes: &[Scene],
        outcome: std::result::Result<Applied, OperationError>,
    ) -> Self {
        match outcome {
            Ok(applied) => {
                debug!(op, scenes = applied.scenes.len(), "Edit applied");
                Self {
                    updated_scenes: applied.scenes,
                    error: None,
                    new_scene_index: applied.new_scene_index,
                }
            }
            Err(error) => {
                warn!(op, %error, "Edit rejected");
                Self {
                    updated_scenes: scenes.to_vec(),
                    error: Some(error),
                    new_scene_index: None,
                }
            }
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }

    /// Human-readable failure reason, if any.
    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(ToString::to_string)
    }

    /// Convert into a plain `Result`, dropping the echoed input on failure.
    pub fn into_result(self) -> std::result::Result<(Vec<Scene>, Option<usize>), OperationError> {
        match self.error {
            None => Ok((self.updated_scenes, self.new_scene_index)),
            Some(error) => Err(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            OperationError::InvalidSceneIndex { index: 3, len: 1 }.to_string(),
            "Invalid scene index"
        );
        assert_eq!(
            OperationError::LayerNotFound(Uuid::nil()).to_string(),
            "Layer not found"
        );
        assert_eq!(
            OperationError::LastScene.to_string(),
            "Cannot delete the last scene"
        );
        assert_eq!(
            OperationError::LayerKindMismatch {
                expected: LayerType::Text,
                found: LayerType::Image,
            }
            .to_string(),
            "Layer is not a text layer"
        );
    }

    #[test]
    fn test_failed_settle_echoes_input() {
        let scenes = vec![Scene::new()];
        let result = OperationResult::settle("test", &scenes, Err(OperationError::LastScene));
        assert!(!result.is_success());
        assert_eq!(result.updated_scenes, scenes);
        assert_eq!(result.error_message().as_deref(), Some("Cannot delete the last scene"));
        assert!(result.into_result().is_err());
    }
}
