//! Position, size and animation updates.
//!
//! Values are stored verbatim; bounds are the gesture layer's concern.

use sceneforge_core::{Position, Size};
use uuid::Uuid;

use super::edit_layer;
use crate::layer::{Animation, Layer};
use crate::result::OperationResult;
use crate::scene::Scene;

/// Transform fields shared by every layer kind, used inside edit patches.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TransformPatch {
    pub position: Option<Position>,
    pub size: Option<Size>,
    pub rotation: Option<f64>,
    pub opacity: Option<f64>,
}

impl TransformPatch {
    pub(crate) fn apply(&self, layer: &mut Layer) {
        if let Some(position) = self.position {
            layer.position = position;
        }
        if let Some(size) = self.size {
            layer.size = size;
        }
        if let Some(rotation) = self.rotation {
            layer.rotation = rotation;
        }
        if let Some(opacity) = self.opacity {
            layer.opacity = opacity;
        }
    }
}

pub fn update_layer_position(
    scenes: &[Scene],
    scene_index: usize,
    layer_id: Uuid,
    x: f64,
    y: f64,
) -> OperationResult {
    let outcome = edit_layer(scenes, scene_index, layer_id, |layer| {
        layer.position = Position::new(x, y);
        Ok(())
    });
    OperationResult::settle("update_layer_position", scenes, outcome.map(Into::into))
}

pub fn update_layer_size(
    scenes: &[Scene],
    scene_index: usize,
    layer_id: Uuid,
    width: f64,
    height: f64,
) -> OperationResult {
    let outcome = edit_layer(scenes, scene_index, layer_id, |layer| {
        layer.size = Size::new(width, height);
        Ok(())
    });
    OperationResult::settle("update_layer_size", scenes, outcome.map(Into::into))
}

/// Replace the layer's animation, or clear it with `None`.
pub fn update_layer_animation(
    scenes: &[Scene],
    scene_index: usize,
    layer_id: Uuid,
    animation: Option<Animation>,
) -> OperationResult {
    let outcome = edit_layer(scenes, scene_index, layer_id, |layer| {
        layer.animation = animation;
        Ok(())
    });
    OperationResult::settle("update_layer_animation", scenes, outcome.map(Into::into))
}
