//! Shape layer operations.

use sceneforge_core::{Position, Size};
use uuid::Uuid;

use super::{edit_layer, edit_scene, Placement, TransformPatch};
use crate::layer::{LayerKind, LayerType, ShapeContent, ShapeKind};
use crate::result::{OperationError, OperationResult};
use crate::scene::Scene;

const DEFAULT_POSITION: Position = Position::new(25.0, 25.0);
const DEFAULT_SIZE: Size = Size::new(50.0, 50.0);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddShapeLayerData {
    pub shape: Option<ShapeKind>,
    pub fill_color: Option<String>,
    pub border_color: Option<String>,
    pub border_width: Option<f64>,
    pub opacity: Option<f64>,
    pub placement: Placement,
}

/// Partial update of a shape layer.
///
/// Border fields are doubly optional: `Some(None)` removes the border value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShapeLayerPatch {
    pub shape: Option<ShapeKind>,
    pub fill_color: Option<String>,
    pub border_color: Option<Option<String>>,
    pub border_width: Option<Option<f64>>,
    pub transform: TransformPatch,
}

impl ShapeLayerPatch {
    fn apply(&self, content: &mut ShapeContent) {
        if let Some(shape) = self.shape {
            content.shape = shape;
        }
        if let Some(fill_color) = &self.fill_color {
            content.fill_color = fill_color.clone();
        }
        if let Some(border_color) = &self.border_color {
            content.border_color = border_color.clone();
        }
        if let Some(border_width) = self.border_width {
            content.border_width = border_width;
        }
    }
}

/// Append a shape layer. `default_color` fills the shape when `data.fill_color` is unset.
pub fn add_shape_layer(
    scenes: &[Scene],
    scene_index: usize,
    data: &AddShapeLayerData,
    default_color: &str,
) -> OperationResult {
    let outcome = edit_scene(scenes, scene_index, |scene| {
        let shape = ShapeContent {
            shape: data.shape.unwrap_or(ShapeKind::Rectangle),
            fill_color: data
                .fill_color
                .clone()
                .unwrap_or_else(|| default_color.to_string()),
            border_color: data.border_color.clone(),
            border_width: data.border_width,
        };
        let layer = data.placement.place(
            LayerKind::Shape(shape),
            DEFAULT_POSITION,
            DEFAULT_SIZE,
            data.opacity.unwrap_or(1.0),
        );
        scene.layers.push(layer);
        Ok(())
    });
    OperationResult::settle("add_shape_layer", scenes, outcome.map(Into::into))
}

pub fn edit_shape_layer(
    scenes: &[Scene],
    scene_index: usize,
    layer_id: Uuid,
    patch: &ShapeLayerPatch,
) -> OperationResult {
    let outcome = edit_layer(scenes, scene_index, layer_id, |layer| {
        let found = layer.layer_type();
        let LayerKind::Shape(shape) = &mut layer.kind else {
            return Err(OperationError::LayerKindMismatch {
                expected: LayerType::Shape,
                found,
            });
        };
        patch.apply(shape);
        patch.transform.apply(layer);
        Ok(())
    });
    OperationResult::settle("edit_shape_layer", scenes, outcome.map(Into::into))
}
