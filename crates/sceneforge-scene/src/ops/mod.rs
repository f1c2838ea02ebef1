//! Immutable edit operations.
//!
//! Every operation takes the full scene list plus a target, and returns an
//! [`OperationResult`](crate::OperationResult). The input slice is never
//! touched; a successful result carries a fresh `Vec<Scene>`.

mod delete;
mod duplicate;
mod image;
mod order;
mod scene;
mod shape;
mod text;
mod transform;

pub use delete::delete_layer;
pub use duplicate::{duplicate_layer, duplicate_layer_with_offset};
pub use image::{add_image_layer, edit_image_layer, AddImageLayerData, ImageLayerPatch};
pub use order::{change_layer_order, LayerOrderAction};
pub use scene::{
    add_scene, delete_scene, duplicate_scene, update_scene_audio, update_scene_background,
    update_scene_duration, update_scene_transition,
};
pub use shape::{add_shape_layer, edit_shape_layer, AddShapeLayerData, ShapeLayerPatch};
pub use text::{add_text_layer, edit_text_layer, AddTextLayerData, TextLayerPatch};
pub use transform::{
    update_layer_animation, update_layer_position, update_layer_size, TransformPatch,
};

use sceneforge_core::{Position, Size};
use uuid::Uuid;

use crate::layer::{Animation, Layer};
use crate::result::OperationError;
use crate::scene::Scene;

/// Optional placement overrides for newly added layers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Placement {
    pub position: Option<Position>,
    pub size: Option<Size>,
    /// Replaces the default fade-in.
    pub animation: Option<Animation>,
}

impl Placement {
    /// Build a layer from kind defaults, letting overrides win.
    pub(crate) fn place(
        &self,
        kind: crate::layer::LayerKind,
        default_position: Position,
        default_size: Size,
        opacity: f64,
    ) -> Layer {
        let mut layer = Layer::new(
            kind,
            self.position.unwrap_or(default_position),
            self.size.unwrap_or(default_size),
        );
        layer.opacity = opacity;
        layer.animation = Some(self.animation.clone().unwrap_or_else(Animation::default_fade));
        layer
    }
}

// ── Shared preconditions ────────────────────────────────────────

pub(crate) fn check_scene_index(scenes: &[Scene], index: usize) -> Result<(), OperationError> {
    if index < scenes.len() {
        Ok(())
    } else {
        Err(OperationError::InvalidSceneIndex {
            index,
            len: scenes.len(),
        })
    }
}

pub(crate) fn find_layer(scene: &Scene, layer_id: Uuid) -> Result<usize, OperationError> {
    scene
        .layer_index(layer_id)
        .ok_or(OperationError::LayerNotFound(layer_id))
}

/// Copy the scene list and hand the target scene to `edit`.
pub(crate) fn edit_scene(
    scenes: &[Scene],
    scene_index: usize,
    edit: impl FnOnce(&mut Scene) -> Result<(), OperationError>,
) -> Result<Vec<Scene>, OperationError> {
    check_scene_index(scenes, scene_index)?;
    let mut updated = scenes.to_vec();
    edit(&mut updated[scene_index])?;
    Ok(updated)
}

/// Copy the scene list and hand the layer `layer_id` of the target scene to `edit`.
pub(crate) fn edit_layer(
    scenes: &[Scene],
    scene_index: usize,
    layer_id: Uuid,
    edit: impl FnOnce(&mut Layer) -> Result<(), OperationError>,
) -> Result<Vec<Scene>, OperationError> {
    edit_scene(scenes, scene_index, |scene| {
        let index = find_layer(scene, layer_id)?;
        edit(&mut scene.layers[index])
    })
}

#[cfg(test)]
mod properties;
