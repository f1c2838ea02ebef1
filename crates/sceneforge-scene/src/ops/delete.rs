//! Layer removal.

use uuid::Uuid;

use super::{edit_scene, find_layer};
use crate::result::OperationResult;
use crate::scene::Scene;

/// Remove the layer `layer_id` from the scene.
pub fn delete_layer(scenes: &[Scene], scene_index: usize, layer_id: Uuid) -> OperationResult {
    let outcome = edit_scene(scenes, scene_index, |scene| {
        let index = find_layer(scene, layer_id)?;
        scene.layers.remove(index);
        Ok(())
    });
    OperationResult::settle("delete_layer", scenes, outcome.map(Into::into))
}
