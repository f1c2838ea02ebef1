//! Layer duplication.

use sceneforge_core::limits::DUPLICATE_OFFSET_PERCENT;
use uuid::Uuid;

use super::{edit_scene, find_layer};
use crate::result::OperationResult;
use crate::scene::Scene;

/// Copy a layer with a new id, shifted by the default offset, onto the top of the stack.
pub fn duplicate_layer(scenes: &[Scene], scene_index: usize, layer_id: Uuid) -> OperationResult {
    duplicate_layer_with_offset(scenes, scene_index, layer_id, DUPLICATE_OFFSET_PERCENT)
}

/// [`duplicate_layer`] with an explicit offset in percent on both axes.
pub fn duplicate_layer_with_offset(
    scenes: &[Scene],
    scene_index: usize,
    layer_id: Uuid,
    offset: f64,
) -> OperationResult {
    let outcome = edit_scene(scenes, scene_index, |scene| {
        let index = find_layer(scene, layer_id)?;
        let mut copy = scene.layers[index].with_new_id();
        copy.position = copy.position.offset(offset, offset);
        scene.layers.push(copy);
        Ok(())
    });
    OperationResult::settle("duplicate_layer", scenes, outcome.map(Into::into))
}
