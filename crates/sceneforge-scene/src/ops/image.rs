//! Image layer operations.

use sceneforge_core::{Position, Size};
use uuid::Uuid;

use super::{edit_layer, edit_scene, Placement, TransformPatch};
use crate::layer::{ImageContent, LayerKind, LayerType};
use crate::result::{OperationError, OperationResult};
use crate::scene::Scene;

const DEFAULT_POSITION: Position = Position::new(15.0, 30.0);
const DEFAULT_SIZE: Size = Size::new(70.0, 40.0);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddImageLayerData {
    pub uri: Option<String>,
    pub opacity: Option<f64>,
    pub placement: Placement,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImageLayerPatch {
    pub uri: Option<String>,
    pub transform: TransformPatch,
}

pub fn add_image_layer(
    scenes: &[Scene],
    scene_index: usize,
    data: &AddImageLayerData,
) -> OperationResult {
    let outcome = edit_scene(scenes, scene_index, |scene| {
        let image = ImageContent {
            uri: data.uri.clone().unwrap_or_default(),
        };
        let layer = data.placement.place(
            LayerKind::Image(image),
            DEFAULT_POSITION,
            DEFAULT_SIZE,
            data.opacity.unwrap_or(1.0),
        );
        scene.layers.push(layer);
        Ok(())
    });
    OperationResult::settle("add_image_layer", scenes, outcome.map(Into::into))
}

pub fn edit_image_layer(
    scenes: &[Scene],
    scene_index: usize,
    layer_id: Uuid,
    patch: &ImageLayerPatch,
) -> OperationResult {
    let outcome = edit_layer(scenes, scene_index, layer_id, |layer| {
        let found = layer.layer_type();
        let LayerKind::Image(image) = &mut layer.kind else {
            return Err(OperationError::LayerKindMismatch {
                expected: LayerType::Image,
                found,
            });
        };
        if let Some(uri) = &patch.uri {
            image.uri = uri.clone();
        }
        patch.transform.apply(layer);
        Ok(())
    });
    OperationResult::settle("edit_image_layer", scenes, outcome.map(Into::into))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::fixtures;

    #[test]
    fn test_add_image_layer_defaults() {
        let scenes = vec![Scene::new()];
        let data = AddImageLayerData {
            uri: Some("file:///cat.png".into()),
            ..Default::default()
        };
        let result = add_image_layer(&scenes, 0, &data);
        assert!(result.is_success());

        let layer = &result.updated_scenes[0].layers[0];
        assert_eq!(layer.position, Position::new(15.0, 30.0));
        assert_eq!(layer.size, Size::new(70.0, 40.0));
        assert_eq!(layer.opacity, 1.0);
        assert_eq!(layer.as_image().unwrap().uri, "file:///cat.png");
        assert!(layer.animation.is_some());
    }

    #[test]
    fn test_add_image_layer_keeps_zero_opacity() {
        let scenes = vec![Scene::new()];
        let data = AddImageLayerData {
            opacity: Some(0.0),
            ..Default::default()
        };
        let result = add_image_layer(&scenes, 0, &data);
        assert_eq!(result.updated_scenes[0].layers[0].opacity, 0.0);
    }

    #[test]
    fn test_edit_image_layer() {
        let scenes = fixtures::scenes_with(vec![fixtures::image("old")]);
        let id = scenes[0].layers[0].id;
        let patch = ImageLayerPatch {
            uri: Some("file:///new.png".into()),
            transform: TransformPatch {
                opacity: Some(0.5),
                ..Default::default()
            },
        };
        let result = edit_image_layer(&scenes, 0, id, &patch);
        let layer = &result.updated_scenes[0].layers[0];
        assert_eq!(layer.as_image().unwrap().uri, "file:///new.png");
        assert_eq!(layer.opacity, 0.5);
        assert_eq!(layer.size, scenes[0].layers[0].size);
    }

    #[test]
    fn test_edit_image_layer_bad_scene() {
        let scenes = fixtures::scenes_with(vec![fixtures::image("x")]);
        let id = scenes[0].layers[0].id;
        let result = edit_image_layer(&scenes, 5, id, &ImageLayerPatch::default());
        assert!(matches!(
            result.error,
            Some(OperationError::InvalidSceneIndex { index: 5, len: 1 })
        ));
    }
}
