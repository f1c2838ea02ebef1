//! Property tests over the edit operations.

use proptest::prelude::*;
use std::collections::HashSet;

use super::*;
use crate::ops::fixtures;

fn stack(len: usize) -> Vec<Scene> {
    fixtures::scenes_with((0..len).map(|i| fixtures::image(&i.to_string())).collect())
}

fn action() -> impl Strategy<Value = LayerOrderAction> {
    prop::sample::select(LayerOrderAction::ALL.to_vec())
}

fn unique(scene: &Scene) -> bool {
    let ids: HashSet<_> = scene.layers.iter().map(|l| l.id).collect();
    ids.len() == scene.layers.len()
}

proptest! {
    #[test]
    fn reorder_is_a_permutation(len in 1usize..12, pick in 0usize..12, action in action()) {
        let scenes = stack(len);
        let id = scenes[0].layers[pick % len].id;
        let result = change_layer_order(&scenes, 0, id, action);
        prop_assert!(result.is_success());

        let before: HashSet<_> = fixtures::ids(&scenes[0]).into_iter().collect();
        let after: HashSet<_> = fixtures::ids(&result.updated_scenes[0]).into_iter().collect();
        prop_assert_eq!(before, after);

        let target = action.target_index(pick % len, len - 1);
        prop_assert_eq!(result.updated_scenes[0].layers[target].id, id);
    }

    #[test]
    fn duplicates_keep_ids_unique(len in 1usize..8, copies in 1usize..8) {
        let mut scenes = stack(len);
        for i in 0..copies {
            let id = scenes[0].layers[i % scenes[0].layers.len()].id;
            scenes = duplicate_layer(&scenes, 0, id).updated_scenes;
        }
        prop_assert_eq!(scenes[0].layers.len(), len + copies);
        prop_assert!(unique(&scenes[0]));
    }

    #[test]
    fn add_then_delete_restores_stack(len in 0usize..8, content in "[a-zA-Z ]{0,24}") {
        let scenes = stack(len);
        let data = AddTextLayerData { content: Some(content), ..Default::default() };
        let added = add_text_layer(&scenes, 0, &data, "#FFFFFF");
        let id = added.updated_scenes[0].layers[len].id;
        prop_assert!(scenes[0].layer(id).is_none());

        let removed = delete_layer(&added.updated_scenes, 0, id);
        prop_assert_eq!(removed.updated_scenes, scenes);
    }

    #[test]
    fn out_of_range_index_echoes_input(len in 1usize..4, extra in 0usize..100) {
        let scenes: Vec<Scene> = (0..len).map(|_| Scene::new()).collect();
        let index = len + extra;
        let result = add_image_layer(&scenes, index, &AddImageLayerData::default());
        prop_assert!(!result.is_success());
        prop_assert_eq!(result.updated_scenes, scenes);
    }

    #[test]
    fn delete_scene_focus_stays_in_range(len in 2usize..10, removed in 0usize..10, current in 0usize..10) {
        let scenes: Vec<Scene> = (0..len).map(|_| Scene::new()).collect();
        let result = delete_scene(&scenes, removed % len, current % len);
        let focus = result.new_scene_index.unwrap_or_default();
        prop_assert!(focus < result.updated_scenes.len());
    }
}
