//! Scene-level operations.

use super::{check_scene_index, edit_scene};
use crate::result::{Applied, OperationError, OperationResult};
use crate::scene::{Audio, Background, Scene, Transition};

/// Append an empty default scene. `new_scene_index` points at it.
pub fn add_scene(scenes: &[Scene]) -> OperationResult {
    let mut updated = scenes.to_vec();
    updated.push(Scene::new());
    let index = updated.len() - 1;
    OperationResult::settle(
        "add_scene",
        scenes,
        Ok(Applied {
            scenes: updated,
            new_scene_index: Some(index),
        }),
    )
}

/// Insert a re-identified copy of the scene right after it.
pub fn duplicate_scene(scenes: &[Scene], scene_index: usize) -> OperationResult {
    let outcome = check_scene_index(scenes, scene_index).map(|()| {
        let mut updated = scenes.to_vec();
        updated.insert(scene_index + 1, scenes[scene_index].with_new_ids());
        Applied {
            scenes: updated,
            new_scene_index: Some(scene_index + 1),
        }
    });
    OperationResult::settle("duplicate_scene", scenes, outcome)
}

/// Remove a scene, refusing to remove the last one.
///
/// `current_index` is the caller's focused scene; the result's
/// `new_scene_index` is where that focus should move.
pub fn delete_scene(scenes: &[Scene], scene_index: usize, current_index: usize) -> OperationResult {
    let outcome = if scenes.len() <= 1 {
        Err(OperationError::LastScene)
    } else {
        check_scene_index(scenes, scene_index).map(|()| {
            let mut updated = scenes.to_vec();
            updated.remove(scene_index);
            let focus = refocus(current_index, scene_index, updated.len());
            Applied {
                scenes: updated,
                new_scene_index: Some(focus),
            }
        })
    };
    OperationResult::settle("delete_scene", scenes, outcome)
}

fn refocus(current: usize, removed: usize, new_len: usize) -> usize {
    if current >= new_len {
        new_len - 1
    } else if current > removed {
        current - 1
    } else {
        current
    }
}

/// Set or clear the scene's audio track.
pub fn update_scene_audio(
    scenes: &[Scene],
    scene_index: usize,
    audio: Option<Audio>,
) -> OperationResult {
    let outcome = edit_scene(scenes, scene_index, |scene| {
        scene.audio = audio;
        Ok(())
    });
    OperationResult::settle("update_scene_audio", scenes, outcome.map(Into::into))
}

/// Set the scene length in milliseconds. Zero is rejected.
pub fn update_scene_duration(
    scenes: &[Scene],
    scene_index: usize,
    duration_ms: u32,
) -> OperationResult {
    let outcome = edit_scene(scenes, scene_index, |scene| {
        if duration_ms == 0 {
            return Err(OperationError::InvalidValue(
                "scene duration must be positive".into(),
            ));
        }
        scene.duration = duration_ms;
        Ok(())
    });
    OperationResult::settle("update_scene_duration", scenes, outcome.map(Into::into))
}

pub fn update_scene_background(
    scenes: &[Scene],
    scene_index: usize,
    background: Background,
) -> OperationResult {
    let outcome = edit_scene(scenes, scene_index, |scene| {
        scene.background = background;
        Ok(())
    });
    OperationResult::settle("update_scene_background", scenes, outcome.map(Into::into))
}

pub fn update_scene_transition(
    scenes: &[Scene],
    scene_index: usize,
    transition: Transition,
) -> OperationResult {
    let outcome = edit_scene(scenes, scene_index, |scene| {
        scene.transition = transition;
        Ok(())
    });
    OperationResult::settle("update_scene_transition", scenes, outcome.map(Into::into))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::fixtures;
    use crate::scene::{BackgroundKind, TransitionKind};

    fn three_scenes() -> Vec<Scene> {
        vec![Scene::new(), Scene::new(), Scene::new()]
    }

    #[test]
    fn test_add_scene_appends_default() {
        let scenes = vec![Scene::new()];
        let result = add_scene(&scenes);
        assert!(result.is_success());
        assert_eq!(result.new_scene_index, Some(1));
        let added = &result.updated_scenes[1];
        assert_ne!(added.id, scenes[0].id);
        assert_eq!(added.duration, 5000);
        assert_eq!(added.background.value, "#000000");
        assert!(added.layers.is_empty());
    }

    #[test]
    fn test_duplicate_scene_reidentifies_layers() {
        let scenes = fixtures::scenes_with(vec![fixtures::image("l1")]);
        let result = duplicate_scene(&scenes, 0);
        assert_eq!(result.new_scene_index, Some(1));

        let [original, copy] = result.updated_scenes.as_slice() else {
            panic!("expected two scenes");
        };
        assert_eq!(original, &scenes[0]);
        assert_ne!(copy.id, original.id);
        assert_ne!(copy.layers[0].id, original.layers[0].id);
        assert_eq!(copy.layers[0].kind, original.layers[0].kind);
    }

    #[test]
    fn test_duplicate_scene_inserts_after_source() {
        let scenes = three_scenes();
        let result = duplicate_scene(&scenes, 0);
        let ids: Vec<_> = result.updated_scenes.iter().map(|s| s.id).collect();
        assert_eq!(ids.len(), 4);
        assert_eq!(ids[0], scenes[0].id);
        assert_eq!(ids[2], scenes[1].id);
        assert_eq!(ids[3], scenes[2].id);
    }

    #[test]
    fn test_delete_last_scene_refused() {
        let scenes = vec![Scene::new()];
        let result = delete_scene(&scenes, 0, 0);
        assert_eq!(result.error, Some(OperationError::LastScene));
        assert_eq!(result.updated_scenes, scenes);
    }

    #[test]
    fn test_delete_last_scene_refused_before_index_check() {
        let scenes = vec![Scene::new()];
        let result = delete_scene(&scenes, 7, 0);
        assert_eq!(result.error, Some(OperationError::LastScene));
    }

    #[test]
    fn test_delete_scene_refocus() {
        let scenes = three_scenes();
        // focus past the new end clamps
        assert_eq!(delete_scene(&scenes, 2, 2).new_scene_index, Some(1));
        // focus after the removed scene shifts down
        assert_eq!(delete_scene(&scenes, 0, 1).new_scene_index, Some(0));
        // focus before the removed scene is kept
        assert_eq!(delete_scene(&scenes, 2, 0).new_scene_index, Some(0));
        assert_eq!(delete_scene(&scenes, 1, 1).new_scene_index, Some(1));
    }

    #[test]
    fn test_delete_scene_invalid_index() {
        let scenes = three_scenes();
        let result = delete_scene(&scenes, 3, 0);
        assert_eq!(result.error_message().as_deref(), Some("Invalid scene index"));
    }

    #[test]
    fn test_audio_set_and_clear() {
        let scenes = vec![Scene::new()];
        let audio = Audio {
            uri: "file:///track.mp3".into(),
            volume: 0.7,
            start_time: 0,
            fade_in: Some(1000),
            fade_out: Some(1000),
        };
        let set = update_scene_audio(&scenes, 0, Some(audio.clone()));
        assert_eq!(set.updated_scenes[0].audio, Some(audio));
        let cleared = update_scene_audio(&set.updated_scenes, 0, None);
        assert!(cleared.updated_scenes[0].audio.is_none());
    }

    #[test]
    fn test_scene_properties() {
        let scenes = vec![Scene::new()];
        assert!(update_scene_duration(&scenes, 0, 0).error.is_some());
        let longer = update_scene_duration(&scenes, 0, 8000);
        assert_eq!(longer.updated_scenes[0].duration, 8000);

        let bg = Background {
            kind: BackgroundKind::Gradient,
            value: "#000000,#FFFFFF".into(),
        };
        let painted = update_scene_background(&scenes, 0, bg.clone());
        assert_eq!(painted.updated_scenes[0].background, bg);

        let wipe = Transition {
            kind: TransitionKind::Wipe,
            duration: 300,
        };
        let cut = update_scene_transition(&scenes, 0, wipe);
        assert_eq!(cut.updated_scenes[0].transition, wipe);
    }
}
