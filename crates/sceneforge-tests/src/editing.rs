//! Integration tests for scene and layer editing.
//!
//! Exercises sceneforge-scene operations together with the persisted
//! project format and the editor session that drives them.

use std::collections::HashSet;

use sceneforge_core::{EditorConfig, Position, Size};
use sceneforge_editor::EditorSession;
use sceneforge_scene::ops;
use sceneforge_scene::{
    AddTextLayerData, ImageContent, Layer, LayerKind, LayerOrderAction, OperationError,
    ProjectFile, Scene,
};
use uuid::Uuid;

// ── Helpers ────────────────────────────────────────────────────

fn image(name: &str) -> Layer {
    Layer::new(
        LayerKind::Image(ImageContent {
            uri: format!("file:///{name}.png"),
        }),
        Position::new(10.0, 10.0),
        Size::new(30.0, 30.0),
    )
}

fn one_scene(layers: Vec<Layer>) -> Vec<Scene> {
    let mut scene = Scene::new();
    scene.layers = layers;
    vec![scene]
}

fn order(scene: &Scene) -> Vec<Uuid> {
    scene.layers.iter().map(|l| l.id).collect()
}

// ── Layer order ────────────────────────────────────────────────

#[test]
fn reorder_chain_front_then_up() {
    let (a, b, c) = (image("a"), image("b"), image("c"));
    let (ia, ib, ic) = (a.id, b.id, c.id);
    let scenes = one_scene(vec![a, b, c]);

    let step1 = ops::change_layer_order(&scenes, 0, ib, LayerOrderAction::Front);
    assert!(step1.is_success());
    assert_eq!(order(&step1.updated_scenes[0]), vec![ia, ic, ib]);

    let step2 = ops::change_layer_order(&step1.updated_scenes, 0, ia, LayerOrderAction::Up);
    assert!(step2.is_success());
    assert_eq!(order(&step2.updated_scenes[0]), vec![ic, ia, ib]);

    // input never mutated
    assert_eq!(order(&scenes[0]), vec![ia, ib, ic]);
}

#[test]
fn reorder_at_boundary_is_a_successful_noop() {
    let (a, b) = (image("a"), image("b"));
    let (ia, ib) = (a.id, b.id);
    let scenes = one_scene(vec![a, b]);

    for (id, action) in [
        (ib, LayerOrderAction::Front),
        (ib, LayerOrderAction::Up),
        (ia, LayerOrderAction::Back),
        (ia, LayerOrderAction::Down),
    ] {
        let result = ops::change_layer_order(&scenes, 0, id, action);
        assert!(result.is_success(), "{action:?}");
        assert_eq!(result.updated_scenes, scenes);
    }
}

// ── Scenes ─────────────────────────────────────────────────────

#[test]
fn duplicate_scene_reidentifies_everything() {
    let scenes = one_scene(vec![image("a"), image("b")]);
    let result = ops::duplicate_scene(&scenes, 0);

    assert_eq!(result.new_scene_index, Some(1));
    let (original, copy) = (&result.updated_scenes[0], &result.updated_scenes[1]);
    assert_eq!(original, &scenes[0]);
    assert_ne!(copy.id, original.id);
    assert_eq!(copy.layers.len(), 2);
    for (o, c) in original.layers.iter().zip(&copy.layers) {
        assert_ne!(o.id, c.id);
        assert_eq!(o.kind, c.kind);
        assert_eq!(o.position, c.position);
    }
}

#[test]
fn last_scene_cannot_be_deleted() {
    let scenes = one_scene(vec![image("a")]);
    let result = ops::delete_scene(&scenes, 0, 0);
    assert_eq!(result.error, Some(OperationError::LastScene));
    assert_eq!(result.updated_scenes, scenes);
    assert_eq!(result.new_scene_index, None);
}

#[test]
fn delete_scene_refocuses_within_bounds() {
    let scenes = ops::add_scene(&ops::add_scene(&one_scene(vec![])).updated_scenes).updated_scenes;
    assert_eq!(scenes.len(), 3);

    let result = ops::delete_scene(&scenes, 2, 2);
    assert_eq!(result.new_scene_index, Some(1));

    let result = ops::delete_scene(&scenes, 0, 2);
    assert_eq!(result.new_scene_index, Some(1));

    let result = ops::delete_scene(&scenes, 2, 0);
    assert_eq!(result.new_scene_index, Some(0));
}

// ── Bounds & round trips ───────────────────────────────────────

#[test]
fn out_of_range_scene_index_echoes_input() {
    let scenes = one_scene(vec![image("a")]);
    let id = scenes[0].layers[0].id;

    for index in [scenes.len(), usize::MAX] {
        let added = ops::add_text_layer(&scenes, index, &AddTextLayerData::default(), "#FFFFFF");
        assert!(matches!(
            added.error,
            Some(OperationError::InvalidSceneIndex { .. })
        ));
        assert_eq!(added.updated_scenes, scenes);

        let moved = ops::update_layer_position(&scenes, index, id, 1.0, 1.0);
        assert_eq!(moved.error_message().as_deref(), Some("Invalid scene index"));
        assert_eq!(moved.updated_scenes, scenes);

        let duplicated = ops::duplicate_scene(&scenes, index);
        assert!(!duplicated.is_success());
        assert_eq!(duplicated.updated_scenes, scenes);
    }
}

#[test]
fn add_then_delete_restores_scene() {
    let scenes = one_scene(vec![image("a")]);
    let added = ops::add_text_layer(
        &scenes,
        0,
        &AddTextLayerData {
            content: Some("Title".into()),
            ..Default::default()
        },
        "#FFFFFF",
    );
    let top = added.updated_scenes[0].layers.last().map(|l| l.id).unwrap();
    let deleted = ops::delete_layer(&added.updated_scenes, 0, top);
    assert!(deleted.is_success());
    assert_eq!(deleted.updated_scenes, scenes);
}

#[test]
fn layer_ids_stay_unique_across_edits() {
    let mut scenes = one_scene(vec![image("a")]);
    let first = scenes[0].layers[0].id;
    for _ in 0..5 {
        scenes = ops::duplicate_layer(&scenes, 0, first).updated_scenes;
        scenes = ops::add_text_layer(&scenes, 0, &AddTextLayerData::default(), "#FFFFFF")
            .updated_scenes;
    }
    scenes = ops::duplicate_scene(&scenes, 0).updated_scenes;

    let mut seen = HashSet::new();
    for scene in &scenes {
        for layer in &scene.layers {
            assert!(seen.insert(layer.id), "duplicate id {}", layer.id);
        }
    }
    assert_eq!(seen.len(), 22);
}

// ── Project files ──────────────────────────────────────────────

const HOST_PROJECT: &str = r##"{
    "id": "7c1d2a9e-1b51-4c44-9a0e-2f5ad0e6c001",
    "templateId": "promo-1",
    "title": "Promo",
    "createdAt": "2024-05-01T10:00:00Z",
    "updatedAt": "2024-05-01T10:00:00Z",
    "duration": 5000,
    "thumbnailUrl": "",
    "aspectRatio": "9:16",
    "scenes": [{
        "id": "7c1d2a9e-1b51-4c44-9a0e-2f5ad0e6c002",
        "duration": 5000,
        "background": { "type": "color", "value": "#000000" },
        "layers": [{
            "id": "7c1d2a9e-1b51-4c44-9a0e-2f5ad0e6c003",
            "type": "text",
            "position": { "x": 10, "y": 40 },
            "size": { "width": 80, "height": 20 },
            "rotation": 0,
            "opacity": 1,
            "animation": { "type": "fade", "duration": 500, "easing": "ease-in-out" },
            "content": "Hello",
            "fontSize": 48,
            "fontFamily": "System",
            "fontWeight": "bold",
            "color": "#FFFFFF",
            "textAlign": "center"
        }],
        "transition": { "type": "fade", "duration": 500 }
    }],
    "exportSettings": {
        "resolution": "1080p",
        "format": "mp4",
        "quality": "high",
        "includeWatermark": false
    }
}"##;

#[test]
fn host_project_loads_edits_and_saves() {
    let file = ProjectFile::from_json(HOST_PROJECT.as_bytes()).unwrap();
    assert_eq!(file.format_version, 1);
    assert!(file.written_by.is_empty());
    let mut project = file.project;
    assert_eq!(project.title, "Promo");

    let text_id = project.scenes[0].layers[0].id;
    assert_eq!(
        project.scenes[0].layers[0].as_text().map(|t| t.content.as_str()),
        Some("Hello")
    );

    let result = ops::duplicate_layer(&project.scenes, 0, text_id);
    let (scenes, _) = result.into_result().unwrap();
    project.set_scenes(scenes);

    let bytes = ProjectFile::new(project.clone()).to_json().unwrap();
    let reloaded = ProjectFile::from_json(&bytes).unwrap();
    assert_eq!(reloaded.project, project);

    let copy = &reloaded.project.scenes[0].layers[1];
    assert_eq!(copy.position, Position::new(15.0, 45.0));

    let raw: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(raw["project"]["scenes"][0]["layers"][1]["type"], "text");
    assert_eq!(raw["project"]["scenes"][0]["layers"][1]["fontSize"], 48.0);
}

// ── Session ────────────────────────────────────────────────────

#[test]
fn session_undo_walks_back_through_edits() {
    let scenes = one_scene(vec![image("a")]);
    let mut session = EditorSession::new(scenes.clone(), EditorConfig::default()).unwrap();
    let id = scenes[0].layers[0].id;

    session.duplicate_layer(id).unwrap();
    session
        .change_layer_order(id, LayerOrderAction::Front)
        .unwrap();
    session.add_scene().unwrap();
    assert_eq!(session.scenes().len(), 2);
    assert_eq!(session.current_scene_index(), 1);

    assert_eq!(session.undo().as_deref(), Some("Add scene"));
    assert_eq!(session.scenes().len(), 1);
    assert_eq!(session.current_scene_index(), 0);
    assert_eq!(session.current_scene().layers.last().map(|l| l.id), Some(id));

    session.undo();
    session.undo();
    assert_eq!(session.scenes(), scenes.as_slice());
    assert!(!session.can_undo());
    assert!(session.can_redo());
}

#[test]
fn session_rejected_edit_keeps_state() {
    let scenes = one_scene(vec![image("a")]);
    let mut session = EditorSession::new(scenes.clone(), EditorConfig::default()).unwrap();
    session.take_notifications();

    let err = session.delete_scene(0).unwrap_err();
    assert_eq!(err, OperationError::LastScene);
    assert_eq!(session.scenes(), scenes.as_slice());
    assert!(!session.can_undo());

    let notes = session.take_notifications();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].message, "Cannot delete the last scene");
}
