//! Integration tests for canvas gestures.
//!
//! Drives `LayerGestures` from sceneforge-editor against an `EditorSession`
//! and checks the committed layer geometry in the scene model.

use glam::DVec2;
use sceneforge_core::{CanvasSize, EditorConfig, Position, Size};
use sceneforge_editor::{Corner, EditorSession, GestureAction, Handle, LayerGestures};
use sceneforge_scene::{Layer, LayerKind, Scene, ShapeContent, ShapeKind};
use uuid::Uuid;

// ── Helpers ────────────────────────────────────────────────────

const SIDE: f64 = 300.0;

fn pct(px: f64) -> f64 {
    px / SIDE * 100.0
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

fn shape_at(position: Position, size: Size) -> Layer {
    Layer::new(
        LayerKind::Shape(ShapeContent {
            shape: ShapeKind::Rectangle,
            fill_color: "#3B82F6".into(),
            border_color: None,
            border_width: None,
        }),
        position,
        size,
    )
}

fn session_with(layer: Layer) -> (EditorSession, LayerGestures, Uuid) {
    let id = layer.id;
    let mut scene = Scene::new();
    scene.layers.push(layer);
    let session = EditorSession::new(vec![scene], EditorConfig::default()).unwrap();
    let canvas = CanvasSize::new(SIDE, SIDE).unwrap();
    let gestures = LayerGestures::new(id, canvas, session.config().min_layer_size_px);
    (session, gestures, id)
}

fn layer(session: &EditorSession, id: Uuid) -> &Layer {
    session.current_scene().layer(id).unwrap()
}

// ── Resize ─────────────────────────────────────────────────────

#[test]
fn resize_near_edge_is_capped_by_canvas() {
    let start = Position::new(pct(280.0), pct(280.0));
    let (mut session, mut gestures, id) =
        session_with(shape_at(start, Size::new(pct(40.0), pct(40.0))));
    let handle = Handle::Resize(Corner::BottomRight);

    assert!(gestures.begin(handle, start, Size::new(pct(40.0), pct(40.0))).is_empty());
    gestures.update(handle, DVec2::new(100.0, 100.0));
    let actions = gestures.end(handle);
    assert_eq!(actions.len(), 2);
    session.apply_gesture(&actions).unwrap();

    let committed = layer(&session, id);
    assert!(approx(committed.size.width, pct(20.0)));
    assert!(approx(committed.size.height, pct(20.0)));
    assert!(approx(committed.position.x, start.x));
    assert!(approx(committed.position.y, start.y));
}

#[test]
fn resize_top_left_moves_origin_and_respects_min_size() {
    let start = Position::new(pct(60.0), pct(60.0));
    let size = Size::new(pct(120.0), pct(120.0));
    let (mut session, mut gestures, id) = session_with(shape_at(start, size));
    let handle = Handle::Resize(Corner::TopLeft);

    gestures.begin(handle, start, size);
    // shrink past the floor
    let live = gestures.update(handle, DVec2::new(200.0, 200.0)).unwrap();
    assert!(approx(live.size.x, 50.0) && approx(live.size.y, 50.0));
    assert!(approx(live.origin.x, 130.0) && approx(live.origin.y, 130.0));

    session.apply_gesture(&gestures.end(handle)).unwrap();
    let committed = layer(&session, id);
    assert!(approx(committed.size.width, pct(50.0)));
    assert!(approx(committed.position.x, pct(130.0)));
    // bottom-right edge unchanged
    assert!(approx(committed.position.x + committed.size.width, pct(180.0)));
}

// ── Move ───────────────────────────────────────────────────────

#[test]
fn move_selects_then_clamps_and_undoes_in_one_step() {
    let start = Position::new(pct(30.0), pct(30.0));
    let size = Size::new(pct(60.0), pct(60.0));
    let (mut session, mut gestures, id) = session_with(shape_at(start, size));

    let begin = gestures.begin(Handle::Move, start, size);
    assert_eq!(begin, vec![GestureAction::Select(id)]);
    session.apply_gesture(&begin).unwrap();
    assert_eq!(session.selected_layer_id(), Some(id));
    assert!(!session.can_undo());

    gestures.update(Handle::Move, DVec2::new(-100.0, 50.0));
    let end = gestures.end(Handle::Move);
    session.apply_gesture(&end).unwrap();

    let committed = layer(&session, id);
    assert!(approx(committed.position.x, 0.0));
    assert!(approx(committed.position.y, pct(80.0)));
    assert_eq!(committed.size, size);

    assert_eq!(session.undo().as_deref(), Some("Transform layer"));
    assert_eq!(layer(&session, id).position, start);
    assert!(!session.can_undo());
}

#[test]
fn gesture_for_deleted_layer_is_rejected() {
    let start = Position::new(10.0, 10.0);
    let size = Size::new(20.0, 20.0);
    let (mut session, mut gestures, id) = session_with(shape_at(start, size));

    gestures.begin(Handle::Move, start, size);
    gestures.update(Handle::Move, DVec2::new(10.0, 10.0));
    session.delete_layer(id).unwrap();
    let before = session.scenes().to_vec();

    assert!(session.apply_gesture(&gestures.end(Handle::Move)).is_err());
    assert_eq!(session.scenes(), before.as_slice());
}

#[test]
fn second_handle_is_ignored_while_busy() {
    let start = Position::new(10.0, 10.0);
    let size = Size::new(30.0, 30.0);
    let (_session, mut gestures, _id) = session_with(shape_at(start, size));

    gestures.begin(Handle::Move, start, size);
    let other = Handle::Resize(Corner::TopRight);
    assert!(gestures.begin(other, start, size).is_empty());
    assert!(gestures.update(other, DVec2::new(5.0, 5.0)).is_none());
    assert!(gestures.end(other).is_empty());
    assert_eq!(gestures.active_handle(), Some(Handle::Move));
}
