//! Editor session.
//!
//! Holds the scene list being edited together with the view state around it
//! (focused scene, selected layer, history, playback). Every edit goes through
//! an operation from [`sceneforge_scene::ops`]; on success the previous scenes
//! are recorded for undo and a notification is queued, on failure the state
//! stays as it was and an error notification is queued.

use sceneforge_core::{EditorConfig, EditorError, Position, Result, Size};
use sceneforge_scene::ops;
use sceneforge_scene::{
    AddImageLayerData, AddShapeLayerData, AddTextLayerData, Animation, Audio, Background,
    EditHistory, ImageLayerPatch, Layer, LayerOrderAction, OperationError, OperationResult, Scene,
    ShapeLayerPatch, TextLayerPatch, Transition, VideoProject,
};
use tracing::debug;
use uuid::Uuid;

use crate::gesture::GestureAction;
use crate::media::{ImageSource, MediaPicker};
use crate::notify::{Notification, NotificationKind, Notifier};
use crate::playback::Playback;

type EditResult = std::result::Result<(), OperationError>;

#[derive(Debug)]
pub struct EditorSession {
    scenes: Vec<Scene>,
    current_scene_index: usize,
    selected_layer_id: Option<Uuid>,
    history: EditHistory,
    playback: Playback,
    config: EditorConfig,
    notifications: Vec<Notification>,
}

impl EditorSession {
    /// Start editing `scenes`. At least one scene is required.
    pub fn new(scenes: Vec<Scene>, config: EditorConfig) -> Result<Self> {
        if scenes.is_empty() {
            return Err(EditorError::InvalidParameter(
                "cannot edit a project without scenes".into(),
            ));
        }
        Ok(Self {
            scenes,
            current_scene_index: 0,
            selected_layer_id: None,
            history: EditHistory::new(config.history_depth),
            playback: Playback::new(),
            config,
            notifications: Vec::new(),
        })
    }

    pub fn from_project(project: &VideoProject, config: EditorConfig) -> Result<Self> {
        Self::new(project.scenes.clone(), config)
    }

    // ── Accessors ───────────────────────────────────────────────

    pub fn scenes(&self) -> &[Scene] {
        &self.scenes
    }

    /// Hand the edited scenes back to the host.
    pub fn into_scenes(self) -> Vec<Scene> {
        self.scenes
    }

    pub fn current_scene_index(&self) -> usize {
        self.current_scene_index
    }

    pub fn current_scene(&self) -> &Scene {
        &self.scenes[self.current_scene_index]
    }

    pub fn selected_layer_id(&self) -> Option<Uuid> {
        self.selected_layer_id
    }

    pub fn selected_layer(&self) -> Option<&Layer> {
        self.selected_layer_id
            .and_then(|id| self.current_scene().layer(id))
    }

    pub fn history(&self) -> &EditHistory {
        &self.history
    }

    pub fn playback(&self) -> &Playback {
        &self.playback
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Notifications queued since the last call.
    pub fn take_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }

    /// Forward queued notifications to `notifier`.
    pub fn flush_notifications(&mut self, notifier: &mut dyn Notifier) {
        for notification in self.take_notifications() {
            notifier.notify(notification);
        }
    }

    // ── Navigation ──────────────────────────────────────────────

    /// Focus another scene. Clears the selection and rewinds playback.
    pub fn select_scene(&mut self, index: usize) -> bool {
        if index >= self.scenes.len() {
            return false;
        }
        if index != self.current_scene_index {
            self.current_scene_index = index;
            self.selected_layer_id = None;
            self.playback.reset();
        }
        true
    }

    pub fn select_layer(&mut self, layer_id: Option<Uuid>) {
        self.selected_layer_id = layer_id;
    }

    // ── Playback ────────────────────────────────────────────────

    pub fn play_pause(&mut self) {
        let duration = self.current_scene().duration;
        self.playback.play_pause(duration);
    }

    pub fn tick(&mut self, delta_ms: f64) -> bool {
        let duration = self.current_scene().duration;
        self.playback.tick(delta_ms, duration)
    }

    pub fn seek(&mut self, time_ms: f64) {
        let duration = self.current_scene().duration;
        self.playback.seek(time_ms, duration);
    }

    // ── Layer edits ─────────────────────────────────────────────

    pub fn add_text_layer(&mut self, data: &AddTextLayerData) -> EditResult {
        let result = ops::add_text_layer(
            &self.scenes,
            self.current_scene_index,
            data,
            &self.config.default_color,
        );
        self.commit_new_layer("Add text layer", result, "Text layer added!")
    }

    pub fn edit_text_layer(&mut self, layer_id: Uuid, patch: &TextLayerPatch) -> EditResult {
        let result = ops::edit_text_layer(&self.scenes, self.current_scene_index, layer_id, patch);
        self.commit("Edit text layer", result, Some("Text layer updated!"))
    }

    pub fn add_image_layer(&mut self, data: &AddImageLayerData) -> EditResult {
        let result = ops::add_image_layer(&self.scenes, self.current_scene_index, data);
        self.commit_new_layer("Add image layer", result, "Image layer added!")
    }

    pub fn edit_image_layer(&mut self, layer_id: Uuid, patch: &ImageLayerPatch) -> EditResult {
        let result = ops::edit_image_layer(&self.scenes, self.current_scene_index, layer_id, patch);
        self.commit("Edit image layer", result, Some("Image layer updated!"))
    }

    /// Pick an image and add it as a layer. Returns `Ok(false)` when the user cancelled.
    pub fn add_image_from(
        &mut self,
        picker: &mut dyn MediaPicker,
        source: ImageSource,
    ) -> Result<bool> {
        let Some(uri) = picker.pick_image(source)? else {
            debug!(?source, "Image pick cancelled");
            return Ok(false);
        };
        let data = AddImageLayerData {
            uri: Some(uri),
            ..Default::default()
        };
        Ok(self.add_image_layer(&data).is_ok())
    }

    pub fn add_shape_layer(&mut self, data: &AddShapeLayerData) -> EditResult {
        let result = ops::add_shape_layer(
            &self.scenes,
            self.current_scene_index,
            data,
            &self.config.default_color,
        );
        self.commit_new_layer("Add shape layer", result, "Shape layer added!")
    }

    pub fn edit_shape_layer(&mut self, layer_id: Uuid, patch: &ShapeLayerPatch) -> EditResult {
        let result = ops::edit_shape_layer(&self.scenes, self.current_scene_index, layer_id, patch);
        self.commit("Edit shape layer", result, Some("Shape layer updated!"))
    }

    pub fn delete_layer(&mut self, layer_id: Uuid) -> EditResult {
        let result = ops::delete_layer(&self.scenes, self.current_scene_index, layer_id);
        self.commit("Delete layer", result, Some("Layer deleted"))?;
        if self.selected_layer_id == Some(layer_id) {
            self.selected_layer_id = None;
        }
        Ok(())
    }

    /// Duplicate a layer and select the copy.
    pub fn duplicate_layer(&mut self, layer_id: Uuid) -> EditResult {
        let result = ops::duplicate_layer_with_offset(
            &self.scenes,
            self.current_scene_index,
            layer_id,
            self.config.duplicate_offset,
        );
        self.commit_new_layer("Duplicate layer", result, "Layer duplicated!")
    }

    pub fn change_layer_order(&mut self, layer_id: Uuid, action: LayerOrderAction) -> EditResult {
        let result =
            ops::change_layer_order(&self.scenes, self.current_scene_index, layer_id, action);
        let message = match action {
            LayerOrderAction::Front => "Layer moved to front",
            LayerOrderAction::Back => "Layer moved to back",
            LayerOrderAction::Up => "Layer moved up",
            LayerOrderAction::Down => "Layer moved down",
        };
        self.commit("Reorder layer", result, Some(message))
    }

    /// Silent: position updates come from gestures.
    pub fn update_layer_position(&mut self, layer_id: Uuid, position: Position) -> EditResult {
        let result = ops::update_layer_position(
            &self.scenes,
            self.current_scene_index,
            layer_id,
            position.x,
            position.y,
        );
        self.commit("Move layer", result, None)
    }

    /// Silent: size updates come from gestures.
    pub fn update_layer_size(&mut self, layer_id: Uuid, size: Size) -> EditResult {
        let result = ops::update_layer_size(
            &self.scenes,
            self.current_scene_index,
            layer_id,
            size.width,
            size.height,
        );
        self.commit("Resize layer", result, None)
    }

    pub fn update_layer_animation(
        &mut self,
        layer_id: Uuid,
        animation: Option<Animation>,
    ) -> EditResult {
        let message = if animation.is_some() {
            "Animation applied to layer!"
        } else {
            "Animation removed from layer"
        };
        let result =
            ops::update_layer_animation(&self.scenes, self.current_scene_index, layer_id, animation);
        self.commit("Animate layer", result, Some(message))
    }

    /// Apply the actions of a committed gesture as one undo step.
    pub fn apply_gesture(&mut self, actions: &[GestureAction]) -> EditResult {
        let index = self.current_scene_index;
        let mut scenes: Option<Vec<Scene>> = None;

        for action in actions {
            let base = scenes.as_deref().unwrap_or(&self.scenes);
            let result = match *action {
                GestureAction::Select(layer_id) => {
                    self.selected_layer_id = Some(layer_id);
                    continue;
                }
                GestureAction::PositionChanged { layer_id, position } => {
                    ops::update_layer_position(base, index, layer_id, position.x, position.y)
                }
                GestureAction::SizeChanged { layer_id, size } => {
                    ops::update_layer_size(base, index, layer_id, size.width, size.height)
                }
            };
            match result.into_result() {
                Ok((updated, _)) => scenes = Some(updated),
                Err(error) => {
                    self.notifications
                        .push(Notification::error(error.to_string()));
                    return Err(error);
                }
            }
        }

        if let Some(updated) = scenes {
            let before = std::mem::replace(&mut self.scenes, updated);
            self.history.push(before, "Transform layer");
        }
        Ok(())
    }

    // ── Scene edits ─────────────────────────────────────────────

    /// Append a scene and focus it.
    pub fn add_scene(&mut self) -> EditResult {
        let result = ops::add_scene(&self.scenes);
        self.commit("Add scene", result, Some("New scene added!"))
    }

    pub fn duplicate_scene(&mut self, index: usize) -> EditResult {
        let result = ops::duplicate_scene(&self.scenes, index);
        self.commit("Duplicate scene", result, Some("Scene duplicated!"))
    }

    pub fn delete_scene(&mut self, index: usize) -> EditResult {
        let result = ops::delete_scene(&self.scenes, index, self.current_scene_index);
        self.commit("Delete scene", result, Some("Scene deleted"))
    }

    /// Set or clear the current scene's audio.
    pub fn update_scene_audio(&mut self, audio: Option<Audio>) -> EditResult {
        let message = if audio.is_some() {
            "Audio added to scene!"
        } else {
            "Audio removed from scene"
        };
        let result = ops::update_scene_audio(&self.scenes, self.current_scene_index, audio);
        self.commit("Scene audio", result, Some(message))
    }

    /// Pick an audio file and attach it to the current scene with `template`'s
    /// volume and fades. Returns `Ok(false)` when the user cancelled.
    pub fn add_audio_from(&mut self, picker: &mut dyn MediaPicker, template: &Audio) -> Result<bool> {
        let Some(uri) = picker.pick_audio()? else {
            debug!("Audio pick cancelled");
            return Ok(false);
        };
        let audio = Audio {
            uri,
            ..template.clone()
        };
        Ok(self.update_scene_audio(Some(audio)).is_ok())
    }

    pub fn update_scene_duration(&mut self, duration_ms: u32) -> EditResult {
        let result = ops::update_scene_duration(&self.scenes, self.current_scene_index, duration_ms);
        self.commit("Scene duration", result, None)
    }

    pub fn update_scene_background(&mut self, background: Background) -> EditResult {
        let result =
            ops::update_scene_background(&self.scenes, self.current_scene_index, background);
        self.commit("Scene background", result, None)
    }

    pub fn update_scene_transition(&mut self, transition: Transition) -> EditResult {
        let result =
            ops::update_scene_transition(&self.scenes, self.current_scene_index, transition);
        self.commit("Scene transition", result, None)
    }

    // ── History ─────────────────────────────────────────────────

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Revert the last edit. Returns its label.
    pub fn undo(&mut self) -> Option<String> {
        let entry = self.history.undo(self.scenes.clone())?;
        self.restore(entry.scenes);
        self.notifications.push(Notification::titled(
            NotificationKind::Info,
            "Undo",
            "Action undone",
        ));
        Some(entry.action)
    }

    /// Re-apply the last undone edit. Returns its label.
    pub fn redo(&mut self) -> Option<String> {
        let entry = self.history.redo(self.scenes.clone())?;
        self.restore(entry.scenes);
        self.notifications.push(Notification::titled(
            NotificationKind::Info,
            "Redo",
            "Action redone",
        ));
        Some(entry.action)
    }

    fn restore(&mut self, scenes: Vec<Scene>) {
        let focused = self.current_scene().id;
        self.scenes = scenes;
        self.current_scene_index = self.current_scene_index.min(self.scenes.len() - 1);
        self.refresh_view(focused);
    }

    /// Bring selection and playback in line with the scenes after an edit.
    ///
    /// A different scene under the focused index drops the selection and
    /// rewinds; the same scene keeps them, clamped to what still exists.
    fn refresh_view(&mut self, previously_focused: Uuid) {
        if self.current_scene().id != previously_focused {
            debug!(scene = %self.current_scene().id, "Focused scene replaced");
            self.selected_layer_id = None;
            self.playback.reset();
            return;
        }
        if self.selected_layer().is_none() {
            self.selected_layer_id = None;
        }
        let duration = self.current_scene().duration;
        self.playback.seek(self.playback.current_time_ms(), duration);
    }

    // ── Commit ──────────────────────────────────────────────────

    fn commit(&mut self, action: &str, result: OperationResult, message: Option<&str>) -> EditResult {
        match result.into_result() {
            Ok((scenes, new_index)) => {
                let focused = self.current_scene().id;
                let before = std::mem::replace(&mut self.scenes, scenes);
                self.history.push(before, action);
                if let Some(index) = new_index {
                    self.select_scene(index);
                }
                self.refresh_view(focused);
                if let Some(message) = message {
                    self.notifications.push(Notification::success(message));
                }
                Ok(())
            }
            Err(error) => {
                self.notifications
                    .push(Notification::error(error.to_string()));
                Err(error)
            }
        }
    }

    /// Commit an add or duplicate and select the new topmost layer.
    fn commit_new_layer(&mut self, action: &str, result: OperationResult, message: &str) -> EditResult {
        self.commit(action, result, Some(message))?;
        self.selected_layer_id = self.current_scene().layers.last().map(|l| l.id);
        Ok(())
    }
}
