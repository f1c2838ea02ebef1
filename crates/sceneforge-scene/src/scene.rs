//! Scene types.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::layer::Layer;

/// Default scene length in milliseconds.
pub const DEFAULT_SCENE_DURATION_MS: u32 = 5000;

/// Default transition length in milliseconds.
pub const DEFAULT_TRANSITION_MS: u32 = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundKind {
    Color,
    Gradient,
    Image,
    Video,
}

/// Scene backdrop. `value` is a colour, gradient definition or media URI depending on `kind`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Background {
    #[serde(rename = "type")]
    pub kind: BackgroundKind,
    pub value: String,
}

impl Background {
    pub fn color(value: impl Into<String>) -> Self {
        Self {
            kind: BackgroundKind::Color,
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransitionKind {
    Fade,
    Slide,
    Zoom,
    Wipe,
    None,
}

/// Transition into the next scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    #[serde(rename = "type")]
    pub kind: TransitionKind,
    /// Milliseconds.
    pub duration: u32,
}

/// Background audio of a scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Audio {
    pub uri: String,
    pub volume: f64,
    /// Milliseconds into the scene at which the track starts.
    pub start_time: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fade_in: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fade_out: Option<u32>,
}

/// A timed segment of the project with its own layer stack.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub id: Uuid,
    /// Milliseconds.
    pub duration: u32,
    pub background: Background,
    /// Bottom to top.
    pub layers: Vec<Layer>,
    pub transition: Transition,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio: Option<Audio>,
}

impl Scene {
    /// Empty five-second scene on a black background with a fade transition.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            duration: DEFAULT_SCENE_DURATION_MS,
            background: Background::color("#000000"),
            layers: Vec::new(),
            transition: Transition {
                kind: TransitionKind::Fade,
                duration: DEFAULT_TRANSITION_MS,
            },
            audio: None,
        }
    }

    /// Find a layer by id.
    pub fn layer(&self, id: Uuid) -> Option<&Layer> {
        self.layers.iter().find(|layer| layer.id == id)
    }

    /// Index of a layer in the stack (its z-order).
    pub fn layer_index(&self, id: Uuid) -> Option<usize> {
        self.layers.iter().position(|layer| layer.id == id)
    }

    /// Copy of this scene where the scene and every layer get new ids.
    pub fn with_new_ids(&self) -> Self {
        Self {
            id: Uuid::new_v4(),
            duration: self.duration,
            background: self.background.clone(),
            layers: self.layers.iter().map(Layer::with_new_id).collect(),
            transition: self.transition,
            audio: self.audio.clone(),
        }
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
