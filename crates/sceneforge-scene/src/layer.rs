//! Layer types.
//!
//! A layer is a positioned, sized visual element inside a scene. The fields
//! every layer has live on [`Layer`]; the variant-specific payload lives in
//! [`LayerKind`]. On the wire the payload is flattened next to the common
//! fields and discriminated by a `"type"` key.

use sceneforge_core::{Easing, Position, Size};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

// ── Animation ───────────────────────────────────────────────────

/// Entrance animation style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationKind {
    Fade,
    Slide,
    Bounce,
    Zoom,
    Rotate,
    None,
}

impl AnimationKind {
    pub const ALL: [AnimationKind; 6] = [
        AnimationKind::None,
        AnimationKind::Fade,
        AnimationKind::Slide,
        AnimationKind::Bounce,
        AnimationKind::Zoom,
        AnimationKind::Rotate,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Fade => "Fade",
            Self::Slide => "Slide",
            Self::Bounce => "Bounce",
            Self::Zoom => "Zoom",
            Self::Rotate => "Rotate",
            Self::None => "None",
        }
    }
}

/// Animation attached to a layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Animation {
    #[serde(rename = "type")]
    pub kind: AnimationKind,
    /// Duration in milliseconds.
    pub duration: u32,
    /// Delay before the animation starts, in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delay: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub easing: Option<Easing>,
}

impl Animation {
    /// The fade-in every newly added layer starts with.
    pub fn default_fade() -> Self {
        Self {
            kind: AnimationKind::Fade,
            duration: 500,
            delay: None,
            easing: Some(Easing::EaseInOut),
        }
    }

    /// Eased progress (0..=1) of the animation `elapsed_ms` into the scene.
    ///
    /// `None` animations are always complete. A missing easing is linear.
    pub fn progress_at(&self, elapsed_ms: f64) -> f64 {
        if self.kind == AnimationKind::None {
            return 1.0;
        }
        let local = elapsed_ms - f64::from(self.delay.unwrap_or(0));
        if local < 0.0 {
            return 0.0;
        }
        if self.duration == 0 {
            return 1.0;
        }
        let t = (local / f64::from(self.duration)).min(1.0);
        self.easing.unwrap_or(Easing::Linear).apply(t)
    }
}

// ── Variant payloads ────────────────────────────────────────────

/// Font weight; numeric weights serialize as strings ("100".."900").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FontWeight {
    #[serde(rename = "normal")]
    Normal,
    #[serde(rename = "bold")]
    Bold,
    #[serde(rename = "100")]
    W100,
    #[serde(rename = "200")]
    W200,
    #[serde(rename = "300")]
    W300,
    #[serde(rename = "400")]
    W400,
    #[serde(rename = "500")]
    W500,
    #[serde(rename = "600")]
    W600,
    #[serde(rename = "700")]
    W700,
    #[serde(rename = "800")]
    W800,
    #[serde(rename = "900")]
    W900,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Rectangle,
    Circle,
    Triangle,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 3] = [ShapeKind::Rectangle, ShapeKind::Circle, ShapeKind::Triangle];

    pub fn label(self) -> &'static str {
        match self {
            Self::Rectangle => "Rectangle",
            Self::Circle => "Circle",
            Self::Triangle => "Triangle",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextContent {
    pub content: String,
    pub font_size: f64,
    pub font_family: String,
    pub font_weight: FontWeight,
    pub color: String,
    pub text_align: TextAlign,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageContent {
    pub uri: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoContent {
    pub uri: String,
    /// Trim window start, milliseconds into the source.
    pub start_time: u32,
    /// Trim window end, milliseconds into the source.
    pub end_time: u32,
    pub volume: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeContent {
    pub shape: ShapeKind,
    pub fill_color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_width: Option<f64>,
}

// ── Layer ───────────────────────────────────────────────────────

/// Variant-specific layer payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum LayerKind {
    Text(TextContent),
    Image(ImageContent),
    Video(VideoContent),
    Shape(ShapeContent),
}

/// Discriminant of [`LayerKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayerType {
    Text,
    Image,
    Video,
    Shape,
}

impl fmt::Display for LayerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Text => "text",
            Self::Image => "image",
            Self::Video => "video",
            Self::Shape => "shape",
        })
    }
}

/// A visual element of a scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    pub id: Uuid,
    /// Top-left corner in percent of the canvas.
    pub position: Position,
    /// Extent in percent of the canvas.
    pub size: Size,
    /// Rotation in degrees.
    pub rotation: f64,
    /// 0.0 (transparent) ..= 1.0 (opaque).
    pub opacity: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation: Option<Animation>,
    #[serde(flatten)]
    pub kind: LayerKind,
}

impl Layer {
    /// Create a layer with a fresh id, no rotation, full opacity and no animation.
    pub fn new(kind: LayerKind, position: Position, size: Size) -> Self {
        Self {
            id: Uuid::new_v4(),
            position,
            size,
            rotation: 0.0,
            opacity: 1.0,
            animation: None,
            kind,
        }
    }

    pub fn layer_type(&self) -> LayerType {
        match self.kind {
            LayerKind::Text(_) => LayerType::Text,
            LayerKind::Image(_) => LayerType::Image,
            LayerKind::Video(_) => LayerType::Video,
            LayerKind::Shape(_) => LayerType::Shape,
        }
    }

    /// Field-by-field copy carrying a newly generated id.
    pub fn with_new_id(&self) -> Self {
        Self {
            id: Uuid::new_v4(),
            position: self.position,
            size: self.size,
            rotation: self.rotation,
            opacity: self.opacity,
            animation: self.animation.clone(),
            kind: self.kind.clone(),
        }
    }

    pub fn as_text(&self) -> Option<&TextContent> {
        match &self.kind {
            LayerKind::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_image(&self) -> Option<&ImageContent> {
        match &self.kind {
            LayerKind::Image(image) => Some(image),
            _ => None,
        }
    }

    pub fn as_shape(&self) -> Option<&ShapeContent> {
        match &self.kind {
            LayerKind::Shape(shape) => Some(shape),
            _ => None,
        }
    }

    /// Short human-readable summary, e.g. for layer lists.
    pub fn describe(&self) -> String {
        match &self.kind {
            LayerKind::Text(text) => format!("Text \"{}\"", text.content),
            LayerKind::Image(image) => format!("Image {}", image.uri),
            LayerKind::Video(video) => format!("Video {}", video.uri),
            LayerKind::Shape(shape) => format!("Shape {}", shape.shape.label()),
        }
    }
}
