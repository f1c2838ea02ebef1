//! Editor form state.
//!
//! Each form is seeded from an existing value (edit) or from defaults (add),
//! mutated field by field by the UI, and turned into operation input.

use sceneforge_core::Easing;
use sceneforge_scene::{
    AddImageLayerData, AddShapeLayerData, AddTextLayerData, Animation, AnimationKind, Audio,
    ExportFormat, ExportSettings, FontWeight, ImageLayerPatch, Layer, Quality, Resolution,
    ShapeKind, ShapeLayerPatch, TextAlign, TextLayerPatch, TransformPatch, VideoProject,
};

use crate::export::format_size_mb;
use crate::presets;

// ── Text ────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct TextLayerForm {
    pub text: String,
    pub font_size: f64,
    pub font_family: String,
    pub font_weight: FontWeight,
    pub color: String,
    pub text_align: TextAlign,
}

impl TextLayerForm {
    /// Blank form; `default_color` comes from the editor config.
    pub fn new(default_color: &str) -> Self {
        Self {
            text: String::new(),
            font_size: presets::DEFAULT_FONT_SIZE,
            font_family: presets::DEFAULT_FONT_FAMILY.to_string(),
            font_weight: presets::DEFAULT_FONT_WEIGHT,
            color: default_color.to_string(),
            text_align: TextAlign::Center,
        }
    }

    /// Form pre-filled from a text layer. Other layer kinds give a blank form.
    pub fn from_layer(layer: &Layer, default_color: &str) -> Self {
        match layer.as_text() {
            Some(text) => Self {
                text: text.content.clone(),
                font_size: text.font_size,
                font_family: text.font_family.clone(),
                font_weight: text.font_weight,
                color: text.color.clone(),
                text_align: text.text_align,
            },
            None => Self::new(default_color),
        }
    }

    pub fn is_valid(&self) -> bool {
        !self.text.trim().is_empty()
    }

    pub fn to_add_data(&self) -> AddTextLayerData {
        AddTextLayerData {
            content: Some(self.text.clone()),
            font_size: Some(self.font_size),
            font_family: Some(self.font_family.clone()),
            font_weight: Some(self.font_weight),
            color: Some(self.color.clone()),
            text_align: Some(self.text_align),
            ..Default::default()
        }
    }

    pub fn to_patch(&self) -> TextLayerPatch {
        TextLayerPatch {
            content: Some(self.text.clone()),
            font_size: Some(self.font_size),
            font_family: Some(self.font_family.clone()),
            font_weight: Some(self.font_weight),
            color: Some(self.color.clone()),
            text_align: Some(self.text_align),
            transform: TransformPatch::default(),
        }
    }
}

// ── Image ───────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct ImageLayerForm {
    pub image_uri: String,
    pub opacity: f64,
}

impl Default for ImageLayerForm {
    fn default() -> Self {
        Self {
            image_uri: String::new(),
            opacity: presets::DEFAULT_IMAGE_OPACITY,
        }
    }
}

impl ImageLayerForm {
    pub fn from_layer(layer: &Layer) -> Self {
        match layer.as_image() {
            Some(image) => Self {
                image_uri: image.uri.clone(),
                opacity: layer.opacity,
            },
            None => Self::default(),
        }
    }

    pub fn is_valid(&self) -> bool {
        !self.image_uri.is_empty()
    }

    pub fn to_add_data(&self) -> AddImageLayerData {
        AddImageLayerData {
            uri: Some(self.image_uri.clone()),
            opacity: Some(self.opacity),
            ..Default::default()
        }
    }

    pub fn to_patch(&self) -> ImageLayerPatch {
        ImageLayerPatch {
            uri: Some(self.image_uri.clone()),
            transform: TransformPatch {
                opacity: Some(self.opacity),
                ..Default::default()
            },
        }
    }
}

// ── Shape ───────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct ShapeLayerForm {
    pub shape: ShapeKind,
    pub fill_color: String,
    pub border_color: String,
    pub border_width: f64,
    pub opacity: f64,
}

impl ShapeLayerForm {
    /// Blank form; `border_color` is the theme's foreground colour.
    pub fn new(border_color: &str) -> Self {
        Self {
            shape: ShapeKind::Rectangle,
            fill_color: presets::DEFAULT_SHAPE_FILL.to_string(),
            border_color: border_color.to_string(),
            border_width: presets::DEFAULT_BORDER_WIDTH,
            opacity: presets::DEFAULT_OPACITY,
        }
    }

    pub fn from_layer(layer: &Layer, border_color: &str) -> Self {
        match layer.as_shape() {
            Some(shape) => Self {
                shape: shape.shape,
                fill_color: shape.fill_color.clone(),
                border_color: shape
                    .border_color
                    .clone()
                    .unwrap_or_else(|| border_color.to_string()),
                border_width: shape.border_width.unwrap_or(presets::DEFAULT_BORDER_WIDTH),
                opacity: layer.opacity,
            },
            None => Self::new(border_color),
        }
    }

    pub fn to_add_data(&self) -> AddShapeLayerData {
        AddShapeLayerData {
            shape: Some(self.shape),
            fill_color: Some(self.fill_color.clone()),
            border_color: Some(self.border_color.clone()),
            border_width: Some(self.border_width),
            opacity: Some(self.opacity),
            ..Default::default()
        }
    }

    pub fn to_patch(&self) -> ShapeLayerPatch {
        ShapeLayerPatch {
            shape: Some(self.shape),
            fill_color: Some(self.fill_color.clone()),
            border_color: Some(Some(self.border_color.clone())),
            border_width: Some(Some(self.border_width)),
            transform: TransformPatch {
                opacity: Some(self.opacity),
                ..Default::default()
            },
        }
    }
}

// ── Animation ───────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationForm {
    pub kind: AnimationKind,
    pub duration: u32,
    pub delay: u32,
    pub easing: Easing,
}

impl Default for AnimationForm {
    fn default() -> Self {
        Self {
            kind: AnimationKind::Fade,
            duration: presets::DEFAULT_DURATION,
            delay: presets::DEFAULT_DELAY,
            easing: Easing::EaseInOut,
        }
    }
}

impl AnimationForm {
    pub fn from_animation(animation: Option<&Animation>) -> Self {
        let defaults = Self::default();
        match animation {
            Some(anim) => Self {
                kind: anim.kind,
                duration: anim.duration,
                delay: anim.delay.unwrap_or(defaults.delay),
                easing: anim.easing.unwrap_or(defaults.easing),
            },
            None => defaults,
        }
    }

    pub fn to_animation(&self) -> Animation {
        Animation {
            kind: self.kind,
            duration: self.duration,
            delay: Some(self.delay),
            easing: Some(self.easing),
        }
    }
}

// ── Audio ───────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct AudioForm {
    pub audio_uri: String,
    pub volume: f64,
    /// Milliseconds.
    pub fade_in: u32,
    /// Milliseconds.
    pub fade_out: u32,
}

impl Default for AudioForm {
    fn default() -> Self {
        Self {
            audio_uri: String::new(),
            volume: presets::DEFAULT_VOLUME,
            fade_in: presets::DEFAULT_FADE_IN,
            fade_out: presets::DEFAULT_FADE_OUT,
        }
    }
}

impl AudioForm {
    pub fn from_audio(audio: Option<&Audio>) -> Self {
        let defaults = Self::default();
        match audio {
            Some(audio) => Self {
                audio_uri: audio.uri.clone(),
                volume: audio.volume,
                fade_in: audio.fade_in.unwrap_or(defaults.fade_in),
                fade_out: audio.fade_out.unwrap_or(defaults.fade_out),
            },
            None => defaults,
        }
    }

    pub fn is_valid(&self) -> bool {
        !self.audio_uri.is_empty()
    }

    /// Audio track starting with the scene.
    pub fn to_audio(&self) -> Audio {
        Audio {
            uri: self.audio_uri.clone(),
            volume: self.volume,
            start_time: 0,
            fade_in: Some(self.fade_in),
            fade_out: Some(self.fade_out),
        }
    }
}

// ── Export ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExportForm {
    pub resolution: Resolution,
    pub quality: Quality,
    pub format: ExportFormat,
    pub include_watermark: bool,
}

impl Default for ExportForm {
    fn default() -> Self {
        let settings = ExportSettings::default();
        Self {
            resolution: settings.resolution,
            quality: settings.quality,
            format: settings.format,
            include_watermark: settings.include_watermark,
        }
    }
}

impl ExportForm {
    pub fn to_settings(&self) -> ExportSettings {
        ExportSettings {
            resolution: self.resolution,
            format: self.format,
            quality: self.quality,
            include_watermark: self.include_watermark,
        }
    }

    /// Project length in seconds.
    pub fn project_duration_secs(project: &VideoProject) -> f64 {
        project.total_duration_ms() as f64 / 1000.0
    }

    /// Estimated output size in MB, one decimal.
    pub fn estimated_size(&self, project: &VideoProject) -> String {
        format_size_mb(project.total_duration_ms(), self.resolution, self.quality)
    }
}
