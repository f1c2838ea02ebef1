//! Project and export settings types.

use sceneforge_core::{EditorError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use uuid::Uuid;

use crate::scene::Scene;

/// Canvas aspect ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AspectRatio {
    #[serde(rename = "16:9")]
    Landscape16x9,
    #[serde(rename = "9:16")]
    Portrait9x16,
    #[serde(rename = "1:1")]
    Square,
    #[serde(rename = "4:5")]
    Portrait4x5,
}

impl AspectRatio {
    /// Width divided by height.
    pub fn ratio(self) -> f64 {
        match self {
            Self::Landscape16x9 => 16.0 / 9.0,
            Self::Portrait9x16 => 9.0 / 16.0,
            Self::Square => 1.0,
            Self::Portrait4x5 => 4.0 / 5.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Resolution {
    #[serde(rename = "720p")]
    Hd720,
    #[serde(rename = "1080p")]
    Hd1080,
    #[serde(rename = "4k")]
    Uhd4k,
}

impl Resolution {
    pub const ALL: [Resolution; 3] = [Resolution::Hd720, Resolution::Hd1080, Resolution::Uhd4k];

    /// Output height in pixels; width follows from the aspect ratio.
    pub fn height(self) -> u32 {
        match self {
            Self::Hd720 => 720,
            Self::Hd1080 => 1080,
            Self::Uhd4k => 2160,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Hd720 => "720p",
            Self::Hd1080 => "1080p",
            Self::Uhd4k => "4k",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quality {
    Low,
    Medium,
    High,
}

impl Quality {
    pub const ALL: [Quality; 3] = [Quality::Low, Quality::Medium, Quality::High];

    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Mp4,
    Mov,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 2] = [ExportFormat::Mp4, ExportFormat::Mov];

    pub fn extension(self) -> &'static str {
        match self {
            Self::Mp4 => "mp4",
            Self::Mov => "mov",
        }
    }
}

/// Output options handed to the exporter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportSettings {
    pub resolution: Resolution,
    pub format: ExportFormat,
    pub quality: Quality,
    pub include_watermark: bool,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            resolution: Resolution::Hd1080,
            format: ExportFormat::Mp4,
            quality: Quality::High,
            include_watermark: false,
        }
    }
}

/// A video project. Owned and persisted by the host; edited here by value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoProject {
    pub id: Uuid,
    pub template_id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// ISO-8601 timestamp.
    pub created_at: String,
    /// ISO-8601 timestamp.
    pub updated_at: String,
    /// Total duration in milliseconds as last stored by the host.
    pub duration: u64,
    pub thumbnail_url: String,
    pub aspect_ratio: AspectRatio,
    pub scenes: Vec<Scene>,
    pub export_settings: ExportSettings,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder_id: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl VideoProject {
    /// Create a project with a single empty scene.
    pub fn new(title: impl Into<String>, aspect_ratio: AspectRatio) -> Self {
        let scenes = vec![Scene::new()];
        let duration = scenes.iter().map(|s| u64::from(s.duration)).sum();
        Self {
            id: Uuid::new_v4(),
            template_id: String::new(),
            title: title.into(),
            description: None,
            created_at: String::new(),
            updated_at: String::new(),
            duration,
            thumbnail_url: String::new(),
            aspect_ratio,
            scenes,
            export_settings: ExportSettings::default(),
            folder_id: None,
            tags: Vec::new(),
        }
    }

    /// Sum of scene durations in milliseconds.
    pub fn total_duration_ms(&self) -> u64 {
        self.scenes.iter().map(|s| u64::from(s.duration)).sum()
    }

    /// Replace the scene list and refresh the cached duration.
    pub fn set_scenes(&mut self, scenes: Vec<Scene>) {
        self.scenes = scenes;
        self.duration = self.total_duration_ms();
    }

    /// Check the structural invariants: at least one scene, unique layer ids
    /// within each scene.
    pub fn validate(&self) -> Result<()> {
        if self.scenes.is_empty() {
            return Err(EditorError::InvalidParameter(format!(
                "project {} has no scenes",
                self.id
            )));
        }
        for (index, scene) in self.scenes.iter().enumerate() {
            let mut seen = HashSet::with_capacity(scene.layers.len());
            for layer in &scene.layers {
                if !seen.insert(layer.id) {
                    return Err(EditorError::InvalidParameter(format!(
                        "scene {index} contains duplicate layer id {}",
                        layer.id
                    )));
                }
            }
        }
        Ok(())
    }
}
