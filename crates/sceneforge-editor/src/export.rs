//! Export boundary.
//!
//! Encoding is a host service behind [`Exporter`]. [`ExportSession`] tracks
//! one export at a time for the export dialog and reports the outcome through
//! a [`Notifier`].

use sceneforge_scene::{ExportSettings, Quality, Resolution, VideoProject};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::notify::{Notification, NotificationKind, Notifier};

// ── Progress ────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportStatus {
    Preparing,
    Encoding,
    Saving,
    Complete,
    Error,
}

/// Progress snapshot reported by an exporter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportProgress {
    pub status: ExportStatus,
    /// Short phase label for the dialog.
    pub phase: String,
    /// 0..=100.
    pub progress: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_frame: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_frames: Option<u64>,
}

impl ExportProgress {
    pub fn new(status: ExportStatus, phase: impl Into<String>, progress: f64) -> Self {
        Self {
            status,
            phase: phase.into(),
            progress: progress.clamp(0.0, 100.0),
            message: None,
            current_frame: None,
            total_frames: None,
        }
    }

    pub fn with_frames(mut self, current: u64, total: u64) -> Self {
        self.current_frame = Some(current);
        self.total_frames = Some(total);
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

// ── Result ──────────────────────────────────────────────────────

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExportError {
    #[error("{0}")]
    Failed(String),

    #[error("Project has nothing to export")]
    EmptyProject,
}

/// A finished export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportedVideo {
    /// Where the host saved the file, if it exposes one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
}

pub type ExportResult = std::result::Result<ExportedVideo, ExportError>;

/// Video encoder supplied by the host.
pub trait Exporter {
    /// Encode `project` with `settings`, reporting progress as it goes.
    fn export_video(
        &mut self,
        project: &VideoProject,
        settings: &ExportSettings,
        on_progress: &mut dyn FnMut(ExportProgress),
    ) -> ExportResult;
}

// ── Size estimate ───────────────────────────────────────────────

/// Megabytes per second of 1080p high-quality output.
pub const BASE_SIZE_PER_SECOND_MB: f64 = 0.5;

pub fn resolution_multiplier(resolution: Resolution) -> f64 {
    match resolution {
        Resolution::Hd720 => 0.6,
        Resolution::Hd1080 => 1.0,
        Resolution::Uhd4k => 2.0,
    }
}

pub fn quality_multiplier(quality: Quality) -> f64 {
    match quality {
        Quality::Low => 0.5,
        Quality::Medium => 0.75,
        Quality::High => 1.0,
    }
}

/// Rough output size in megabytes.
pub fn estimate_size_mb(duration_ms: u64, resolution: Resolution, quality: Quality) -> f64 {
    let seconds = duration_ms as f64 / 1000.0;
    seconds * BASE_SIZE_PER_SECOND_MB * resolution_multiplier(resolution) * quality_multiplier(quality)
}

/// [`estimate_size_mb`] formatted with one decimal, e.g. `"7.5"`.
pub fn format_size_mb(duration_ms: u64, resolution: Resolution, quality: Quality) -> String {
    format!("{:.1}", estimate_size_mb(duration_ms, resolution, quality))
}

// ── Session ─────────────────────────────────────────────────────

/// State of the export dialog.
#[derive(Debug, Clone, Default)]
pub struct ExportSession {
    progress: Option<ExportProgress>,
}

impl ExportSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Latest progress reported by the running or last export.
    pub fn progress(&self) -> Option<&ExportProgress> {
        self.progress.as_ref()
    }

    /// Export a copy of `project` carrying `settings` and notify the outcome.
    pub fn export(
        &mut self,
        exporter: &mut dyn Exporter,
        project: &VideoProject,
        settings: ExportSettings,
        notifier: &mut dyn Notifier,
    ) -> ExportResult {
        if project.scenes.is_empty() {
            return Err(ExportError::EmptyProject);
        }

        let mut to_export = project.clone();
        to_export.export_settings = settings;

        info!(
            project = %project.id,
            resolution = settings.resolution.label(),
            format = settings.format.extension(),
            "Export started"
        );
        self.progress = None;

        let progress = &mut self.progress;
        let result = exporter.export_video(&to_export, &settings, &mut |update| {
            debug!(status = ?update.status, progress = update.progress, "Export progress");
            *progress = Some(update);
        });

        match &result {
            Ok(video) => {
                info!(project = %project.id, uri = ?video.uri, "Export finished");
                notifier.notify(Notification::titled(
                    NotificationKind::Success,
                    "Export Complete",
                    format!("{} has been exported successfully!", project.title),
                ));
            }
            Err(error) => {
                warn!(project = %project.id, %error, "Export failed");
                notifier.notify(Notification::titled(
                    NotificationKind::Error,
                    "Export Failed",
                    format!("Failed to export {}: {error}", project.title),
                ));
            }
        }
        result
    }

    /// Clear the dialog state after the user dismisses it.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

// ── Simulated exporter ──────────────────────────────────────────

/// Walks the project frame by frame without encoding anything.
#[derive(Debug, Clone)]
pub struct SimulatedExporter {
    pub frame_rate: u32,
    /// Directory prefix of the reported URI.
    pub output_dir: String,
    /// Fail with this message once encoding passes half way.
    pub fail_with: Option<String>,
}

impl SimulatedExporter {
    pub fn new(frame_rate: u32) -> Self {
        Self {
            frame_rate: frame_rate.max(1),
            output_dir: "file:///exports".to_string(),
            fail_with: None,
        }
    }

    pub fn total_frames(&self, project: &VideoProject) -> u64 {
        (project.total_duration_ms() * u64::from(self.frame_rate)).div_ceil(1000)
    }
}

impl Exporter for SimulatedExporter {
    fn export_video(
        &mut self,
        project: &VideoProject,
        settings: &ExportSettings,
        on_progress: &mut dyn FnMut(ExportProgress),
    ) -> ExportResult {
        on_progress(ExportProgress::new(ExportStatus::Preparing, "Preparing", 0.0));

        let total = self.total_frames(project);
        let step = u64::from(self.frame_rate);
        let mut frame = 0;
        while frame < total {
            frame = (frame + step).min(total);
            let encoded = frame as f64 / total as f64;
            if encoded > 0.5 {
                if let Some(message) = &self.fail_with {
                    on_progress(
                        ExportProgress::new(ExportStatus::Error, "Error", encoded * 90.0)
                            .with_message(message.clone()),
                    );
                    return Err(ExportError::Failed(message.clone()));
                }
            }
            on_progress(
                ExportProgress::new(ExportStatus::Encoding, "Encoding", encoded * 90.0)
                    .with_frames(frame, total),
            );
        }

        on_progress(ExportProgress::new(ExportStatus::Saving, "Saving", 95.0));
        let uri = format!(
            "{}/{}.{}",
            self.output_dir,
            project.id,
            settings.format.extension()
        );
        on_progress(ExportProgress::new(ExportStatus::Complete, "Complete", 100.0));
        Ok(ExportedVideo { uri: Some(uri) })
    }
}
