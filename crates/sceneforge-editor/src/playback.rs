//! Scene preview clock.
//!
//! The host drives the clock with [`Playback::tick`] from its frame loop; the
//! clock only ever covers the current scene.

use sceneforge_scene::Layer;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Playback {
    is_playing: bool,
    /// Milliseconds into the current scene.
    current_time_ms: f64,
}

impl Playback {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn current_time_ms(&self) -> f64 {
        self.current_time_ms
    }

    /// Toggle playback. Starting from the end of the scene rewinds first.
    pub fn play_pause(&mut self, scene_duration_ms: u32) {
        if self.is_playing {
            self.is_playing = false;
            return;
        }
        if self.current_time_ms >= f64::from(scene_duration_ms) {
            self.current_time_ms = 0.0;
        }
        self.is_playing = true;
    }

    /// Advance by `delta_ms` while playing, stopping at the scene end.
    ///
    /// Returns `true` when this tick reached the end.
    pub fn tick(&mut self, delta_ms: f64, scene_duration_ms: u32) -> bool {
        if !self.is_playing {
            return false;
        }
        let end = f64::from(scene_duration_ms);
        self.current_time_ms = (self.current_time_ms + delta_ms.max(0.0)).min(end);
        if self.current_time_ms >= end {
            self.is_playing = false;
            return true;
        }
        false
    }

    /// Jump to `time_ms`, clamped into the scene.
    pub fn seek(&mut self, time_ms: f64, scene_duration_ms: u32) {
        self.current_time_ms = time_ms.clamp(0.0, f64::from(scene_duration_ms));
    }

    /// Stop and rewind, e.g. when switching scenes.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Eased entrance progress of `layer` at the current time. Layers without
    /// an animation are fully shown.
    pub fn layer_progress(&self, layer: &Layer) -> f64 {
        layer
            .animation
            .as_ref()
            .map_or(1.0, |anim| anim.progress_at(self.current_time_ms))
    }
}

/// `m:ss` label for a millisecond timestamp, as shown under the scrubber.
pub fn format_time(ms: f64) -> String {
    let total_seconds = (ms.max(0.0) / 1000.0).floor() as u64;
    format!("{}:{:02}", total_seconds / 60, total_seconds % 60)
}
