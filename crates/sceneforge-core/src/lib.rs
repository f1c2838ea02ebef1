//! SceneForge Core - Foundation types for the layer editor
//!
//! This crate provides the fundamental types shared by every SceneForge crate:
//! - Error type and `Result` alias
//! - Percentage geometry (layer position/size) and pixel-space conversion
//! - Easing curves used by layer animations
//! - Editor configuration

pub mod config;
pub mod easing;
pub mod error;
pub mod geometry;

pub use config::EditorConfig;
pub use easing::{CubicBezier, Easing};
pub use error::{EditorError, Result};
pub use geometry::{CanvasSize, PixelRect, Position, Size};

/// Fixed editing constants shared across crates.
pub mod limits {
    /// Smallest on-canvas layer edge in pixels a resize gesture may produce.
    pub const MIN_LAYER_SIZE_PX: f64 = 50.0;

    /// Offset (in percent) applied to both axes of a duplicated layer.
    pub const DUPLICATE_OFFSET_PERCENT: f64 = 5.0;

    /// Default depth of the undo history.
    pub const HISTORY_DEPTH: usize = 50;
}
