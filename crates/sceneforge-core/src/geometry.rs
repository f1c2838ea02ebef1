//! Layer geometry.
//!
//! Layers store their placement as percentages of the canvas (0–100 on each
//! axis) so a project renders the same at any resolution. Interactive code
//! works in pixels; [`CanvasSize`] converts between the two spaces.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::error::{EditorError, Result};

/// Top-left corner of a layer, in percent of canvas width/height.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Shift the position by `dx`/`dy` percent.
    #[inline]
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// Layer extent, in percent of canvas width/height.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Pixel dimensions of the preview canvas a gesture runs on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasSize {
    width: f64,
    height: f64,
}

impl CanvasSize {
    /// Create a canvas size. Both dimensions must be finite and positive,
    /// otherwise percentage conversion would divide by zero.
    pub fn new(width: f64, height: f64) -> Result<Self> {
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(EditorError::InvalidParameter(format!(
                "canvas size must be positive, got {width}x{height}"
            )));
        }
        Ok(Self { width, height })
    }

    #[inline]
    pub fn width(self) -> f64 {
        self.width
    }

    #[inline]
    pub fn height(self) -> f64 {
        self.height
    }

    /// Canvas extent as a vector.
    #[inline]
    pub fn extent(self) -> DVec2 {
        DVec2::new(self.width, self.height)
    }

    /// `percent / 100 * dimension` on each axis.
    pub fn position_to_pixels(self, position: Position) -> DVec2 {
        DVec2::new(position.x, position.y) / 100.0 * self.extent()
    }

    pub fn size_to_pixels(self, size: Size) -> DVec2 {
        DVec2::new(size.width, size.height) / 100.0 * self.extent()
    }

    /// Inverse of [`position_to_pixels`](Self::position_to_pixels).
    pub fn pixels_to_position(self, pixels: DVec2) -> Position {
        let pct = pixels / self.extent() * 100.0;
        Position::new(pct.x, pct.y)
    }

    pub fn pixels_to_size(self, pixels: DVec2) -> Size {
        let pct = pixels / self.extent() * 100.0;
        Size::new(pct.x, pct.y)
    }
}

/// A layer's on-canvas rectangle in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PixelRect {
    pub origin: DVec2,
    pub size: DVec2,
}

impl PixelRect {
    #[inline]
    pub const fn new(origin: DVec2, size: DVec2) -> Self {
        Self { origin, size }
    }

    /// Pixel rectangle of a layer stored in percentages.
    pub fn from_layer(canvas: CanvasSize, position: Position, size: Size) -> Self {
        Self {
            origin: canvas.position_to_pixels(position),
            size: canvas.size_to_pixels(size),
        }
    }

    /// Origin pulled back into `[0, canvas - size]` on each axis independently.
    ///
    /// A layer larger than the canvas on some axis pins to 0 on that axis.
    pub fn clamped_origin(self, canvas: CanvasSize) -> DVec2 {
        let max = canvas.extent() - self.size;
        DVec2::new(
            self.origin.x.min(max.x).max(0.0),
            self.origin.y.min(max.y).max(0.0),
        )
    }

    /// Convert back to percentage position and size.
    pub fn to_layer(self, canvas: CanvasSize) -> (Position, Size) {
        (
            canvas.pixels_to_position(self.origin),
            canvas.pixels_to_size(self.size),
        )
    }
}
