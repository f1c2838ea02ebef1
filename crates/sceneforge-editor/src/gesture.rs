//! Drag and resize gestures over a layer.
//!
//! A layer has five handles: its body (move) and four corners (resize).
//! Gestures work on a pixel snapshot taken when a handle is grabbed; the live
//! rectangle follows the pointer unclamped, and committing converts the final
//! rectangle back to percentages as [`GestureAction`]s for the session.
//!
//! Only one handle owns the touch sequence at a time. The first handle to
//! begin wins; events from the others are dropped until it ends or is
//! cancelled.

use glam::DVec2;
use sceneforge_core::{CanvasSize, PixelRect, Position, Size};
use tracing::debug;
use uuid::Uuid;

// ── Handles ─────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomLeft,
        Corner::BottomRight,
    ];

    /// Growth direction per axis: dragging by `sign * d` grows the layer by `d`.
    fn sign(self) -> DVec2 {
        match self {
            Self::TopLeft => DVec2::new(-1.0, -1.0),
            Self::TopRight => DVec2::new(1.0, -1.0),
            Self::BottomLeft => DVec2::new(-1.0, 1.0),
            Self::BottomRight => DVec2::new(1.0, 1.0),
        }
    }

    fn moves_left_edge(self) -> bool {
        matches!(self, Self::TopLeft | Self::BottomLeft)
    }

    fn moves_top_edge(self) -> bool {
        matches!(self, Self::TopLeft | Self::TopRight)
    }
}

/// Which part of the layer a gesture grabbed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Handle {
    Move,
    Resize(Corner),
}

/// Effect a gesture asks the session to apply.
#[derive(Debug, Clone, PartialEq)]
pub enum GestureAction {
    Select(Uuid),
    PositionChanged { layer_id: Uuid, position: Position },
    SizeChanged { layer_id: Uuid, size: Size },
}

// ── State ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
enum GestureState {
    Idle,
    Active { handle: Handle, start: PixelRect },
}

/// Gesture state for one layer on one canvas.
#[derive(Debug, Clone)]
pub struct LayerGestures {
    layer_id: Uuid,
    canvas: CanvasSize,
    min_size_px: f64,
    state: GestureState,
    /// Rectangle to draw while a gesture is running.
    live: PixelRect,
}

impl LayerGestures {
    pub fn new(layer_id: Uuid, canvas: CanvasSize, min_size_px: f64) -> Self {
        Self {
            layer_id,
            canvas,
            min_size_px,
            state: GestureState::Idle,
            live: PixelRect::default(),
        }
    }

    pub fn layer_id(&self) -> Uuid {
        self.layer_id
    }

    pub fn canvas(&self) -> CanvasSize {
        self.canvas
    }

    /// Handle currently owning the touch sequence.
    pub fn active_handle(&self) -> Option<Handle> {
        match self.state {
            GestureState::Idle => None,
            GestureState::Active { handle, .. } => Some(handle),
        }
    }

    pub fn is_active(&self) -> bool {
        self.active_handle().is_some()
    }

    /// Canvas resized (layout change). Ignored mid-gesture.
    pub fn set_canvas(&mut self, canvas: CanvasSize) {
        if !self.is_active() {
            self.canvas = canvas;
        }
    }

    /// Rectangle of the layer as it should be drawn right now.
    ///
    /// Outside a gesture this is the stored placement converted to pixels.
    pub fn frame(&self, position: Position, size: Size) -> PixelRect {
        match self.state {
            GestureState::Idle => PixelRect::from_layer(self.canvas, position, size),
            GestureState::Active { .. } => self.live,
        }
    }

    /// Grab `handle`. Snapshots the layer's current placement.
    ///
    /// Returns no actions when another handle already owns the sequence.
    pub fn begin(&mut self, handle: Handle, position: Position, size: Size) -> Vec<GestureAction> {
        if let GestureState::Active { handle: owner, .. } = self.state {
            debug!(layer = %self.layer_id, ?handle, ?owner, "Gesture ignored, handle busy");
            return Vec::new();
        }

        let start = PixelRect::from_layer(self.canvas, position, size);
        self.state = GestureState::Active { handle, start };
        self.live = start;

        match handle {
            Handle::Move => vec![GestureAction::Select(self.layer_id)],
            Handle::Resize(_) => Vec::new(),
        }
    }

    /// Pointer moved; `translation` is cumulative since [`begin`](Self::begin).
    ///
    /// Returns the new live rectangle, or `None` if `handle` does not own the sequence.
    pub fn update(&mut self, handle: Handle, translation: DVec2) -> Option<PixelRect> {
        let start = self.owned_start(handle)?;
        self.live = match handle {
            Handle::Move => PixelRect::new(start.origin + translation, start.size),
            Handle::Resize(corner) => self.resize(start, corner, translation),
        };
        Some(self.live)
    }

    /// Release `handle` and commit the live rectangle.
    ///
    /// Move commits clamp the origin into the canvas. Resize commits emit the
    /// size before the position.
    pub fn end(&mut self, handle: Handle) -> Vec<GestureAction> {
        let Some(start) = self.owned_start(handle) else {
            return Vec::new();
        };
        self.state = GestureState::Idle;

        let actions = match handle {
            Handle::Move => {
                let origin = self.live.clamped_origin(self.canvas);
                vec![GestureAction::PositionChanged {
                    layer_id: self.layer_id,
                    position: self.canvas.pixels_to_position(origin),
                }]
            }
            Handle::Resize(_) => {
                let (position, size) = self.live.to_layer(self.canvas);
                vec![
                    GestureAction::SizeChanged {
                        layer_id: self.layer_id,
                        size,
                    },
                    GestureAction::PositionChanged {
                        layer_id: self.layer_id,
                        position,
                    },
                ]
            }
        };
        debug!(
            layer = %self.layer_id,
            ?handle,
            from = ?start.origin,
            to = ?self.live.origin,
            "Gesture committed"
        );
        actions
    }

    /// Abort the running gesture without committing. The owning handle is released.
    pub fn cancel(&mut self) {
        if let GestureState::Active { start, .. } = self.state {
            self.live = start;
            self.state = GestureState::Idle;
        }
    }

    fn owned_start(&self, handle: Handle) -> Option<PixelRect> {
        match self.state {
            GestureState::Active { handle: owner, start } if owner == handle => Some(start),
            _ => None,
        }
    }

    /// New rectangle for a corner drag.
    ///
    /// Each dimension is floored at the minimum size, then capped at the room
    /// left between the snapshot origin and the canvas edge. Dragging a left
    /// or top corner moves that edge, pinned at 0.
    fn resize(&self, start: PixelRect, corner: Corner, translation: DVec2) -> PixelRect {
        let room = self.canvas.extent() - start.origin;
        let grown = start.size + corner.sign() * translation;
        let size = grown.max(DVec2::splat(self.min_size_px)).min(room);

        let shift = start.size - size;
        let mut origin = start.origin;
        if corner.moves_left_edge() {
            origin.x = (start.origin.x + shift.x).max(0.0);
        }
        if corner.moves_top_edge() {
            origin.y = (start.origin.y + shift.y).max(0.0);
        }
        PixelRect::new(origin, size)
    }
}
