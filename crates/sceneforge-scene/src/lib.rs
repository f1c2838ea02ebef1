//! SceneForge Scene - Project data model and edit operations
//!
//! Implements the editable structure of a video project:
//! - Projects containing ordered scenes
//! - Scenes containing an ordered stack of layers (index = z-order)
//! - Immutable edit operations returning an [`OperationResult`]
//! - Snapshot undo/redo history
//! - Versioned project files

pub mod history;
pub mod layer;
pub mod ops;
pub mod project;
pub mod result;
pub mod scene;
pub mod serialization;

pub use history::{EditHistory, HistoryEntry};
pub use layer::{
    Animation, AnimationKind, FontWeight, ImageContent, Layer, LayerKind, LayerType, ShapeContent,
    ShapeKind, TextAlign, TextContent, VideoContent,
};
pub use ops::{
    AddImageLayerData, AddShapeLayerData, AddTextLayerData, ImageLayerPatch, LayerOrderAction,
    Placement, ShapeLayerPatch, TextLayerPatch, TransformPatch,
};
pub use project::{AspectRatio, ExportFormat, ExportSettings, Quality, Resolution, VideoProject};
pub use result::{OperationError, OperationResult};
pub use scene::{Audio, Background, BackgroundKind, Scene, Transition, TransitionKind};
pub use serialization::ProjectFile;
