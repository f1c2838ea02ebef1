//! SceneForge Editor - view state on top of the scene model
//!
//! Provides the interactive pieces of the editor:
//! - Drag/resize gestures in canvas pixels
//! - Scene playback clock
//! - Editor session with undo/redo and notifications
//! - Form state and picker presets
//! - Export and media-picker boundaries

pub mod export;
pub mod forms;
pub mod gesture;
pub mod media;
pub mod notify;
pub mod playback;
pub mod presets;
pub mod session;

pub use export::{
    ExportError, ExportProgress, ExportResult, ExportSession, ExportStatus, ExportedVideo,
    Exporter, SimulatedExporter,
};
pub use forms::{
    AnimationForm, AudioForm, ExportForm, ImageLayerForm, ShapeLayerForm, TextLayerForm,
};
pub use gesture::{Corner, GestureAction, Handle, LayerGestures};
pub use media::{ImageSource, MediaPicker, StaticPicker};
pub use notify::{LogNotifier, Notification, NotificationKind, Notifier};
pub use playback::Playback;
pub use session::EditorSession;
