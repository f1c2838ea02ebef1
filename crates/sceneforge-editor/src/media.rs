//! Media acquisition boundary.
//!
//! Pickers are platform services (photo library, camera, document picker);
//! the host injects one implementing [`MediaPicker`].

use sceneforge_core::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageSource {
    Gallery,
    Camera,
}

/// Picks media and returns its URI. `Ok(None)` means the user cancelled.
pub trait MediaPicker {
    fn pick_image(&mut self, source: ImageSource) -> Result<Option<String>>;

    fn pick_audio(&mut self) -> Result<Option<String>>;
}

/// Picker returning fixed URIs, for headless hosts and tests.
#[derive(Debug, Clone, Default)]
pub struct StaticPicker {
    pub image: Option<String>,
    pub audio: Option<String>,
}

impl MediaPicker for StaticPicker {
    fn pick_image(&mut self, _source: ImageSource) -> Result<Option<String>> {
        Ok(self.image.clone())
    }

    fn pick_audio(&mut self) -> Result<Option<String>> {
        Ok(self.audio.clone())
    }
}
