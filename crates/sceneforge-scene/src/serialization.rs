//! SceneForge project files.
//!
//! On disk a project is either the envelope written here (format version,
//! project, writer version) or the bare `VideoProject` object the host app
//! stores. Bare projects are accepted and wrapped; they count as format 0.

use std::path::Path;

use sceneforge_core::{EditorError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::project::VideoProject;

/// Envelope format this build writes and the newest it reads.
pub const FORMAT_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectFile {
    pub format_version: u32,
    pub project: VideoProject,
    /// SceneForge version that wrote the file, empty for host projects.
    pub written_by: String,
}

impl ProjectFile {
    pub fn new(project: VideoProject) -> Self {
        Self {
            format_version: FORMAT_VERSION,
            project,
            written_by: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    pub fn to_json(&self) -> Result<Vec<u8>> {
        serde_json::to_vec_pretty(self).map_err(|e| {
            EditorError::Serialization(format!("cannot encode project {}: {e}", self.project.id))
        })
    }

    /// Read an envelope or a bare host project, then check the scene invariants.
    pub fn from_json(data: &[u8]) -> Result<Self> {
        let value: Value = serde_json::from_slice(data)
            .map_err(|e| EditorError::Serialization(format!("not a SceneForge project: {e}")))?;

        let file = if value.get("project").is_some() {
            Self::from_envelope(value)?
        } else {
            Self::from_host_project(value)?
        };
        file.project.validate()?;
        Ok(file)
    }

    fn from_envelope(value: Value) -> Result<Self> {
        let format = value
            .get("formatVersion")
            .and_then(Value::as_u64)
            .ok_or_else(|| {
                EditorError::Serialization("project envelope has no formatVersion".into())
            })?;
        if format > u64::from(FORMAT_VERSION) {
            return Err(EditorError::Serialization(format!(
                "project uses format {format}; this SceneForge reads up to format {FORMAT_VERSION}"
            )));
        }
        serde_json::from_value(value)
            .map_err(|e| EditorError::Serialization(format!("malformed project envelope: {e}")))
    }

    fn from_host_project(value: Value) -> Result<Self> {
        let project: VideoProject = serde_json::from_value(value)
            .map_err(|e| EditorError::Serialization(format!("malformed host project: {e}")))?;
        debug!(project = %project.id, "Wrapping host project");
        Ok(Self {
            format_version: FORMAT_VERSION,
            project,
            written_by: String::new(),
        })
    }

    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_json()?)?;
        debug!(path = %path.display(), scenes = self.project.scenes.len(), "Project written");
        Ok(())
    }

    pub fn load_from_file(path: &Path) -> Result<Self> {
        let file = Self::from_json(&std::fs::read(path)?)?;
        debug!(path = %path.display(), project = %file.project.id, "Project read");
        Ok(file)
    }
}
