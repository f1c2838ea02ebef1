//! Snapshot undo/redo history.
//!
//! Each entry stores the scene list as it was before an edit, labelled with
//! the action that replaced it. Undo hands the caller that snapshot and keeps
//! the caller's current scenes for redo.

use sceneforge_core::limits::HISTORY_DEPTH;

use crate::scene::Scene;

/// A labelled scene snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub action: String,
    pub scenes: Vec<Scene>,
}

/// Bounded undo/redo stacks of scene snapshots.
#[derive(Debug, Clone)]
pub struct EditHistory {
    /// Most recent last.
    undo: Vec<HistoryEntry>,
    /// Most recent last.
    redo: Vec<HistoryEntry>,
    max_depth: usize,
}

impl EditHistory {
    pub fn new(max_depth: usize) -> Self {
        Self {
            undo: Vec::new(),
            redo: Vec::new(),
            max_depth: max_depth.max(1),
        }
    }

    /// Record the scenes as they were before `action`. Clears redo.
    pub fn push(&mut self, before: Vec<Scene>, action: impl Into<String>) {
        self.redo.clear();
        self.undo.push(HistoryEntry {
            action: action.into(),
            scenes: before,
        });
        if self.undo.len() > self.max_depth {
            self.undo.remove(0);
        }
    }

    /// Step back. `current` is parked on the redo stack; the previous
    /// snapshot is returned with the label of the action being undone.
    pub fn undo(&mut self, current: Vec<Scene>) -> Option<HistoryEntry> {
        let entry = self.undo.pop()?;
        self.redo.push(HistoryEntry {
            action: entry.action.clone(),
            scenes: current,
        });
        Some(entry)
    }

    /// Step forward again after an undo.
    pub fn redo(&mut self, current: Vec<Scene>) -> Option<HistoryEntry> {
        let entry = self.redo.pop()?;
        self.undo.push(HistoryEntry {
            action: entry.action.clone(),
            scenes: current,
        });
        Some(entry)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    pub fn undo_count(&self) -> usize {
        self.undo.len()
    }

    pub fn redo_count(&self) -> usize {
        self.redo.len()
    }

    /// Label of the action the next undo reverts.
    pub fn undo_label(&self) -> Option<&str> {
        self.undo.last().map(|e| e.action.as_str())
    }

    /// Label of the action the next redo re-applies.
    pub fn redo_label(&self) -> Option<&str> {
        self.redo.last().map(|e| e.action.as_str())
    }

    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }
}

impl Default for EditHistory {
    fn default() -> Self {
        Self::new(HISTORY_DEPTH)
    }
}
