//! Z-order changes.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{edit_scene, find_layer};
use crate::result::OperationResult;
use crate::scene::Scene;

/// Where to move a layer in the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayerOrderAction {
    /// Topmost.
    Front,
    /// Bottommost.
    Back,
    /// One step towards the top.
    Up,
    /// One step towards the bottom.
    Down,
}

impl LayerOrderAction {
    pub const ALL: [LayerOrderAction; 4] = [
        LayerOrderAction::Front,
        LayerOrderAction::Back,
        LayerOrderAction::Up,
        LayerOrderAction::Down,
    ];

    /// Index the layer ends up at, given its current index and the last index.
    pub fn target_index(self, current: usize, last: usize) -> usize {
        match self {
            Self::Front => last,
            Self::Back => 0,
            Self::Up => (current + 1).min(last),
            Self::Down => current.saturating_sub(1),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Front => "front",
            Self::Back => "back",
            Self::Up => "up",
            Self::Down => "down",
        }
    }
}

impl std::str::FromStr for LayerOrderAction {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|action| action.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown order action: {s}"))
    }
}

/// Move a layer within its scene's stack. Moving past a boundary is a successful no-op.
pub fn change_layer_order(
    scenes: &[Scene],
    scene_index: usize,
    layer_id: Uuid,
    action: LayerOrderAction,
) -> OperationResult {
    let outcome = edit_scene(scenes, scene_index, |scene| {
        let current = find_layer(scene, layer_id)?;
        let last = scene.layers.len() - 1;
        let target = action.target_index(current, last);
        if target != current {
            let layer = scene.layers.remove(current);
            scene.layers.insert(target, layer);
        }
        Ok(())
    });
    OperationResult::settle("change_layer_order", scenes, outcome.map(Into::into))
}
