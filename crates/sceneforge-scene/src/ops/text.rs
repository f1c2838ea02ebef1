//! Text layer operations.

use sceneforge_core::{Position, Size};
use uuid::Uuid;

use super::{edit_layer, edit_scene, Placement, TransformPatch};
use crate::layer::{FontWeight, LayerKind, LayerType, TextAlign, TextContent};
use crate::result::{OperationError, OperationResult};
use crate::scene::Scene;

const DEFAULT_POSITION: Position = Position::new(10.0, 40.0);
const DEFAULT_SIZE: Size = Size::new(80.0, 20.0);
const DEFAULT_FONT_SIZE: f64 = 48.0;
const DEFAULT_FONT_FAMILY: &str = "System";

/// Caller-supplied fields for a new text layer; unset fields use defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddTextLayerData {
    pub content: Option<String>,
    pub font_size: Option<f64>,
    pub font_family: Option<String>,
    pub font_weight: Option<FontWeight>,
    pub color: Option<String>,
    pub text_align: Option<TextAlign>,
    pub placement: Placement,
}

/// Partial update of a text layer; `Some` fields replace, `None` fields are kept.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextLayerPatch {
    pub content: Option<String>,
    pub font_size: Option<f64>,
    pub font_family: Option<String>,
    pub font_weight: Option<FontWeight>,
    pub color: Option<String>,
    pub text_align: Option<TextAlign>,
    pub transform: TransformPatch,
}

impl TextLayerPatch {
    fn apply(&self, text: &mut TextContent) {
        if let Some(content) = &self.content {
            text.content = content.clone();
        }
        if let Some(font_size) = self.font_size {
            text.font_size = font_size;
        }
        if let Some(font_family) = &self.font_family {
            text.font_family = font_family.clone();
        }
        if let Some(font_weight) = self.font_weight {
            text.font_weight = font_weight;
        }
        if let Some(color) = &self.color {
            text.color = color.clone();
        }
        if let Some(text_align) = self.text_align {
            text.text_align = text_align;
        }
    }
}

/// Append a text layer on top of the scene's stack.
///
/// `default_color` is used when `data.color` is unset.
pub fn add_text_layer(
    scenes: &[Scene],
    scene_index: usize,
    data: &AddTextLayerData,
    default_color: &str,
) -> OperationResult {
    let outcome = edit_scene(scenes, scene_index, |scene| {
        let text = TextContent {
            content: data.content.clone().unwrap_or_default(),
            font_size: data.font_size.unwrap_or(DEFAULT_FONT_SIZE),
            font_family: data
                .font_family
                .clone()
                .unwrap_or_else(|| DEFAULT_FONT_FAMILY.to_string()),
            font_weight: data.font_weight.unwrap_or(FontWeight::Bold),
            color: data.color.clone().unwrap_or_else(|| default_color.to_string()),
            text_align: data.text_align.unwrap_or(TextAlign::Center),
        };
        let layer = data
            .placement
            .place(LayerKind::Text(text), DEFAULT_POSITION, DEFAULT_SIZE, 1.0);
        scene.layers.push(layer);
        Ok(())
    });
    OperationResult::settle("add_text_layer", scenes, outcome.map(Into::into))
}

/// Merge `patch` into the text layer `layer_id`.
pub fn edit_text_layer(
    scenes: &[Scene],
    scene_index: usize,
    layer_id: Uuid,
    patch: &TextLayerPatch,
) -> OperationResult {
    let outcome = edit_layer(scenes, scene_index, layer_id, |layer| {
        let found = layer.layer_type();
        let LayerKind::Text(text) = &mut layer.kind else {
            return Err(OperationError::LayerKindMismatch {
                expected: LayerType::Text,
                found,
            });
        };
        patch.apply(text);
        patch.transform.apply(layer);
        Ok(())
    });
    OperationResult::settle("edit_text_layer", scenes, outcome.map(Into::into))
}
