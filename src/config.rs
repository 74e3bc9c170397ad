use crate::document::LinkKeying;
use crate::error::DocumentError;
use crate::node::Position;
use serde::{Deserialize, Serialize};
use std::fs;

/// Size of the drawable canvas area. Dropped and dragged nodes are kept inside it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasBounds {
    pub width: f64,
    pub height: f64,
}

/// Layout and export settings for an editing session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Page coordinates of the canvas' top-left corner.
    pub canvas_offset: Position,
    /// Half the rendered node size; a dropped node is centered on the cursor.
    pub node_half_width: f64,
    pub node_half_height: f64,
    pub canvas_bounds: Option<CanvasBounds>,
    pub link_keying: LinkKeying,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            canvas_offset: Position::default(),
            node_half_width: 60.0,
            node_half_height: 30.0,
            canvas_bounds: None,
            link_keying: LinkKeying::default(),
        }
    }
}

impl EditorConfig {
    pub fn from_json(json: &str) -> Result<Self, DocumentError> {
        serde_json::from_str(json).map_err(|e| DocumentError::JsonParseError(e.to_string()))
    }

    /// Load editor settings from a JSON file. Missing keys fall back to defaults.
    pub fn from_file(path: &str) -> Result<Self, DocumentError> {
        let content = fs::read_to_string(path).map_err(|e| DocumentError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        Self::from_json(&content)
    }

    /// Converts the cursor position of a drop into the new node's canvas position.
    pub fn drop_position(&self, client_x: f64, client_y: f64) -> Position {
        self.contain(Position::new(
            client_x - self.canvas_offset.x - self.node_half_width,
            client_y - self.canvas_offset.y - self.node_half_height,
        ))
    }

    /// Clamps `position` so the whole node stays on the canvas.
    pub fn contain(&self, position: Position) -> Position {
        match self.canvas_bounds {
            Some(bounds) => {
                let max_x = (bounds.width - 2.0 * self.node_half_width).max(0.0);
                let max_y = (bounds.height - 2.0 * self.node_half_height).max(0.0);
                Position::new(position.x.clamp(0.0, max_x), position.y.clamp(0.0, max_y))
            }
            None => position,
        }
    }
}
