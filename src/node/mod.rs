pub mod kind;
pub mod properties;

pub use kind::*;
pub use properties::*;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identity of a node, independent of where it is drawn or where it sits
/// in the node list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub u64);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Canvas coordinates of a node's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A placed block on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub kind: NodeKind,
    pub name: String,
    pub position: Position,
    pub properties: Properties,
}

impl Node {
    /// Creates a node with the kind's label as its name and the kind's default properties.
    pub fn new(id: NodeId, kind: NodeKind, position: Position) -> Self {
        Self {
            id,
            kind,
            name: kind.label().to_string(),
            position,
            properties: Properties::for_kind(kind),
        }
    }
}
