use crate::node::NodeId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A directed connection drawn from one node to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Link {
    pub source: NodeId,
    pub target: NodeId,
}

impl Link {
    pub fn new(source: NodeId, target: NodeId) -> Self {
        Self { source, target }
    }

    /// Whether either endpoint is `id`.
    pub fn touches(&self, id: NodeId) -> bool {
        self.source == id || self.target == id
    }
}

impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source, self.target)
    }
}
