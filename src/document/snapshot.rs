use crate::error::DocumentError;
use crate::graph::{GraphStore, Link};
use crate::node::{Node, NodeId};
use bincode::config::standard;
use bincode::serde::{decode_from_slice, encode_to_vec};
use serde::{Deserialize, Serialize};
use log::debug;
use std::fs;

/// The complete editor state, including node ids, the selection and the id counter.
///
/// Unlike [`FlowDocument`](super::FlowDocument) this is meant for resuming an editing
/// session, not for exchange.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub nodes: Vec<Node>,
    pub links: Vec<Link>,
    pub selected: Option<NodeId>,
    pub next_id: u64,
}

impl Snapshot {
    pub fn capture(store: &GraphStore) -> Self {
        Self {
            nodes: store.nodes().to_vec(),
            links: store.list_connections().to_vec(),
            selected: store.selected(),
            next_id: store.next_id(),
        }
    }

    /// Writes the bincode-encoded snapshot to `path`.
    pub fn save(&self, path: &str) -> Result<(), DocumentError> {
        let bytes = self.to_bytes()?;
        fs::write(path, bytes).map_err(|e| DocumentError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        debug!("Saved snapshot of {} node(s) to '{}'", self.nodes.len(), path);
        Ok(())
    }

    pub fn from_file(path: &str) -> Result<Self, DocumentError> {
        let bytes = fs::read(path).map_err(|e| DocumentError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        Self::from_bytes(&bytes)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, DocumentError> {
        encode_to_vec(self, standard())
            .map_err(|e| DocumentError::Snapshot(format!("Serialization failed: {}", e)))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DocumentError> {
        decode_from_slice(bytes, standard())
            .map(|(snapshot, _)| snapshot)
            .map_err(|e| DocumentError::Snapshot(format!("Deserialization failed: {}", e)))
    }
}
