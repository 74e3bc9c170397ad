use crate::node::{NodeId, NodeKind};
use thiserror::Error;

/// Errors raised while mutating the flow graph or editing node properties.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FlowError {
    #[error("Unknown node type '{0}'")]
    UnknownNodeKind(String),

    #[error("Unknown personalization algorithm '{0}'")]
    UnknownAlgorithm(String),

    #[error("Node {0} not found in the graph")]
    NodeNotFound(NodeId),

    #[error("Node id {0} is used by more than one node")]
    DuplicateNodeId(NodeId),

    #[error("No node ids left to assign")]
    IdSpaceExhausted,

    #[error("No node is selected")]
    NoSelection,

    #[error("Node {0} cannot be linked to itself")]
    SelfLink(NodeId),

    #[error("A link from node {from} to node {to} already exists")]
    DuplicateLink { from: NodeId, to: NodeId },

    #[error("Connection from '{from}' to '{to}' references a node that is not in the flow")]
    DanglingLink { from: u64, to: u64 },

    #[error("Node {node} of type '{kind}' has no '{property}' property")]
    PropertyMismatch {
        node: NodeId,
        kind: NodeKind,
        property: &'static str,
    },
}

/// Errors that can occur while reading or writing flow documents and session snapshots.
#[derive(Error, Debug, Clone)]
pub enum DocumentError {
    #[error("Failed to parse flow JSON: {0}")]
    JsonParseError(String),

    #[error("Failed to encode flow JSON: {0}")]
    JsonEncodeError(String),

    #[error("I/O error on '{path}': {message}")]
    Io { path: String, message: String },

    #[error("Snapshot error: {0}")]
    Snapshot(String),

    #[error("Invalid flow document: {0}")]
    Invalid(#[from] FlowError),
}
