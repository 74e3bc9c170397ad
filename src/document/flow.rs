use crate::error::{DocumentError, FlowError};
use crate::graph::GraphStore;
use crate::node::{Algorithm, Node, NodeId, NodeKind, Properties};
use ahash::AHashMap;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs;

/// How connection endpoints are written in an exported document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LinkKeying {
    /// Endpoints are stable node ids. Survives node removal between exports.
    #[default]
    Id,
    /// Endpoints are positions in the exported `nodes` array.
    Index,
}

/// Documents written before node ids existed are positional.
fn legacy_keying() -> LinkKeying {
    LinkKeying::Index
}

/// The exported snapshot of every node and link on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowDocument {
    #[serde(default = "legacy_keying")]
    pub keying: LinkKeying,
    pub nodes: Vec<NodeEntry>,
    pub connections: Vec<ConnectionEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<NodeId>,
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    pub x: f64,
    pub y: f64,
    #[serde(default = "PropertyBag::empty")]
    pub properties: PropertyBag,
}

/// A directed connection. Endpoints are interpreted per the document's [`LinkKeying`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionEntry {
    pub source: u64,
    pub target: u64,
}

/// The JSON shape of a node's properties: `{"products": [..]}`, `{"algorithm": ".."}`,
/// `{"paths": [..]}` or `{}`.
///
/// Held as a raw object until the node's type is known, so that loading can check it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyBag(Map<String, Value>);

impl PropertyBag {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Reads the bag as the properties of node `node` of type `kind`.
    ///
    /// The bag must hold exactly the keys `kind` carries.
    pub fn into_properties(self, node: NodeId, kind: NodeKind) -> Result<Properties, FlowError> {
        let mismatch = |property: &'static str| FlowError::PropertyMismatch {
            node,
            kind,
            property,
        };
        let mut fields = self.0;

        let properties = match kind {
            NodeKind::Catalogue => Properties::Catalogue {
                products: take_strings(&mut fields, "products").ok_or(mismatch("products"))?,
            },
            NodeKind::MultiPath => Properties::MultiPath {
                paths: take_strings(&mut fields, "paths").ok_or(mismatch("paths"))?,
            },
            NodeKind::AiPersonalization => match fields.remove("algorithm") {
                Some(Value::String(id)) => Properties::AiPersonalization {
                    algorithm: id.parse::<Algorithm>()?,
                },
                _ => return Err(mismatch("algorithm")),
            },
            _ => Properties::Empty,
        };

        if let Some(key) = fields.keys().next() {
            warn!("Unexpected property '{}' on {} node {}", key, kind, node);
            return Err(mismatch("properties"));
        }
        Ok(properties)
    }
}

fn take_strings(fields: &mut Map<String, Value>, key: &str) -> Option<Vec<String>> {
    match fields.remove(key)? {
        Value::Array(items) => items
            .into_iter()
            .map(|item| match item {
                Value::String(text) => Some(text),
                _ => None,
            })
            .collect(),
        _ => None,
    }
}

impl From<&Properties> for PropertyBag {
    fn from(properties: &Properties) -> Self {
        let mut fields = Map::new();
        match properties {
            Properties::Catalogue { products } => {
                fields.insert("products".to_string(), Value::from(products.clone()));
            }
            Properties::AiPersonalization { algorithm } => {
                fields.insert("algorithm".to_string(), Value::from(algorithm.id()));
            }
            Properties::MultiPath { paths } => {
                fields.insert("paths".to_string(), Value::from(paths.clone()));
            }
            Properties::Empty => {}
        }
        Self(fields)
    }
}

impl From<&Node> for NodeEntry {
    fn from(node: &Node) -> Self {
        Self {
            id: Some(node.id),
            kind: node.kind.id().to_string(),
            name: node.name.clone(),
            x: node.position.x,
            y: node.position.y,
            properties: PropertyBag::from(&node.properties),
        }
    }
}

impl FlowDocument {
    /// Snapshots `store` into an exportable document.
    pub fn from_store(store: &GraphStore, keying: LinkKeying) -> Self {
        let nodes: Vec<NodeEntry> = store.nodes().iter().map(NodeEntry::from).collect();

        let positions: AHashMap<NodeId, u64> = store
            .nodes()
            .iter()
            .enumerate()
            .map(|(index, node)| (node.id, index as u64))
            .collect();

        // The store never holds a link whose endpoint is missing, so every lookup hits.
        let connections = store
            .list_connections()
            .iter()
            .filter_map(|link| match keying {
                LinkKeying::Id => Some(ConnectionEntry {
                    source: link.source.0,
                    target: link.target.0,
                }),
                LinkKeying::Index => Some(ConnectionEntry {
                    source: *positions.get(&link.source)?,
                    target: *positions.get(&link.target)?,
                }),
            })
            .collect();

        Self {
            keying,
            nodes,
            connections,
        }
    }

    pub fn from_json(json: &str) -> Result<Self, DocumentError> {
        serde_json::from_str(json).map_err(|e| DocumentError::JsonParseError(e.to_string()))
    }

    /// Pretty-printed JSON with two-space indentation.
    pub fn to_json_pretty(&self) -> Result<String, DocumentError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| DocumentError::JsonEncodeError(e.to_string()))
    }

    /// Writes the document to `path` as pretty-printed JSON.
    pub fn save(&self, path: &str) -> Result<(), DocumentError> {
        let json = self.to_json_pretty()?;
        fs::write(path, json).map_err(|e| DocumentError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        info!(
            "Saved flow with {} node(s) and {} connection(s) to '{}'",
            self.nodes.len(),
            self.connections.len(),
            path
        );
        Ok(())
    }

    pub fn from_file(path: &str) -> Result<Self, DocumentError> {
        let json = fs::read_to_string(path).map_err(|e| DocumentError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        Self::from_json(&json)
    }
}
