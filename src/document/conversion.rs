use super::{FlowDocument, LinkKeying, Snapshot};
use crate::error::FlowError;
use crate::graph::{GraphStore, Link};
use crate::node::{Node, NodeId, NodeKind, Position};

/// Anything that can be loaded back into a [`GraphStore`].
///
/// Loading validates the result the same way the store's own operations would:
/// unknown node types, mismatched property bags, unknown algorithms and connections
/// to missing nodes are rejected instead of being patched over.
pub trait IntoGraph {
    fn into_graph(self) -> Result<GraphStore, FlowError>;
}

impl IntoGraph for FlowDocument {
    fn into_graph(self) -> Result<GraphStore, FlowError> {
        // Entries without ids (positional documents) are numbered past the largest explicit id.
        let mut fresh = match self.nodes.iter().filter_map(|entry| entry.id).max() {
            Some(max) => max.0.checked_add(1).ok_or(FlowError::IdSpaceExhausted)?,
            None => 0,
        };

        let mut nodes = Vec::with_capacity(self.nodes.len());
        for entry in self.nodes {
            let kind = entry.kind.parse::<NodeKind>()?;
            let id = match entry.id {
                Some(id) => id,
                None => {
                    let id = NodeId(fresh);
                    fresh = fresh.checked_add(1).ok_or(FlowError::IdSpaceExhausted)?;
                    id
                }
            };
            let properties = entry.properties.into_properties(id, kind)?;
            nodes.push(Node {
                id,
                kind,
                name: entry.name,
                position: Position::new(entry.x, entry.y),
                properties,
            });
        }

        let links = self
            .connections
            .iter()
            .map(|conn| {
                let resolve = |key: u64| match self.keying {
                    LinkKeying::Id => nodes.iter().find(|n| n.id.0 == key).map(|n| n.id),
                    LinkKeying::Index => usize::try_from(key)
                        .ok()
                        .and_then(|index| nodes.get(index))
                        .map(|n| n.id),
                };
                match (resolve(conn.source), resolve(conn.target)) {
                    (Some(source), Some(target)) => Ok(Link::new(source, target)),
                    _ => Err(FlowError::DanglingLink {
                        from: conn.source,
                        to: conn.target,
                    }),
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        GraphStore::from_parts(nodes, links, None, None)
    }
}

impl IntoGraph for Snapshot {
    fn into_graph(self) -> Result<GraphStore, FlowError> {
        if let Some(node) = self.nodes.iter().find(|n| !n.properties.matches(n.kind)) {
            return Err(FlowError::PropertyMismatch {
                node: node.id,
                kind: node.kind,
                property: "properties",
            });
        }
        GraphStore::from_parts(self.nodes, self.links, self.selected, Some(self.next_id))
    }
}
