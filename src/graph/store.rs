use super::Link;
use crate::error::FlowError;
use crate::node::{Node, NodeId, NodeKind, Position};
use ahash::AHashSet;
use log::debug;

/// Owns every node on the canvas, the links between them and the current selection.
///
/// Nodes keep their insertion order, which is the order they are exported in.
#[derive(Debug, Clone, Default)]
pub struct GraphStore {
    nodes: Vec<Node>,
    links: Vec<Link>,
    selected: Option<NodeId>,
    next_id: u64,
}

impl GraphStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a store from previously exported parts, checking every invariant
    /// a store built through its own operations upholds.
    pub(crate) fn from_parts(
        nodes: Vec<Node>,
        links: Vec<Link>,
        selected: Option<NodeId>,
        next_id: Option<u64>,
    ) -> Result<Self, FlowError> {
        let mut seen = AHashSet::with_capacity(nodes.len());
        for node in &nodes {
            if !seen.insert(node.id) {
                return Err(FlowError::DuplicateNodeId(node.id));
            }
        }

        let after_max = match nodes.iter().map(|n| n.id.0).max() {
            Some(max) => Some(max.checked_add(1).ok_or(FlowError::IdSpaceExhausted)?),
            None => None,
        };
        let next_id = match (next_id, after_max) {
            (Some(next), Some(after)) => next.max(after),
            (next, after) => next.or(after).unwrap_or(0),
        };

        let mut store = Self {
            nodes,
            links: Vec::with_capacity(links.len()),
            selected: None,
            next_id,
        };

        for link in links {
            if !store.contains(link.source) || !store.contains(link.target) {
                return Err(FlowError::DanglingLink {
                    from: link.source.0,
                    to: link.target.0,
                });
            }
            store.connect(link.source, link.target)?;
        }

        if let Some(id) = selected {
            store.select(id)?;
        }
        Ok(store)
    }

    /// Places a new node of `kind` and returns its handle.
    ///
    /// Fails once the id counter cannot advance any further.
    pub fn create_node(
        &mut self,
        kind: NodeKind,
        position: Position,
    ) -> Result<NodeId, FlowError> {
        let id = NodeId(self.next_id);
        self.next_id = id.0.checked_add(1).ok_or(FlowError::IdSpaceExhausted)?;
        self.nodes.push(Node::new(id, kind, position));
        debug!("Created {} node {} at ({}, {})", kind, id, position.x, position.y);
        Ok(id)
    }

    pub fn update_node_name(&mut self, id: NodeId, name: &str) -> Result<(), FlowError> {
        let node = self.node_mut(id)?;
        node.name = name.to_string();
        Ok(())
    }

    pub fn update_node_position(&mut self, id: NodeId, x: f64, y: f64) -> Result<(), FlowError> {
        let node = self.node_mut(id)?;
        node.position = Position::new(x, y);
        Ok(())
    }

    /// Removes a node together with every link touching it.
    ///
    /// Returns the links that were purged so the rendering side can drop them as well.
    pub fn delete_node(&mut self, id: NodeId) -> Result<Vec<Link>, FlowError> {
        let index = self.index_of(id).ok_or(FlowError::NodeNotFound(id))?;
        self.nodes.remove(index);

        let (purged, kept): (Vec<Link>, Vec<Link>) =
            self.links.drain(..).partition(|link| link.touches(id));
        self.links = kept;

        if self.selected == Some(id) {
            self.selected = None;
        }
        debug!("Deleted node {} and {} incident link(s)", id, purged.len());
        Ok(purged)
    }

    /// Records a link completed by the user.
    pub fn connect(&mut self, source: NodeId, target: NodeId) -> Result<Link, FlowError> {
        for id in [source, target] {
            if !self.contains(id) {
                return Err(FlowError::NodeNotFound(id));
            }
        }
        if source == target {
            return Err(FlowError::SelfLink(source));
        }
        let link = Link::new(source, target);
        if self.links.contains(&link) {
            return Err(FlowError::DuplicateLink {
                from: source,
                to: target,
            });
        }
        self.links.push(link);
        debug!("Connected {}", link);
        Ok(link)
    }

    /// Removes a link detached by the user. Returns whether it existed.
    pub fn disconnect(&mut self, source: NodeId, target: NodeId) -> bool {
        let before = self.links.len();
        self.links.retain(|link| *link != Link::new(source, target));
        before != self.links.len()
    }

    /// The live link set, in the order the links were made.
    pub fn list_connections(&self) -> &[Link] {
        &self.links
    }

    /// Makes `id` the only selected node. Returns the node that was selected before.
    pub fn select(&mut self, id: NodeId) -> Result<Option<NodeId>, FlowError> {
        if !self.contains(id) {
            return Err(FlowError::NodeNotFound(id));
        }
        Ok(self.selected.replace(id))
    }

    pub fn clear_selection(&mut self) -> Option<NodeId> {
        self.selected.take()
    }

    pub fn selected(&self) -> Option<NodeId> {
        self.selected
    }

    pub fn selected_node(&self) -> Option<&Node> {
        self.selected.and_then(|id| self.node(id).ok())
    }

    pub fn selected_node_mut(&mut self) -> Result<&mut Node, FlowError> {
        let id = self.selected.ok_or(FlowError::NoSelection)?;
        self.node_mut(id)
    }

    pub fn node(&self, id: NodeId) -> Result<&Node, FlowError> {
        self.nodes
            .iter()
            .find(|n| n.id == id)
            .ok_or(FlowError::NodeNotFound(id))
    }

    pub fn node_mut(&mut self, id: NodeId) -> Result<&mut Node, FlowError> {
        self.nodes
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or(FlowError::NodeNotFound(id))
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.iter().any(|n| n.id == id)
    }

    /// Position of the node in the export order.
    pub fn index_of(&self, id: NodeId) -> Option<usize> {
        self.nodes.iter().position(|n| n.id == id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The id the next created node will receive.
    pub fn next_id(&self) -> u64 {
        self.next_id
    }
}
