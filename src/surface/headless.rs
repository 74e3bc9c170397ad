use super::DiagramSurface;
use crate::graph::Link;
use crate::node::{Node, NodeId};
use ahash::AHashMap;
use itertools::Itertools;
use log::trace;

/// What an element on the headless canvas currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementState {
    pub label: String,
    pub icon: &'static str,
    pub highlighted: bool,
}

/// An in-memory surface that tracks element state without drawing anything.
#[derive(Debug, Default)]
pub struct HeadlessSurface {
    elements: AHashMap<NodeId, ElementState>,
    rejected: Vec<Link>,
}

impl HeadlessSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn element(&self, id: NodeId) -> Option<&ElementState> {
        self.elements.get(&id)
    }

    pub fn label(&self, id: NodeId) -> Option<&str> {
        self.elements.get(&id).map(|e| e.label.as_str())
    }

    pub fn is_highlighted(&self, id: NodeId) -> bool {
        self.elements.get(&id).is_some_and(|e| e.highlighted)
    }

    /// Ids of all highlighted elements, ascending.
    pub fn highlighted(&self) -> Vec<NodeId> {
        self.elements
            .iter()
            .filter(|(_, e)| e.highlighted)
            .map(|(id, _)| *id)
            .sorted()
            .collect()
    }

    pub fn rejected_links(&self) -> &[Link] {
        &self.rejected
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl DiagramSurface for HeadlessSurface {
    fn register_node(&mut self, node: &Node) {
        trace!("Registering element for node {}", node.id);
        self.elements.insert(
            node.id,
            ElementState {
                label: node.name.clone(),
                icon: node.kind.icon(),
                highlighted: false,
            },
        );
    }

    fn remove_node(&mut self, id: NodeId, purged: &[Link]) {
        trace!("Removing element {} with {} connector(s)", id, purged.len());
        self.elements.remove(&id);
    }

    fn set_label(&mut self, id: NodeId, label: &str) {
        if let Some(element) = self.elements.get_mut(&id) {
            element.label = label.to_string();
        }
    }

    fn set_highlight(&mut self, id: NodeId, highlighted: bool) {
        if let Some(element) = self.elements.get_mut(&id) {
            element.highlighted = highlighted;
        }
    }

    fn reject_link(&mut self, link: Link) {
        self.rejected.push(link);
    }
}
