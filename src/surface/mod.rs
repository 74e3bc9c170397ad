//! The boundary to the diagram engine that draws nodes, makes them draggable and
//! routes connectors between them.

pub mod headless;

pub use headless::*;

use crate::graph::Link;
use crate::node::{Node, NodeId};

/// A rendering backend for the flow canvas.
///
/// The engine owns the mapping from [`NodeId`] to its visual element; the model
/// never sees element handles.
pub trait DiagramSurface {
    /// Draws `node` and makes it draggable and connectable as both source and
    /// target with continuous anchors.
    fn register_node(&mut self, node: &Node);

    /// Removes the node's element. `purged` holds the connectors that went with it.
    fn remove_node(&mut self, id: NodeId, purged: &[Link]);

    fn set_label(&mut self, id: NodeId, label: &str);

    fn set_highlight(&mut self, id: NodeId, highlighted: bool);

    /// Called when the model refuses a connector the user drew, so it can be erased.
    fn reject_link(&mut self, _link: Link) {}
}
