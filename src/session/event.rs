use crate::document::FlowDocument;
use crate::editor::PropertyEdit;
use crate::graph::Link;
use crate::node::NodeId;
use serde::Deserialize;

/// A user action on the canvas, toolbox or property panel.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "event", rename_all = "kebab-case")]
pub enum UiEvent {
    /// A toolbox item was dropped on the canvas. `payload` is the node type identifier.
    Drop {
        payload: String,
        client_x: f64,
        client_y: f64,
    },
    /// A node drag finished at canvas position (x, y).
    DragEnd { node: NodeId, x: f64, y: f64 },
    Click { node: NodeId },
    /// The name field changed.
    NameInput { value: String },
    /// The entry field of a list control changed.
    EntryInput { value: String },
    /// The "Add" button of a list control was pressed.
    AddEntry,
    Property(PropertyEdit),
    Connect { source: NodeId, target: NodeId },
    Detach { source: NodeId, target: NodeId },
    Delete,
    Save,
}

/// What handling a [`UiEvent`] did to the session.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Created(NodeId),
    Moved(NodeId),
    Selected {
        previous: Option<NodeId>,
        current: NodeId,
    },
    Renamed(NodeId),
    DraftUpdated,
    /// A property edit was applied; `false` when it was an empty entry and nothing changed.
    Edited(bool),
    Linked(Link),
    Unlinked(bool),
    Deleted {
        node: NodeId,
        purged: Vec<Link>,
    },
    Saved(FlowDocument),
}
