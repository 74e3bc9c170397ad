//! Event dispatch for an editing session.
//!
//! A [`Session`] owns the graph, the property editor and the rendering surface, and
//! turns each [`UiEvent`] into the matching mutations on all three.

pub mod event;

pub use event::*;

use crate::config::EditorConfig;
use crate::document::FlowDocument;
use crate::editor::{PropertyEdit, PropertyEditor, PropertyPanel};
use crate::error::FlowError;
use crate::graph::{GraphStore, Link};
use crate::node::{NodeId, NodeKind, Position};
use crate::surface::DiagramSurface;
use log::{debug, info, warn};

pub struct Session<S: DiagramSurface> {
    store: GraphStore,
    editor: PropertyEditor,
    surface: S,
    config: EditorConfig,
}

impl<S: DiagramSurface> Session<S> {
    pub fn new(surface: S, config: EditorConfig) -> Self {
        Self::with_store(GraphStore::new(), surface, config)
    }

    /// Resumes editing `store`, drawing every node it already holds.
    pub fn with_store(store: GraphStore, mut surface: S, config: EditorConfig) -> Self {
        for node in store.nodes() {
            surface.register_node(node);
        }
        if let Some(id) = store.selected() {
            surface.set_highlight(id, true);
        }
        let mut editor = PropertyEditor::new();
        editor.render(&store);
        Self {
            store,
            editor,
            surface,
            config,
        }
    }

    pub fn handle(&mut self, event: UiEvent) -> Result<Outcome, FlowError> {
        match event {
            UiEvent::Drop {
                payload,
                client_x,
                client_y,
            } => self
                .drop_node(&payload, client_x, client_y)
                .map(Outcome::Created),
            UiEvent::DragEnd { node, x, y } => {
                self.move_node(node, x, y).map(|_| Outcome::Moved(node))
            }
            UiEvent::Click { node } => self.select_node(node).map(|previous| Outcome::Selected {
                previous,
                current: node,
            }),
            UiEvent::NameInput { value } => self.rename_selected(&value).map(Outcome::Renamed),
            UiEvent::EntryInput { value } => self
                .editor
                .set_draft(&value)
                .map(|_| Outcome::DraftUpdated),
            UiEvent::AddEntry => self.editor.submit_draft(&mut self.store).map(Outcome::Edited),
            UiEvent::Property(edit) => self.edit_property(edit).map(Outcome::Edited),
            UiEvent::Connect { source, target } => {
                self.connect(source, target).map(Outcome::Linked)
            }
            UiEvent::Detach { source, target } => {
                Ok(Outcome::Unlinked(self.detach(source, target)))
            }
            UiEvent::Delete => self
                .delete_selected()
                .map(|(node, purged)| Outcome::Deleted { node, purged }),
            UiEvent::Save => Ok(Outcome::Saved(self.save_flow())),
        }
    }

    /// Creates a node from a drag payload dropped at page coordinates.
    pub fn drop_node(
        &mut self,
        payload: &str,
        client_x: f64,
        client_y: f64,
    ) -> Result<NodeId, FlowError> {
        let kind = payload.parse::<NodeKind>().inspect_err(|_| {
            warn!("Dropped payload '{}' is not a node type", payload);
        })?;
        let position = self.config.drop_position(client_x, client_y);
        let id = self.store.create_node(kind, position)?;
        self.surface.register_node(self.store.node(id)?);
        Ok(id)
    }

    pub fn move_node(&mut self, id: NodeId, x: f64, y: f64) -> Result<(), FlowError> {
        let position = self.config.contain(Position::new(x, y));
        self.store.update_node_position(id, position.x, position.y)
    }

    /// Selects `id`, moving the highlight and redrawing the property panel.
    pub fn select_node(&mut self, id: NodeId) -> Result<Option<NodeId>, FlowError> {
        let previous = self.store.select(id)?;
        if let Some(prev) = previous {
            self.surface.set_highlight(prev, false);
        }
        self.surface.set_highlight(id, true);
        self.editor.render(&self.store);
        Ok(previous)
    }

    pub fn rename_selected(&mut self, name: &str) -> Result<NodeId, FlowError> {
        self.editor.rename(&mut self.store, name)?;
        let id = self.store.selected().ok_or(FlowError::NoSelection)?;
        self.surface.set_label(id, name);
        Ok(id)
    }

    pub fn edit_property(&mut self, edit: PropertyEdit) -> Result<bool, FlowError> {
        self.editor.apply(&mut self.store, edit)
    }

    /// Records a connector the user finished drawing. A refused connector is
    /// handed back to the surface to be erased.
    pub fn connect(&mut self, source: NodeId, target: NodeId) -> Result<Link, FlowError> {
        self.store.connect(source, target).inspect_err(|e| {
            warn!("Rejected link {} -> {}: {}", source, target, e);
            self.surface.reject_link(Link::new(source, target));
        })
    }

    pub fn detach(&mut self, source: NodeId, target: NodeId) -> bool {
        self.store.disconnect(source, target)
    }

    /// Deletes the selected node with all its links and clears the panel.
    pub fn delete_selected(&mut self) -> Result<(NodeId, Vec<Link>), FlowError> {
        let id = self.store.selected().ok_or(FlowError::NoSelection)?;
        let purged = self.store.delete_node(id)?;
        self.surface.remove_node(id, &purged);
        self.editor.clear();
        Ok((id, purged))
    }

    /// Exports the current graph using the configured link keying.
    pub fn save_flow(&self) -> FlowDocument {
        let document = FlowDocument::from_store(&self.store, self.config.link_keying);
        info!(
            "Flow saved: {} node(s), {} connection(s)",
            document.nodes.len(),
            document.connections.len()
        );
        if let Ok(json) = document.to_json_pretty() {
            debug!("{}", json);
        }
        document
    }

    pub fn store(&self) -> &GraphStore {
        &self.store
    }

    pub fn panel(&self) -> Option<&PropertyPanel> {
        self.editor.panel()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn into_parts(self) -> (GraphStore, S) {
        (self.store, self.surface)
    }
}
