//! The property panel: a type-specific form for the selected node whose edits are
//! written straight into that node's property bag.

pub mod panel;

pub use panel::*;

use crate::error::FlowError;
use crate::graph::GraphStore;
use crate::node::{Algorithm, Node, Properties};
use log::debug;
use serde::Deserialize;

/// A change made through one of the panel's type-specific controls.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "edit", content = "value", rename_all = "kebab-case")]
pub enum PropertyEdit {
    AddProduct(String),
    SetAlgorithm(Algorithm),
    AddPath(String),
}

/// Keeps the rendered panel in step with the store's selection.
#[derive(Debug, Default)]
pub struct PropertyEditor {
    panel: Option<PropertyPanel>,
}

impl PropertyEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds the panel from scratch for the currently selected node.
    ///
    /// Any text left in an entry field is discarded.
    pub fn render(&mut self, store: &GraphStore) -> Option<&PropertyPanel> {
        self.panel = store.selected_node().map(PropertyPanel::for_node);
        self.panel.as_ref()
    }

    pub fn panel(&self) -> Option<&PropertyPanel> {
        self.panel.as_ref()
    }

    pub fn clear(&mut self) {
        self.panel = None;
    }

    /// Records text typed into the entry field of a list control.
    ///
    /// Panels without a list control have no entry field to type into.
    pub fn set_draft(&mut self, text: &str) -> Result<(), FlowError> {
        let panel = self.panel.as_mut().ok_or(FlowError::NoSelection)?;
        let (node, kind) = (panel.node, panel.kind);
        let draft = panel.draft_mut().ok_or(FlowError::PropertyMismatch {
            node,
            kind,
            property: "entry",
        })?;
        *draft = text.to_string();
        Ok(())
    }

    /// Sets the selected node's display name and mirrors it in the panel.
    pub fn rename(&mut self, store: &mut GraphStore, name: &str) -> Result<(), FlowError> {
        let id = store.selected().ok_or(FlowError::NoSelection)?;
        store.update_node_name(id, name)?;
        if let Some(panel) = self.panel.as_mut() {
            panel.name = name.to_string();
        }
        Ok(())
    }

    /// Adds the entry field's text to the list control, like pressing its "Add" button.
    pub fn submit_draft(&mut self, store: &mut GraphStore) -> Result<bool, FlowError> {
        let panel = self.panel.as_ref().ok_or(FlowError::NoSelection)?;
        let draft = panel.draft().unwrap_or_default().to_string();
        let edit = match store.selected_node_mut()?.properties {
            Properties::MultiPath { .. } => PropertyEdit::AddPath(draft),
            _ => PropertyEdit::AddProduct(draft),
        };
        self.apply(store, edit)
    }

    /// Writes `edit` into the selected node. Returns whether the node changed.
    ///
    /// Empty list entries are ignored.
    pub fn apply(&mut self, store: &mut GraphStore, edit: PropertyEdit) -> Result<bool, FlowError> {
        let node = store.selected_node_mut()?;
        let changed = match edit {
            PropertyEdit::AddProduct(text) => add_entry(node, "products", text)?,
            PropertyEdit::AddPath(text) => add_entry(node, "paths", text)?,
            PropertyEdit::SetAlgorithm(choice) => match &mut node.properties {
                Properties::AiPersonalization { algorithm } => {
                    *algorithm = choice;
                    true
                }
                _ => {
                    return Err(FlowError::PropertyMismatch {
                        node: node.id,
                        kind: node.kind,
                        property: "algorithm",
                    });
                }
            },
        };

        if changed {
            // List controls are redrawn with the new entry and an empty field.
            self.panel = Some(PropertyPanel::for_node(node));
        }
        Ok(changed)
    }
}

fn add_entry(node: &mut Node, property: &'static str, text: String) -> Result<bool, FlowError> {
    let list = match (&mut node.properties, property) {
        (Properties::Catalogue { products }, "products") => products,
        (Properties::MultiPath { paths }, "paths") => paths,
        _ => {
            return Err(FlowError::PropertyMismatch {
                node: node.id,
                kind: node.kind,
                property,
            });
        }
    };

    if text.is_empty() {
        debug!("Ignoring empty {} entry on node {}", property, node.id);
        return Ok(false);
    }
    list.push(text);
    Ok(true)
}
