use crate::node::{Algorithm, Node, NodeId, NodeKind, Properties};
use serde::Serialize;

/// One choice of a single-selection control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// The type-specific part of the property panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "control", rename_all = "kebab-case")]
pub enum PropertySection {
    /// An append-only list with an entry field underneath.
    ItemList {
        heading: &'static str,
        items: Vec<String>,
        placeholder: &'static str,
        /// Text typed into the entry field but not yet added.
        draft: String,
    },
    Select {
        heading: &'static str,
        options: Vec<SelectOption>,
        selected: Algorithm,
    },
}

/// Everything the property panel shows for the selected node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropertyPanel {
    pub node: NodeId,
    pub kind: NodeKind,
    pub name: String,
    pub section: Option<PropertySection>,
}

impl PropertyPanel {
    /// Builds a fresh panel for `node`. Entry fields always start empty.
    pub fn for_node(node: &Node) -> Self {
        let section = match &node.properties {
            Properties::Catalogue { products } => Some(PropertySection::ItemList {
                heading: "Products",
                items: products.clone(),
                placeholder: "Add product",
                draft: String::new(),
            }),
            Properties::AiPersonalization { algorithm } => Some(PropertySection::Select {
                heading: "AI Algorithm",
                options: Algorithm::ALL
                    .into_iter()
                    .map(|a| SelectOption {
                        value: a.id(),
                        label: a.label(),
                    })
                    .collect(),
                selected: *algorithm,
            }),
            Properties::MultiPath { paths } => Some(PropertySection::ItemList {
                heading: "Paths",
                items: paths.clone(),
                placeholder: "Add path",
                draft: String::new(),
            }),
            Properties::Empty => None,
        };

        Self {
            node: node.id,
            kind: node.kind,
            name: node.name.clone(),
            section,
        }
    }

    /// The in-progress entry text, if this panel has an entry field.
    pub fn draft(&self) -> Option<&str> {
        match &self.section {
            Some(PropertySection::ItemList { draft, .. }) => Some(draft.as_str()),
            _ => None,
        }
    }

    pub(super) fn draft_mut(&mut self) -> Option<&mut String> {
        match &mut self.section {
            Some(PropertySection::ItemList { draft, .. }) => Some(draft),
            _ => None,
        }
    }
}
