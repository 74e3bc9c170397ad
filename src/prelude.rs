//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the flowcanvas crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use flowcanvas::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let document = FlowDocument::from_file("path/to/flow.json")?;
//! let store = document.into_graph()?;
//! let session = Session::with_store(store, HeadlessSurface::new(), EditorConfig::default());
//!
//! println!("Loaded {} node(s)", session.store().len());
//! # Ok(())
//! # }
//! ```

// Graph model
pub use crate::graph::{GraphStore, Link};
pub use crate::node::{Algorithm, Node, NodeId, NodeKind, Position, Properties};

// Editing
pub use crate::editor::{PropertyEdit, PropertyEditor, PropertyPanel, PropertySection};
pub use crate::session::{Outcome, Session, UiEvent};
pub use crate::surface::{DiagramSurface, HeadlessSurface};

// Export and import
pub use crate::config::{CanvasBounds, EditorConfig};
pub use crate::document::{
    ConnectionEntry, FlowDocument, IntoGraph, LinkKeying, NodeEntry, PropertyBag, Snapshot,
};

// Error types
pub use crate::error::{DocumentError, FlowError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
