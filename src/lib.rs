//! # Flowcanvas - Visual Flow Builder Model
//!
//! **Flowcanvas** is the model behind a drag-and-drop campaign flow builder. Users drop
//! typed blocks (Start, social channels, Landing Page, Email, Decision, Catalogue,
//! AI-Personalization, Multi-Path, End) onto a canvas, connect them with directional
//! links, edit per-type properties and export the result as a plain data document.
//!
//! ## Core Workflow
//!
//! Drawing is delegated to a diagram engine behind the [`DiagramSurface`](surface::DiagramSurface)
//! trait. Everything else happens on an explicit [`Session`](session::Session):
//!
//! 1.  **Drop**: a toolbox payload such as `"catalogue"` becomes a node in the `GraphStore`.
//! 2.  **Select & Edit**: clicking a node highlights it and renders a `PropertyPanel`; edits
//!     are written into the node's property bag immediately.
//! 3.  **Connect**: connectors finished by the user are recorded as `Link`s. Deleting a node
//!     removes every link touching it.
//! 4.  **Save**: the graph is exported as a `FlowDocument`, and can be loaded back with
//!     [`IntoGraph`](document::IntoGraph).
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use flowcanvas::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let mut session = Session::new(HeadlessSurface::new(), EditorConfig::default());
//!
//!     let start = session.drop_node("start", 100.0, 60.0)?;
//!     let catalogue = session.drop_node("catalogue", 300.0, 60.0)?;
//!     session.connect(start, catalogue)?;
//!
//!     session.select_node(catalogue)?;
//!     session.edit_property(PropertyEdit::AddProduct("Sneakers".to_string()))?;
//!     session.rename_selected("Spring range")?;
//!
//!     let document = session.save_flow();
//!     println!("{}", document.to_json_pretty()?);
//!
//!     let reloaded = document.into_graph()?;
//!     assert_eq!(reloaded.len(), 2);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod document;
pub mod editor;
pub mod error;
pub mod graph;
pub mod node;
pub mod prelude;
pub mod session;
pub mod surface;
