//! Common test utilities for building flow graphs and sessions.
use flowcanvas::prelude::*;

/// A session on an in-memory surface with default layout settings.
#[allow(dead_code)]
pub fn headless_session() -> Session<HeadlessSurface> {
    Session::new(HeadlessSurface::new(), EditorConfig::default())
}

/// Two nodes and a single link between them.
///
/// Graph: `Start(0) -> Email(1)`
#[allow(dead_code)]
pub fn create_two_node_store() -> (GraphStore, NodeId, NodeId) {
    let mut store = GraphStore::new();
    let start = store
        .create_node(NodeKind::Start, Position::new(10.0, 20.0))
        .unwrap();
    let email = store
        .create_node(NodeKind::Email, Position::new(200.0, 20.0))
        .unwrap();
    store.connect(start, email).expect("Failed to connect");
    (store, start, email)
}

/// A branching campaign touching every property-carrying node type.
///
/// Graph: `Start -> Multi-Path -> {Catalogue, AI Personalization} -> End`
#[allow(dead_code)]
pub fn create_campaign_store() -> GraphStore {
    let mut store = GraphStore::new();
    let mut place = |kind, x, y| {
        store
            .create_node(kind, Position::new(x, y))
            .expect("Failed to create node")
    };
    let start = place(NodeKind::Start, 0.0, 0.0);
    let split = place(NodeKind::MultiPath, 150.0, 0.0);
    let catalogue = place(NodeKind::Catalogue, 300.0, -80.0);
    let ai = place(NodeKind::AiPersonalization, 300.0, 80.0);
    let end = place(NodeKind::End, 450.0, 0.0);

    for (source, target) in [
        (start, split),
        (split, catalogue),
        (split, ai),
        (catalogue, end),
        (ai, end),
    ] {
        store.connect(source, target).expect("Failed to connect");
    }

    let mut editor = PropertyEditor::new();
    store.select(split).unwrap();
    editor.render(&store);
    editor
        .apply(&mut store, PropertyEdit::AddPath("Returning".to_string()))
        .unwrap();
    editor
        .apply(&mut store, PropertyEdit::AddPath("New".to_string()))
        .unwrap();

    store.select(catalogue).unwrap();
    editor.render(&store);
    editor
        .apply(&mut store, PropertyEdit::AddProduct("Sneakers".to_string()))
        .unwrap();

    store.select(ai).unwrap();
    editor.render(&store);
    editor
        .apply(&mut store, PropertyEdit::SetAlgorithm(Algorithm::Collaborative))
        .unwrap();

    store.clear_selection();
    store
}

/// A positional document as written by the original exporter.
#[allow(dead_code)]
pub const LEGACY_FLOW_JSON: &str = r#"{
  "nodes": [
    { "type": "start", "name": "Start", "x": 40, "y": 60, "properties": {} },
    { "type": "catalogue", "name": "Summer", "x": 240, "y": 60,
      "properties": { "products": ["Hat", "Sunglasses"] } },
    { "type": "end", "name": "End", "x": 440, "y": 60, "properties": {} }
  ],
  "connections": [
    { "source": 0, "target": 1 },
    { "source": 1, "target": 2 }
  ]
}"#;
