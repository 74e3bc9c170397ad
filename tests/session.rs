//! End-to-end tests driving a headless session with UI events.
mod common;
use common::*;
use flowcanvas::prelude::*;

#[test]
fn test_drop_creates_centered_node() {
    let config = EditorConfig {
        canvas_offset: Position::new(200.0, 50.0),
        ..EditorConfig::default()
    };
    let mut session = Session::new(HeadlessSurface::new(), config);

    let outcome = session
        .handle(UiEvent::Drop {
            payload: "landing-page".to_string(),
            client_x: 400.0,
            client_y: 200.0,
        })
        .expect("Drop failed");
    let id = match outcome {
        Outcome::Created(id) => id,
        other => panic!("Expected Created, got {:?}", other),
    };

    let node = session.store().node(id).unwrap();
    assert_eq!(node.kind, NodeKind::LandingPage);
    assert_eq!(node.position, Position::new(140.0, 120.0));

    let element = session.surface().element(id).unwrap();
    assert_eq!(element.label, "Landing Page");
    assert_eq!(element.icon, "fas fa-file");
}

#[test]
fn test_drop_with_unknown_payload_fails() {
    let mut session = headless_session();
    let result = session.handle(UiEvent::Drop {
        payload: "carrier-pigeon".to_string(),
        client_x: 0.0,
        client_y: 0.0,
    });
    assert_eq!(
        result,
        Err(FlowError::UnknownNodeKind("carrier-pigeon".to_string()))
    );
    assert!(session.store().is_empty());
    assert!(session.surface().is_empty());
}

#[test]
fn test_positions_are_contained_by_canvas_bounds() {
    let config = EditorConfig {
        canvas_bounds: Some(CanvasBounds {
            width: 800.0,
            height: 600.0,
        }),
        ..EditorConfig::default()
    };
    let mut session = Session::new(HeadlessSurface::new(), config);
    let id = session.drop_node("email", 10.0, 10.0).unwrap();
    assert_eq!(session.store().node(id).unwrap().position, Position::new(0.0, 0.0));

    session.move_node(id, 5000.0, 250.0).unwrap();
    assert_eq!(
        session.store().node(id).unwrap().position,
        Position::new(680.0, 250.0)
    );
}

#[test]
fn test_selection_moves_highlight() {
    let mut session = headless_session();
    let a = session.drop_node("start", 0.0, 0.0).unwrap();
    let b = session.drop_node("end", 0.0, 0.0).unwrap();

    session.handle(UiEvent::Click { node: a }).unwrap();
    let outcome = session.handle(UiEvent::Click { node: b }).unwrap();
    assert_eq!(
        outcome,
        Outcome::Selected {
            previous: Some(a),
            current: b
        }
    );

    assert_eq!(session.store().selected(), Some(b));
    assert!(!session.surface().is_highlighted(a));
    assert_eq!(session.surface().highlighted(), vec![b]);
    assert_eq!(session.panel().unwrap().node, b);
}

#[test]
fn test_name_input_updates_label() {
    let mut session = headless_session();
    let id = session.drop_node("email", 0.0, 0.0).unwrap();
    session.select_node(id).unwrap();

    session
        .handle(UiEvent::NameInput {
            value: "X".to_string(),
        })
        .unwrap();
    assert_eq!(session.store().node(id).unwrap().name, "X");
    assert_eq!(session.surface().label(id), Some("X"));
}

#[test]
fn test_guards_without_selection() {
    let mut session = headless_session();
    session.drop_node("catalogue", 0.0, 0.0).unwrap();

    assert_eq!(session.handle(UiEvent::Delete), Err(FlowError::NoSelection));
    assert_eq!(
        session.handle(UiEvent::NameInput {
            value: "x".to_string()
        }),
        Err(FlowError::NoSelection)
    );
    assert_eq!(session.handle(UiEvent::AddEntry), Err(FlowError::NoSelection));
    assert_eq!(session.store().len(), 1);
}

#[test]
fn test_entry_input_on_node_without_list_fails() {
    let mut session = headless_session();
    let id = session.drop_node("email", 0.0, 0.0).unwrap();
    session.select_node(id).unwrap();

    let result = session.handle(UiEvent::EntryInput {
        value: "Spring".to_string(),
    });
    assert!(matches!(
        result,
        Err(FlowError::PropertyMismatch {
            property: "entry",
            ..
        })
    ));
}

#[test]
fn test_delete_selected_cascades() {
    let mut session = headless_session();
    let a = session.drop_node("start", 0.0, 0.0).unwrap();
    let b = session.drop_node("decision", 0.0, 0.0).unwrap();
    let c = session.drop_node("end", 0.0, 0.0).unwrap();
    session.connect(a, b).unwrap();
    session.connect(b, c).unwrap();
    session.connect(a, c).unwrap();

    session.select_node(b).unwrap();
    let outcome = session.handle(UiEvent::Delete).unwrap();
    assert_eq!(
        outcome,
        Outcome::Deleted {
            node: b,
            purged: vec![Link::new(a, b), Link::new(b, c)],
        }
    );

    assert!(session.surface().element(b).is_none());
    assert!(session.panel().is_none());
    assert_eq!(session.store().selected(), None);

    let document = session.save_flow();
    assert_eq!(document.nodes.len(), 2);
    assert_eq!(
        document.connections,
        vec![ConnectionEntry {
            source: a.0,
            target: c.0
        }]
    );
}

#[test]
fn test_rejected_link_is_handed_back() {
    let mut session = headless_session();
    let a = session.drop_node("start", 0.0, 0.0).unwrap();

    let result = session.handle(UiEvent::Connect {
        source: a,
        target: a,
    });
    assert_eq!(result, Err(FlowError::SelfLink(a)));
    assert_eq!(session.surface().rejected_links(), [Link::new(a, a)]);
    assert!(session.store().list_connections().is_empty());
}

#[test]
fn test_replayed_event_script() {
    let script = r#"[
        { "event": "drop", "payload": "start", "client_x": 60, "client_y": 30 },
        { "event": "drop", "payload": "catalogue", "client_x": 260, "client_y": 30 },
        { "event": "connect", "source": 0, "target": 1 },
        { "event": "click", "node": 1 },
        { "event": "entry-input", "value": "Boots" },
        { "event": "add-entry" },
        { "event": "property", "edit": "add-product", "value": "Scarves" },
        { "event": "name-input", "value": "Winter" },
        { "event": "drag-end", "node": 1, "x": 300, "y": 90 },
        { "event": "save" }
    ]"#;
    let events: Vec<UiEvent> = serde_json::from_str(script).expect("Failed to parse script");

    let mut session = headless_session();
    let mut last = None;
    for event in events {
        last = Some(session.handle(event).expect("Event rejected"));
    }

    let Some(Outcome::Saved(document)) = last else {
        panic!("Expected the script to end with a save");
    };
    assert_eq!(document.nodes.len(), 2);
    let catalogue = &document.nodes[1];
    assert_eq!(catalogue.name, "Winter");
    assert_eq!((catalogue.x, catalogue.y), (300.0, 90.0));
    assert_eq!(
        catalogue.properties,
        PropertyBag::from(&Properties::Catalogue {
            products: vec!["Boots".to_string(), "Scarves".to_string()]
        })
    );
    assert_eq!(
        catalogue.properties.get("products"),
        Some(&serde_json::json!(["Boots", "Scarves"]))
    );
    assert_eq!(
        document.connections,
        vec![ConnectionEntry {
            source: 0,
            target: 1
        }]
    );
}

#[test]
fn test_resume_from_store_redraws_nodes() {
    let mut store = create_campaign_store();
    let ai = store.nodes()[3].id;
    store.select(ai).unwrap();

    let session = Session::with_store(store, HeadlessSurface::new(), EditorConfig::default());
    assert_eq!(session.surface().len(), 5);
    assert_eq!(session.surface().highlighted(), vec![ai]);
    assert!(matches!(
        session.panel().unwrap().section,
        Some(PropertySection::Select {
            selected: Algorithm::Collaborative,
            ..
        })
    ));
}
