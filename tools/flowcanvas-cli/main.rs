use clap::{Parser, Subcommand};
use flowcanvas::prelude::*;
use itertools::Itertools;
use log::{error, info};
use std::fs;
use std::time::Instant;

/// Headless driver for the flow builder model
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the node types available in the toolbox
    Kinds,
    /// Replay a JSON array of UI events through a headless session
    Replay {
        /// Path to the events JSON file
        events_path: String,
        /// Optional editor configuration JSON file
        #[arg(short, long)]
        config: Option<String>,
        /// Write the resulting flow document here instead of stdout
        #[arg(short, long)]
        output: Option<String>,
        /// Resume from a binary session snapshot
        #[arg(long)]
        resume: Option<String>,
        /// Write a binary session snapshot after replaying
        #[arg(long)]
        snapshot: Option<String>,
        /// Stop at the first event the session rejects
        #[arg(long)]
        strict: bool,
    },
    /// Load a flow document, validate it and print a summary
    Inspect {
        /// Path to the flow JSON file
        flow_path: String,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match cli.command {
        Command::Kinds => print_kinds(),
        Command::Replay {
            events_path,
            config,
            output,
            resume,
            snapshot,
            strict,
        } => run_replay(events_path, config, output, resume, snapshot, strict),
        Command::Inspect { flow_path } => run_inspect(flow_path),
    }
}

fn print_kinds() {
    println!("{:<20} {:<20} {}", "TYPE", "LABEL", "ICON");
    for kind in NodeKind::ALL {
        println!("{:<20} {:<20} {}", kind.id(), kind.label(), kind.icon());
    }
}

fn run_replay(
    events_path: String,
    config_path: Option<String>,
    output_path: Option<String>,
    resume_path: Option<String>,
    snapshot_path: Option<String>,
    strict: bool,
) {
    let start = Instant::now();

    let config = match config_path {
        Some(path) => EditorConfig::from_file(&path)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to load config: {}", e))),
        None => EditorConfig::default(),
    };

    let events_json = fs::read_to_string(&events_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to read events file '{}': {}",
            &events_path, e
        ))
    });
    let events: Vec<UiEvent> = serde_json::from_str(&events_json)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse events JSON: {}", e)));

    let store = match resume_path {
        Some(path) => {
            info!("Resuming session from '{}'", path);
            Snapshot::from_file(&path)
                .map_err(|e| e.to_string())
                .and_then(|snapshot| snapshot.into_graph().map_err(|e| e.to_string()))
                .unwrap_or_else(|e| exit_with_error(&format!("Failed to resume: {}", e)))
        }
        None => GraphStore::new(),
    };

    let mut session = Session::with_store(store, HeadlessSurface::new(), config);
    let mut rejected = 0usize;
    for (index, event) in events.into_iter().enumerate() {
        if let Err(e) = session.handle(event) {
            if strict {
                exit_with_error(&format!("Event #{} rejected: {}", index, e));
            }
            error!("Event #{} rejected: {}", index, e);
            rejected += 1;
        }
    }

    let document = session.save_flow();
    match output_path {
        Some(path) => document
            .save(&path)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to write flow: {}", e))),
        None => {
            let json = document
                .to_json_pretty()
                .unwrap_or_else(|e| exit_with_error(&format!("Failed to encode flow: {}", e)));
            println!("{}", json);
        }
    }

    if let Some(path) = snapshot_path {
        Snapshot::capture(session.store())
            .save(&path)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to write snapshot: {}", e)));
        info!("Wrote session snapshot to '{}'", path);
    }

    info!(
        "Replay finished in {:?}: {} node(s), {} link(s), {} rejected event(s)",
        start.elapsed(),
        session.store().len(),
        session.store().list_connections().len(),
        rejected
    );
}

fn run_inspect(flow_path: String) {
    let document = FlowDocument::from_file(&flow_path)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to load flow: {}", e)));
    let keying = document.keying;
    let store = document
        .into_graph()
        .unwrap_or_else(|e| exit_with_error(&format!("Invalid flow: {}", e)));

    println!("Flow '{}' ({:?} keyed)", flow_path, keying);
    println!("Nodes: {}", store.len());
    for node in store.nodes() {
        println!(
            "  [{}] {:<20} {:<20} ({}, {})",
            node.id,
            node.kind.id(),
            node.name,
            node.position.x,
            node.position.y
        );
    }

    let counts = store
        .nodes()
        .iter()
        .counts_by(|n| n.kind.id())
        .into_iter()
        .sorted()
        .map(|(kind, count)| format!("{}={}", kind, count))
        .join(", ");
    println!("By type: {}", counts);

    println!("Connections: {}", store.list_connections().len());
    for link in store.list_connections() {
        println!("  {}", link);
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
