//! cortex-scan CLI tool
//!
//! Inspects the snapshot state tree written by cortex-node daemons.
//!
//! Usage:
//!   cortex-scan nodes [root]
//!   cortex-scan split [root]
//!   cortex-scan weights [root]
//!   cortex-scan all [root]
//!   cortex-scan json [root]

use cortex_state::{
    Error, FsSnapshotStore, NodeSummary, ScoreAggregator, SplitReader, SplitReport,
    UNKNOWN_PLACEHOLDER,
};
use serde::Serialize;

/// Machine-readable dump of the whole read model.
#[derive(Debug, Serialize)]
struct ScanDump {
    nodes: Vec<NodeSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    split: Option<SplitReport>,
}

fn print_usage() {
    eprintln!("cortex-scan - Inspect the Cortex snapshot state tree");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  cortex-scan nodes [root]    List node scores");
    eprintln!("  cortex-scan split [root]    Show the protocol reserve split");
    eprintln!("  cortex-scan weights [root]  Show current weights (first node)");
    eprintln!("  cortex-scan all [root]      Everything above (default)");
    eprintln!("  cortex-scan json [root]     Machine-readable dump");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  CORTEX_STATE_ROOT  Snapshot root when [root] is omitted (default: state/nodes)");
}

fn show_nodes(store: &FsSnapshotStore) -> Result<(), String> {
    let summaries = ScoreAggregator::new(store.clone())
        .list_nodes()
        .map_err(|e| e.to_string())?;

    if summaries.is_empty() {
        println!("(none)");
        return Ok(());
    }

    println!("{:<10} {:>8}  {}", "Node", "Score", "Updated");
    for summary in &summaries {
        println!("{:<10} {:>8.4}  {}", summary.node, summary.score, summary.ts);
    }
    Ok(())
}

fn show_weights(store: &FsSnapshotStore) -> Result<(), String> {
    let weights = ScoreAggregator::new(store.clone())
        .current_weights()
        .map_err(|e| e.to_string())?;

    println!("{:>8} {:>8} {:>8} {:>8} {:>8}", "w0", "w1", "w2", "w3", "w4");
    match weights.known() {
        Some(w) => println!(
            "{:>8.3} {:>8.3} {:>8.3} {:>8.3} {:>8.3}",
            w.w0, w.w1, w.w2, w.w3, w.w4
        ),
        None => {
            let dash = UNKNOWN_PLACEHOLDER;
            println!("{:>8} {:>8} {:>8} {:>8} {:>8}", dash, dash, dash, dash, dash);
        }
    }
    Ok(())
}

fn show_split_report(report: &SplitReport) {
    println!("Mode: {}", report.mode);
    match report.split.as_ref().known() {
        Some(split) => println!(
            "Innovation: {}%  Governance: {}%",
            split.innovation, split.governance
        ),
        None => println!(
            "Innovation: {}%  Governance: {}%",
            UNKNOWN_PLACEHOLDER, UNKNOWN_PLACEHOLDER
        ),
    }
    println!("Updated: {}", report.ts);
}

fn show_split(store: &FsSnapshotStore) -> Result<(), String> {
    let report = SplitReader::new(store.clone())
        .current_split()
        .map_err(|e| e.to_string())?;
    show_split_report(&report);
    Ok(())
}

fn show_all(store: &FsSnapshotStore) -> Result<(), String> {
    match SplitReader::new(store.clone()).current_split() {
        Ok(report) => show_split_report(&report),
        Err(Error::NoSplitData) => println!("No reserve split published yet"),
        Err(e) => return Err(e.to_string()),
    }
    println!();
    show_nodes(store)?;
    println!();
    show_weights(store)
}

fn show_json(store: &FsSnapshotStore) -> Result<(), String> {
    let nodes = ScoreAggregator::new(store.clone())
        .list_nodes()
        .map_err(|e| e.to_string())?;

    let split = match SplitReader::new(store.clone()).current_split() {
        Ok(report) => Some(report),
        Err(Error::NoSplitData) => None,
        Err(e) => return Err(e.to_string()),
    };

    let dump = ScanDump { nodes, split };
    let json = serde_json::to_string_pretty(&dump).map_err(|e| e.to_string())?;
    println!("{}", json);
    Ok(())
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let command = args.get(1).map(String::as_str).unwrap_or("all");
    if matches!(command, "-h" | "--help" | "help") {
        print_usage();
        return;
    }

    let root = args
        .get(2)
        .cloned()
        .or_else(|| std::env::var("CORTEX_STATE_ROOT").ok())
        .unwrap_or_else(|| "state/nodes".to_string());
    let store = FsSnapshotStore::new(root.as_str());

    let result = match command {
        "nodes" => show_nodes(&store),
        "split" => show_split(&store),
        "weights" => show_weights(&store),
        "all" => show_all(&store),
        "json" => show_json(&store),
        other => {
            eprintln!("Unknown command: {}", other);
            print_usage();
            std::process::exit(1);
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
