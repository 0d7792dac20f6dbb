//! Recall demo driver binary.
//!
//! Usage:
//!   recall                              # run the scripted demo queries
//!   recall --query "Compare Adam vs SGD"
//!   recall --config config.toml
//!   recall --store-path ./data/memory_store.json
//!
//! # Environment Variables
//!
//! - `RUST_LOG` - tracing filter (default: info)

use recall_agents::{ComparisonAgent, KnowledgeAgent};
use recall_common::{ResponseEnvelope, ResponsePayload};
use recall_coordinator::{Coordinator, CoordinatorConfig};
use recall_memory::MemoryStore;
use serde_json::Value;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEMO_QUERIES: &[&str] = &[
    "Research optimization techniques and analyze which is better",
    "Research neural networks and summarize",
    "What did we learn about optimization techniques earlier?",
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Parse command line arguments (simple for now)
    let args: Vec<String> = std::env::args().collect();
    let mut config_path: Option<String> = None;
    let mut store_path: Option<PathBuf> = None;
    let mut query: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => {
                if i + 1 < args.len() {
                    config_path = Some(args[i + 1].clone());
                    i += 1;
                }
            }
            "--store-path" | "-s" => {
                if i + 1 < args.len() {
                    store_path = Some(PathBuf::from(&args[i + 1]));
                    i += 1;
                }
            }
            "--query" | "-q" => {
                if i + 1 < args.len() {
                    query = Some(args[i + 1].clone());
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Recall demo driver");
                println!();
                println!("Usage: recall [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --config <FILE>      Path to config.toml file");
                println!("  -s, --store-path <FILE>  Path to the memory store JSON log");
                println!("  -q, --query <TEXT>       Run a single query instead of the demo");
                println!("  -h, --help               Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    // Load configuration
    let config = if let Some(path) = config_path {
        tracing::info!(path = %path, "Loading configuration");
        CoordinatorConfig::from_file(&path)?
    } else {
        tracing::info!("Using default configuration");
        CoordinatorConfig::default()
    };

    let mut store_config = config.memory.clone();
    if let Some(path) = store_path {
        store_config.path = path;
    }

    let memory = Arc::new(MemoryStore::open(store_config).await?);
    let coordinator = Coordinator::new(
        memory.clone(),
        Arc::new(KnowledgeAgent::new()),
        Arc::new(ComparisonAgent::new()),
    );

    let queries: Vec<String> = match query {
        Some(q) => vec![q],
        None => DEMO_QUERIES.iter().map(|q| q.to_string()).collect(),
    };

    for q in &queries {
        println!("\nQuery: {}", q);
        let envelope = coordinator.handle_query(q).await?;
        print_envelope(&envelope);
    }

    println!();
    println!(
        "Session queries: {}, records in store: {}",
        coordinator.query_history().await.len(),
        memory.count().await
    );

    Ok(())
}

fn print_envelope(envelope: &ResponseEnvelope) {
    println!("Source: {}", envelope.source);
    println!("Confidence: {:.0}%", envelope.confidence * 100.0);

    match &envelope.response {
        ResponsePayload::Execution(result) => {
            if let Some(retrieval) = &result.retrieval {
                println!(
                    "\nRetrieval - Topic: {}, Items: {}",
                    retrieval.topic, retrieval.items_found
                );
                for item in retrieval.result.iter().take(3) {
                    println!("  - {}", item_label(item));
                }
            }
            if let Some(comparison) = &result.comparison {
                println!(
                    "\nComparison - Status: {}, Confidence: {:.0}%",
                    comparison.status,
                    comparison.confidence * 100.0
                );
                // Bars render poorly in plain terminals; flatten them.
                let flat = comparison.summary.replace('█', "=").replace('░', "-");
                let preview: String = flat.chars().take(200).collect();
                println!("  {}...", preview);
            }
        }
        ResponsePayload::Context(summary) => {
            println!("Previous topics: {}", summary.previous_topics.join(", "));
            println!("Recalled results: {}", summary.summary.len());
        }
        ResponsePayload::Memory(_) => {
            println!("Answered from memory.");
        }
    }

    for line in &envelope.execution_trace {
        println!("  [trace] {}", line);
    }
}

fn item_label(item: &Value) -> String {
    match item {
        Value::Object(obj) => obj
            .get("name")
            .and_then(Value::as_str)
            .unwrap_or("Unknown")
            .to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
