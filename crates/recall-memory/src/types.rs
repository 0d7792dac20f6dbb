//! Memory record and store configuration types.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::PathBuf;

/// A single persisted memory entry.
///
/// Records are immutable after creation; the log they live in is
/// append-only. The metadata fields carry serde defaults so old logs stay
/// readable when fields are added.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryRecord {
    /// Store-assigned id, `mem_<n>`, never reused within a log
    pub id: String,

    /// The text this record was indexed under
    pub topic: String,

    /// Letter-frequency embedding of `topic`
    pub vector: Vec<f32>,

    /// Opaque payload; the store never looks inside beyond metadata copy
    pub record: Value,

    /// Creation time (Unix millis), informational only
    pub timestamp: u64,

    #[serde(default = "default_confidence")]
    pub confidence: f32,

    #[serde(default = "default_source_agent")]
    pub source_agent: String,

    #[serde(default)]
    pub keywords: Vec<String>,
}

fn default_confidence() -> f32 {
    0.8
}

fn default_source_agent() -> String {
    "unknown".into()
}

impl MemoryRecord {
    /// Build a record, copying metadata out of the payload when present.
    pub(crate) fn new(id: String, topic: &str, vector: Vec<f32>, record: Value) -> Self {
        let confidence = record
            .get("confidence")
            .and_then(Value::as_f64)
            .map(|v| v as f32)
            .unwrap_or_else(default_confidence);
        let source_agent = record
            .get("source_agent")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(default_source_agent);
        let keywords = record
            .get("keywords")
            .and_then(Value::as_array)
            .map(|kws| {
                kws.iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Self {
            id,
            topic: topic.to_string(),
            vector,
            record,
            timestamp: now_millis(),
            confidence,
            source_agent,
            keywords,
        }
    }
}

fn now_millis() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}

/// Configuration for the memory store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Path to the persisted JSON log
    pub path: PathBuf,

    /// Minimum cosine similarity for a retrieval hit
    #[serde(default = "default_threshold")]
    pub default_threshold: f32,

    /// Additive epsilon in the similarity denominator; guards the
    /// all-zero-vector case, exact magnitude is not load-bearing
    #[serde(default = "default_epsilon")]
    pub similarity_epsilon: f32,
}

fn default_threshold() -> f32 {
    0.85
}

fn default_epsilon() -> f32 {
    1e-6
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("./data/memory_store.json"),
            default_threshold: default_threshold(),
            similarity_epsilon: default_epsilon(),
        }
    }
}
