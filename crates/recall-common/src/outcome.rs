//! Collaborator result contracts.
//!
//! These are the structures the orchestrator receives from the retrieval
//! and comparison collaborators. The orchestrator only inspects
//! [`RetrievalOutcome::result`] to feed the next step; everything else is
//! carried through to storage and the caller unchanged.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// How much of the request a retrieval was able to satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Completeness {
    High,
    Low,
}

/// How a retrieval matched its topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryType {
    /// Narrowed to specific items within a category
    Specific,
    /// Matched a whole category
    Category,
    /// No match at all
    None,
}

/// Result of a retrieval collaborator call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrievalOutcome {
    /// Matched items; consumed as input by a following comparison step
    pub result: Vec<Value>,

    /// The topic the retrieval was asked for
    pub topic: String,

    /// Category the topic resolved to, if any
    pub matched_category: Option<String>,

    /// Monotonic per-collaborator call counter
    pub retrieval_id: u64,

    pub completeness: Completeness,

    pub items_found: usize,

    pub query_type: QueryType,
}

/// Whether a comparison produced a usable summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComparisonStatus {
    Success,
    Fail,
}

impl std::fmt::Display for ComparisonStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::Fail => write!(f, "fail"),
        }
    }
}

/// The shape of summary a comparison produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComparisonKind {
    /// Metric-table comparison across matched items
    Comparative,
    /// Plain listing of whatever items were supplied
    Descriptive,
}

/// Result of a comparison collaborator call.
///
/// The orchestrator stores this whole structure and never inspects
/// `status` itself; surfacing failure is a display concern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonOutcome {
    pub status: ComparisonStatus,

    /// Human-readable comparison text
    pub summary: String,

    /// The collaborator's own confidence in the summary, in `[0, 1]`
    pub confidence: f32,

    /// Monotonic per-collaborator call counter
    pub comparison_id: u64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items_analyzed: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comparison_kind: Option<ComparisonKind>,
}
