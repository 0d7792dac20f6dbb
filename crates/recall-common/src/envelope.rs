//! The response envelope returned to every caller.
//!
//! Whatever path a query takes through the coordinator, the caller gets
//! one of three envelope shapes, distinguished by [`ResponseSource`].
//! UIs, CLIs, and test harnesses all consume this same structure.

use crate::{ComparisonOutcome, RetrievalOutcome};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Which path produced a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseSource {
    /// Assembled from prior-query memory hits
    Context,
    /// A single direct memory hit
    Memory,
    /// Fresh plan execution
    Execution,
}

impl std::fmt::Display for ResponseSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Context => write!(f, "context"),
            Self::Memory => write!(f, "memory"),
            Self::Execution => write!(f, "execution"),
        }
    }
}

/// Summary of prior conversation, returned on the context path.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContextSummary {
    /// Fixed preamble line
    pub context: String,

    /// Every prior query in the session, oldest first
    pub previous_topics: Vec<String>,

    /// The memory payloads recalled for those queries
    pub summary: Vec<Value>,
}

impl ContextSummary {
    pub fn new(previous_topics: Vec<String>, summary: Vec<Value>) -> Self {
        Self {
            context: "Based on our earlier conversations".into(),
            previous_topics,
            summary,
        }
    }
}

/// The combined output of an executed plan, keyed by step kind.
///
/// Absent steps serialize to no key at all, so the persisted shape is
/// exactly the step-kind -> step-output map the store expects.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExecutionResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retrieval: Option<RetrievalOutcome>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comparison: Option<ComparisonOutcome>,
}

/// The response body of a query, modeled as an explicit union.
///
/// Serialized untagged so the wire shape matches the persisted log: a
/// context summary, a step-kind keyed execution map, or the raw payload
/// recalled from memory. The structured variants reject unknown fields,
/// and the raw `Value` catch-all comes last, so deserialization cannot
/// misclassify an arbitrary memory payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResponsePayload {
    Context(ContextSummary),
    Execution(ExecutionResult),
    Memory(Value),
}

/// The envelope around every response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    /// Whether the response was served without executing a plan
    pub from_memory: bool,

    pub response: ResponsePayload,

    /// Confidence in the response, in `[0, 1]`
    pub confidence: f32,

    /// Human-readable trace of completed plan steps; only the execution
    /// path produces one
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub execution_trace: Vec<String>,

    pub source: ResponseSource,
}

impl ResponseEnvelope {
    /// Envelope for the context path. Confidence is fixed at 0.75.
    pub fn context(summary: ContextSummary) -> Self {
        Self {
            from_memory: true,
            response: ResponsePayload::Context(summary),
            confidence: 0.75,
            execution_trace: Vec::new(),
            source: ResponseSource::Context,
        }
    }

    /// Envelope for a direct memory hit. Confidence is fixed at 0.85.
    pub fn memory(payload: Value) -> Self {
        Self {
            from_memory: true,
            response: ResponsePayload::Memory(payload),
            confidence: 0.85,
            execution_trace: Vec::new(),
            source: ResponseSource::Memory,
        }
    }

    /// Envelope for a fresh execution.
    pub fn execution(result: ExecutionResult, confidence: f32, trace: Vec<String>) -> Self {
        Self {
            from_memory: false,
            response: ResponsePayload::Execution(result),
            confidence,
            execution_trace: trace,
            source: ResponseSource::Execution,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Completeness, QueryType};
    use serde_json::json;

    fn sample_retrieval() -> RetrievalOutcome {
        RetrievalOutcome {
            result: vec![json!({"name": "Adam"})],
            topic: "adam".into(),
            matched_category: Some("optimization techniques".into()),
            retrieval_id: 1,
            completeness: Completeness::High,
            items_found: 1,
            query_type: QueryType::Specific,
        }
    }

    #[test]
    fn test_memory_envelope_omits_trace() {
        let envelope = ResponseEnvelope::memory(json!({"cached": true}));
        let json = serde_json::to_value(&envelope).unwrap();

        assert_eq!(json.get("source").unwrap(), "memory");
        assert_eq!(json.get("from_memory").unwrap(), true);
        assert!(json.get("execution_trace").is_none());
    }

    #[test]
    fn test_execution_envelope_shape() {
        let result = ExecutionResult {
            retrieval: Some(sample_retrieval()),
            comparison: None,
        };
        let envelope =
            ResponseEnvelope::execution(result, 0.56, vec!["Retrieval on 'adam' completed".into()]);
        let json = serde_json::to_value(&envelope).unwrap();

        assert_eq!(json.get("source").unwrap(), "execution");
        assert_eq!(json.get("from_memory").unwrap(), false);
        assert_eq!(json["execution_trace"][0], "Retrieval on 'adam' completed");
        assert_eq!(json["response"]["retrieval"]["topic"], "adam");
        // Absent steps leave no key behind in the result map.
        assert!(json["response"].get("comparison").is_none());
    }

    #[test]
    fn test_context_envelope_confidence() {
        let envelope = ResponseEnvelope::context(ContextSummary::new(
            vec!["What is CNN?".into()],
            vec![json!({"retrieval": {}})],
        ));

        assert_eq!(envelope.confidence, 0.75);
        assert!(envelope.from_memory);
    }

    #[test]
    fn test_payload_union_roundtrip() {
        // An arbitrary object payload must come back as the memory variant,
        // not get swallowed by one of the structured shapes.
        let envelope = ResponseEnvelope::memory(json!({"topic": "adam", "items": [1, 2]}));
        let json = serde_json::to_string(&envelope).unwrap();
        let back: ResponseEnvelope = serde_json::from_str(&json).unwrap();

        assert!(matches!(back.response, ResponsePayload::Memory(_)));

        let envelope = ResponseEnvelope::context(ContextSummary::new(vec!["q".into()], vec![]));
        let json = serde_json::to_string(&envelope).unwrap();
        let back: ResponseEnvelope = serde_json::from_str(&json).unwrap();

        assert!(matches!(back.response, ResponsePayload::Context(_)));
    }
}
