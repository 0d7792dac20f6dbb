//! The query-routing decision engine.

use crate::planner::plan_tasks;
use crate::topic::extract_topic;
use recall_common::{
    Comparator, ContextSummary, ExecutionResult, ResponseEnvelope, Result, Retriever, StepKind,
};
use recall_memory::MemoryStore;
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

/// Phrases that signal the caller is asking about prior conversation
/// rather than new material. Substring containment over the lowercased
/// query, same as intent scoring.
const CONTEXT_PHRASES: &[&str] = &[
    "earlier",
    "before",
    "previously",
    "we",
    "we discussed",
    "we talked",
    "what did",
    "remember",
    "previous",
];

/// The coordinator that routes each query to one of three paths:
/// context recall, direct memory recall, or fresh plan execution.
///
/// Owns the session's query history. The memory store and the two
/// collaborators are shared handles; nothing here is ambient global
/// state.
pub struct Coordinator {
    memory: Arc<MemoryStore>,
    retriever: Arc<dyn Retriever>,
    comparator: Arc<dyn Comparator>,
    history: RwLock<Vec<String>>,
}

impl Coordinator {
    pub fn new(
        memory: Arc<MemoryStore>,
        retriever: Arc<dyn Retriever>,
        comparator: Arc<dyn Comparator>,
    ) -> Self {
        info!(
            retriever = %retriever.id(),
            comparator = %comparator.id(),
            "Initializing coordinator"
        );

        Self {
            memory,
            retriever,
            comparator,
            history: RwLock::new(Vec::new()),
        }
    }

    /// The session's queries so far, oldest first.
    pub async fn query_history(&self) -> Vec<String> {
        self.history.read().await.clone()
    }

    pub fn memory(&self) -> &Arc<MemoryStore> {
        &self.memory
    }

    /// Handle one query end-to-end and return its response envelope.
    ///
    /// Every query is appended to the history before any other
    /// processing, whichever path it ends up taking. Every path
    /// terminates in a well-formed envelope; there is no fatal
    /// condition here.
    pub async fn handle_query(&self, query: &str) -> Result<ResponseEnvelope> {
        let prior = {
            let mut history = self.history.write().await;
            let prior = history.clone();
            history.push(query.to_string());
            prior
        };

        info!(
            query = %query,
            history_len = prior.len() + 1,
            "Handling query"
        );

        // Path 1: the query refers back to the conversation itself.
        if let Some(envelope) = self.try_context_path(query, &prior).await {
            return Ok(envelope);
        }

        // Path 2: a near-identical query was already answered and stored.
        if let Some(hit) = self.memory.retrieve_default(query).await {
            debug!(query = %query, "Answering from memory");
            return Ok(ResponseEnvelope::memory(hit));
        }

        // Path 3: plan and execute fresh.
        let plan = plan_tasks(query);

        let mut result = ExecutionResult::default();
        let mut last_output: Option<Vec<Value>> = None;
        let mut trace = Vec::new();

        for step in &plan.steps {
            match step {
                StepKind::Retrieval => {
                    let topic = extract_topic(query, last_output.as_deref());
                    let outcome = self.retriever.retrieve_topic(&topic).await?;
                    debug!(
                        topic = %topic,
                        items_found = outcome.items_found,
                        "Retrieval step completed"
                    );
                    trace.push(format!("Retrieval on '{}' completed", topic));
                    last_output = Some(outcome.result.clone());
                    result.retrieval = Some(outcome);
                }
                StepKind::Comparison => {
                    let items = last_output.clone().unwrap_or_default();
                    let outcome = self.comparator.compare(&items).await?;
                    debug!(status = %outcome.status, "Comparison step completed");
                    trace.push("Comparison completed".to_string());
                    // Comparison reads the running output but never
                    // replaces it; no step follows a comparison.
                    result.comparison = Some(outcome);
                }
            }
        }

        self.memory
            .store(query, serde_json::to_value(&result)?)
            .await?;

        Ok(ResponseEnvelope::execution(result, plan.confidence, trace))
    }

    /// Replay prior queries against the store when the query references
    /// earlier conversation. Returns an envelope only if something was
    /// actually recalled; otherwise the caller falls through to the
    /// normal paths.
    async fn try_context_path(&self, query: &str, prior: &[String]) -> Option<ResponseEnvelope> {
        let lowered = query.to_lowercase();
        let uses_context = CONTEXT_PHRASES.iter().any(|p| lowered.contains(p));
        if !uses_context || prior.is_empty() {
            return None;
        }

        let mut summary = Vec::new();
        for prev_query in prior {
            if let Some(hit) = self.memory.retrieve_default(prev_query).await {
                summary.push(hit);
            }
        }

        if summary.is_empty() {
            return None;
        }

        debug!(
            hits = summary.len(),
            prior_queries = prior.len(),
            "Answering from conversation context"
        );
        Some(ResponseEnvelope::context(ContextSummary::new(
            prior.to_vec(),
            summary,
        )))
    }
}
