//! Collaborator traits.
//!
//! These traits are defined in `recall-common` so that both the coordinator
//! and collaborator crates can reference them without circular dependencies.

use crate::{ComparisonOutcome, Result, RetrievalOutcome};
use async_trait::async_trait;
use serde_json::Value;

/// The retrieval collaborator: resolves a topic string to a set of items.
#[async_trait]
pub trait Retriever: Send + Sync {
    /// The collaborator's unique identifier.
    fn id(&self) -> &str;

    /// Look up a topic and return everything known about it.
    async fn retrieve_topic(&self, topic: &str) -> Result<RetrievalOutcome>;
}

/// The comparison collaborator: turns a set of items into a summary.
#[async_trait]
pub trait Comparator: Send + Sync {
    /// The collaborator's unique identifier.
    fn id(&self) -> &str;

    /// Compare the given items and produce a summary.
    async fn compare(&self, items: &[Value]) -> Result<ComparisonOutcome>;
}
