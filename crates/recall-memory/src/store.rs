//! The append-only similarity memory store.

use crate::embedding::{cosine_similarity, embed};
use crate::types::{MemoryRecord, StoreConfig};
use recall_common::Result;
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

/// Append-only store of memory records with similarity retrieval.
///
/// The whole log is kept in memory and rewritten to disk on every
/// mutation, so a `store` call that returns has durably persisted its
/// record. Single-writer by design; a multi-session deployment needs an
/// external lock around the store.
pub struct MemoryStore {
    config: StoreConfig,
    records: Arc<RwLock<Vec<MemoryRecord>>>,
}

impl MemoryStore {
    /// Open a store backed by the configured log file.
    ///
    /// A missing, unreadable, or corrupt log is treated as empty; the
    /// store never fails to open over bad data, it resets.
    pub async fn open(config: StoreConfig) -> Result<Self> {
        let records = match tokio::fs::read_to_string(&config.path).await {
            Ok(raw) => match serde_json::from_str::<Vec<MemoryRecord>>(&raw) {
                Ok(records) => records,
                Err(e) => {
                    warn!(
                        path = %config.path.display(),
                        error = %e,
                        "Memory log is not valid, starting empty"
                    );
                    Vec::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => {
                warn!(
                    path = %config.path.display(),
                    error = %e,
                    "Memory log unreadable, starting empty"
                );
                Vec::new()
            }
        };

        info!(
            path = %config.path.display(),
            records = records.len(),
            "Opened memory store"
        );

        Ok(Self {
            config,
            records: Arc::new(RwLock::new(records)),
        })
    }

    /// Append a record indexed under `topic` and persist the log.
    ///
    /// Returns the assigned id. The write hits disk before this returns.
    pub async fn store(&self, topic: &str, payload: Value) -> Result<String> {
        let vector = embed(topic);
        let mut records = self.records.write().await;

        let id = format!("mem_{}", records.len() + 1);
        records.push(MemoryRecord::new(id.clone(), topic, vector, payload));
        self.persist(&records).await?;

        debug!(id = %id, topic = %topic, "Stored memory record");
        Ok(id)
    }

    /// Retrieve the best-matching payload for `topic`, if any record
    /// scores at or above `threshold`.
    ///
    /// Full linear scan in insertion order; the first record encountered
    /// wins similarity ties.
    pub async fn retrieve(&self, topic: &str, threshold: f32) -> Option<Value> {
        let query = embed(topic);
        let records = self.records.read().await;

        let mut best_score = 0.0f32;
        let mut best: Option<&MemoryRecord> = None;
        for record in records.iter() {
            let score = cosine_similarity(&query, &record.vector, self.config.similarity_epsilon);
            if score > best_score {
                best_score = score;
                best = Some(record);
            }
        }

        match best {
            Some(record) if best_score >= threshold => {
                debug!(
                    topic = %topic,
                    matched = %record.topic,
                    score = best_score,
                    "Memory hit"
                );
                Some(record.record.clone())
            }
            _ => {
                debug!(topic = %topic, best_score, threshold, "No memory hit");
                None
            }
        }
    }

    /// Retrieve with the configured default threshold.
    pub async fn retrieve_default(&self, topic: &str) -> Option<Value> {
        self.retrieve(topic, self.config.default_threshold).await
    }

    /// Payloads of every record whose keyword metadata intersects
    /// `keywords`, in insertion order.
    pub async fn search_by_keywords(&self, keywords: &[String]) -> Vec<Value> {
        let records = self.records.read().await;
        records
            .iter()
            .filter(|record| record.keywords.iter().any(|k| keywords.contains(k)))
            .map(|record| record.record.clone())
            .collect()
    }

    /// Every payload in insertion order.
    pub async fn get_all(&self) -> Vec<Value> {
        let records = self.records.read().await;
        records.iter().map(|record| record.record.clone()).collect()
    }

    /// Number of records in the store.
    pub async fn count(&self) -> usize {
        self.records.read().await.len()
    }

    /// Truncate the store to empty and persist. Idempotent.
    pub async fn clear(&self) -> Result<()> {
        let mut records = self.records.write().await;
        records.clear();
        self.persist(&records).await?;

        info!(path = %self.config.path.display(), "Cleared memory store");
        Ok(())
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Rewrite the whole log. Writes a sibling temp file and renames it
    /// over the log so a crash mid-write cannot truncate existing records.
    async fn persist(&self, records: &[MemoryRecord]) -> Result<()> {
        if let Some(parent) = self.config.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let json = serde_json::to_string_pretty(records)?;
        let tmp = self.config.path.with_extension("tmp");
        tokio::fs::write(&tmp, json).await?;
        tokio::fs::rename(&tmp, &self.config.path).await?;
        Ok(())
    }
}
