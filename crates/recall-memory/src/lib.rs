//! Persisted similarity memory for Recall.
//!
//! Records are indexed under a topic string by a letter-frequency
//! embedding and retrieved by cosine similarity against a threshold.
//! The backing log is a single JSON file, append-only in effect: records
//! are never updated or individually deleted, only added or cleared
//! wholesale.
//!
//! ```text
//! store(topic, payload) ──► embed ──► append ──► rewrite log ──► mem_<n>
//!
//! retrieve(topic, t) ────► embed ──► scan all ──► best cosine ≥ t ?
//!                                                   │yes        │no
//!                                                   ▼           ▼
//!                                                payload      nothing
//! ```

pub mod embedding;
pub mod store;
pub mod types;

pub use embedding::{cosine_similarity, embed, EMBEDDING_DIM};
pub use store::MemoryStore;
pub use types::{MemoryRecord, StoreConfig};
