//! Query-routing coordinator for Recall.
//!
//! The coordinator is the decision engine that:
//! 1. Receives free-text queries
//! 2. Checks conversation context and the memory store for short-circuits
//! 3. Plans retrieval/comparison steps from weighted intent scores
//! 4. Sequences the collaborators and persists the combined result
//!
//! # Control flow
//!
//! ```text
//! query
//!   │  (appended to history first, always)
//!   ▼
//! context phrase + prior queries? ──hit──► source: "context" (0.75)
//!   │ no
//!   ▼
//! memory retrieve ≥ 0.85 ? ─────────hit──► source: "memory" (0.85)
//!   │ miss
//!   ▼
//! intent scores ──► plan ──► [retrieval] / [retrieval, comparison]
//!   │
//!   ▼
//! execute steps ──► store result ──► source: "execution"
//! ```

pub mod config;
pub mod intent;
pub mod orchestrator;
pub mod planner;
pub mod topic;

pub use config::CoordinatorConfig;
pub use intent::{score_intent, IntentScores};
pub use orchestrator::Coordinator;
pub use planner::plan_tasks;
pub use topic::extract_topic;
