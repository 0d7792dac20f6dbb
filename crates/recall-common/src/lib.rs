//! Common types and traits shared across Recall crates.
//!
//! This crate provides the foundational abstractions the coordinator and
//! collaborator crates use to communicate: the error type, the task plan,
//! the collaborator contracts, and the response envelope.

pub mod envelope;
pub mod error;
pub mod outcome;
pub mod plan;
pub mod traits;

pub use envelope::{
    ContextSummary, ExecutionResult, ResponseEnvelope, ResponsePayload, ResponseSource,
};
pub use error::{RecallError, Result};
pub use outcome::{
    Completeness, ComparisonKind, ComparisonOutcome, ComparisonStatus, QueryType, RetrievalOutcome,
};
pub use plan::{StepKind, TaskPlan};
pub use traits::{Comparator, Retriever};
