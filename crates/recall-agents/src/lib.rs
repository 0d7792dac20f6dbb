//! Collaborator agents for Recall.
//!
//! This crate provides the two collaborators the orchestrator sequences:
//!
//! - **Knowledge Agent**: resolves a topic string against static domain
//!   knowledge tables
//! - **Comparison Agent**: turns a set of retrieved items into a rendered
//!   metric comparison or a descriptive listing
//!
//! Both implement the seams in `recall-common` (`Retriever`,
//! `Comparator`); the orchestrator only ever sees the traits.

pub mod comparison;
pub mod knowledge;

pub use comparison::ComparisonAgent;
pub use knowledge::KnowledgeAgent;
