//! Task planning from intent scores.

use crate::intent::score_intent;
use recall_common::{StepKind, TaskPlan};
use tracing::debug;

/// Plan the steps for a query.
///
/// A strong comparison signal schedules retrieval followed by comparison;
/// any retrieval signal schedules a lone retrieval; and the fallback is
/// still a lone retrieval at low confidence, so the plan is never empty.
pub fn plan_tasks(query: &str) -> TaskPlan {
    let scores = score_intent(query);

    let plan = if scores.comparison > 0.5 {
        let confidence = if scores.comparison >= 0.7 { 0.90 } else { 0.75 };
        TaskPlan::new(vec![StepKind::Retrieval, StepKind::Comparison], confidence)
    } else if scores.retrieval > 0.1 {
        TaskPlan::single(
            StepKind::Retrieval,
            (0.4 + scores.retrieval / 10.0).min(0.85),
        )
    } else {
        TaskPlan::single(StepKind::Retrieval, 0.4)
    };

    debug!(
        retrieval_score = scores.retrieval,
        comparison_score = scores.comparison,
        steps = plan.steps.len(),
        confidence = plan.confidence,
        "Planned tasks"
    );

    plan
}
