//! Task planning types.

use serde::{Deserialize, Serialize};

/// The kind of step a plan can schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepKind {
    /// Look up a topic through the retrieval collaborator
    Retrieval,
    /// Compare the previous step's items through the comparison collaborator
    Comparison,
}

/// An ordered plan of steps plus the planner's confidence in it.
///
/// Plans are computed fresh per query and never persisted. A plan is
/// never empty: the planner always falls back to a single retrieval step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskPlan {
    pub steps: Vec<StepKind>,

    /// Confidence in the plan, in `[0, 1]`
    pub confidence: f32,
}

impl TaskPlan {
    pub fn new(steps: Vec<StepKind>, confidence: f32) -> Self {
        Self {
            steps,
            confidence: confidence.clamp(0.0, 1.0),
        }
    }

    pub fn single(step: StepKind, confidence: f32) -> Self {
        Self::new(vec![step], confidence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_kind_serialization() {
        assert_eq!(
            serde_json::to_string(&StepKind::Retrieval).unwrap(),
            "\"retrieval\""
        );
        assert_eq!(
            serde_json::to_string(&StepKind::Comparison).unwrap(),
            "\"comparison\""
        );
    }

    #[test]
    fn test_plan_confidence_clamped() {
        let plan = TaskPlan::single(StepKind::Retrieval, 1.7);
        assert_eq!(plan.confidence, 1.0);

        let plan = TaskPlan::single(StepKind::Retrieval, -0.2);
        assert_eq!(plan.confidence, 0.0);
    }

    #[test]
    fn test_plan_roundtrip() {
        let plan = TaskPlan::new(vec![StepKind::Retrieval, StepKind::Comparison], 0.9);
        let json = serde_json::to_string(&plan).unwrap();
        let back: TaskPlan = serde_json::from_str(&json).unwrap();

        assert_eq!(back.steps, plan.steps);
        assert_eq!(back.confidence, plan.confidence);
    }
}
