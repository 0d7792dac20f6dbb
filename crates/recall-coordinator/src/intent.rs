//! Weighted keyword intent scoring.
//!
//! Scoring is substring containment over two fixed weighted tables, not
//! tokenized matching: "adam" scores inside "adamant". Every matching key
//! contributes its weight; there is no early exit. Downstream thresholds
//! depend on these exact tables, so they are not tuned casually.

/// Keywords suggesting the caller wants information retrieved.
const RETRIEVAL_KEYWORDS: &[(&str, f32)] = &[
    ("research", 0.8),
    ("find", 0.7),
    ("learn", 0.6),
    ("about", 0.5),
    ("what", 0.4),
    ("how", 0.6),
    ("explain", 0.7),
    ("describe", 0.6),
    ("tell", 0.5),
    ("information", 0.8),
    ("adam", 0.9),
    ("sgd", 0.9),
    ("optimizer", 0.9),
    ("neural", 0.8),
    ("network", 0.7),
    ("cnn", 0.9),
    ("rnn", 0.9),
    ("lstm", 0.9),
    ("transformer", 0.9),
    ("bert", 0.9),
    ("gpt", 0.9),
    ("reinforcement", 0.8),
    ("q-learning", 0.9),
    ("optimization", 0.9),
    ("algorithm", 0.7),
];

/// Keywords suggesting the caller wants things compared.
const COMPARISON_KEYWORDS: &[(&str, f32)] = &[
    ("compare", 0.9),
    ("difference", 0.9),
    ("vs", 0.9),
    ("versus", 0.9),
    ("better", 0.8),
    ("worse", 0.8),
    ("effectiveness", 0.85),
    ("efficiency", 0.85),
    ("pros", 0.8),
    ("cons", 0.8),
    ("advantages", 0.9),
    ("disadvantages", 0.9),
    ("summarize", 0.7),
    ("summary", 0.7),
    ("overview", 0.75),
];

/// Accumulated relevance per task category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntentScores {
    pub retrieval: f32,
    pub comparison: f32,
}

/// Score a query against both keyword tables.
pub fn score_intent(query: &str) -> IntentScores {
    let q = query.to_lowercase();

    let retrieval = RETRIEVAL_KEYWORDS
        .iter()
        .filter(|(keyword, _)| q.contains(keyword))
        .map(|(_, weight)| weight)
        .sum();
    let comparison = COMPARISON_KEYWORDS
        .iter()
        .filter(|(keyword, _)| q.contains(keyword))
        .map(|(_, weight)| weight)
        .sum();

    IntentScores {
        retrieval,
        comparison,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_scores_zero() {
        let scores = score_intent("");
        assert_eq!(scores.retrieval, 0.0);
        assert_eq!(scores.comparison, 0.0);
    }

    #[test]
    fn test_comparison_query() {
        // "compare" (0.9) + "vs" (0.9); "adam" (0.9) + "sgd" (0.9).
        let scores = score_intent("Compare Adam vs SGD");
        assert!((scores.comparison - 1.8).abs() < 1e-6);
        assert!((scores.retrieval - 1.8).abs() < 1e-6);
    }

    #[test]
    fn test_substring_containment() {
        // Containment, not token match: "adam" scores inside "adamant".
        let scores = score_intent("adamant");
        assert!((scores.retrieval - 0.9).abs() < 1e-6);
    }

    #[test]
    fn test_multiple_keys_accumulate() {
        // "explain" (0.7) + "transformer" (0.9).
        let scores = score_intent("Explain transformers");
        assert!((scores.retrieval - 1.6).abs() < 1e-6);
        assert_eq!(scores.comparison, 0.0);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(score_intent("VERSUS"), score_intent("versus"));
    }
}
