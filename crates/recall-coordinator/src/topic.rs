//! Canonical search-topic extraction from raw queries.

use serde_json::Value;

/// Vocabulary of terms worth searching for on their own.
const TECHNICAL_TERMS: &[&str] = &[
    "adam",
    "sgd",
    "gradient",
    "optimizer",
    "cnn",
    "rnn",
    "lstm",
    "transformer",
    "neural",
    "network",
    "reinforcement",
    "learning",
    "deep",
    "bert",
    "gpt",
    "classification",
    "regression",
    "clustering",
    "optimization",
    "algorithm",
];

/// Filler words that never make a useful topic.
const STOP_WORDS: &[&str] = &[
    "research", "analyze", "compare", "find", "what", "did", "we", "about", "earlier",
    "summarize", "is", "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for",
    "of", "with", "by", "from",
];

/// Markers that a query wants several topics compared.
const COMPARISON_MARKERS: &[&str] = &["compare", "vs", "versus", "difference", "vs."];

const PUNCTUATION: &[char] = &['?', '!', '.', ',', ';', ':', '\'', '"', '(', ')'];

/// Derive the topic to search for from a raw query.
///
/// When `previous` holds the output of an earlier retrieval step, the
/// topic is its first item; this is how a later step learns what was
/// just retrieved. An empty `previous` falls back to `"general"`.
///
/// Otherwise the query is scanned for technical vocabulary: comparison
/// queries with at least two terms probe for both at once, single terms
/// are taken as-is, and failing that the longest non-stop-word survives
/// (first occurrence wins length ties). The final fallback is the
/// literal `"general"`.
pub fn extract_topic(query: &str, previous: Option<&[Value]>) -> String {
    if let Some(items) = previous {
        return match items.first() {
            Some(first) => topic_from_value(first),
            None => "general".into(),
        };
    }

    let lowered = query.to_lowercase();
    let cleaned: String = lowered.chars().filter(|c| !PUNCTUATION.contains(c)).collect();
    let words: Vec<&str> = cleaned.split_whitespace().collect();

    let is_comparison = COMPARISON_MARKERS.iter().any(|m| lowered.contains(m));
    let found: Vec<&str> = words
        .iter()
        .copied()
        .filter(|w| TECHNICAL_TERMS.contains(w))
        .collect();

    if is_comparison && found.len() >= 2 {
        return found[..2].join(" ");
    }
    if let Some(first) = found.first() {
        return (*first).to_string();
    }

    let mut longest: Option<&str> = None;
    for word in words
        .iter()
        .copied()
        .filter(|w| !STOP_WORDS.contains(w) && w.len() > 2)
    {
        if longest.map_or(true, |best| word.len() > best.len()) {
            longest = Some(word);
        }
    }

    longest
        .map(str::to_string)
        .unwrap_or_else(|| "general".into())
}

/// Render a retrieved item as a topic string: strings pass through
/// verbatim, objects contribute their name, anything else its JSON form.
fn topic_from_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Object(obj) => obj
            .get("name")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| value.to_string()),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_comparison_query_joins_two_terms() {
        assert_eq!(extract_topic("Compare Adam vs SGD", None), "adam sgd");
    }

    #[test]
    fn test_comparison_caps_at_two_terms() {
        assert_eq!(
            extract_topic("Compare adam, sgd and gradient methods", None),
            "adam sgd"
        );
    }

    #[test]
    fn test_single_technical_term() {
        assert_eq!(extract_topic("What is CNN?", None), "cnn");
    }

    #[test]
    fn test_first_technical_term_in_word_order() {
        // No comparison marker: only the first term is probed.
        assert_eq!(extract_topic("neural networks and transformers", None), "neural");
    }

    #[test]
    fn test_longest_word_fallback() {
        // No technical vocabulary: the longest surviving word wins.
        assert_eq!(
            extract_topic("Tell me something interesting", None),
            "interesting"
        );
    }

    #[test]
    fn test_length_ties_break_on_first_occurrence() {
        assert_eq!(extract_topic("foo bar baz", None), "foo");
    }

    #[test]
    fn test_stop_words_and_short_words_filtered() {
        assert_eq!(extract_topic("What did we do?", None), "general");
    }

    #[test]
    fn test_empty_query_falls_back_to_general() {
        assert_eq!(extract_topic("", None), "general");
    }

    #[test]
    fn test_previous_string_item_verbatim() {
        let items = vec![json!("gradient descent")];
        assert_eq!(extract_topic("ignored", Some(&items)), "gradient descent");
    }

    #[test]
    fn test_previous_object_item_by_name() {
        let items = vec![json!({"name": "Adam", "type": "adaptive"})];
        assert_eq!(extract_topic("ignored", Some(&items)), "Adam");
    }

    #[test]
    fn test_previous_empty_is_general() {
        let items: Vec<Value> = vec![];
        assert_eq!(extract_topic("Compare Adam vs SGD", Some(&items)), "general");
    }
}
