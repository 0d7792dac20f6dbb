//! Comparison agent - metric-table comparison and summary rendering.

use async_trait::async_trait;
use recall_common::{Comparator, ComparisonKind, ComparisonOutcome, ComparisonStatus, Result};
use serde_json::Value;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::info;

/// One comparable thing: ordered numeric scores (out of 10) plus a
/// free-text note. Kept as ordered slices so the rendered summary lists
/// metrics in table order.
struct MetricRow {
    name: &'static str,
    scores: &'static [(&'static str, u8)],
    note_label: &'static str,
    note: &'static str,
}

const NEURAL_NETWORK_METRICS: &[MetricRow] = &[
    MetricRow {
        name: "CNN",
        scores: &[("speed", 8), ("accuracy", 9), ("interpretability", 5), ("complexity", 7)],
        note_label: "use_cases",
        note: "Images, Vision",
    },
    MetricRow {
        name: "RNN",
        scores: &[("speed", 6), ("accuracy", 7), ("interpretability", 4), ("complexity", 7)],
        note_label: "use_cases",
        note: "Sequences, Time-series",
    },
    MetricRow {
        name: "LSTM",
        scores: &[("speed", 5), ("accuracy", 9), ("interpretability", 3), ("complexity", 9)],
        note_label: "use_cases",
        note: "Long sequences",
    },
    MetricRow {
        name: "GRU",
        scores: &[("speed", 6), ("accuracy", 8), ("interpretability", 4), ("complexity", 7)],
        note_label: "use_cases",
        note: "Sequences, faster",
    },
    MetricRow {
        name: "Transformer",
        scores: &[("speed", 9), ("accuracy", 10), ("interpretability", 6), ("complexity", 9)],
        note_label: "use_cases",
        note: "NLP, parallel processing",
    },
    MetricRow {
        name: "DNN",
        scores: &[("speed", 7), ("accuracy", 7), ("interpretability", 5), ("complexity", 6)],
        note_label: "use_cases",
        note: "General purpose",
    },
];

const OPTIMIZER_METRICS: &[MetricRow] = &[
    MetricRow {
        name: "Gradient Descent",
        scores: &[("convergence", 4), ("speed", 3), ("stability", 8), ("memory", 9)],
        note_label: "best_for",
        note: "Simple convex problems",
    },
    MetricRow {
        name: "Adam",
        scores: &[("convergence", 9), ("speed", 8), ("stability", 9), ("memory", 6)],
        note_label: "best_for",
        note: "Deep learning (industry standard)",
    },
    MetricRow {
        name: "RMSProp",
        scores: &[("convergence", 8), ("speed", 7), ("stability", 7), ("memory", 7)],
        note_label: "best_for",
        note: "RNNs, non-stationary",
    },
    MetricRow {
        name: "Adagrad",
        scores: &[("convergence", 7), ("speed", 6), ("stability", 6), ("memory", 4)],
        note_label: "best_for",
        note: "Sparse data",
    },
    MetricRow {
        name: "Nadam",
        scores: &[("convergence", 9), ("speed", 8), ("stability", 8), ("memory", 6)],
        note_label: "best_for",
        note: "Adam with momentum",
    },
];

/// Comparison collaborator rendering metric tables as bar-chart text.
pub struct ComparisonAgent {
    id: String,
    comparison_count: AtomicU64,
}

impl ComparisonAgent {
    pub fn new() -> Self {
        Self {
            id: "comparison".into(),
            comparison_count: AtomicU64::new(0),
        }
    }
}

impl Default for ComparisonAgent {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Comparator for ComparisonAgent {
    fn id(&self) -> &str {
        &self.id
    }

    async fn compare(&self, items: &[Value]) -> Result<ComparisonOutcome> {
        let comparison_id = self.comparison_count.fetch_add(1, Ordering::SeqCst) + 1;

        info!(
            agent = %self.id,
            items = items.len(),
            comparison_id,
            "Comparing items"
        );

        if items.is_empty() {
            return Ok(ComparisonOutcome {
                status: ComparisonStatus::Fail,
                summary: "No data available for analysis. Try a comparison query like \
                          'Compare Adam vs SGD'"
                    .into(),
                confidence: 0.3,
                comparison_id,
                items_analyzed: None,
                comparison_kind: None,
            });
        }

        let blob = serde_json::to_string(items)?;
        let mut summary_lines: Vec<String> = Vec::new();
        let mut compared = false;

        if mentions_any(items, &blob, NEURAL_NETWORK_METRICS) {
            summary_lines.push("[NEURAL NETWORK COMPARISON]\n".into());
            summary_lines.push(format_comparison(&select_rows(items, NEURAL_NETWORK_METRICS)));
            compared = true;
        }

        if mentions_any(items, &blob, OPTIMIZER_METRICS) {
            summary_lines.push("[OPTIMIZATION TECHNIQUE COMPARISON]\n".into());
            summary_lines.push(format_comparison(&select_rows(items, OPTIMIZER_METRICS)));
            compared = true;
        }

        if summary_lines.is_empty() {
            summary_lines.push("[INFORMATION SUMMARY]\n".into());
            summary_lines.push(format!("Found {} items:\n", items.len()));
            for item in items {
                if let Some(obj) = item.as_object() {
                    let name = obj.get("name").and_then(Value::as_str).unwrap_or("Item");
                    summary_lines.push(format!("\n{}:", name));
                    for (key, value) in obj {
                        if key != "name" {
                            summary_lines
                                .push(format!("  - {}: {}", title_case(key), render_value(value)));
                        }
                    }
                } else {
                    summary_lines.push(format!("- {}", render_value(item)));
                }
            }
        }

        Ok(ComparisonOutcome {
            status: ComparisonStatus::Success,
            summary: summary_lines.join("\n"),
            confidence: if compared { 0.92 } else { 0.70 },
            comparison_id,
            items_analyzed: Some(items.len()),
            comparison_kind: Some(if compared {
                ComparisonKind::Comparative
            } else {
                ComparisonKind::Descriptive
            }),
        })
    }
}

/// Item name as carried by either an object's `name` field or a bare string.
fn item_name(item: &Value) -> Option<&str> {
    match item {
        Value::Object(obj) => obj.get("name").and_then(Value::as_str),
        Value::String(s) => Some(s),
        _ => None,
    }
}

/// Whether any metric-table entry shows up among the items, either as a
/// proper name or anywhere in the serialized blob. The blob check is
/// deliberately loose: a mention inside an attribute string still
/// triggers the comparison section.
fn mentions_any(items: &[Value], blob: &str, table: &[MetricRow]) -> bool {
    items
        .iter()
        .any(|item| item_name(item).is_some_and(|n| table.iter().any(|row| row.name == n)))
        || table.iter().any(|row| blob.contains(row.name))
}

/// Rows for the items actually present; the full table when none match
/// by name (the blob-only case).
fn select_rows<'a>(items: &[Value], table: &'a [MetricRow]) -> Vec<&'a MetricRow> {
    let matched: Vec<&MetricRow> = table
        .iter()
        .filter(|row| items.iter().any(|item| item_name(item) == Some(row.name)))
        .collect();
    if matched.is_empty() {
        table.iter().collect()
    } else {
        matched
    }
}

fn format_comparison(rows: &[&MetricRow]) -> String {
    let mut lines = Vec::new();
    for row in rows {
        lines.push(format!("\n**{}**", row.name));
        for &(metric, value) in row.scores {
            let filled = value as usize;
            let bar: String = "█".repeat(filled) + &"░".repeat(10usize.saturating_sub(filled));
            lines.push(format!("  {}: {} ({}/10)", capitalize(metric), bar, value));
        }
        lines.push(format!("  {}: {}", capitalize(row.note_label), row.note));
    }
    lines.join("\n")
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

fn title_case(key: &str) -> String {
    key.split('_')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
