//! Knowledge agent - static-table topic retrieval.

use async_trait::async_trait;
use once_cell::sync::Lazy;
use recall_common::{Completeness, QueryType, Result, RetrievalOutcome, Retriever};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::info;

struct Category {
    name: &'static str,
    items: Vec<Value>,
}

static KNOWLEDGE_BASE: Lazy<Vec<Category>> = Lazy::new(|| {
    vec![
        Category {
            name: "optimization techniques",
            items: vec![
                json!({"name": "Gradient Descent", "type": "iterative", "complexity": "O(n)", "use_case": "Basic optimization"}),
                json!({"name": "Adam", "type": "adaptive", "complexity": "O(n)", "use_case": "Deep learning, fast convergence"}),
                json!({"name": "RMSProp", "type": "adaptive", "complexity": "O(n)", "use_case": "RNNs, non-stationary problems"}),
                json!({"name": "Adagrad", "type": "adaptive", "complexity": "O(n)", "use_case": "Sparse data, decreasing learning rate"}),
                json!({"name": "Nadam", "type": "hybrid", "complexity": "O(n)", "use_case": "Adam with Nesterov momentum"}),
            ],
        },
        Category {
            name: "neural networks",
            items: vec![
                json!({"name": "CNN", "architecture": "Convolutional", "best_for": "Image processing", "strength": "Local feature extraction"}),
                json!({"name": "RNN", "architecture": "Recurrent", "best_for": "Sequences", "strength": "Temporal dependencies"}),
                json!({"name": "LSTM", "architecture": "Recurrent", "best_for": "Long sequences", "strength": "Vanishing gradient solution"}),
                json!({"name": "GRU", "architecture": "Recurrent", "best_for": "Long sequences", "strength": "Simplified LSTM"}),
                json!({"name": "Transformer", "architecture": "Attention-based", "best_for": "NLP, sequences", "strength": "Parallelizable, self-attention"}),
                json!({"name": "DNN", "architecture": "Fully-connected", "best_for": "General tasks", "strength": "Versatile"}),
            ],
        },
        Category {
            name: "reinforcement learning",
            items: vec![
                json!({"name": "Q-Learning", "type": "Value-based", "model_free": true, "exploration": "epsilon-greedy"}),
                json!({"name": "Policy Gradient", "type": "Policy-based", "model_free": true, "gradient_based": true}),
                json!({"name": "Actor-Critic", "type": "Hybrid", "components": ["Actor", "Critic"], "advantage": "Reduced variance"}),
                json!({"name": "DQN", "type": "Deep Q-Learning", "innovation": "Deep neural networks", "stability": "Experience replay"}),
                json!({"name": "PPO", "type": "Policy-based", "algorithm": "Trust region", "stability": "Clipped objective"}),
            ],
        },
        Category {
            name: "machine learning models",
            items: vec![
                json!({"name": "Linear Regression", "type": "regression", "complexity": "Low", "interpretability": "High"}),
                json!({"name": "Logistic Regression", "type": "classification", "probabilistic": true, "use_case": "Binary/multiclass"}),
                json!({"name": "SVM", "type": "classification", "kernel_trick": true, "high_dimensions": true}),
                json!({"name": "Decision Trees", "type": "tree-based", "interpretability": "High", "risk": "Overfitting"}),
                json!({"name": "Random Forest", "type": "ensemble", "robustness": "High", "parallel_friendly": true}),
                json!({"name": "K-Means", "type": "clustering", "unsupervised": true, "complexity": "O(nkt)"}),
            ],
        },
        Category {
            name: "transformers",
            items: vec![
                json!({"name": "BERT", "task": "Encoder", "training": "Masked Language Model", "applications": ["Classification", "NER", "QA"]}),
                json!({"name": "GPT", "task": "Decoder", "training": "Causal Language Model", "applications": ["Text generation", "Summarization"]}),
                json!({"name": "T5", "task": "Encoder-Decoder", "training": "Text-to-Text", "applications": ["All NLP tasks"]}),
                json!({"name": "RoBERTa", "task": "Encoder", "improvement_over": "BERT", "training": "Optimized MLM"}),
                json!({"name": "ELECTRA", "task": "Encoder", "training": "Discriminative", "efficiency": "Pre-training efficient"}),
            ],
        },
    ]
});

/// Keyword -> category routing for topics that name a thing rather than
/// a whole category. Scan order breaks score ties in favor of the
/// earliest entry.
const KEYWORD_CATEGORIES: &[(&str, &str)] = &[
    ("adam", "optimization techniques"),
    ("sgd", "optimization techniques"),
    ("gradient", "optimization techniques"),
    ("descent", "optimization techniques"),
    ("optimizer", "optimization techniques"),
    ("optimization", "optimization techniques"),
    ("rmsprop", "optimization techniques"),
    ("adagrad", "optimization techniques"),
    ("nadam", "optimization techniques"),
    ("neural", "neural networks"),
    ("network", "neural networks"),
    ("cnn", "neural networks"),
    ("rnn", "neural networks"),
    ("lstm", "neural networks"),
    ("gru", "neural networks"),
    ("transformer", "neural networks"),
    ("dnn", "neural networks"),
    ("convolutional", "neural networks"),
    ("recurrent", "neural networks"),
    ("reinforcement", "reinforcement learning"),
    ("q-learning", "reinforcement learning"),
    ("policy", "reinforcement learning"),
    ("actor", "reinforcement learning"),
    ("critic", "reinforcement learning"),
    ("dqn", "reinforcement learning"),
    ("ppo", "reinforcement learning"),
    ("regression", "machine learning models"),
    ("classification", "machine learning models"),
    ("svm", "machine learning models"),
    ("decision", "machine learning models"),
    ("tree", "machine learning models"),
    ("forest", "machine learning models"),
    ("k-means", "machine learning models"),
    ("clustering", "machine learning models"),
    ("bert", "transformers"),
    ("gpt", "transformers"),
    ("t5", "transformers"),
    ("roberta", "transformers"),
    ("electra", "transformers"),
    ("attention", "transformers"),
    ("deep", "neural networks"),
    ("learning", "reinforcement learning"),
];

/// Retrieval collaborator backed by the static knowledge tables.
pub struct KnowledgeAgent {
    id: String,
    retrieval_count: AtomicU64,
}

impl KnowledgeAgent {
    pub fn new() -> Self {
        Self {
            id: "knowledge".into(),
            retrieval_count: AtomicU64::new(0),
        }
    }

    fn outcome(
        &self,
        retrieval_id: u64,
        topic: &str,
        category: &str,
        result: Vec<Value>,
        query_type: QueryType,
    ) -> RetrievalOutcome {
        RetrievalOutcome {
            items_found: result.len(),
            result,
            topic: topic.to_string(),
            matched_category: Some(category.to_string()),
            retrieval_id,
            completeness: Completeness::High,
            query_type,
        }
    }
}

impl Default for KnowledgeAgent {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Retriever for KnowledgeAgent {
    fn id(&self) -> &str {
        &self.id
    }

    async fn retrieve_topic(&self, topic: &str) -> Result<RetrievalOutcome> {
        let retrieval_id = self.retrieval_count.fetch_add(1, Ordering::SeqCst) + 1;
        let topic_lower = topic.to_lowercase();

        info!(
            agent = %self.id,
            topic = %topic,
            retrieval_id,
            "Retrieving topic"
        );

        // A topic that names a whole category gets everything in it.
        for category in KNOWLEDGE_BASE.iter() {
            if topic_lower.contains(category.name) {
                return Ok(self.outcome(
                    retrieval_id,
                    topic,
                    category.name,
                    category.items.clone(),
                    QueryType::Category,
                ));
            }
        }

        // Otherwise route by the longest matching keyword; longer keywords
        // are more specific.
        let mut best_len = 0;
        let mut best_category: Option<&str> = None;
        let mut specific_item: Option<&str> = None;
        for &(keyword, category) in KEYWORD_CATEGORIES {
            if topic_lower.contains(keyword) && keyword.len() > best_len {
                best_len = keyword.len();
                best_category = Some(category);
                specific_item = Some(keyword);
            }
        }

        if let Some(name) = best_category {
            if let Some(category) = KNOWLEDGE_BASE.iter().find(|c| c.name == name) {
                let mut result = category.items.clone();
                // Narrow to the named item when the keyword is specific
                // enough to be an item name fragment.
                if let Some(keyword) = specific_item {
                    if best_len >= 3 {
                        let filtered: Vec<Value> = category
                            .items
                            .iter()
                            .filter(|item| {
                                item.get("name")
                                    .and_then(Value::as_str)
                                    .map(|n| n.to_lowercase().contains(keyword))
                                    .unwrap_or(false)
                            })
                            .cloned()
                            .collect();
                        if !filtered.is_empty() {
                            result = filtered;
                        }
                    }
                }

                let query_type = if result.len() < category.items.len() {
                    QueryType::Specific
                } else {
                    QueryType::Category
                };
                return Ok(self.outcome(retrieval_id, topic, name, result, query_type));
            }
        }

        // Nothing matched; hand back a usable suggestion instead of failing.
        Ok(RetrievalOutcome {
            result: vec![json!(
                "No specific match found. Try queries like: 'What is CNN?', \
                 'Compare Adam and SGD', 'Explain Transformers', 'What is LSTM?'"
            )],
            topic: topic.to_string(),
            matched_category: None,
            retrieval_id,
            completeness: Completeness::Low,
            items_found: 0,
            query_type: QueryType::None,
        })
    }
}
