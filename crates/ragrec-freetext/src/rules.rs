use serde::Serialize;

pub const DEFAULT_VECTOR_STORE: &str = "FAISS";
pub const DEFAULT_METRIC: &str = "Cosine";
pub const DEFAULT_EMBEDDING_MODEL: &str = "SBERT";

/// The three picks produced for one description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub vector_store: &'static str,
    pub metric: &'static str,
    pub embedding_model: &'static str,
}

impl Default for Recommendation {
    fn default() -> Self {
        Self {
            vector_store: DEFAULT_VECTOR_STORE,
            metric: DEFAULT_METRIC,
            embedding_model: DEFAULT_EMBEDDING_MODEL,
        }
    }
}

/// A keyword rule. Any keyword present in the lower-cased description fires
/// the rule, which overwrites every field it sets.
struct Rule {
    name: &'static str,
    keywords: &'static [&'static str],
    vector_store: Option<&'static str>,
    metric: Option<&'static str>,
    embedding_model: Option<&'static str>,
}

impl Rule {
    fn matches(&self, text: &str) -> bool {
        self.keywords.iter().any(|k| text.contains(k))
    }

    fn apply(&self, rec: Recommendation) -> Recommendation {
        Recommendation {
            vector_store: self.vector_store.unwrap_or(rec.vector_store),
            metric: self.metric.unwrap_or(rec.metric),
            embedding_model: self.embedding_model.unwrap_or(rec.embedding_model),
        }
    }
}

// Order matters: later rules overwrite earlier ones on shared fields.
const RULES: [Rule; 7] = [
    Rule {
        name: "realtime-chat",
        keywords: &["chat", "chatbot", "real-time"],
        vector_store: Some("Pinecone"),
        metric: None,
        embedding_model: Some("OpenAI (text-embedding-3-small)"),
    },
    Rule {
        name: "multilingual",
        keywords: &["multilingual"],
        vector_store: None,
        metric: None,
        embedding_model: Some("LaBSE or Gemini"),
    },
    Rule {
        name: "offline",
        keywords: &["pdf", "offline", "low resource"],
        vector_store: Some("FAISS"),
        metric: None,
        embedding_model: Some("MiniLM or SBERT"),
    },
    Rule {
        name: "enterprise",
        keywords: &["enterprise", "internal", "on-prem", "secure"],
        vector_store: Some("Milvus or FAISS"),
        metric: None,
        embedding_model: Some("SambaNova"),
    },
    Rule {
        name: "tagging",
        keywords: &["tag", "category", "classification"],
        vector_store: None,
        metric: Some("Jaccard"),
        embedding_model: Some("MiniLM"),
    },
    Rule {
        name: "long-form",
        keywords: &["long document", "summarize"],
        vector_store: None,
        metric: Some("Dot Product"),
        embedding_model: Some("BGE or Claude"),
    },
    Rule {
        name: "accuracy",
        keywords: &["accuracy"],
        vector_store: Some("Qdrant"),
        metric: Some("Dot Product"),
        embedding_model: None,
    },
];

/// Names of the rules a description fires, in evaluation order.
pub fn matched_rules(description: &str) -> Vec<&'static str> {
    let text = description.to_lowercase();
    RULES.iter().filter(|r| r.matches(&text)).map(|r| r.name).collect()
}

/// Recommend a setup for a free-text use case.
///
/// Matching is case-insensitive substring containment. Every rule is checked;
/// the last matching rule decides each field it touches. Text that matches
/// nothing yields FAISS / Cosine / SBERT.
pub fn recommend(description: &str) -> Recommendation {
    let text = description.to_lowercase();
    RULES
        .iter()
        .filter(|rule| rule.matches(&text))
        .fold(Recommendation::default(), |rec, rule| {
            tracing::debug!(rule = rule.name, "keyword rule matched");
            rule.apply(rec)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_without_fields_is_identity() {
        let rule = Rule {
            name: "noop",
            keywords: &["x"],
            vector_store: None,
            metric: None,
            embedding_model: None,
        };
        assert_eq!(rule.apply(Recommendation::default()), Recommendation::default());
    }

    #[test]
    fn matched_rules_follow_evaluation_order() {
        assert_eq!(matched_rules("Accuracy for a CHATBOT"), vec!["realtime-chat", "accuracy"]);
        assert!(matched_rules("").is_empty());
    }
}
