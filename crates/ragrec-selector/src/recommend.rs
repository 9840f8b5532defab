//! Generative model lookup keyed on use case.

use crate::vocab::{UseCase, VectorStore};

pub const FALLBACK_MODEL: &str = "Any open-source model + lightweight embedding (e.g., MiniLM)";

fn lookup(use_case: Option<UseCase>, on_elasticsearch: bool) -> &'static str {
    match use_case {
        Some(UseCase::QuestionAnswering) if on_elasticsearch => "LLaMA 3",
        Some(UseCase::QuestionAnswering) => "GPT-4",
        Some(UseCase::Chatbot) => "GPT-4 Turbo",
        Some(UseCase::Summarization) => "Claude 3",
        Some(UseCase::DocumentSearch) => "Mistral 7B",
        Some(UseCase::TagTopicMatching) | None => FALLBACK_MODEL,
    }
}

/// Generative model for a use case. The vector store only matters for
/// question answering.
pub fn recommend_model_for(use_case: UseCase, vector_store: VectorStore) -> &'static str {
    lookup(Some(use_case), vector_store == VectorStore::Elasticsearch)
}

/// Same lookup over raw labels. Total: an unknown use case gets
/// [`FALLBACK_MODEL`], an unknown store counts as "not Elasticsearch".
pub fn recommend_model(use_case: &str, vector_store: &str) -> &'static str {
    let parsed = use_case.parse::<UseCase>().ok();
    if parsed.is_none() {
        tracing::debug!(use_case, "unknown use case, using fallback model");
    }
    let on_elasticsearch =
        vector_store.parse::<VectorStore>().ok() == Some(VectorStore::Elasticsearch);
    lookup(parsed, on_elasticsearch)
}
