//! Page content for the selection form.

use ragrec_core::error::Result;
use ragrec_core::types::Block;
use serde::Serialize;

use crate::explain::metric_callout;
use crate::recommend::recommend_model_for;
use crate::reference::reference_blocks;
use crate::vocab::{SimilarityMetric, UseCase, VectorStore};

pub const HEADING: &str = "🔍 RAG Model & Similarity Metric Recommender";
pub const INTRO: &str = "This tool helps you choose the best **model** and **similarity metric** \
for your RAG (Retrieval-Augmented Generation) application based on your use case.";
pub const USE_CASE_PROMPT: &str = "📌 Select Use Case";
pub const VECTOR_STORE_PROMPT: &str = "📦 Choose Vector Store";
pub const METRIC_PROMPT: &str = "📏 Select Similarity Metric";
pub const RESULT_HEADING: &str = "✅ Recommended Setup:";

/// The three dropdown values of one submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Selection {
    pub use_case: UseCase,
    pub vector_store: VectorStore,
    pub metric: SimilarityMetric,
}

impl Default for Selection {
    /// First option of every dropdown.
    fn default() -> Self {
        Self {
            use_case: UseCase::QuestionAnswering,
            vector_store: VectorStore::Faiss,
            metric: SimilarityMetric::Cosine,
        }
    }
}

impl Selection {
    /// Strictly parse three labels; the first unknown one is reported.
    pub fn parse(use_case: &str, vector_store: &str, metric: &str) -> Result<Self> {
        Ok(Self {
            use_case: use_case.parse()?,
            vector_store: vector_store.parse()?,
            metric: metric.parse()?,
        })
    }
}

pub fn intro_blocks() -> Vec<Block> {
    vec![Block::title(HEADING), Block::markdown(INTRO)]
}

pub fn submit(selection: &Selection) -> Vec<Block> {
    let model = recommend_model_for(selection.use_case, selection.vector_store);
    tracing::info!(
        use_case = %selection.use_case,
        vector_store = %selection.vector_store,
        model,
        "model recommended"
    );
    vec![
        Block::heading(RESULT_HEADING),
        Block::key_values([
            ("Model", model),
            ("Vector Store", selection.vector_store.label()),
            ("Similarity Metric", selection.metric.label()),
        ]),
        Block::info(metric_callout(selection.metric.label())),
    ]
}

/// Full page: intro, the result when something was submitted, then the
/// reference material that is always shown.
pub fn present(selection: Option<&Selection>) -> Vec<Block> {
    let mut blocks = intro_blocks();
    if let Some(selection) = selection {
        blocks.extend(submit(selection));
    }
    blocks.extend(reference_blocks());
    blocks
}

fn option_list<T: std::fmt::Display>(options: &[T]) -> String {
    options
        .iter()
        .enumerate()
        .map(|(i, o)| format!("{}. {o}", i + 1))
        .collect::<Vec<_>>()
        .join("\n")
}

/// The three dropdowns and their values, numbered from 1.
pub fn options_blocks() -> Vec<Block> {
    vec![
        Block::heading(USE_CASE_PROMPT),
        Block::markdown(option_list(UseCase::ALL)),
        Block::heading(VECTOR_STORE_PROMPT),
        Block::markdown(option_list(VectorStore::ALL)),
        Block::heading(METRIC_PROMPT),
        Block::markdown(option_list(SimilarityMetric::ALL)),
    ]
}
