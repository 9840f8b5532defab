//! Page content for the free-text form.

use ragrec_core::error::{Error, Result};
use ragrec_core::types::Block;

use crate::explain::explain_config;
use crate::rules::{matched_rules, recommend};

pub const HEADING: &str = "📊 RAG Application Recommender";
pub const INTRO: &str = "Enter your **RAG application use case**. We'll:\n\
- ✅ Recommend the best vector store, similarity metric, and embedding model\n\
- 🧠 Explain **why** they are ideal for your use case";
pub const PROMPT: &str = "📝 Describe your RAG use case:";
pub const EMPTY_INPUT_WARNING: &str = "❗ Please enter a use case.";
pub const RESULT_HEADING: &str = "📌 Recommended RAG Configuration";
pub const EXPLANATION_HEADING: &str = "📘 Why This Setup Works";

/// Blocks shown before any submission.
pub fn intro_blocks() -> Vec<Block> {
    vec![Block::title(HEADING), Block::markdown(INTRO)]
}

/// Result blocks for a submitted description.
///
/// Blank or whitespace-only input never reaches the recommender.
pub fn submit(description: &str) -> Result<Vec<Block>> {
    if description.trim().is_empty() {
        return Err(Error::EmptyInput);
    }
    tracing::info!(rules = ?matched_rules(description), "recommending from description");

    let rec = recommend(description);
    let mut blocks = vec![
        Block::heading(RESULT_HEADING),
        Block::key_values([
            ("Vector Store", rec.vector_store),
            ("Similarity Metric", rec.metric),
            ("Embedding Model", rec.embedding_model),
        ]),
    ];
    let explanation = explain_config(rec.vector_store, rec.metric, rec.embedding_model);
    if !explanation.is_empty() {
        blocks.push(Block::heading(EXPLANATION_HEADING));
        blocks.push(Block::markdown(explanation));
    }
    Ok(blocks)
}

/// Full page for one submission: intro, then either the result or the
/// empty-input warning.
pub fn present(description: &str) -> Vec<Block> {
    let mut blocks = intro_blocks();
    match submit(description) {
        Ok(result) => blocks.extend(result),
        Err(e) => {
            tracing::warn!(error = %e, "free-text submission rejected");
            blocks.push(Block::warning(EMPTY_INPUT_WARNING));
        }
    }
    blocks
}
