//! Static metric reference material: the comparison table and the long-form
//! guide. Both are constant for the life of the process.

use ragrec_core::types::Block;
use serde::Serialize;

use crate::vocab::SimilarityMetric;

pub const GUIDE_LABEL: &str = "📘 What Do These Metrics Mean?";
pub const TABLE_HEADING: &str = "📊 Metric Comparison Table";
pub const TABLE_COLUMNS: [&str; 3] = ["Metric", "Best For", "Typical Use Cases"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MetricRow {
    pub metric: SimilarityMetric,
    pub best_for: &'static str,
    pub typical_use_cases: &'static str,
}

pub const METRIC_TABLE: [MetricRow; 5] = [
    MetricRow {
        metric: SimilarityMetric::Cosine,
        best_for: "Semantic NLP embeddings (BERT, SBERT)",
        typical_use_cases: "QA, Chatbots, Semantic Search",
    },
    MetricRow {
        metric: SimilarityMetric::Euclidean,
        best_for: "Dense vectors, image/text mix",
        typical_use_cases: "Document Search, Embedding Distance",
    },
    MetricRow {
        metric: SimilarityMetric::DotProduct,
        best_for: "Large-scale vector search (FAISS)",
        typical_use_cases: "FAISS, Pinecone RAG Retrieval",
    },
    MetricRow {
        metric: SimilarityMetric::Manhattan,
        best_for: "Sparse/high-dimensional data",
        typical_use_cases: "Rare in NLP; tabular/sparse",
    },
    MetricRow {
        metric: SimilarityMetric::Jaccard,
        best_for: "Set/tag/category comparison",
        typical_use_cases: "Topic Matching, Tag Search",
    },
];

/// One section of the long-form metric guide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GuideEntry {
    pub title: &'static str,
    pub summary: &'static str,
    pub detail: &'static str,
}

pub const METRIC_GUIDE: [GuideEntry; 5] = [
    GuideEntry {
        title: "Cosine Similarity",
        summary: "Measures angle between vectors (direction), ignoring length.",
        detail: "Best for: semantic similarity using BERT/SBERT/OpenAI embeddings.",
    },
    GuideEntry {
        title: "Euclidean Distance",
        summary: "Measures straight-line distance between points.",
        detail: "Use when magnitude matters (e.g., dense image vectors).",
    },
    GuideEntry {
        title: "Dot Product",
        summary: "Calculates inner product. Works best on normalized vectors.",
        detail: "Fast and used in FAISS or Pinecone for large-scale RAG.",
    },
    GuideEntry {
        title: "Manhattan Distance",
        summary: "Adds absolute differences between vector dimensions.",
        detail: "Rare in NLP, better for sparse and tabular embeddings.",
    },
    GuideEntry {
        title: "Jaccard Similarity",
        summary: "Measures overlap of binary sets.",
        detail: "Great for tag/keyword/topic matching.",
    },
];

pub fn guide_markdown() -> String {
    METRIC_GUIDE
        .iter()
        .map(|e| format!("**🔹 {}**  \n{}  \n{}", e.title, e.summary, e.detail))
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub fn table_block() -> Block {
    Block::Table {
        columns: TABLE_COLUMNS.iter().map(|c| (*c).to_string()).collect(),
        rows: METRIC_TABLE
            .iter()
            .map(|r| {
                vec![
                    r.metric.label().to_string(),
                    r.best_for.to_string(),
                    r.typical_use_cases.to_string(),
                ]
            })
            .collect(),
    }
}

/// Guide expander followed by the comparison table.
pub fn reference_blocks() -> Vec<Block> {
    vec![
        Block::expander(GUIDE_LABEL, guide_markdown()),
        Block::heading(TABLE_HEADING),
        table_block(),
    ]
}
