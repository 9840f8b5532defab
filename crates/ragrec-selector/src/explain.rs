//! Fixed prose explaining each similarity metric.

use crate::vocab::SimilarityMetric;

pub const NO_EXPLANATION: &str = "No explanation available.";
pub const NO_EXPLANATION_ICON: &str = "ℹ️";

impl SimilarityMetric {
    /// Short badge shown in front of the metric's explanation.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Cosine => "✅",
            Self::Euclidean => "📐",
            Self::DotProduct => "⚡",
            Self::Manhattan => "↔️",
            Self::Jaccard => "🔢",
        }
    }
}

pub fn explain_metric_for(metric: SimilarityMetric) -> &'static str {
    match metric {
        SimilarityMetric::Cosine => {
            "Best for semantic embeddings like BERT, SBERT, OpenAI. Measures angle between vectors, scale-invariant."
        }
        SimilarityMetric::Euclidean => {
            "Measures straight-line distance. Use when vector magnitude matters (less common in NLP)."
        }
        SimilarityMetric::DotProduct => {
            "Fast inner product for large-scale retrieval. Often used in FAISS. Normalize vectors first."
        }
        SimilarityMetric::Manhattan => {
            "Adds absolute differences between dimensions. Rare in NLP; better for sparse vectors."
        }
        SimilarityMetric::Jaccard => {
            "Compares binary/categorical data — useful for tags, keywords, or topic sets."
        }
    }
}

/// Explanation for a metric label, or [`NO_EXPLANATION`] for anything that
/// is not one of the five known labels.
pub fn explain_metric(metric: &str) -> &'static str {
    metric
        .parse::<SimilarityMetric>()
        .map_or(NO_EXPLANATION, explain_metric_for)
}

/// Explanation with its badge, as shown in the result callout.
pub fn metric_callout(metric: &str) -> String {
    match metric.parse::<SimilarityMetric>() {
        Ok(m) => format!("{} {}", m.icon(), explain_metric_for(m)),
        Err(_) => format!("{NO_EXPLANATION_ICON} {NO_EXPLANATION}"),
    }
}
