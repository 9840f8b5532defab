//! Prose justifications for a free-text recommendation.

const FAISS: &str =
    "🔹 **Vector Store: FAISS** — Lightweight, open-source, and works well **offline**. Ideal for rural or low-resource environments.";
const PINECONE: &str =
    "🔹 **Vector Store: Pinecone** — Scalable and fast. Great for **real-time chatbots**.";
const MILVUS: &str =
    "🔹 **Vector Store: Milvus** — Designed for **enterprise/private deployments** with secure vector search.";
const QDRANT: &str =
    "🔹 **Vector Store: Qdrant** — Modern, fast, and optimized for **high accuracy** use cases.";

const COSINE: &str =
    "🔹 **Similarity Metric: Cosine** — Ideal for measuring **semantic similarity**, especially with sentence-level embeddings.";
const DOT_PRODUCT: &str =
    "🔹 **Similarity Metric: Dot Product** — Efficient for **normalized embeddings** and ranking similarity quickly.";
const JACCARD: &str =
    "🔹 **Similarity Metric: Jaccard** — Best for comparing **sets** like tags or keyword overlap.";

/// Checked independently, in this order; a compound label like
/// "MiniLM or SBERT" yields one note per model it names.
const MODEL_NOTES: [(&str, &str); 4] = [
    (
        "minilm",
        "🔹 **Embedding Model: MiniLM** — Small, fast model suitable for **offline or low-compute devices**.",
    ),
    (
        "labse",
        "🔹 **Embedding Model: LaBSE** — Excellent for **multilingual search**, covering 100+ languages.",
    ),
    (
        "sambanova",
        "🔹 **Embedding Model: SambaNova** — Ideal for **enterprise**, on-prem, or regulated environments.",
    ),
    (
        "sbert",
        "🔹 **Embedding Model: SBERT** — Well-suited for **semantic search** and lightweight deployment.",
    ),
];

pub const SEPARATOR: &str = "\n\n";

fn store_note(vector_store: &str) -> Option<&'static str> {
    let store = vector_store.to_lowercase();
    if store == "faiss" {
        Some(FAISS)
    } else if store.contains("pinecone") {
        Some(PINECONE)
    } else if store.contains("milvus") {
        Some(MILVUS)
    } else if store.contains("qdrant") {
        Some(QDRANT)
    } else {
        None
    }
}

fn metric_note(metric: &str) -> Option<&'static str> {
    match metric.to_lowercase().as_str() {
        "cosine" => Some(COSINE),
        "dot product" => Some(DOT_PRODUCT),
        "jaccard" => Some(JACCARD),
        _ => None,
    }
}

/// Ordered explanation fragments: at most one for the store, at most one for
/// the metric, then zero or more for the model. Unrecognized values simply
/// contribute nothing.
pub fn explain_fragments(vector_store: &str, metric: &str, model: &str) -> Vec<&'static str> {
    let model = model.to_lowercase();
    let model_notes = MODEL_NOTES
        .iter()
        .filter(|(needle, _)| model.contains(needle))
        .map(|(_, note)| *note);

    store_note(vector_store)
        .into_iter()
        .chain(metric_note(metric))
        .chain(model_notes)
        .collect()
}

/// Fragments joined by a blank line. Empty when nothing is recognized.
pub fn explain_config(vector_store: &str, metric: &str, model: &str) -> String {
    explain_fragments(vector_store, metric, model).join(SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn faiss_requires_exact_name() {
        assert_eq!(store_note("faiss"), Some(FAISS));
        assert_eq!(store_note("FAISS-GPU"), None);
        assert_eq!(store_note("Milvus or FAISS"), Some(MILVUS));
    }

    #[test]
    fn metric_requires_exact_name() {
        assert_eq!(metric_note("DOT PRODUCT"), Some(DOT_PRODUCT));
        assert_eq!(metric_note("cosine similarity"), None);
    }
}
