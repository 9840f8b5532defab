//! Closed option lists offered by the selection form.
//!
//! These are deliberately separate from the free-text recommender's labels;
//! e.g. Weaviate and Elasticsearch only exist here.

use ragrec_core::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

macro_rules! vocabulary {
    ($(#[$meta:meta])* $name:ident, $kind:literal { $($variant:ident => $label:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $label)] $variant),+
        }

        impl $name {
            /// Every option, in display order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            pub fn label(self) -> &'static str {
                match self {
                    $(Self::$variant => $label),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        /// Exact, case-sensitive label match.
        impl FromStr for $name {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| v.label() == s)
                    .ok_or_else(|| Error::UnknownChoice { kind: $kind, value: s.to_string() })
            }
        }
    };
}

vocabulary!(
    /// What the RAG application is for.
    UseCase, "use case" {
        QuestionAnswering => "Question Answering",
        Chatbot => "Chatbot",
        Summarization => "Summarization",
        DocumentSearch => "Document Search",
        TagTopicMatching => "Tag/Topic Matching",
    }
);

vocabulary!(
    VectorStore, "vector store" {
        Faiss => "FAISS",
        Pinecone => "Pinecone",
        Weaviate => "Weaviate",
        Qdrant => "Qdrant",
        Elasticsearch => "Elasticsearch",
    }
);

vocabulary!(
    SimilarityMetric, "similarity metric" {
        Cosine => "Cosine",
        Euclidean => "Euclidean",
        DotProduct => "Dot Product",
        Manhattan => "Manhattan",
        Jaccard => "Jaccard",
    }
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip_through_from_str() {
        for uc in UseCase::ALL {
            assert_eq!(uc.label().parse::<UseCase>().unwrap(), *uc);
        }
        for vs in VectorStore::ALL {
            assert_eq!(vs.to_string().parse::<VectorStore>().unwrap(), *vs);
        }
    }

    #[test]
    fn parsing_is_exact() {
        let err = "cosine".parse::<SimilarityMetric>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown similarity metric: 'cosine'");
        assert!("Milvus".parse::<VectorStore>().is_err());
    }
}
