//! Structured-selection recommender.
//!
//! Three dropdown choices (use case, vector store, similarity metric) map to
//! a generative model via a lookup table, plus fixed prose about the metric
//! and a static reference table of all metrics.

#![deny(warnings)]
#![deny(dead_code)]
#![deny(unused_variables)]
#![deny(unused_imports)]

pub mod explain;
pub mod form;
pub mod recommend;
pub mod reference;
pub mod vocab;

pub use explain::{explain_metric, explain_metric_for};
pub use recommend::{recommend_model, recommend_model_for};
pub use reference::{MetricRow, METRIC_GUIDE, METRIC_TABLE};
pub use vocab::{SimilarityMetric, UseCase, VectorStore};
