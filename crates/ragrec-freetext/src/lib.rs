//! Free-text recommender.
//!
//! Maps a user's description of a RAG use case to a vector store, similarity
//! metric and embedding model using ordered keyword rules, then explains the
//! pick with fixed prose fragments.

#![deny(warnings)]
#![deny(dead_code)]
#![deny(unused_variables)]
#![deny(unused_imports)]

pub mod explain;
pub mod form;
pub mod rules;

pub use explain::{explain_config, explain_fragments};
pub use rules::{recommend, Recommendation};
