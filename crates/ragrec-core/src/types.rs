//! View model shared by the recommenders and the renderers.
//!
//! Recommenders never print. They return a list of [`Block`]s describing
//! what a page should show, and a [`crate::traits::Renderer`] decides how.

use serde::{Deserialize, Serialize};

/// Static page setup handed to a renderer before any block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageConfig {
    pub title: String,
    pub icon: String,
}

impl PageConfig {
    pub fn new(title: impl Into<String>, icon: impl Into<String>) -> Self {
        Self { title: title.into(), icon: icon.into() }
    }
}

/// One `key: value` line of a result summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyValue {
    pub key: String,
    pub value: String,
}

/// A displayable unit of output.
///
/// Serialized with a `kind` tag so JSON consumers can dispatch on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    Title { text: String },
    Heading { text: String },
    Markdown { text: String },
    KeyValues { entries: Vec<KeyValue> },
    Info { text: String },
    Warning { text: String },
    Expander { label: String, body: String },
    Table { columns: Vec<String>, rows: Vec<Vec<String>> },
}

impl Block {
    pub fn title(text: impl Into<String>) -> Self {
        Self::Title { text: text.into() }
    }

    pub fn heading(text: impl Into<String>) -> Self {
        Self::Heading { text: text.into() }
    }

    pub fn markdown(text: impl Into<String>) -> Self {
        Self::Markdown { text: text.into() }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::Info { text: text.into() }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self::Warning { text: text.into() }
    }

    pub fn expander(label: impl Into<String>, body: impl Into<String>) -> Self {
        Self::Expander { label: label.into(), body: body.into() }
    }

    pub fn key_values<K, V, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let entries = entries
            .into_iter()
            .map(|(k, v)| KeyValue { key: k.into(), value: v.into() })
            .collect();
        Self::KeyValues { entries }
    }

    /// Short name of the variant, matching the serialized `kind` tag.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Title { .. } => "title",
            Self::Heading { .. } => "heading",
            Self::Markdown { .. } => "markdown",
            Self::KeyValues { .. } => "key_values",
            Self::Info { .. } => "info",
            Self::Warning { .. } => "warning",
            Self::Expander { .. } => "expander",
            Self::Table { .. } => "table",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_matches_serde_tag() {
        let blocks = vec![
            Block::title("t"),
            Block::heading("h"),
            Block::markdown("m"),
            Block::key_values([("k", "v")]),
            Block::info("i"),
            Block::warning("w"),
            Block::expander("l", "b"),
            Block::Table { columns: vec!["c".into()], rows: vec![vec!["r".into()]] },
        ];
        for block in blocks {
            let value = serde_json::to_value(&block).unwrap();
            assert_eq!(value["kind"], block.kind());
        }
    }
}
