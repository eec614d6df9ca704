//! Platform-independent core of the content repurposer client.
//!
//! Everything that does not touch the DOM lives here so it can be compiled
//! for the browser and unit-tested on the host: data models, the backend
//! contract, application state, view-models, markup rendering and the
//! per-action workflows.

use serde::{Deserialize, Serialize};

pub mod api;
pub mod error;
pub mod export;
pub mod i18n;
pub mod markup;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod state;
pub mod view;
pub mod workflow;

pub use api::ContentApi;
pub use error::ApiError;
pub use state::{Action, AppState, Control, Tab, Toast, ToastKind};

/// Backend-assigned draft identifier (SQLite rowid).
pub type DraftId = i64;

// 完整文章数据模型
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub id: String,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub authors: Authors,
    #[serde(default, deserialize_with = "null_as_default")]
    pub source: String,
    #[serde(default)]
    pub published: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub summary: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(default)]
    pub pdf_url: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub categories: Vec<String>,
    #[serde(default)]
    pub fetched_at: Option<String>,
    #[serde(default)]
    pub relevance_score: Option<f64>,
}

/// Author field as the backend sends it: usually a list, occasionally a
/// pre-joined string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Authors {
    Many(Vec<String>),
    One(String),
}

impl Default for Authors {
    fn default() -> Self {
        Authors::Many(Vec::new())
    }
}

impl Authors {
    /// Display form: list entries joined with `", "`, a single string as-is.
    pub fn joined(&self) -> String {
        match self {
            Authors::Many(names) => names.join(", "),
            Authors::One(name) => name.clone(),
        }
    }
}

// 生成的草稿
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Draft {
    /// Absent on the draft embedded in a generate response; the response
    /// carries it separately as `draft_id`.
    #[serde(default)]
    pub id: Option<DraftId>,
    pub content: String,
    #[serde(default)]
    pub article_id: Option<String>,
    #[serde(default)]
    pub source_title: Option<String>,
    #[serde(default)]
    pub source_url: Option<String>,
    #[serde(default)]
    pub generated_at: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub tokens_used: Option<u64>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use anyhow::Result;

    use super::{Article, Authors, Draft};

    #[test]
    fn article_accepts_author_list_or_string() -> Result<()> {
        let listed: Article = serde_json::from_str(
            r#"{"id":"a1","title":"T","authors":["Al","Bo"],"source":"arxiv"}"#,
        )?;
        assert_eq!(listed.authors.joined(), "Al, Bo");

        let single: Article =
            serde_json::from_str(r#"{"id":"a2","title":"T","authors":"Al and Bo"}"#)?;
        assert_eq!(single.authors, Authors::One("Al and Bo".to_string()));
        assert_eq!(single.authors.joined(), "Al and Bo");
        Ok(())
    }

    #[test]
    fn article_tolerates_nulls_from_backend_rows() -> Result<()> {
        let article: Article = serde_json::from_str(
            r#"{"id":"a3","title":"T","summary":null,"url":null,"pdf_url":null,
                "published":null,"source":null,"categories":null,"authors":null,
                "relevance_score":0.0}"#,
        )?;
        assert_eq!(article.summary, "");
        assert_eq!(article.url, "");
        assert!(article.published.is_none());
        assert!(article.categories.is_empty());
        assert_eq!(article.authors.joined(), "");
        Ok(())
    }

    #[test]
    fn generated_draft_has_no_id() -> Result<()> {
        let draft: Draft = serde_json::from_str(
            r#"{"content":"body","source_title":"T","generated_at":"2024-01-01T10:00:00",
                "model":"m","tokens_used":42}"#,
        )?;
        assert!(draft.id.is_none());
        assert_eq!(draft.tokens_used, Some(42));
        Ok(())
    }
}
