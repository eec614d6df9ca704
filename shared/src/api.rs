//! Backend contract: request/response shapes and the client capability set.

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::{
    error::{ApiError, Result},
    Article, Draft, DraftId,
};

/// The six backend calls the UI makes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Fetch,
    Search,
    ListArticles,
    Generate,
    ListDrafts,
    GetDraft,
}

impl Endpoint {
    /// Path relative to the API base. `GetDraft` is the collection path; use
    /// [`draft_path`] for a concrete draft.
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::Fetch => "/fetch",
            Endpoint::Search => "/search",
            Endpoint::ListArticles => "/articles",
            Endpoint::Generate => "/generate",
            Endpoint::ListDrafts | Endpoint::GetDraft => "/drafts",
        }
    }
}

pub fn draft_path(id: DraftId) -> String {
    format!("{}/{}", Endpoint::GetDraft.path(), id)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub query: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub article_id: String,
}

/// Reply of `/fetch` and `/search`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ActionResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub count: usize,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    /// Only `/search` echoes the matched articles; the stored list stays
    /// authoritative. Malformed entries are dropped rather than failing the
    /// whole reply.
    #[serde(default, deserialize_with = "lenient_articles")]
    pub articles: Vec<Article>,
}

impl ActionResponse {
    pub fn ok(count: usize) -> Self {
        Self {
            success: true,
            count,
            ..Self::default()
        }
    }

    pub fn failed(error: Option<String>) -> Self {
        Self {
            success: false,
            error,
            ..Self::default()
        }
    }

    pub fn failure_message(&self, fallback: &str) -> String {
        failure_text(self.error.as_deref(), fallback)
    }
}

/// Reply of `/generate`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub draft: Option<Draft>,
    #[serde(default)]
    pub draft_id: Option<DraftId>,
    #[serde(default)]
    pub error: Option<String>,
}

impl GenerateResponse {
    pub fn failure_message(&self, fallback: &str) -> String {
        failure_text(self.error.as_deref(), fallback)
    }

    /// The generated draft, carrying the stored row id when the embedded
    /// draft lacks one.
    pub fn into_draft(self) -> Option<Draft> {
        let draft_id = self.draft_id;
        self.draft.map(|mut draft| {
            if draft.id.is_none() {
                draft.id = draft_id;
            }
            draft
        })
    }
}

fn lenient_articles<'de, D>(deserializer: D) -> std::result::Result<Vec<Article>, D::Error>
where
    D: Deserializer<'de>,
{
    let articles = match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        _ => Vec::new(),
    };
    Ok(articles)
}

/// Decode the reply of an action endpoint (`/fetch`, `/search`, `/generate`).
///
/// Refusals come back as `{"success": false, "error": ...}` with a 4xx/5xx
/// status, so the body is decoded whatever the status. Only a body that does
/// not decode turns a failed status into [`ApiError::Http`].
pub fn decode_action_reply<T: DeserializeOwned>(status: u16, body: &str) -> Result<T> {
    match serde_json::from_str(body) {
        Ok(reply) => Ok(reply),
        Err(_) if !is_success(status) => Err(ApiError::Http { status }),
        Err(err) => Err(err.into()),
    }
}

/// Decode a resource read (article list, draft list, single draft). Any
/// non-2xx status is a failure, so a 404 body is never taken for a draft.
pub fn decode_resource<T: DeserializeOwned>(status: u16, body: &str) -> Result<T> {
    if !is_success(status) {
        return Err(ApiError::Http { status });
    }
    Ok(serde_json::from_str(body)?)
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

// An empty error string counts as missing.
fn failure_text(error: Option<&str>, fallback: &str) -> String {
    match error {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => fallback.to_string(),
    }
}

/// Everything the UI needs from the backend. The browser build talks HTTP;
/// tests and the `mock` feature substitute an in-memory double.
#[async_trait(?Send)]
pub trait ContentApi {
    async fn fetch_new(&self) -> Result<ActionResponse>;

    async fn search(&self, query: &str) -> Result<ActionResponse>;

    async fn list_articles(&self) -> Result<Vec<Article>>;

    async fn list_drafts(&self) -> Result<Vec<Draft>>;

    async fn generate_draft(&self, article_id: &str) -> Result<GenerateResponse>;

    async fn get_draft(&self, id: DraftId) -> Result<Draft>;
}
