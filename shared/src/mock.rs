//! In-memory stand-in for the backend.
//!
//! Used by the unit tests and by the frontend's `mock` feature. Behaves like
//! the real service (fetch/search store articles, generate stores a draft)
//! and can be told to fail any endpoint, either at the transport level or
//! with a `success: false` reply.

use std::{
    cell::{Cell, RefCell},
    collections::HashMap,
};

use async_trait::async_trait;

use crate::{
    api::{ActionResponse, ContentApi, Endpoint, GenerateResponse},
    error::{ApiError, Result},
    Article, Authors, Draft, DraftId,
};

/// One recorded call, with its argument when it has one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    FetchNew,
    Search(String),
    ListArticles,
    ListDrafts,
    GenerateDraft(String),
    GetDraft(DraftId),
}

impl Call {
    pub fn endpoint(&self) -> Endpoint {
        match self {
            Call::FetchNew => Endpoint::Fetch,
            Call::Search(_) => Endpoint::Search,
            Call::ListArticles => Endpoint::ListArticles,
            Call::ListDrafts => Endpoint::ListDrafts,
            Call::GenerateDraft(_) => Endpoint::Generate,
            Call::GetDraft(_) => Endpoint::GetDraft,
        }
    }
}

#[derive(Debug, Clone)]
enum Failure {
    Transport(ApiError),
    /// `success: false` with this `error` field.
    Refused(Option<String>),
}

#[derive(Default)]
pub struct MockApi {
    articles: RefCell<Vec<Article>>,
    drafts: RefCell<Vec<Draft>>,
    /// Served by the next `fetch_new`.
    incoming: RefCell<Vec<Article>>,
    next_draft_id: Cell<DraftId>,
    failures: RefCell<HashMap<Endpoint, Failure>>,
    calls: RefCell<Vec<Call>>,
}

impl MockApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// A backend with a few papers waiting to be fetched.
    pub fn with_sample_data() -> Self {
        let api = Self::new();
        api.queue_incoming(sample_papers());
        api
    }

    pub fn with_articles(articles: Vec<Article>) -> Self {
        let api = Self::new();
        *api.articles.borrow_mut() = articles;
        api
    }

    pub fn with_drafts(self, drafts: Vec<Draft>) -> Self {
        let max_id = drafts.iter().filter_map(|draft| draft.id).max().unwrap_or(0);
        self.next_draft_id.set(max_id);
        *self.drafts.borrow_mut() = drafts;
        self
    }

    pub fn queue_incoming(&self, articles: Vec<Article>) {
        self.incoming.borrow_mut().extend(articles);
    }

    /// Make every later `endpoint` call fail at the transport level.
    pub fn fail_transport(&self, endpoint: Endpoint, error: ApiError) {
        self.failures.borrow_mut().insert(endpoint, Failure::Transport(error));
    }

    /// Make every later `endpoint` call answer `success: false`.
    pub fn refuse(&self, endpoint: Endpoint, error: Option<&str>) {
        self.failures
            .borrow_mut()
            .insert(endpoint, Failure::Refused(error.map(str::to_string)));
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn call_count(&self, endpoint: Endpoint) -> usize {
        self.calls.borrow().iter().filter(|call| call.endpoint() == endpoint).count()
    }

    fn record(&self, call: Call) -> Option<Failure> {
        let endpoint = call.endpoint();
        self.calls.borrow_mut().push(call);
        self.failures.borrow().get(&endpoint).cloned()
    }

    fn store_articles(&self, found: &[Article]) {
        let mut articles = self.articles.borrow_mut();
        for article in found {
            match articles.iter_mut().find(|existing| existing.id == article.id) {
                Some(existing) => *existing = article.clone(),
                None => articles.insert(0, article.clone()),
            }
        }
    }
}

#[async_trait(?Send)]
impl ContentApi for MockApi {
    async fn fetch_new(&self) -> Result<ActionResponse> {
        match self.record(Call::FetchNew) {
            Some(Failure::Transport(err)) => return Err(err),
            Some(Failure::Refused(error)) => return Ok(ActionResponse::failed(error)),
            None => {},
        }
        let found: Vec<Article> = self.incoming.borrow_mut().drain(..).collect();
        self.store_articles(&found);
        Ok(ActionResponse::ok(found.len()))
    }

    async fn search(&self, query: &str) -> Result<ActionResponse> {
        match self.record(Call::Search(query.to_string())) {
            Some(Failure::Transport(err)) => return Err(err),
            Some(Failure::Refused(error)) => return Ok(ActionResponse::failed(error)),
            None => {},
        }
        let needle = query.to_lowercase();
        let found: Vec<Article> = sample_papers()
            .into_iter()
            .filter(|article| {
                article.title.to_lowercase().contains(&needle)
                    || article.summary.to_lowercase().contains(&needle)
            })
            .collect();
        self.store_articles(&found);
        Ok(ActionResponse {
            articles: found.clone(),
            ..ActionResponse::ok(found.len())
        })
    }

    async fn list_articles(&self) -> Result<Vec<Article>> {
        match self.record(Call::ListArticles) {
            Some(Failure::Transport(err)) => Err(err),
            Some(Failure::Refused(_)) => Err(ApiError::Http { status: 500 }),
            None => Ok(self.articles.borrow().clone()),
        }
    }

    async fn list_drafts(&self) -> Result<Vec<Draft>> {
        match self.record(Call::ListDrafts) {
            Some(Failure::Transport(err)) => Err(err),
            Some(Failure::Refused(_)) => Err(ApiError::Http { status: 500 }),
            None => Ok(self.drafts.borrow().clone()),
        }
    }

    async fn generate_draft(&self, article_id: &str) -> Result<GenerateResponse> {
        match self.record(Call::GenerateDraft(article_id.to_string())) {
            Some(Failure::Transport(err)) => return Err(err),
            Some(Failure::Refused(error)) => {
                return Ok(GenerateResponse {
                    success: false,
                    error,
                    ..GenerateResponse::default()
                })
            },
            None => {},
        }
        let article = self.articles.borrow().iter().find(|a| a.id == article_id).cloned();
        let Some(article) = article else {
            return Ok(GenerateResponse {
                success: false,
                error: Some("Article not found".to_string()),
                ..GenerateResponse::default()
            });
        };

        let id = self.next_draft_id.get() + 1;
        self.next_draft_id.set(id);
        let content = format!(
            "# What {} means for practitioners\n\n{}\n\nRead the paper: {}\n",
            article.title, article.summary, article.url
        );
        let stored = Draft {
            id: Some(id),
            content,
            article_id: Some(article.id.clone()),
            source_title: Some(article.title.clone()),
            source_url: Some(article.url.clone()),
            generated_at: Some("2024-06-01T12:00:00".to_string()),
            model: Some("mock-writer".to_string()),
            tokens_used: Some(512),
        };
        self.drafts.borrow_mut().insert(0, stored.clone());

        // The real service embeds the generator output, which has no id.
        Ok(GenerateResponse {
            success: true,
            draft: Some(Draft {
                id: None,
                ..stored
            }),
            draft_id: Some(id),
            error: None,
        })
    }

    async fn get_draft(&self, id: DraftId) -> Result<Draft> {
        match self.record(Call::GetDraft(id)) {
            Some(Failure::Transport(err)) => return Err(err),
            Some(Failure::Refused(_)) => return Err(ApiError::Http { status: 500 }),
            None => {},
        }
        self.drafts
            .borrow()
            .iter()
            .find(|draft| draft.id == Some(id))
            .cloned()
            .ok_or(ApiError::Http { status: 404 })
    }
}

pub fn sample_article(id: &str, title: &str) -> Article {
    Article {
        id: id.to_string(),
        title: title.to_string(),
        authors: Authors::Many(vec!["Ada Lovelace".to_string()]),
        source: "arxiv".to_string(),
        published: Some("2024-01-01".to_string()),
        summary: format!("Summary of {title}."),
        url: format!("https://arxiv.org/abs/{id}"),
        pdf_url: None,
        categories: Vec::new(),
        fetched_at: Some("2024-01-03T08:00:00".to_string()),
        relevance_score: None,
    }
}

pub fn sample_draft(id: DraftId, content: &str) -> Draft {
    Draft {
        id: Some(id),
        content: content.to_string(),
        article_id: Some(format!("a{id}")),
        source_title: Some(format!("Paper {id}")),
        source_url: None,
        generated_at: Some("2024-01-02T10:00:00".to_string()),
        model: None,
        tokens_used: None,
    }
}

fn sample_papers() -> Vec<Article> {
    let papers = [
        (
            "2401.00001",
            "Retrieval-Augmented Generation for Long Documents",
            "arxiv",
            vec!["cs.CL", "cs.AI"],
        ),
        (
            "2401.00002",
            "Small Language Models Are Efficient Planners",
            "arxiv",
            vec!["cs.AI"],
        ),
        ("hf-2401.00003", "Diffusion Transformers at Scale", "huggingface", vec![]),
    ];
    papers
        .into_iter()
        .map(|(id, title, source, categories)| {
            let mut article = sample_article(id, title);
            article.source = source.to_string();
            article.categories = categories.into_iter().map(str::to_string).collect();
            if source == "arxiv" {
                article.pdf_url = Some(format!("https://arxiv.org/pdf/{id}"));
            } else {
                article.url = format!("https://huggingface.co/papers/{id}");
            }
            article
        })
        .collect()
}
