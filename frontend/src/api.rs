use std::rc::Rc;

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use repurposer_shared::{
    api::{
        decode_action_reply, decode_resource, draft_path, ActionResponse, ContentApi, Endpoint,
        GenerateRequest, GenerateResponse, SearchRequest,
    },
    error::Result,
    ApiError, Article, Draft, DraftId,
};
use serde::de::DeserializeOwned;

use crate::config::api_url;

/// The backend client the page runs against.
pub fn client() -> Rc<dyn ContentApi> {
    #[cfg(feature = "mock")]
    {
        return Rc::new(repurposer_shared::mock::MockApi::with_sample_data());
    }

    #[cfg(not(feature = "mock"))]
    {
        Rc::new(HttpApi)
    }
}

/// Talks to the content backend with `fetch`.
#[cfg_attr(feature = "mock", allow(dead_code, reason = "replaced by MockApi in mock builds"))]
pub struct HttpApi;

#[async_trait(?Send)]
impl ContentApi for HttpApi {
    async fn fetch_new(&self) -> Result<ActionResponse> {
        let response = Request::post(&api_url(Endpoint::Fetch.path()))
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("{:?}", e)))?;
        decode_reply(response).await
    }

    async fn search(&self, query: &str) -> Result<ActionResponse> {
        let body = SearchRequest {
            query: query.to_string(),
        };
        let response = Request::post(&api_url(Endpoint::Search.path()))
            .header("Content-Type", "application/json")
            .json(&body)
            .map_err(|e| ApiError::Encode(format!("{:?}", e)))?
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("{:?}", e)))?;
        decode_reply(response).await
    }

    async fn list_articles(&self) -> Result<Vec<Article>> {
        get_json(&api_url(Endpoint::ListArticles.path())).await
    }

    async fn list_drafts(&self) -> Result<Vec<Draft>> {
        get_json(&api_url(Endpoint::ListDrafts.path())).await
    }

    async fn generate_draft(&self, article_id: &str) -> Result<GenerateResponse> {
        let body = GenerateRequest {
            article_id: article_id.to_string(),
        };
        let response = Request::post(&api_url(Endpoint::Generate.path()))
            .header("Content-Type", "application/json")
            .json(&body)
            .map_err(|e| ApiError::Encode(format!("{:?}", e)))?
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("{:?}", e)))?;
        decode_reply(response).await
    }

    async fn get_draft(&self, id: DraftId) -> Result<Draft> {
        get_json(&api_url(&draft_path(id))).await
    }
}

async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T> {
    let response = Request::get(url)
        .header("Cache-Control", "no-cache, no-store, max-age=0")
        .send()
        .await
        .map_err(|e| ApiError::Network(format!("{:?}", e)))?;
    let (status, body) = read_body(response).await?;
    decode_resource(status, &body)
}

async fn decode_reply<T: DeserializeOwned>(response: Response) -> Result<T> {
    let (status, body) = read_body(response).await?;
    decode_action_reply(status, &body)
}

async fn read_body(response: Response) -> Result<(u16, String)> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Network(format!("{:?}", e)))?;
    Ok((status, body))
}
