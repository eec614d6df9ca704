//! One async operation per user action.
//!
//! Each workflow talks to the backend through [`ContentApi`], reports every
//! state change as an [`Action`] through [`Dispatch`], and never reads state
//! back. Controls that trigger a call are marked busy for exactly the
//! duration of that call, whatever the outcome.

use std::future::Future;

use crate::{
    api::ContentApi,
    i18n::{current::toast as t, fill_one},
    state::{Action, Control, ToastKind},
    DraftId,
};

/// Sink for state changes. The browser implementation forwards to a Yew
/// reducer; tests record and apply.
pub trait Dispatch {
    fn dispatch(&self, action: Action);
}

/// Trimmed query, or `None` when there is nothing to search for.
pub fn normalize_query(raw: &str) -> Option<&str> {
    let query = raw.trim();
    (!query.is_empty()).then_some(query)
}

/// Page-load population of both lists.
pub async fn initial_load<A, D>(api: &A, ui: &D)
where
    A: ContentApi + ?Sized,
    D: Dispatch + ?Sized,
{
    load_articles(api, ui).await;
    load_drafts(api, ui).await;
}

/// Background reload; failures are logged and the previous list stays.
pub async fn load_articles<A, D>(api: &A, ui: &D)
where
    A: ContentApi + ?Sized,
    D: Dispatch + ?Sized,
{
    match api.list_articles().await {
        Ok(articles) => {
            tracing::info!("loaded {} articles", articles.len());
            ui.dispatch(Action::ArticlesLoaded(articles));
        },
        Err(err) => tracing::error!("Failed to load articles: {err}"),
    }
}

/// Background reload; failures are logged and the previous list stays.
pub async fn load_drafts<A, D>(api: &A, ui: &D)
where
    A: ContentApi + ?Sized,
    D: Dispatch + ?Sized,
{
    match api.list_drafts().await {
        Ok(drafts) => {
            tracing::info!("loaded {} drafts", drafts.len());
            ui.dispatch(Action::DraftsLoaded(drafts));
        },
        Err(err) => tracing::error!("Failed to load drafts: {err}"),
    }
}

pub async fn fetch_new<A, D>(api: &A, ui: &D)
where
    A: ContentApi + ?Sized,
    D: Dispatch + ?Sized,
{
    while_busy(ui, Control::Fetch, async {
        match api.fetch_new().await {
            Ok(response) if response.success => {
                notify(ui, ToastKind::Success, fill_one(t::FETCH_FOUND_TEMPLATE, response.count));
                load_articles(api, ui).await;
            },
            Ok(response) => {
                notify(ui, ToastKind::Error, response.failure_message(t::FETCH_FAILED));
            },
            Err(err) => {
                tracing::warn!("fetch request failed: {err}");
                notify(ui, ToastKind::Error, t::NETWORK_ERROR.to_string());
            },
        }
    })
    .await;
}

/// No request is made for an empty or whitespace-only query.
pub async fn search<A, D>(api: &A, ui: &D, raw_query: &str)
where
    A: ContentApi + ?Sized,
    D: Dispatch + ?Sized,
{
    let Some(query) = normalize_query(raw_query) else {
        return;
    };

    while_busy(ui, Control::Search, async {
        match api.search(query).await {
            Ok(response) if response.success => {
                notify(ui, ToastKind::Success, fill_one(t::SEARCH_FOUND_TEMPLATE, response.count));
                load_articles(api, ui).await;
            },
            Ok(response) => {
                notify(ui, ToastKind::Error, response.failure_message(t::SEARCH_FAILED));
            },
            Err(err) => {
                tracing::warn!("search request for {query:?} failed: {err}");
                notify(ui, ToastKind::Error, t::NETWORK_ERROR.to_string());
            },
        }
    })
    .await;
}

pub async fn generate_draft<A, D>(api: &A, ui: &D, article_id: &str)
where
    A: ContentApi + ?Sized,
    D: Dispatch + ?Sized,
{
    while_busy(ui, Control::Generate, async {
        match api.generate_draft(article_id).await {
            Ok(response) if response.success => match response.into_draft() {
                Some(draft) => {
                    ui.dispatch(Action::ShowDraft(draft));
                    notify(ui, ToastKind::Success, t::DRAFT_GENERATED.to_string());
                    load_drafts(api, ui).await;
                },
                None => {
                    tracing::warn!("generate for {article_id} reported success without a draft");
                    notify(ui, ToastKind::Error, t::GENERATE_FAILED.to_string());
                },
            },
            Ok(response) => {
                notify(ui, ToastKind::Error, response.failure_message(t::GENERATE_FAILED));
            },
            Err(err) => {
                tracing::warn!("generate request for {article_id} failed: {err}");
                notify(ui, ToastKind::Error, t::NETWORK_ERROR.to_string());
            },
        }
    })
    .await;
}

pub async fn view_draft<A, D>(api: &A, ui: &D, draft_id: DraftId)
where
    A: ContentApi + ?Sized,
    D: Dispatch + ?Sized,
{
    while_busy(ui, Control::ViewDraft, async {
        ui.dispatch(Action::LoadingDraft(Some(draft_id)));
        match api.get_draft(draft_id).await {
            Ok(draft) => ui.dispatch(Action::ShowDraft(draft)),
            Err(err) => {
                tracing::warn!("loading draft {draft_id} failed: {err}");
                notify(ui, ToastKind::Error, t::DRAFT_LOAD_FAILED.to_string());
            },
        }
        ui.dispatch(Action::LoadingDraft(None));
    })
    .await;
}

async fn while_busy<D, F>(ui: &D, control: Control, work: F)
where
    D: Dispatch + ?Sized,
    F: Future<Output = ()>,
{
    ui.dispatch(Action::SetBusy(control, true));
    work.await;
    ui.dispatch(Action::SetBusy(control, false));
}

fn notify<D: Dispatch + ?Sized>(ui: &D, kind: ToastKind, message: String) {
    if kind == ToastKind::Error {
        tracing::warn!("{message}");
    }
    ui.dispatch(Action::Notify(kind, message));
}
