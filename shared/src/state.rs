//! Page-session application state and its transition function.
//!
//! All UI state lives in one [`AppState`] value. Workflows and event handlers
//! never mutate it directly; they emit [`Action`]s and the owner (a Yew
//! reducer in the browser, a plain value in tests) applies them with
//! [`AppState::reduce`].

use std::collections::BTreeSet;

use crate::{i18n::current::tabs as t, Article, Draft, DraftId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Articles,
    Drafts,
}

impl Tab {
    pub const ALL: [Tab; 2] = [Tab::Articles, Tab::Drafts];

    /// DOM id of the panel this tab controls.
    pub fn panel_id(self) -> &'static str {
        match self {
            Tab::Articles => "articles",
            Tab::Drafts => "drafts",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tab::Articles => t::ARTICLES,
            Tab::Drafts => t::DRAFTS,
        }
    }
}

/// UI controls that trigger a backend call and are disabled while it runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Control {
    Fetch,
    Search,
    Generate,
    ViewDraft,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn css_class(self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Replace the article list wholesale.
    ArticlesLoaded(Vec<Article>),
    /// Replace the draft list wholesale.
    DraftsLoaded(Vec<Draft>),
    SelectArticle(String),
    /// Make a backend-returned draft current and open the modal on it.
    ShowDraft(Draft),
    CloseModal,
    SwitchTab(Tab),
    SetBusy(Control, bool),
    /// The draft whose fetch is in flight, or `None` once it settles.
    LoadingDraft(Option<DraftId>),
    Notify(ToastKind, String),
    DismissToast(u64),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    articles: Vec<Article>,
    drafts: Vec<Draft>,
    selected_article: Option<String>,
    current_draft: Option<Draft>,
    modal_open: bool,
    active_tab: Tab,
    busy: BTreeSet<Control>,
    loading_draft: Option<DraftId>,
    toasts: Vec<Toast>,
    next_toast_id: u64,
}

impl AppState {
    pub fn reduce(&mut self, action: Action) {
        match action {
            Action::ArticlesLoaded(articles) => {
                self.articles = articles;
            },
            Action::DraftsLoaded(drafts) => {
                self.drafts = drafts;
            },
            Action::SelectArticle(id) => {
                // Only ids the backend handed us can become the selection.
                if self.articles.iter().any(|article| article.id == id) {
                    self.selected_article = Some(id);
                } else {
                    tracing::warn!("ignoring selection of unknown article {id}");
                }
            },
            Action::ShowDraft(draft) => {
                self.current_draft = Some(draft);
                self.modal_open = true;
            },
            Action::CloseModal => {
                self.modal_open = false;
            },
            Action::SwitchTab(tab) => {
                self.active_tab = tab;
            },
            Action::SetBusy(control, busy) => {
                if busy {
                    self.busy.insert(control);
                } else {
                    self.busy.remove(&control);
                }
            },
            Action::LoadingDraft(id) => {
                self.loading_draft = id;
            },
            Action::Notify(kind, message) => {
                self.next_toast_id += 1;
                self.toasts.push(Toast {
                    id: self.next_toast_id,
                    kind,
                    message,
                });
            },
            Action::DismissToast(id) => {
                self.toasts.retain(|toast| toast.id != id);
            },
        }
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn drafts(&self) -> &[Draft] {
        &self.drafts
    }

    /// The selected article, resolved against the current list. A selection
    /// that a reload dropped resolves to `None`.
    pub fn selected_article(&self) -> Option<&Article> {
        let id = self.selected_article.as_deref()?;
        self.articles.iter().find(|article| article.id == id)
    }

    pub fn is_selected(&self, article_id: &str) -> bool {
        self.selected_article().is_some_and(|article| article.id == article_id)
    }

    pub fn current_draft(&self) -> Option<&Draft> {
        self.current_draft.as_ref()
    }

    pub fn modal_open(&self) -> bool {
        self.modal_open && self.current_draft.is_some()
    }

    pub fn loading_draft(&self) -> Option<DraftId> {
        self.loading_draft
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn is_busy(&self, control: Control) -> bool {
        self.busy.contains(&control)
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{sample_article, sample_draft};

    fn article(id: &str) -> Article {
        sample_article(id, &format!("Title {id}"))
    }

    #[test]
    fn selection_requires_known_article() {
        let mut state = AppState::default();
        state.reduce(Action::SelectArticle("a1".into()));
        assert!(state.selected_article().is_none());

        state.reduce(Action::ArticlesLoaded(vec![article("a1"), article("a2")]));
        state.reduce(Action::SelectArticle("a2".into()));
        assert_eq!(state.selected_article().map(|a| a.id.as_str()), Some("a2"));
        assert!(state.is_selected("a2"));
        assert!(!state.is_selected("a1"));
    }

    #[test]
    fn reload_that_drops_selection_clears_preview() {
        let mut state = AppState::default();
        state.reduce(Action::ArticlesLoaded(vec![article("a1")]));
        state.reduce(Action::SelectArticle("a1".into()));
        state.reduce(Action::ArticlesLoaded(vec![article("b1")]));
        assert!(state.selected_article().is_none());

        state.reduce(Action::ArticlesLoaded(vec![article("a1")]));
        assert!(state.is_selected("a1"));
    }

    #[test]
    fn exactly_one_tab_is_active() {
        let mut state = AppState::default();
        assert_eq!(state.active_tab(), Tab::Articles);
        state.reduce(Action::SwitchTab(Tab::Drafts));
        assert_eq!(state.active_tab(), Tab::Drafts);
        let active = Tab::ALL.iter().filter(|tab| **tab == state.active_tab()).count();
        assert_eq!(active, 1);
    }

    #[test]
    fn closing_modal_keeps_current_draft() {
        let mut state = AppState::default();
        let draft = sample_draft(1, "body");
        state.reduce(Action::ShowDraft(draft.clone()));
        assert!(state.modal_open());
        state.reduce(Action::CloseModal);
        assert!(!state.modal_open());
        assert_eq!(state.current_draft(), Some(&draft));
    }

    #[test]
    fn toasts_get_unique_ids_and_dismiss_individually() {
        let mut state = AppState::default();
        state.reduce(Action::Notify(ToastKind::Success, "one".into()));
        state.reduce(Action::Notify(ToastKind::Error, "two".into()));
        let ids: Vec<u64> = state.toasts().iter().map(|toast| toast.id).collect();
        assert_eq!(ids.len(), 2);
        assert_ne!(ids[0], ids[1]);

        state.reduce(Action::DismissToast(ids[0]));
        assert_eq!(state.toasts().len(), 1);
        assert_eq!(state.toasts()[0].message, "two");
    }

    #[test]
    fn busy_flags_are_per_control() {
        let mut state = AppState::default();
        state.reduce(Action::SetBusy(Control::Fetch, true));
        assert!(state.is_busy(Control::Fetch));
        assert!(!state.is_busy(Control::Search));
        state.reduce(Action::SetBusy(Control::Fetch, false));
        assert!(!state.is_busy(Control::Fetch));
    }
}
