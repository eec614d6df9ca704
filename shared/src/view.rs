//! Typed view-models derived from [`AppState`].
//!
//! These carry plain, unescaped text. Escaping happens once, in
//! [`crate::markup`], when a view-model becomes markup.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::{
    i18n::{
        current::{common, draft_list, modal},
        fill_one,
    },
    state::{AppState, Control},
    Article, Draft, DraftId,
};

#[derive(Debug, Clone, PartialEq)]
pub enum ArticleListView {
    Empty,
    Cards(Vec<ArticleCard>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArticleCard {
    pub id: String,
    pub title: String,
    pub source: String,
    pub published: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PreviewView {
    Empty,
    Article(ArticlePreview),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArticlePreview {
    pub id: String,
    pub title: String,
    pub authors: String,
    pub source: String,
    pub summary: String,
    pub url: String,
    pub pdf_url: Option<String>,
    pub categories: Vec<String>,
    pub generating: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DraftListView {
    Empty,
    Cards(Vec<DraftCard>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct DraftCard {
    /// Drafts without a stored id cannot be re-fetched and get no view
    /// control.
    pub id: Option<DraftId>,
    pub title: String,
    pub generated: String,
    /// Set on every card while any draft is being fetched.
    pub disabled: bool,
    /// Set only on the card whose draft is being fetched.
    pub loading: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DraftModalView {
    pub title: String,
    pub details: Vec<String>,
    /// Raw draft text, verbatim.
    pub content: String,
}

pub fn article_list(state: &AppState) -> ArticleListView {
    if state.articles().is_empty() {
        return ArticleListView::Empty;
    }
    ArticleListView::Cards(
        state
            .articles()
            .iter()
            .map(|article| ArticleCard {
                id: article.id.clone(),
                title: article.title.clone(),
                source: article.source.clone(),
                published: format_date(article.published.as_deref()),
                active: state.is_selected(&article.id),
            })
            .collect(),
    )
}

pub fn preview(state: &AppState) -> PreviewView {
    match state.selected_article() {
        None => PreviewView::Empty,
        Some(article) => PreviewView::Article(article_preview(
            article,
            state.is_busy(Control::Generate),
        )),
    }
}

fn article_preview(article: &Article, generating: bool) -> ArticlePreview {
    ArticlePreview {
        id: article.id.clone(),
        title: article.title.clone(),
        authors: article.authors.joined(),
        source: article.source.clone(),
        summary: article.summary.clone(),
        url: article.url.clone(),
        pdf_url: article.pdf_url.clone().filter(|url| !url.is_empty()),
        categories: article.categories.clone(),
        generating,
    }
}

pub fn draft_list(state: &AppState) -> DraftListView {
    if state.drafts().is_empty() {
        return DraftListView::Empty;
    }
    let disabled = state.is_busy(Control::ViewDraft);
    let loading_draft = state.loading_draft();
    DraftListView::Cards(
        state
            .drafts()
            .iter()
            .map(|draft| DraftCard {
                id: draft.id,
                title: draft_title(draft),
                generated: fill_one(
                    draft_list::GENERATED_TEMPLATE,
                    format_date(draft.generated_at.as_deref()),
                ),
                disabled,
                loading: draft.id.is_some() && draft.id == loading_draft,
            })
            .collect(),
    )
}

/// `None` while the modal is closed.
pub fn draft_modal(state: &AppState) -> Option<DraftModalView> {
    if !state.modal_open() {
        return None;
    }
    let draft = state.current_draft()?;
    let mut details = Vec::new();
    if let Some(model) = draft.model.as_deref().filter(|model| !model.is_empty()) {
        details.push(fill_one(modal::MODEL_TEMPLATE, model));
    }
    if let Some(tokens) = draft.tokens_used.filter(|tokens| *tokens > 0) {
        details.push(fill_one(modal::TOKENS_TEMPLATE, tokens));
    }
    Some(DraftModalView {
        title: draft_title(draft),
        details,
        content: draft.content.clone(),
    })
}

fn draft_title(draft: &Draft) -> String {
    match draft.source_title.as_deref() {
        Some(title) if !title.is_empty() => title.to_string(),
        _ => common::UNTITLED.to_string(),
    }
}

/// Render a backend timestamp as `Jan 1, 2024`.
///
/// Accepts RFC 3339, naive ISO datetimes (with or without fractional
/// seconds) and plain dates. Missing input yields `Unknown`; anything
/// unparseable is shown verbatim.
pub fn format_date(raw: Option<&str>) -> String {
    let raw = match raw.map(str::trim) {
        Some(value) if !value.is_empty() => value,
        _ => return common::UNKNOWN_DATE.to_string(),
    };
    parse_date(raw)
        .map(|date| date.format("%b %-d, %Y").to_string())
        .unwrap_or_else(|| raw.to_string())
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(datetime) = DateTime::parse_from_rfc3339(raw) {
        return Some(datetime.date_naive());
    }
    if let Ok(datetime) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(datetime.date());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        mock::{sample_article, sample_draft},
        state::Action,
    };

    #[test]
    fn formats_backend_date_shapes() {
        assert_eq!(format_date(Some("2024-01-01")), "Jan 1, 2024");
        assert_eq!(format_date(Some("2024-03-15T09:30:00")), "Mar 15, 2024");
        assert_eq!(format_date(Some("2024-03-15T09:30:00.123456")), "Mar 15, 2024");
        assert_eq!(format_date(Some("2023-12-05T23:10:00+00:00")), "Dec 5, 2023");
        assert_eq!(format_date(Some("2023-12-05T23:10:00Z")), "Dec 5, 2023");
    }

    #[test]
    fn missing_and_garbage_dates() {
        assert_eq!(format_date(None), "Unknown");
        assert_eq!(format_date(Some("  ")), "Unknown");
        assert_eq!(format_date(Some("last tuesday")), "last tuesday");
    }

    #[test]
    fn empty_state_views() {
        let state = AppState::default();
        assert_eq!(article_list(&state), ArticleListView::Empty);
        assert_eq!(preview(&state), PreviewView::Empty);
        assert_eq!(draft_list(&state), DraftListView::Empty);
        assert_eq!(draft_modal(&state), None);
    }

    #[test]
    fn article_cards_mark_selection_active() {
        let mut state = AppState::default();
        state.reduce(Action::ArticlesLoaded(vec![
            sample_article("a1", "First"),
            sample_article("a2", "Second"),
        ]));
        state.reduce(Action::SelectArticle("a2".into()));

        let ArticleListView::Cards(cards) = article_list(&state) else {
            panic!("expected cards");
        };
        let active: Vec<&str> =
            cards.iter().filter(|card| card.active).map(|card| card.id.as_str()).collect();
        assert_eq!(active, vec!["a2"]);
        assert_eq!(cards[0].published, "Jan 1, 2024");
    }

    #[test]
    fn preview_joins_authors_and_tracks_generation() {
        let mut state = AppState::default();
        let mut article = sample_article("a1", "First");
        article.authors = crate::Authors::Many(vec!["Al".into(), "Bo".into()]);
        state.reduce(Action::ArticlesLoaded(vec![article]));
        state.reduce(Action::SelectArticle("a1".into()));
        state.reduce(Action::SetBusy(Control::Generate, true));

        let PreviewView::Article(preview) = preview(&state) else {
            panic!("expected preview");
        };
        assert_eq!(preview.authors, "Al, Bo");
        assert!(preview.generating);
    }

    #[test]
    fn draft_cards_fall_back_to_untitled() {
        let mut state = AppState::default();
        let mut untitled = sample_draft(2, "body");
        untitled.source_title = None;
        state.reduce(Action::DraftsLoaded(vec![sample_draft(1, "body"), untitled]));

        let DraftListView::Cards(cards) = draft_list(&state) else {
            panic!("expected cards");
        };
        assert_eq!(cards[1].title, "Untitled");
        assert_eq!(cards[0].generated, "Generated Jan 2, 2024");
    }

    #[test]
    fn only_the_requested_draft_shows_loading() {
        let mut state = AppState::default();
        state.reduce(Action::DraftsLoaded(vec![sample_draft(5, "five"), sample_draft(6, "six")]));
        state.reduce(Action::SetBusy(Control::ViewDraft, true));
        state.reduce(Action::LoadingDraft(Some(6)));

        let DraftListView::Cards(cards) = draft_list(&state) else {
            panic!("expected cards");
        };
        assert!(cards.iter().all(|card| card.disabled));
        let loading: Vec<Option<DraftId>> =
            cards.iter().filter(|card| card.loading).map(|card| card.id).collect();
        assert_eq!(loading, vec![Some(6)]);

        state.reduce(Action::LoadingDraft(None));
        state.reduce(Action::SetBusy(Control::ViewDraft, false));
        let DraftListView::Cards(cards) = draft_list(&state) else {
            panic!("expected cards");
        };
        assert!(cards.iter().all(|card| !card.disabled && !card.loading));
    }

    #[test]
    fn modal_shows_content_verbatim_with_details() {
        let mut state = AppState::default();
        let mut draft = sample_draft(3, "# Title\n\n<script>x</script>");
        draft.model = Some("claude".into());
        draft.tokens_used = Some(1200);
        state.reduce(Action::ShowDraft(draft));

        let modal = draft_modal(&state).expect("modal open");
        assert_eq!(modal.content, "# Title\n\n<script>x</script>");
        assert_eq!(modal.details, vec!["Model: claude".to_string(), "1200 tokens".to_string()]);
    }
}
