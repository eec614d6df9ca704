//! View-model to HTML rendering.
//!
//! [`escape_html`] is the only path backend text takes into markup. Every
//! render function here routes each text field and attribute value through
//! it, so a title like `<b>X</b>` reaches the page as text.
//!
//! Interactive elements carry `data-action` / `data-id` attributes; the
//! frontend delegates clicks on the mounted markup and decodes them with
//! [`Intent::from_data`].

use std::fmt::Write as _;

use url::Url;

use crate::{
    i18n::current::{article_list as list_t, draft_list as drafts_t, preview as preview_t},
    view::{ArticleListView, ArticlePreview, DraftListView, PreviewView},
    DraftId,
};

pub const ACTION_SELECT_ARTICLE: &str = "select-article";
pub const ACTION_GENERATE: &str = "generate";
pub const ACTION_VIEW_DRAFT: &str = "view-draft";

/// A click on rendered markup, decoded from its `data-*` attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    SelectArticle(String),
    Generate(String),
    ViewDraft(DraftId),
}

impl Intent {
    pub fn from_data(action: &str, id: &str) -> Option<Self> {
        match action {
            ACTION_SELECT_ARTICLE if !id.is_empty() => Some(Intent::SelectArticle(id.to_string())),
            ACTION_GENERATE if !id.is_empty() => Some(Intent::Generate(id.to_string())),
            ACTION_VIEW_DRAFT => id.parse().ok().map(Intent::ViewDraft),
            _ => None,
        }
    }
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Link target for an external URL: `http`/`https` only, anything else
/// becomes `#`.
pub fn safe_href(raw: &str) -> String {
    let raw = raw.trim();
    match Url::parse(raw) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => raw.to_string(),
        _ => "#".to_string(),
    }
}

pub fn article_list(view: &ArticleListView) -> String {
    let cards = match view {
        ArticleListView::Empty => return placeholder_paragraph(list_t::EMPTY),
        ArticleListView::Cards(cards) => cards,
    };

    let mut html = String::new();
    for card in cards {
        let class = if card.active { "article-card active" } else { "article-card" };
        let _ = write!(
            html,
            r#"<div class="{class}" data-action="{action}" data-id="{id}"><h3>{title}</h3><div class="article-meta"><span class="article-source">{source}</span><span>{published}</span></div></div>"#,
            action = ACTION_SELECT_ARTICLE,
            id = escape_html(&card.id),
            title = escape_html(&card.title),
            source = escape_html(&card.source),
            published = escape_html(&card.published),
        );
    }
    html
}

pub fn preview(view: &PreviewView) -> String {
    match view {
        PreviewView::Empty => {
            format!(r#"<div class="placeholder"><h3>{}</h3></div>"#, escape_html(preview_t::EMPTY))
        },
        PreviewView::Article(article) => article_preview(article),
    }
}

fn article_preview(article: &ArticlePreview) -> String {
    let mut html = String::new();
    let _ = write!(
        html,
        r#"<h2>{title}</h2><div class="meta"><span><strong>{authors_label}</strong> {authors}</span><span><strong>{source_label}</strong> {source}</span></div>"#,
        title = escape_html(&article.title),
        authors_label = escape_html(preview_t::AUTHORS_LABEL),
        authors = escape_html(&article.authors),
        source_label = escape_html(preview_t::SOURCE_LABEL),
        source = escape_html(&article.source),
    );

    if !article.categories.is_empty() {
        html.push_str(r#"<div class="categories">"#);
        for category in &article.categories {
            let _ = write!(html, r#"<span class="category">{}</span>"#, escape_html(category));
        }
        html.push_str("</div>");
    }

    let _ = write!(
        html,
        r#"<div class="summary"><p>{}</p></div>"#,
        escape_html(&article.summary)
    );

    let (disabled, label) = if article.generating {
        (" disabled", preview_t::GENERATING)
    } else {
        ("", preview_t::GENERATE_BUTTON)
    };
    let _ = write!(
        html,
        r#"<div class="actions"><button type="button" class="btn btn-primary" data-action="{action}" data-id="{id}"{disabled}>{label}</button><a href="{href}" target="_blank" rel="noopener noreferrer" class="btn btn-secondary">{view_original}</a>"#,
        action = ACTION_GENERATE,
        id = escape_html(&article.id),
        label = escape_html(label),
        href = escape_html(&safe_href(&article.url)),
        view_original = escape_html(preview_t::VIEW_ORIGINAL),
    );
    if let Some(pdf_url) = article.pdf_url.as_deref() {
        let _ = write!(
            html,
            r#"<a href="{href}" target="_blank" rel="noopener noreferrer" class="btn btn-secondary">{label}</a>"#,
            href = escape_html(&safe_href(pdf_url)),
            label = escape_html(preview_t::VIEW_PDF),
        );
    }
    html.push_str("</div>");
    html
}

pub fn draft_list(view: &DraftListView) -> String {
    let cards = match view {
        DraftListView::Empty => return placeholder_paragraph(drafts_t::EMPTY),
        DraftListView::Cards(cards) => cards,
    };

    let mut html = String::new();
    for card in cards {
        let _ = write!(
            html,
            r#"<div class="draft-card"><h3>{title}</h3><div class="meta">{generated}</div>"#,
            title = escape_html(&card.title),
            generated = escape_html(&card.generated),
        );
        if let Some(id) = card.id {
            let disabled = if card.disabled { " disabled" } else { "" };
            let label = if card.loading { drafts_t::LOADING } else { drafts_t::VIEW_BUTTON };
            let _ = write!(
                html,
                r#"<button type="button" class="btn btn-primary btn-small" data-action="{ACTION_VIEW_DRAFT}" data-id="{id}"{disabled}>{label}</button>"#,
                label = escape_html(label),
            );
        }
        html.push_str("</div>");
    }
    html
}

fn placeholder_paragraph(text: &str) -> String {
    format!(r#"<p class="placeholder">{}</p>"#, escape_html(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        mock::{sample_article, sample_draft},
        state::{Action, AppState},
        view,
    };

    fn unescape(text: &str) -> String {
        text.replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&quot;", "\"")
            .replace("&#39;", "'")
            .replace("&amp;", "&")
    }

    /// Text content of a markup fragment, the way the DOM would report it.
    fn text_content(html: &str) -> String {
        let mut text = String::new();
        let mut in_tag = false;
        for ch in html.chars() {
            match ch {
                '<' => in_tag = true,
                '>' => in_tag = false,
                _ if !in_tag => text.push(ch),
                _ => {},
            }
        }
        unescape(&text)
    }

    fn between<'a>(html: &'a str, open: &str, close: &str) -> &'a str {
        let start = html.find(open).expect("open tag") + open.len();
        let end = start + html[start..].find(close).expect("close tag");
        &html[start..end]
    }

    #[test]
    fn escape_round_trips_markup_characters() {
        let nasty = r#"<img src=x onerror="alert('1')"> & co"#;
        let escaped = escape_html(nasty);
        assert!(!escaped.contains('<'));
        assert!(!escaped.contains('>'));
        assert!(!escaped.contains('"'));
        assert_eq!(unescape(&escaped), nasty);
    }

    #[test]
    fn empty_views_render_only_placeholders() {
        let state = AppState::default();

        let list = article_list(&view::article_list(&state));
        assert_eq!(text_content(&list), r#"Click "Fetch New" to discover papers"#);
        assert!(!list.contains("article-card"));

        let preview_html = preview(&view::preview(&state));
        assert_eq!(text_content(&preview_html), "Select a paper");

        let drafts = draft_list(&view::draft_list(&state));
        assert_eq!(text_content(&drafts), "No drafts yet");
        assert!(!drafts.contains("draft-card"));
    }

    #[test]
    fn preview_title_stays_literal() {
        let mut state = AppState::default();
        let mut article = sample_article("a1", "<b>X</b>");
        article.authors = crate::Authors::Many(vec!["Al".into()]);
        article.source = "arXiv".into();
        article.summary = "s".into();
        article.url = "http://x".into();
        state.reduce(Action::ArticlesLoaded(vec![article]));
        state.reduce(Action::SelectArticle("a1".into()));

        let html = preview(&view::preview(&state));
        assert!(!html.contains("<b>"));
        assert_eq!(unescape(between(&html, "<h2>", "</h2>")), "<b>X</b>");
        assert!(html.contains(r#"href="http://x""#));
        assert!(html.contains("Generate Draft"));
    }

    #[test]
    fn every_backend_field_is_escaped() {
        let mut state = AppState::default();
        let mut article = sample_article("a\"1", "<i>t</i>");
        article.source = "<script>s</script>".into();
        article.summary = "<p onclick=x>".into();
        article.categories = vec!["<u>cs.AI</u>".into()];
        article.authors = crate::Authors::Many(vec!["<script>x</script>".into()]);
        article.url = r#"https://x/"onmouseover="alert(1)"#.into();
        article.pdf_url = Some(r#"https://x/pdf"onclick="alert(2)"#.into());
        state.reduce(Action::ArticlesLoaded(vec![article]));
        state.reduce(Action::SelectArticle("a\"1".into()));
        let mut draft = sample_draft(1, "body");
        draft.source_title = Some("<em>d</em>".into());
        state.reduce(Action::DraftsLoaded(vec![draft]));

        let rendered = [
            article_list(&view::article_list(&state)),
            preview(&view::preview(&state)),
            draft_list(&view::draft_list(&state)),
        ]
        .concat();
        for tag in ["<i>", "<script>", "<p onclick", "<u>", "<em>", r#""onmouseover"#, r#""onclick"#] {
            assert!(!rendered.contains(tag), "unescaped {tag} in {rendered}");
        }
        assert!(rendered.contains("&lt;script&gt;x&lt;/script&gt;"));
        assert!(rendered.contains(r#"href="https://x/&quot;onmouseover=&quot;alert(1)""#));
        assert!(rendered.contains(r#"href="https://x/pdf&quot;onclick=&quot;alert(2)""#));
        assert!(rendered.contains(r#"data-id="a&quot;1""#));
    }

    #[test]
    fn unsafe_links_are_neutralized() {
        assert_eq!(safe_href("javascript:alert(1)"), "#");
        assert_eq!(safe_href("not a url"), "#");
        assert_eq!(safe_href("https://arxiv.org/abs/1"), "https://arxiv.org/abs/1");
    }

    #[test]
    fn generating_button_is_disabled() {
        let mut state = AppState::default();
        state.reduce(Action::ArticlesLoaded(vec![sample_article("a1", "T")]));
        state.reduce(Action::SelectArticle("a1".into()));
        state.reduce(Action::SetBusy(crate::Control::Generate, true));

        let html = preview(&view::preview(&state));
        assert!(html.contains(r#"data-id="a1" disabled>Generating...</button>"#));
    }

    #[test]
    fn draft_cards_carry_view_intent() {
        let mut state = AppState::default();
        let mut orphan = sample_draft(9, "x");
        orphan.id = None;
        state.reduce(Action::DraftsLoaded(vec![sample_draft(4, "x"), orphan]));

        let html = draft_list(&view::draft_list(&state));
        assert_eq!(html.matches("draft-card").count(), 2);
        assert_eq!(html.matches(r#"data-action="view-draft""#).count(), 1);
        assert!(html.contains(r#"data-id="4""#));
    }

    #[test]
    fn loading_label_marks_only_the_requested_draft() {
        let mut state = AppState::default();
        state.reduce(Action::DraftsLoaded(vec![sample_draft(4, "x"), sample_draft(5, "y")]));
        state.reduce(Action::SetBusy(crate::Control::ViewDraft, true));
        state.reduce(Action::LoadingDraft(Some(5)));

        let html = draft_list(&view::draft_list(&state));
        assert!(html.contains(r#"data-id="4" disabled>View</button>"#));
        assert!(html.contains(r#"data-id="5" disabled>Loading...</button>"#));
    }

    #[test]
    fn intents_decode_from_data_attributes() {
        assert_eq!(
            Intent::from_data("select-article", "a1"),
            Some(Intent::SelectArticle("a1".into()))
        );
        assert_eq!(Intent::from_data("generate", "a1"), Some(Intent::Generate("a1".into())));
        assert_eq!(Intent::from_data("view-draft", "12"), Some(Intent::ViewDraft(12)));
        assert_eq!(Intent::from_data("view-draft", "abc"), None);
        assert_eq!(Intent::from_data("select-article", ""), None);
        assert_eq!(Intent::from_data("delete", "a1"), None);
    }
}
