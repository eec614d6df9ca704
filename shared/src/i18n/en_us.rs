pub mod common {
    pub const BRAND_NAME: &str = "Brightdock Content Repurposer";
    pub const UNKNOWN_DATE: &str = "Unknown";
    pub const UNTITLED: &str = "Untitled";
}

pub mod toolbar {
    pub const FETCH_BUTTON: &str = "Fetch New";
    pub const FETCH_LOADING: &str = "Fetching...";
    pub const SEARCH_PLACEHOLDER: &str = "Search topics (e.g. retrieval augmented generation)";
    pub const SEARCH_BUTTON: &str = "Search";
    pub const SEARCH_LOADING: &str = "Searching...";
}

pub mod tabs {
    pub const ARTICLES: &str = "Papers";
    pub const DRAFTS: &str = "Drafts";
}

pub mod article_list {
    pub const EMPTY: &str = "Click \"Fetch New\" to discover papers";
}

pub mod preview {
    pub const EMPTY: &str = "Select a paper";
    pub const AUTHORS_LABEL: &str = "Authors:";
    pub const SOURCE_LABEL: &str = "Source:";
    pub const GENERATE_BUTTON: &str = "Generate Draft";
    pub const GENERATING: &str = "Generating...";
    pub const VIEW_ORIGINAL: &str = "View Original";
    pub const VIEW_PDF: &str = "PDF";
}

pub mod draft_list {
    pub const EMPTY: &str = "No drafts yet";
    pub const GENERATED_TEMPLATE: &str = "Generated {}";
    pub const VIEW_BUTTON: &str = "View";
    pub const LOADING: &str = "Loading...";
}

pub mod modal {
    pub const TITLE: &str = "Blog Draft";
    pub const COPY_BUTTON: &str = "Copy";
    pub const DOWNLOAD_BUTTON: &str = "Download";
    pub const CLOSE_ARIA: &str = "Close draft";
    pub const MODEL_TEMPLATE: &str = "Model: {}";
    pub const TOKENS_TEMPLATE: &str = "{} tokens";
}

pub mod toast {
    pub const FETCH_FOUND_TEMPLATE: &str = "Found {} new papers!";
    pub const FETCH_FAILED: &str = "Failed to fetch";
    pub const SEARCH_FOUND_TEMPLATE: &str = "Found {} papers";
    pub const SEARCH_FAILED: &str = "Search failed";
    pub const DRAFT_GENERATED: &str = "Draft generated!";
    pub const GENERATE_FAILED: &str = "Generation failed";
    pub const DRAFT_LOAD_FAILED: &str = "Failed to load draft";
    pub const NETWORK_ERROR: &str = "Network error";
    pub const COPIED: &str = "Copied!";
    pub const COPY_FAILED: &str = "Copy failed";
    pub const DISMISS_ARIA: &str = "Dismiss notification";
}
