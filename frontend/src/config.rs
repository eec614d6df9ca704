//! Configuration for the frontend application

/// API base URL, read at compile time.
/// - Same-origin deployment (default): "/api"
/// - Separate backend: set `REPURPOSER_API_BASE=http://localhost:5000/api`
pub const API_BASE: &str = match option_env!("REPURPOSER_API_BASE") {
    Some(url) => url,
    None => "/api",
};

/// How long a toast stays up before dismissing itself.
pub const TOAST_DURATION_MS: u32 = 3000;

/// Helper function to construct endpoint URLs
pub fn api_url(path: &str) -> String {
    let base = API_BASE.strip_suffix('/').unwrap_or(API_BASE);
    format!("{}{}", base, path)
}
