//! Remote Table API Client
//!
//! Functions for talking to the hosted table API (PostgREST shape). Every
//! operation is a plain request/response call; identity is supplied implicitly
//! through headers read from local storage.

use gloo_net::http::{Request, RequestBuilder, Response};

use crate::api::types::{Page, Post, PostUpdate, SettingsPayload, SiteSettings};

/// Default API base URL (local development stack)
pub const DEFAULT_API_BASE: &str = "http://localhost:54321";

/// Error code the API returns when a single-object request matches no rows
pub const NO_ROWS_CODE: &str = "PGRST116";

pub const TABLE_POSTS: &str = "posts";
pub const TABLE_PAGES: &str = "pages";
pub const TABLE_MEDIA: &str = "media";
pub const TABLE_SETTINGS: &str = "settings";

const API_URL_KEY: &str = "inkwell_api_url";
const API_KEY_KEY: &str = "inkwell_api_key";
const SESSION_TOKEN_KEY: &str = "inkwell_session_token";

fn storage_get(key: &str) -> Option<String> {
    let window = web_sys::window()?;
    let storage = window.local_storage().ok()??;
    storage.get_item(key).ok()?
}

fn storage_set(key: &str, value: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(key, value);
        }
    }
}

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    storage_get(API_URL_KEY)
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string())
        .trim_end_matches('/')
        .to_string()
}

/// Set the API base URL in local storage
pub fn set_api_base(url: &str) {
    storage_set(API_URL_KEY, url);
}

/// Get the anon API key from local storage
pub fn get_api_key() -> String {
    storage_get(API_KEY_KEY).unwrap_or_default()
}

/// Set the anon API key in local storage
pub fn set_api_key(key: &str) {
    storage_set(API_KEY_KEY, key);
}

/// Session access token, written by the auth layer on sign-in. Falls back to
/// the anon key so read-only tables still work without a session.
pub fn get_session_token() -> String {
    storage_get(SESSION_TOKEN_KEY).unwrap_or_else(get_api_key)
}

// ============ Errors ============

/// Error from any table API call: a human-readable message plus the optional
/// error code the service attaches.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiError {
    pub message: String,
    pub code: Option<String>,
}

impl ApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: None,
        }
    }

    /// True when the error is the "no rows returned" signal rather than a
    /// transport or query failure.
    pub fn is_no_rows(&self) -> bool {
        self.code.as_deref() == Some(NO_ROWS_CODE)
    }

    fn network(e: gloo_net::Error) -> Self {
        Self::new(format!("Network error: {}", e))
    }

    fn build(e: gloo_net::Error) -> Self {
        Self::new(format!("Request build error: {}", e))
    }

    fn decode(e: gloo_net::Error) -> Self {
        Self::new(format!("Parse error: {}", e))
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ApiError {}

#[derive(serde::Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    details: Option<serde_json::Value>,
    #[serde(default)]
    hint: Option<String>,
}

/// Turn a non-ok response into an [`ApiError`], preserving the error code.
async fn api_error(response: Response) -> ApiError {
    let status = response.status();
    match response.json::<ErrorBody>().await {
        Ok(body) => {
            let message = body
                .message
                .or_else(|| body.hint.clone())
                .or_else(|| body.details.as_ref().map(|d| d.to_string()))
                .unwrap_or_else(|| format!("Request failed with status {}", status));
            ApiError {
                message,
                code: body.code,
            }
        }
        Err(_) => ApiError::new(format!("Request failed with status {}", status)),
    }
}

// ============ Request plumbing ============

fn table_url(table: &str) -> String {
    format!("{}/rest/v1/{}", get_api_base(), table)
}

fn authorize(builder: RequestBuilder) -> RequestBuilder {
    builder
        .header("apikey", &get_api_key())
        .header("Authorization", &format!("Bearer {}", get_session_token()))
}

async fn fetch_rows<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let response = authorize(Request::get(url))
        .send()
        .await
        .map_err(ApiError::network)?;

    if !response.ok() {
        return Err(api_error(response).await);
    }

    response.json().await.map_err(ApiError::decode)
}

/// Single-object fetch. The API answers with exactly one row or an error
/// carrying [`NO_ROWS_CODE`].
async fn fetch_single<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let response = authorize(Request::get(url))
        .header("Accept", "application/vnd.pgrst.object+json")
        .send()
        .await
        .map_err(ApiError::network)?;

    if !response.ok() {
        return Err(api_error(response).await);
    }

    response.json().await.map_err(ApiError::decode)
}

/// Parse the total from a Content-Range header value like `0-4/57`.
/// An unknown total (`*`) yields None.
fn parse_content_range(value: &str) -> Option<u64> {
    value.rsplit('/').next()?.trim().parse().ok()
}

// ============ Operations ============

/// Count all rows in a table.
pub async fn count_rows(table: &str) -> Result<u64, ApiError> {
    let url = format!("{}?select=id&limit=1", table_url(table));
    let response = authorize(Request::get(&url))
        .header("Prefer", "count=exact")
        .send()
        .await
        .map_err(ApiError::network)?;

    if !response.ok() {
        return Err(api_error(response).await);
    }

    response
        .headers()
        .get("content-range")
        .as_deref()
        .and_then(parse_content_range)
        .ok_or_else(|| ApiError::new("Missing row count in response"))
}

/// Fetch the newest posts, newest first.
pub async fn recent_posts(limit: usize) -> Result<Vec<Post>, ApiError> {
    let url = format!(
        "{}?select=*&order=created_at.desc&limit={}",
        table_url(TABLE_POSTS),
        limit
    );
    fetch_rows(&url).await
}

/// Fetch the newest pages, newest first.
pub async fn recent_pages(limit: usize) -> Result<Vec<Page>, ApiError> {
    let url = format!(
        "{}?select=*&order=created_at.desc&limit={}",
        table_url(TABLE_PAGES),
        limit
    );
    fetch_rows(&url).await
}

/// Fetch all posts for the listing view, newest first.
pub async fn list_posts() -> Result<Vec<Post>, ApiError> {
    let url = format!("{}?select=*&order=created_at.desc", table_url(TABLE_POSTS));
    fetch_rows(&url).await
}

/// Fetch exactly one post by id.
pub async fn post_by_id(id: i64) -> Result<Post, ApiError> {
    let url = format!("{}?select=*&id=eq.{}", table_url(TABLE_POSTS), id);
    fetch_single(&url).await
}

/// Fetch the singleton settings row. A missing row surfaces as an error
/// with [`NO_ROWS_CODE`], distinguishable via [`ApiError::is_no_rows`].
pub async fn site_settings() -> Result<SiteSettings, ApiError> {
    let url = format!("{}?select=*", table_url(TABLE_SETTINGS));
    fetch_single(&url).await
}

/// Persist a full-record post update.
pub async fn update_post(id: i64, payload: &PostUpdate) -> Result<(), ApiError> {
    let url = format!("{}?id=eq.{}", table_url(TABLE_POSTS), id);
    let response = authorize(Request::patch(&url))
        .header("Prefer", "return=minimal")
        .json(payload)
        .map_err(ApiError::build)?
        .send()
        .await
        .map_err(ApiError::network)?;

    if !response.ok() {
        return Err(api_error(response).await);
    }

    Ok(())
}

/// Update the existing settings row by id.
pub async fn update_settings(id: i64, payload: &SettingsPayload) -> Result<(), ApiError> {
    let url = format!("{}?id=eq.{}", table_url(TABLE_SETTINGS), id);
    let response = authorize(Request::patch(&url))
        .header("Prefer", "return=minimal")
        .json(payload)
        .map_err(ApiError::build)?
        .send()
        .await
        .map_err(ApiError::network)?;

    if !response.ok() {
        return Err(api_error(response).await);
    }

    Ok(())
}

/// Insert the first settings row.
pub async fn insert_settings(payload: &SettingsPayload) -> Result<(), ApiError> {
    let response = authorize(Request::post(&table_url(TABLE_SETTINGS)))
        .header("Prefer", "return=minimal")
        .json(payload)
        .map_err(ApiError::build)?
        .send()
        .await
        .map_err(ApiError::network)?;

    if !response.ok() {
        return Err(api_error(response).await);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_range_with_total() {
        assert_eq!(parse_content_range("0-4/57"), Some(57));
        assert_eq!(parse_content_range("*/0"), Some(0));
    }

    #[test]
    fn content_range_unknown_total() {
        assert_eq!(parse_content_range("0-4/*"), None);
        assert_eq!(parse_content_range("garbage"), None);
    }

    #[test]
    fn no_rows_code_is_distinguishable() {
        let missing = ApiError {
            message: "JSON object requested, multiple (or no) rows returned".to_string(),
            code: Some(NO_ROWS_CODE.to_string()),
        };
        assert!(missing.is_no_rows());

        let other = ApiError::new("Network error: timed out");
        assert!(!other.is_no_rows());
    }
}
