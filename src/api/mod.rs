use crate::models::{EntityId, NewNote, Note, Notebook};
use reqwest::Method;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum ApiError {
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    #[error("request failed ({status}): {body}")]
    Http {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("unexpected response body: {0}")]
    Parse(String),
}

pub(crate) type ApiResult<T> = Result<T, ApiError>;

pub(crate) const DEFAULT_API_URL: &str = "http://localhost:3100";
pub(crate) const DEFAULT_AUTOSAVE_MS: i32 = 800;
pub(crate) const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub(crate) struct EnvConfig {
    pub api_url: String,
    pub autosave_ms: i32,
    pub log_level: String,
}

impl EnvConfig {
    pub fn new() -> Self {
        let env = web_sys::window()
            .and_then(|w| w.get("ENV"))
            .filter(|env| !env.is_undefined() && env.is_object());

        let Some(env) = env else {
            return Self::from_lookup(|_| None);
        };

        Self::from_lookup(|key| {
            let v = js_sys::Reflect::get(&env, &key.into()).ok()?;
            v.as_string().or_else(|| v.as_f64().map(|n| n.to_string()))
        })
    }

    /// Build the config from a key lookup over `window.ENV`.
    ///
    /// Each setting accepts the README style upper-case key first, then the
    /// lower-case variant.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |upper: &str, lower: &str| {
            lookup(upper)
                .or_else(|| lookup(lower))
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let api_url = get("API_URL", "api_url")
            .map(|u| u.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let autosave_ms = get("AUTOSAVE_MS", "autosave_ms")
            .and_then(|v| v.parse::<f64>().ok())
            .filter(|ms| ms.is_finite() && *ms >= 0.0)
            .map(|ms| ms.min(i32::MAX as f64) as i32)
            .unwrap_or(DEFAULT_AUTOSAVE_MS);

        let log_level =
            get("LOG_LEVEL", "log_level").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

        Self {
            api_url,
            autosave_ms,
            log_level,
        }
    }
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// The notebook/note store as the view state sees it.
///
/// `ApiClient` is the production implementation; tests substitute an
/// in-memory recorder.
pub(crate) trait NotesBackend {
    async fn list_notebooks(&self) -> ApiResult<Vec<Notebook>>;
    async fn list_notes(&self, book_id: &EntityId) -> ApiResult<Vec<Note>>;
    async fn get_note(&self, note_id: &EntityId) -> ApiResult<Note>;
    async fn create_note(&self, note: &NewNote) -> ApiResult<()>;
    async fn update_note(&self, note: &Note) -> ApiResult<()>;
    async fn delete_note(&self, note_id: &EntityId) -> ApiResult<()>;
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct ApiClient {
    pub(crate) base_url: String,
}

impl ApiClient {
    pub fn new(base_url: String) -> Self {
        Self { base_url }
    }

    pub fn from_config(config: &EnvConfig) -> Self {
        Self::new(config.api_url.clone())
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(crate) fn notes_query_path(book_id: &EntityId) -> String {
        format!(
            "/notes?bookId={}",
            urlencoding::encode(&book_id.to_string())
        )
    }

    pub(crate) fn note_path(note_id: &EntityId) -> String {
        format!("/notes/{}", urlencoding::encode(&note_id.to_string()))
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<&impl Serialize>,
    ) -> ApiResult<reqwest::Response> {
        let client = reqwest::Client::new();
        let mut req = client.request(method, self.url(path));

        if let Some(b) = body {
            req = req.json(b);
        }

        let res = req.send().await.map_err(ApiError::Network)?;

        if res.status().is_success() {
            Ok(res)
        } else {
            let status = res.status();
            let body = res.text().await.unwrap_or_default();
            Err(ApiError::Http { status, body })
        }
    }

    async fn request<T: serde::de::DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&impl Serialize>,
    ) -> ApiResult<T> {
        let res = self.send(method, path, body).await?;
        let text = res.text().await.map_err(ApiError::Network)?;
        serde_json::from_str(&text).map_err(|e| ApiError::Parse(e.to_string()))
    }

    /// Like `request`, for endpoints whose response body we don't use.
    async fn request_discard(
        &self,
        method: Method,
        path: &str,
        body: Option<&impl Serialize>,
    ) -> ApiResult<()> {
        self.send(method, path, body).await.map(|_| ())
    }
}

const NO_BODY: Option<&()> = None;

impl NotesBackend for ApiClient {
    async fn list_notebooks(&self) -> ApiResult<Vec<Notebook>> {
        self.request(Method::GET, "/notebooks", NO_BODY).await
    }

    async fn list_notes(&self, book_id: &EntityId) -> ApiResult<Vec<Note>> {
        self.request(Method::GET, &Self::notes_query_path(book_id), NO_BODY)
            .await
    }

    async fn get_note(&self, note_id: &EntityId) -> ApiResult<Note> {
        self.request(Method::GET, &Self::note_path(note_id), NO_BODY)
            .await
    }

    async fn create_note(&self, note: &NewNote) -> ApiResult<()> {
        // The created record comes back with its id, but the list is reloaded
        // afterwards anyway.
        self.request_discard(Method::POST, "/notes", Some(note)).await
    }

    async fn update_note(&self, note: &Note) -> ApiResult<()> {
        self.request_discard(Method::PUT, &Self::note_path(&note.id), Some(note))
            .await
    }

    async fn delete_note(&self, note_id: &EntityId) -> ApiResult<()> {
        self.request_discard(Method::DELETE, &Self::note_path(note_id), NO_BODY)
            .await
    }
}
