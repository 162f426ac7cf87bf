//! Network fetching utilities with timeout support.
//!
//! Thin wrappers over the browser Fetch API for the two service
//! endpoints, with timeout racing via `Promise.race`.

use js_sys::{Array, Promise};
use serde::de::DeserializeOwned;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use mdview_core::types::{DirectoryListing, ErrorBody, FileContent};

use crate::config::{API_BASE_URL, FETCH_TIMEOUT_MS};
use crate::error::FetchError;

// =============================================================================
// Promise Racing Utilities
// =============================================================================

/// Result of a promise race with timeout.
#[derive(Debug)]
pub enum RaceResult {
    /// The promise completed before timeout.
    Completed(JsValue),
    /// Timeout occurred before promise completed.
    TimedOut,
    /// Promise rejected with an error.
    Error(String),
}

/// Race a promise against a timeout.
///
/// # Returns
/// * `RaceResult::Completed` if the promise resolves before timeout
/// * `RaceResult::TimedOut` if the timeout occurs first
/// * `RaceResult::Error` if the promise rejects
pub async fn race_with_timeout(promise: Promise, timeout_ms: i32) -> RaceResult {
    let Some(window) = web_sys::window() else {
        return RaceResult::Error("Window not available".to_string());
    };

    // Timeout promise resolves to undefined, which the winner check keys on.
    let timeout_promise = Promise::new(&mut |resolve, _| {
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, timeout_ms);
    });

    let race_array = Array::new();
    race_array.push(&promise);
    race_array.push(&timeout_promise);
    let race_promise = Promise::race(&race_array);

    match JsFuture::from(race_promise).await {
        Ok(result) => {
            if result.is_undefined() {
                RaceResult::TimedOut
            } else {
                RaceResult::Completed(result)
            }
        }
        Err(e) => RaceResult::Error(e.as_string().unwrap_or_else(|| "Unknown error".to_string())),
    }
}

// =============================================================================
// Endpoint Wrappers
// =============================================================================

/// Fetch the listing for `path`, or the service's default root when
/// `path` is `None`.
pub async fn fetch_listing(path: Option<&str>) -> Result<DirectoryListing, FetchError> {
    fetch_json(&api_url("/api/files", path)).await
}

/// Fetch the full text content of a file.
pub async fn fetch_document(path: &str) -> Result<FileContent, FetchError> {
    fetch_json(&api_url("/api/content", Some(path))).await
}

/// Build an endpoint URL with an optional percent-encoded path query.
fn api_url(endpoint: &str, path: Option<&str>) -> String {
    match path {
        Some(path) => {
            let encoded = js_sys::encode_uri_component(path);
            format!("{API_BASE_URL}{endpoint}?path={encoded}")
        }
        None => format!("{API_BASE_URL}{endpoint}"),
    }
}

// =============================================================================
// Fetch Functions
// =============================================================================

/// Fetch and parse JSON from a URL.
async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, FetchError> {
    let text = fetch_url(url).await?;
    serde_json::from_str(&text).map_err(|e| FetchError::JsonParseError(e.to_string()))
}

/// Fetch text from a URL using the Fetch API with timeout.
///
/// A non-2xx response is decoded as the service's `{"error": …}`
/// envelope so the caller sees the server's message.
async fn fetch_url(url: &str) -> Result<String, FetchError> {
    let window = web_sys::window().ok_or(FetchError::NoWindow)?;

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|_| FetchError::RequestCreationFailed)?;

    let fetch_promise = window.fetch_with_request(&request);

    match race_with_timeout(fetch_promise, FETCH_TIMEOUT_MS).await {
        RaceResult::TimedOut => Err(FetchError::Timeout),
        RaceResult::Error(msg) => Err(FetchError::NetworkError(msg)),
        RaceResult::Completed(result) => {
            let resp: Response = result.dyn_into().map_err(|_| FetchError::InvalidContent)?;

            if !resp.ok() {
                let message = read_text(&resp)
                    .await
                    .ok()
                    .and_then(|text| serde_json::from_str::<ErrorBody>(&text).ok())
                    .map(|body| body.error)
                    .unwrap_or_default();
                return Err(FetchError::HttpError(resp.status(), message));
            }

            read_text(&resp).await
        }
    }
}

/// Read a response body as text.
async fn read_text(resp: &Response) -> Result<String, FetchError> {
    let text = JsFuture::from(resp.text().map_err(|_| FetchError::ResponseReadFailed)?)
        .await
        .map_err(|_| FetchError::ResponseReadFailed)?;

    text.as_string().ok_or(FetchError::InvalidContent)
}
