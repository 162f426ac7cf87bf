//! HTTP surface: `/api/files` and `/api/content` over hyper.
//!
//! The service is stateless; every request is dispatched by a pure
//! function so the routing and status mapping are testable without a
//! socket. CORS is wide open since the UI may be served from a
//! different local port.

use std::net::SocketAddr;

use bytes::Bytes;
use http_body_util::Full;
use hyper::body::Incoming;
use hyper::header::{self, HeaderValue};
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Method, Request, Response, StatusCode, Uri};
use hyper_util::rt::TokioIo;
use mdview_core::types::ErrorBody;
use serde::Serialize;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::error::ServiceError;
use crate::fs;

/// Runtime configuration for the HTTP service.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Address to bind.
    pub addr: SocketAddr,
    /// Directory listed when a request carries no `path` parameter.
    pub root: String,
}

/// Serve the API until the process is terminated.
///
/// One task per connection on the current-thread runtime; handlers
/// share nothing, so there is no locking anywhere.
pub async fn serve(config: ServerConfig) -> std::io::Result<()> {
    let listener = TcpListener::bind(config.addr).await?;
    info!(addr = %config.addr, root = %config.root, "listening");

    loop {
        let (stream, remote) = listener.accept().await?;
        let io = TokioIo::new(stream);
        let root = config.root.clone();

        tokio::task::spawn(async move {
            let service = service_fn(move |req: Request<Incoming>| {
                let root = root.clone();
                async move {
                    Ok::<_, std::convert::Infallible>(respond(req.method(), req.uri(), &root))
                }
            });

            if let Err(err) = http1::Builder::new().serve_connection(io, service).await {
                warn!(%remote, "connection error: {err}");
            }
        });
    }
}

/// Build the response for one request.
pub fn respond(method: &Method, uri: &Uri, root: &str) -> Response<Full<Bytes>> {
    if method == Method::OPTIONS {
        return preflight();
    }

    let (status, body) = dispatch(method, uri, root);
    json_response(status, body)
}

/// Route a request to its status code and JSON body.
///
/// Pure so tests can exercise routing, query decoding, and error
/// mapping directly.
fn dispatch(method: &Method, uri: &Uri, root: &str) -> (StatusCode, String) {
    if method != Method::GET {
        return error_body(StatusCode::METHOD_NOT_ALLOWED, "method not allowed");
    }

    let path_param = query_param(uri, "path");

    let result = match uri.path() {
        "/api/files" => {
            let path = path_param.unwrap_or_else(|| root.to_string());
            fs::list_directory(&path).map(|listing| json_body(&listing))
        }
        "/api/content" => {
            fs::read_content(path_param.as_deref().unwrap_or("")).map(|content| json_body(&content))
        }
        _ => return error_body(StatusCode::NOT_FOUND, "not found"),
    };

    match result {
        Ok(body) => (StatusCode::OK, body),
        Err(err) => {
            warn!(endpoint = uri.path(), "{err}");
            error_body(status_for(&err), &err.to_string())
        }
    }
}

/// First value of a query parameter, percent-decoded.
fn query_param(uri: &Uri, name: &str) -> Option<String> {
    let query = uri.query()?;
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
}

fn status_for(err: &ServiceError) -> StatusCode {
    match err {
        ServiceError::BadRequest => StatusCode::BAD_REQUEST,
        ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
        ServiceError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn json_body<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "{}".to_string())
}

fn error_body(status: StatusCode, message: &str) -> (StatusCode, String) {
    let envelope = ErrorBody {
        error: message.to_string(),
    };
    (status, json_body(&envelope))
}

fn json_response(status: StatusCode, body: String) -> Response<Full<Bytes>> {
    let mut response = Response::new(Full::new(Bytes::from(body)));
    *response.status_mut() = status;

    let headers = response.headers_mut();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );

    response
}

fn preflight() -> Response<Full<Bytes>> {
    let mut response = Response::new(Full::new(Bytes::new()));
    *response.status_mut() = StatusCode::NO_CONTENT;

    let headers = response.headers_mut();
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET, OPTIONS"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("*"),
    );

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{File, create_dir};
    use std::io::Write;
    use tempfile::tempdir;

    fn get(uri: &str, root: &str) -> (StatusCode, serde_json::Value) {
        let uri: Uri = uri.parse().expect("parse uri");
        let (status, body) = dispatch(&Method::GET, &uri, root);
        let json = serde_json::from_str(&body).expect("json body");
        (status, json)
    }

    fn files_uri(path: &std::path::Path) -> String {
        let query = url::form_urlencoded::Serializer::new(String::new())
            .append_pair("path", &path.to_string_lossy())
            .finish();
        format!("/api/files?{query}")
    }

    fn content_uri(path: &std::path::Path) -> String {
        let query = url::form_urlencoded::Serializer::new(String::new())
            .append_pair("path", &path.to_string_lossy())
            .finish();
        format!("/api/content?{query}")
    }

    #[test]
    fn files_endpoint_lists_directory() {
        let dir = tempdir().expect("tempdir");
        create_dir(dir.path().join("sub")).expect("create dir");
        File::create(dir.path().join("note.md"))
            .expect("create file")
            .write_all(b"# Hi")
            .expect("write file");

        let (status, json) = get(&files_uri(dir.path()), "/");
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["currentPath"], dir.path().to_string_lossy().as_ref());
        assert_eq!(json["items"][0]["name"], "sub");
        assert_eq!(json["items"][0]["isDirectory"], true);
        assert_eq!(json["items"][0]["size"], 0);
        assert_eq!(json["items"][1]["name"], "note.md");
        assert_eq!(json["items"][1]["size"], 4);
    }

    #[test]
    fn files_endpoint_defaults_to_root() {
        let dir = tempdir().expect("tempdir");
        let root = dir.path().to_string_lossy();

        let (status, json) = get("/api/files", &root);
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["currentPath"], root.as_ref());
    }

    #[test]
    fn files_endpoint_missing_path_is_404() {
        let (status, json) = get("/api/files?path=/definitely/not/real", "/");
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"], "directory not found");
    }

    #[test]
    fn content_endpoint_returns_text() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("note.md");
        File::create(&path)
            .expect("create file")
            .write_all(b"# Hi")
            .expect("write file");

        let (status, json) = get(&content_uri(&path), "/");
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["content"], "# Hi");
    }

    #[test]
    fn content_endpoint_without_path_is_400() {
        let (status, json) = get("/api/content", "/");
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "path is required");
    }

    #[test]
    fn content_endpoint_missing_file_is_404() {
        let (status, json) = get("/api/content?path=/definitely/not/real.md", "/");
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"], "file not found");
    }

    #[test]
    fn listing_a_file_is_500() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("plain.txt");
        File::create(&path).expect("create file");

        let (status, json) = get(&files_uri(&path), "/");
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(json["error"].is_string());
    }

    #[test]
    fn unknown_route_is_404() {
        let (status, json) = get("/api/unknown", "/");
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"], "not found");
    }

    #[test]
    fn non_get_is_rejected() {
        let uri: Uri = "/api/files".parse().expect("parse uri");
        let (status, _) = dispatch(&Method::POST, &uri, "/");
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    }

    #[test]
    fn query_values_are_percent_decoded() {
        let dir = tempdir().expect("tempdir");
        let spaced = dir.path().join("with space");
        create_dir(&spaced).expect("create dir");

        let (status, json) = get(&files_uri(&spaced), "/");
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["currentPath"], spaced.to_string_lossy().as_ref());
    }

    #[test]
    fn responses_carry_cors_and_content_type() {
        let uri: Uri = "/api/content".parse().expect("parse uri");
        let response = respond(&Method::GET, &uri, "/");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "*"
        );
        assert_eq!(response.headers()[header::CONTENT_TYPE], "application/json");
    }

    #[test]
    fn preflight_is_no_content() {
        let uri: Uri = "/api/files".parse().expect("parse uri");
        let response = respond(&Method::OPTIONS, &uri, "/");
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_METHODS],
            "GET, OPTIONS"
        );
    }
}
