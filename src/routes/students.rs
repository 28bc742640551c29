//! Pass-through routes for the students resource.
//!
//! The browser only ever talks to this host; each handler replays the
//! request against `{backend_url}/api/v1/students[/{id}]` and returns the
//! backend's status, content type and body unchanged. Transport failures are
//! answered with an `ApiErrorBody` so the UI's notification path handles
//! them like any backend error.

#[cfg(test)]
#[path = "students_test.rs"]
mod students_test;

use axum::body::{Body, Bytes};
use axum::extract::{Path, State};
use axum::http::{HeaderMap, HeaderValue, Method, StatusCode, header};
use axum::response::{IntoResponse, Json, Response};
use client::net::types::ApiErrorBody;

use crate::state::AppState;

/// Path of the students collection on both the host and the backend.
pub const STUDENTS_PATH: &str = "/api/v1/students";

/// Transport-level failures talking to the students backend.
#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    /// The backend could not be reached or the response could not be read.
    #[error("students backend unreachable: {0}")]
    Unreachable(String),

    /// The backend did not answer within the configured timeout.
    #[error("students backend timed out")]
    Timeout,
}

impl ProxyError {
    fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_timeout() { Self::Timeout } else { Self::Unreachable(err.to_string()) }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Unreachable(_) => StatusCode::BAD_GATEWAY,
            Self::Timeout => StatusCode::GATEWAY_TIMEOUT,
        }
    }

    /// Error payload in the same shape the backend uses.
    pub fn body(&self) -> ApiErrorBody {
        let status = self.status();
        ApiErrorBody {
            message: Some(self.to_string()),
            status: Some(status.as_u16()),
            error: status.canonical_reason().map(str::to_owned),
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self, "students proxy failed");
        (self.status(), Json(self.body())).into_response()
    }
}

/// Backend URL for the collection, or for one record when `id` is given.
pub(crate) fn backend_students_url(backend_url: &str, id: Option<i64>) -> String {
    let base = backend_url.trim_end_matches('/');
    match id {
        Some(id) => format!("{base}{STUDENTS_PATH}/{id}"),
        None => format!("{base}{STUDENTS_PATH}"),
    }
}

/// `GET /api/v1/students`
pub async fn list_students(State(state): State<AppState>) -> Result<Response, ProxyError> {
    forward(&state, Method::GET, None, None).await
}

/// `POST /api/v1/students`
pub async fn create_student(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ProxyError> {
    forward(&state, Method::POST, None, Some(Payload::new(&headers, body))).await
}

/// `PUT /api/v1/students/{id}`
pub async fn edit_student(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ProxyError> {
    forward(&state, Method::PUT, Some(id), Some(Payload::new(&headers, body))).await
}

/// `DELETE /api/v1/students/{id}`
pub async fn delete_student(State(state): State<AppState>, Path(id): Path<i64>) -> Result<Response, ProxyError> {
    forward(&state, Method::DELETE, Some(id), None).await
}

/// Request body replayed to the backend as received.
struct Payload {
    content_type: Option<HeaderValue>,
    bytes: Bytes,
}

impl Payload {
    fn new(headers: &HeaderMap, bytes: Bytes) -> Self {
        Self { content_type: headers.get(header::CONTENT_TYPE).cloned(), bytes }
    }
}

async fn forward(
    state: &AppState,
    method: Method,
    id: Option<i64>,
    payload: Option<Payload>,
) -> Result<Response, ProxyError> {
    let url = backend_students_url(&state.backend_url, id);
    let mut request = state.http.request(method.clone(), &url);
    if let Some(payload) = payload {
        if let Some(content_type) = payload.content_type {
            request = request.header(header::CONTENT_TYPE, content_type);
        }
        request = request.body(payload.bytes);
    }

    let upstream = request.send().await.map_err(ProxyError::from_reqwest)?;
    let status = upstream.status();
    let content_type = upstream.headers().get(header::CONTENT_TYPE).cloned();
    let bytes = upstream.bytes().await.map_err(ProxyError::from_reqwest)?;
    tracing::debug!(%method, %url, status = status.as_u16(), "proxied students request");

    let mut response = Response::new(Body::from(bytes));
    *response.status_mut() = status;
    if let Some(content_type) = content_type {
        response.headers_mut().insert(header::CONTENT_TYPE, content_type);
    }
    Ok(response)
}
