//! REST API helpers for the students resource.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `ApiError::Unavailable` since these
//! endpoints are only called from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`. A non-2xx response is decoded
//! into `ApiErrorBody` when possible so the notification layer can show the
//! backend's own message, status and error text.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{ApiErrorBody, NewStudent, Student};

/// Collection endpoint for student records.
pub const STUDENTS_ENDPOINT: &str = "/api/v1/students";

/// Errors produced by student API calls.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (offline, CORS, aborted).
    #[error("request failed: {0}")]
    Network(String),

    /// The server answered with a non-success status.
    #[error("request failed with status {status}")]
    Status { status: u16, body: ApiErrorBody },

    /// A success response carried a body that did not match the schema.
    #[error("response decode failed: {0}")]
    Decode(String),

    /// Called outside the browser.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Text shown in the "There was an issue" notification:
    /// `{message} [{status}] [{error}]`.
    pub fn notification_message(&self) -> String {
        match self {
            Self::Status { status, body } => {
                let message = body.message.clone().unwrap_or_else(|| self.to_string());
                let status = body.status.unwrap_or(*status);
                let error = body
                    .error
                    .clone()
                    .unwrap_or_else(|| status_reason(status).to_owned());
                format!("{message} [{status}] [{error}]")
            }
            other => other.to_string(),
        }
    }
}

pub(crate) fn student_endpoint(id: i64) -> String {
    format!("{STUDENTS_ENDPOINT}/{id}")
}

/// Build a `Status` error from a raw response body. Bodies that are not an
/// `ApiErrorBody` (HTML error pages, empty bodies) decode to defaults.
pub(crate) fn status_error(status: u16, raw_body: &str) -> ApiError {
    let body = serde_json::from_str::<ApiErrorBody>(raw_body).unwrap_or_default();
    ApiError::Status { status, body }
}

/// Canonical reason phrase for the statuses a CRUD backend commonly returns.
pub(crate) fn status_reason(status: u16) -> &'static str {
    match status {
        400 => "Bad Request",
        401 => "Unauthorized",
        403 => "Forbidden",
        404 => "Not Found",
        409 => "Conflict",
        422 => "Unprocessable Entity",
        500 => "Internal Server Error",
        502 => "Bad Gateway",
        503 => "Service Unavailable",
        504 => "Gateway Timeout",
        _ => "Error",
    }
}

#[cfg(feature = "hydrate")]
async fn check_status(resp: gloo_net::http::Response) -> Result<gloo_net::http::Response, ApiError> {
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let raw = resp.text().await.unwrap_or_default();
    Err(status_error(status, &raw))
}

/// Fetch every student via `GET /api/v1/students`.
///
/// # Errors
///
/// Returns an error if the request fails, the server responds with a non-OK
/// status, or the body is not a student list.
pub async fn fetch_students() -> Result<Vec<Student>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(STUDENTS_ENDPOINT)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let resp = check_status(resp).await?;
        resp.json::<Vec<Student>>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Create a student via `POST /api/v1/students`.
///
/// # Errors
///
/// Returns an error if the request fails or the server rejects the record.
pub async fn add_student(student: &NewStudent) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(STUDENTS_ENDPOINT)
            .json(student)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        check_status(resp).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = student;
        Err(ApiError::Unavailable)
    }
}

/// Edit a student via `PUT /api/v1/students/{id}`.
///
/// The body is the record as currently displayed; the row action does not
/// collect changed fields.
///
/// # Errors
///
/// Returns an error if the request fails or the server rejects the edit.
pub async fn edit_student(student: &Student) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = student_endpoint(student.id);
        let resp = gloo_net::http::Request::put(&url)
            .json(student)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        check_status(resp).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = student;
        Err(ApiError::Unavailable)
    }
}

/// Delete a student via `DELETE /api/v1/students/{id}`.
///
/// # Errors
///
/// Returns an error if the request fails or the server responds with a
/// non-OK status.
pub async fn delete_student(id: i64) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = student_endpoint(id);
        let resp = gloo_net::http::Request::delete(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        check_status(resp).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(ApiError::Unavailable)
    }
}
