use super::*;
use std::time::Duration;

use axum::Router;
use axum::routing::get;
use serde_json::{Value, json};

use crate::config::HostConfig;

// =============================================================
// Helpers
// =============================================================

#[test]
fn backend_students_url_for_collection_and_record() {
    assert_eq!(
        backend_students_url("http://backend:8080", None),
        "http://backend:8080/api/v1/students"
    );
    assert_eq!(
        backend_students_url("http://backend:8080/", Some(7)),
        "http://backend:8080/api/v1/students/7"
    );
}

#[test]
fn unreachable_maps_to_bad_gateway_body() {
    let err = ProxyError::Unreachable("connection refused".to_owned());
    assert_eq!(err.status(), StatusCode::BAD_GATEWAY);
    let body = err.body();
    assert_eq!(body.status, Some(502));
    assert_eq!(body.error.as_deref(), Some("Bad Gateway"));
    assert_eq!(
        body.message.as_deref(),
        Some("students backend unreachable: connection refused")
    );
}

#[test]
fn timeout_maps_to_gateway_timeout_body() {
    let err = ProxyError::Timeout;
    assert_eq!(err.status(), StatusCode::GATEWAY_TIMEOUT);
    assert_eq!(err.body().error.as_deref(), Some("Gateway Timeout"));
}

// =============================================================
// End-to-end against an in-process backend
// =============================================================

async fn spawn(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

fn fake_backend() -> Router {
    Router::new()
        .route(
            "/api/v1/students",
            get(|| async {
                Json(json!([
                    {"id": 1, "name": "Ada Lovelace", "email": "ada@example.com", "gender": "FEMALE"},
                    {"id": 2, "name": "Alan Turing", "email": "alan@example.com", "gender": "MALE"}
                ]))
            })
            .post(|headers: HeaderMap, body: Bytes| async move {
                let mut response = (StatusCode::CREATED, body).into_response();
                if let Some(content_type) = headers.get(header::CONTENT_TYPE) {
                    response.headers_mut().insert(header::CONTENT_TYPE, content_type.clone());
                }
                response
            }),
        )
        .route(
            "/api/v1/students/{id}",
            axum::routing::delete(|Path(id): Path<i64>| async move {
                if id == 1 {
                    StatusCode::OK.into_response()
                } else {
                    (
                        StatusCode::NOT_FOUND,
                        Json(json!({
                            "message": format!("Student with id {id} does not exist"),
                            "status": 404,
                            "error": "Not Found"
                        })),
                    )
                        .into_response()
                }
            })
            .put(|Path(id): Path<i64>, Json(body): Json<Value>| async move {
                Json(json!({"id": id, "echo": body}))
            }),
        )
        .route(
            "/slow/api/v1/students",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(3)).await;
                Json(json!([]))
            }),
        )
}

async fn spawn_host(backend_url: String) -> String {
    spawn_host_with_timeout(backend_url, 5).await
}

async fn spawn_host_with_timeout(backend_url: String, backend_timeout_secs: u64) -> String {
    let config = HostConfig { port: 0, backend_url, backend_timeout_secs };
    let state = AppState::new(&config).unwrap();
    spawn(crate::routes::api_routes(state)).await
}

#[tokio::test]
async fn list_is_forwarded_verbatim() {
    let backend = spawn(fake_backend()).await;
    let host = spawn_host(backend).await;

    let resp = reqwest::get(format!("{host}/api/v1/students")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let students: Vec<client::net::types::Student> = resp.json().await.unwrap();
    assert_eq!(students.len(), 2);
    assert_eq!(students[1].name, "Alan Turing");
}

#[tokio::test]
async fn create_forwards_body_and_status() {
    let backend = spawn(fake_backend()).await;
    let host = spawn_host(backend).await;

    let body = json!({"name": "Grace Hopper", "email": "grace@example.com", "gender": "FEMALE"});
    let resp = reqwest::Client::new()
        .post(format!("{host}/api/v1/students"))
        .json(&body)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    assert_eq!(resp.json::<Value>().await.unwrap(), body);
}

#[tokio::test]
async fn create_forwards_non_json_body_verbatim() {
    let backend = spawn(fake_backend()).await;
    let host = spawn_host(backend).await;

    let resp = reqwest::Client::new()
        .post(format!("{host}/api/v1/students"))
        .header(header::CONTENT_TYPE, "text/plain")
        .body("not json")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    assert_eq!(resp.headers().get(header::CONTENT_TYPE).unwrap(), "text/plain");
    assert_eq!(resp.text().await.unwrap(), "not json");
}

#[tokio::test]
async fn edit_forwards_body_and_status() {
    let backend = spawn(fake_backend()).await;
    let host = spawn_host(backend).await;

    let resp = reqwest::Client::new()
        .put(format!("{host}/api/v1/students/3"))
        .json(&json!({"name": "x"}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.json::<Value>().await.unwrap(), json!({"id": 3, "echo": {"name": "x"}}));
}

#[tokio::test]
async fn backend_error_body_passes_through() {
    let backend = spawn(fake_backend()).await;
    let host = spawn_host(backend).await;

    let resp = reqwest::Client::new()
        .delete(format!("{host}/api/v1/students/9"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: ApiErrorBody = resp.json().await.unwrap();
    assert_eq!(body.message.as_deref(), Some("Student with id 9 does not exist"));
    assert_eq!(body.error.as_deref(), Some("Not Found"));
}

#[tokio::test]
async fn unreachable_backend_answers_bad_gateway() {
    // Bind then drop to get a port nothing is listening on.
    let closed = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = closed.local_addr().unwrap();
    drop(closed);
    let host = spawn_host(format!("http://{addr}")).await;

    let resp = reqwest::get(format!("{host}/api/v1/students")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    let body: ApiErrorBody = resp.json().await.unwrap();
    assert_eq!(body.status, Some(502));
    assert_eq!(body.error.as_deref(), Some("Bad Gateway"));
}

#[tokio::test]
async fn slow_backend_answers_gateway_timeout() {
    let backend = spawn(fake_backend()).await;
    let host = spawn_host_with_timeout(format!("{backend}/slow"), 1).await;

    let resp = reqwest::get(format!("{host}/api/v1/students")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::GATEWAY_TIMEOUT);
    let body: ApiErrorBody = resp.json().await.unwrap();
    assert_eq!(body.message.as_deref(), Some("students backend timed out"));
    assert_eq!(body.status, Some(504));
    assert_eq!(body.error.as_deref(), Some("Gateway Timeout"));
}

#[tokio::test]
async fn healthz_is_ok() {
    let host = spawn_host("http://127.0.0.1:9".to_owned()).await;
    let resp = reqwest::get(format!("{host}/healthz")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}
