//! HTTP handlers for the task endpoints.
//!
//! Handlers parse the `id` query parameter or the JSON body, call the
//! [`TaskStore`](crate::TaskStore), and turn the outcome into a response.
//! Failures are returned as [`ApiError`] and rendered as plain text.

use axum::{
    body::Bytes,
    extract::{Query, State},
    http::StatusCode,
    response::Json,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::debug;

use crate::error::{ApiError, INVALID_BODY, INVALID_ID, INVALID_TASK_ID};
use crate::models::Task;
use crate::server::AppState;

/// Query pairs in the order they appeared.
type QueryPairs = Vec<(String, String)>;

/// Root greeting. Also answers any path no other route claims.
pub async fn hello() -> &'static str {
    "Hello, World!"
}

/// Health check endpoint.
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<Value> {
    let tasks = state.store.len().await;
    Json(json!({ "status": "healthy", "tasks": tasks }))
}

/// List every task in insertion order.
pub async fn get_tasks(State(state): State<Arc<AppState>>) -> Json<Vec<Task>> {
    Json(state.store.list().await)
}

/// Fetch one task by its `id` query parameter.
pub async fn get_task_by_id(
    State(state): State<Arc<AppState>>,
    Query(params): Query<QueryPairs>,
) -> Result<Json<Task>, ApiError> {
    let id = parse_id(&params).ok_or(ApiError::BadRequest(INVALID_ID))?;
    let task = state.store.get(id).await?;
    Ok(Json(task))
}

/// Create a task from the JSON body. Any `id` in the body is discarded.
pub async fn create_task(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<(StatusCode, Json<Task>), ApiError> {
    let task = decode_task(&body)?;
    let created = state.store.create(task).await;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Replace the title and details of the task named by the body's `id`.
pub async fn update_task(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<Task>, ApiError> {
    let task = decode_task(&body)?;
    let updated = state.store.update(task).await?;
    Ok(Json(updated))
}

/// Delete the task named by the `id` query parameter.
pub async fn delete_task(
    State(state): State<Arc<AppState>>,
    Query(params): Query<QueryPairs>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&params).ok_or(ApiError::BadRequest(INVALID_TASK_ID))?;
    state.store.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Method fallback for `/create` and `/update`.
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

/// First `id` value in the query, parsed as a signed decimal integer.
fn parse_id(params: &[(String, String)]) -> Option<i64> {
    let raw = params
        .iter()
        .find(|(key, _)| key == "id")
        .map_or("", |(_, value)| value.as_str());

    match raw.parse() {
        Ok(id) => Some(id),
        Err(e) => {
            debug!(raw = %raw, error = %e, "Rejected task ID");
            None
        }
    }
}

/// Decode the first JSON value in the body as a task.
///
/// The request's `Content-Type` is not consulted, and anything after the
/// first value is ignored.
fn decode_task(body: &[u8]) -> Result<Task, ApiError> {
    serde_json::Deserializer::from_slice(body)
        .into_iter::<Task>()
        .next()
        .unwrap_or_else(|| Err(serde::de::Error::custom("empty body")))
        .map_err(|e| {
            debug!(error = %e, "Rejected request body");
            ApiError::BadRequest(INVALID_BODY)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(items: &[(&str, &str)]) -> QueryPairs {
        items
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id(&pairs(&[("id", "3")])), Some(3));
        assert_eq!(parse_id(&pairs(&[("id", "-2")])), Some(-2));
        assert_eq!(parse_id(&pairs(&[("id", "+7")])), Some(7));
        assert_eq!(parse_id(&pairs(&[("id", "abc")])), None);
        assert_eq!(parse_id(&pairs(&[("id", "")])), None);
        assert_eq!(parse_id(&pairs(&[("id", " 1")])), None);
        assert_eq!(parse_id(&pairs(&[])), None);
    }

    #[test]
    fn test_parse_id_uses_first_value() {
        assert_eq!(parse_id(&pairs(&[("x", "9"), ("id", "1"), ("id", "2")])), Some(1));
    }

    #[test]
    fn test_decode_task() {
        let task = decode_task(br#"{"id":5,"title":"T","details":"D"}"#).unwrap();
        assert_eq!(task, Task::new(5, "T", "D"));
    }

    #[test]
    fn test_decode_task_ignores_trailing_data() {
        let task = decode_task(b"{\"title\":\"T\"}\n{\"title\":\"U\"}").unwrap();
        assert_eq!(task.title, "T");
    }

    #[test]
    fn test_decode_task_keys_are_case_sensitive() {
        let task = decode_task(br#"{"Title":"Cap","Details":"D"}"#).unwrap();
        assert_eq!(task, Task::default());
    }

    #[test]
    fn test_decode_task_rejects_duplicate_keys() {
        assert_eq!(
            decode_task(br#"{"title":"a","title":"b"}"#),
            Err(ApiError::BadRequest(INVALID_BODY))
        );
    }

    #[test]
    fn test_decode_task_rejects_bad_bodies() {
        for body in [&b""[..], b"   ", b"{", b"not json", b"[1,2]", br#"{"id":"x"}"#] {
            assert_eq!(
                decode_task(body),
                Err(ApiError::BadRequest(INVALID_BODY)),
                "body {:?} should be rejected",
                String::from_utf8_lossy(body)
            );
        }
    }
}
