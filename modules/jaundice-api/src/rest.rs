use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde::Deserialize;
use tracing::info;

use crate::AppState;

#[derive(Deserialize)]
pub struct ScanParams {
    urls: Option<String>,
}

/// URL-list validation failure; rendered as 400 with a JSON error body.
#[derive(Debug, PartialEq)]
pub enum BadRequest {
    MissingUrls,
    TooManyUrls { max: usize },
}

impl BadRequest {
    fn message(&self) -> String {
        match self {
            BadRequest::MissingUrls => "no urls in request".to_string(),
            BadRequest::TooManyUrls { max } => {
                format!("too many urls in request, should be {max} or less")
            }
        }
    }
}

/// Split the comma-separated `urls` query parameter, enforcing presence and
/// the batch-size cap. Whitespace around entries is trimmed; empty entries
/// are dropped.
pub fn parse_urls(raw: Option<&str>, max: usize) -> Result<Vec<String>, BadRequest> {
    let raw = raw.ok_or(BadRequest::MissingUrls)?;

    let urls: Vec<String> = raw
        .split(',')
        .map(|u| u.trim().to_string())
        .filter(|u| !u.is_empty())
        .collect();

    if urls.is_empty() {
        return Err(BadRequest::MissingUrls);
    }
    if urls.len() > max {
        return Err(BadRequest::TooManyUrls { max });
    }
    Ok(urls)
}

/// `GET /?urls=<comma-separated list>` — score each URL and return one JSON
/// object per submitted URL, in completion order.
pub async fn scan(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ScanParams>,
) -> impl IntoResponse {
    let urls = match parse_urls(params.urls.as_deref(), state.max_urls) {
        Ok(urls) => urls,
        Err(e) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({"error": e.message()})),
            )
                .into_response();
        }
    };

    info!(urls = urls.len(), "Scan request");
    let results = state.orchestrator.process_batch(&urls).await;
    Json(results).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_parameter_is_rejected() {
        assert_eq!(parse_urls(None, 10), Err(BadRequest::MissingUrls));
    }

    #[test]
    fn blank_parameter_is_rejected() {
        assert_eq!(parse_urls(Some("  "), 10), Err(BadRequest::MissingUrls));
        assert_eq!(parse_urls(Some(",,"), 10), Err(BadRequest::MissingUrls));
    }

    #[test]
    fn splits_and_trims() {
        let urls = parse_urls(Some("http://a/, http://b/"), 10).unwrap();
        assert_eq!(urls, vec!["http://a/", "http://b/"]);
    }

    #[test]
    fn enforces_batch_cap() {
        let raw = (0..11).map(|i| format!("http://site/{i}")).collect::<Vec<_>>().join(",");
        assert_eq!(
            parse_urls(Some(&raw), 10),
            Err(BadRequest::TooManyUrls { max: 10 })
        );
    }

    #[test]
    fn cap_boundary_is_inclusive() {
        let raw = (0..10).map(|i| format!("http://site/{i}")).collect::<Vec<_>>().join(",");
        assert_eq!(parse_urls(Some(&raw), 10).unwrap().len(), 10);
    }

    #[test]
    fn error_messages_match_the_wire_contract() {
        assert_eq!(BadRequest::MissingUrls.message(), "no urls in request");
        assert_eq!(
            BadRequest::TooManyUrls { max: 10 }.message(),
            "too many urls in request, should be 10 or less"
        );
    }
}
