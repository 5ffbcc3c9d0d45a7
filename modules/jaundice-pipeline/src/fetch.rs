use tracing::debug;

use crate::error::StageResult;

/// Fetch a page body over the shared connection pool.
///
/// Non-2xx responses are transport failures, same as connection errors:
/// both surface as `StageError::Fetch`. The deadline is applied by the
/// caller, not here.
pub async fn fetch_page(client: &reqwest::Client, url: &str) -> StageResult<String> {
    let response = client.get(url).send().await?.error_for_status()?;
    let body = response.text().await?;
    debug!(url, bytes = body.len(), "Page fetched");
    Ok(body)
}
