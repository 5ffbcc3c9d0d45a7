use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::{info, warn};

use jaundice_common::{ArticleResult, ChargedVocabulary};

use crate::error::{StageError, StageResult};
use crate::extract::TextExtractor;
use crate::fetch::fetch_page;
use crate::score::jaundice_rate;
use crate::tokenize::Tokenizer;

/// Run one time-bounded stage. If the deadline elapses first the in-flight
/// work is dropped and the stage yields `Timeout`; transport and domain
/// failures pass through unchanged. Each stage is attempted exactly once.
pub async fn with_deadline<T>(
    deadline: Duration,
    work: impl Future<Output = StageResult<T>>,
) -> StageResult<T> {
    match tokio::time::timeout(deadline, work).await {
        Ok(result) => result,
        Err(_) => Err(StageError::Timeout),
    }
}

/// Fetch → extract → tokenize → score for one URL.
///
/// Owns no mutable state; everything shared with sibling pipelines (the
/// connection pool, the extractor/tokenizer handles, the vocabulary) is
/// read-only.
#[derive(Clone)]
pub struct ArticlePipeline {
    client: reqwest::Client,
    extractor: Arc<dyn TextExtractor>,
    tokenizer: Arc<dyn Tokenizer>,
    vocabulary: Arc<ChargedVocabulary>,
    fetch_timeout: Duration,
    tokenize_timeout: Duration,
}

impl ArticlePipeline {
    pub fn new(
        client: reqwest::Client,
        extractor: Arc<dyn TextExtractor>,
        tokenizer: Arc<dyn Tokenizer>,
        vocabulary: Arc<ChargedVocabulary>,
        fetch_timeout: Duration,
        tokenize_timeout: Duration,
    ) -> Self {
        Self {
            client,
            extractor,
            tokenizer,
            vocabulary,
            fetch_timeout,
            tokenize_timeout,
        }
    }

    /// Process one article to a terminal result. Infallible by contract:
    /// every stage failure is classified here and returned as data.
    pub async fn process(&self, url: &str) -> ArticleResult {
        match self.run_stages(url).await {
            Ok((score, words_count)) => {
                info!(url, score, words_count, "Article scored");
                ArticleResult::ok(url, score, words_count)
            }
            Err(e) => {
                warn!(url, status = %e.status(), error = %e, "Article failed");
                ArticleResult::failed(url, e.status())
            }
        }
    }

    async fn run_stages(&self, url: &str) -> StageResult<(f64, usize)> {
        // Fetch, under its own deadline.
        let html = with_deadline(self.fetch_timeout, fetch_page(&self.client, url)).await?;

        // Extract is in-process and fast; no deadline.
        let text = self.extractor.extract(&html)?;

        // Tokenize is CPU-bound: run it on the blocking pool so it cannot
        // stall sibling tasks, under a deadline measured from this point.
        let started = Instant::now();
        let tokenizer = self.tokenizer.clone();
        let handle = tokio::task::spawn_blocking(move || tokenizer.tokenize(&text));
        let tokens = with_deadline(self.tokenize_timeout, async {
            match handle.await {
                Ok(tokens) => Ok(tokens),
                // A panic in the tokenizer is a programming defect; re-raise it.
                Err(e) => std::panic::resume_unwind(e.into_panic()),
            }
        })
        .await?;
        info!(
            url,
            tokens = tokens.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Tokenization finished"
        );

        // Score is pure and cannot fail.
        Ok(jaundice_rate(&tokens, &self.vocabulary))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn deadline_converts_to_timeout() {
        let work = async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok(())
        };
        let result = with_deadline(Duration::from_millis(10), work).await;
        assert!(matches!(result, Err(StageError::Timeout)));
    }

    #[tokio::test]
    async fn fast_work_passes_through() {
        let result = with_deadline(Duration::from_secs(5), async { Ok(42) }).await;
        assert_eq!(result.unwrap(), 42);
    }

    #[tokio::test]
    async fn inner_failure_is_not_a_timeout() {
        let work = async { Err::<(), _>(StageError::NotAnArticle) };
        let result = with_deadline(Duration::from_secs(5), work).await;
        assert!(matches!(result, Err(StageError::NotAnArticle)));
    }
}
