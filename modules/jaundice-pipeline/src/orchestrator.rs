use futures::stream::{self, StreamExt};
use tracing::info;

use jaundice_common::{ArticleResult, ProcessingStatus};

use crate::pipeline::ArticlePipeline;

/// Max pipelines in flight at once. Matches the request-size cap, so a
/// single batch always runs fully parallel.
const MAX_CONCURRENT_ARTICLES: usize = 10;

/// Fans one `ArticlePipeline` out per URL and joins all of them.
///
/// Wait-for-all, never fail-fast: classification happens inside each
/// pipeline task, so no article's failure can cancel a sibling or abort the
/// batch. Exactly one result per submitted URL, duplicates included;
/// completion order is arbitrary.
pub struct BatchOrchestrator {
    pipeline: ArticlePipeline,
}

impl BatchOrchestrator {
    pub fn new(pipeline: ArticlePipeline) -> Self {
        Self { pipeline }
    }

    pub async fn process_batch(&self, urls: &[String]) -> Vec<ArticleResult> {
        info!(urls = urls.len(), "Processing batch");

        let tasks: Vec<_> = urls.iter().map(|url| self.pipeline.process(url)).collect();
        let results: Vec<ArticleResult> = stream::iter(tasks)
            .buffer_unordered(MAX_CONCURRENT_ARTICLES)
            .collect()
            .await;

        let ok = results
            .iter()
            .filter(|r| r.status == ProcessingStatus::Ok)
            .count();
        info!(urls = urls.len(), ok, failed = results.len() - ok, "Batch complete");

        results
    }
}
