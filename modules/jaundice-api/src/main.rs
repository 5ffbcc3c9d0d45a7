use std::sync::Arc;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use jaundice_api::{router, AppState};
use jaundice_common::{ChargedVocabulary, Config};
use jaundice_pipeline::{ArticleExtractor, ArticlePipeline, BatchOrchestrator, WordTokenizer};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("jaundice=info".parse()?))
        .init();

    let config = Config::from_env();

    let vocabulary = Arc::new(ChargedVocabulary::from_path(&config.charged_words_path)?);
    let client = reqwest::Client::new();
    let pipeline = ArticlePipeline::new(
        client,
        Arc::new(ArticleExtractor::new()),
        Arc::new(WordTokenizer),
        vocabulary,
        config.fetch_timeout,
        config.tokenize_timeout,
    );

    let state = Arc::new(AppState {
        orchestrator: BatchOrchestrator::new(pipeline),
        max_urls: config.max_urls_per_request,
    });

    let app = router(state);

    let addr = format!("{}:{}", config.web_host, config.web_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(addr = %addr, "jaundice-api listening");
    axum::serve(listener, app).await?;

    Ok(())
}
