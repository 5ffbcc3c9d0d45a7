pub mod error;
pub mod extract;
pub mod fetch;
pub mod orchestrator;
pub mod pipeline;
pub mod score;
pub mod tokenize;

pub use error::StageError;
pub use extract::{ArticleExtractor, TextExtractor};
pub use orchestrator::BatchOrchestrator;
pub use pipeline::ArticlePipeline;
pub use tokenize::{Tokenizer, WordTokenizer};
