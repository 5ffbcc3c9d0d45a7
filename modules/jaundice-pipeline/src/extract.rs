use scraper::{Html, Selector};

use crate::error::{StageError, StageResult};

/// Converts raw page markup into plain article text.
///
/// Implementations signal `StageError::NotAnArticle` when the page does not
/// match a known article template. Must be safe to call from many pipeline
/// tasks at once.
pub trait TextExtractor: Send + Sync {
    fn extract(&self, html: &str) -> StageResult<String>;
}

/// Selector-table extractor: tries each selector in order and returns the
/// text of the first one that matches a non-empty article body.
pub struct ArticleExtractor {
    selectors: Vec<Selector>,
}

/// Places an article body is found on the sites we recognize.
const ARTICLE_SELECTORS: &[&str] = &[
    "article",
    "[itemprop=\"articleBody\"]",
    "div.article__text",
    "div.article-body",
    "div.post-content",
];

impl ArticleExtractor {
    pub fn new() -> Self {
        let selectors = ARTICLE_SELECTORS
            .iter()
            .map(|s| Selector::parse(s).expect("valid selector"))
            .collect();
        Self { selectors }
    }
}

impl Default for ArticleExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl TextExtractor for ArticleExtractor {
    fn extract(&self, html: &str) -> StageResult<String> {
        let document = Html::parse_document(html);

        for selector in &self.selectors {
            let mut text = String::new();
            for element in document.select(selector) {
                for chunk in element.text() {
                    let chunk = chunk.trim();
                    if chunk.is_empty() {
                        continue;
                    }
                    if !text.is_empty() {
                        text.push(' ');
                    }
                    text.push_str(chunk);
                }
            }
            if !text.is_empty() {
                return Ok(text);
            }
        }

        Err(StageError::NotAnArticle)
    }
}
