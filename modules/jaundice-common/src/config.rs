use std::env;
use std::time::Duration;

/// Application configuration loaded from environment variables.
/// Every knob has a default, so a bare environment runs the service.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the charged-words vocabulary file.
    pub charged_words_path: String,

    /// Deadline for the fetch stage of each article.
    pub fetch_timeout: Duration,

    /// Deadline for the tokenize stage of each article.
    pub tokenize_timeout: Duration,

    /// Maximum number of URLs accepted in one request.
    pub max_urls_per_request: usize,

    // Web server
    pub web_host: String,
    pub web_port: u16,
}

impl Config {
    /// Load configuration from environment variables.
    /// Panics with a clear message if a variable is present but malformed.
    pub fn from_env() -> Self {
        Self {
            charged_words_path: env::var("CHARGED_WORDS_PATH")
                .unwrap_or_else(|_| "data/charged_words.txt".to_string()),
            fetch_timeout: Duration::from_millis(env_millis("FETCH_TIMEOUT_MS", 1500)),
            tokenize_timeout: Duration::from_millis(env_millis("TOKENIZE_TIMEOUT_MS", 3000)),
            max_urls_per_request: env::var("MAX_URLS_PER_REQUEST")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .expect("MAX_URLS_PER_REQUEST must be a number"),
            web_host: env::var("WEB_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            web_port: env::var("WEB_PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .expect("WEB_PORT must be a number"),
        }
    }
}

fn env_millis(key: &str, default: u64) -> u64 {
    parse_millis(env::var(key).ok(), key, default)
}

fn parse_millis(raw: Option<String>, key: &str, default: u64) -> u64 {
    match raw {
        None => default,
        Some(value) => value
            .parse()
            .unwrap_or_else(|_| panic!("{key} must be a number of milliseconds")),
    }
}
