pub mod config;
pub mod error;
pub mod types;
pub mod vocabulary;

pub use config::Config;
pub use error::JaundiceError;
pub use types::*;
pub use vocabulary::ChargedVocabulary;
