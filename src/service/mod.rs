//! Word service
//!
//! The game depends on two external lookups: the word of the day and a
//! dictionary check for guesses. [`WordService`] is the seam; the HTTP
//! client talks to the public word API, the word list serves offline play
//! and tests.

mod error;
mod http;
mod word_list;

pub use error::{ServiceError, ServiceErrorKind};
pub use http::{DEFAULT_API_URL, HttpWordService};
pub use word_list::WordListService;

/// Source of target words and dictionary checks
#[async_trait::async_trait]
pub trait WordService: Send + Sync {
    /// Fetch today's answer. The word is returned as served; callers normalize it.
    async fn word_of_the_day(&self) -> Result<String, ServiceError>;

    /// Whether `word` is an accepted dictionary entry
    ///
    /// `Ok(false)` is a normal answer; `Err` means the check itself failed.
    async fn validate_word(&self, word: &str) -> Result<bool, ServiceError>;
}
