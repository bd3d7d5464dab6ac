use thiserror::Error; // Use thiserror for cleaner error definitions

/// Failure modes of a single meme fetch.
///
/// All three are recoverable and returned as values; the client never
/// panics, retries, or logs on its own. The caller decides whether the
/// right reaction is "try again" or "nothing to show".
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("network failure while fetching memes: {0}")]
    Network(#[source] reqwest::Error),

    #[error("invalid response from meme API: {0}")]
    InvalidResponse(String),

    #[error("no memes available")]
    NoMemesAvailable,
}
