use crate::errors::FetchError;
use crate::models::MemeRecord;
use async_trait::async_trait;

/// Trait defining the single operation a meme front-end needs from the API layer.
#[async_trait]
pub trait MemeSource: Send + Sync + 'static { // Send+Sync+'static required for Arc<dyn>
    /// Fetches the current meme template list and returns one entry picked
    /// uniformly at random.
    ///
    /// Stateless: every call re-fetches and re-randomizes, and concurrent
    /// calls are independent. Dropping the returned future aborts the
    /// in-flight HTTP request.
    async fn fetch_random_meme(&self) -> Result<MemeRecord, FetchError>;
}
