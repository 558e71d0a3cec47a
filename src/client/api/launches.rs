//! Launch API trait

use async_trait::async_trait;

use crate::client::models::{Launch, LaunchQueryOptions};
use crate::error::Result;

/// Launch operations of the SpaceX API
///
/// Each method maps to one `/launches` endpoint. Implementations reject with
/// an [`ApiError`](crate::error::ApiError) on transport or data-source
/// failure; they never cache (caching is the resource store's job).
#[async_trait]
pub trait LaunchesApi: Send + Sync {
    /// List every launch, optionally limited and offset
    async fn all_launches(&self, options: &LaunchQueryOptions) -> Result<Vec<Launch>>;

    /// List upcoming launches, soonest first
    async fn upcoming_launches(&self, limit: Option<usize>) -> Result<Vec<Launch>>;

    /// List past launches, most recent first
    async fn past_launches(&self, limit: Option<usize>) -> Result<Vec<Launch>>;

    /// The most recently flown launch
    async fn latest_launch(&self) -> Result<Launch>;

    /// The next scheduled launch
    async fn next_launch(&self) -> Result<Launch>;

    /// Look up one launch by ID
    async fn launch_by_id(&self, id: &str) -> Result<Launch>;
}
