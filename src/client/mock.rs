//! Mock SpaceX API client for testing
//!
//! Provides a mock implementation of the API traits for unit testing
//! without making real API calls.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::api::{FleetApi, LaunchesApi};
use super::models::{CrewMember, Launch, LaunchQueryOptions, Rocket};
use crate::error::{ApiError, Result};

/// Mock API client for testing.
///
/// Configure responses via builder methods, then use in tests. The struct is
/// cheaply cloneable and clones share state, so a handle kept outside the
/// code under test can inject errors and read call counts.
///
/// # Example
/// ```ignore
/// let mock = MockSpaceXClient::new()
///     .with_latest(fixtures::past_launch("l1", "Starlink", true)).await;
///
/// let launch = mock.latest_launch().await?;
/// assert_eq!(mock.call_counts().await.latest_launch, 1);
/// ```
#[derive(Clone, Default)]
pub struct MockSpaceXClient {
    /// Launches returned from all_launches and searched by launch_by_id
    launches: Arc<Mutex<Vec<Launch>>>,
    /// Launches returned from upcoming_launches
    upcoming: Arc<Mutex<Vec<Launch>>>,
    /// Launches returned from past_launches
    past: Arc<Mutex<Vec<Launch>>>,
    /// Launch returned from latest_launch
    latest: Arc<Mutex<Option<Launch>>>,
    /// Launch returned from next_launch
    next: Arc<Mutex<Option<Launch>>>,
    /// Rockets returned from list_rockets / rocket_by_id
    rockets: Arc<Mutex<Vec<Rocket>>>,
    /// Crew returned from list_crew
    crew: Arc<Mutex<Vec<CrewMember>>>,
    /// One-shot errors keyed by endpoint name, consumed on first use
    errors: Arc<Mutex<HashMap<&'static str, ApiError>>>,
    /// Track number of calls for verification
    call_count: Arc<Mutex<CallCounts>>,
}

/// Tracks API call counts for test verification
#[derive(Default, Debug, Clone)]
pub struct CallCounts {
    pub all_launches: usize,
    pub upcoming_launches: usize,
    pub past_launches: usize,
    pub latest_launch: usize,
    pub next_launch: usize,
    pub launch_by_id: usize,
    pub list_rockets: usize,
    pub rocket_by_id: usize,
    pub list_crew: usize,
}

impl CallCounts {
    /// Get total number of API calls made.
    pub fn total(&self) -> usize {
        self.all_launches
            + self.upcoming_launches
            + self.past_launches
            + self.latest_launch
            + self.next_launch
            + self.launch_by_id
            + self.list_rockets
            + self.rocket_by_id
            + self.list_crew
    }
}

impl MockSpaceXClient {
    /// Create a new mock client with default (empty) responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure launches returned from all_launches / launch_by_id.
    pub async fn with_launches(self, launches: Vec<Launch>) -> Self {
        *self.launches.lock().await = launches;
        self
    }

    /// Configure launches returned from upcoming_launches.
    pub async fn with_upcoming(self, launches: Vec<Launch>) -> Self {
        *self.upcoming.lock().await = launches;
        self
    }

    /// Configure launches returned from past_launches.
    pub async fn with_past(self, launches: Vec<Launch>) -> Self {
        *self.past.lock().await = launches;
        self
    }

    /// Configure the launch returned from latest_launch.
    pub async fn with_latest(self, launch: Launch) -> Self {
        *self.latest.lock().await = Some(launch);
        self
    }

    /// Configure the launch returned from next_launch.
    pub async fn with_next(self, launch: Launch) -> Self {
        *self.next.lock().await = Some(launch);
        self
    }

    /// Configure rockets returned from list_rockets / rocket_by_id.
    pub async fn with_rockets(self, rockets: Vec<Rocket>) -> Self {
        *self.rockets.lock().await = rockets;
        self
    }

    /// Configure crew returned from list_crew.
    pub async fn with_crew(self, crew: Vec<CrewMember>) -> Self {
        *self.crew.lock().await = crew;
        self
    }

    /// Configure an error for one endpoint, consumed after one use.
    pub async fn with_error_for(self, endpoint: &'static str, error: ApiError) -> Self {
        self.errors.lock().await.insert(endpoint, error);
        self
    }

    /// Get the call counts for verification in tests.
    pub async fn call_counts(&self) -> CallCounts {
        self.call_count.lock().await.clone()
    }

    /// Consume a pending error for this endpoint, if any.
    async fn check_error(&self, endpoint: &'static str) -> Result<()> {
        let mut errors = self.errors.lock().await;
        if let Some(e) = errors.remove(endpoint) {
            return Err(e.into());
        }
        Ok(())
    }
}

#[async_trait]
impl LaunchesApi for MockSpaceXClient {
    async fn all_launches(&self, _options: &LaunchQueryOptions) -> Result<Vec<Launch>> {
        self.call_count.lock().await.all_launches += 1;
        self.check_error("all_launches").await?;

        Ok(self.launches.lock().await.clone())
    }

    async fn upcoming_launches(&self, _limit: Option<usize>) -> Result<Vec<Launch>> {
        self.call_count.lock().await.upcoming_launches += 1;
        self.check_error("upcoming_launches").await?;

        Ok(self.upcoming.lock().await.clone())
    }

    async fn past_launches(&self, _limit: Option<usize>) -> Result<Vec<Launch>> {
        self.call_count.lock().await.past_launches += 1;
        self.check_error("past_launches").await?;

        Ok(self.past.lock().await.clone())
    }

    async fn latest_launch(&self) -> Result<Launch> {
        self.call_count.lock().await.latest_launch += 1;
        self.check_error("latest_launch").await?;

        let latest = self.latest.lock().await;
        latest
            .clone()
            .ok_or_else(|| ApiError::NotFound("No latest launch configured".to_string()).into())
    }

    async fn next_launch(&self) -> Result<Launch> {
        self.call_count.lock().await.next_launch += 1;
        self.check_error("next_launch").await?;

        let next = self.next.lock().await;
        next.clone()
            .ok_or_else(|| ApiError::NotFound("No next launch configured".to_string()).into())
    }

    async fn launch_by_id(&self, id: &str) -> Result<Launch> {
        self.call_count.lock().await.launch_by_id += 1;
        self.check_error("launch_by_id").await?;

        let launches = self.launches.lock().await;
        launches
            .iter()
            .find(|l| l.id == id)
            .cloned()
            .ok_or_else(|| ApiError::NotFound(format!("Launch not found: {}", id)).into())
    }
}

#[async_trait]
impl FleetApi for MockSpaceXClient {
    async fn list_rockets(&self) -> Result<Vec<Rocket>> {
        self.call_count.lock().await.list_rockets += 1;
        self.check_error("list_rockets").await?;

        Ok(self.rockets.lock().await.clone())
    }

    async fn rocket_by_id(&self, id: &str) -> Result<Rocket> {
        self.call_count.lock().await.rocket_by_id += 1;
        self.check_error("rocket_by_id").await?;

        let rockets = self.rockets.lock().await;
        rockets
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or_else(|| ApiError::NotFound(format!("Rocket not found: {}", id)).into())
    }

    async fn list_crew(&self) -> Result<Vec<CrewMember>> {
        self.call_count.lock().await.list_crew += 1;
        self.check_error("list_crew").await?;

        Ok(self.crew.lock().await.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::fixtures;

    #[tokio::test]
    async fn test_mock_client_default_empty() {
        let mock = MockSpaceXClient::new();

        let launches = mock.all_launches(&LaunchQueryOptions::default()).await.unwrap();
        assert!(launches.is_empty());

        let crew = mock.list_crew().await.unwrap();
        assert!(crew.is_empty());
    }

    #[tokio::test]
    async fn test_mock_client_with_launches() {
        let mock = MockSpaceXClient::new()
            .with_launches(vec![
                fixtures::past_launch("l1", "CRS-1", true),
                fixtures::upcoming_launch("l2", "Starlink 99"),
            ])
            .await;

        let launches = mock.all_launches(&LaunchQueryOptions::default()).await.unwrap();
        assert_eq!(launches.len(), 2);
        assert_eq!(launches[0].id, "l1");

        let found = mock.launch_by_id("l2").await.unwrap();
        assert_eq!(found.name, "Starlink 99");
    }

    #[tokio::test]
    async fn test_mock_client_by_id_not_found() {
        let mock = MockSpaceXClient::new();

        let result = mock.launch_by_id("nope").await;
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("nope"));
    }

    #[tokio::test]
    async fn test_mock_client_error_consumed_after_one_use() {
        let mock = MockSpaceXClient::new()
            .with_error_for(
                "past_launches",
                ApiError::ServerError("boom".to_string()),
            )
            .await;

        assert!(mock.past_launches(None).await.is_err());
        // Error is consumed, next call succeeds
        assert!(mock.past_launches(None).await.is_ok());
        // Other endpoints are unaffected
        assert!(mock.upcoming_launches(None).await.is_ok());
    }

    #[tokio::test]
    async fn test_mock_client_call_counts() {
        let mock = MockSpaceXClient::new()
            .with_latest(fixtures::past_launch("l1", "Latest", true))
            .await;

        mock.latest_launch().await.unwrap();
        mock.latest_launch().await.unwrap();
        mock.upcoming_launches(Some(5)).await.unwrap();

        let counts = mock.call_counts().await;
        assert_eq!(counts.latest_launch, 2);
        assert_eq!(counts.upcoming_launches, 1);
        assert_eq!(counts.next_launch, 0);
        assert_eq!(counts.total(), 3);
    }

    #[tokio::test]
    async fn test_mock_client_clones_share_state() {
        let mock = MockSpaceXClient::new();
        let handle = mock.clone();

        mock.list_crew().await.unwrap();

        assert_eq!(handle.call_counts().await.list_crew, 1);
    }
}
