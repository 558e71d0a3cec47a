//! SpaceX API client implementation

use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};
use reqwest::{Client as HttpClient, StatusCode};
use serde::de::DeserializeOwned;

use super::api::{FleetApi, LaunchesApi};
use super::models::{CrewMember, Launch, LaunchQueryOptions, Rocket};
use crate::error::{ApiError, Result};

/// SpaceX API base URL
pub const API_BASE_URL: &str = "https://api.spacexdata.com/v4";

/// Request timeout for the public API
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Rate limit: the public API allows 50 requests/second; stay well under it
const RATE_LIMIT_PER_SECOND: u32 = 10;

/// SpaceX API client
pub struct SpaceXClient {
    http: HttpClient,
    base_url: String,
    rate_limiter: Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>,
}

impl SpaceXClient {
    /// Create a client against the public API
    pub fn new() -> Result<Self> {
        Self::with_base_url(API_BASE_URL)
    }

    /// Create a client against a custom host (used by tests and `--api-host`)
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let quota = Quota::per_second(NonZeroU32::new(RATE_LIMIT_PER_SECOND).unwrap());
        let rate_limiter = Arc::new(RateLimiter::direct(quota));

        Ok(Self {
            http,
            base_url: base_url.into(),
            rate_limiter,
        })
    }

    /// Make a GET request and deserialize the response
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        self.rate_limiter.until_ready().await;

        let url = format!("{}{}", self.base_url, path);
        log::debug!("GET {}", url);

        let mut request = self.http.get(&url);
        if !query.is_empty() {
            request = request.query(query);
        }

        let response = request.send().await.map_err(ApiError::from)?;

        let status = response.status();
        match status {
            StatusCode::OK => {
                let data = response.json::<T>().await.map_err(|e| {
                    ApiError::InvalidResponse(format!("Failed to parse response: {}", e))
                })?;
                Ok(data)
            }
            StatusCode::NOT_FOUND => {
                let error_msg = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Resource not found".to_string());
                Err(ApiError::NotFound(error_msg).into())
            }
            StatusCode::TOO_MANY_REQUESTS => {
                let retry_after = response
                    .headers()
                    .get("retry-after")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.parse::<u64>().ok())
                    .unwrap_or(60);
                Err(ApiError::RateLimit(Duration::from_secs(retry_after)).into())
            }
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                let error_msg = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Bad request".to_string());
                Err(ApiError::BadRequest(error_msg).into())
            }
            status if status.is_server_error() => {
                let error_msg = response
                    .text()
                    .await
                    .unwrap_or_else(|_| format!("Server error: {}", status));
                Err(ApiError::ServerError(error_msg).into())
            }
            _ => {
                let error_msg = format!("Unexpected status code: {}", status);
                Err(ApiError::InvalidResponse(error_msg).into())
            }
        }
    }
}

fn limit_query(limit: Option<usize>) -> Vec<(&'static str, String)> {
    match limit {
        Some(limit) => vec![("limit", limit.to_string())],
        None => vec![],
    }
}

#[async_trait]
impl LaunchesApi for SpaceXClient {
    async fn all_launches(&self, options: &LaunchQueryOptions) -> Result<Vec<Launch>> {
        let mut launches: Vec<Launch> = self.get_json("/launches", &options.to_query()).await?;

        // The v4 GET endpoints ignore limit/offset params, so apply them here
        if let Some(offset) = options.offset {
            launches = launches.into_iter().skip(offset).collect();
        }
        if let Some(limit) = options.limit {
            launches.truncate(limit);
        }
        Ok(launches)
    }

    async fn upcoming_launches(&self, limit: Option<usize>) -> Result<Vec<Launch>> {
        let mut launches: Vec<Launch> = self
            .get_json("/launches/upcoming", &limit_query(limit))
            .await?;

        launches.sort_by_key(|l| l.date_utc);
        if let Some(limit) = limit {
            launches.truncate(limit);
        }
        Ok(launches)
    }

    async fn past_launches(&self, limit: Option<usize>) -> Result<Vec<Launch>> {
        let mut launches: Vec<Launch> =
            self.get_json("/launches/past", &limit_query(limit)).await?;

        launches.sort_by_key(|l| std::cmp::Reverse(l.date_utc));
        if let Some(limit) = limit {
            launches.truncate(limit);
        }
        Ok(launches)
    }

    async fn latest_launch(&self) -> Result<Launch> {
        self.get_json("/launches/latest", &[]).await
    }

    async fn next_launch(&self) -> Result<Launch> {
        self.get_json("/launches/next", &[]).await
    }

    async fn launch_by_id(&self, id: &str) -> Result<Launch> {
        self.get_json(&format!("/launches/{}", id), &[]).await
    }
}

#[async_trait]
impl FleetApi for SpaceXClient {
    async fn list_rockets(&self) -> Result<Vec<Rocket>> {
        self.get_json("/rockets", &[]).await
    }

    async fn rocket_by_id(&self, id: &str) -> Result<Rocket> {
        self.get_json(&format!("/rockets/{}", id), &[]).await
    }

    async fn list_crew(&self) -> Result<Vec<CrewMember>> {
        self.get_json("/crew", &[]).await
    }
}
