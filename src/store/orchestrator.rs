//! Per-kind fetch operations and the aggregate refresh flows
//!
//! [`LaunchService`] owns the API client and the resource store, and is the
//! only path through which store entries change. Each per-kind operation runs
//! the guarded fetch in [`super::cell`]; the aggregate flows fan several of
//! them out concurrently, settle every branch, and report a tally instead of
//! failing on the first error.

use serde::Serialize;

use super::entry::FetchOutcome;
use super::{CacheConfig, LaunchStore};
use crate::client::SpaceXApi;
use crate::client::models::{CrewMember, Launch, LaunchQueryOptions, Rocket};
use crate::error::{Error, Result};

/// Upcoming/past list size used by [`LaunchService::force_refresh_all`]
const FORCE_REFRESH_LIMIT: usize = 10;

/// Options for the dashboard refresh fan-out
#[derive(Debug, Clone)]
pub struct RefreshOptions {
    pub upcoming_limit: usize,
    pub past_limit: usize,
}

impl Default for RefreshOptions {
    fn default() -> Self {
        Self {
            upcoming_limit: 5,
            past_limit: 5,
        }
    }
}

/// Tally of one aggregate refresh
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RefreshOutcome {
    pub succeeded: usize,
    pub total: usize,
    pub failed: usize,
}

impl RefreshOutcome {
    fn from_results(results: &[bool]) -> Self {
        let succeeded = results.iter().filter(|ok| **ok).count();
        Self {
            succeeded,
            total: results.len(),
            failed: results.len() - succeeded,
        }
    }

    pub fn all_succeeded(&self) -> bool {
        self.failed == 0
    }
}

/// Launch data service: API client + resource store + cache policy
pub struct LaunchService<C> {
    client: C,
    store: LaunchStore,
    config: CacheConfig,
}

impl<C> LaunchService<C> {
    pub fn new(client: C, config: CacheConfig) -> Self {
        Self {
            client,
            store: LaunchStore::new(),
            config,
        }
    }

    pub fn store(&self) -> &LaunchStore {
        &self.store
    }

    pub fn cache_config(&self) -> CacheConfig {
        self.config
    }
}

impl<C: SpaceXApi> LaunchService<C> {
    /// Fetch the full launch list into the store
    pub async fn fetch_all(
        &self,
        options: &LaunchQueryOptions,
        force: bool,
    ) -> Result<FetchOutcome<Vec<Launch>>> {
        self.store
            .all
            .fetch_with(self.config.timeout, force, || {
                self.client.all_launches(options)
            })
            .await
    }

    /// Fetch upcoming launches into the store
    pub async fn fetch_upcoming(
        &self,
        limit: usize,
        force: bool,
    ) -> Result<FetchOutcome<Vec<Launch>>> {
        self.store
            .upcoming
            .fetch_with(self.config.timeout, force, || {
                self.client.upcoming_launches(Some(limit))
            })
            .await
    }

    /// Fetch past launches into the store
    pub async fn fetch_past(
        &self,
        limit: usize,
        force: bool,
    ) -> Result<FetchOutcome<Vec<Launch>>> {
        self.store
            .past
            .fetch_with(self.config.timeout, force, || {
                self.client.past_launches(Some(limit))
            })
            .await
    }

    /// Fetch the most recent launch into the store
    pub async fn fetch_latest(&self, force: bool) -> Result<FetchOutcome<Launch>> {
        self.store
            .latest
            .fetch_with(self.config.timeout, force, || self.client.latest_launch())
            .await
    }

    /// Fetch the next scheduled launch into the store
    pub async fn fetch_next(&self, force: bool) -> Result<FetchOutcome<Launch>> {
        self.store
            .next
            .fetch_with(self.config.timeout, force, || self.client.next_launch())
            .await
    }

    /// Fetch one launch by ID and select it.
    ///
    /// Declines as a cache hit when the requested ID is already selected;
    /// that check replaces the age-based staleness guard for this kind, so a
    /// different ID always refetches. An empty ID is caller misuse and is
    /// rejected before any store transition.
    pub async fn fetch_by_id(&self, id: &str) -> Result<FetchOutcome<Launch>> {
        if id.is_empty() {
            return Err(Error::InvalidArgument(
                "launch id must not be empty".to_string(),
            ));
        }

        {
            let entry = self.store.selected.snapshot().await;
            if entry.loading {
                return Ok(FetchOutcome::InFlight(entry.data));
            }
            if let Some(selected) = entry.data {
                if selected.id == id {
                    log::debug!("Cache hit: launch {} already selected", id);
                    return Ok(FetchOutcome::CacheHit(selected));
                }
            }
        }

        self.store
            .selected
            .fetch_with(self.config.timeout, true, || self.client.launch_by_id(id))
            .await
    }

    /// List rockets. Fleet data stays outside the launch store, so this is
    /// an uncached pass-through.
    pub async fn rockets(&self) -> Result<Vec<Rocket>> {
        self.client.list_rockets().await
    }

    /// Look up one rocket; uncached pass-through.
    pub async fn rocket_by_id(&self, id: &str) -> Result<Rocket> {
        self.client.rocket_by_id(id).await
    }

    /// List crew members; uncached pass-through.
    pub async fn crew(&self) -> Result<Vec<CrewMember>> {
        self.client.list_crew().await
    }

    /// Refresh the four dashboard resources concurrently.
    ///
    /// Every branch settles; an individual failure is recorded on its entry
    /// and tallied, never escalated. Entries that are still fresh decline
    /// their fetch and count as succeeded.
    pub async fn refresh_dashboard(&self, options: &RefreshOptions) -> RefreshOutcome {
        log::debug!(
            "Refreshing dashboard (upcoming {}, past {})",
            options.upcoming_limit,
            options.past_limit
        );

        let (upcoming, past, latest, next) = futures::join!(
            self.fetch_upcoming(options.upcoming_limit, false),
            self.fetch_past(options.past_limit, false),
            self.fetch_latest(false),
            self.fetch_next(false),
        );

        let outcome = RefreshOutcome::from_results(&[
            upcoming.is_ok(),
            past.is_ok(),
            latest.is_ok(),
            next.is_ok(),
        ]);
        if outcome.failed > 0 {
            log::warn!(
                "{} of {} dashboard refreshes failed",
                outcome.failed,
                outcome.total
            );
        }
        outcome
    }

    /// Refetch every resource kind, bypassing the staleness check.
    ///
    /// The bypass applies to staleness only; a kind with a fetch already in
    /// flight still declines.
    pub async fn force_refresh_all(&self) -> RefreshOutcome {
        log::debug!("Force refreshing all resources");
        let options = LaunchQueryOptions::default();

        let (all, upcoming, past, latest, next) = futures::join!(
            self.fetch_all(&options, true),
            self.fetch_upcoming(FORCE_REFRESH_LIMIT, true),
            self.fetch_past(FORCE_REFRESH_LIMIT, true),
            self.fetch_latest(true),
            self.fetch_next(true),
        );

        let outcome = RefreshOutcome::from_results(&[
            all.is_ok(),
            upcoming.is_ok(),
            past.is_ok(),
            latest.is_ok(),
            next.is_ok(),
        ]);
        if outcome.failed > 0 {
            log::warn!(
                "{} of {} forced refreshes failed",
                outcome.failed,
                outcome.total
            );
        }
        outcome
    }
}
