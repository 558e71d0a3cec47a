//! Single-resource fetch orchestration
//!
//! A [`ResourceCell`] owns the cache entry for one resource kind and funnels
//! every mutation through three transition points: begin (guard + pending),
//! success, failure. The guard and the pending transition share one critical
//! section, so two concurrent callers can never both start a fetch for the
//! same kind.

use std::future::Future;
use std::time::Duration;

use chrono::Utc;
use tokio::sync::Mutex;

use super::entry::{FetchOutcome, ResourceEntry};
use crate::error::Result;

/// Cache entry for one resource kind, guarded by an async mutex
pub struct ResourceCell<T> {
    entry: Mutex<ResourceEntry<T>>,
}

impl<T> Default for ResourceCell<T> {
    fn default() -> Self {
        Self {
            entry: Mutex::new(ResourceEntry::default()),
        }
    }
}

/// Decision made by the guard before a fetch
enum FetchPlan<T> {
    Skip(FetchOutcome<T>),
    Proceed,
}

impl<T: Clone> ResourceCell<T> {
    /// Snapshot of the current entry
    pub async fn snapshot(&self) -> ResourceEntry<T> {
        self.entry.lock().await.clone()
    }

    pub async fn loading(&self) -> bool {
        self.entry.lock().await.loading
    }

    pub async fn error(&self) -> Option<String> {
        self.entry.lock().await.error.clone()
    }

    pub async fn is_stale(&self, timeout: Duration) -> bool {
        self.entry.lock().await.is_stale(timeout, false)
    }

    /// Drop the recorded error without touching cached data
    pub async fn clear_error(&self) {
        self.entry.lock().await.error = None;
    }

    /// Seed cached data directly, bypassing the fetch path
    #[cfg(test)]
    pub async fn seed(&self, data: T) {
        let mut entry = self.entry.lock().await;
        entry.data = Some(data);
        entry.last_fetch_at = Some(Utc::now());
    }

    #[cfg(test)]
    pub async fn set_loading(&self, loading: bool) {
        self.entry.lock().await.loading = loading;
    }

    #[cfg(test)]
    pub async fn set_error(&self, message: &str) {
        self.entry.lock().await.error = Some(message.to_string());
    }

    /// Guard check and pending transition, in one critical section.
    async fn begin(&self, timeout: Duration, force: bool) -> FetchPlan<T> {
        let mut entry = self.entry.lock().await;

        if entry.loading {
            return FetchPlan::Skip(FetchOutcome::InFlight(entry.data.clone()));
        }

        if !entry.is_stale(timeout, force) {
            if let Some(data) = entry.data.clone() {
                return FetchPlan::Skip(FetchOutcome::CacheHit(data));
            }
        }

        entry.loading = true;
        entry.error = None;
        FetchPlan::Proceed
    }

    async fn complete_ok(&self, data: T) {
        let mut entry = self.entry.lock().await;
        entry.loading = false;
        entry.error = None;
        entry.data = Some(data);
        entry.last_fetch_at = Some(Utc::now());
    }

    async fn complete_err(&self, message: String) {
        let mut entry = self.entry.lock().await;
        entry.loading = false;
        entry.error = Some(message);
    }

    /// Run one guarded fetch against this cell.
    ///
    /// Declines with a cache hit while the entry is fresh (unless `force`)
    /// and declines without any action while another fetch is in flight.
    /// A failure is recorded on the entry and re-raised; cached data and the
    /// fetch timestamp survive it.
    pub async fn fetch_with<F, Fut>(
        &self,
        timeout: Duration,
        force: bool,
        fetch: F,
    ) -> Result<FetchOutcome<T>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        match self.begin(timeout, force).await {
            FetchPlan::Skip(outcome) => Ok(outcome),
            FetchPlan::Proceed => match fetch().await {
                Ok(data) => {
                    self.complete_ok(data.clone()).await;
                    Ok(FetchOutcome::Fetched(data))
                }
                Err(err) => {
                    self.complete_err(err.to_string()).await;
                    Err(err)
                }
            },
        }
    }
}
