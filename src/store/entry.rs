//! Per-resource cache entries

use chrono::{DateTime, Utc};
use std::time::Duration;

/// Cached state for one resource kind
#[derive(Debug, Clone)]
pub struct ResourceEntry<T> {
    /// Last successfully fetched payload
    pub data: Option<T>,

    /// A fetch for this resource is in flight
    pub loading: bool,

    /// Last failure message; cleared when a fetch begins or succeeds
    pub error: Option<String>,

    /// Completion time of the last successful fetch
    pub last_fetch_at: Option<DateTime<Utc>>,
}

impl<T> Default for ResourceEntry<T> {
    fn default() -> Self {
        Self {
            data: None,
            loading: false,
            error: None,
            last_fetch_at: None,
        }
    }
}

impl<T> ResourceEntry<T> {
    /// Whether the entry is due for a refetch.
    ///
    /// Never-fetched entries are always stale; otherwise an entry goes stale
    /// once its age exceeds `timeout`. `force` bypasses the age check.
    pub fn is_stale(&self, timeout: Duration, force: bool) -> bool {
        if force {
            return true;
        }
        match self.last_fetch_at {
            None => true,
            Some(at) => match Utc::now().signed_duration_since(at).to_std() {
                Ok(age) => age > timeout,
                // A last fetch in the future means the clock moved backwards;
                // count the entry as fresh rather than refetching forever.
                Err(_) => false,
            },
        }
    }
}

/// Result of one orchestrated fetch
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome<T> {
    /// Fresh data was fetched from the data source
    Fetched(T),

    /// The cached entry was still valid; no request was made
    CacheHit(T),

    /// A fetch was already in flight; carries whatever is cached
    InFlight(Option<T>),
}

impl<T> FetchOutcome<T> {
    /// The payload carried by this outcome, if any
    pub fn into_data(self) -> Option<T> {
        match self {
            FetchOutcome::Fetched(data) | FetchOutcome::CacheHit(data) => Some(data),
            FetchOutcome::InFlight(data) => data,
        }
    }

    /// True when the data source was actually called
    pub fn was_fetched(&self) -> bool {
        matches!(self, FetchOutcome::Fetched(_))
    }
}
