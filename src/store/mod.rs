//! In-process resource store and refresh orchestration
//!
//! One cache entry per launch resource kind, plus the locally authored
//! custom missions. Consumers read snapshots through accessor methods; all
//! entry mutations flow through the fetch orchestration in [`orchestrator`].

mod cell;
mod entry;
mod missions;
mod orchestrator;

use std::time::Duration;

use tokio::sync::Mutex;

use crate::client::models::Launch;

pub use cell::ResourceCell;
pub use entry::{FetchOutcome, ResourceEntry};
pub use missions::{CustomMission, MissionBook, MissionPatch, MissionRecord};
pub use orchestrator::{LaunchService, RefreshOptions, RefreshOutcome};

/// One independently cached category of launch data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    All,
    Upcoming,
    Past,
    Latest,
    Next,
    ById,
}

impl ResourceKind {
    /// All kinds, in display order
    pub const ALL_KINDS: [ResourceKind; 6] = [
        ResourceKind::All,
        ResourceKind::Upcoming,
        ResourceKind::Past,
        ResourceKind::Latest,
        ResourceKind::Next,
        ResourceKind::ById,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::All => "all",
            ResourceKind::Upcoming => "upcoming",
            ResourceKind::Past => "past",
            ResourceKind::Latest => "latest",
            ResourceKind::Next => "next",
            ResourceKind::ById => "selected",
        }
    }
}

/// Cache configuration shared by every resource kind
#[derive(Debug, Clone, Copy)]
pub struct CacheConfig {
    /// Fixed window after which an entry is considered stale
    pub timeout: Duration,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(5 * 60),
        }
    }
}

/// Process-wide cache of launch data, one entry per resource kind
#[derive(Default)]
pub struct LaunchStore {
    all: ResourceCell<Vec<Launch>>,
    upcoming: ResourceCell<Vec<Launch>>,
    past: ResourceCell<Vec<Launch>>,
    latest: ResourceCell<Launch>,
    next: ResourceCell<Launch>,
    selected: ResourceCell<Launch>,
    missions: Mutex<Vec<CustomMission>>,
}

impl LaunchStore {
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Entry snapshots
    // ========================================================================

    pub async fn all(&self) -> ResourceEntry<Vec<Launch>> {
        self.all.snapshot().await
    }

    pub async fn upcoming(&self) -> ResourceEntry<Vec<Launch>> {
        self.upcoming.snapshot().await
    }

    pub async fn past(&self) -> ResourceEntry<Vec<Launch>> {
        self.past.snapshot().await
    }

    pub async fn latest(&self) -> ResourceEntry<Launch> {
        self.latest.snapshot().await
    }

    pub async fn next(&self) -> ResourceEntry<Launch> {
        self.next.snapshot().await
    }

    /// The currently selected launch (the by-id entry)
    pub async fn selected(&self) -> ResourceEntry<Launch> {
        self.selected.snapshot().await
    }

    // ========================================================================
    // Derived selectors
    // ========================================================================

    pub async fn has_any_loading(&self) -> bool {
        self.all.loading().await
            || self.upcoming.loading().await
            || self.past.loading().await
            || self.latest.loading().await
            || self.next.loading().await
            || self.selected.loading().await
    }

    pub async fn has_any_error(&self) -> bool {
        !self.errors().await.is_empty()
    }

    /// Recorded errors per kind, in display order
    pub async fn errors(&self) -> Vec<(ResourceKind, String)> {
        let mut errors = Vec::new();
        for kind in ResourceKind::ALL_KINDS {
            if let Some(error) = self.error_of(kind).await {
                errors.push((kind, error));
            }
        }
        errors
    }

    async fn error_of(&self, kind: ResourceKind) -> Option<String> {
        match kind {
            ResourceKind::All => self.all.error().await,
            ResourceKind::Upcoming => self.upcoming.error().await,
            ResourceKind::Past => self.past.error().await,
            ResourceKind::Latest => self.latest.error().await,
            ResourceKind::Next => self.next.error().await,
            ResourceKind::ById => self.selected.error().await,
        }
    }

    /// Whether one kind's entry is due for a refetch
    pub async fn is_stale(&self, kind: ResourceKind, config: &CacheConfig) -> bool {
        match kind {
            ResourceKind::All => self.all.is_stale(config.timeout).await,
            ResourceKind::Upcoming => self.upcoming.is_stale(config.timeout).await,
            ResourceKind::Past => self.past.is_stale(config.timeout).await,
            ResourceKind::Latest => self.latest.is_stale(config.timeout).await,
            ResourceKind::Next => self.next.is_stale(config.timeout).await,
            ResourceKind::ById => self.selected.is_stale(config.timeout).await,
        }
    }

    /// Clear one kind's error; cached data is untouched
    pub async fn clear_error(&self, kind: ResourceKind) {
        match kind {
            ResourceKind::All => self.all.clear_error().await,
            ResourceKind::Upcoming => self.upcoming.clear_error().await,
            ResourceKind::Past => self.past.clear_error().await,
            ResourceKind::Latest => self.latest.clear_error().await,
            ResourceKind::Next => self.next.clear_error().await,
            ResourceKind::ById => self.selected.clear_error().await,
        }
    }

    /// Clear every kind's error
    pub async fn clear_errors(&self) {
        for kind in ResourceKind::ALL_KINDS {
            self.clear_error(kind).await;
        }
    }

    // ========================================================================
    // Custom missions
    // ========================================================================

    pub async fn missions(&self) -> Vec<CustomMission> {
        self.missions.lock().await.clone()
    }

    /// Replace the mission list (used when loading the persisted book)
    pub async fn set_missions(&self, missions: Vec<CustomMission>) {
        *self.missions.lock().await = missions;
    }

    pub async fn add_mission(&self, mission: CustomMission) {
        self.missions.lock().await.push(mission);
    }

    /// Remove a mission by ID; returns whether one was removed
    pub async fn remove_mission(&self, id: &str) -> bool {
        let mut missions = self.missions.lock().await;
        let before = missions.len();
        missions.retain(|m| m.id != id);
        missions.len() != before
    }

    /// Apply a partial update to a mission; returns whether it was found
    pub async fn update_mission(&self, id: &str, patch: &MissionPatch) -> bool {
        let mut missions = self.missions.lock().await;
        match missions.iter_mut().find(|m| m.id == id) {
            Some(mission) => {
                patch.apply(mission);
                true
            }
            None => false,
        }
    }

    // ========================================================================
    // Combined views (API data + custom missions)
    // ========================================================================

    /// Upcoming launches merged with upcoming custom missions, soonest first
    pub async fn combined_upcoming(&self) -> Vec<MissionRecord> {
        let launches = self.upcoming.snapshot().await.data.unwrap_or_default();
        let mut records = self.merge(launches, true).await;
        records.sort_by(|a, b| {
            a.date_utc()
                .cmp(&b.date_utc())
                .then_with(|| a.name().cmp(b.name()))
        });
        records
    }

    /// Past launches merged with past custom missions, most recent first
    pub async fn combined_past(&self) -> Vec<MissionRecord> {
        let launches = self.past.snapshot().await.data.unwrap_or_default();
        let mut records = self.merge(launches, false).await;
        records.sort_by(|a, b| {
            b.date_utc()
                .cmp(&a.date_utc())
                .then_with(|| a.name().cmp(b.name()))
        });
        records
    }

    /// The full launch list merged with every custom mission
    pub async fn combined_all(&self) -> Vec<MissionRecord> {
        let launches = self.all.snapshot().await.data.unwrap_or_default();
        let mut records: Vec<MissionRecord> =
            launches.into_iter().map(MissionRecord::Launch).collect();
        records.extend(
            self.missions()
                .await
                .into_iter()
                .map(MissionRecord::Custom),
        );
        records.sort_by(|a, b| {
            b.date_utc()
                .cmp(&a.date_utc())
                .then_with(|| a.name().cmp(b.name()))
        });
        records
    }

    async fn merge(&self, launches: Vec<Launch>, upcoming: bool) -> Vec<MissionRecord> {
        let mut records: Vec<MissionRecord> =
            launches.into_iter().map(MissionRecord::Launch).collect();
        records.extend(
            self.missions()
                .await
                .into_iter()
                .filter(|m| m.upcoming == upcoming)
                .map(MissionRecord::Custom),
        );
        records
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::fixtures;
    use chrono::Utc;

    fn custom(name: &str, upcoming: bool) -> CustomMission {
        CustomMission::new(
            name.to_string(),
            upcoming,
            Utc::now(),
            "Falcon 9".to_string(),
            None,
        )
    }

    #[tokio::test]
    async fn test_new_store_is_empty_and_stale() {
        let store = LaunchStore::new();
        let config = CacheConfig::default();

        assert!(store.all().await.data.is_none());
        assert!(!store.has_any_loading().await);
        assert!(!store.has_any_error().await);
        for kind in ResourceKind::ALL_KINDS {
            assert!(store.is_stale(kind, &config).await, "{:?}", kind);
        }
    }

    #[tokio::test]
    async fn test_clear_error_is_per_kind() {
        let store = LaunchStore::new();
        store.upcoming.set_error("offline").await;
        store.past.set_error("offline").await;

        store.clear_error(ResourceKind::Upcoming).await;

        let errors = store.errors().await;
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].0, ResourceKind::Past);

        store.clear_errors().await;
        assert!(!store.has_any_error().await);
    }

    #[tokio::test]
    async fn test_mission_crud() {
        let store = LaunchStore::new();
        let mission = custom("Mars Demo", true);
        let id = mission.id.clone();

        store.add_mission(mission).await;
        assert_eq!(store.missions().await.len(), 1);

        let patch = MissionPatch {
            name: Some("Mars Demo II".to_string()),
            ..Default::default()
        };
        assert!(store.update_mission(&id, &patch).await);
        assert!(!store.update_mission("nope", &patch).await);
        assert_eq!(store.missions().await[0].name, "Mars Demo II");

        assert!(store.remove_mission(&id).await);
        assert!(!store.remove_mission(&id).await);
        assert!(store.missions().await.is_empty());
    }

    #[tokio::test]
    async fn test_combined_views_split_missions_by_upcoming() {
        let store = LaunchStore::new();
        store
            .upcoming
            .seed(vec![fixtures::upcoming_launch("u1", "Starlink 99")])
            .await;
        store
            .past
            .seed(vec![fixtures::past_launch("p1", "CRS-1", true)])
            .await;
        store.add_mission(custom("My Future Mission", true)).await;
        store.add_mission(custom("My Flown Mission", false)).await;

        let upcoming = store.combined_upcoming().await;
        assert_eq!(upcoming.len(), 2);
        assert!(upcoming.iter().any(|r| r.name() == "My Future Mission"));
        assert!(upcoming.iter().all(|r| r.is_upcoming()));

        let past = store.combined_past().await;
        assert_eq!(past.len(), 2);
        assert!(past.iter().any(|r| r.is_custom()));
        assert!(past.iter().all(|r| !r.is_upcoming()));
    }

    #[tokio::test]
    async fn test_combined_all_includes_every_mission() {
        let store = LaunchStore::new();
        store
            .all
            .seed(vec![fixtures::past_launch("p1", "CRS-1", true)])
            .await;
        store.add_mission(custom("Extra", true)).await;

        let all = store.combined_all().await;
        assert_eq!(all.len(), 2);
    }
}
