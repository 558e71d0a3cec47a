//! Locally authored custom missions
//!
//! Custom missions are dashboard annotations that live beside the API data:
//! they are merged into the displayed lists but never touch the fetch path.
//! The mission book persists them as YAML next to the config file.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::models::Launch;
use crate::error::{ConfigError, Result};

/// A locally authored mission record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomMission {
    /// Locally generated ID
    pub id: String,

    /// Mission name
    pub name: String,

    /// Mission is planned rather than flown
    pub upcoming: bool,

    /// Planned or flown launch time (UTC)
    pub date_utc: DateTime<Utc>,

    /// Rocket name (free text, not an API rocket ID)
    pub rocket: String,

    /// Optional description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,

    /// Marks the record as locally authored in serialized output
    #[serde(default = "default_custom")]
    pub custom: bool,
}

fn default_custom() -> bool {
    true
}

impl CustomMission {
    /// Create a mission with a generated ID
    pub fn new(
        name: String,
        upcoming: bool,
        date_utc: DateTime<Utc>,
        rocket: String,
        details: Option<String>,
    ) -> Self {
        Self {
            id: Utc::now().timestamp_millis().to_string(),
            name,
            upcoming,
            date_utc,
            rocket,
            details,
            custom: true,
        }
    }
}

/// Partial update applied to an existing mission
#[derive(Debug, Clone, Default)]
pub struct MissionPatch {
    pub name: Option<String>,
    pub upcoming: Option<bool>,
    pub date_utc: Option<DateTime<Utc>>,
    pub rocket: Option<String>,
    pub details: Option<String>,
}

impl MissionPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.upcoming.is_none()
            && self.date_utc.is_none()
            && self.rocket.is_none()
            && self.details.is_none()
    }

    pub(crate) fn apply(&self, mission: &mut CustomMission) {
        if let Some(ref name) = self.name {
            mission.name = name.clone();
        }
        if let Some(upcoming) = self.upcoming {
            mission.upcoming = upcoming;
        }
        if let Some(date_utc) = self.date_utc {
            mission.date_utc = date_utc;
        }
        if let Some(ref rocket) = self.rocket {
            mission.rocket = rocket.clone();
        }
        if let Some(ref details) = self.details {
            mission.details = Some(details.clone());
        }
    }
}

/// A displayed launch list item: API launch or local custom mission
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum MissionRecord {
    Launch(Launch),
    Custom(CustomMission),
}

impl MissionRecord {
    pub fn name(&self) -> &str {
        match self {
            MissionRecord::Launch(l) => &l.name,
            MissionRecord::Custom(m) => &m.name,
        }
    }

    pub fn is_upcoming(&self) -> bool {
        match self {
            MissionRecord::Launch(l) => l.upcoming,
            MissionRecord::Custom(m) => m.upcoming,
        }
    }

    pub fn date_utc(&self) -> DateTime<Utc> {
        match self {
            MissionRecord::Launch(l) => l.date_utc,
            MissionRecord::Custom(m) => m.date_utc,
        }
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, MissionRecord::Custom(_))
    }
}

/// YAML-persisted collection of custom missions
pub struct MissionBook {
    path: PathBuf,
}

impl MissionBook {
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load persisted missions; a missing file is an empty book
    pub fn load(&self) -> Result<Vec<CustomMission>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let contents = std::fs::read_to_string(&self.path)?;
        let missions = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;
        Ok(missions)
    }

    pub fn save(&self, missions: &[CustomMission]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = serde_yaml::to_string(missions)
            .map_err(|e| ConfigError::SaveError(e.to_string()))?;

        std::fs::write(&self.path, contents)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::fixtures;
    use tempfile::TempDir;

    fn mission(name: &str, upcoming: bool) -> CustomMission {
        CustomMission::new(
            name.to_string(),
            upcoming,
            Utc::now(),
            "Falcon 9".to_string(),
            None,
        )
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        let book = MissionBook::at(dir.path().join("missions.yaml"));
        assert!(book.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_and_reload_roundtrip() {
        let dir = TempDir::new().unwrap();
        let book = MissionBook::at(dir.path().join("missions.yaml"));

        let missions = vec![mission("Mars Demo", true), mission("Old Flight", false)];
        book.save(&missions).unwrap();

        let loaded = book.load().unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].name, "Mars Demo");
        assert!(loaded[0].custom);
        assert!(!loaded[1].upcoming);
    }

    #[test]
    fn test_patch_applies_only_set_fields() {
        let mut m = mission("Draft Mission", true);
        let rocket = m.rocket.clone();

        let patch = MissionPatch {
            name: Some("Renamed".to_string()),
            details: Some("now with details".to_string()),
            ..Default::default()
        };
        assert!(!patch.is_empty());
        patch.apply(&mut m);

        assert_eq!(m.name, "Renamed");
        assert_eq!(m.details.as_deref(), Some("now with details"));
        assert_eq!(m.rocket, rocket);
        assert!(m.upcoming);
    }

    #[test]
    fn test_empty_patch() {
        assert!(MissionPatch::default().is_empty());
    }

    #[test]
    fn test_record_accessors() {
        let launch = MissionRecord::Launch(fixtures::upcoming_launch("l1", "Starlink"));
        assert_eq!(launch.name(), "Starlink");
        assert!(launch.is_upcoming());
        assert!(!launch.is_custom());

        let custom = MissionRecord::Custom(mission("Mine", false));
        assert!(custom.is_custom());
        assert!(!custom.is_upcoming());
    }
}
