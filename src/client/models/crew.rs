//! Crew member resource model

use serde::{Deserialize, Serialize};

/// A crew member record from the v4 `/crew` endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrewMember {
    /// Crew member ID
    pub id: String,

    /// Full name
    pub name: String,

    /// Operating agency (e.g. NASA)
    pub agency: Option<String>,

    /// Portrait URL
    pub image: Option<String>,

    pub wikipedia: Option<String>,

    /// IDs of launches the member has flown on
    #[serde(default)]
    pub launches: Vec<String>,

    pub status: CrewStatus,
}

impl CrewMember {
    pub fn is_active(&self) -> bool {
        self.status == CrewStatus::Active
    }
}

/// Crew member status as reported by the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CrewStatus {
    Active,
    Inactive,
    Retired,
    #[serde(other)]
    Unknown,
}

impl CrewStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CrewStatus::Active => "active",
            CrewStatus::Inactive => "inactive",
            CrewStatus::Retired => "retired",
            CrewStatus::Unknown => "unknown",
        }
    }
}
