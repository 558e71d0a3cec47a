//! Launch resource models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A launch record from the v4 `/launches` endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Launch {
    /// Launch ID
    pub id: String,

    /// Mission name
    pub name: String,

    /// Sequential flight number
    pub flight_number: u32,

    /// Scheduled or actual launch time (UTC)
    pub date_utc: DateTime<Utc>,

    /// Launch time in the launch site's timezone, as reported by the API
    pub date_local: String,

    /// Outcome; null until the launch has flown
    pub success: Option<bool>,

    /// Launch is still in the future
    pub upcoming: bool,

    /// Rocket ID
    pub rocket: Option<String>,

    /// Crew member IDs
    #[serde(default)]
    pub crew: Vec<String>,

    /// Ship IDs involved in the mission
    #[serde(default)]
    pub ships: Vec<String>,

    /// Payload IDs
    #[serde(default)]
    pub payloads: Vec<String>,

    /// Launchpad ID
    pub launchpad: Option<String>,

    /// Mission description
    pub details: Option<String>,

    /// Related media and documentation links
    #[serde(default)]
    pub links: LaunchLinks,

    #[serde(default)]
    pub auto_update: bool,

    /// Launch date is to-be-determined
    #[serde(default)]
    pub tbd: bool,

    /// Launch date is no-earlier-than
    #[serde(default)]
    pub net: bool,

    /// Launch window in seconds
    pub window: Option<u64>,
}

impl Launch {
    /// Lifecycle status derived from the upcoming/success flags
    pub fn status(&self) -> LaunchStatus {
        if self.upcoming {
            return LaunchStatus::Scheduled;
        }
        match self.success {
            Some(true) => LaunchStatus::Success,
            Some(false) => LaunchStatus::Failure,
            None => LaunchStatus::Unknown,
        }
    }
}

/// Launch lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LaunchStatus {
    Scheduled,
    Success,
    Failure,
    Unknown,
}

impl LaunchStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LaunchStatus::Scheduled => "scheduled",
            LaunchStatus::Success => "success",
            LaunchStatus::Failure => "failure",
            LaunchStatus::Unknown => "unknown",
        }
    }
}

/// Media and documentation links attached to a launch
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LaunchLinks {
    pub patch: Option<LaunchPatch>,
    pub webcast: Option<String>,
    pub youtube_id: Option<String>,
    pub article: Option<String>,
    pub wikipedia: Option<String>,
    pub presskit: Option<String>,
    #[serde(default)]
    pub reddit: RedditLinks,
    #[serde(default)]
    pub flickr: FlickrLinks,
}

/// Mission patch artwork
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LaunchPatch {
    pub small: Option<String>,
    pub large: Option<String>,
}

/// Reddit discussion links
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RedditLinks {
    pub campaign: Option<String>,
    pub launch: Option<String>,
    pub media: Option<String>,
    pub recovery: Option<String>,
}

/// Flickr photo galleries
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FlickrLinks {
    #[serde(default)]
    pub small: Vec<String>,
    #[serde(default)]
    pub original: Vec<String>,
}

/// Query options for the full launch listing
#[derive(Debug, Clone, Default)]
pub struct LaunchQueryOptions {
    /// Maximum results to return
    pub limit: Option<usize>,

    /// Results to skip from the start
    pub offset: Option<usize>,
}

impl LaunchQueryOptions {
    /// Render the options as request query parameters
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![];
        if let Some(limit) = self.limit {
            params.push(("limit", limit.to_string()));
        }
        if let Some(offset) = self.offset {
            params.push(("offset", offset.to_string()));
        }
        params
    }
}
