//! Display model implementations for table and JSON output
//!
//! Display models transform API and store types into CLI-friendly rows
//! with appropriate column names and serialization.

use serde::Serialize;
use tabled::Tabled;

use crate::client::models::{CrewMember, Launch, Rocket};
use crate::output::formatters;
use crate::store::{CustomMission, MissionRecord};

/// Launch row for table/JSON output
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct LaunchRow {
    #[tabled(rename = "DATE")]
    pub date: String,

    #[tabled(rename = "FLIGHT")]
    pub flight: String,

    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "STATUS")]
    pub status: String,

    #[tabled(rename = "SOURCE")]
    pub source: String,
}

impl From<&Launch> for LaunchRow {
    fn from(launch: &Launch) -> Self {
        Self {
            date: formatters::format_date(&launch.date_utc),
            flight: launch.flight_number.to_string(),
            name: launch.name.clone(),
            status: launch.status().as_str().to_string(),
            source: "api".to_string(),
        }
    }
}

impl From<&CustomMission> for LaunchRow {
    fn from(mission: &CustomMission) -> Self {
        Self {
            date: formatters::format_date(&mission.date_utc),
            flight: "-".to_string(),
            name: mission.name.clone(),
            status: if mission.upcoming {
                "scheduled".to_string()
            } else {
                "flown".to_string()
            },
            source: "local".to_string(),
        }
    }
}

impl From<&MissionRecord> for LaunchRow {
    fn from(record: &MissionRecord) -> Self {
        match record {
            MissionRecord::Launch(launch) => launch.into(),
            MissionRecord::Custom(mission) => mission.into(),
        }
    }
}

/// Rocket row for table/JSON output
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct RocketRow {
    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "ACTIVE")]
    pub active: String,

    #[tabled(rename = "SUCCESS")]
    pub success_rate: String,

    #[tabled(rename = "COST/LAUNCH")]
    pub cost_per_launch: String,

    #[tabled(rename = "FIRST FLIGHT")]
    pub first_flight: String,

    #[tabled(rename = "COUNTRY")]
    pub country: String,
}

impl From<&Rocket> for RocketRow {
    fn from(rocket: &Rocket) -> Self {
        Self {
            name: rocket.name.clone(),
            active: if rocket.active { "yes" } else { "no" }.to_string(),
            success_rate: format!("{}%", rocket.success_rate_pct),
            cost_per_launch: format!("${}M", rocket.cost_per_launch / 1_000_000),
            first_flight: rocket.first_flight.clone(),
            country: rocket.country.clone(),
        }
    }
}

/// Crew member row for table/JSON output
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct CrewRow {
    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "AGENCY")]
    pub agency: String,

    #[tabled(rename = "STATUS")]
    pub status: String,

    #[tabled(rename = "FLIGHTS")]
    pub flights: String,
}

impl From<&CrewMember> for CrewRow {
    fn from(member: &CrewMember) -> Self {
        Self {
            name: member.name.clone(),
            agency: member.agency.clone().unwrap_or_else(|| "-".to_string()),
            status: member.status.as_str().to_string(),
            flights: member.launches.len().to_string(),
        }
    }
}

/// Custom mission row for table/JSON output
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct MissionRow {
    #[tabled(rename = "ID")]
    pub id: String,

    #[tabled(rename = "DATE")]
    pub date: String,

    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "ROCKET")]
    pub rocket: String,

    #[tabled(rename = "UPCOMING")]
    pub upcoming: String,
}

impl From<&CustomMission> for MissionRow {
    fn from(mission: &CustomMission) -> Self {
        Self {
            id: mission.id.clone(),
            date: formatters::format_date(&mission.date_utc),
            name: mission.name.clone(),
            rocket: mission.rocket.clone(),
            upcoming: if mission.upcoming { "yes" } else { "no" }.to_string(),
        }
    }
}
