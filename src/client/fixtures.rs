//! Shared test fixtures
//!
//! Sample resource records used across unit tests.

use chrono::{Duration, Utc};

use super::models::{
    CrewMember, CrewStatus, Launch, LaunchLinks, Rocket, RocketDimension, RocketMass,
};

/// A minimal launch record; callers adjust the fields they care about
pub fn launch(id: &str, name: &str) -> Launch {
    Launch {
        id: id.to_string(),
        name: name.to_string(),
        flight_number: 1,
        date_utc: Utc::now(),
        date_local: "2022-01-01T00:00:00-07:00".to_string(),
        success: None,
        upcoming: false,
        rocket: Some("falcon9".to_string()),
        crew: vec![],
        ships: vec![],
        payloads: vec![],
        launchpad: None,
        details: None,
        links: LaunchLinks::default(),
        auto_update: true,
        tbd: false,
        net: false,
        window: None,
    }
}

/// An upcoming launch a week out
pub fn upcoming_launch(id: &str, name: &str) -> Launch {
    let mut l = launch(id, name);
    l.upcoming = true;
    l.date_utc = Utc::now() + Duration::days(7);
    l
}

/// A flown launch a month back
pub fn past_launch(id: &str, name: &str, success: bool) -> Launch {
    let mut l = launch(id, name);
    l.success = Some(success);
    l.date_utc = Utc::now() - Duration::days(30);
    l
}

pub fn rocket(id: &str, name: &str) -> Rocket {
    Rocket {
        id: id.to_string(),
        name: name.to_string(),
        rocket_type: "rocket".to_string(),
        active: true,
        stages: 2,
        boosters: 0,
        cost_per_launch: 50_000_000,
        success_rate_pct: 98,
        first_flight: "2010-06-04".to_string(),
        country: "United States".to_string(),
        company: "SpaceX".to_string(),
        height: RocketDimension {
            meters: Some(70.0),
            feet: Some(229.6),
        },
        diameter: RocketDimension::default(),
        mass: RocketMass::default(),
        description: None,
        wikipedia: None,
    }
}

pub fn crew_member(id: &str, name: &str) -> CrewMember {
    CrewMember {
        id: id.to_string(),
        name: name.to_string(),
        agency: Some("NASA".to_string()),
        image: None,
        wikipedia: None,
        launches: vec![],
        status: CrewStatus::Active,
    }
}
