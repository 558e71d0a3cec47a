//! Rocket resource model

use serde::{Deserialize, Serialize};

/// A rocket record from the v4 `/rockets` endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rocket {
    /// Rocket ID
    pub id: String,

    /// Rocket name
    pub name: String,

    /// Vehicle class (e.g. "rocket")
    #[serde(rename = "type")]
    pub rocket_type: String,

    /// Rocket is still flying
    pub active: bool,

    pub stages: u32,

    pub boosters: u32,

    /// Advertised cost per launch in USD
    pub cost_per_launch: u64,

    pub success_rate_pct: u32,

    /// First flight date (YYYY-MM-DD)
    pub first_flight: String,

    pub country: String,

    pub company: String,

    #[serde(default)]
    pub height: RocketDimension,

    #[serde(default)]
    pub diameter: RocketDimension,

    #[serde(default)]
    pub mass: RocketMass,

    pub description: Option<String>,

    pub wikipedia: Option<String>,
}

/// A physical dimension in both unit systems
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RocketDimension {
    pub meters: Option<f64>,
    pub feet: Option<f64>,
}

/// Vehicle mass in both unit systems
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RocketMass {
    pub kg: Option<u64>,
    pub lb: Option<u64>,
}
