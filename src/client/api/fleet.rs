//! Rocket and crew API trait

use async_trait::async_trait;

use crate::client::models::{CrewMember, Rocket};
use crate::error::Result;

/// Rocket and crew operations of the SpaceX API
#[async_trait]
pub trait FleetApi: Send + Sync {
    /// List all rockets
    async fn list_rockets(&self) -> Result<Vec<Rocket>>;

    /// Look up one rocket by ID
    async fn rocket_by_id(&self, id: &str) -> Result<Rocket>;

    /// List all crew members
    async fn list_crew(&self) -> Result<Vec<CrewMember>>;
}
