//! SpaceX API client

pub mod api;
#[cfg(test)]
pub mod fixtures;
#[cfg(test)]
pub mod mock;
pub mod models;
pub mod spacex;

pub use api::{FleetApi, LaunchesApi};
#[cfg(test)]
#[allow(unused_imports)]
pub use mock::MockSpaceXClient;
pub use spacex::{API_BASE_URL, SpaceXClient};

/// Full SpaceX API surface
pub trait SpaceXApi: LaunchesApi + FleetApi {}

impl<T: LaunchesApi + FleetApi> SpaceXApi for T {}
