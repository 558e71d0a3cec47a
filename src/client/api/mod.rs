//! API trait definitions split by responsibility
//!
//! - [`LaunchesApi`] - Launch listing and lookup operations
//! - [`FleetApi`] - Rocket and crew operations
//!
//! The [`SpaceXApi`](super::SpaceXApi) super-trait combines both.

mod fleet;
mod launches;

pub use fleet::FleetApi;
pub use launches::LaunchesApi;
