//! API response models for the SpaceX v4 API

mod crew;
mod launch;
mod rocket;

pub use crew::{CrewMember, CrewStatus};
pub use launch::{
    FlickrLinks, Launch, LaunchLinks, LaunchPatch, LaunchQueryOptions, LaunchStatus, RedditLinks,
};
pub use rocket::{Rocket, RocketDimension, RocketMass};
