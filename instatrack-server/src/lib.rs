// Library exports for instatrack-server
// The binary and the integration tests both build on these modules

pub mod analytics;
pub mod api;
pub mod config;
pub mod export;
pub mod generator;
pub mod handles;
pub mod session;
pub mod state;
