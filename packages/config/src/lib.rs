// ABOUTME: Process-wide configuration for Linkdesk
// ABOUTME: Environment variable names, scraper service endpoints, and timing constants

pub mod constants;
pub mod endpoints;
pub mod timings;

pub use endpoints::{ConfigError, ServiceEndpoints};
pub use timings::Timings;
