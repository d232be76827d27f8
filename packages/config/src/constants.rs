// ABOUTME: Environment variable name constants
// ABOUTME: Centralized definitions of all environment variable names used across Linkdesk

// Server Configuration
pub const PORT: &str = "PORT";
pub const CORS_ORIGIN: &str = "CORS_ORIGIN";
pub const LINKDESK_DATABASE_PATH: &str = "LINKDESK_DATABASE_PATH";

// Scraper Service Endpoints
pub const VPS_BASE_URL: &str = "VPS_BASE_URL";
pub const HUBCLOUD_PORT: &str = "HUBCLOUD_PORT";
pub const TIMER_PORT: &str = "TIMER_PORT";

// Logging
pub const RUST_LOG: &str = "RUST_LOG";

// System Environment Variables
pub const HOME: &str = "HOME";
