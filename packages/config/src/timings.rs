// ABOUTME: Timeouts, poll intervals and retry budgets for link resolution
// ABOUTME: Compile-time constants shared by every service that talks to the scraper backends

use std::time::Duration;

use serde::Serialize;

/// Timeout for a single outbound HTTP request
pub const HTTP_TIMEOUT: Duration = Duration::from_millis(20_000);

/// Timeout for resolving one link end to end
pub const LINK_TIMEOUT: Duration = Duration::from_millis(25_000);

/// Upper bound for a whole resolution run
pub const OVERALL_TIMEOUT: Duration = Duration::from_millis(50_000);

pub const MAX_RETRY_ATTEMPTS: u32 = 2;

/// A task running longer than this is considered stuck
pub const STUCK_TASK_THRESHOLD: Duration = Duration::from_millis(10 * 60 * 1_000);

pub const MAX_CRON_RETRIES: u32 = 3;

pub const TASK_POLL_INTERVAL: Duration = Duration::from_millis(5_000);

/// Serializable view of the timing constants, in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Timings {
    pub http_timeout_ms: u64,
    pub link_timeout_ms: u64,
    pub overall_timeout_ms: u64,
    pub max_retry_attempts: u32,
    pub stuck_task_threshold_ms: u64,
    pub max_cron_retries: u32,
    pub task_poll_interval_ms: u64,
}

impl Timings {
    pub fn current() -> Self {
        Self {
            http_timeout_ms: HTTP_TIMEOUT.as_millis() as u64,
            link_timeout_ms: LINK_TIMEOUT.as_millis() as u64,
            overall_timeout_ms: OVERALL_TIMEOUT.as_millis() as u64,
            max_retry_attempts: MAX_RETRY_ATTEMPTS,
            stuck_task_threshold_ms: STUCK_TASK_THRESHOLD.as_millis() as u64,
            max_cron_retries: MAX_CRON_RETRIES,
            task_poll_interval_ms: TASK_POLL_INTERVAL.as_millis() as u64,
        }
    }
}
