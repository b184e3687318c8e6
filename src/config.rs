// Copyright (c) 2025 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

/**
 * Lukko - Client and Poller Configuration
 *
 * @copyright 2025 Bountyy Oy
 * @license Proprietary
 */

use std::time::Duration;

/// SSL Labs API v2 base URL
pub const DEFAULT_API_BASE_URL: &str = "https://api.ssllabs.com/api/v2";

/// Per-request timeout, independent of the session ceiling
const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API base URL; overridable so tests can target a mock server
    pub base_url: String,

    /// Timeout applied to each individual request
    pub request_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

impl ClientConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}

/// Polling engine configuration. Defaults follow the intervals the service
/// recommends; tests shrink them to milliseconds.
#[derive(Debug, Clone)]
pub struct PollerConfig {
    /// Wall-clock ceiling for the whole session
    pub max_duration: Duration,

    /// Interval while the job is still in DNS resolution
    pub dns_interval: Duration,

    /// Interval once the job is IN_PROGRESS
    pub in_progress_interval: Duration,

    /// Interval for any other non-terminal status
    pub default_interval: Duration,

    /// One-shot wait before the single grace poll
    pub grace_interval: Duration,
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self {
            max_duration: Duration::from_secs(600),
            dns_interval: Duration::from_secs(5),
            in_progress_interval: Duration::from_secs(10),
            default_interval: Duration::from_secs(5),
            grace_interval: Duration::from_secs(10),
        }
    }
}

impl PollerConfig {
    pub fn with_max_duration(mut self, max_duration: Duration) -> Self {
        self.max_duration = max_duration;
        self
    }

    pub fn with_intervals(mut self, dns: Duration, in_progress: Duration, default: Duration) -> Self {
        self.dns_interval = dns;
        self.in_progress_interval = in_progress;
        self.default_interval = default;
        self
    }

    pub fn with_grace_interval(mut self, grace: Duration) -> Self {
        self.grace_interval = grace;
        self
    }
}
