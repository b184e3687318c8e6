// Copyright (c) 2025 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

/**
 * Lukko - Wire Types
 * Data model for the SSL Labs /analyze endpoint
 *
 * @copyright 2025 Bountyy Oy
 * @license Proprietary
 */

use serde::{Deserialize, Serialize};

/// Endpoint-level completion marker. The service reports per-endpoint
/// readiness as a status string, independent of the job-level status enum.
pub const ENDPOINT_READY: &str = "Ready";

/// Job-level assessment status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum OverallStatus {
    #[serde(rename = "DNS")]
    Dns,
    #[serde(rename = "IN_PROGRESS")]
    InProgress,
    #[serde(rename = "READY")]
    Ready,
    #[serde(rename = "ERROR")]
    Error,
    /// Forward-compatible catch-all; treated as non-terminal by the poller
    #[serde(other)]
    Other,
}

impl std::fmt::Display for OverallStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OverallStatus::Dns => write!(f, "DNS"),
            OverallStatus::InProgress => write!(f, "IN_PROGRESS"),
            OverallStatus::Ready => write!(f, "READY"),
            OverallStatus::Error => write!(f, "ERROR"),
            OverallStatus::Other => write!(f, "UNKNOWN"),
        }
    }
}

/// One poll's view of a running assessment. Replaced wholesale on every
/// poll response; never mutated in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobSnapshot {
    pub host: String,

    #[serde(default)]
    pub port: u16,

    #[serde(default)]
    pub protocol: String,

    #[serde(default)]
    pub is_public: bool,

    pub status: OverallStatus,

    #[serde(default)]
    pub status_message: String,

    #[serde(default)]
    pub start_time: i64,

    #[serde(default)]
    pub test_time: i64,

    #[serde(default)]
    pub engine_version: String,

    #[serde(default)]
    pub criteria_version: String,

    /// Server-assigned order, preserved; empty early in the job lifecycle
    #[serde(default)]
    pub endpoints: Vec<EndpointSnapshot>,
}

/// One network endpoint's progress within a job
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointSnapshot {
    pub ip_address: String,

    #[serde(default)]
    pub server_name: String,

    /// `"Ready"` marks endpoint-level completion (see [`ENDPOINT_READY`])
    #[serde(default)]
    pub status_message: String,

    #[serde(default)]
    pub status_details: String,

    /// Letter grade, empty until assigned
    #[serde(default)]
    pub grade: String,

    #[serde(default)]
    pub grade_trust_ignored: String,

    #[serde(default)]
    pub has_warnings: bool,

    /// 0..100 once started, -1 (also when the field is absent) before
    #[serde(default = "default_progress")]
    pub progress: i32,

    #[serde(default)]
    pub duration: i64,

    #[serde(default)]
    pub eta: i64,

    /// Deep analysis blob; may lag behind readiness but once present it is
    /// never retracted on a later poll
    #[serde(default)]
    pub details: Option<EndpointDetails>,
}

fn default_progress() -> i32 {
    -1
}

impl EndpointSnapshot {
    /// Whether the service has begun assessing this endpoint
    pub fn has_started(&self) -> bool {
        self.progress >= 0
    }

    /// Endpoint-level completion, independent of the job-level status
    pub fn is_ready(&self) -> bool {
        self.status_message == ENDPOINT_READY
    }
}

/// Deep per-endpoint analysis, present only once computed
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointDetails {
    #[serde(default)]
    pub protocols: Vec<TlsProtocol>,

    #[serde(default)]
    pub cert: Option<CertInfo>,
}

/// A supported TLS/SSL protocol version
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TlsProtocol {
    pub name: String,
    pub version: String,

    /// 0 = insecure; null = secure (service convention); any other value
    /// is treated as secure
    #[serde(default)]
    pub q: Option<i32>,
}

impl TlsProtocol {
    pub fn is_secure(&self) -> bool {
        !matches!(self.q, Some(0))
    }
}

/// Leaf certificate summary
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertInfo {
    #[serde(default)]
    pub issuer_label: String,

    /// Validity window, epoch millis
    #[serde(default)]
    pub not_before: i64,

    #[serde(default)]
    pub not_after: i64,
}

/// Structured error body returned on HTTP 400
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub errors: Vec<ApiFieldError>,
}

/// One field/message pair from a structured 400 body
#[derive(Debug, Clone, Deserialize)]
pub struct ApiFieldError {
    #[serde(default)]
    pub field: String,

    #[serde(default)]
    pub message: String,
}
