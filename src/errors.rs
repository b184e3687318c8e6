// Copyright (c) 2025 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

/**
 * Lukko - Error Types
 * Production-ready error handling with thiserror
 *
 * @copyright 2025 Bountyy Oy
 * @license Proprietary
 */

use crate::types::OverallStatus;
use std::time::Duration;
use thiserror::Error;

/// Main assessment error type covering transport, service, polling and
/// extraction failures. Every variant is terminal for the session: the
/// scanner is a one-shot CLI and never retries internally.
#[derive(Error, Debug)]
pub enum AssessError {
    /// The service rejected the request with a structured 400 payload
    #[error("invalid request (400): {field} - {message}")]
    InvalidRequest { field: String, message: String },

    /// HTTP 429
    #[error("rate limit exceeded (429): wait before retrying")]
    RateLimited,

    /// HTTP 500 or 503
    #[error("service unavailable ({0}): try again later")]
    ServiceUnavailable(u16),

    /// HTTP 529
    #[error("service overloaded (529): try again later")]
    ServiceOverloaded,

    /// Any other HTTP status the service is not documented to return
    #[error("unexpected HTTP status: {0}")]
    UnexpectedStatus(u16),

    /// Connection or body-read failure
    #[error("transport error: {0}")]
    Transport(String),

    /// Response body did not match the expected schema
    #[error("malformed response: {0}")]
    Decode(String),

    /// The remote job itself reported failure (overall status ERROR)
    #[error("assessment failed: {0}")]
    Job(String),

    /// Polling session exceeded the wall-clock ceiling
    #[error("assessment timed out after {0:?}")]
    Timeout(Duration),

    /// Snapshot carried no endpoints at all
    #[error("no endpoints present in the assessment response")]
    NoEndpoints,

    /// Endpoints exist but none are ready with full details
    #[error("no ready endpoints with complete details (job status: {0})")]
    NoReadyEndpoints(OverallStatus),

    /// Domain failed basic validation before any request was sent
    #[error("invalid domain: {0}")]
    InvalidDomain(String),
}

/// Result type alias for assessment operations
pub type AssessResult<T> = Result<T, AssessError>;
