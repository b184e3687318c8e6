// Copyright (c) 2025 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

/**
 * Lukko - Assessment Client
 * Single request/response exchange against the SSL Labs /analyze endpoint
 *
 * Fail-fast by design: rate limits and server errors surface as typed
 * errors and are never retried here (the CLI is one-shot).
 *
 * @copyright 2025 Bountyy Oy
 * @license Proprietary
 */

use reqwest::{Client, StatusCode};
use tracing::debug;

use crate::config::ClientConfig;
use crate::errors::{AssessError, AssessResult};
use crate::types::{ApiErrorBody, JobSnapshot};

/// Thin client over the assessment service. Holds a connection-pooling
/// reqwest client with a fixed per-request timeout.
#[derive(Clone)]
pub struct AssessmentClient {
    client: Client,
    base_url: String,
}

impl AssessmentClient {
    pub fn new(config: &ClientConfig) -> AssessResult<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| AssessError::Transport(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Initiate or poll an assessment for `domain`.
    ///
    /// `start_new` must be set only on the very first submission of a
    /// polling session; setting it later restarts the remote job.
    /// `full_details` requests the per-endpoint deep-analysis blobs.
    pub async fn analyze(
        &self,
        domain: &str,
        start_new: bool,
        full_details: bool,
    ) -> AssessResult<JobSnapshot> {
        let url = format!("{}/analyze", self.base_url);

        // Results are never published to the service's public boards
        let mut params: Vec<(&str, &str)> = vec![("host", domain), ("publish", "off")];
        if start_new {
            params.push(("startNew", "on"));
        }
        if full_details {
            params.push(("all", "done"));
        }

        debug!(domain, start_new, full_details, "querying assessment service");

        let response = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AssessError::Transport(format!("request timed out: {e}"))
                } else {
                    AssessError::Transport(format!("connection failed: {e}"))
                }
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AssessError::Transport(format!("failed to read response body: {e}")))?;

        match status {
            StatusCode::OK => serde_json::from_str(&body)
                .map_err(|e| AssessError::Decode(format!("invalid assessment payload: {e}"))),
            StatusCode::BAD_REQUEST => Err(invalid_request_error(&body)),
            StatusCode::TOO_MANY_REQUESTS => Err(AssessError::RateLimited),
            StatusCode::INTERNAL_SERVER_ERROR | StatusCode::SERVICE_UNAVAILABLE => {
                Err(AssessError::ServiceUnavailable(status.as_u16()))
            }
            s if s.as_u16() == 529 => Err(AssessError::ServiceOverloaded),
            s => Err(AssessError::UnexpectedStatus(s.as_u16())),
        }
    }
}

/// Map a structured 400 body to a field/message error, falling back to a
/// generic message when the body is not the documented shape.
fn invalid_request_error(body: &str) -> AssessError {
    match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(parsed) if !parsed.errors.is_empty() => AssessError::InvalidRequest {
            field: parsed.errors[0].field.clone(),
            message: parsed.errors[0].message.clone(),
        },
        _ => AssessError::InvalidRequest {
            field: "request".to_string(),
            message: "invalid parameters".to_string(),
        },
    }
}
