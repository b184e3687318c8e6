// Copyright (c) 2025 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

/**
 * Lukko - Polling Engine
 * State machine driving one assessment session to a terminal state
 *
 * Session shape: submit with startNew, then poll on a status-dependent
 * interval until the job is READY, ERROR, the endpoints are complete
 * enough to accept early, or the wall-clock ceiling is hit. When every
 * started endpoint is Ready but only some carry details, a single grace
 * poll runs after a fixed wait and its snapshot is accepted as-is.
 *
 * @copyright 2025 Bountyy Oy
 * @license Proprietary
 */

use std::time::{Duration, Instant};
use tokio::time::sleep;
use tracing::{debug, warn};

use crate::api_client::AssessmentClient;
use crate::config::PollerConfig;
use crate::errors::{AssessError, AssessResult};
use crate::progress::ProgressReporter;
use crate::types::{JobSnapshot, OverallStatus};

/// Session phase. `AwaitingGraceDetails` is entered at most once per
/// session, which makes the grace poll structurally single-shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SessionPhase {
    Polling,
    AwaitingGraceDetails,
}

/// Completion shape of a snapshot's started endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EndpointReadiness {
    /// No endpoint has started, or a started endpoint is not yet Ready
    Pending,
    /// Every started endpoint is Ready; none has details yet
    ReadyNoDetails,
    /// Every started endpoint is Ready; some but not all have details
    ReadyPartialDetails,
    /// Every started endpoint is Ready with details
    ReadyAllDetails,
}

fn classify_endpoints(snapshot: &JobSnapshot) -> EndpointReadiness {
    let started: Vec<_> = snapshot
        .endpoints
        .iter()
        .filter(|e| e.has_started())
        .collect();

    if started.is_empty() || !started.iter().all(|e| e.is_ready()) {
        return EndpointReadiness::Pending;
    }

    let with_details = started.iter().filter(|e| e.details.is_some()).count();
    if with_details == started.len() {
        EndpointReadiness::ReadyAllDetails
    } else if with_details > 0 {
        EndpointReadiness::ReadyPartialDetails
    } else {
        EndpointReadiness::ReadyNoDetails
    }
}

/// Sequential polling loop over one assessment session per domain. No
/// shared state across iterations beyond the current snapshot, which is
/// replaced wholesale on every poll.
pub struct PollingEngine {
    client: AssessmentClient,
    config: PollerConfig,
}

impl PollingEngine {
    pub fn new(client: AssessmentClient, config: PollerConfig) -> Self {
        Self { client, config }
    }

    /// Drive the session to a terminal snapshot. Errors from the client
    /// propagate unchanged; the engine never retries.
    pub async fn run(
        &self,
        domain: &str,
        reporter: &dyn ProgressReporter,
    ) -> AssessResult<JobSnapshot> {
        let session_start = Instant::now();

        // startNew only on the first submission; re-asserting it would
        // restart the remote job
        let mut snapshot = self.client.analyze(domain, true, true).await?;
        reporter.report(&snapshot, true);

        let mut phase = SessionPhase::Polling;

        loop {
            if session_start.elapsed() > self.config.max_duration {
                warn!(domain, "assessment session exceeded the time ceiling");
                return Err(AssessError::Timeout(self.config.max_duration));
            }

            match snapshot.status {
                OverallStatus::Ready => return Ok(snapshot),
                OverallStatus::Error => {
                    return Err(AssessError::Job(snapshot.status_message.clone()))
                }
                _ => {}
            }

            // The grace poll already ran; accept its snapshot whether or
            // not detail completeness improved
            if phase == SessionPhase::AwaitingGraceDetails {
                return Ok(snapshot);
            }

            let wait = match classify_endpoints(&snapshot) {
                EndpointReadiness::ReadyAllDetails => {
                    debug!(domain, "all started endpoints ready with details");
                    return Ok(snapshot);
                }
                EndpointReadiness::ReadyPartialDetails => {
                    debug!(domain, "partial endpoint details; scheduling one grace poll");
                    phase = SessionPhase::AwaitingGraceDetails;
                    self.config.grace_interval
                }
                EndpointReadiness::ReadyNoDetails | EndpointReadiness::Pending => {
                    self.interval_for(snapshot.status)
                }
            };

            sleep(wait).await;

            snapshot = self.client.analyze(domain, false, true).await?;
            reporter.report(&snapshot, false);
        }
    }

    /// Status-dependent poll interval (the service recommends slower
    /// polling once the assessment is underway)
    fn interval_for(&self, status: OverallStatus) -> Duration {
        match status {
            OverallStatus::Dns => self.config.dns_interval,
            OverallStatus::InProgress => self.config.in_progress_interval,
            _ => self.config.default_interval,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EndpointSnapshot;

    fn endpoint(progress: i32, status_message: &str, with_details: bool) -> EndpointSnapshot {
        EndpointSnapshot {
            ip_address: "192.0.2.1".to_string(),
            server_name: String::new(),
            status_message: status_message.to_string(),
            status_details: String::new(),
            grade: "A".to_string(),
            grade_trust_ignored: String::new(),
            has_warnings: false,
            progress,
            duration: 0,
            eta: 0,
            details: with_details.then(|| crate::types::EndpointDetails {
                protocols: vec![],
                cert: None,
            }),
        }
    }

    fn snapshot(endpoints: Vec<EndpointSnapshot>) -> JobSnapshot {
        JobSnapshot {
            host: "example.com".to_string(),
            port: 443,
            protocol: "http".to_string(),
            is_public: false,
            status: OverallStatus::InProgress,
            status_message: String::new(),
            start_time: 0,
            test_time: 0,
            engine_version: String::new(),
            criteria_version: String::new(),
            endpoints,
        }
    }

    #[test]
    fn no_started_endpoints_is_pending() {
        let snap = snapshot(vec![endpoint(-1, "", false)]);
        assert_eq!(classify_endpoints(&snap), EndpointReadiness::Pending);

        let empty = snapshot(vec![]);
        assert_eq!(classify_endpoints(&empty), EndpointReadiness::Pending);
    }

    #[test]
    fn unready_started_endpoint_is_pending() {
        let snap = snapshot(vec![
            endpoint(100, "Ready", true),
            endpoint(50, "In progress", false),
        ]);
        assert_eq!(classify_endpoints(&snap), EndpointReadiness::Pending);
    }

    #[test]
    fn not_started_endpoints_do_not_block_readiness() {
        let snap = snapshot(vec![
            endpoint(100, "Ready", true),
            endpoint(-1, "", false),
        ]);
        assert_eq!(classify_endpoints(&snap), EndpointReadiness::ReadyAllDetails);
    }

    #[test]
    fn detail_counts_split_the_ready_states() {
        let none = snapshot(vec![
            endpoint(100, "Ready", false),
            endpoint(100, "Ready", false),
        ]);
        assert_eq!(classify_endpoints(&none), EndpointReadiness::ReadyNoDetails);

        let some = snapshot(vec![
            endpoint(100, "Ready", true),
            endpoint(100, "Ready", false),
        ]);
        assert_eq!(
            classify_endpoints(&some),
            EndpointReadiness::ReadyPartialDetails
        );

        let all = snapshot(vec![
            endpoint(100, "Ready", true),
            endpoint(100, "Ready", true),
        ]);
        assert_eq!(classify_endpoints(&all), EndpointReadiness::ReadyAllDetails);
    }
}
