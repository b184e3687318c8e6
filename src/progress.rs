// Copyright (c) 2025 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

/**
 * Lukko - Progress Reporting
 * One-way sink for per-poll progress; purely observational
 *
 * @copyright 2025 Bountyy Oy
 * @license Proprietary
 */

use crate::types::{JobSnapshot, OverallStatus};

/// Consumes each accepted poll snapshot. Implementations must not affect
/// the polling engine's control flow or timing.
pub trait ProgressReporter: Send + Sync {
    fn report(&self, snapshot: &JobSnapshot, is_first: bool);
}

/// No-op reporter, used by tests and library consumers that render their
/// own progress.
pub struct SilentProgress;

impl ProgressReporter for SilentProgress {
    fn report(&self, _snapshot: &JobSnapshot, _is_first: bool) {}
}

/// Human-readable progress lines on stdout
pub struct ConsoleProgress;

impl ProgressReporter for ConsoleProgress {
    fn report(&self, snapshot: &JobSnapshot, is_first: bool) {
        match snapshot.status {
            OverallStatus::Dns => println!("Resolving DNS..."),
            OverallStatus::InProgress => report_in_progress(snapshot),
            OverallStatus::Ready => println!("Assessment complete."),
            // Job-level errors are rendered by the polling engine's caller
            OverallStatus::Error => {}
            OverallStatus::Other => {
                if is_first {
                    println!("Starting assessment...");
                }
            }
        }
    }
}

fn report_in_progress(snapshot: &JobSnapshot) {
    let first_progress = snapshot
        .endpoints
        .first()
        .map(|e| e.progress)
        .unwrap_or(-1);

    if first_progress < 0 {
        println!("Assessing TLS security...");
        return;
    }

    if first_progress < 100 {
        println!("Assessing TLS security... ({first_progress}%)");
        return;
    }

    // At 100% the interesting signal is how many endpoints still owe
    // their deep-analysis details
    let started: Vec<_> = snapshot.endpoints.iter().filter(|e| e.has_started()).collect();
    let ready = started.iter().filter(|e| e.is_ready()).count();
    let with_details = started
        .iter()
        .filter(|e| e.is_ready() && e.details.is_some())
        .count();

    if ready == 0 {
        println!(
            "Waiting for the assessment to finish... ({} endpoints in progress)",
            started.len()
        );
    } else if with_details < ready {
        if with_details > 0 {
            println!(
                "Waiting for TLS security details... ({with_details}/{ready} endpoints with complete details)"
            );
        } else {
            println!(
                "Waiting for TLS security details... ({ready} endpoints ready, details pending)"
            );
        }
    } else {
        println!("Finalizing assessment...");
    }
}
