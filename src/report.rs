// Copyright (c) 2025 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

/**
 * Lukko - Report Rendering
 * Terminal output for a completed assessment
 *
 * @copyright 2025 Bountyy Oy
 * @license Proprietary
 */

use chrono::DateTime;
use std::fmt::Write;

use crate::extractor::AssessmentResult;

/// Render the final assessment report as plain text
pub fn render_report(result: &AssessmentResult) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "=== TLS Security Results ===");
    let _ = writeln!(out, "Domain: {}", result.domain);
    let _ = writeln!(out, "Overall grade: {}", result.overall_grade);
    let _ = writeln!(out);

    for (i, endpoint) in result.endpoints.iter().enumerate() {
        let _ = writeln!(out, "--- Endpoint {}: {} ---", i + 1, endpoint.ip_address);
        let _ = writeln!(out, "Grade: {}", endpoint.grade);

        if endpoint.tls_protocols.is_empty() {
            let _ = writeln!(out, "TLS protocols: no secure protocols available");
        } else {
            let _ = writeln!(out, "TLS protocols: {}", endpoint.tls_protocols.join(", "));
        }

        if !endpoint.cert_issuer.is_empty() {
            let _ = writeln!(out, "Certificate issuer: {}", endpoint.cert_issuer);
        }

        if endpoint.cert_valid_from > 0 && endpoint.cert_valid_to > 0 {
            let _ = writeln!(
                out,
                "Certificate valid: {} to {}",
                format_epoch_millis(endpoint.cert_valid_from),
                format_epoch_millis(endpoint.cert_valid_to)
            );
        }

        let _ = writeln!(out);
    }

    if result.endpoints.len() > 1 {
        let _ = writeln!(out, "=== Summary ===");
        let _ = writeln!(
            out,
            "Overall grade (worst across endpoints): {}",
            result.overall_grade
        );
    }

    out
}

fn format_epoch_millis(millis: i64) -> String {
    match DateTime::from_timestamp_millis(millis) {
        Some(ts) => ts.format("%Y-%m-%d").to_string(),
        None => millis.to_string(),
    }
}
