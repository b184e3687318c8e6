// Copyright (c) 2025 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

/**
 * Lukko - Result Extractor
 * Normalizes a terminal job snapshot into a display-ready summary
 *
 * @copyright 2025 Bountyy Oy
 * @license Proprietary
 */

use serde::Serialize;

use crate::errors::{AssessError, AssessResult};
use crate::grades::worst_grade;
use crate::types::JobSnapshot;

/// Normalized assessment summary, built exactly once from the final
/// snapshot of a polling session.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentResult {
    pub domain: String,

    /// Worst grade among the included endpoints
    pub overall_grade: String,

    /// Included endpoints, in server-assigned order
    pub endpoints: Vec<EndpointResult>,
}

/// One included endpoint's security summary
#[derive(Debug, Clone, Serialize)]
pub struct EndpointResult {
    pub ip_address: String,
    pub grade: String,

    /// `"<name> <version>"` for each protocol not flagged insecure,
    /// in service order
    pub tls_protocols: Vec<String>,

    /// Empty when the snapshot carried no certificate
    pub cert_issuer: String,

    /// Certificate validity window, epoch millis; 0 when absent
    pub cert_valid_from: i64,
    pub cert_valid_to: i64,
}

/// Build an [`AssessmentResult`] from a snapshot. Endpoints that are not
/// Ready, or Ready without details, are dropped silently: partial results
/// are acceptable, zero results are not.
pub fn extract(snapshot: &JobSnapshot) -> AssessResult<AssessmentResult> {
    if snapshot.endpoints.is_empty() {
        return Err(AssessError::NoEndpoints);
    }

    let mut endpoints = Vec::new();
    let mut grades = Vec::new();

    for endpoint in &snapshot.endpoints {
        if !endpoint.is_ready() {
            continue;
        }
        let details = match &endpoint.details {
            Some(details) => details,
            None => continue,
        };

        let tls_protocols = details
            .protocols
            .iter()
            .filter(|p| p.is_secure())
            .map(|p| format!("{} {}", p.name, p.version))
            .collect();

        let (cert_issuer, cert_valid_from, cert_valid_to) = match &details.cert {
            Some(cert) => (cert.issuer_label.clone(), cert.not_before, cert.not_after),
            None => (String::new(), 0, 0),
        };

        endpoints.push(EndpointResult {
            ip_address: endpoint.ip_address.clone(),
            grade: endpoint.grade.clone(),
            tls_protocols,
            cert_issuer,
            cert_valid_from,
            cert_valid_to,
        });
        grades.push(endpoint.grade.as_str());
    }

    // worst_grade is total here: the empty case was rejected above
    let overall_grade = match worst_grade(&grades) {
        Some(grade) => grade.to_string(),
        None => return Err(AssessError::NoReadyEndpoints(snapshot.status)),
    };

    Ok(AssessmentResult {
        domain: snapshot.host.clone(),
        overall_grade,
        endpoints,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{
        CertInfo, EndpointDetails, EndpointSnapshot, OverallStatus, TlsProtocol,
    };

    fn protocol(name: &str, version: &str, q: Option<i32>) -> TlsProtocol {
        TlsProtocol {
            name: name.to_string(),
            version: version.to_string(),
            q,
        }
    }

    fn ready_endpoint(ip: &str, grade: &str, details: Option<EndpointDetails>) -> EndpointSnapshot {
        EndpointSnapshot {
            ip_address: ip.to_string(),
            server_name: String::new(),
            status_message: "Ready".to_string(),
            status_details: String::new(),
            grade: grade.to_string(),
            grade_trust_ignored: String::new(),
            has_warnings: false,
            progress: 100,
            duration: 0,
            eta: 0,
            details,
        }
    }

    fn snapshot(status: OverallStatus, endpoints: Vec<EndpointSnapshot>) -> JobSnapshot {
        JobSnapshot {
            host: "example.com".to_string(),
            port: 443,
            protocol: "http".to_string(),
            is_public: false,
            status,
            status_message: String::new(),
            start_time: 0,
            test_time: 0,
            engine_version: String::new(),
            criteria_version: String::new(),
            endpoints,
        }
    }

    fn details_with_grade_protocols() -> EndpointDetails {
        EndpointDetails {
            protocols: vec![protocol("TLS", "1.2", None)],
            cert: None,
        }
    }

    #[test]
    fn two_ready_endpoints_yield_worst_overall_grade() {
        let snap = snapshot(
            OverallStatus::Ready,
            vec![
                ready_endpoint("192.0.2.1", "A+", Some(details_with_grade_protocols())),
                ready_endpoint("192.0.2.2", "B", Some(details_with_grade_protocols())),
            ],
        );

        let result = extract(&snap).unwrap();
        assert_eq!(result.domain, "example.com");
        assert_eq!(result.endpoints.len(), 2);
        assert_eq!(result.overall_grade, "B");
        assert_eq!(result.endpoints[0].ip_address, "192.0.2.1");
        assert_eq!(result.endpoints[1].ip_address, "192.0.2.2");
    }

    #[test]
    fn empty_endpoint_list_fails_with_no_endpoints() {
        let snap = snapshot(OverallStatus::Ready, vec![]);
        assert!(matches!(extract(&snap), Err(AssessError::NoEndpoints)));
    }

    #[test]
    fn ready_without_details_fails_with_no_ready_endpoints() {
        let snap = snapshot(
            OverallStatus::InProgress,
            vec![ready_endpoint("192.0.2.1", "A", None)],
        );
        assert!(matches!(
            extract(&snap),
            Err(AssessError::NoReadyEndpoints(OverallStatus::InProgress))
        ));
    }

    #[test]
    fn unready_endpoints_are_dropped_silently() {
        let mut pending = ready_endpoint("192.0.2.2", "F", Some(details_with_grade_protocols()));
        pending.status_message = "In progress".to_string();
        pending.progress = 40;

        let snap = snapshot(
            OverallStatus::InProgress,
            vec![
                ready_endpoint("192.0.2.1", "A", Some(details_with_grade_protocols())),
                pending,
            ],
        );

        let result = extract(&snap).unwrap();
        assert_eq!(result.endpoints.len(), 1);
        // The dropped endpoint's grade does not poison the overall grade
        assert_eq!(result.overall_grade, "A");
    }

    #[test]
    fn insecure_protocols_are_filtered_and_null_means_secure() {
        let details = EndpointDetails {
            protocols: vec![
                protocol("TLS", "1.0", Some(0)),
                protocol("TLS", "1.2", Some(1)),
                protocol("TLS", "1.3", None),
            ],
            cert: None,
        };
        let snap = snapshot(
            OverallStatus::Ready,
            vec![ready_endpoint("192.0.2.1", "A", Some(details))],
        );

        let result = extract(&snap).unwrap();
        assert_eq!(result.endpoints[0].tls_protocols, vec!["TLS 1.2", "TLS 1.3"]);
    }

    #[test]
    fn certificate_fields_copy_through_when_present() {
        let details = EndpointDetails {
            protocols: vec![protocol("TLS", "1.3", None)],
            cert: Some(CertInfo {
                issuer_label: "Let's Encrypt".to_string(),
                not_before: 1_700_000_000_000,
                not_after: 1_710_000_000_000,
            }),
        };
        let snap = snapshot(
            OverallStatus::Ready,
            vec![ready_endpoint("192.0.2.1", "A", Some(details))],
        );

        let result = extract(&snap).unwrap();
        let endpoint = &result.endpoints[0];
        assert_eq!(endpoint.cert_issuer, "Let's Encrypt");
        assert_eq!(endpoint.cert_valid_from, 1_700_000_000_000);
        assert_eq!(endpoint.cert_valid_to, 1_710_000_000_000);
    }

    #[test]
    fn missing_certificate_leaves_fields_empty() {
        let snap = snapshot(
            OverallStatus::Ready,
            vec![ready_endpoint("192.0.2.1", "A", Some(details_with_grade_protocols()))],
        );

        let result = extract(&snap).unwrap();
        let endpoint = &result.endpoints[0];
        assert_eq!(endpoint.cert_issuer, "");
        assert_eq!(endpoint.cert_valid_from, 0);
        assert_eq!(endpoint.cert_valid_to, 0);
    }
}
