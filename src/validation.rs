// Copyright (c) 2025 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

/**
 * Lukko - Input Validation
 * Basic domain validation before anything is sent to the service
 *
 * @copyright 2025 Bountyy Oy
 * @license Proprietary
 */

use crate::errors::{AssessError, AssessResult};

/// Validate a raw domain argument and return the trimmed domain. The
/// service performs the authoritative hostname validation; this only
/// rejects obviously malformed input before a request is made.
pub fn validate_domain(raw: &str) -> AssessResult<String> {
    let domain = raw.trim();

    if domain.is_empty() {
        return Err(AssessError::InvalidDomain(
            "domain must not be empty".to_string(),
        ));
    }

    if !domain.contains('.') {
        return Err(AssessError::InvalidDomain(format!(
            "'{domain}' is not a valid domain (expected something like example.com)"
        )));
    }

    Ok(domain.to_string())
}
