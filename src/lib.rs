// Copyright (c) 2025 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

/**
 * Lukko - TLS Posture Scanner Library
 * Drives the SSL Labs assessment API: submit, poll, grade, report.
 *
 * @copyright 2025 Bountyy Oy
 * @license Proprietary
 */

pub mod api_client;
pub mod config;
pub mod grades;
pub mod poller;
pub mod progress;
pub mod types;

// Result extraction and rendering
pub mod extractor;
pub mod report;

// Production error handling
pub mod errors;

// Validation modules
pub mod validation;
