// Copyright (c) 2025 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

/**
 * Lukko - TLS Posture Scanner
 * Standalone CLI for SSL Labs domain assessments
 *
 * Submits an assessment, polls until the job settles, and prints a
 * per-endpoint security report with a worst-case overall grade.
 *
 * @copyright 2025 Bountyy Oy
 * @license Proprietary
 */

use anyhow::Result;
use clap::Parser;
use tracing::Level;

use lukko_scanner::api_client::AssessmentClient;
use lukko_scanner::config::{ClientConfig, PollerConfig};
use lukko_scanner::extractor::extract;
use lukko_scanner::poller::PollingEngine;
use lukko_scanner::progress::ConsoleProgress;
use lukko_scanner::report::render_report;
use lukko_scanner::validation::validate_domain;

/// Lukko - TLS Posture Scanner
#[derive(Parser)]
#[command(name = "lukko")]
#[command(author = "Bountyy Oy <info@bountyy.fi>")]
#[command(version = "1.0.0")]
#[command(about = "Grade a domain's TLS configuration via the SSL Labs API", long_about = None)]
struct Cli {
    /// Domain to assess (e.g. example.com)
    domain: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,

    /// Quiet mode - only show the final report and errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    // Usage problems always exit 1, so render clap errors ourselves
    // instead of taking clap's default exit code
    let cli = Cli::try_parse().unwrap_or_else(|e| {
        eprint!("{e}");
        std::process::exit(1);
    });

    let log_level = if cli.debug {
        Level::DEBUG
    } else if cli.verbose {
        Level::INFO
    } else if cli.quiet {
        Level::ERROR
    } else {
        Level::WARN
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async_main(cli))
}

async fn async_main(cli: Cli) -> Result<()> {
    let domain = match validate_domain(&cli.domain) {
        Ok(domain) => domain,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Usage: lukko <domain>");
            std::process::exit(1);
        }
    };

    println!("Lukko - checking TLS security posture of {domain}");
    println!();

    let client = match AssessmentClient::new(&ClientConfig::default()) {
        Ok(client) => client,
        Err(e) => fail(&e),
    };
    let engine = PollingEngine::new(client, PollerConfig::default());

    let snapshot = match engine.run(&domain, &ConsoleProgress).await {
        Ok(snapshot) => snapshot,
        Err(e) => fail(&e),
    };

    let result = match extract(&snapshot) {
        Ok(result) => result,
        Err(e) => fail(&e),
    };

    println!();
    print!("{}", render_report(&result));

    Ok(())
}

fn fail(error: &dyn std::error::Error) -> ! {
    eprintln!("Error: {error}");
    std::process::exit(1);
}
