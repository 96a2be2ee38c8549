use anyhow::Context;
use clap::Parser;
use pun::cli::Args;
use pun::detector::detect_updates;
use pun::lister::PipLister;
use pun::pypi::PyPiClient;
use pun::report::UpdateReporter;
use pun::security::{SafetyScanner, ScanVerdict};
use std::io::IsTerminal;
use std::process::ExitCode;
use tracing::{debug, error, info, warn};
use update_notifier_core::{InstalledPackage, Version};

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);
    run(&args).await
}

/// Log to stderr so stdout stays the report stream
fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(args: &Args) -> ExitCode {
    info!("Starting dependency update check");
    debug!(
        requirements = %args.requirements.display(),
        "requirements manifest accepted but not consulted by the update check"
    );

    // Listing failure aborts only the update phase; the security phase below
    // runs regardless
    let update_ok = match run_update_check(args).await {
        Ok(()) => true,
        Err(e) => {
            error!("Failed to check for updates: {e:#}");
            false
        }
    };

    if args.check_security {
        run_security_check(args);
    }

    info!("Dependency update check complete");

    if update_ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

async fn run_update_check(args: &Args) -> anyhow::Result<()> {
    let lister = PipLister::new(args.project_path.clone());
    let packages = lister
        .list_installed()
        .context("could not list installed packages")?;

    // One lookup at a time, in listing order; each request carries its own
    // timeout so a hung lookup cannot stall the run forever
    let client = PyPiClient::new();
    let mut entries: Vec<(InstalledPackage, Option<Version>)> = Vec::with_capacity(packages.len());
    for package in packages {
        let latest = match client.latest_version(&package.name).await {
            Ok(version) => Some(version),
            Err(e) => {
                debug!("lookup for '{}' failed: {e}", package.name);
                None
            }
        };
        entries.push((package, latest));
    }

    let report = detect_updates(&entries);

    for skipped in &report.skipped {
        warn!("Skipping {skipped}");
    }
    for candidate in &report.candidates {
        info!(
            "Update available for {}: installed {}, latest {}",
            candidate.name, candidate.installed, candidate.latest
        );
    }

    let reporter = UpdateReporter::new(std::io::stdout().is_terminal());
    reporter.render(&report.candidates);

    Ok(())
}

/// Independent of the update report: scanner problems are logged, never fatal
fn run_security_check(args: &Args) {
    info!("Checking for security vulnerabilities");

    let scanner = SafetyScanner::new(args.project_path.clone());
    match scanner.scan() {
        Ok(ScanVerdict::Clean) => info!("No known security vulnerabilities found"),
        Ok(ScanVerdict::VulnerabilitiesFound(findings)) => {
            warn!("Security vulnerabilities found:");
            warn!("{findings}");
        }
        Err(e) => error!("Security check did not complete: {e}"),
    }
}
