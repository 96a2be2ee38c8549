use clap::Parser;
use std::path::PathBuf;

/// Notify about outdated packages in a Python environment
#[derive(Parser, Debug, Clone)]
#[command(name = "pip-update-notifier")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the requirements manifest (accepted for compatibility, not
    /// consulted by the update check)
    #[arg(short, long, value_name = "PATH", default_value = "requirements.txt")]
    pub requirements: PathBuf,

    /// Path to the project environment to inspect (defaults to current directory)
    #[arg(
        short = 'p',
        long = "project-path",
        alias = "project_path",
        value_name = "PATH",
        default_value = "."
    )]
    pub project_path: PathBuf,

    /// Enable verbose (debug) logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Also check for known security vulnerabilities using safety
    #[arg(long)]
    pub check_security: bool,
}
