//! CLI argument parsing module for npmup

use crate::package_manager::PackageManager;
use crate::registry::DEFAULT_REGISTRY_URL;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

/// Parse a registry base URL; it must be able to carry a package path
fn parse_registry_url(s: &str) -> Result<Url, String> {
    let url = Url::parse(s.trim()).map_err(|e| format!("invalid registry url: {}", e))?;
    if url.cannot_be_a_base() {
        return Err(format!("registry url cannot have a path: {}", s));
    }
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(format!("unsupported registry scheme: {}", other)),
    }
}

/// Parse an install timeout given in whole seconds
fn parse_timeout(s: &str) -> Result<Duration, String> {
    let secs: u64 = s
        .trim()
        .parse()
        .map_err(|_| format!("invalid number of seconds: {}", s))?;
    if secs == 0 {
        return Err("timeout must be at least 1 second".to_string());
    }
    Ok(Duration::from_secs(secs))
}

/// Check npm dependencies for newer versions and update them
#[derive(Parser, Debug, Clone)]
#[command(
    name = "npmup",
    version,
    about = "Check npm dependencies for newer versions and update them"
)]
pub struct CliArgs {
    /// Path to the package.json to check
    #[arg(long = "url", default_value = "./package.json")]
    pub manifest: PathBuf,

    /// Apply all updates without asking
    #[arg(short, long)]
    pub update: bool,

    // Registry options
    /// Base URL of the npms.io compatible API
    #[arg(
        long,
        env = "NPMUP_REGISTRY",
        default_value = DEFAULT_REGISTRY_URL,
        value_parser = parse_registry_url
    )]
    pub registry: Url,

    /// Decide updatability by semver range matching instead of text containment
    #[arg(long)]
    pub semver: bool,

    // Install options
    /// Package manager used to install updates (default: detected from lockfiles)
    #[arg(long, value_enum)]
    pub package_manager: Option<PackageManager>,

    /// Kill the install command after this many seconds
    #[arg(long, value_name = "SECS", value_parser = parse_timeout)]
    pub install_timeout: Option<Duration>,

    // Output options
    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Enable quiet mode - no progress display
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}
