//! npmup - npm dependency update checker CLI tool
//!
//! Reports which dependencies of a package.json have a newer published
//! version, then offers to install them.

use clap::Parser;
use console::Term;
use npmup::cli::CliArgs;
use npmup::executor::SystemExecutor;
use npmup::manifest::{manifest_dir, read_manifest};
use npmup::orchestrator::{OrchestratorConfig, UpdateOrchestrator};
use npmup::package_manager::PackageManager;
use npmup::progress::create_reporter;
use npmup::prompt::DialoguerDecider;
use npmup::registry::{HttpClient, NpmsAdapter};
use npmup::update::{create_policy, Classifier, CommandBuilder};
use std::io::{self, Write};
use std::process::ExitCode;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("npmup=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("npmup=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(io::stderr))
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = CliArgs::parse();
    init_tracing(args.verbose);

    tracing::debug!("npmup starting with args: {:?}", args);

    if args.no_color {
        colored::control::set_override(false);
    }

    // Run the main logic and handle errors
    match run(args).await {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Main application logic
async fn run(args: CliArgs) -> anyhow::Result<ExitCode> {
    let declarations = read_manifest(&args.manifest)?;
    tracing::debug!(
        "{} dependencies declared in {}",
        declarations.len(),
        args.manifest.display()
    );

    let stderr_is_term = Term::stderr().is_term();

    // Classify every declaration against the registry
    let source = NpmsAdapter::new(HttpClient::new()?, args.registry.clone());
    let classifier = Classifier::new(create_policy(args.semver));
    let mut reporter = create_reporter(args.quiet, stderr_is_term);
    let records = classifier
        .classify(&declarations, &source, reporter.as_mut())
        .await?;

    let working_dir = manifest_dir(&args.manifest);
    let manager = PackageManager::resolve(args.package_manager, working_dir);
    let executor = SystemExecutor::new(working_dir).with_timeout(args.install_timeout);
    let mut decider = DialoguerDecider::new();

    let config = OrchestratorConfig {
        auto_update: args.update,
        show_progress: !args.quiet && stderr_is_term,
        color: !args.no_color,
    };

    let mut stdout = io::stdout();
    let report = UpdateOrchestrator::new(
        &mut decider,
        &executor,
        CommandBuilder::new(manager),
        config,
    )
    .run(&records, &mut stdout)
    .await?;
    stdout.flush()?;

    tracing::debug!("finished in state {:?}", report.final_state());

    if report.is_failure() {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}
