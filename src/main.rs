use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

mod cli;
mod domain;
mod services;

use cli::Cli;
use domain::models::{AUDIT_FAILED, AUDIT_OK, OPERATIONAL_ERROR};
use services::repo::GitRepo;
use services::{audit, output};

fn main() {
    let cli = Cli::parse();

    let filter =
        EnvFilter::try_from_env("TRUNKCHECK_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    match run(&cli) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{err:#}");
            std::process::exit(OPERATIONAL_ERROR);
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<i32> {
    if !cli.repository.is_dir() {
        anyhow::bail!("{} is not a directory", cli.repository.display());
    }
    let repo = GitRepo::open(&cli.repository)?;
    let ledger = audit::run(&repo, &cli.branch, &cli.policy_file)?;
    output::print_report(cli.json, &ledger)?;
    Ok(if ledger.is_empty() {
        AUDIT_OK
    } else {
        AUDIT_FAILED
    })
}
