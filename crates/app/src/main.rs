//! JobMatch - terminal client for the JobMatch job-search service
//!
//! Command output goes to stdout; logs and errors go to stderr.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::process::ExitCode;

use clap::Parser;
use jobmatch_app::utils::logging::init_tracing;
use jobmatch_app::{dispatch, AppContext, Cli};
use jobmatch_domain::Config;
use jobmatch_infra::config;
use tracing::debug;

#[tokio::main]
async fn main() -> ExitCode {
    let dotenv = dotenvy::dotenv();
    let cli = Cli::parse();

    match run(cli, dotenv.is_ok()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli, dotenv_loaded: bool) -> anyhow::Result<()> {
    let config = load_config(&cli)?;
    init_tracing(&config.logging);
    debug!(dotenv_loaded, "Configuration loaded");

    let ctx = AppContext::new(config)?;
    let report = dispatch(&ctx, cli.command).await?;
    println!("{}", report.render(cli.output));
    Ok(())
}

/// `--config` file, else environment/probed file/defaults; `--api-url`
/// overrides the base URL in every case.
fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => config::load_from_file(Some(path.clone()))?,
        None => config::load()?,
    };

    if let Some(api_url) = &cli.api_url {
        config.api.base_url = api_url.trim_end_matches('/').to_string();
    }
    Ok(config)
}
