//! fresh - Stale branch cleanup CLI
//!
//! Delete branches of recently closed GitHub pull requests.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use fresh::Result;
use fresh::cli::Cli;
use fresh::config::Config;
use fresh::github::GitHubClient;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = Config::resolve(cli);
    let client = GitHubClient::new(&config.token)?.with_base_url(&config.api_url);
    fresh::sweep::run(&client, &config.user, &config.repo, config.days, config.dry)?;
    Ok(())
}

fn init_tracing(cli: &Cli) {
    if cli.quiet {
        return;
    }

    let filter = match cli.verbose {
        0 => "warn,fresh=info",
        1 => "info,fresh=debug",
        2 => "debug,fresh=trace",
        _ => "trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
