// ABOUTME: Entry point for the ghdeploy CLI application.
// ABOUTME: Loads settings, triggers one deployment, and exits with the outcome's signal.

mod cli;

use clap::Parser;
use cli::Cli;
use ghdeploy::config::ConfigFile;
use ghdeploy::deploy::{DeploymentResult, create_deployment};
use ghdeploy::error::Result;
use ghdeploy::exit;
use ghdeploy::output::Output;
use ghdeploy::transport::HttpTransport;
use std::env;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // clap's own usage-error code (2) would collide with RetryableConflict.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = if e.use_stderr() {
                exit::INVALID_ARGS
            } else {
                exit::SUCCESS
            };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    // RUST_LOG wins unless --verbose asks for debug explicitly
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let mut output = Output::new(cli.output_mode());

    let code = match run(&cli, &mut output).await {
        Ok(result) => {
            output.result(&result);
            result.outcome.signal()
        }
        Err(e) => {
            output.error(&e.to_string());
            e.exit_code()
        }
    };

    std::process::exit(code);
}

async fn run(cli: &Cli, output: &mut Output) -> Result<DeploymentResult> {
    let file = match &cli.config {
        Some(path) => Some(ConfigFile::load(path)?),
        None => ConfigFile::discover(&env::current_dir()?)?,
    };

    let settings = match file {
        Some(file) => cli.settings().with_file(&file)?,
        None => cli.settings(),
    };
    let config = settings.validate()?;

    output.progress(&format!(
        "Requesting deployment of {} via {}",
        config.request.git_ref(),
        config.endpoint
    ));
    output.start_timer();

    let transport = HttpTransport::new()?;
    let result = create_deployment(
        config.request,
        &transport,
        &config.endpoint,
        &config.token,
    )
    .await?;

    Ok(result)
}
