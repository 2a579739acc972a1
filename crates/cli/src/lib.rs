mod cli_args;

use clap::Parser;
use cli_args::CliArgs;
use have_it_diagnostics::enable_tracing_by_env;

pub async fn run_cli() -> miette::Result<()> {
    enable_tracing_by_env();
    CliArgs::parse().run().await
}
