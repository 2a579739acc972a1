pub mod dependency_options;
pub mod list;
pub mod missing;
pub mod save;

use clap::{Parser, Subcommand};
use have_it_bookkeeper::manifest_path_in;
use list::ListArgs;
use missing::MissingArgs;
use save::SaveArgs;
use std::{env, ffi::OsString, path::PathBuf};

fn default_current_dir() -> OsString {
    env::current_dir().expect("failed to get current directory").into_os_string()
}

/// Find the dependencies declared in package.json that are not installed.
#[derive(Debug, Parser)]
#[clap(name = "have-it")]
#[clap(bin_name = "have-it")]
#[clap(version = "0.0.1")]
#[clap(about = "Find and record the dependencies of package.json that are missing")]
pub struct CliArgs {
    #[clap(subcommand)]
    pub command: CliCommand,

    /// Set working directory.
    #[clap(short = 'C', long, default_value = default_current_dir())]
    pub dir: PathBuf,
}

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// List the dependencies declared in package.json.
    List(ListArgs),
    /// List the declared dependencies that are not among the found ones.
    Missing(MissingArgs),
    /// Record dependencies into package.json.
    Save(SaveArgs),
}

impl CliArgs {
    /// Execute the command
    pub async fn run(self) -> miette::Result<()> {
        let CliArgs { command, dir } = self;
        let manifest_path = manifest_path_in(&dir);

        match command {
            CliCommand::List(args) => args.run(manifest_path).await,
            CliCommand::Missing(args) => args.run(manifest_path).await,
            CliCommand::Save(args) => args.run(manifest_path).await,
        }
    }
}
