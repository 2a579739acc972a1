use crate::cli_args::dependency_options::DeclaredDependencyOptions;
use clap::Args;
use have_it_bookkeeper::{is_production_mode, list_declared_dependencies};
use miette::Context;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// --prod
    #[clap(flatten)]
    pub dependency_options: DeclaredDependencyOptions,
}

impl ListArgs {
    /// Execute the subcommand.
    pub async fn run(self, manifest_path: PathBuf) -> miette::Result<()> {
        let production = self.dependency_options.production(is_production_mode);
        let declared = list_declared_dependencies(manifest_path, production)
            .await
            .wrap_err("listing the dependencies declared in package.json")?;
        for dependency in declared {
            println!("{dependency}");
        }
        Ok(())
    }
}
