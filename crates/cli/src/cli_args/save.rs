use clap::Args;
use have_it_bookkeeper::save_missing_as_dependencies;
use have_it_package_manifest::{Dependency, DependencyGroup};
use miette::Context;
use pipe_trait::Pipe;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct SaveArgs {
    /// Dependencies to record, each written as <name>@<version>.
    #[clap(required = true)]
    pub dependencies: Vec<Dependency>,

    /// Record the dependencies as devDependencies.
    #[clap(short = 'D', long)]
    pub save_dev: bool,
}

impl SaveArgs {
    /// Execute the subcommand.
    pub async fn run(self, manifest_path: PathBuf) -> miette::Result<()> {
        let SaveArgs { dependencies, save_dev } = self;
        let dependency_group = save_dev.pipe(DependencyGroup::from_dev_flag);
        save_missing_as_dependencies(manifest_path, &dependencies, dependency_group)
            .await
            .wrap_err("saving dependencies to package.json")
    }
}
