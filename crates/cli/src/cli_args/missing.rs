use crate::cli_args::dependency_options::DeclaredDependencyOptions;
use clap::Args;
use have_it_bookkeeper::{find_missing, is_production_mode, list_declared_dependencies};
use have_it_diagnostics::tracing;
use have_it_fs::{create_dir_all, save_json};
use have_it_package_manifest::Dependency;
use miette::Context;
use serde_json::{Map, Value};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct MissingArgs {
    /// Names of the dependencies that are already installed.
    pub found: Vec<String>,

    /// --prod
    #[clap(flatten)]
    pub dependency_options: DeclaredDependencyOptions,

    /// Also write the missing dependencies to this file, as a JSON object of names to versions.
    /// Missing parent directories are created.
    #[clap(short, long)]
    pub output: Option<PathBuf>,
}

impl MissingArgs {
    /// Execute the subcommand.
    pub async fn run(self, manifest_path: PathBuf) -> miette::Result<()> {
        let MissingArgs { found, dependency_options, output } = self;
        let production = dependency_options.production(is_production_mode);

        let declared = list_declared_dependencies(manifest_path, production)
            .await
            .wrap_err("listing the dependencies declared in package.json")?;
        let missing = find_missing(&declared, &found);

        for dependency in &missing {
            println!("{dependency}");
        }

        let Some(output) = output else {
            return Ok(());
        };
        tracing::debug!(?output, "write missing dependencies");
        if let Some(parent) = output.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            create_dir_all(parent).await.wrap_err("creating the output directory")?;
        }
        save_json(&output, &missing_to_json(&missing))
            .await
            .wrap_err("writing the missing dependencies")
    }
}

fn missing_to_json(missing: &[Dependency]) -> Map<String, Value> {
    missing
        .iter()
        .map(|Dependency { name, version }| (name.clone(), Value::String(version.clone())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pipe_trait::Pipe;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_missing_to_json() {
        let missing = [Dependency::new("mocha", "^9.0.0"), Dependency::new("@types/node", "18")];
        let received = missing_to_json(&missing).pipe(Value::Object);
        assert_eq!(received, json!({ "mocha": "^9.0.0", "@types/node": "18" }));
    }
}
