mod dependency;
mod dependency_group;

pub use dependency::{Dependency, ParseDependencyError};
pub use dependency_group::DependencyGroup;

use derive_more::{Display, Error, From};
use have_it_fs::{load_json, save_json, LoadJsonError, SaveJsonError};
use miette::Diagnostic;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

/// File name of the manifest inside a project directory.
pub const MANIFEST_FILE_NAME: &str = "package.json";

#[derive(Debug, Display, Error, From, Diagnostic)]
#[non_exhaustive]
pub enum PackageManifestError {
    #[diagnostic(transparent)]
    LoadJson(LoadJsonError),

    #[diagnostic(transparent)]
    SaveJson(SaveJsonError),

    #[from(ignore)]
    #[display("invalid attribute: {_0}")]
    #[diagnostic(code(have_it_package_manifest::invalid_attribute))]
    InvalidAttribute(#[error(not(source))] String),
}

/// Content of the `package.json` file and its path.
#[derive(Debug)]
pub struct PackageManifest {
    path: PathBuf,
    value: Value,
}

impl PackageManifest {
    /// Load the manifest at `path`.
    pub async fn load(path: PathBuf) -> Result<PackageManifest, PackageManifestError> {
        let value = load_json(&path).await?;
        Ok(PackageManifest { path, value })
    }

    pub fn path(&self) -> &'_ Path {
        &self.path
    }

    pub fn value(&self) -> &'_ Value {
        &self.value
    }

    /// Write the whole manifest back to [`path`](Self::path).
    pub async fn save(&self) -> Result<(), PackageManifestError> {
        save_json(&self.path, &self.value).await?;
        Ok(())
    }

    fn group(
        &self,
        group: DependencyGroup,
    ) -> Result<Option<&'_ Map<String, Value>>, PackageManifestError> {
        match self.value.get(group.key()) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Object(dependencies)) => Ok(Some(dependencies)),
            Some(_) => Err(PackageManifestError::InvalidAttribute(format!(
                "{} attribute should be an object",
                group.key(),
            ))),
        }
    }

    /// List dependencies of `groups`, group after group, each in manifest order.
    ///
    /// A group that is absent from the manifest, or `null`, contributes nothing.
    pub fn dependencies(
        &self,
        groups: impl IntoIterator<Item = DependencyGroup>,
    ) -> Result<Vec<Dependency>, PackageManifestError> {
        let mut result = Vec::new();
        for group in groups {
            let Some(dependencies) = self.group(group)? else {
                continue;
            };
            for (name, version) in dependencies {
                let version = version.as_str().ok_or_else(|| {
                    PackageManifestError::InvalidAttribute(format!(
                        "version of {name:?} in {} should be a string",
                        group.key(),
                    ))
                })?;
                result.push(Dependency::new(name, version));
            }
        }
        Ok(result)
    }

    /// Insert `name` into `dependency_group`, or overwrite its version if it is already there.
    ///
    /// A group that is absent from the manifest, or `null`, is replaced by a new object.
    pub fn add_dependency(
        &mut self,
        name: &str,
        version: &str,
        dependency_group: DependencyGroup,
    ) -> Result<(), PackageManifestError> {
        let dependency_type = dependency_group.key();
        let Some(manifest) = self.value.as_object_mut() else {
            return Err(PackageManifestError::InvalidAttribute(
                "package.json should contain an object".to_string(),
            ));
        };
        let field = manifest.entry(dependency_type).or_insert(Value::Null);
        if field.is_null() {
            *field = Value::Object(Map::new());
        }
        let Some(dependencies) = field.as_object_mut() else {
            return Err(PackageManifestError::InvalidAttribute(format!(
                "{dependency_type} attribute should be an object",
            )));
        };
        dependencies.insert(name.to_string(), Value::String(version.to_string()));
        Ok(())
    }

    /// Call [`add_dependency`](Self::add_dependency) for every item of `dependencies`.
    pub fn add_dependencies<'a>(
        &mut self,
        dependencies: impl IntoIterator<Item = &'a Dependency>,
        dependency_group: DependencyGroup,
    ) -> Result<(), PackageManifestError> {
        for Dependency { name, version } in dependencies {
            self.add_dependency(name, version, dependency_group)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pipe_trait::Pipe;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::{fs, io::Write};
    use tempfile::{tempdir, NamedTempFile};

    async fn manifest_from_str(data: &str) -> (NamedTempFile, PackageManifest) {
        let tmp = NamedTempFile::new().unwrap();
        write!(tmp.as_file(), "{data}").unwrap();
        let manifest = tmp.path().to_path_buf().pipe(PackageManifest::load).await.unwrap();
        (tmp, manifest)
    }

    #[tokio::test]
    async fn load_should_fail_if_not_exist() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(MANIFEST_FILE_NAME);
        let error = PackageManifest::load(path).await.expect_err("package.json does not exist");
        assert!(matches!(error, PackageManifestError::LoadJson(LoadJsonError::ReadFile { .. })));
    }

    #[tokio::test]
    async fn dependencies_should_follow_group_then_manifest_order() {
        let data = r#"
        {
            "devDependencies": {
                "mocha": "^9.0.0",
                "chai": "^4.0.0"
            },
            "dependencies": {
                "lodash": "^4.0.0",
                "debug": "^2.0.0"
            }
        }
        "#;
        let (_tmp, manifest) = manifest_from_str(data).await;

        let received = manifest.dependencies([DependencyGroup::Prod, DependencyGroup::Dev]).unwrap();
        let expected = [
            Dependency::new("lodash", "^4.0.0"),
            Dependency::new("debug", "^2.0.0"),
            Dependency::new("mocha", "^9.0.0"),
            Dependency::new("chai", "^4.0.0"),
        ];
        assert_eq!(received, expected);

        let received = manifest.dependencies([DependencyGroup::Prod]).unwrap();
        assert_eq!(received, expected[..2]);
    }

    #[tokio::test]
    async fn dependencies_of_absent_groups_are_empty() {
        let (_tmp, manifest) = manifest_from_str(r#"{ "name": "empty" }"#).await;
        let received =
            manifest.dependencies([DependencyGroup::Prod, DependencyGroup::Dev]).unwrap();
        assert!(received.is_empty());
    }

    #[tokio::test]
    async fn null_groups_are_treated_as_absent() {
        let data = r#"{ "dependencies": null, "devDependencies": null }"#;
        let (_tmp, mut manifest) = manifest_from_str(data).await;
        let received =
            manifest.dependencies([DependencyGroup::Prod, DependencyGroup::Dev]).unwrap();
        assert!(received.is_empty());

        manifest.add_dependency("mocha", "^9.0.0", DependencyGroup::Dev).unwrap();
        let expected = json!({ "dependencies": null, "devDependencies": { "mocha": "^9.0.0" } });
        assert_eq!(manifest.value(), &expected);
    }

    #[tokio::test]
    async fn dependencies_should_reject_invalid_attributes() {
        let (_tmp, manifest) = manifest_from_str(r#"{ "dependencies": ["lodash"] }"#).await;
        let error = manifest.dependencies([DependencyGroup::Prod]).unwrap_err();
        insta::assert_snapshot!(
            error,
            @"invalid attribute: dependencies attribute should be an object"
        );

        let (_tmp, manifest) = manifest_from_str(r#"{ "devDependencies": { "mocha": 9 } }"#).await;
        let error = manifest.dependencies([DependencyGroup::Dev]).unwrap_err();
        insta::assert_snapshot!(
            error,
            @r#"invalid attribute: version of "mocha" in devDependencies should be a string"#
        );
    }

    #[tokio::test]
    async fn should_add_dependency() {
        let dir = tempdir().unwrap();
        let tmp = dir.path().join(MANIFEST_FILE_NAME);
        fs::write(&tmp, "{}").unwrap();
        let mut manifest = PackageManifest::load(tmp.clone()).await.unwrap();
        manifest.add_dependency("fastify", "1.0.0", DependencyGroup::Prod).unwrap();

        let dependencies = manifest.dependencies([DependencyGroup::Prod]).unwrap();
        assert_eq!(dependencies, [Dependency::new("fastify", "1.0.0")]);
        manifest.save().await.unwrap();
        assert!(fs::read_to_string(tmp).unwrap().contains("fastify"));
    }

    #[tokio::test]
    async fn add_dependencies_should_merge_into_existing_group() {
        let data = r#"
        {
            "name": "merge",
            "dependencies": { "lodash": "^4.0.0" },
            "devDependencies": { "a": "1.0.0", "mocha": "^8.0.0" }
        }
        "#;
        let (_tmp, mut manifest) = manifest_from_str(data).await;
        let added = [Dependency::new("mocha", "^9.0.0"), Dependency::new("b", "2.0.0")];
        manifest.add_dependencies(&added, DependencyGroup::Dev).unwrap();

        let expected = json!({
            "name": "merge",
            "dependencies": { "lodash": "^4.0.0" },
            "devDependencies": { "a": "1.0.0", "mocha": "^9.0.0", "b": "2.0.0" },
        });
        assert_eq!(manifest.value(), &expected);
    }

    #[tokio::test]
    async fn add_dependency_should_reject_invalid_attributes() {
        let (_tmp, mut manifest) = manifest_from_str(r#"{ "dependencies": "lodash" }"#).await;
        manifest.add_dependency("lodash", "^4.0.0", DependencyGroup::Prod).unwrap_err();

        let (_tmp, mut manifest) = manifest_from_str(r#"["lodash"]"#).await;
        let error = manifest.add_dependency("lodash", "^4.0.0", DependencyGroup::Prod).unwrap_err();
        insta::assert_snapshot!(error, @"invalid attribute: package.json should contain an object");
    }
}
