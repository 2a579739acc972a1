use have_it_package_manifest::{
    Dependency, DependencyGroup, PackageManifest, PackageManifestError, MANIFEST_FILE_NAME,
};
use std::path::{Path, PathBuf};

/// Path of the manifest file inside `dir`.
pub fn manifest_path_in(dir: &Path) -> PathBuf {
    dir.join(MANIFEST_FILE_NAME)
}

/// Groups whose dependencies are required: `dependencies` always, `devDependencies`
/// only outside of production mode.
pub fn dependency_groups(production: bool) -> impl Iterator<Item = DependencyGroup> {
    std::iter::once(DependencyGroup::Prod).chain((!production).then_some(DependencyGroup::Dev))
}

/// Load the manifest at `manifest_path` and list the dependencies it requires.
///
/// Entries of `dependencies` come first, followed by those of `devDependencies` unless
/// `production` is `true`. Each group keeps the order of the manifest.
pub async fn list_declared_dependencies(
    manifest_path: PathBuf,
    production: bool,
) -> Result<Vec<Dependency>, PackageManifestError> {
    let manifest = PackageManifest::load(manifest_path).await?;
    let declared = manifest.dependencies(dependency_groups(production))?;
    tracing::debug!(production, ?declared, "found dependencies declared in package.json");
    Ok(declared)
}

/// Record `missing` into `dependency_group` of the manifest at `manifest_path`.
///
/// Existing entries are kept. An entry with the same name gets its version overwritten.
pub async fn save_missing_as_dependencies(
    manifest_path: PathBuf,
    missing: &[Dependency],
    dependency_group: DependencyGroup,
) -> Result<(), PackageManifestError> {
    let mut manifest = PackageManifest::load(manifest_path).await?;
    manifest.add_dependencies(missing, dependency_group)?;
    tracing::debug!(?dependency_group, ?missing, path = ?manifest.path(), "save dependencies");
    manifest.save().await
}
