mod declared;
mod find_missing;
mod production;

pub use declared::{
    dependency_groups, list_declared_dependencies, manifest_path_in, save_missing_as_dependencies,
};
pub use find_missing::find_missing;
pub use production::{is_production_env, is_production_mode, NODE_ENV};

pub use have_it_package_manifest::{Dependency, DependencyGroup, PackageManifestError};
