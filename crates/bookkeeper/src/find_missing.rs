use have_it_package_manifest::Dependency;
use itertools::Itertools;
use std::collections::HashSet;

/// Find the entries of `declared` whose names are not in `found`.
///
/// The result keeps the order of `declared`. When a missing name is declared more than once,
/// only its first occurrence is returned.
pub fn find_missing<Found>(declared: &[Dependency], found: Found) -> Vec<Dependency>
where
    Found: IntoIterator,
    Found::Item: AsRef<str>,
{
    let found: Vec<Found::Item> = found.into_iter().collect();
    let found: HashSet<&str> = found.iter().map(|name| name.as_ref()).collect();
    let missing = declared
        .iter()
        .filter(|dependency| !found.contains(dependency.name.as_str()))
        .unique_by(|dependency| dependency.name.as_str())
        .cloned()
        .collect::<Vec<_>>();
    tracing::debug!(?missing, "missing dependencies");
    missing
}
