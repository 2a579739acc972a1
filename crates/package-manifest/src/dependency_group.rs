use strum::IntoStaticStr;

/// Top-level `package.json` field that holds a map of dependency names to versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoStaticStr)]
pub enum DependencyGroup {
    #[strum(serialize = "dependencies")]
    Prod,
    #[strum(serialize = "devDependencies")]
    Dev,
}

impl DependencyGroup {
    /// [`DependencyGroup::Dev`] if `dev` is `true`, otherwise [`DependencyGroup::Prod`].
    pub fn from_dev_flag(dev: bool) -> Self {
        if dev {
            DependencyGroup::Dev
        } else {
            DependencyGroup::Prod
        }
    }

    /// Name of the field in `package.json`.
    pub fn key(self) -> &'static str {
        self.into()
    }
}
