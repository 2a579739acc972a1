use clap::Args;

#[derive(Debug, Args)]
pub struct DeclaredDependencyOptions {
    /// Ignore devDependencies. Without this flag, devDependencies are ignored only if the
    /// NODE_ENV environment variable is set to production.
    #[arg(short = 'P', long)]
    pub prod: bool,
}

impl DeclaredDependencyOptions {
    /// Whether only production dependencies are required.
    ///
    /// `is_production_mode` is only consulted when `--prod` is absent.
    pub fn production<IsProductionMode>(&self, is_production_mode: IsProductionMode) -> bool
    where
        IsProductionMode: FnOnce() -> bool,
    {
        self.prod || is_production_mode()
    }
}
