use assert_cmd::prelude::*;
use command_extra::CommandExtra;
use std::{
    fs,
    path::{Path, PathBuf},
    process::Command,
};
use tempfile::{tempdir, TempDir};

/// Path of the manifest file inside `workspace`.
pub fn manifest_path(workspace: &Path) -> PathBuf {
    workspace.join("package.json")
}

/// `have-it` command running in a temporary workspace.
#[must_use]
pub struct CommandTempCwd {
    pub have_it: Command,
    pub root: TempDir,
    pub workspace: PathBuf,
}

impl CommandTempCwd {
    /// Create a temporary directory, a `workspace` directory inside it, and a `have-it`
    /// command whose current directory is the workspace.
    pub fn init() -> Self {
        let root = tempdir().expect("create temporary directory");
        let workspace = root.path().join("workspace");
        fs::create_dir(&workspace).expect("create temporary workspace for have-it");
        let mut have_it = Command::cargo_bin("have-it")
            .expect("find the have-it binary")
            .with_current_dir(&workspace);
        have_it.env_remove("NODE_ENV").env_remove("TRACE");
        CommandTempCwd { have_it, root, workspace }
    }

    /// Write `content` into the `package.json` of the workspace.
    pub fn with_manifest(self, content: &str) -> Self {
        fs::write(manifest_path(&self.workspace), content).expect("write to package.json");
        self
    }
}

/// Read the `package.json` of `workspace`.
pub fn read_manifest(workspace: &Path) -> String {
    fs::read_to_string(manifest_path(workspace)).expect("read from package.json")
}
