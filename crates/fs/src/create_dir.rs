use derive_more::{Display, Error};
use miette::Diagnostic;
use std::{
    io,
    path::{Path, PathBuf},
};

/// Error type of [`create_dir_all`].
#[derive(Debug, Display, Error, Diagnostic)]
#[display("Failed to create the directory at {dir:?}: {error}")]
#[diagnostic(code(have_it_fs::create_dir))]
pub struct CreateDirError {
    pub dir: PathBuf,
    #[error(source)]
    pub error: io::Error,
}

/// Create `dir` and all of its missing ancestors.
///
/// A directory that already exists is not an error.
pub async fn create_dir_all(dir: &Path) -> Result<(), CreateDirError> {
    tracing::trace!(?dir, "create_dir_all");
    tokio::fs::create_dir_all(dir)
        .await
        .map_err(|error| CreateDirError { dir: dir.to_path_buf(), error })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[tokio::test]
    async fn should_create_missing_ancestors() {
        let root = tempdir().unwrap();
        let dir = root.path().join("a").join("b").join("c");
        create_dir_all(&dir).await.unwrap();
        assert!(dir.is_dir());
    }

    #[tokio::test]
    async fn existing_directory_is_not_an_error() {
        let root = tempdir().unwrap();
        create_dir_all(root.path()).await.unwrap();
        create_dir_all(root.path()).await.unwrap();
        assert!(root.path().is_dir());
    }

    #[tokio::test]
    async fn should_fail_when_an_ancestor_is_a_file() {
        let root = tempdir().unwrap();
        let file = root.path().join("file");
        fs::write(&file, "not a directory").unwrap();
        let dir = file.join("child");
        let error = create_dir_all(&dir).await.expect_err("ancestor is a file");
        assert_eq!(error.dir, dir);
    }
}
