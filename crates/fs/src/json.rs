use derive_more::{Display, Error};
use miette::Diagnostic;
use serde::{de::DeserializeOwned, Serialize};
use std::{
    io,
    path::{Path, PathBuf},
};

/// Error type of [`save_json`].
#[derive(Debug, Display, Error, Diagnostic)]
#[non_exhaustive]
pub enum SaveJsonError {
    #[display("Failed to serialize JSON: {_0}")]
    #[diagnostic(code(have_it_fs::serialize_json))]
    Serialize(#[error(source)] serde_json::Error),

    #[display("Failed to write to file at {file_path:?}: {error}")]
    #[diagnostic(code(have_it_fs::write_file))]
    WriteFile {
        file_path: PathBuf,
        #[error(source)]
        error: io::Error,
    },
}

/// Error type of [`load_json`].
#[derive(Debug, Display, Error, Diagnostic)]
#[non_exhaustive]
pub enum LoadJsonError {
    #[display("Failed to read file at {file_path:?}: {error}")]
    #[diagnostic(code(have_it_fs::read_file))]
    ReadFile {
        file_path: PathBuf,
        #[error(source)]
        error: io::Error,
    },

    #[display("Failed to parse JSON from {file_path:?}: {error}")]
    #[diagnostic(code(have_it_fs::parse_json))]
    ParseJson {
        file_path: PathBuf,
        #[error(source)]
        error: serde_json::Error,
    },
}

/// Write `value` to `file_path` as JSON indented by 2 spaces, followed by an empty line.
///
/// Existing content of the file is replaced.
pub async fn save_json<Value>(file_path: &Path, value: &Value) -> Result<(), SaveJsonError>
where
    Value: Serialize + ?Sized,
{
    let mut text = serde_json::to_string_pretty(value).map_err(SaveJsonError::Serialize)?;
    text.push_str("\n\n");
    tracing::trace!(?file_path, "save_json");
    tokio::fs::write(file_path, text)
        .await
        .map_err(|error| SaveJsonError::WriteFile { file_path: file_path.to_path_buf(), error })
}

/// Read `file_path` and parse its content as JSON.
pub async fn load_json<Value>(file_path: &Path) -> Result<Value, LoadJsonError>
where
    Value: DeserializeOwned,
{
    tracing::trace!(?file_path, "load_json");
    let text = tokio::fs::read_to_string(file_path)
        .await
        .map_err(|error| LoadJsonError::ReadFile { file_path: file_path.to_path_buf(), error })?;
    serde_json::from_str(&text)
        .map_err(|error| LoadJsonError::ParseJson { file_path: file_path.to_path_buf(), error })
}
