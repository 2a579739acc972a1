mod create_dir;
mod json;

pub use create_dir::{create_dir_all, CreateDirError};
pub use json::{load_json, save_json, LoadJsonError, SaveJsonError};
