use thiserror::Error;

use crate::filesystem::FileSystemError;

#[derive(Error, Debug)]
pub enum ParsingError {
    #[error("Filesystem error: {0}")]
    Filesystem(#[from] FileSystemError),
    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),
    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("No {names} found in '{start}' or any parent directory")]
    ConfigNotFound { start: String, names: String },
    #[error("Unsupported config format: '{0}'. Expected a .toml or .json file.")]
    UnsupportedFormat(String),
}

pub type Result<T> = std::result::Result<T, ParsingError>;
