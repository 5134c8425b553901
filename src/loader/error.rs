use thiserror::Error;

use crate::modules::RequestParseError;
use crate::resolvers::ResolveError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Failed to load '{url}': {message}")]
pub struct ScriptLoadError {
    pub url: String,
    pub message: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BootstrapError {
    #[error("Invalid entry module.\n{0}")]
    Request(#[from] RequestParseError),
    #[error("Failed to resolve entry module.\n{0}")]
    Resolve(#[from] ResolveError),
    #[error("Script loader failed.\n{0}")]
    Load(#[from] ScriptLoadError),
    #[error("No entry module given and 'deps' is empty")]
    NoEntryPoint,
}
