use std::path::Path;

use crate::config::AmdConfig;
use crate::filesystem::{find_config_file, read_file_content, CONFIG_FILE_NAMES};

use super::error::{ParsingError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Json,
}

impl ConfigFormat {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        match path.as_ref().extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Ok(Self::Toml),
            Some("json") => Ok(Self::Json),
            _ => Err(ParsingError::UnsupportedFormat(
                path.as_ref().display().to_string(),
            )),
        }
    }
}

pub fn parse_config_str(content: &str, format: ConfigFormat) -> Result<AmdConfig> {
    let config: AmdConfig = match format {
        ConfigFormat::Toml => toml::from_str(content)?,
        ConfigFormat::Json => serde_json::from_str(content)?,
    };
    Ok(config)
}

pub fn parse_config<P: AsRef<Path>>(filepath: P) -> Result<AmdConfig> {
    let format = ConfigFormat::from_path(filepath.as_ref())?;
    let content = read_file_content(filepath.as_ref())?;
    let config = parse_config_str(&content, format)?;
    log::debug!(
        "Parsed {} aliases, {} packages and {} shims from {}",
        config.paths.len(),
        config.packages.len(),
        config.shim.len(),
        filepath.as_ref().display()
    );
    Ok(config)
}

/// Parses the nearest `amd.config.toml` or `amd.config.json` at or above `start`.
pub fn find_and_parse_config<P: AsRef<Path>>(start: P) -> Result<AmdConfig> {
    match find_config_file(start.as_ref()) {
        Some(config_path) => parse_config(config_path),
        None => Err(ParsingError::ConfigNotFound {
            start: start.as_ref().display().to_string(),
            names: CONFIG_FILE_NAMES.join(" or "),
        }),
    }
}

pub fn dump_config_to_toml(config: &AmdConfig) -> Result<String> {
    Ok(toml::to_string(config)?)
}

pub fn dump_config_to_json(config: &AmdConfig) -> Result<String> {
    Ok(serde_json::to_string_pretty(config)?)
}
