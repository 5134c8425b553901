use std::fmt;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAMES: [&str; 2] = ["amd.config.toml", "amd.config.json"];

#[derive(Debug, Clone)]
pub struct FileSystemError {
    pub message: String,
}

impl fmt::Display for FileSystemError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", &self.message)
    }
}

impl std::error::Error for FileSystemError {}

pub type Result<T> = std::result::Result<T, FileSystemError>;

pub fn read_file_content<P: AsRef<Path>>(path: P) -> Result<String> {
    let mut file = fs::File::open(path.as_ref()).map_err(|_| FileSystemError {
        message: format!("Could not open path: {}", path.as_ref().display()),
    })?;
    let mut content = String::new();
    file.read_to_string(&mut content)
        .map_err(|_| FileSystemError {
            message: format!("Could not read path: {}", path.as_ref().display()),
        })?;
    Ok(content)
}

/// Walk upwards from `start` and return the first config file found.
/// TOML wins over JSON when both live in the same directory.
pub fn find_config_file<P: AsRef<Path>>(start: P) -> Option<PathBuf> {
    let mut current_dir = Some(start.as_ref());

    while let Some(dir) = current_dir {
        if let Some(found) = CONFIG_FILE_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|candidate| candidate.is_file())
        {
            return Some(found);
        }
        current_dir = dir.parent();
    }

    None
}
