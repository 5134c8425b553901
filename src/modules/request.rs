use std::fmt;
use std::str::FromStr;

use super::error::RequestParseError;

pub const PLUGIN_SEPARATOR: char = '!';

/// A module request as written by callers: `name` or `plugin!name`.
///
/// Only the first `!` separates the plugin. Anything after a later `!` stays in `name`
/// as plugin arguments (`text!tpl.html!strip`) and is not part of the resource path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModuleRequest {
    pub plugin: Option<String>,
    pub name: String,
}

impl ModuleRequest {
    pub fn plain(name: &str) -> Self {
        Self {
            plugin: None,
            name: name.to_string(),
        }
    }

    pub fn with_plugin(plugin: &str, name: &str) -> Self {
        Self {
            plugin: Some(plugin.to_string()),
            name: name.to_string(),
        }
    }

    /// The module path of the resource, without plugin arguments.
    pub fn resource(&self) -> &str {
        self.name
            .split_once(PLUGIN_SEPARATOR)
            .map_or(self.name.as_str(), |(resource, _)| resource)
    }

    pub fn arguments(&self) -> Option<&str> {
        self.name
            .split_once(PLUGIN_SEPARATOR)
            .map(|(_, arguments)| arguments)
    }
}

impl FromStr for ModuleRequest {
    type Err = RequestParseError;

    fn from_str(request: &str) -> Result<Self, Self::Err> {
        if request.is_empty() {
            return Err(RequestParseError::Empty);
        }

        match request.split_once(PLUGIN_SEPARATOR) {
            None => Ok(Self::plain(request)),
            Some(("", _)) => Err(RequestParseError::EmptyPlugin(request.to_string())),
            Some((_, name)) if name.is_empty() || name.starts_with(PLUGIN_SEPARATOR) => {
                Err(RequestParseError::EmptyResource(request.to_string()))
            }
            Some((plugin, name)) => Ok(Self::with_plugin(plugin, name)),
        }
    }
}

impl fmt::Display for ModuleRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.plugin {
            Some(plugin) => write!(f, "{}{}{}", plugin, PLUGIN_SEPARATOR, self.name),
            None => write!(f, "{}", self.name),
        }
    }
}
