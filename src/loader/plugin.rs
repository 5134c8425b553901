use std::fmt;

use crate::resolvers::{script_url, LoadLocation};

/// A loader plugin handles the resource half of `plugin!resource` requests.
/// The plugin's own script is resolved and loaded like any other module.
pub trait LoaderPlugin: fmt::Debug {
    fn name(&self) -> &str;

    /// The URL the plugin fetches `resource` from.
    fn resource_url(&self, resource: &LoadLocation) -> String {
        resource.to_url()
    }
}

/// A plugin that fetches its resources as source files with a fixed extension,
/// like `cs!main` reading `main.coffee`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionPlugin {
    name: String,
    extension: String,
}

impl ExtensionPlugin {
    pub fn new(name: &str, extension: &str) -> Self {
        Self {
            name: name.to_string(),
            extension: extension.trim_start_matches('.').to_string(),
        }
    }
}

impl LoaderPlugin for ExtensionPlugin {
    fn name(&self) -> &str {
        &self.name
    }

    fn resource_url(&self, resource: &LoadLocation) -> String {
        script_url(resource.path(), &self.extension)
    }
}
