use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::packages::PackageConfig;
use super::paths::{deserialize_paths, serialize_paths, PathAlias};
use super::shim::{deserialize_shim, serialize_shim, ShimConfig};
use super::utils::is_empty;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct PluginConfig {
    /// File extension the plugin loads its resources with, without the leading dot.
    pub extension: String,
}

/// Loader configuration. Immutable once handed to a resolver.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct AmdConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_paths",
        serialize_with = "serialize_paths",
        skip_serializing_if = "is_empty"
    )]
    pub paths: Vec<PathAlias>,
    #[serde(
        default,
        deserialize_with = "deserialize_shim",
        serialize_with = "serialize_shim",
        skip_serializing_if = "is_empty"
    )]
    pub shim: Vec<ShimConfig>,
    #[serde(default, skip_serializing_if = "is_empty")]
    pub packages: Vec<PackageConfig>,
    #[serde(default, skip_serializing_if = "is_empty")]
    pub deps: Vec<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub plugins: BTreeMap<String, PluginConfig>,
}

impl AmdConfig {
    pub fn with_base_url(self, base_url: &str) -> Self {
        Self {
            base_url: Some(base_url.to_string()),
            ..self
        }
    }

    pub fn with_path(mut self, name: &str, location: &str) -> Self {
        self.paths.push(PathAlias::new(name, location));
        self
    }

    pub fn with_shim(mut self, shim: ShimConfig) -> Self {
        self.shim.push(shim);
        self
    }

    pub fn with_package(mut self, package: PackageConfig) -> Self {
        self.packages.push(package);
        self
    }

    pub fn with_deps(mut self, deps: &[&str]) -> Self {
        self.deps.extend(deps.iter().map(|dep| dep.to_string()));
        self
    }

    pub fn with_plugin(mut self, name: &str, extension: &str) -> Self {
        self.plugins.insert(
            name.to_string(),
            PluginConfig {
                extension: extension.to_string(),
            },
        );
        self
    }

    pub fn package_names(&self) -> Vec<&str> {
        self.packages
            .iter()
            .map(|package| package.name.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config() {
        let config: AmdConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, AmdConfig::default());
    }

    #[test]
    fn test_rejects_unknown_key() {
        let result = serde_json::from_str::<AmdConfig>(r#"{"base_url": "static/scripts"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_camel_case_keys() {
        let config: AmdConfig = serde_json::from_str(
            r#"{"baseUrl": "static/scripts", "deps": ["cs!main"], "plugins": {"cs": {"extension": "coffee"}}}"#,
        )
        .unwrap();
        assert_eq!(
            config,
            AmdConfig::default()
                .with_base_url("static/scripts")
                .with_deps(&["cs!main"])
                .with_plugin("cs", "coffee")
        );
    }

    #[test]
    fn test_default_config_serializes_empty() {
        assert_eq!(serde_json::to_string(&AmdConfig::default()).unwrap(), "{}");
    }
}
