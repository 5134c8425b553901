use std::collections::HashMap;

use thiserror::Error;

use super::location::LoadLocation;
use super::package::{PackageResolution, PackageResolver};
use super::shim::ShimResolver;
use crate::config::AmdConfig;
use crate::modules::request::{ModuleRequest, PLUGIN_SEPARATOR};
use crate::modules::validation::validate_config;
use crate::modules::ConfigValidationError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("Module name is empty")]
    EmptyModuleName,
    #[error("Module name '{0}' contains an empty path segment")]
    InvalidModuleName(String),
    #[error("'{0}' is a plugin request; resolve it with 'resolve_request'")]
    PluginPrefix(String),
    #[error("Module '{0}' matches no alias, package or shim, and no 'baseUrl' is configured")]
    UnresolvedModule(String),
}

type Result<T> = std::result::Result<T, ResolveError>;

/// A request with both halves resolved: the plugin module (if any) and the resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRequest {
    pub request: ModuleRequest,
    pub plugin: Option<LoadLocation>,
    pub resource: LoadLocation,
}

fn validate_module_name(module: &str) -> Result<()> {
    if module.is_empty() {
        return Err(ResolveError::EmptyModuleName);
    }
    if module.contains(PLUGIN_SEPARATOR) {
        return Err(ResolveError::PluginPrefix(module.to_string()));
    }
    if module.split('/').any(str::is_empty) {
        return Err(ResolveError::InvalidModuleName(module.to_string()));
    }
    Ok(())
}

/// Maps module names to load locations. Built once from a validated [`AmdConfig`].
#[derive(Debug)]
pub struct ModuleResolver<'a> {
    config: &'a AmdConfig,
    aliases: HashMap<&'a str, &'a str>,
    packages: PackageResolver<'a>,
    shims: ShimResolver<'a>,
}

impl<'a> ModuleResolver<'a> {
    pub fn try_new(config: &'a AmdConfig) -> std::result::Result<Self, ConfigValidationError> {
        validate_config(config)?;

        let aliases = config
            .paths
            .iter()
            .map(|alias| (alias.name.as_str(), alias.location.as_str()))
            .collect();

        let resolver = Self {
            config,
            aliases,
            packages: PackageResolver::new(&config.packages),
            shims: ShimResolver::new(&config.shim),
        };

        for name in config.package_names() {
            if resolver.alias_shadows_package(name) {
                log::warn!("Alias '{}' hides the package of the same name", name);
            }
        }

        Ok(resolver)
    }

    pub fn config(&self) -> &'a AmdConfig {
        self.config
    }

    fn resolve_path(&self, module: &str) -> Option<String> {
        if let Some(location) = self.aliases.get(module) {
            log::debug!("'{}' matched alias -> '{}'", module, location);
            return Some(location.to_string());
        }

        if let PackageResolution::Found { package, path } =
            self.packages.resolve_module_path(module)
        {
            log::debug!("'{}' matched package '{}' -> '{}'", module, package.name, path);
            return Some(path);
        }

        None
    }

    fn base_url_path(&self, module: &str) -> Option<String> {
        self.config
            .base_url
            .as_deref()
            .map(|base_url| {
                let path = format!("{}/{}", base_url.trim_end_matches('/'), module);
                log::debug!("'{}' resolved under baseUrl -> '{}'", module, path);
                path
            })
    }

    pub fn resolve(&self, module: &str) -> Result<LoadLocation> {
        validate_module_name(module)?;

        let path = match self
            .resolve_path(module)
            .or_else(|| self.base_url_path(module))
        {
            Some(path) => path,
            // A shim is a rule of its own: with nowhere else to look, the name is the path.
            None if self.shims.get_shim(module).is_some() => module.to_string(),
            None => return Err(ResolveError::UnresolvedModule(module.to_string())),
        };

        Ok(match self.shims.exports_for(module) {
            Some(exports) => LoadLocation::ShimmedGlobal {
                path,
                exports: exports.to_string(),
            },
            None => LoadLocation::Direct(path),
        })
    }

    pub fn resolve_request(&self, request: &ModuleRequest) -> Result<ResolvedRequest> {
        let plugin = request
            .plugin
            .as_deref()
            .map(|plugin| self.resolve(plugin))
            .transpose()?;
        let resource = self.resolve(request.resource())?;

        Ok(ResolvedRequest {
            request: request.clone(),
            plugin,
            resource,
        })
    }

    /// Shimmed modules that must run before `module`, deps first.
    pub fn shim_load_order(&self, module: &str) -> Vec<&'a str> {
        self.shims.load_order(module)
    }

    /// True when an alias with the same name as a package hides that package.
    pub fn alias_shadows_package(&self, name: &str) -> bool {
        self.aliases.contains_key(name) && self.packages.get_package(name).is_some()
    }
}
