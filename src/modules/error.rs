use itertools::Itertools;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    #[error("'baseUrl' is set but empty")]
    EmptyBaseUrl,
    #[error("Alias with an empty name in 'paths'")]
    EmptyAliasName,
    #[error("Alias '{0}' is defined more than once in 'paths'")]
    DuplicateAlias(String),
    #[error("Alias '{0}' has an empty location")]
    EmptyAliasLocation(String),
    #[error("Package #{index} in 'packages' has an empty name")]
    EmptyPackageName { index: usize },
    #[error("Package '{0}' is defined more than once in 'packages'")]
    DuplicatePackage(String),
    #[error("Package '{0}' has an empty location")]
    EmptyPackageLocation(String),
    #[error("Package '{0}' has an empty main module")]
    EmptyPackageMain(String),
    #[error("Shim with an empty module name")]
    EmptyShimModule,
    #[error("Module '{0}' is shimmed more than once")]
    DuplicateShim(String),
    #[error("Shim for '{0}' has an empty 'exports' symbol")]
    EmptyShimExports(String),
    #[error("Circular shim dependency between: {}", .0.iter().map(|m| format!("'{m}'")).join(", "))]
    ShimCycle(Vec<String>),
    #[error("'{0}' is configured with a plugin prefix; use the plain module name")]
    PluginPrefixInName(String),
    #[error("'{0}' contains an empty path segment")]
    InvalidName(String),
    #[error("Shim for '{module}' lists an invalid dependency '{dep}'")]
    InvalidShimDep { module: String, dep: String },
    #[error("Plugin '{0}' has an empty extension")]
    EmptyPluginExtension(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error(
    "Invalid loader configuration:\n{}",
    .issues.iter().map(|issue| format!("  - {issue}")).join("\n")
)]
pub struct ConfigValidationError {
    pub issues: Vec<ValidationIssue>,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RequestParseError {
    #[error("Module request is empty")]
    Empty,
    #[error("Module request '{0}' has an empty plugin name")]
    EmptyPlugin(String),
    #[error("Module request '{0}' has an empty resource name")]
    EmptyResource(String),
}
