pub mod checks;
pub mod config;
pub mod filesystem;
pub mod loader;
pub mod modules;
pub mod parsing;
pub mod resolvers;
#[cfg(test)]
mod tests;

pub use checks::{check, CheckReport};
pub use config::AmdConfig;
pub use loader::{Bootstrap, ExtensionPlugin, LoaderPlugin, ScriptLoad, ScriptLoader};
pub use modules::{ConfigValidationError, ModuleRequest};
pub use parsing::parse_config;
pub use resolvers::{LoadLocation, ModuleResolver, ResolveError};
