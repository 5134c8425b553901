pub mod amd;
pub mod packages;
pub mod paths;
pub mod shim;
pub mod utils;

pub use amd::{AmdConfig, PluginConfig};
pub use packages::PackageConfig;
pub use paths::PathAlias;
pub use shim::ShimConfig;
