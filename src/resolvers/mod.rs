pub mod location;
pub mod module;
pub mod package;
pub mod shim;

pub use location::{script_url, LoadLocation};
pub use module::{ModuleResolver, ResolveError, ResolvedRequest};
pub use package::{PackageResolution, PackageResolver};
pub use shim::ShimResolver;
