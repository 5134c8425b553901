pub mod bootstrap;
pub mod error;
pub mod plugin;

pub use bootstrap::{Bootstrap, ScriptLoad, ScriptLoader};
pub use error::{BootstrapError, ScriptLoadError};
pub use plugin::{ExtensionPlugin, LoaderPlugin};
