use std::collections::{HashMap, HashSet};

use super::error::{BootstrapError, ScriptLoadError};
use super::plugin::{ExtensionPlugin, LoaderPlugin};
use crate::modules::ModuleRequest;
use crate::resolvers::{LoadLocation, ModuleResolver};

type Result<T> = std::result::Result<T, BootstrapError>;

/// One script for the runtime to fetch and execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptLoad {
    /// The request this script satisfies, e.g. `angular` or `cs!main`.
    pub module: String,
    pub url: String,
    /// Global to bind as the module value once the script has run.
    pub exports: Option<String>,
    /// Plugin that turns the fetched resource into a module.
    pub plugin: Option<String>,
}

impl ScriptLoad {
    fn for_module(module: &str, location: &LoadLocation) -> Self {
        Self {
            module: module.to_string(),
            url: location.to_url(),
            exports: location.exports().map(String::from),
            plugin: None,
        }
    }
}

/// The runtime side: fetching and executing scripts happens behind this trait.
pub trait ScriptLoader {
    fn load_script(&mut self, script: &ScriptLoad) -> std::result::Result<(), ScriptLoadError>;
}

/// Collects the scripts instead of loading them.
impl ScriptLoader for Vec<ScriptLoad> {
    fn load_script(&mut self, script: &ScriptLoad) -> std::result::Result<(), ScriptLoadError> {
        self.push(script.clone());
        Ok(())
    }
}

#[derive(Debug, Default)]
struct LoadPlan {
    scripts: Vec<ScriptLoad>,
    seen: HashSet<String>,
    /// Requests being planned; a shim dep like `css!widget` leads back to its own module.
    planning: HashSet<String>,
}

impl LoadPlan {
    fn push(&mut self, script: ScriptLoad) {
        if self.seen.insert(script.module.clone()) {
            self.scripts.push(script);
        }
    }
}

/// Startup trigger. `start` and `start_deps` consume the bootstrap, so it fires once.
#[derive(Debug)]
pub struct Bootstrap<'r, 'a> {
    resolver: &'r ModuleResolver<'a>,
    plugins: HashMap<String, Box<dyn LoaderPlugin>>,
}

impl<'r, 'a> Bootstrap<'r, 'a> {
    /// Registers an [`ExtensionPlugin`] for every entry of the config's `plugins` table.
    pub fn new(resolver: &'r ModuleResolver<'a>) -> Self {
        let plugins = resolver
            .config()
            .plugins
            .iter()
            .map(|(name, plugin)| {
                let plugin: Box<dyn LoaderPlugin> =
                    Box::new(ExtensionPlugin::new(name, &plugin.extension));
                (name.clone(), plugin)
            })
            .collect();

        Self { resolver, plugins }
    }

    pub fn with_plugin<P: LoaderPlugin + 'static>(mut self, plugin: P) -> Self {
        self.plugins
            .insert(plugin.name().to_string(), Box::new(plugin));
        self
    }

    pub fn plan(&self, entry: &str) -> Result<Vec<ScriptLoad>> {
        self.plan_all(&[entry])
    }

    /// Scripts for all `entries` in load order. Each module appears once.
    pub fn plan_all<S: AsRef<str>>(&self, entries: &[S]) -> Result<Vec<ScriptLoad>> {
        let mut plan = LoadPlan::default();
        for entry in entries {
            self.plan_entry(entry.as_ref(), &mut plan)?;
        }
        Ok(plan.scripts)
    }

    fn plan_entry(&self, entry: &str, plan: &mut LoadPlan) -> Result<()> {
        let request: ModuleRequest = entry.parse()?;
        self.plan_request(&request, plan)
    }

    fn plan_request(&self, request: &ModuleRequest, plan: &mut LoadPlan) -> Result<()> {
        let module = request.to_string();
        if plan.seen.contains(&module) || !plan.planning.insert(module.clone()) {
            return Ok(());
        }

        let resolved = self.resolver.resolve_request(request)?;

        if let (Some(plugin_name), Some(plugin_location)) = (&request.plugin, &resolved.plugin) {
            self.plan_shim_deps(plugin_name, plan)?;
            plan.push(ScriptLoad::for_module(plugin_name, plugin_location));
        }

        self.plan_shim_deps(request.resource(), plan)?;

        let url = match request
            .plugin
            .as_deref()
            .and_then(|plugin| self.plugins.get(plugin))
        {
            Some(plugin) => plugin.resource_url(&resolved.resource),
            None => resolved.resource.to_url(),
        };

        plan.push(ScriptLoad {
            module,
            url,
            exports: resolved.resource.exports().map(String::from),
            plugin: request.plugin.clone(),
        });
        Ok(())
    }

    fn plan_shim_deps(&self, module: &str, plan: &mut LoadPlan) -> Result<()> {
        for dep in self.resolver.shim_load_order(module) {
            let request: ModuleRequest = dep.parse()?;
            if request.plugin.is_some() {
                self.plan_request(&request, plan)?;
            } else {
                let location = self.resolver.resolve(dep)?;
                plan.push(ScriptLoad::for_module(dep, &location));
            }
        }
        Ok(())
    }

    fn run(scripts: Vec<ScriptLoad>, loader: &mut dyn ScriptLoader) -> Result<()> {
        for script in &scripts {
            log::debug!("Loading '{}' from '{}'", script.module, script.url);
            loader.load_script(script)?;
        }
        Ok(())
    }

    pub fn start(self, entry: &str, loader: &mut dyn ScriptLoader) -> Result<()> {
        log::info!("Starting entry module '{}'", entry);
        let scripts = self.plan(entry)?;
        Self::run(scripts, loader)
    }

    /// Starts every module listed in the config's `deps`, in order.
    pub fn start_deps(self, loader: &mut dyn ScriptLoader) -> Result<()> {
        let deps = &self.resolver.config().deps;
        if deps.is_empty() {
            return Err(BootstrapError::NoEntryPoint);
        }
        log::info!("Starting configured deps: {}", deps.join(", "));
        let scripts = self.plan_all(deps.as_slice())?;
        Self::run(scripts, loader)
    }
}
