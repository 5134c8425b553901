use std::collections::{HashMap, HashSet};

use crate::config::ShimConfig;

#[derive(Debug)]
pub struct ShimResolver<'a> {
    shims: HashMap<&'a str, &'a ShimConfig>,
}

impl<'a> ShimResolver<'a> {
    pub fn new(shims: &'a [ShimConfig]) -> Self {
        Self {
            shims: shims
                .iter()
                .map(|shim| (shim.module.as_str(), shim))
                .collect(),
        }
    }

    pub fn get_shim(&self, module: &str) -> Option<&'a ShimConfig> {
        self.shims.get(module).copied()
    }

    pub fn exports_for(&self, module: &str) -> Option<&'a str> {
        self.get_shim(module)
            .and_then(|shim| shim.exports.as_deref())
    }

    /// Transitive shim deps of `module`, each listed after its own deps.
    /// `module` itself is not included.
    pub fn load_order(&self, module: &str) -> Vec<&'a str> {
        let mut order = Vec::new();
        let mut visited = HashSet::new();
        visited.insert(module);
        if let Some(shim) = self.get_shim(module) {
            for dep in &shim.deps {
                self.visit(dep, &mut visited, &mut order);
            }
        }
        order
    }

    fn visit<'s>(&self, module: &'a str, visited: &mut HashSet<&'s str>, order: &mut Vec<&'a str>)
    where
        'a: 's,
    {
        if !visited.insert(module) {
            return;
        }
        if let Some(shim) = self.get_shim(module) {
            for dep in &shim.deps {
                self.visit(dep, visited, order);
            }
        }
        order.push(module);
    }
}
