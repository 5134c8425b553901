pub mod diagnostics;
pub mod format;

use std::fmt;

pub use diagnostics::{Diagnostic, DiagnosticDetails, Severity};
pub use format::DiagnosticFormatter;

use crate::config::AmdConfig;
use crate::modules::ModuleRequest;
use crate::resolvers::ModuleResolver;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckReport {
    pub diagnostics: Vec<Diagnostic>,
}

impl CheckReport {
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|diagnostic| diagnostic.severity == Severity::Error)
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|diagnostic| diagnostic.severity == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|diagnostic| diagnostic.severity == Severity::Warning)
    }

    pub fn render(&self, formatter: &DiagnosticFormatter) -> String {
        formatter.format_diagnostics(&self.diagnostics)
    }
}

impl fmt::Display for CheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render(&DiagnosticFormatter::default()))
    }
}

fn resolve_request_str(resolver: &ModuleResolver, request: &str) -> Result<(), String> {
    let parsed = request
        .parse::<ModuleRequest>()
        .map_err(|err| err.to_string())?;
    resolver
        .resolve_request(&parsed)
        .map(|_| ())
        .map_err(|err| err.to_string())
}

fn resolver_warnings(resolver: &ModuleResolver) -> Vec<Diagnostic> {
    let config = resolver.config();
    let mut warnings = Vec::new();

    for name in config.package_names() {
        if resolver.alias_shadows_package(name) {
            warnings.push(Diagnostic::warning(DiagnosticDetails::AliasShadowsPackage {
                name: name.to_string(),
            }));
        }
    }

    for shim in &config.shim {
        for dependency in &shim.deps {
            if let Err(reason) = resolve_request_str(resolver, dependency) {
                warnings.push(Diagnostic::warning(
                    DiagnosticDetails::UnresolvedShimDependency {
                        module: shim.module.clone(),
                        dependency: dependency.clone(),
                        reason,
                    },
                ));
            }
        }
    }

    for request in &config.deps {
        if let Err(reason) = resolve_request_str(resolver, request) {
            warnings.push(Diagnostic::warning(DiagnosticDetails::UnresolvedDep {
                request: request.clone(),
                reason,
            }));
        }
    }

    warnings
}

/// Validates `config` without failing. Warnings are only computed for valid configs,
/// since they need a working resolver.
pub fn check(config: &AmdConfig) -> CheckReport {
    match ModuleResolver::try_new(config) {
        Ok(resolver) => CheckReport {
            diagnostics: resolver_warnings(&resolver),
        },
        Err(err) => CheckReport {
            diagnostics: err
                .issues
                .into_iter()
                .map(|issue| Diagnostic::error(DiagnosticDetails::Configuration(issue)))
                .collect(),
        },
    }
}
