use std::fmt::Display;

use crate::modules::ValidationIssue;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Error,
    Warning,
}

impl Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "Error"),
            Severity::Warning => write!(f, "Warning"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticDetails {
    Configuration(ValidationIssue),
    AliasShadowsPackage { name: String },
    UnresolvedShimDependency { module: String, dependency: String, reason: String },
    UnresolvedDep { request: String, reason: String },
}

impl Display for DiagnosticDetails {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DiagnosticDetails::Configuration(issue) => write!(f, "{issue}"),
            DiagnosticDetails::AliasShadowsPackage { name } => write!(
                f,
                "Alias '{name}' hides the package of the same name; '{name}' resolves to the alias"
            ),
            DiagnosticDetails::UnresolvedShimDependency {
                module,
                dependency,
                reason,
            } => write!(
                f,
                "Shim for '{module}' depends on '{dependency}', which cannot be resolved: {reason}"
            ),
            DiagnosticDetails::UnresolvedDep { request, reason } => {
                write!(f, "Entry '{request}' in 'deps' cannot be resolved: {reason}")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub details: DiagnosticDetails,
}

impl Diagnostic {
    pub fn error(details: DiagnosticDetails) -> Self {
        Self {
            severity: Severity::Error,
            details,
        }
    }

    pub fn warning(details: DiagnosticDetails) -> Self {
        Self {
            severity: Severity::Warning,
            details,
        }
    }

    pub fn message(&self) -> String {
        self.details.to_string()
    }
}
