use console::{style, Term};
use itertools::Itertools;

use super::diagnostics::{Diagnostic, Severity};

pub fn supports_emoji() -> bool {
    let term = Term::stdout();
    term.is_term() && term.features().wants_emoji()
}

pub struct EmojiIcons;

impl EmojiIcons {
    pub const SUCCESS: &'static str = "✅";
    pub const WARNING: &'static str = "⚠️ ";
    pub const FAIL: &'static str = "❌";
}

pub struct SimpleIcons;

impl SimpleIcons {
    pub const SUCCESS: &'static str = "[OK]";
    pub const WARNING: &'static str = "[WARN]";
    pub const FAIL: &'static str = "[FAIL]";
}

#[derive(Debug, Clone, Copy)]
pub struct DiagnosticFormatter {
    emoji: bool,
}

impl Default for DiagnosticFormatter {
    fn default() -> Self {
        Self {
            emoji: supports_emoji(),
        }
    }
}

impl DiagnosticFormatter {
    pub fn plain() -> Self {
        Self { emoji: false }
    }

    fn icon(&self, severity: Option<Severity>) -> &'static str {
        match (severity, self.emoji) {
            (None, true) => EmojiIcons::SUCCESS,
            (None, false) => SimpleIcons::SUCCESS,
            (Some(Severity::Warning), true) => EmojiIcons::WARNING,
            (Some(Severity::Warning), false) => SimpleIcons::WARNING,
            (Some(Severity::Error), true) => EmojiIcons::FAIL,
            (Some(Severity::Error), false) => SimpleIcons::FAIL,
        }
    }

    fn format_diagnostic(&self, diagnostic: &Diagnostic) -> String {
        let icon = self.icon(Some(diagnostic.severity));
        let label = match diagnostic.severity {
            Severity::Error => style(diagnostic.severity.to_string()).red().bold(),
            Severity::Warning => style(diagnostic.severity.to_string()).yellow().bold(),
        };
        format!(
            "{} {}{} {}",
            icon,
            label,
            style(":").yellow().bold(),
            style(diagnostic.message()).yellow(),
        )
    }

    pub fn format_diagnostics(&self, diagnostics: &[Diagnostic]) -> String {
        if diagnostics.is_empty() {
            return format!(
                "{} {}",
                self.icon(None),
                style("All modules resolved!").green()
            );
        }

        // errors first, then declaration order
        diagnostics
            .iter()
            .sorted_by_key(|diagnostic| diagnostic.severity)
            .map(|diagnostic| self.format_diagnostic(diagnostic))
            .join("\n")
    }
}
