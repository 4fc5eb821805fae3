use serde::Serialize;

use crate::report::CatalogReport;

#[derive(Debug, Serialize, Clone)]
pub struct Warning {
    pub kind: WarningKind,
    pub message: String,
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WarningKind {
    InvalidFile,
    IgnoredFile,
    DuplicateIntent,
    EmptyExample,
    SharedExample,
    MisroutedExample,
    NoIntents,
}

pub fn warning(kind: WarningKind, message: impl Into<String>) -> Warning {
    Warning {
        kind,
        message: message.into(),
    }
}

pub fn summarize(report: &CatalogReport) -> String {
    let mut output = String::new();
    output.push_str(&format!("Catalog: {}\n", report.source));
    output.push_str(&format!(
        "Intents: {} ({} examples, {} responses)\n",
        report.diagnostics.intent_count,
        report.diagnostics.example_count,
        report.diagnostics.response_count
    ));

    if report.intents.is_empty() {
        output.push_str("  (none)\n");
    } else {
        for intent in &report.intents {
            output.push_str(&format!(
                "  - {} ({} examples, {} responses)\n",
                intent.name, intent.example_count, intent.response_count
            ));
        }
    }

    output.push_str(&format!("Warnings: {}\n", report.diagnostics.warnings_count));

    for warning in report.warnings.iter().take(5) {
        output.push_str(&render_warning(warning));
        output.push('\n');
    }

    output.trim_end().to_string()
}

pub fn render_warning(warning: &Warning) -> String {
    format!("  - [{}] {}", format_kind(&warning.kind), warning.message)
}

fn format_kind(kind: &WarningKind) -> &'static str {
    match kind {
        WarningKind::InvalidFile => "invalid_file",
        WarningKind::IgnoredFile => "ignored_file",
        WarningKind::DuplicateIntent => "duplicate_intent",
        WarningKind::EmptyExample => "empty_example",
        WarningKind::SharedExample => "shared_example",
        WarningKind::MisroutedExample => "misrouted_example",
        WarningKind::NoIntents => "no_intents",
    }
}
