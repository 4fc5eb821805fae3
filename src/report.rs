use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::diagnostics::{Warning, WarningKind, warning};
use crate::matcher::IntentMatcher;
use crate::normalize::normalize;

#[derive(Debug, Serialize)]
pub struct CatalogReport {
    pub version: u8,
    pub generated_at: String,
    pub source: String,
    pub intents: Vec<IntentSummary>,
    pub warnings: Vec<Warning>,
    pub diagnostics: Diagnostics,
}

#[derive(Debug, Serialize, Clone)]
pub struct IntentSummary {
    pub name: String,
    pub example_count: usize,
    pub response_count: usize,
}

#[derive(Debug, Serialize, Clone)]
pub struct Diagnostics {
    pub intent_count: usize,
    pub example_count: usize,
    pub response_count: usize,
    pub warnings_count: usize,
}

/// Data-quality audit over a built catalog. None of these findings block
/// matching; they flag configurations that will confuse it.
pub fn audit_catalog(matcher: &IntentMatcher) -> Vec<Warning> {
    let mut warnings = Vec::new();
    let intents = matcher.catalog().intents();

    if intents.is_empty() {
        warnings.push(warning(
            WarningKind::NoIntents,
            "catalog has no intents; every input will get the fallback reply",
        ));
        return warnings;
    }

    let mut seen_names: BTreeMap<&str, usize> = BTreeMap::new();
    for intent in intents {
        *seen_names.entry(intent.name.as_str()).or_insert(0) += 1;
    }
    for (name, count) in seen_names {
        if count > 1 {
            warnings.push(warning(
                WarningKind::DuplicateIntent,
                format!("intent name '{name}' is defined {count} times"),
            ));
        }
    }

    let mut seen_examples: BTreeMap<String, &str> = BTreeMap::new();
    for intent in intents {
        for (example, normalized) in intent.examples.iter().zip(intent.normalized_examples()) {
            if normalized.is_empty() {
                warnings.push(warning(
                    WarningKind::EmptyExample,
                    format!(
                        "example {example:?} of intent '{}' normalizes to nothing",
                        intent.name
                    ),
                ));
                continue;
            }
            match seen_examples.get(normalized.as_str()) {
                Some(owner) if *owner != intent.name => {
                    warnings.push(warning(
                        WarningKind::SharedExample,
                        format!(
                            "intents '{owner}' and '{}' share the example {example:?}",
                            intent.name
                        ),
                    ));
                }
                Some(_) => {}
                None => {
                    seen_examples.insert(normalized.clone(), intent.name.as_str());
                }
            }
        }
    }

    // Feed every example back through the matcher; an example that selects a
    // different intent than the one it belongs to means the example sets are
    // not distinct enough to discriminate.
    for intent in intents {
        for example in &intent.examples {
            if normalize(example).is_empty() {
                continue;
            }
            let result = matcher.find_best_intent(example);
            match result.intent {
                Some(selected) if selected.name != intent.name => {
                    warnings.push(warning(
                        WarningKind::MisroutedExample,
                        format!(
                            "example {example:?} of intent '{}' selects intent '{}' (score {:.2})",
                            intent.name, selected.name, result.score
                        ),
                    ));
                }
                Some(_) => {}
                None => {
                    warnings.push(warning(
                        WarningKind::MisroutedExample,
                        format!(
                            "example {example:?} of intent '{}' selects no intent (best score {:.2})",
                            intent.name, result.score
                        ),
                    ));
                }
            }
        }
    }

    warnings
}

pub fn build_report(
    source: impl Into<String>,
    matcher: &IntentMatcher,
    mut warnings: Vec<Warning>,
) -> CatalogReport {
    warnings.extend(audit_catalog(matcher));

    let intents: Vec<IntentSummary> = matcher
        .catalog()
        .intents()
        .iter()
        .map(|intent| IntentSummary {
            name: intent.name.clone(),
            example_count: intent.examples.len(),
            response_count: intent.responses.len(),
        })
        .collect();

    let diagnostics = Diagnostics {
        intent_count: intents.len(),
        example_count: intents.iter().map(|intent| intent.example_count).sum(),
        response_count: intents.iter().map(|intent| intent.response_count).sum(),
        warnings_count: warnings.len(),
    };

    CatalogReport {
        version: 1,
        generated_at: now_rfc3339(),
        source: source.into(),
        intents,
        warnings,
        diagnostics,
    }
}

pub fn write_report(path: &Path, report: &CatalogReport) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    let json = serde_json::to_vec_pretty(report)?;
    let mut file =
        fs::File::create(path).with_context(|| format!("failed to write {}", path.display()))?;
    file.write_all(&json)?;
    file.write_all(b"\n")?;

    Ok(())
}

fn now_rfc3339() -> String {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_else(|_| "1970-01-01T00:00:00Z".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, CatalogConfig};
    use serde_json::json;

    fn matcher_from(value: serde_json::Value) -> IntentMatcher {
        let config: CatalogConfig = serde_json::from_value(value).unwrap();
        IntentMatcher::new(Catalog::from_config(config).unwrap())
    }

    #[test]
    fn clean_catalog_audits_clean() {
        let matcher = matcher_from(json!({
            "intents": [
                { "name": "greeting", "examples": ["hi", "hello"], "responses": ["Hello!"] },
                { "name": "donate", "examples": ["how can i donate"], "responses": ["Donate page."] }
            ]
        }));
        assert!(audit_catalog(&matcher).is_empty());
    }

    #[test]
    fn empty_catalog_flags_no_intents() {
        let matcher = matcher_from(json!({ "intents": [] }));
        let warnings = audit_catalog(&matcher);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].kind, WarningKind::NoIntents);
    }

    #[test]
    fn duplicate_intent_names_are_flagged() {
        let matcher = matcher_from(json!({
            "intents": [
                { "name": "greeting", "examples": ["hi"], "responses": ["a"] },
                { "name": "greeting", "examples": ["good morning"], "responses": ["b"] }
            ]
        }));
        let warnings = audit_catalog(&matcher);
        assert!(
            warnings
                .iter()
                .any(|w| w.kind == WarningKind::DuplicateIntent)
        );
    }

    #[test]
    fn example_normalizing_to_nothing_is_flagged() {
        let matcher = matcher_from(json!({
            "intents": [
                { "name": "odd", "examples": ["?!"], "responses": ["a"] }
            ]
        }));
        let warnings = audit_catalog(&matcher);
        assert!(warnings.iter().any(|w| w.kind == WarningKind::EmptyExample));
    }

    #[test]
    fn shared_example_across_intents_is_flagged_and_misroutes() {
        let matcher = matcher_from(json!({
            "intents": [
                { "name": "first", "examples": ["hello there"], "responses": ["a"] },
                { "name": "second", "examples": ["Hello, there!"], "responses": ["b"] }
            ]
        }));
        let warnings = audit_catalog(&matcher);
        assert!(warnings.iter().any(|w| w.kind == WarningKind::SharedExample));
        // The second intent's example resolves to the first intent.
        assert!(
            warnings
                .iter()
                .any(|w| w.kind == WarningKind::MisroutedExample)
        );
    }

    #[test]
    fn report_totals_add_up() {
        let matcher = matcher_from(json!({
            "intents": [
                { "name": "greeting", "examples": ["hi", "hello"], "responses": ["Hello!"] },
                { "name": "donate", "examples": ["donate"], "responses": ["x", "y"] }
            ]
        }));
        let report = build_report("builtin", &matcher, Vec::new());
        assert_eq!(report.diagnostics.intent_count, 2);
        assert_eq!(report.diagnostics.example_count, 3);
        assert_eq!(report.diagnostics.response_count, 3);
        assert_eq!(report.diagnostics.warnings_count, report.warnings.len());
    }
}
