use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use walkdir::WalkDir;

use crate::catalog::{CatalogConfig, IntentDef, is_yaml_path};
use crate::diagnostics::{Warning, WarningKind, warning};

#[derive(Debug, Clone)]
pub struct ScanConfig {
    pub dir: PathBuf,
    pub strict: bool,
}

pub struct ScanOutcome {
    pub config: CatalogConfig,
    pub warnings: Vec<Warning>,
}

/// An intent definition file holds either a single intent or a list of them.
#[derive(Deserialize)]
#[serde(untagged)]
enum IntentFile {
    Many(Vec<IntentDef>),
    One(IntentDef),
}

/// Builds a catalog config from a directory of `.json`/`.yaml`/`.yml` intent
/// definition files. Files are visited in relative-path order so the catalog
/// order, and with it score tie-breaking, does not depend on the filesystem.
/// Matching options keep their defaults; the CLI can override them.
pub fn scan_intents(config: &ScanConfig) -> Result<ScanOutcome> {
    let mut warnings: Vec<Warning> = Vec::new();

    let mut files: Vec<PathBuf> = WalkDir::new(&config.dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| has_catalog_extension(path))
        .collect();
    files.sort();

    let mut intents: Vec<IntentDef> = Vec::new();
    let mut seen: BTreeMap<String, String> = BTreeMap::new();

    for path in files {
        let rel_path = path
            .strip_prefix(&config.dir)
            .with_context(|| format!("failed to strip prefix for {}", path.display()))?
            .to_string_lossy()
            .replace('\\', "/");

        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(err) => {
                if config.strict {
                    bail!("failed to read {}: {err}", path.display());
                }
                warnings.push(warning(
                    WarningKind::InvalidFile,
                    format!("failed to read {rel_path}: {err}"),
                ));
                continue;
            }
        };

        let parsed = if is_yaml_path(&path) {
            serde_yaml_bw::from_str::<IntentFile>(&contents).map_err(|err| err.to_string())
        } else {
            serde_json::from_str::<IntentFile>(&contents).map_err(|err| err.to_string())
        };

        let defs = match parsed {
            Ok(IntentFile::Many(defs)) => defs,
            Ok(IntentFile::One(def)) => vec![def],
            Err(err) => {
                if is_well_formed(&path, &contents) {
                    warnings.push(warning(
                        WarningKind::IgnoredFile,
                        format!("non-intent file ignored: {rel_path}"),
                    ));
                    continue;
                }
                if config.strict {
                    bail!("invalid intent definition in {}: {err}", path.display());
                }
                warnings.push(warning(
                    WarningKind::InvalidFile,
                    format!("invalid intent definition in {rel_path}: {err}"),
                ));
                continue;
            }
        };

        for def in defs {
            if let Some(existing) = seen.get(&def.name) {
                let message = format!(
                    "duplicate intent '{}' in {rel_path}; first defined in {existing}",
                    def.name
                );
                if config.strict {
                    bail!(message);
                }
                warnings.push(warning(WarningKind::DuplicateIntent, message));
                continue;
            }
            seen.insert(def.name.clone(), rel_path.clone());
            intents.push(def);
        }
    }

    if intents.is_empty() {
        if config.strict {
            bail!(
                "no intent definition files found in {}",
                config.dir.display()
            );
        }
        warnings.push(warning(
            WarningKind::NoIntents,
            "no intent definition files found".to_string(),
        ));
    }

    Ok(ScanOutcome {
        config: CatalogConfig {
            version: 1,
            options: Default::default(),
            scorer: Default::default(),
            intents,
        },
        warnings,
    })
}

fn is_well_formed(path: &Path, contents: &str) -> bool {
    if is_yaml_path(path) {
        serde_yaml_bw::from_str::<serde_json::Value>(contents).is_ok()
    } else {
        serde_json::from_str::<serde_json::Value>(contents).is_ok()
    }
}

fn has_catalog_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
        || is_yaml_path(path)
}
