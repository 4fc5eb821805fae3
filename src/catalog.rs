use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use crate::normalize::normalize;
use crate::scorer::ScorerKind;

const BUILTIN_CATALOG: &str = include_str!("../assets/intents.json");

/// Raw intent definition as it appears in catalog files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntentDef {
    pub name: String,
    #[serde(default)]
    pub examples: Vec<String>,
    #[serde(default)]
    pub responses: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchOptions {
    /// Best score must be strictly greater than this to count as a match.
    #[serde(default = "default_threshold")]
    pub threshold: f64,
    /// Reply used when no intent clears the threshold.
    #[serde(default = "default_fallback")]
    pub fallback: String,
    /// How many ranked candidates verbose output shows.
    #[serde(default = "default_top_k")]
    pub top_k: usize,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            fallback: default_fallback(),
            top_k: default_top_k(),
        }
    }
}

fn default_threshold() -> f64 {
    0.4
}

fn default_fallback() -> String {
    "Sorry, I didn't understand that. Can you rephrase?".to_string()
}

fn default_top_k() -> usize {
    3
}

/// On-disk catalog format (JSON or YAML, chosen by file extension).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default)]
    pub version: u8,
    #[serde(default)]
    pub options: MatchOptions,
    #[serde(default)]
    pub scorer: ScorerKind,
    #[serde(default)]
    pub intents: Vec<IntentDef>,
}

impl CatalogConfig {
    /// The embedded STEM Inspires catalog definition.
    pub fn builtin() -> Result<Self> {
        serde_json::from_str(BUILTIN_CATALOG).context("parse builtin intent catalog")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents =
            fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
        if is_yaml_path(path) {
            serde_yaml_bw::from_str(&contents)
                .with_context(|| format!("parse catalog YAML {}", path.display()))
        } else {
            serde_json::from_str(&contents)
                .with_context(|| format!("parse catalog JSON {}", path.display()))
        }
    }
}

pub fn is_yaml_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"))
}

/// A single intent, with its examples normalized once at build time.
///
/// `normalized_examples` stays 1:1 with `examples` (same length, same order);
/// the private field plus build-time construction keeps that invariant.
#[derive(Debug, Clone)]
pub struct Intent {
    pub name: String,
    pub examples: Vec<String>,
    normalized_examples: Vec<String>,
    pub responses: Vec<String>,
}

impl Intent {
    pub fn normalized_examples(&self) -> &[String] {
        &self.normalized_examples
    }
}

/// The immutable intent table plus its matching options. Built once, never
/// mutated afterwards, safe to share across threads.
#[derive(Debug, Clone)]
pub struct Catalog {
    intents: Vec<Intent>,
    options: MatchOptions,
    scorer: ScorerKind,
}

impl Catalog {
    /// Builds and validates a catalog. An intent with an empty name, no
    /// examples, or no responses is a configuration error and fails here
    /// rather than surfacing at matching time.
    pub fn from_config(config: CatalogConfig) -> Result<Self> {
        let mut intents = Vec::with_capacity(config.intents.len());
        for def in config.intents {
            if def.name.trim().is_empty() {
                bail!("catalog contains an intent with an empty name");
            }
            if def.examples.is_empty() {
                bail!("intent '{}' has no examples", def.name);
            }
            if def.responses.is_empty() {
                bail!("intent '{}' has no responses", def.name);
            }
            let normalized_examples = def.examples.iter().map(|ex| normalize(ex)).collect();
            intents.push(Intent {
                name: def.name,
                examples: def.examples,
                normalized_examples,
                responses: def.responses,
            });
        }

        Ok(Self {
            intents,
            options: config.options,
            scorer: config.scorer,
        })
    }

    /// The embedded STEM Inspires catalog.
    pub fn builtin() -> Result<Self> {
        Self::from_config(CatalogConfig::builtin()?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        Self::from_config(CatalogConfig::load(path)?)
    }

    pub fn intents(&self) -> &[Intent] {
        &self.intents
    }

    pub fn options(&self) -> &MatchOptions {
        &self.options
    }

    pub fn scorer(&self) -> ScorerKind {
        self.scorer
    }
}
