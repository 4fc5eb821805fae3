use std::collections::HashSet;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::dice;

/// Pairwise string similarity over normalized text, in [0, 1].
pub trait Scorer: Send + Sync {
    fn score(&self, input: &str, example: &str) -> f64;
}

#[derive(ValueEnum, Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScorerKind {
    /// Counted character-bigram Dice coefficient (matches the site chatbot).
    Dice,
    /// Set-based Jaccard over character bigrams. Close to Dice but not
    /// identical; threshold crossings shift slightly.
    Jaccard,
}

impl Default for ScorerKind {
    fn default() -> Self {
        ScorerKind::Dice
    }
}

impl ScorerKind {
    pub fn instantiate(&self) -> Box<dyn Scorer> {
        match self {
            ScorerKind::Dice => Box::new(DiceScorer),
            ScorerKind::Jaccard => Box::new(JaccardScorer),
        }
    }
}

struct DiceScorer;

impl Scorer for DiceScorer {
    fn score(&self, input: &str, example: &str) -> f64 {
        dice::similarity(input, example)
    }
}

struct JaccardScorer;

impl Scorer for JaccardScorer {
    fn score(&self, input: &str, example: &str) -> f64 {
        let a = bigram_set(input);
        let b = bigram_set(example);
        if a.is_empty() && b.is_empty() {
            let strip = |text: &str| text.chars().filter(|c| !c.is_whitespace()).collect::<String>();
            return if strip(input) == strip(example) { 1.0 } else { 0.0 };
        }
        let intersection = a.intersection(&b).count() as f64;
        let union = (a.len() + b.len()) as f64 - intersection;
        if union <= 0.0 { 0.0 } else { intersection / union }
    }
}

fn bigram_set(text: &str) -> HashSet<(char, char)> {
    let chars: Vec<char> = text.chars().filter(|c| !c.is_whitespace()).collect();
    chars.windows(2).map(|pair| (pair[0], pair[1])).collect()
}
