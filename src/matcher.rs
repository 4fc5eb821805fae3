use std::cmp::Ordering;

use crate::catalog::{Catalog, Intent};
use crate::normalize::normalize;
use crate::scorer::Scorer;

/// One intent's standing against an input: the maximum pairwise similarity
/// across that intent's examples, plus the example that produced it.
pub struct IntentScore<'a> {
    pub intent: &'a Intent,
    pub score: f64,
    pub best_example: &'a str,
}

/// Outcome of a single lookup. `intent` is `None` both when the best score
/// fails the threshold and when the catalog is empty; `score` still carries
/// the best similarity seen so callers can tell a near miss from a blank.
pub struct MatchResult<'a> {
    pub intent: Option<&'a Intent>,
    pub score: f64,
    pub example: Option<&'a str>,
}

impl MatchResult<'_> {
    pub fn is_match(&self) -> bool {
        self.intent.is_some()
    }
}

/// Scores free-text input against the catalog. Pure in-memory computation
/// over the immutable catalog; a full linear scan over every example, which
/// is fine at tens of intents with tens of examples each.
pub struct IntentMatcher {
    catalog: Catalog,
    scorer: Box<dyn Scorer>,
}

impl IntentMatcher {
    pub fn new(catalog: Catalog) -> Self {
        let scorer = catalog.scorer().instantiate();
        Self { catalog, scorer }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Every intent scored against the input, best first. The sort is stable,
    /// so on equal scores the intent earlier in the catalog wins. Input that
    /// normalizes to nothing ranks nothing.
    pub fn rank(&self, input: &str) -> Vec<IntentScore<'_>> {
        let normalized = normalize(input);
        if normalized.is_empty() {
            return Vec::new();
        }

        let mut ranked: Vec<IntentScore<'_>> = self
            .catalog
            .intents()
            .iter()
            .map(|intent| {
                let mut best = 0.0;
                let mut best_index = 0;
                for (index, example) in intent.normalized_examples().iter().enumerate() {
                    let score = self.scorer.score(&normalized, example);
                    if score > best {
                        best = score;
                        best_index = index;
                    }
                }
                IntentScore {
                    intent,
                    score: best,
                    best_example: &intent.examples[best_index],
                }
            })
            .collect();

        ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        ranked
    }

    /// The top-ranked intent, if its score is strictly greater than the
    /// catalog threshold. Total over arbitrary string input.
    pub fn find_best_intent(&self, input: &str) -> MatchResult<'_> {
        let ranked = self.rank(input);
        match ranked.first() {
            Some(best) if best.score > self.catalog.options().threshold => MatchResult {
                intent: Some(best.intent),
                score: best.score,
                example: Some(best.best_example),
            },
            Some(best) => MatchResult {
                intent: None,
                score: best.score,
                example: None,
            },
            None => MatchResult {
                intent: None,
                score: 0.0,
                example: None,
            },
        }
    }
}
