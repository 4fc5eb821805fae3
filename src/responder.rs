use rand::Rng;
use rand::seq::SliceRandom;

use crate::catalog::Catalog;
use crate::matcher::IntentMatcher;

/// Turns an utterance into a reply string: the catalog fallback when nothing
/// clears the threshold, otherwise a uniformly random member of the matched
/// intent's responses. Randomness only ever varies the reply wording; intent
/// selection is deterministic.
pub struct Responder {
    matcher: IntentMatcher,
}

impl Responder {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            matcher: IntentMatcher::new(catalog),
        }
    }

    pub fn matcher(&self) -> &IntentMatcher {
        &self.matcher
    }

    pub fn fallback(&self) -> &str {
        &self.matcher.catalog().options().fallback
    }

    /// Reply using a caller-supplied random source, so tests can seed one.
    pub fn respond_with<R: Rng + ?Sized>(&self, rng: &mut R, input: &str) -> String {
        let result = self.matcher.find_best_intent(input);
        match result.intent {
            Some(intent) => intent
                .responses
                .choose(rng)
                .cloned()
                .unwrap_or_else(|| self.fallback().to_string()),
            None => self.fallback().to_string(),
        }
    }

    /// Reply using the thread-local random source.
    pub fn respond(&self, input: &str) -> String {
        self.respond_with(&mut rand::thread_rng(), input)
    }
}
