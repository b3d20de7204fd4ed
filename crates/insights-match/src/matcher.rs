//! The two-pass entity matcher.

use insights_core::{DetectedEntity, Ticker};
use regex::Regex;
use std::collections::HashSet;
use tracing::debug;

use crate::dictionary::{EntityDictionary, PRIVATE_TICKER};

/// Confidence assigned to a whole-word exact name match.
const EXACT_CONFIDENCE: f64 = 1.0;

/// Confidence assigned to a context-assisted partial match.
const CONTEXT_CONFIDENCE: f64 = 0.7;

/// A compiled dictionary entry.
#[derive(Debug)]
struct CompiledEntry {
    name: String,
    ticker: Ticker,
    /// Whole-word, case-insensitive pattern for the full name.
    name_pattern: Regex,
    /// Same for the first word; only present for multi-word names.
    first_word_pattern: Option<Regex>,
}

/// Dictionary-driven entity matcher.
///
/// Detection is a pure function of (text, dictionary): deterministic, total,
/// and free of I/O. Patterns are compiled once at construction.
#[derive(Debug)]
pub struct EntityMatcher {
    entries: Vec<CompiledEntry>,
    indicators: Vec<String>,
    paragraph_splitter: Regex,
}

impl EntityMatcher {
    /// Compiles a matcher from a dictionary.
    #[must_use]
    pub fn new(dictionary: EntityDictionary) -> Self {
        let entries = dictionary
            .entries()
            .iter()
            .map(|entry| {
                let first_word_pattern = entry
                    .name
                    .split_once(' ')
                    .map(|(first, _)| word_pattern(first));
                CompiledEntry {
                    name: entry.name.clone(),
                    ticker: entry.ticker.clone(),
                    name_pattern: word_pattern(&entry.name),
                    first_word_pattern,
                }
            })
            .collect();

        let indicators = dictionary
            .indicators()
            .iter()
            .map(|i| i.to_lowercase())
            .collect();

        Self {
            entries,
            indicators,
            paragraph_splitter: Regex::new(r"\n{2,}").expect("Failed to compile paragraph splitter"),
        }
    }

    /// Compiles a matcher over the built-in dictionary.
    #[must_use]
    pub fn with_builtin_dictionary() -> Self {
        Self::new(EntityDictionary::builtin())
    }

    /// Detects company entities in `text`.
    ///
    /// Runs the exact-name pass over the whole text, then the
    /// context-assisted pass per paragraph, records at most one entity per
    /// ticker (first match in dictionary order wins), and drops entries
    /// mapped to the private-company sentinel. Never fails; text without
    /// matches yields an empty list.
    #[must_use]
    pub fn detect(&self, text: &str) -> Vec<DetectedEntity> {
        let mut entities: Vec<DetectedEntity> = Vec::new();
        let mut seen: HashSet<&str> = HashSet::new();

        // Pass 1: whole-word exact name matches anywhere in the text.
        for entry in &self.entries {
            if seen.contains(entry.ticker.as_str()) {
                continue;
            }
            if entry.name_pattern.is_match(text) {
                seen.insert(entry.ticker.as_str());
                entities.push(DetectedEntity::new(
                    entry.name.clone(),
                    entry.ticker.clone(),
                    EXACT_CONFIDENCE,
                ));
            }
        }

        // Pass 2: first-word matches for multi-word names, but only inside
        // paragraphs that carry an indicator keyword. Single-word names are
        // excluded here; their first word is too generic on its own.
        for paragraph in self.paragraph_splitter.split(text) {
            let lowered = paragraph.to_lowercase();
            if !self.indicators.iter().any(|i| lowered.contains(i)) {
                continue;
            }

            for entry in &self.entries {
                let Some(first_word) = &entry.first_word_pattern else {
                    continue;
                };
                if seen.contains(entry.ticker.as_str()) {
                    continue;
                }
                if first_word.is_match(paragraph) {
                    seen.insert(entry.ticker.as_str());
                    entities.push(DetectedEntity::new(
                        entry.name.clone(),
                        entry.ticker.clone(),
                        CONTEXT_CONFIDENCE,
                    ));
                }
            }
        }

        entities.retain(|entity| entity.ticker.as_str() != PRIVATE_TICKER);

        debug!(count = entities.len(), "Detected entities");
        entities
    }
}

impl Default for EntityMatcher {
    fn default() -> Self {
        Self::with_builtin_dictionary()
    }
}

/// Compiles a whole-word, case-insensitive pattern for a literal name.
fn word_pattern(name: &str) -> Regex {
    Regex::new(&format!(r"(?i)\b{}\b", regex::escape(name)))
        .expect("Failed to compile dictionary pattern")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::DictionaryEntry;

    fn matcher() -> EntityMatcher {
        EntityMatcher::with_builtin_dictionary()
    }

    #[test]
    fn test_detects_company_names() {
        let text = "Google has announced a new product today. \
                    Amazon is also working on similar technology.";
        let entities = matcher().detect(text);

        assert_eq!(entities.len(), 2);
        assert_eq!(entities[0].name, "Google");
        assert_eq!(entities[0].ticker.as_str(), "GOOG");
        assert_eq!(entities[0].confidence, 1.0);
        assert_eq!(entities[1].name, "Amazon");
        assert_eq!(entities[1].ticker.as_str(), "AMZN");
        assert_eq!(entities[1].confidence, 1.0);
    }

    #[test]
    fn test_detects_executives() {
        let entities = matcher().detect("Tim Cook announced the new iPhone today.");

        assert_eq!(entities.len(), 1);
        assert_eq!(entities[0].ticker.as_str(), "AAPL");
        assert_eq!(entities[0].confidence, 1.0);
    }

    #[test]
    fn test_detects_subsidiaries() {
        let entities = matcher().detect("AWS has launched a new cloud service.");

        assert_eq!(entities.len(), 1);
        assert_eq!(entities[0].ticker.as_str(), "AMZN");
    }

    #[test]
    fn test_excludes_private_companies() {
        let entities = matcher().detect("SpaceX launched a new rocket today.");
        assert!(entities.is_empty());
    }

    #[test]
    fn test_empty_text_yields_empty_result() {
        assert!(matcher().detect("").is_empty());
    }

    #[test]
    fn test_indicators_alone_yield_nothing() {
        let entities = matcher().detect("The company reported strong quarterly earnings.");
        assert!(entities.is_empty());
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let entities = matcher().detect("NETFLIX and tesla both moved today.");

        let tickers: Vec<_> = entities.iter().map(|e| e.ticker.as_str()).collect();
        assert_eq!(tickers, vec!["NFLX", "TSLA"]);
    }

    #[test]
    fn test_requires_word_boundaries() {
        // "Fordham" must not match the "Ford" entry
        let entities = matcher().detect("Fordham University opened admissions.");
        assert!(entities.is_empty());
    }

    #[test]
    fn test_one_entity_per_ticker() {
        // "JPMorgan" and "JP Morgan" both map to JPM; only the first
        // dictionary hit is kept
        let entities = matcher().detect("JPMorgan and JP Morgan are the same institution.");

        assert_eq!(entities.len(), 1);
        assert_eq!(entities[0].name, "JPMorgan");
        assert_eq!(entities[0].ticker.as_str(), "JPM");
    }

    #[test]
    fn test_context_pass_matches_first_word_of_multiword_names() {
        // No exact "Home Depot" mention, but an indicator-bearing paragraph
        // contains the first word
        let text = "Home improvement stores saw strong quarterly revenue.\n\n\
                    Unrelated closing paragraph.";
        let entities = matcher().detect(text);

        assert_eq!(entities.len(), 1);
        assert_eq!(entities[0].name, "Home Depot");
        assert_eq!(entities[0].ticker.as_str(), "HD");
        assert_eq!(entities[0].confidence, 0.7);
    }

    #[test]
    fn test_context_pass_needs_an_indicator() {
        // Same first-word hit, but the paragraph has no indicator keyword
        let entities = matcher().detect("Home improvement is a popular hobby.");
        assert!(entities.is_empty());
    }

    #[test]
    fn test_context_pass_skips_single_word_names() {
        // "AcmeLabs" defeats the whole-word exact pass, and single-word
        // entries are not eligible for the context pass even with an
        // indicator present
        let dict = EntityDictionary::new(
            vec![DictionaryEntry::new("Acme", "ACME")],
            vec!["earnings".to_string()],
        );
        let entities = EntityMatcher::new(dict).detect("Earnings were up at AcmeLabs.");

        assert!(entities.is_empty());
    }

    #[test]
    fn test_exact_match_beats_context_match() {
        // "Morgan Stanley" appears exactly; the context pass must not add a
        // second MS entity from another paragraph
        let text = "Morgan Stanley reported results.\n\nMorgan analysts expect market growth.";
        let entities = matcher().detect(text);

        let ms: Vec<_> = entities
            .iter()
            .filter(|e| e.ticker.as_str() == "MS")
            .collect();
        assert_eq!(ms.len(), 1);
        assert_eq!(ms[0].confidence, 1.0);
    }

    #[test]
    fn test_insertion_order_is_pass_one_then_pass_two() {
        let text = "Apple shipped new hardware.\n\n\
                    Goldman analysts reported revenue growth for the sector.";
        let entities = matcher().detect(text);

        assert_eq!(entities.len(), 2);
        assert_eq!(entities[0].ticker.as_str(), "AAPL");
        assert_eq!(entities[0].confidence, 1.0);
        assert_eq!(entities[1].name, "Goldman Sachs");
        assert_eq!(entities[1].confidence, 0.7);
    }
}
