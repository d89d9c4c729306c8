// file: src/extractor/actions.rs
// description: action item extraction from free text using verb detection and keyword heuristics
// reference: sentence segmentation plus part-of-speech tagging

use crate::config::ExtractionConfig;
use crate::extractor::patterns::{extract_deadline, extract_owner};
use crate::models::ActionRecord;
use crate::text::{PosTagger, split_sentences, word_tokens};
use tracing::debug;

pub struct ActionExtractor {
    config: ExtractionConfig,
    tagger: PosTagger,
    keywords: Vec<String>,
}

impl ActionExtractor {
    pub fn new(config: ExtractionConfig) -> Self {
        let keywords = config.keywords.iter().map(|kw| kw.to_lowercase()).collect();

        Self {
            config,
            tagger: PosTagger::new(),
            keywords,
        }
    }

    /// Extracts up to `max_actions` action records, in sentence order.
    ///
    /// Sentences containing a verb form are taken first. Only when none do is
    /// the keyword heuristic consulted, and it yields at most one record: the
    /// first sentence mentioning any keyword. The two paths never mix.
    pub fn extract(&self, text: &str) -> Vec<ActionRecord> {
        let sentences = split_sentences(text);

        let mut actions: Vec<ActionRecord> = sentences
            .iter()
            .filter(|sentence| self.tagger.has_verb(&word_tokens(sentence)))
            .map(|sentence| self.build_record(sentence, self.config.verb_score))
            .collect();

        if actions.is_empty()
            && let Some(sentence) = sentences.iter().find(|s| self.contains_keyword(s))
        {
            debug!("No verb-bearing sentence found; matched keyword heuristic");
            actions.push(self.build_record(sentence, self.config.keyword_score));
        }

        actions.truncate(self.config.max_actions);

        debug!(
            "Extracted {} action(s) from {} sentence(s)",
            actions.len(),
            sentences.len()
        );

        actions
    }

    fn contains_keyword(&self, sentence: &str) -> bool {
        let lower = sentence.to_lowercase();
        self.keywords.iter().any(|kw| lower.contains(kw.as_str()))
    }

    fn build_record(&self, sentence: &str, score: f64) -> ActionRecord {
        ActionRecord::new(
            sentence.trim().to_string(),
            extract_owner(sentence),
            extract_deadline(sentence),
            score,
        )
    }
}

impl Default for ActionExtractor {
    fn default() -> Self {
        Self::new(crate::config::Config::default_config().extraction)
    }
}
