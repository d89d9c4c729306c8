// file: src/text/segment.rs
// description: sentence and word segmentation
// reference: https://docs.rs/unicode-segmentation

use lazy_static::lazy_static;
use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

lazy_static! {
    // Words keep inner hyphens and apostrophes ("follow-up", "don't");
    // every other non-space character is a token of its own.
    static ref WORD_TOKEN: Regex = Regex::new(
        r"\w+(?:[-'’]\w+)*|[^\w\s]"
    ).expect("WORD_TOKEN regex is valid");
}

/// Splits text on UAX #29 sentence boundaries.
///
/// Line breaks alone do not end a sentence; only terminal punctuation does.
/// Sentences are trimmed and those without alphanumerics dropped, so text
/// without any boundary comes back as a single sentence.
pub fn split_sentences(text: &str) -> Vec<&str> {
    // Same byte length, so boundaries map straight back onto `text`
    let unwrapped = text.replace(['\n', '\r'], " ");

    unwrapped
        .split_sentence_bound_indices()
        .map(|(start, sentence)| text[start..start + sentence.len()].trim())
        .filter(|s| s.chars().any(char::is_alphanumeric))
        .collect()
}

pub fn word_tokens(sentence: &str) -> Vec<&str> {
    WORD_TOKEN
        .find_iter(sentence)
        .map(|m| m.as_str())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_sentences_basic() {
        let sentences = split_sentences("Fix the login bug. Then deploy to staging! Done?");
        assert_eq!(
            sentences,
            vec!["Fix the login bug.", "Then deploy to staging!", "Done?"]
        );
    }

    #[test]
    fn test_split_sentences_without_boundary() {
        let sentences = split_sentences("  no punctuation at all  ");
        assert_eq!(sentences, vec!["no punctuation at all"]);
    }

    #[test]
    fn test_line_breaks_do_not_split() {
        let sentences = split_sentences("hi team\nplease send the deck\nthanks");
        assert_eq!(sentences, vec!["hi team\nplease send the deck\nthanks"]);

        let sentences = split_sentences("Fix the build.\nThen ship it.");
        assert_eq!(sentences, vec!["Fix the build.", "Then ship it."]);
    }

    #[test]
    fn test_split_sentences_empty() {
        assert!(split_sentences("").is_empty());
        assert!(split_sentences("   \n\t").is_empty());
    }

    #[test]
    fn test_word_tokens_separates_punctuation() {
        let tokens = word_tokens("Please review the report by Friday @alice.");
        assert_eq!(
            tokens,
            vec!["Please", "review", "the", "report", "by", "Friday", "@", "alice", "."]
        );
    }

    #[test]
    fn test_word_tokens_keeps_contractions_and_hyphens() {
        let tokens = word_tokens("Don't skip the follow-up");
        assert_eq!(tokens, vec!["Don't", "skip", "the", "follow-up"]);
    }
}
