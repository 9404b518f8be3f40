use std::cmp::Reverse;
use std::collections::{HashMap, HashSet};

use regex::Regex;

/// How many phrases the extractor reports.
const TOP_PHRASES: usize = 5;

/// Frequency-ranked key-phrase extraction over normalized note text.
///
/// Tokens are alphabetic runs of length >= 3, lowercased, with English
/// stop words removed. The top five by descending frequency are joined
/// with ", "; ties keep first-encountered order.
pub struct KeyPhraseExtractor {
    token_pattern: Regex,
    stopwords: HashSet<String>,
}

impl Default for KeyPhraseExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyPhraseExtractor {
    pub fn new() -> Self {
        let stopwords = stop_words::get(stop_words::LANGUAGE::English)
            .into_iter()
            .collect();
        Self {
            token_pattern: Regex::new(r"\b[a-zA-Z]{3,}\b")
                .expect("token pattern is valid"),
            stopwords,
        }
    }

    pub fn extract(&self, text: &str) -> String {
        let mut counts: HashMap<String, usize> = HashMap::new();
        let mut first_seen: Vec<String> = Vec::new();

        for token in self.token_pattern.find_iter(text) {
            let word = token.as_str().to_lowercase();
            if self.stopwords.contains(&word) {
                continue;
            }
            match counts.get_mut(&word) {
                Some(count) => *count += 1,
                None => {
                    counts.insert(word.clone(), 1);
                    first_seen.push(word);
                }
            }
        }

        // Stable sort keeps first-encountered order among equal counts.
        first_seen.sort_by_key(|word| Reverse(counts[word]));
        first_seen
            .iter()
            .take(TOP_PHRASES)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}
