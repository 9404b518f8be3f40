use super::lexicon::Lexicon;
use super::types::{Sentiment, Topic};

/// Assign the note to the first topic (in lexicon order) with at least
/// one case-insensitive keyword match. A note matching several topics
/// resolves to the earliest-listed one; no match at all falls back to
/// General Medicine.
pub fn classify_topic(lexicon: &Lexicon, text: &str) -> Topic {
    let haystack = text.to_lowercase();
    lexicon
        .topics()
        .iter()
        .find(|entry| entry.keywords.iter().any(|k| haystack.contains(k.as_str())))
        .map(|entry| entry.topic.clone())
        .unwrap_or(Topic::GeneralMedicine)
}

/// Positive keywords are checked strictly before negative ones: a note
/// containing both "stable" and "pain" is POSITIVE. That precedence is
/// documented behavior, not an accident.
pub fn classify_sentiment(lexicon: &Lexicon, text: &str) -> Sentiment {
    let haystack = text.to_lowercase();
    if lexicon
        .positive_keywords()
        .iter()
        .any(|k| haystack.contains(k.as_str()))
    {
        Sentiment::Positive
    } else if lexicon
        .negative_keywords()
        .iter()
        .any(|k| haystack.contains(k.as_str()))
    {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    }
}
