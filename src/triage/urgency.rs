use super::lexicon::Lexicon;
use super::types::{UrgencyLevel, UrgencyResult};

/// Score normalized note text against the urgency keyword tiers.
///
/// Each tier keyword found in the text (case-insensitive substring, not
/// word-boundary limited) contributes its tier weight exactly once, no
/// matter how often it recurs. The sum is clamped to [0, 100].
///
/// Thresholds are accepted as-is, including values outside [0, 100] or
/// a medium threshold above the high one: the High branch is checked
/// first and always takes precedence.
pub fn compute_urgency(
    lexicon: &Lexicon,
    text: &str,
    high_threshold: i32,
    medium_threshold: i32,
) -> UrgencyResult {
    let haystack = text.to_lowercase();

    let mut score = 0;
    for tier in lexicon.urgency_tiers() {
        for keyword in &tier.keywords {
            if haystack.contains(keyword.as_str()) {
                score += tier.weight;
            }
        }
    }
    let score = score.clamp(0, 100);

    let level = if score >= high_threshold {
        UrgencyLevel::High
    } else if score >= medium_threshold {
        UrgencyLevel::Medium
    } else {
        UrgencyLevel::Low
    };

    UrgencyResult { score, level }
}
