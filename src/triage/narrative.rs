use super::types::{Sentiment, Topic, UrgencyLevel};

/// Template builder for the human-readable pipeline outputs. Pure string
/// composition; always produces non-empty text for valid labels.
pub struct NarrativeTemplates;

impl NarrativeTemplates {
    /// Action plan for an urgency level. Medium names the topic team.
    pub fn action_plan(level: &UrgencyLevel, topic: &Topic) -> String {
        match level {
            UrgencyLevel::High => {
                "Immediate senior review and life support measures.".to_string()
            }
            UrgencyLevel::Medium => format!(
                "Urgent: Notify {} team and order relevant tests.",
                topic.as_str(),
            ),
            UrgencyLevel::Low => {
                "Routine: Continue monitoring or plan discharge.".to_string()
            }
        }
    }

    /// Clinician-facing summary embedding topic, urgency, sentiment, and
    /// the recommended action plan.
    pub fn clinical_summary(
        topic: &Topic,
        level: &UrgencyLevel,
        sentiment: &Sentiment,
    ) -> String {
        format!(
            "Patient presents with symptoms suggestive of {} involvement. \
             The clinical condition is assessed as {} urgency with a {} outlook. \
             Recommended management: {}",
            topic.as_str().to_lowercase(),
            level.as_str().to_lowercase(),
            sentiment.as_str().to_lowercase(),
            Self::action_plan(level, topic),
        )
    }

    /// One-sentence plain summary for the note author.
    pub fn plain_summary(topic: &Topic, sentiment: &Sentiment) -> String {
        format!(
            "This note describes a patient with possible {} concerns and {} sentiment.",
            topic.as_str().to_lowercase(),
            sentiment.as_str().to_lowercase(),
        )
    }
}
