use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Macro to generate enum with as_str + std::str::FromStr pattern
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $s)] $variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = TriageError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(TriageError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }
    };
}

str_enum!(UrgencyLevel {
    Low => "Low",
    Medium => "Medium",
    High => "High",
});

str_enum!(Sentiment {
    Positive => "POSITIVE",
    Negative => "NEGATIVE",
    Neutral => "NEUTRAL",
});

// Medical specialty labels used to route a note. Declaration order here is
// documentation only; the classification tie-break order lives in the
// lexicon's ordered topic list.
str_enum!(Topic {
    Cardiology => "Cardiology",
    Pulmonology => "Pulmonology",
    Neurology => "Neurology",
    Gastroenterology => "Gastroenterology",
    Orthopedics => "Orthopedics",
    GeneralMedicine => "General Medicine",
});

// ---------------------------------------------------------------------------
// UrgencyResult & AnalysisResult
// ---------------------------------------------------------------------------

/// Severity score and tier for one note. Computed fresh per request,
/// never cached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UrgencyResult {
    /// Summed tier weights, clamped to [0, 100].
    pub score: i32,
    pub level: UrgencyLevel,
}

/// Aggregate result of analyzing one clinical note. Immutable after
/// construction; not persisted across requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// One-sentence patient-facing summary.
    pub plain_summary: String,
    pub urgency: UrgencyResult,
    pub action_plan: String,
    pub sentiment: Sentiment,
    pub topic: Topic,
    /// Top key phrases, comma-space joined, most frequent first.
    pub key_phrases: String,
    pub clinical_summary: String,
    /// Jargon-normalized note text; collaborators feed this to the
    /// word-cloud renderer.
    pub normalized_text: String,
}

// ---------------------------------------------------------------------------
// TriageError
// ---------------------------------------------------------------------------

/// Errors at the edges of the core: lexicon resource loading and label
/// parsing. Note analysis itself never fails — malformed input falls
/// through to default classifications.
#[derive(Error, Debug)]
pub enum TriageError {
    #[error("Lexicon resource load failed ({0}): {1}")]
    LexiconLoad(String, String),

    #[error("Lexicon resource parse failed ({0}): {1}")]
    LexiconParse(String, String),

    #[error("Invalid replacement phrase '{0}': {1}")]
    InvalidPhrase(String, String),

    #[error("Invalid {field} value: {value}")]
    InvalidEnum { field: String, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn urgency_level_round_trips() {
        for level in [UrgencyLevel::Low, UrgencyLevel::Medium, UrgencyLevel::High] {
            assert_eq!(UrgencyLevel::from_str(level.as_str()).unwrap(), level);
        }
    }

    #[test]
    fn sentiment_labels_are_uppercase() {
        assert_eq!(Sentiment::Positive.as_str(), "POSITIVE");
        assert_eq!(Sentiment::Negative.as_str(), "NEGATIVE");
        assert_eq!(Sentiment::Neutral.as_str(), "NEUTRAL");
    }

    #[test]
    fn general_medicine_label_has_space() {
        assert_eq!(Topic::GeneralMedicine.as_str(), "General Medicine");
        assert_eq!(
            Topic::from_str("General Medicine").unwrap(),
            Topic::GeneralMedicine
        );
    }

    #[test]
    fn unknown_label_is_rejected() {
        let err = Topic::from_str("Dermatology").unwrap_err();
        assert!(matches!(err, TriageError::InvalidEnum { .. }));
    }

    #[test]
    fn enums_serialize_as_their_labels() {
        assert_eq!(
            serde_json::to_string(&Topic::GeneralMedicine).unwrap(),
            "\"General Medicine\""
        );
        assert_eq!(
            serde_json::to_string(&Sentiment::Neutral).unwrap(),
            "\"NEUTRAL\""
        );
        assert_eq!(
            serde_json::to_string(&UrgencyLevel::High).unwrap(),
            "\"High\""
        );
    }
}
