use std::path::Path;
use std::time::Instant;

use super::classify::{classify_sentiment, classify_topic};
use super::keyphrase::KeyPhraseExtractor;
use super::lexicon::Lexicon;
use super::narrative::NarrativeTemplates;
use super::normalize::simplify_jargon;
use super::services::Transcriber;
use super::types::AnalysisResult;
use super::urgency::compute_urgency;

/// The note-analysis pipeline. Deterministic: identical inputs always
/// yield identical results, and no error ever reaches the caller —
/// empty or unmatchable text falls through to the default
/// classifications.
pub trait TriageEngine {
    fn analyze(
        &self,
        note_text: &str,
        high_threshold: i32,
        medium_threshold: i32,
    ) -> AnalysisResult;
}

/// Default implementation holding the injected read-only lexicon.
/// Stateless per call, so one engine can serve parallel requests.
pub struct DefaultTriageEngine {
    lexicon: Lexicon,
    extractor: KeyPhraseExtractor,
}

impl Default for DefaultTriageEngine {
    fn default() -> Self {
        Self::new(Lexicon::builtin())
    }
}

impl DefaultTriageEngine {
    pub fn new(lexicon: Lexicon) -> Self {
        Self {
            lexicon,
            extractor: KeyPhraseExtractor::new(),
        }
    }

    /// Transcribe a voice report through the collaborator seam, then
    /// analyze the transcript. A failed transcription arrives as the
    /// documented placeholder text and is analyzed like any other note.
    pub fn analyze_recording(
        &self,
        transcriber: &dyn Transcriber,
        recording: &Path,
        high_threshold: i32,
        medium_threshold: i32,
    ) -> (String, AnalysisResult) {
        let transcript = transcriber.transcribe(recording);
        let result = self.analyze(&transcript, high_threshold, medium_threshold);
        (transcript, result)
    }
}

impl TriageEngine for DefaultTriageEngine {
    fn analyze(
        &self,
        note_text: &str,
        high_threshold: i32,
        medium_threshold: i32,
    ) -> AnalysisResult {
        let start = Instant::now();

        let normalized = simplify_jargon(&self.lexicon, note_text);

        // Scorer, classifiers, and extractor all read the same
        // normalized text independently.
        let urgency = compute_urgency(&self.lexicon, &normalized, high_threshold, medium_threshold);
        let topic = classify_topic(&self.lexicon, &normalized);
        let sentiment = classify_sentiment(&self.lexicon, &normalized);
        let key_phrases = self.extractor.extract(&normalized);

        let action_plan = NarrativeTemplates::action_plan(&urgency.level, &topic);
        let clinical_summary = NarrativeTemplates::clinical_summary(&topic, &urgency.level, &sentiment);
        let plain_summary = NarrativeTemplates::plain_summary(&topic, &sentiment);

        tracing::info!(
            urgency_score = urgency.score,
            urgency_level = urgency.level.as_str(),
            topic = topic.as_str(),
            sentiment = sentiment.as_str(),
            processing_ms = start.elapsed().as_millis() as u64,
            "Note triage complete"
        );

        AnalysisResult {
            plain_summary,
            urgency,
            action_plan,
            sentiment,
            topic,
            key_phrases,
            clinical_summary,
            normalized_text: normalized,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::config::{DEFAULT_HIGH_THRESHOLD, DEFAULT_MEDIUM_THRESHOLD};
    use crate::triage::services::{SpeechSynthesizer, TRANSCRIPTION_UNAVAILABLE};
    use crate::triage::types::{Sentiment, Topic, UrgencyLevel};

    fn analyze(text: &str) -> AnalysisResult {
        DefaultTriageEngine::default().analyze(
            text,
            DEFAULT_HIGH_THRESHOLD,
            DEFAULT_MEDIUM_THRESHOLD,
        )
    }

    /// Full pipeline over the reference note at thresholds (70, 30).
    #[test]
    fn reference_note_end_to_end() {
        let result = analyze("Patient has chest pain and tachycardia, stable vitals.");

        assert!(result.normalized_text.contains("fast heart rate"));
        assert_eq!(result.urgency.score, 26);
        assert_eq!(result.urgency.level, UrgencyLevel::Low);
        assert_eq!(result.topic, Topic::Cardiology);
        assert_eq!(result.sentiment, Sentiment::Positive);
        assert_eq!(
            result.action_plan,
            "Routine: Continue monitoring or plan discharge."
        );
        assert!(result.plain_summary.contains("cardiology"));
        assert!(result.plain_summary.contains("positive"));
        assert!(result.clinical_summary.contains("low urgency"));
        assert!(result.key_phrases.contains("chest"));
    }

    #[test]
    fn empty_note_yields_default_classifications() {
        for text in ["", "   \n\t  "] {
            let result = analyze(text);
            assert_eq!(result.topic, Topic::GeneralMedicine);
            assert_eq!(result.sentiment, Sentiment::Neutral);
            assert_eq!(result.urgency.score, 0);
            assert_eq!(result.urgency.level, UrgencyLevel::Low);
            assert_eq!(result.key_phrases, "");
            assert!(!result.plain_summary.is_empty());
            assert!(!result.clinical_summary.is_empty());
        }
    }

    #[test]
    fn identical_inputs_yield_identical_results() {
        let engine = DefaultTriageEngine::default();
        let note = "Severe pain and bleeding after fracture, hr 120.";
        let first = engine.analyze(note, 70, 30);
        let second = engine.analyze(note, 70, 30);
        assert_eq!(first, second);
    }

    #[test]
    fn medium_urgency_action_plan_names_topic_team() {
        // "shortness of breath" (20) + "cough" topic match; thresholds
        // picked so 20 lands in the Medium band.
        let result = DefaultTriageEngine::default().analyze(
            "Worsening sob and cough.",
            70,
            15,
        );
        assert_eq!(result.urgency.level, UrgencyLevel::Medium);
        assert_eq!(result.topic, Topic::Pulmonology);
        assert!(result.action_plan.contains("Pulmonology"));
    }

    #[test]
    fn acronym_only_note_is_classified_after_expansion() {
        // "cp" expands to "chest pain", which both classifies the topic
        // and scores the moderate tier.
        let result = analyze("cp on exertion");
        assert_eq!(result.topic, Topic::Cardiology);
        assert_eq!(result.urgency.score, 5);
    }

    struct CannedTranscriber(&'static str);

    impl Transcriber for CannedTranscriber {
        fn transcribe(&self, _recording: &Path) -> String {
            self.0.to_string()
        }
    }

    #[test]
    fn voice_report_flows_through_analysis() {
        let engine = DefaultTriageEngine::default();
        let transcriber = CannedTranscriber("patient found unresponsive");

        // "unresponsive" scores exactly 50 (critical tier), so a high
        // threshold of 40 puts the report in the High band.
        let (transcript, result) = engine.analyze_recording(
            &transcriber,
            Path::new("report.wav"),
            40,
            30,
        );

        assert_eq!(transcript, "patient found unresponsive");
        assert_eq!(result.urgency.score, 50);
        assert_eq!(result.urgency.level, UrgencyLevel::High);
        assert_eq!(result.sentiment, Sentiment::Negative);
    }

    #[test]
    fn failed_transcription_is_analyzed_as_placeholder_text() {
        let engine = DefaultTriageEngine::default();
        let transcriber = CannedTranscriber(TRANSCRIPTION_UNAVAILABLE);

        let (transcript, result) =
            engine.analyze_recording(&transcriber, Path::new("bad.wav"), 70, 30);

        assert_eq!(transcript, TRANSCRIPTION_UNAVAILABLE);
        // Placeholder text matches no clinical keywords.
        assert_eq!(result.topic, Topic::GeneralMedicine);
        assert_eq!(result.urgency.score, 0);
    }

    struct RecordingSynthesizer(std::cell::RefCell<Vec<String>>);

    impl SpeechSynthesizer for RecordingSynthesizer {
        fn synthesize(&self, text: &str) -> Option<PathBuf> {
            self.0.borrow_mut().push(text.to_string());
            Some(PathBuf::from("reply.mp3"))
        }
    }

    /// The voice reply collaborator consumes the clinical summary.
    #[test]
    fn voice_reply_consumes_clinical_summary() {
        let result = analyze("Routine checkup, patient improving.");
        let synthesizer = RecordingSynthesizer(std::cell::RefCell::new(Vec::new()));

        let artifact = synthesizer.synthesize(&result.clinical_summary);

        assert_eq!(artifact, Some(PathBuf::from("reply.mp3")));
        let spoken = synthesizer.0.borrow();
        assert_eq!(spoken.len(), 1);
        assert_eq!(spoken[0], result.clinical_summary);
    }

    #[test]
    fn result_serializes_with_label_strings() {
        let result = analyze("fever and infection for three days");
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["topic"], "General Medicine");
        assert_eq!(json["sentiment"], "NEUTRAL");
        assert_eq!(json["urgency"]["level"], "Low");
        assert_eq!(json["urgency"]["score"], 10);
    }
}
