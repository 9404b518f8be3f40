//! Trait seams for the external collaborators around the triage core:
//! audio transcription in, speech and word-cloud artifacts out. The core
//! never depends on collaborator outputs for its own correctness.

use std::path::{Path, PathBuf};

/// Placeholder a transcriber surfaces when a recording cannot be read or
/// understood. Collaborator failures never propagate as errors; the
/// placeholder flows through the pipeline like any other note text.
pub const TRANSCRIPTION_UNAVAILABLE: &str = "Transcription unavailable or unintelligible.";

/// Speech-to-text boundary. Implementations transcribe a recording or
/// return [`TRANSCRIPTION_UNAVAILABLE`] on failure.
pub trait Transcriber {
    fn transcribe(&self, recording: &Path) -> String;
}

/// Text-to-speech boundary. `None` means synthesis failed and playback
/// is simply absent.
pub trait SpeechSynthesizer {
    fn synthesize(&self, text: &str) -> Option<PathBuf>;
}

/// Word-cloud rendering boundary. `None` for blank text or render
/// failure.
pub trait WordCloudRenderer {
    fn render(&self, text: &str) -> Option<PathBuf>;
}
