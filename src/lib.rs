pub mod config;
pub mod triage;

pub use triage::engine::{DefaultTriageEngine, TriageEngine};
pub use triage::lexicon::Lexicon;
pub use triage::services::{SpeechSynthesizer, Transcriber, WordCloudRenderer};
pub use triage::types::{
    AnalysisResult, Sentiment, Topic, TriageError, UrgencyLevel, UrgencyResult,
};

use tracing_subscriber::EnvFilter;

/// Initialize tracing for binary entry points.
/// `RUST_LOG` takes precedence over the default filter.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();
}
