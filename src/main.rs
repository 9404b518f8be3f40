use std::io::Read;

use note_triage::{config, DefaultTriageEngine, TriageEngine};

/// Analyze one note and print the result as JSON.
///
/// Usage: note-triage [NOTE_TEXT] [HIGH_THRESHOLD] [MEDIUM_THRESHOLD]
/// With no NOTE_TEXT argument, the note is read from stdin.
fn main() {
    note_triage::init_tracing();
    tracing::info!("{} v{}", config::APP_NAME, config::APP_VERSION);

    let args: Vec<String> = std::env::args().skip(1).collect();

    let high = args
        .get(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(config::DEFAULT_HIGH_THRESHOLD);
    let medium = args
        .get(2)
        .and_then(|s| s.parse().ok())
        .unwrap_or(config::DEFAULT_MEDIUM_THRESHOLD);

    let note = match args.first() {
        Some(text) => text.clone(),
        None => {
            let mut buf = String::new();
            if std::io::stdin().read_to_string(&mut buf).is_err() {
                buf.clear();
            }
            buf
        }
    };

    let engine = DefaultTriageEngine::default();
    let result = engine.analyze(&note, high, medium);

    println!(
        "{}",
        serde_json::to_string_pretty(&result).expect("AnalysisResult serializes")
    );
}
