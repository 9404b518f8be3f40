use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "note-triage";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Score at or above which a note is triaged as High urgency.
pub const DEFAULT_HIGH_THRESHOLD: i32 = 70;

/// Score at or above which a note is triaged as Medium urgency.
pub const DEFAULT_MEDIUM_THRESHOLD: i32 = 30;

/// Slider bounds offered by the UI layer. The core accepts values
/// outside these ranges without validation.
pub const HIGH_THRESHOLD_RANGE: (i32, i32) = (50, 90);
pub const MEDIUM_THRESHOLD_RANGE: (i32, i32) = (10, 50);

/// Directory holding the bundled lexicon JSON, resolved relative to the
/// crate root. Deployments may point `Lexicon::load` elsewhere.
pub fn default_resources_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("resources")
}

pub fn default_log_filter() -> &'static str {
    "note_triage=info"
}
