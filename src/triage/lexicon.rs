use std::path::Path;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::types::{Topic, TriageError};

/// One jargon term or acronym and its plain-language replacement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Replacement {
    pub term: String,
    pub plain: String,
}

/// One urgency tier: a keyword group with its fixed score weight.
/// A keyword contributes its weight once per note (presence, not count).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UrgencyTier {
    pub name: String,
    pub weight: i32,
    pub keywords: Vec<String>,
}

/// One topic with its keyword set. Position in the lexicon's topic list
/// is the tie-break order for classification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicEntry {
    pub topic: Topic,
    pub keywords: Vec<String>,
}

/// Serializable lexicon contents (what ships in lexicon.json).
///
/// Replacement lists are ordered: the normalizer applies them
/// sequentially, jargon first, then acronyms, so later patterns may
/// legitimately match earlier replacement output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexiconSpec {
    pub jargon: Vec<Replacement>,
    pub acronyms: Vec<Replacement>,
    pub topics: Vec<TopicEntry>,
    pub urgency_tiers: Vec<UrgencyTier>,
    pub positive: Vec<String>,
    pub negative: Vec<String>,
}

/// Loaded lexicon with compiled replacement patterns. Built once at
/// process start and injected into the pipeline; never mutated afterward.
#[derive(Debug)]
pub struct Lexicon {
    spec: LexiconSpec,
    replacements: Vec<(Regex, String)>,
}

impl Lexicon {
    /// Compile a lexicon from its contents. Keyword lists are lowercased
    /// here so the scanners can match against lowercased text directly.
    pub fn new(mut spec: LexiconSpec) -> Result<Self, TriageError> {
        for tier in &mut spec.urgency_tiers {
            for k in &mut tier.keywords {
                *k = k.to_lowercase();
            }
        }
        for entry in &mut spec.topics {
            for k in &mut entry.keywords {
                *k = k.to_lowercase();
            }
        }
        for k in spec.positive.iter_mut().chain(spec.negative.iter_mut()) {
            *k = k.to_lowercase();
        }

        let mut replacements = Vec::new();
        for rep in spec.jargon.iter().chain(spec.acronyms.iter()) {
            // Whole-word/phrase match, case-insensitive: "hr" must not
            // match inside "cohort".
            let pattern = format!(r"(?i)\b{}\b", regex::escape(&rep.term));
            let regex = Regex::new(&pattern)
                .map_err(|e| TriageError::InvalidPhrase(rep.term.clone(), e.to_string()))?;
            replacements.push((regex, rep.plain.clone()));
        }

        Ok(Self { spec, replacements })
    }

    /// Load lexicon contents from `lexicon.json` in the given directory.
    pub fn load(resources_dir: &Path) -> Result<Self, TriageError> {
        let path = resources_dir.join("lexicon.json");
        let json = std::fs::read_to_string(&path).map_err(|e| {
            TriageError::LexiconLoad(path.display().to_string(), e.to_string())
        })?;
        let spec: LexiconSpec = serde_json::from_str(&json)
            .map_err(|e| TriageError::LexiconParse("lexicon.json".into(), e.to_string()))?;
        Self::new(spec)
    }

    /// The built-in clinical lexicon (no file I/O).
    pub fn builtin() -> Self {
        Self::new(builtin_spec()).expect("builtin lexicon phrases are valid patterns")
    }

    /// Compiled replacement patterns, in application order.
    pub fn replacements(&self) -> &[(Regex, String)] {
        &self.replacements
    }

    /// Topics in classification tie-break order.
    pub fn topics(&self) -> &[TopicEntry] {
        &self.spec.topics
    }

    /// Urgency tiers in scan order (critical, high, moderate, low).
    pub fn urgency_tiers(&self) -> &[UrgencyTier] {
        &self.spec.urgency_tiers
    }

    pub fn positive_keywords(&self) -> &[String] {
        &self.spec.positive
    }

    pub fn negative_keywords(&self) -> &[String] {
        &self.spec.negative
    }
}

fn replacement(term: &str, plain: &str) -> Replacement {
    Replacement {
        term: term.into(),
        plain: plain.into(),
    }
}

fn keywords(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

/// The built-in lexicon contents.
///
/// Because the scorer and classifiers run on *normalized* text, the tier
/// and topic keyword lists carry the plain-language expansions alongside
/// the clinical forms (e.g. both "tachycardia" and "fast heart rate"), so
/// a note that arrived in jargon still lands in the intended tier and
/// topic after normalization.
pub fn builtin_spec() -> LexiconSpec {
    LexiconSpec {
        jargon: vec![
            replacement("dyspnea", "shortness of breath"),
            replacement("tachycardia", "fast heart rate"),
            replacement("bradycardia", "slow heart rate"),
            replacement("myocardial infarction", "heart attack"),
            replacement("hypertension", "high blood pressure"),
            replacement("hypotension", "low blood pressure"),
            replacement("edema", "swelling"),
            replacement("febrile", "has a fever"),
            replacement("afebrile", "no fever"),
            replacement("hemoptysis", "coughing up blood"),
            replacement("syncope", "fainting"),
            replacement("nausea", "feeling sick"),
            replacement("vomiting", "throwing up"),
            replacement("altered mental status", "confused"),
            replacement("O2 sat", "oxygen saturation"),
            replacement("ECG", "electrocardiogram"),
            replacement("EKG", "electrocardiogram"),
        ],
        acronyms: vec![
            replacement("htn", "hypertension"),
            replacement("sob", "shortness of breath"),
            replacement("cp", "chest pain"),
            replacement("rrr", "regular rate and rhythm"),
            replacement("hr", "heart rate"),
            replacement("bp", "blood pressure"),
            replacement("gi", "gastrointestinal"),
        ],
        topics: vec![
            TopicEntry {
                topic: Topic::Cardiology,
                keywords: keywords(&[
                    "chest pain",
                    "myocardial infarction",
                    "heart attack",
                    "hypertension",
                    "high blood pressure",
                    "bradycardia",
                    "slow heart rate",
                    "tachycardia",
                    "fast heart rate",
                    "ecg",
                    "ekg",
                    "electrocardiogram",
                ]),
            },
            TopicEntry {
                topic: Topic::Pulmonology,
                keywords: keywords(&[
                    "shortness of breath",
                    "dyspnea",
                    "cough",
                    "o2 sat",
                    "oxygen saturation",
                    "cxr",
                    "airway",
                ]),
            },
            TopicEntry {
                topic: Topic::Neurology,
                keywords: keywords(&[
                    "syncope",
                    "fainting",
                    "headache",
                    "altered mental status",
                    "confused",
                    "stroke",
                    "seizure",
                    "neurological",
                ]),
            },
            TopicEntry {
                topic: Topic::Gastroenterology,
                keywords: keywords(&[
                    "nausea",
                    "feeling sick",
                    "vomiting",
                    "throwing up",
                    "abdominal pain",
                    "gi bleed",
                    "gastrointestinal bleed",
                ]),
            },
            TopicEntry {
                topic: Topic::Orthopedics,
                keywords: keywords(&["fracture", "pain", "swelling", "edema"]),
            },
            TopicEntry {
                topic: Topic::GeneralMedicine,
                keywords: keywords(&["fever", "infection", "checkup", "routine", "stable"]),
            },
        ],
        urgency_tiers: vec![
            UrgencyTier {
                name: "critical".into(),
                weight: 50,
                keywords: keywords(&[
                    "unresponsive",
                    "cardiac arrest",
                    "shock",
                    "severe pain",
                    "respiratory distress",
                ]),
            },
            UrgencyTier {
                name: "high".into(),
                weight: 20,
                keywords: keywords(&[
                    "dyspnea",
                    "shortness of breath",
                    "hypoxia",
                    "bradycardia",
                    "slow heart rate",
                    "tachycardia",
                    "fast heart rate",
                    "bleeding",
                ]),
            },
            UrgencyTier {
                name: "moderate".into(),
                weight: 5,
                keywords: keywords(&[
                    "pain",
                    "fever",
                    "infection",
                    "weakness",
                    "vomiting",
                    "throwing up",
                ]),
            },
            UrgencyTier {
                name: "low".into(),
                weight: 1,
                keywords: keywords(&["checkup", "routine", "follow up", "stable"]),
            },
        ],
        positive: keywords(&["stable", "better", "improving", "no complaint", "routine"]),
        negative: keywords(&[
            "pain",
            "severe",
            "critical",
            "worse",
            "unresponsive",
            "bleeding",
        ]),
    }
}
