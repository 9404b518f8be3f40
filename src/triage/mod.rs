//! Keyword-driven triage of free-text clinical notes.
//!
//! A single, stateless pipeline: jargon normalization, urgency scoring,
//! topic and sentiment classification, key-phrase extraction, and
//! narrative generation. The only shared state is the read-only
//! [`lexicon::Lexicon`], injected once at process start, so identical
//! inputs always produce identical results. No LLM calls — pure keyword
//! matching.

pub mod classify;
pub mod engine;
pub mod keyphrase;
pub mod lexicon;
pub mod narrative;
pub mod normalize;
pub mod services;
pub mod types;
pub mod urgency;
