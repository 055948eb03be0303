//! Service-specific client implementations
//!
//! One module per Watson service. Every client wraps a `BaseService` and
//! exposes one async method per API operation.

pub mod assistant;
pub mod common;
pub mod discovery;
pub mod language_translator;
pub mod natural_language_classifier;
pub mod natural_language_understanding;
pub mod personality_insights;
pub mod speech_to_text;
pub mod text_to_speech;
pub mod tone_analyzer;
pub mod visual_recognition;

pub use common::UserAgent;
