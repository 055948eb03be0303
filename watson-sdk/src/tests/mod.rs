//! Unit tests for the Watson SDK
//!
//! This module contains tests for the shared pipeline and for every service client.

pub mod config_tests;
pub mod core_tests;
pub mod discovery_mock_tests;
pub mod language_translator_mock_tests;
pub mod personality_insights_mock_tests;
pub mod text_to_speech_mock_tests;
