//! Test Fixtures Module
//!
//! - Telephony recording fixtures (programmatically generated)
//! - Speech API response bodies

// Not every integration test uses every fixture
#![allow(dead_code)]

pub mod recording_fixtures;

pub use recording_fixtures::*;
