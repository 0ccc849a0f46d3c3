//! Tests for advpl-extractors
//!
//! Organized by scanner, plus end-to-end assembly scenarios.

pub mod patterns;
pub mod types;
