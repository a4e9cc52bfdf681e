//! Test Module
//!
//! Cross-module test suite for TaskSense core.
//!
//! ## Test Categories
//! - `analysis_tests`: category, priority, sentiment and suggestion behavior through the public API
//! - `property_tests`: invariants that must hold for arbitrary input text
//! - `config_tests`: environment configuration and lexicon files

pub mod config_tests;
