//! Test modules for Wordhoard.
//!
//! This module contains the crate-internal test suites:
//! - Configuration loading and validation
//! - Error types and reporting
//! - Property-based tests for the prefix dictionary
//! - Scripted interactive sessions

pub mod session_tests;
