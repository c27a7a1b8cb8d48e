//! Test module for scout-core
//!
//! This module contains tests for:
//! - Suggest-URI parsing and the accepted path pattern
//! - Limit/action normalization policy
//! - Provider dispatch (backend called exactly once with resolved values)
//! - Configuration loading and defaults

mod fixtures;
