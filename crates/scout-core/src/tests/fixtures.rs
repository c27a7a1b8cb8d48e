//! Shared fixtures for scout-core tests.

use crate::backend::SearchBackend;
use crate::config::Config;
use crate::provider::SuggestProvider;
use crate::query::build_suggest_uri;
use crate::{Error, Result};
use scout_types::SuggestionResult;
use std::sync::{Arc, Mutex};

/// A backend that records every search call it receives and returns a
/// fixed set of rows.
pub struct RecordingBackend {
    calls: Mutex<Vec<(String, i64, i64)>>,
    rows: Vec<SuggestionResult>,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::with_rows(Vec::new())
    }

    pub fn with_rows(rows: Vec<SuggestionResult>) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            rows,
        }
    }

    pub fn calls(&self) -> Vec<(String, i64, i64)> {
        self.calls.lock().unwrap().clone()
    }
}

impl SearchBackend for RecordingBackend {
    fn search(&self, keyword: &str, limit: i64, action: i64) -> Result<Vec<SuggestionResult>> {
        self.calls
            .lock()
            .unwrap()
            .push((keyword.to_string(), limit, action));
        Ok(self.rows.clone())
    }
}

/// A backend that always fails.
pub struct FailingBackend;

impl SearchBackend for FailingBackend {
    fn search(&self, _keyword: &str, _limit: i64, _action: i64) -> Result<Vec<SuggestionResult>> {
        Err(Error::Backend("search index offline".to_string()))
    }
}

/// Provider over the default config and the given backend.
/// Generic so callers can keep a concrete handle to their mock while
/// the provider owns the coerced trait object.
pub fn provider_with<B: SearchBackend + 'static>(backend: Arc<B>) -> SuggestProvider {
    SuggestProvider::new(Config::default(), backend)
}

/// Suggest URI addressed to the default authority.
pub fn suggest_uri(keyword: &str, limit: Option<i64>, action: Option<i64>) -> String {
    build_suggest_uri(&Config::default().authority, keyword, limit, action)
}
